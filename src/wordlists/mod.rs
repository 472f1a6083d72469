//! Word lists for the game
//!
//! Provides the embedded secret pool and random secret selection.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Pick a secret word uniformly at random
///
/// Returns `None` if the pool is empty.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordgame::wordlists::{WORDS, loader::words_from_slice, random_secret};
///
/// let words = words_from_slice(WORDS);
/// let mut rng = StdRng::seed_from_u64(7);
/// let secret = random_secret(&words, &mut rng).unwrap();
/// assert!(words.contains(secret));
/// ```
pub fn random_secret<'a, R: Rng + ?Sized>(words: &'a [Word], rng: &mut R) -> Option<&'a Word> {
    words.choose(rng)
}
