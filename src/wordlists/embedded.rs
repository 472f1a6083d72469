//! Embedded word list
//!
//! The secret-word pool compiled into the binary at build time.

include!(concat!(env!("OUT_DIR"), "/words.rs"));
