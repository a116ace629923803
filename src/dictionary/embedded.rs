//! Bundled dictionary and common-word table
//!
//! `WORDS` and `COMMON` (with their `_COUNT`s) are generated by `build.rs`
//! from `data/`.

include!(concat!(env!("OUT_DIR"), "/words.rs"));
include!(concat!(env!("OUT_DIR"), "/common.rs"));
