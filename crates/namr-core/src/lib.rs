//! Shared types and small pure text utilities used across the namr crates.
//!
//! - [`character`] -- punctuation test and stripping,
//!   word-boundary prefix search
//! - [`case`] -- case folding and acronym detection
//! - [`pos`] -- part-of-speech label helpers
//! - [`token`] -- the [`token::WordToken`] value type

pub mod case;
pub mod character;
pub mod pos;
pub mod token;
