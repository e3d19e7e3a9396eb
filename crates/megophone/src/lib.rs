//! Double Metaphone style phonetic keys.
//!
//! `megophone` turns a word into a pair of short codes, a *primary* and a
//! *secondary* one, chosen so that words which sound alike get the same codes
//! even when they are spelled differently. The pair is meant for fuzzy name
//! matching: search, deduplication and record linkage.
//!
//! The encoder is a single forward scan over the word. At every position a
//! per-letter [`Rule`] looks at the surrounding text through a [`Lookahead`]
//! and returns a [`Decision`]: what to append to each code and how many extra
//! characters to consume. Rules live in a [`RuleSet`] so the table can grow
//! without touching the scan loop.
//!
//! Only the vowels and the letters `b`, `ç` and `c` carry rules out of the
//! box. Every other character is silent.
//!
//! # Examples
//!
//! ```rust
//! use megophone::double_metaphone;
//!
//! let (primary, secondary) = double_metaphone("church");
//! assert_eq!(primary, "xx");
//! assert_eq!(secondary, "xk");
//! ```
//!
//! The input is matched case-sensitively and is not folded: `"BACH"` encodes
//! to two empty codes.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod trace;

mod code;
mod context;
mod encoder;
mod error;
mod lookahead;
mod options;
mod rules;
mod scanner;
mod text;


use alloc::string::String;

pub use code::{Emission, PhoneticCode};
pub use context::WordContext;
pub use encoder::DoubleMetaphone;
pub use error::ConfigError;
pub use lookahead::Lookahead;
pub use options::EncoderOptions;
pub use rules::{Decision, Rule, RuleSet};
pub use text::{FILLER, PAD_WIDTH};

/// Encodes `word` with the default rule set and returns
/// `(primary, secondary)`.
///
/// This never fails: characters without a rule are skipped, and the empty
/// string encodes to two empty codes.
///
/// ```rust
/// let (primary, secondary) = megophone::double_metaphone("czerny");
/// assert_eq!((primary.as_str(), secondary.as_str()), ("s", "x"));
/// assert_eq!(megophone::double_metaphone(""), (String::new(), String::new()));
/// ```
#[must_use]
pub fn double_metaphone(word: &str) -> (String, String) {
    DoubleMetaphone::new().encode(word).into_pair()
}
