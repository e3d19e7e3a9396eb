//! Input normalization: the word as a padded sequence of characters.

use alloc::vec::Vec;

use bstr::ByteSlice;

/// Character appended after the word so trailing context reads see a space.
pub const FILLER: char = ' ';

/// Number of [`FILLER`] characters appended after the word.
///
/// Rules test a word boundary by matching a space two characters past the
/// cursor, so the pad must reach that far past the last real character.
pub const PAD_WIDTH: usize = 5;

/// The word being encoded, one `char` per position, followed by
/// [`PAD_WIDTH`] filler characters. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PaddedText {
    chars: Vec<char>,
    word_len: usize,
}

impl PaddedText {
    pub(crate) fn new(word: &str) -> Self {
        Self::from_chars(word.chars())
    }

    /// Decodes `bytes` as UTF-8, substituting U+FFFD for invalid sequences.
    pub(crate) fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_chars(bytes.chars())
    }

    fn from_chars(chars: impl Iterator<Item = char>) -> Self {
        let mut buf: Vec<char> = chars.collect();
        let word_len = buf.len();
        buf.extend(core::iter::repeat_n(FILLER, PAD_WIDTH));
        Self {
            chars: buf,
            word_len,
        }
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[char] {
        &self.chars
    }

    /// Length including the filler.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.chars.len()
    }

    /// Length of the word alone.
    #[inline]
    pub(crate) fn word_len(&self) -> usize {
        self.word_len
    }

    #[inline]
    pub(crate) fn get(&self, idx: usize) -> Option<char> {
        self.chars.get(idx).copied()
    }

    /// The word without its filler.
    pub(crate) fn word(&self) -> &[char] {
        &self.chars[..self.word_len()]
    }
}
