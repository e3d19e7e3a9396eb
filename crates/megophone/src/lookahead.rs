//! Read-only context checks around the scan cursor.

/// Characters treated as vowels. Matching is case-sensitive.
const VOWELS: &[&str] = &["a", "e", "i", "o", "u", "y"];

/// A read-only view of the padded word anchored at the scan cursor.
///
/// Rules receive a `Lookahead` and use it to test the text around the
/// current character. Every window read is bounds-checked on both sides: a
/// window that starts before the word or runs past the padding simply does
/// not match.
#[derive(Debug, Clone, Copy)]
pub struct Lookahead<'a> {
    text: &'a [char],
    cursor: usize,
}

impl<'a> Lookahead<'a> {
    pub(crate) fn new(text: &'a [char], cursor: usize) -> Self {
        Self { text, cursor }
    }

    /// Cursor position in the word, counting from 0.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// The character under the cursor, or `None` past the end.
    #[inline]
    #[must_use]
    pub fn current(&self) -> Option<char> {
        self.text.get(self.cursor).copied()
    }

    /// Returns `true` if the text at `cursor + offset` starts with any of
    /// `candidates`.
    ///
    /// With no candidates this is unconditionally `true`. A negative
    /// absolute position, or a window that would read past the end of the
    /// padded text, never matches.
    ///
    /// ```rust
    /// # use megophone::{Decision, DoubleMetaphone, Lookahead, RuleSet, WordContext};
    /// fn probe(la: &Lookahead<'_>, _: &WordContext) -> Decision {
    ///     assert!(la.matches(0, &["ch"]));
    ///     assert!(la.matches(-1, &["xx", "ach"]));
    ///     assert!(!la.matches(-3, &["a"]));
    ///     assert!(la.matches(7, &[]));
    ///     Decision::silent()
    /// }
    /// let mut rules = RuleSet::empty();
    /// rules.insert('c', probe);
    /// DoubleMetaphone::new().with_rules(rules).encode("bach");
    /// ```
    #[must_use]
    pub fn matches(&self, offset: isize, candidates: &[&str]) -> bool {
        if candidates.is_empty() {
            return true;
        }
        let Some(start) = self.cursor.checked_add_signed(offset) else {
            return false;
        };
        let Some(rest) = self.text.get(start..) else {
            return false;
        };
        candidates.iter().any(|candidate| starts_with(rest, candidate))
    }

    /// [`matches`](Self::matches) anchored at the first character of the
    /// word, whatever the cursor position.
    #[must_use]
    pub fn matches_at_start(&self, candidates: &[&str]) -> bool {
        candidates.is_empty() || candidates.iter().any(|c| starts_with(self.text, c))
    }

    /// Whether the character at `cursor + offset` is a lowercase vowel
    /// (`a e i o u y`).
    #[must_use]
    pub fn is_vowel(&self, offset: isize) -> bool {
        self.matches(offset, VOWELS)
    }
}

/// Compares char by char; a candidate longer than `text` never matches.
fn starts_with(text: &[char], candidate: &str) -> bool {
    let mut chars = text.iter();
    candidate
        .chars()
        .all(|expected| chars.next().is_some_and(|&actual| actual == expected))
}
