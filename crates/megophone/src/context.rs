//! Whole-word facts computed once before the scan.

use crate::{lookahead::Lookahead, text::PaddedText};

/// Word-level classification shared by every rule of one scan.
///
/// Built by a single pre-pass over the word and handed to rules by shared
/// reference, so rules never re-derive it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordContext {
    slavo_germanic: bool,
}

impl WordContext {
    pub(crate) fn analyze(text: &PaddedText) -> Self {
        let word = text.word();
        let slavo_germanic = (0..word.len()).any(|idx| {
            Lookahead::new(word, idx).matches(0, &["w", "k", "cz", "witz"])
        });
        Self { slavo_germanic }
    }

    /// Whether the word looks Slavic or Germanic in origin: it contains
    /// `w`, `k`, `cz` or `witz`.
    ///
    /// None of the built-in rules consult this; it is available to custom
    /// rules.
    #[must_use]
    pub fn is_slavo_germanic(&self) -> bool {
        self.slavo_germanic
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("wagner", true)]
    #[case("kowalski", true)]
    #[case("czerny", true)]
    #[case("horowitz", true)]
    #[case("smith", false)]
    #[case("", false)]
    #[case("WAGNER", false)]
    fn slavo_germanic_detection(#[case] word: &str, #[case] expected: bool) {
        let ctx = WordContext::analyze(&PaddedText::new(word));
        assert_eq!(ctx.is_slavo_germanic(), expected);
    }
}
