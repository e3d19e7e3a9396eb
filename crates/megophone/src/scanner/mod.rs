//! The scan loop: one forward pass over the padded word.
//!
//! States
//! - *start*: skip a silent initial cluster (`gn kn pn wr ps`), then sound
//!   an initial `x` as `s`. The two checks are independent; the `x` check
//!   always looks at the first character of the word and does not move the
//!   cursor.
//! - *scanning*: look up the rule for the character under the cursor, apply
//!   its emission, then its extra skip, then advance by one. Characters
//!   without a rule, the filler included, are silent.
//! - *done*: the cursor has left the padded text; hand back the codes.
//!
//! Invariants
//! - The cursor never moves backwards.
//! - Every emission appends to both codes, so both codes always received
//!   the same number of fragments.
//! - The state lives for exactly one call and is consumed by [`finish`].
//!
//! [`finish`]: ScanState::finish

use crate::{
    code::{CodeBuf, Emission, PhoneticCode},
    context::WordContext,
    lookahead::Lookahead,
    rules::{Decision, RuleSet},
    text::PaddedText,
    trace::trace,
};

/// Word-initial pairs that are pronounced as if the first letter were absent.
const SILENT_INITIAL_CLUSTERS: &[&str] = &["gn", "kn", "pn", "wr", "ps"];

pub(crate) struct ScanState {
    text: PaddedText,
    cursor: usize,
    context: WordContext,
    codes: CodeBuf,
}

impl ScanState {
    pub(crate) fn new(text: PaddedText) -> Self {
        let context = WordContext::analyze(&text);
        Self {
            text,
            cursor: 0,
            context,
            codes: CodeBuf::new(),
        }
    }

    #[inline]
    fn lookahead(&self) -> Lookahead<'_> {
        Lookahead::new(self.text.as_slice(), self.cursor)
    }

    /// Consumes `n` characters on top of the loop's own advance.
    #[inline]
    fn skip(&mut self, n: usize) {
        self.cursor = self.cursor.saturating_add(n);
    }

    fn start(&mut self) {
        if self.lookahead().matches(0, SILENT_INITIAL_CLUSTERS) {
            trace!(cursor = self.cursor, "silent initial cluster");
            self.skip(2);
        }
        if self.lookahead().matches_at_start(&["x"]) {
            self.codes.emit(Emission::Both("s"));
        }
    }

    fn apply(&mut self, decision: Decision) {
        self.codes.emit(decision.emission);
        self.skip(decision.skip);
    }

    /// Runs the whole scan with `rules`.
    pub(crate) fn run(&mut self, rules: &RuleSet) {
        self.start();
        while let Some(ch) = self.text.get(self.cursor) {
            if let Some(rule) = rules.get(ch) {
                let decision = rule(&self.lookahead(), &self.context);
                trace!(cursor = self.cursor, %ch, ?decision, "rule");
                self.apply(decision);
            }
            self.cursor = self.cursor.saturating_add(1);
        }
    }

    pub(crate) fn finish(self) -> PhoneticCode {
        self.codes.finish()
    }

    #[cfg(test)]
    pub(crate) fn test_cursor(&self) -> usize {
        self.cursor
    }

    #[cfg(test)]
    pub(crate) fn test_events(&self) -> usize {
        self.codes.events()
    }
}
