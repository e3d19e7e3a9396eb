use crate::{context::WordContext, lookahead::Lookahead, rules::Decision};

/// Vowels only sound at the start of the word.
pub(super) fn vowel(la: &Lookahead<'_>, _: &WordContext) -> Decision {
    if la.position() == 0 {
        Decision::both("a")
    } else {
        Decision::silent()
    }
}

pub(super) fn b(la: &Lookahead<'_>, _: &WordContext) -> Decision {
    let decision = Decision::both("p");
    // "bb" sounds once
    if la.matches(1, &["b"]) {
        decision.skipping(1)
    } else {
        decision
    }
}

pub(super) fn c_cedilla(_: &Lookahead<'_>, _: &WordContext) -> Decision {
    Decision::both("s")
}
