//! The many sounds of `c`. Conditions are tried in order; the first that
//! holds decides.

use crate::{context::WordContext, lookahead::Lookahead, rules::Decision};

pub(super) fn c(la: &Lookahead<'_>, _: &WordContext) -> Decision {
    let pos = la.position();

    // Germanic "-ach-", as in "bach", but not "-achi-" or "-ache-".
    if pos > 1
        && !la.is_vowel(-2)
        && la.matches(-1, &["ach"])
        && !la.matches(2, &["i"])
        && (!la.matches(2, &["e"]) || la.matches(-2, &["acher"]))
    {
        return Decision::both("k").skipping(1);
    }

    if pos == 0 && la.matches(0, &["caesar"]) {
        return Decision::both("s").skipping(1);
    }

    // Italian "chianti"
    if la.matches(0, &["chia"]) {
        return Decision::both("k").skipping(1);
    }

    if la.matches(0, &["ch"]) {
        return ch(la).skipping(1);
    }

    // "czerny", but not "-wicz"
    if la.matches(0, &["cz"]) && !la.matches(-2, &["wicz"]) {
        return Decision::split("s", "x").skipping(1);
    }

    // "focaccia"
    if la.matches(1, &["cia"]) {
        return Decision::both("x").skipping(2);
    }

    Decision::silent()
}

fn ch(la: &Lookahead<'_>) -> Decision {
    let pos = la.position();

    // "michael"
    if pos > 0 && la.matches(0, &["chae"]) {
        return Decision::both("k");
    }

    // Greek roots: "character", "charisma", "chorus", "chymera", "chemistry"
    if pos == 0
        && !la.matches(0, &["chore"])
        && la.matches(1, &["harac", "haris", "hor", "hym", "hia", "hem"])
    {
        return Decision::both("k");
    }

    // Germanic or Greek "kh": "architect", "orchestra", "orchid",
    // "wechsler", but not "arch" alone or "tichner".
    if la.matches_at_start(&["van ", "von ", "sch"])
        || la.matches(-2, &["orches", "archit", "orchid"])
        || la.matches(2, &["t", "s"])
        || ((la.matches(-1, &["a", "e", "o", "u"]) || pos == 0)
            && la.matches(2, &["l", "r", "n", "m", "b", "h", "f", "v", "w", " "]))
    {
        return Decision::both("k");
    }

    if pos > 0 {
        // "mchugh"
        if la.matches_at_start(&["mc"]) {
            Decision::both("k")
        } else {
            Decision::split("x", "k")
        }
    } else {
        Decision::both("x")
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use rstest::rstest;

    use super::*;
    use crate::text::PaddedText;

    fn decide(word: &str, cursor: usize) -> Decision {
        let text: Vec<char> = PaddedText::new(word).as_slice().to_vec();
        assert_eq!(text[cursor], 'c', "cursor must sit on a 'c'");
        c(&Lookahead::new(&text, cursor), &WordContext::default())
    }

    #[rstest]
    // -ach-
    #[case("bach", 2, Decision::both("k").skipping(1))]
    #[case("machen", 2, Decision::split("x", "k").skipping(1))]
    #[case("bachi", 2, Decision::split("x", "k").skipping(1))]
    // caesar
    #[case("caesar", 0, Decision::both("s").skipping(1))]
    // chia
    #[case("chianti", 0, Decision::both("k").skipping(1))]
    // ch
    #[case("michael", 2, Decision::both("k").skipping(1))]
    #[case("character", 0, Decision::both("k").skipping(1))]
    #[case("chore", 0, Decision::both("x").skipping(1))]
    #[case("chemist", 0, Decision::both("k").skipping(1))]
    #[case("schmidt", 1, Decision::both("k").skipping(1))]
    #[case("orchestra", 2, Decision::both("k").skipping(1))]
    #[case("orchid", 2, Decision::both("k").skipping(1))]
    #[case("wechsler", 2, Decision::both("k").skipping(1))]
    #[case("chl", 0, Decision::both("k").skipping(1))]
    #[case("loch", 2, Decision::both("k").skipping(1))]
    #[case("mchugh", 1, Decision::both("k").skipping(1))]
    #[case("church", 4, Decision::split("x", "k").skipping(1))]
    #[case("church", 0, Decision::both("x").skipping(1))]
    // cz
    #[case("czerny", 0, Decision::split("s", "x").skipping(1))]
    #[case("wicz", 2, Decision::silent())]
    // cia
    #[case("focaccia", 4, Decision::both("x").skipping(2))]
    // nothing
    #[case("cat", 0, Decision::silent())]
    #[case("c", 0, Decision::silent())]
    fn c_decisions(#[case] word: &str, #[case] cursor: usize, #[case] expected: Decision) {
        assert_eq!(decide(word, cursor), expected);
    }

    #[test]
    fn caesar_only_at_start() {
        // Not at the start: falls through to the "cz"/"cia"/silent checks.
        assert_eq!(decide("acaesar", 1), Decision::silent());
    }
}
