#![expect(missing_docs)]

use core::fmt::Write;

use megophone::DoubleMetaphone;

const CORPUS: &[&str] = &[
    "bach",
    "bacher",
    "caesar",
    "character",
    "chianti",
    "chore",
    "church",
    "czerny",
    "focaccia",
    "gnostic",
    "loch",
    "machen",
    "mchugh",
    "michael",
    "orchid",
    "schmidt",
    "wechsler",
    "xavier",
];

fn render(words: &[&str]) -> String {
    let encoder = DoubleMetaphone::new();
    let mut out = String::new();
    for word in words {
        let code = encoder.encode(word);
        writeln!(out, "{word}: {code}").unwrap();
    }
    out
}

#[test]
fn snapshot_corpus() {
    insta::assert_snapshot!(render(CORPUS), @r"
    bach: pk/pk
    bacher: px/pk
    caesar: s/s
    character: k/k
    chianti: k/k
    chore: x/x
    church: xx/xk
    czerny: s/x
    focaccia: x/x
    gnostic: /
    loch: k/k
    machen: x/k
    mchugh: k/k
    michael: k/k
    orchid: ak/ak
    schmidt: k/k
    wechsler: k/k
    xavier: s/s
    ");
}
