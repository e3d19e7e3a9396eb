#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use megophone::{DoubleMetaphone, EncoderOptions};

#[derive(Debug, Arbitrary)]
struct Input {
    word: Vec<u8>,
    max_code_length: Option<u8>,
    as_str: bool,
}

fn encode(input: &Input) {
    let options = EncoderOptions {
        max_code_length: input.max_code_length.map(usize::from),
    };
    let Ok(encoder) = DoubleMetaphone::with_options(options) else {
        assert_eq!(input.max_code_length, Some(0));
        return;
    };

    let (first, second) = if input.as_str {
        let word = String::from_utf8_lossy(&input.word);
        (encoder.encode(&word), encoder.encode(&word))
    } else {
        (encoder.encode_bytes(&input.word), encoder.encode_bytes(&input.word))
    };

    // Encoding is pure.
    assert_eq!(first, second);

    if let Some(max) = input.max_code_length {
        assert!(first.primary().chars().count() <= usize::from(max));
        assert!(first.secondary().chars().count() <= usize::from(max));
    }
}

fuzz_target!(|input: Input| encode(&input));
