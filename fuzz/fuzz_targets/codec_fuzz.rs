//! Codec fuzz target: feed arbitrary text to the decoder.
//! Decoding must not fail or panic, tokens must cover the input, and re-encoding then
//! decoding again must give the same message.
//! Build with: cargo fuzz run codec_fuzz (requires nightly and cargo fuzz).

#![cfg_attr(fuzzing, no_main)]

#[cfg(fuzzing)]
use libfuzzer_sys::fuzz_target;

#[cfg(fuzzing)]
fuzz_target!(|data: &[u8]| {
    let s = match std::str::from_utf8(data) {
        Ok(x) => x,
        Err(_) => return,
    };
    let tokens = cqcode::parser::tokenize(s).expect("tokenize is total");
    let joined: String = tokens.iter().map(|t| t.as_str()).collect();
    assert_eq!(joined, s);

    let message = cqcode::decode(s).expect("decode is total");
    let again = cqcode::decode(&cqcode::encode(&message)).expect("decode is total");
    assert_eq!(cqcode::encode(&again), cqcode::encode(&message));
    assert_eq!(cqcode::unescape(&cqcode::escape(s)), s);
});

#[cfg(not(fuzzing))]
fn main() {
    eprintln!("Build with: cargo fuzz run codec_fuzz");
}
