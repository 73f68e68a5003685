#![no_main]

use libfuzzer_sys::fuzz_target;
use scankit::{Error, Scanner};

// The scanner over any sequence of lines must produce exactly the tokens
// `split_whitespace` yields over each line, in order, then report
// exhaustion.
fuzz_target!(|lines: Vec<String>| {
    let expected: Vec<&str> = lines.iter().flat_map(|l| l.split_whitespace()).collect();

    let mut scanner = Scanner::new(lines.iter().map(String::as_str));
    for want in &expected {
        match scanner.token() {
            Ok(tok) => {
                assert_eq!(&tok, want);
                assert!(!tok.is_empty());
                assert!(tok.chars().all(|c| !c.is_whitespace()));
            }
            Err(err) => panic!("scanner ended after fewer tokens than expected: {err}"),
        }
    }
    assert_eq!(scanner.token(), Err(Error::EndOfInput));
});
