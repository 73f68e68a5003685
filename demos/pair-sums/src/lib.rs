#![deny(
    unsafe_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

//! Pair Sums Example
//!
//! This example demonstrates the header-then-payload idiom with scankit:
//! the first token is a count, followed by that many pairs of integers,
//! and each pair's sum is written on its own line.
//!
//! # Format
//!
//! ```text
//! 3
//! 1 2
//! 10 20
//! -4 4
//! ```
//!
//! produces
//!
//! ```text
//! 3
//! 30
//! 0
//! ```

use scankit::{Endl, LineSource, OutputSink, Scanner, Writer};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PairSumError {
    #[error("missing pair count")]
    MissingCount,

    #[error("input ended before {expected} pairs were read")]
    TooFewPairs { expected: usize },

    #[error("malformed input: {token}")]
    Malformed { token: String },
}

/// Read a pair count and that many `i64` pairs from `input`, writing each
/// pair's sum on its own line of `output`.
pub fn solve<S: LineSource, W: OutputSink>(
    input: &mut Scanner<S>,
    output: &mut Writer<W>,
) -> Result<(), PairSumError> {
    let n: usize = input.parse().map_err(|err| match err {
        scankit::Error::EndOfInput => PairSumError::MissingCount,
        scankit::Error::Parse { token, .. } => PairSumError::Malformed { token },
    })?;

    for _ in 0..n {
        let pair: Vec<i64> = input.parse_vec(2).map_err(|err| match err {
            scankit::Error::EndOfInput => PairSumError::TooFewPairs { expected: n },
            scankit::Error::Parse { token, .. } => PairSumError::Malformed { token },
        })?;
        output.write((pair[0] + pair[1], Endl));
    }

    Ok(())
}
