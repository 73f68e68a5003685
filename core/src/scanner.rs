//! Lazily refilled, whitespace-tokenizing input scanning.
//!
//! [`Scanner`] owns a single cached line and a byte cursor into it. A read
//! advances the cursor past whitespace, refilling the cache from the
//! [`LineSource`] as many times as it takes, then slices off the maximal
//! run of non-whitespace characters. Tokens borrow from the cache, so the
//! read path allocates nothing; typed reads convert the borrowed token
//! through [`FromToken`].
//!
#![cfg_attr(feature = "docs", doc = simple_mermaid::mermaid!("../docs/diagrams/scan_loop.mmd"))]
//!
//! Whitespace is [`char::is_whitespace`], the same classification
//! [`str::split_whitespace`] uses, so a scanner draining a source produces
//! exactly the tokens `split_whitespace` would over the concatenated lines.

use crate::Error;
use crate::traits::{FromToken, LineSource};

/// A pull-based typed token reader over a [`LineSource`].
///
/// # Invariants
///
/// - The cursor is a byte offset into the cached line, always on a `char`
///   boundary and never past the end.
/// - Between reads the cursor sits either on a non-whitespace character or
///   at end-of-line (forcing a refill on the next read).
/// - Each refill replaces the cache wholesale and resets the cursor; tokens
///   returned by [`token`](Self::token) borrow from the cache and are
///   invalidated by the next read.
///
/// The cache starts empty with the cursor at zero, which is
/// indistinguishable from a fully consumed line, so the first read triggers
/// the first fetch and no separate "uninitialized" state exists.
///
/// # Example
///
/// ```ignore
/// use scankit::Scanner;
///
/// let mut input = Scanner::new("3\n10 20 30".lines());
/// let n: usize = input.parse()?;
/// let values: Vec<i64> = input.parse_vec(n)?;
/// assert_eq!(values, [10, 20, 30]);
/// ```
#[derive(Debug)]
pub struct Scanner<S> {
    source: S,
    line: String,
    cursor: usize,
}

impl<S> Scanner<S> {
    /// Create a scanner over `source`. Nothing is fetched until the first
    /// read.
    pub fn new(source: S) -> Self {
        Self {
            source,
            line: String::new(),
            cursor: 0,
        }
    }

    /// Consume the scanner and return the underlying source.
    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: LineSource> Scanner<S> {
    /// Replace the cache with the next line and reset the cursor.
    fn refill(&mut self) -> Result<(), Error> {
        self.line = self.source.fetch_line()?;
        self.cursor = 0;
        Ok(())
    }

    /// Move the cursor to the next non-whitespace character, refilling as
    /// many times as it takes.
    ///
    /// Loop invariant: at entry the cursor is within the cache or exactly
    /// at its end. Whitespace-only and empty lines are consumed here
    /// without ever surfacing to the caller; termination on an unbounded
    /// run of such lines relies on the source eventually reporting
    /// [`Error::EndOfInput`].
    fn advance(&mut self) -> Result<(), Error> {
        loop {
            if self.cursor >= self.line.len() {
                self.refill()?;
                continue;
            }
            match self.line[self.cursor..].chars().next() {
                Some(c) if c.is_whitespace() => self.cursor += c.len_utf8(),
                _ => return Ok(()),
            }
        }
    }

    /// Consume and return the next whitespace-delimited token.
    ///
    /// The returned slice borrows the line cache and is valid until the
    /// next call on this scanner; copy it out if it must live longer.
    ///
    /// # Errors
    ///
    /// [`Error::EndOfInput`] if the source runs out before a token starts.
    pub fn token(&mut self) -> Result<&str, Error> {
        self.advance()?;
        let start = self.cursor;
        let end = self.line[start..]
            .find(char::is_whitespace)
            .map_or(self.line.len(), |offset| start + offset);
        self.cursor = end;
        Ok(&self.line[start..end])
    }

    /// Consume the next token and convert it to `T`.
    ///
    /// # Errors
    ///
    /// [`Error::EndOfInput`] as for [`token`](Self::token);
    /// [`Error::Parse`] if the token is not a valid `T`. The token is
    /// consumed either way, and the cursor stays usable for further reads.
    pub fn parse<T: FromToken>(&mut self) -> Result<T, Error> {
        T::from_token(self.token()?)
    }

    /// Read `n` consecutive values of type `T`.
    ///
    /// Stops at the first failing read; values consumed up to that point
    /// are discarded with the error.
    pub fn parse_vec<T: FromToken>(&mut self, n: usize) -> Result<Vec<T>, Error> {
        (0..n).map(|_| self.parse()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanner_of(lines: &[&str]) -> Scanner<std::vec::IntoIter<String>> {
        let owned: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        Scanner::new(owned.into_iter())
    }

    #[test]
    fn test_tokens_within_one_line() {
        let mut s = scanner_of(&["alpha beta  gamma"]);
        assert_eq!(s.token().unwrap(), "alpha");
        assert_eq!(s.token().unwrap(), "beta");
        assert_eq!(s.token().unwrap(), "gamma");
        assert_eq!(s.token(), Err(Error::EndOfInput));
    }

    #[test]
    fn test_tokens_cross_line_boundaries() {
        let mut s = scanner_of(&["one", "two three"]);
        assert_eq!(s.token().unwrap(), "one");
        assert_eq!(s.token().unwrap(), "two");
        assert_eq!(s.token().unwrap(), "three");
        assert_eq!(s.token(), Err(Error::EndOfInput));
    }

    #[test]
    fn test_leading_and_trailing_whitespace_stripped() {
        let mut s = scanner_of(&["  padded \t"]);
        assert_eq!(s.token().unwrap(), "padded");
        assert_eq!(s.token(), Err(Error::EndOfInput));
    }

    #[test]
    fn test_blank_and_whitespace_lines_are_transparent() {
        let mut s = scanner_of(&["   ", "", "42"]);
        assert_eq!(s.parse::<i32>().unwrap(), 42);
        assert_eq!(s.token(), Err(Error::EndOfInput));
    }

    #[test]
    fn test_empty_source_is_end_of_input() {
        let mut s = scanner_of(&[]);
        assert_eq!(s.token(), Err(Error::EndOfInput));
    }

    #[test]
    fn test_unicode_whitespace_separates_tokens() {
        // U+3000 ideographic space is whitespace to char::is_whitespace.
        let mut s = scanner_of(&["a\u{3000}b"]);
        assert_eq!(s.token().unwrap(), "a");
        assert_eq!(s.token().unwrap(), "b");
    }

    #[test]
    fn test_multibyte_token_text() {
        let mut s = scanner_of(&["héllo wörld"]);
        assert_eq!(s.token().unwrap(), "héllo");
        assert_eq!(s.token().unwrap(), "wörld");
    }

    #[test]
    fn test_parse_failure_consumes_the_token() {
        let mut s = scanner_of(&["abc 7"]);
        let err = s.parse::<i32>().unwrap_err();
        assert!(matches!(err, Error::Parse { ref token, .. } if token == "abc"));
        // The failed token is gone; the next read sees the next token.
        assert_eq!(s.parse::<i32>().unwrap(), 7);
    }

    #[test]
    fn test_parse_error_carries_raw_token_and_target() {
        let mut s = scanner_of(&["12x34"]);
        match s.parse::<u64>() {
            Err(Error::Parse { token, target }) => {
                assert_eq!(token, "12x34");
                assert!(target.contains("u64"));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_vec_reads_exactly_n() {
        let mut s = scanner_of(&["1 2", "3 4 5"]);
        assert_eq!(s.parse_vec::<i32>(4).unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(s.token().unwrap(), "5");
    }

    #[test]
    fn test_parse_vec_propagates_end_of_input() {
        let mut s = scanner_of(&["1 2"]);
        assert_eq!(s.parse_vec::<i32>(3), Err(Error::EndOfInput));
    }

    #[test]
    fn test_header_then_payload() {
        let mut s = scanner_of(&["3", "10 20 30"]);
        let n: usize = s.parse().unwrap();
        assert_eq!(n, 3);
        assert_eq!(s.parse_vec::<i32>(n).unwrap(), vec![10, 20, 30]);
        assert_eq!(s.parse::<i32>(), Err(Error::EndOfInput));
    }

    #[test]
    fn test_into_source_returns_remaining_lines() {
        let mut s = scanner_of(&["a", "b c", "d"]);
        assert_eq!(s.token().unwrap(), "a");
        let mut rest = s.into_source();
        assert_eq!(rest.next().unwrap(), "b c");
    }
}
