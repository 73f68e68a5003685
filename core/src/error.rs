//! Core error types for scankit.
//!
//! User-defined error types should implement `From<scankit::Error>` to integrate
//! with scankit's built-in error handling.

use core::fmt;

/// Core scankit error type.
///
/// Both variants are terminal for the read that raised them: the scanner
/// performs no retries, pushback, or default-value substitution. The caller
/// decides whether to abort or to continue with a different read strategy.
///
/// Programs with richer failure reporting should define their own error type
/// and implement `From<Error>` to fold scanner failures into it.
///
/// # Example
///
/// ```ignore
/// use thiserror::Error;
///
/// #[derive(Error, Debug)]
/// pub enum SolveError {
///     #[error("ran out of input")]
///     OutOfInput,
///
///     #[error("malformed value: {token}")]
///     Malformed { token: String },
/// }
///
/// impl From<scankit::Error> for SolveError {
///     fn from(err: scankit::Error) -> Self {
///         match err {
///             scankit::Error::EndOfInput => SolveError::OutOfInput,
///             scankit::Error::Parse { token, .. } => SolveError::Malformed { token },
///         }
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The line source was exhausted while a read still needed input.
    ///
    /// Raised by the refill step and surfaced unchanged through
    /// [`Scanner::token`](crate::Scanner::token) and
    /// [`Scanner::parse`](crate::Scanner::parse). Sources that cannot read
    /// their underlying stream report this same variant; there is no
    /// separate I/O-failure kind.
    EndOfInput,

    /// A consumed token could not be converted to the requested type.
    ///
    /// The token is already consumed when this is raised; a retry reads the
    /// next token, not the same one.
    Parse {
        /// The offending token text, copied out of the line cache.
        token: String,
        /// Type name of the requested target, from `core::any::type_name`.
        target: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EndOfInput => write!(f, "end of input"),
            Error::Parse { token, target } => {
                write!(f, "failed to parse '{}' as {}", token, target)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
