use core::any::type_name;
use core::str::FromStr;

use crate::Error;

/// Conversion from a single whitespace-delimited token.
///
/// This is the capability every type requested through
/// [`Scanner::parse`](crate::Scanner::parse) must carry: produce an instance
/// from a textual span, given no extra context (no locale, no surrounding
/// input). Failure must not panic; it surfaces as [`Error::Parse`] with the
/// offending text attached.
///
/// # Blanket Implementation
///
/// Every [`FromStr`] type is `FromToken` for free, with the failure mapped
/// to [`Error::Parse`] carrying the raw token and the target's type name.
/// That covers the integer and float primitives, `bool`, `char`, `String`,
/// and any user type with a `FromStr` impl.
///
/// Types without `FromStr` can implement `FromToken` directly:
///
/// ```ignore
/// struct Hex(u32);
///
/// impl FromToken for Hex {
///     fn from_token(token: &str) -> Result<Self, Error> {
///         u32::from_str_radix(token, 16)
///             .map(Hex)
///             .map_err(|_| Error::Parse {
///                 token: token.to_string(),
///                 target: "Hex",
///             })
///     }
/// }
/// ```
pub trait FromToken: Sized {
    /// Attempt conversion from one token.
    ///
    /// # Errors
    ///
    /// [`Error::Parse`] when `token` is not a valid textual representation
    /// of `Self`.
    fn from_token(token: &str) -> Result<Self, Error>;
}

impl<T: FromStr> FromToken for T {
    fn from_token(token: &str) -> Result<Self, Error> {
        token.parse().map_err(|_| Error::Parse {
            token: token.to_string(),
            target: type_name::<T>(),
        })
    }
}
