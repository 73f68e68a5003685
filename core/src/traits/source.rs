use crate::Error;

/// A line-oriented input source.
///
/// One call yields one line's worth of content, excluding the line break.
/// Exhaustion is signalled by [`Error::EndOfInput`], never by a sentinel
/// value: an empty `String` is a legitimate zero-length line, distinct from
/// "no more lines". Whatever terminator convention the underlying stream
/// uses is the source's business; consumers only ever see terminator-free
/// lines.
///
/// A fetch may block until the underlying stream yields a line or reports
/// exhaustion; there is no timeout or cancellation at this layer.
///
/// # Blanket Implementation
///
/// Any iterator whose items convert into `String` is a `LineSource`, which
/// makes in-memory sources free:
///
/// ```ignore
/// use scankit::Scanner;
///
/// let mut input = Scanner::new("3\n10 20 30".lines());
/// let n: usize = input.parse()?;
/// ```
///
/// For real streams, see [`BufSource`](crate::io::BufSource).
pub trait LineSource {
    /// Fetch the next line, without its terminator.
    ///
    /// # Errors
    ///
    /// [`Error::EndOfInput`] once the source has no further lines.
    fn fetch_line(&mut self) -> Result<String, Error>;
}

impl<I, T> LineSource for I
where
    I: Iterator<Item = T>,
    T: Into<String>,
{
    fn fetch_line(&mut self) -> Result<String, Error> {
        self.next().map(Into::into).ok_or(Error::EndOfInput)
    }
}
