//! `std::io` bindings for the scanner/writer pair.
//!
//! [`BufSource`] turns any [`BufRead`] into a [`LineSource`] and
//! [`WriteSink`] turns any [`Write`] into an [`OutputSink`]. [`Session`]
//! bundles a scanner and a writer and flushes the writer when dropped, so
//! output reaches the stream on every exit path. The [`stdin`], [`stdout`]
//! and [`session`] constructors bind the locked standard streams:
//!
//! ```ignore
//! use scankit::io::session;
//!
//! let mut io = session();
//! let n: u32 = io.reader().parse()?;
//! io.writer().write(("n = ", n, scankit::Endl));
//! // dropping `io` flushes stdout
//! ```

use std::io::{self, BufRead, BufWriter, StdinLock, StdoutLock, Write};

use crate::traits::{LineSource, OutputSink};
use crate::{Scanner, Writer};

/// [`LineSource`] over any [`BufRead`].
///
/// Each fetch reads one line and strips the trailing `\n` or `\r\n`, so an
/// empty fetched line really was empty on the stream. A read of zero bytes
/// is exhaustion; a read error is reported as the same
/// [`Error::EndOfInput`](crate::Error::EndOfInput), with no separate I/O
/// kind.
#[derive(Debug)]
pub struct BufSource<R> {
    inner: R,
}

impl<R: BufRead> BufSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Consume the source and return the underlying reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: BufRead> LineSource for BufSource<R> {
    fn fetch_line(&mut self) -> Result<String, crate::Error> {
        let mut line = String::new();
        match self.inner.read_line(&mut line) {
            Ok(0) | Err(_) => Err(crate::Error::EndOfInput),
            Ok(_) => {
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Ok(line)
            }
        }
    }
}

/// [`OutputSink`] over any [`Write`].
///
/// The sink contract has no failure channel, so this adapter latches the
/// first [`io::Error`] and drops every write after it. Callers that care
/// inspect [`last_error`](Self::last_error) after flushing.
#[derive(Debug)]
pub struct WriteSink<W> {
    inner: W,
    error: Option<io::Error>,
}

impl<W: Write> WriteSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, error: None }
    }

    /// The first write or flush error, if any occurred.
    pub fn last_error(&self) -> Option<&io::Error> {
        self.error.as_ref()
    }

    /// Consume the sink and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> OutputSink for WriteSink<W> {
    fn write_str(&mut self, s: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.inner.write_all(s.as_bytes()) {
            self.error = Some(err);
        }
    }

    fn flush(&mut self) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.inner.flush() {
            self.error = Some(err);
        }
    }
}

/// A scanner/writer pair whose writer is flushed on drop.
///
/// Scopes the flush to the session's lifetime: early returns and error
/// paths flush just like the happy path.
pub struct Session<S, W: OutputSink> {
    reader: Scanner<S>,
    writer: Writer<W>,
}

impl<S, W: OutputSink> Session<S, W> {
    pub fn new(source: S, sink: W) -> Self {
        Self {
            reader: Scanner::new(source),
            writer: Writer::new(sink),
        }
    }

    pub fn reader(&mut self) -> &mut Scanner<S> {
        &mut self.reader
    }

    pub fn writer(&mut self) -> &mut Writer<W> {
        &mut self.writer
    }

    /// Both halves at once, for callers that read and write interleaved.
    pub fn parts(&mut self) -> (&mut Scanner<S>, &mut Writer<W>) {
        (&mut self.reader, &mut self.writer)
    }
}

impl<S, W: OutputSink> Drop for Session<S, W> {
    fn drop(&mut self) {
        self.writer.flush();
    }
}

/// Scanner over the locked standard input.
pub fn stdin() -> Scanner<BufSource<StdinLock<'static>>> {
    Scanner::new(BufSource::new(io::stdin().lock()))
}

/// Writer over the locked, buffered standard output.
pub fn stdout() -> Writer<WriteSink<BufWriter<StdoutLock<'static>>>> {
    Writer::new(WriteSink::new(BufWriter::new(io::stdout().lock())))
}

/// [`Session`] over the locked standard streams.
pub fn session() -> Session<BufSource<StdinLock<'static>>, WriteSink<BufWriter<StdoutLock<'static>>>>
{
    Session::new(
        BufSource::new(io::stdin().lock()),
        WriteSink::new(BufWriter::new(io::stdout().lock())),
    )
}
