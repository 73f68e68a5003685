/// A text output sink.
///
/// The contract has no failure channel: writes and flushes return nothing,
/// and an implementation over fallible I/O defines its own failure policy
/// (see [`WriteSink`](crate::io::WriteSink) for the latching approach the
/// std bindings take).
///
/// `String` implements this directly, which is the usual sink for tests.
pub trait OutputSink {
    /// Write `s` verbatim.
    fn write_str(&mut self, s: &str);

    /// Deliver anything the sink itself buffers. Idempotent.
    fn flush(&mut self) {}
}

impl OutputSink for String {
    fn write_str(&mut self, s: &str) {
        self.push_str(s);
    }
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn write_str(&mut self, s: &str) {
        (**self).write_str(s);
    }

    fn flush(&mut self) {
        (**self).flush();
    }
}
