//! The producer facet of a byte pipe.

/// Producer-side operations of a bounded byte pipe.
///
/// A writer appends bytes subject to the remaining capacity and eventually
/// signals end-of-production with [`close`](Self::close). The trait is
/// object-safe so a pipe owner can lend out `&mut dyn PipeWriter` without
/// exposing the consumer side.
///
/// Writes never block and never fail. When a push does not fit, the
/// non-fitting suffix is dropped silently; the only record of the loss is
/// the accepted count returned by [`push`](Self::push) and the cumulative
/// [`bytes_pushed`](Self::bytes_pushed) counter. Producers that cannot
/// tolerate loss consult [`available_capacity`](Self::available_capacity)
/// and size their chunks to fit.
pub trait PipeWriter {
    /// Appends the longest prefix of `data` that currently fits and returns
    /// how many bytes were accepted.
    ///
    /// The suffix that does not fit is discarded with no signal other than
    /// the return value: truncation is the designed backpressure behavior,
    /// not a failure. Accepted bytes are retained in order, never reordered
    /// or duplicated.
    ///
    /// Returns `0` without touching the pipe when the pipe is closed or
    /// aborted, when no capacity is available, or when `data` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytepipe::{BytePipe, PipeWriter};
    ///
    /// let mut pipe = BytePipe::new(4);
    /// assert_eq!(pipe.push(b"abcdef"), 4); // "ef" was dropped
    /// assert_eq!(pipe.bytes_pushed(), 4);
    /// assert_eq!(pipe.push(b"g"), 0); // saturated
    /// ```
    #[must_use = "push truncates silently; the return value is the only direct record of how much was accepted"]
    fn push(&mut self, data: &[u8]) -> usize;

    /// Marks the end of production: every later `push` is a no-op.
    ///
    /// Idempotent. Bytes already buffered stay readable; the consumer
    /// observes the end of the pipe through
    /// [`is_finished`](crate::PipeReader::is_finished) once it has drained
    /// them.
    fn close(&mut self);

    /// Whether [`close`](Self::close) has been called. Never reverts.
    #[must_use]
    fn is_closed(&self) -> bool;

    /// How many bytes a `push` could accept right now: the capacity minus
    /// the bytes currently buffered.
    #[must_use]
    fn available_capacity(&self) -> usize;

    /// Cumulative count of bytes ever accepted. Non-decreasing for the life
    /// of the pipe.
    #[must_use]
    fn bytes_pushed(&self) -> u64;
}
