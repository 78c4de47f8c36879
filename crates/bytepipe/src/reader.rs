//! The consumer facet of a byte pipe.

/// Consumer-side operations of a bounded byte pipe.
///
/// A reader inspects and removes buffered bytes in exactly the order the
/// producer pushed them. The trait is object-safe so a pipe owner can lend
/// out `&mut dyn PipeReader` without exposing the producer side.
///
/// Like the producer side, consumption is tolerant by contract: popping more
/// than is buffered clamps to what is there, and peeking an empty pipe
/// yields an empty view. Nothing here errors or panics.
pub trait PipeReader {
    /// A read-only view of a prefix of the buffered bytes, starting at the
    /// oldest unconsumed byte.
    ///
    /// The view is non-empty exactly when bytes are buffered, but it is not
    /// required to span everything buffered: it covers the longest
    /// contiguous run at the front (one pushed chunk, less whatever has
    /// already been popped from it). Consumers walk the whole buffer by
    /// alternating `peek` and [`pop`](Self::pop); the borrow rules retire
    /// the view before any mutation can invalidate it.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytepipe::{BytePipe, PipeReader, PipeWriter};
    ///
    /// let mut pipe = BytePipe::new(8);
    /// let _ = pipe.push(b"ab");
    /// pipe.pop(1);
    /// let _ = pipe.push(b"cd");
    ///
    /// // Walk the buffered bytes without assuming peek spans them all.
    /// let mut seen = Vec::new();
    /// while pipe.bytes_buffered() > 0 {
    ///     let view = pipe.peek();
    ///     let step = view.len();
    ///     seen.extend_from_slice(view);
    ///     pipe.pop(step);
    /// }
    /// assert_eq!(seen, b"bcd");
    /// ```
    #[must_use]
    fn peek(&self) -> &[u8];

    /// Removes `min(len, bytes_buffered())` bytes from the front, in order.
    ///
    /// Asking for more than is buffered is not an error; the request clamps
    /// silently, observable only through the counters. No-op when `len` is
    /// zero or the pipe has been aborted.
    fn pop(&mut self, len: usize);

    /// Whether the pipe is closed *and* fully drained: the terminal state a
    /// consumer polls to know it may stop reading. Once true, stays true.
    #[must_use]
    fn is_finished(&self) -> bool;

    /// Number of bytes currently buffered (pushed and not yet popped).
    #[must_use]
    fn bytes_buffered(&self) -> usize;

    /// Cumulative count of bytes ever removed. Non-decreasing for the life
    /// of the pipe.
    #[must_use]
    fn bytes_popped(&self) -> u64;
}
