//! The pipe itself: one owned buffer, one set of counters, two facets.

use bytes::Bytes;

use crate::{chunks::ChunkQueue, reader::PipeReader, writer::PipeWriter};

/// A bounded, flow-controlled, in-memory byte pipe.
///
/// One `BytePipe` owns one chunk buffer and one set of cumulative counters;
/// the [`PipeWriter`] and [`PipeReader`] facets are two views over that
/// single state, so the accounting can never drift between them. The
/// capacity is fixed at construction and bounds how many pushed-but-unpopped
/// bytes exist at any moment, which is what gives callers backpressure.
///
/// Beyond the two facets, the pipe carries a small set of inherent
/// operations: construction and capacity introspection, the externally
/// driven abort flag ([`set_error`](Self::set_error)), and the zero-copy
/// conveniences [`push_chunk`](Self::push_chunk) and
/// [`pop_bytes`](Self::pop_bytes).
///
/// # Examples
///
/// ```
/// use bytepipe::{BytePipe, PipeReader, PipeWriter};
///
/// let mut pipe = BytePipe::new(4);
/// assert_eq!(pipe.push(b"ping"), 4);
/// pipe.close();
///
/// assert_eq!(pipe.pop_bytes(4).as_ref(), b"ping");
/// assert!(pipe.is_finished());
/// ```
#[derive(Debug)]
pub struct BytePipe {
    queue: ChunkQueue,
    capacity: usize,
    pushed: u64,
    popped: u64,
    closed: bool,
    errored: bool,
}

impl BytePipe {
    /// Creates a pipe that buffers at most `capacity` bytes at a time.
    ///
    /// A zero-capacity pipe is permitted and permanently saturated: every
    /// push is rejected in full, and [`is_finished`](PipeReader::is_finished)
    /// reduces to [`is_closed`](PipeWriter::is_closed).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: ChunkQueue::new(),
            capacity,
            pushed: 0,
            popped: 0,
            closed: false,
            errored: false,
        }
    }

    /// The fixed bound on simultaneously buffered bytes.
    #[must_use]
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Sets the abort flag.
    ///
    /// The pipe never raises this flag itself; it is the capability through
    /// which a surrounding protocol layer tears the stream down without
    /// destroying the object. Once set, every push and pop is a permanent
    /// no-op, while `peek` and the counters keep reporting the frozen
    /// state. Idempotent, irreversible.
    pub fn set_error(&mut self) {
        #[cfg(feature = "log")]
        if !self.errored {
            log::debug!(
                "byte pipe aborted with {} bytes buffered; pushes and pops are no-ops from here",
                self.queue.len()
            );
        }
        self.errored = true;
    }

    /// Whether the abort flag has been set.
    #[must_use]
    #[inline]
    pub fn has_error(&self) -> bool {
        self.errored
    }

    /// Zero-copy [`push`](PipeWriter::push) for producers that already own
    /// a [`Bytes`] handle.
    ///
    /// The acceptance rules and counter effects are identical to `push`;
    /// the difference is purely mechanical: the fitting prefix is queued by
    /// handle instead of being copied, and truncating an oversized chunk is
    /// an O(1) length adjustment.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytepipe::{BytePipe, Bytes, PipeReader};
    ///
    /// let mut pipe = BytePipe::new(16);
    /// assert_eq!(pipe.push_chunk(Bytes::from_static(b"segment")), 7);
    /// assert_eq!(pipe.peek(), b"segment");
    /// ```
    #[must_use = "push_chunk truncates silently; the return value is the only direct record of how much was accepted"]
    pub fn push_chunk(&mut self, mut chunk: Bytes) -> usize {
        let writable = self.writable_len(chunk.len());
        #[cfg(feature = "log")]
        if writable < chunk.len() {
            log::trace!(
                "push clamped: accepted {writable} of {} bytes",
                chunk.len()
            );
        }
        if writable == 0 {
            return 0;
        }
        chunk.truncate(writable);
        self.accept(chunk)
    }

    /// Removes `min(len, bytes_buffered())` bytes from the front and
    /// returns them as one contiguous [`Bytes`].
    ///
    /// This is the peek-and-pop loop packaged up: a request that lies
    /// within the front chunk is split off without copying, and a request
    /// spanning chunks is assembled with a single copy. Clamps like
    /// [`pop`](PipeReader::pop) and, like any other mutation, returns
    /// nothing once the pipe has been aborted.
    pub fn pop_bytes(&mut self, len: usize) -> Bytes {
        if len == 0 || self.errored {
            return Bytes::new();
        }
        let take = len.min(self.queue.len());
        let out = self.queue.split_to(take);
        self.popped += take as u64;
        self.check_rep();
        out
    }

    /// How many of `requested` bytes the writer may accept right now.
    fn writable_len(&self, requested: usize) -> usize {
        if self.closed || self.errored {
            return 0;
        }
        requested.min(self.capacity - self.queue.len())
    }

    /// Queues an already-clamped chunk and accounts for it.
    fn accept(&mut self, chunk: Bytes) -> usize {
        let accepted = chunk.len();
        self.pushed += accepted as u64;
        self.queue.push_chunk(chunk);
        self.check_rep();
        accepted
    }

    #[inline]
    fn check_rep(&self) {
        debug_assert!(
            self.queue.len() <= self.capacity,
            "buffered bytes exceed capacity"
        );
        debug_assert!(self.popped <= self.pushed, "popped more than was pushed");
        debug_assert_eq!(
            self.pushed - self.popped,
            self.queue.len() as u64,
            "counters disagree with the stored bytes"
        );
    }
}

impl PipeWriter for BytePipe {
    fn push(&mut self, data: &[u8]) -> usize {
        let writable = self.writable_len(data.len());
        #[cfg(feature = "log")]
        if writable < data.len() {
            log::trace!(
                "push clamped: accepted {writable} of {} bytes",
                data.len()
            );
        }
        if writable == 0 {
            return 0;
        }
        self.accept(Bytes::copy_from_slice(&data[..writable]))
    }

    fn close(&mut self) {
        self.closed = true;
    }

    #[inline]
    fn is_closed(&self) -> bool {
        self.closed
    }

    #[inline]
    fn available_capacity(&self) -> usize {
        self.capacity - self.queue.len()
    }

    #[inline]
    fn bytes_pushed(&self) -> u64 {
        self.pushed
    }
}

impl PipeReader for BytePipe {
    #[inline]
    fn peek(&self) -> &[u8] {
        self.queue.peek()
    }

    fn pop(&mut self, len: usize) {
        if len == 0 || self.errored {
            return;
        }
        let removed = self.queue.advance(len);
        self.popped += removed as u64;
        self.check_rep();
    }

    #[inline]
    fn is_finished(&self) -> bool {
        self.closed && self.queue.is_empty()
    }

    #[inline]
    fn bytes_buffered(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    fn bytes_popped(&self) -> u64 {
        self.popped
    }
}
