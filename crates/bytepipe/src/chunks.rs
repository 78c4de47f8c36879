//! Chunked byte storage with a copy-free front cursor.
//!
//! Retained bytes are kept as the producer handed them over: a deque of
//! [`Bytes`] chunks in arrival order. Trimming the front never re-copies the
//! survivors of a large chunk; a partial removal advances the front chunk's
//! own cursor in place, which is O(1) for `Bytes`. The alternative, one
//! contiguous buffer that is shifted after every removal, degrades to
//! quadratic time under the peek-a-little/pop-a-little access pattern this
//! queue exists to serve.

use alloc::collections::VecDeque;

use bytes::{Buf, Bytes, BytesMut};

/// Ordered queue of non-empty byte chunks with a maintained total length.
///
/// Invariants: no stored chunk is empty, and `len` equals the sum of the
/// stored chunk lengths. Keeping empty chunks out means the front chunk is a
/// non-empty view exactly when the queue holds bytes.
#[derive(Debug, Default)]
pub(crate) struct ChunkQueue {
    chunks: VecDeque<Bytes>,
    len: usize,
}

impl ChunkQueue {
    pub(crate) fn new() -> Self {
        Self {
            chunks: VecDeque::new(),
            len: 0,
        }
    }

    /// Total number of buffered bytes.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends a chunk at the back, keeping producer order. Empty chunks are
    /// discarded so the no-empty-chunk invariant holds.
    pub(crate) fn push_chunk(&mut self, chunk: Bytes) {
        if chunk.is_empty() {
            return;
        }
        self.len += chunk.len();
        self.chunks.push_back(chunk);
    }

    /// Contiguous view of the oldest unconsumed bytes: the whole front
    /// chunk. Empty exactly when the queue is empty.
    #[inline]
    pub(crate) fn peek(&self) -> &[u8] {
        self.chunks.front().map_or(&[], Bytes::as_ref)
    }

    /// Discards up to `len` bytes from the front and returns how many were
    /// actually removed. Whole chunks are dropped; a partial tail advances
    /// the front chunk's cursor without copying.
    pub(crate) fn advance(&mut self, len: usize) -> usize {
        let removed = len.min(self.len);
        self.len -= removed;

        let mut remaining = removed;
        while let Some(front) = self.chunks.front_mut() {
            if remaining == 0 {
                break;
            }
            if remaining < front.len() {
                front.advance(remaining);
                remaining = 0;
            } else {
                remaining -= front.len();
                self.chunks.pop_front();
            }
        }
        debug_assert_eq!(remaining, 0, "tracked length exceeds stored bytes");
        removed
    }

    /// Removes exactly `len` bytes from the front and returns them as one
    /// contiguous [`Bytes`]. A request that lies inside the front chunk
    /// splits it off without copying; a request spanning chunks is assembled
    /// with a single copy.
    ///
    /// Callers clamp `len` to [`len()`](Self::len) first.
    pub(crate) fn split_to(&mut self, len: usize) -> Bytes {
        debug_assert!(len <= self.len, "split_to past the buffered length");
        if len == 0 {
            return Bytes::new();
        }

        if let Some(front) = self.chunks.front_mut() {
            if len <= front.len() {
                let out = front.split_to(len);
                if front.is_empty() {
                    self.chunks.pop_front();
                }
                self.len -= len;
                return out;
            }
        }

        let mut assembled = BytesMut::with_capacity(len);
        let mut remaining = len;
        while remaining > 0 {
            let view = self.peek();
            if view.is_empty() {
                break;
            }
            let take = remaining.min(view.len());
            assembled.extend_from_slice(&view[..take]);
            self.advance(take);
            remaining -= take;
        }
        debug_assert_eq!(remaining, 0, "tracked length exceeds stored bytes");
        assembled.freeze()
    }
}
