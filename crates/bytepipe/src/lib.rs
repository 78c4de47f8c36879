//! A bounded, flow-controlled, in-memory byte pipe.
//!
//! [`BytePipe`] decouples a producer that supplies bytes at its own pace from
//! a consumer that drains them at its own pace, while holding at most a fixed
//! number of unconsumed bytes at any moment. The fixed bound is what gives
//! higher-level stream protocols backpressure: the producer can never run
//! further ahead of the consumer than the pipe's capacity.
//!
//! The pipe is one owned value with two disjoint facets:
//!
//! - [`PipeWriter`] is the producer side: append-only, capacity-limited
//!   [`push`](PipeWriter::push), plus the [`close`](PipeWriter::close)
//!   end-of-production signal.
//! - [`PipeReader`] is the consumer side: in-order
//!   [`peek`](PipeReader::peek)/[`pop`](PipeReader::pop) consumption and the
//!   [`is_finished`](PipeReader::is_finished) terminal predicate.
//!
//! Both facets operate on the same buffer and the same byte accounting, so
//! the counters can never drift apart. Either facet can be handed out on its
//! own as `&mut dyn PipeWriter` or `&mut dyn PipeReader`.
//!
//! # Overflow is truncation, not an error
//!
//! A `push` that does not fit keeps the longest fitting prefix and silently
//! drops the rest. No error is raised; the accepted count is the return
//! value, and the cumulative counters expose the same information. Producers
//! that must not lose data check
//! [`available_capacity`](PipeWriter::available_capacity) and size their
//! chunks to fit. This tolerance is deliberate and load-bearing: protocol
//! layers built on the pipe depend on the clamping semantics, so the crate
//! will not grow an error-returning variant.
//!
//! # Aborting
//!
//! A surrounding protocol layer can poison the pipe with
//! [`BytePipe::set_error`]. From then on every push and pop is a no-op while
//! the observers keep reporting the frozen state. The flag is never raised by
//! the pipe itself and can never be cleared.
//!
//! The pipe is a plain single-threaded structure: no operation blocks,
//! suspends, or spawns, and a caller that needs cross-thread access wraps the
//! whole pipe in its own synchronization.
//!
//! # Examples
//!
//! ```
//! use bytepipe::{BytePipe, PipeReader, PipeWriter};
//!
//! let mut pipe = BytePipe::new(8);
//!
//! // The producer may run ahead of the consumer, but only up to capacity:
//! // "hello, w" fits, "orld" is dropped.
//! assert_eq!(pipe.push(b"hello, world"), 8);
//! assert_eq!(pipe.available_capacity(), 0);
//!
//! // The consumer drains in producer order.
//! assert_eq!(pipe.peek(), b"hello, w");
//! pipe.pop(6);
//! assert_eq!(pipe.pop_bytes(2).as_ref(), b" w");
//!
//! pipe.close();
//! assert!(pipe.is_finished());
//! ```

#![no_std]

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod chunks;
mod error;
#[cfg(feature = "std")]
mod io;
mod pipe;
mod reader;
mod writer;

#[cfg(test)]
mod tests;

pub use bytes::Bytes;
pub use error::PipeError;
pub use pipe::BytePipe;
pub use reader::PipeReader;
pub use writer::PipeWriter;
