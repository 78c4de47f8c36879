//! Error type for the fallible adapter surfaces.

use thiserror::Error;

/// Why an adapter could not move bytes through the pipe.
///
/// The facet traits themselves never return this: their contract is to
/// clamp and keep going. `PipeError` exists for surfaces that must report
/// a definite outcome instead, such as the [`std::io`] adapters, where
/// "the pipe will never accept this" has to be distinguishable from "not
/// right now".
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PipeError {
    /// The write side has been closed; no further bytes will be accepted.
    #[error("pipe is closed to further writes")]
    Closed,

    /// The abort flag is set; all pushes and pops are permanent no-ops.
    #[error("pipe was aborted")]
    Aborted,
}
