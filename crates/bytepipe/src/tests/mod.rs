//! Unit and property tests for the pipe.
//!
//! `manual` pins the scripted contract scenarios, `property_model` checks
//! every observer against a naive flat-buffer model under arbitrary op
//! sequences, and `property_roundtrip` checks that chunking and
//! backpressure never change the bytes a consumer sees.

use alloc::vec::Vec;

use crate::{BytePipe, PipeReader};


/// Pops everything currently buffered, one front chunk at a time.
///
/// Only valid on a pipe whose abort flag is clear; an aborted pipe never
/// advances, and this helper would spin.
fn drain(pipe: &mut BytePipe) -> Vec<u8> {
    let mut out = Vec::new();
    loop {
        let front = pipe.peek();
        if front.is_empty() {
            break;
        }
        out.extend_from_slice(front);
        let n = front.len();
        pipe.pop(n);
    }
    out
}
