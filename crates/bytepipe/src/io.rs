//! Non-blocking [`std::io`] adapters for [`BytePipe`].
//!
//! The facet traits clamp silently; `std::io` callers instead expect a
//! definite verdict from every call. These impls translate: saturation and
//! emptiness become [`ErrorKind::WouldBlock`], writing past `close()`
//! becomes [`ErrorKind::BrokenPipe`], an aborted pipe becomes
//! [`ErrorKind::ConnectionAborted`], and `read` returning `Ok(0)` is
//! reserved for genuine EOF (closed and fully drained) or an empty
//! destination buffer.

use std::io::{self, ErrorKind, Read, Write};

use crate::{error::PipeError, pipe::BytePipe, reader::PipeReader, writer::PipeWriter};

impl Write for BytePipe {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.has_error() {
            return Err(io::Error::new(ErrorKind::ConnectionAborted, PipeError::Aborted));
        }
        if self.is_closed() {
            return Err(io::Error::new(ErrorKind::BrokenPipe, PipeError::Closed));
        }
        if buf.is_empty() {
            return Ok(0);
        }
        let accepted = self.push(buf);
        if accepted == 0 {
            // Open but saturated. `Ok(0)` would read as "this sink is
            // done" to `write_all`, so report backpressure instead.
            return Err(ErrorKind::WouldBlock.into());
        }
        Ok(accepted)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Read for BytePipe {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.has_error() {
            return Err(io::Error::new(ErrorKind::ConnectionAborted, PipeError::Aborted));
        }
        if buf.is_empty() {
            return Ok(0);
        }
        if self.bytes_buffered() == 0 {
            if self.is_closed() {
                return Ok(0);
            }
            return Err(ErrorKind::WouldBlock.into());
        }
        let mut filled = 0;
        while filled < buf.len() {
            let front = self.peek();
            if front.is_empty() {
                break;
            }
            let take = front.len().min(buf.len() - filled);
            buf[filled..filled + take].copy_from_slice(&front[..take]);
            self.pop(take);
            filled += take;
        }
        Ok(filled)
    }
}
