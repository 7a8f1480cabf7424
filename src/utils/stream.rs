//! Buffered stream helpers shared by the encoder and decoder.

use std::io::{self, BufWriter, Read, Write};

use crate::error::Result;

/// Size of the read buffer and of the output `BufWriter`.
pub(crate) const BUFFER_SIZE: usize = 32 * 1024;

/// Reads into `buf`, restarting on `ErrorKind::Interrupted`.
///
/// Returns `Ok(0)` only at end of stream.
pub(crate) fn read_chunk<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    loop {
        match reader.read(buf) {
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            other => return other,
        }
    }
}

/// Flushes `out` whatever `result` holds, then reports the first failure.
///
/// A transform error wins over a flush error; the flush is still attempted
/// so that everything produced before the failure reaches the consumer.
pub(crate) fn finish<W: Write, T>(mut out: BufWriter<W>, result: Result<T>) -> Result<T> {
    let flushed = out.flush();
    let value = result?;
    flushed?;
    Ok(value)
}
