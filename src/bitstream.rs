//! Bit-level stream reader and writer.
//!
//! Codes are packed most-significant-bit first and tightly across byte
//! boundaries. The only padding in the stream is the zero fill of the
//! final partial byte, emitted when the writer is finished.

use crate::error::Result;
use std::io::{self, Read, Write};

/// Reads integer codes of arbitrary bit width from a byte stream.
///
/// Holds at most one partially consumed byte. End of the underlying
/// stream is reported as `Ok(None)`, even when it lands in the middle
/// of a code; a truncated final code is treated as end of stream, not
/// as corruption.
pub struct BitReader<R: Read> {
    input: R,
    buffer: u8,
    bit_count: u8,
}

impl<R: Read> BitReader<R> {
    /// Create a new reader wrapping a byte source.
    pub fn new(input: R) -> Self {
        Self {
            input,
            buffer: 0,
            bit_count: 0,
        }
    }

    /// Read a single `width`-bit code, MSB first.
    ///
    /// Returns `Ok(None)` once the underlying stream is exhausted.
    pub fn read(&mut self, width: u32) -> Result<Option<u32>> {
        let mut code = 0u32;
        for _ in 0..width {
            if self.bit_count == 0 {
                match self.next_byte()? {
                    Some(byte) => {
                        self.buffer = byte;
                        self.bit_count = 8;
                    }
                    None => return Ok(None),
                }
            }
            code = (code << 1) | u32::from(self.buffer >> 7);
            self.buffer <<= 1;
            self.bit_count -= 1;
        }
        Ok(Some(code))
    }

    /// Pull the next byte from the source, or `None` at end of stream.
    fn next_byte(&mut self) -> Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.input.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// Writes integer codes of arbitrary bit width to a byte stream.
///
/// Bits accumulate in an 8-bit buffer and are emitted one byte at a
/// time. Call [`BitWriter::finish`] when done; if the writer is dropped
/// without it, the pending partial byte is still flushed on a best
/// effort basis so no written code is ever lost on an error path.
pub struct BitWriter<W: Write> {
    output: W,
    buffer: u8,
    bit_count: u8,
    finished: bool,
}

impl<W: Write> BitWriter<W> {
    /// Create a new writer wrapping a byte sink.
    pub fn new(output: W) -> Self {
        Self {
            output,
            buffer: 0,
            bit_count: 0,
            finished: false,
        }
    }

    /// Write the low `width` bits of `code`, MSB first.
    pub fn write(&mut self, code: u32, width: u32) -> Result<()> {
        for i in (0..width).rev() {
            let bit = ((code >> i) & 1) as u8;
            self.buffer = (self.buffer << 1) | bit;
            self.bit_count += 1;
            if self.bit_count == 8 {
                self.output.write_all(&[self.buffer])?;
                self.buffer = 0;
                self.bit_count = 0;
            }
        }
        Ok(())
    }

    /// Flush the pending partial byte, zero padded on the right, and
    /// flush the underlying sink.
    pub fn finish(&mut self) -> Result<()> {
        self.flush_partial()?;
        self.output.flush()?;
        self.finished = true;
        Ok(())
    }

    fn flush_partial(&mut self) -> io::Result<()> {
        if self.bit_count == 0 {
            return Ok(());
        }
        let byte = self.buffer << (8 - self.bit_count);
        self.buffer = 0;
        self.bit_count = 0;
        self.output.write_all(&[byte])
    }
}

impl<W: Write> Drop for BitWriter<W> {
    fn drop(&mut self) {
        if !self.finished {
            let _ = self.flush_partial();
        }
    }
}
