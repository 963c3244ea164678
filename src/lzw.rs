//! LZW compression and decompression with variable-width codes.
//!
//! The dictionary starts with the 256 single-byte entries and grows by
//! one entry per emitted code, up to [`MAX_DICT_SIZE`]. Codes start at
//! 9 bits and widen to [`MAX_CODE_WIDTH`] as the dictionary fills. The
//! decoder rebuilds the identical dictionary from the code sequence
//! alone; no dictionary data is ever transmitted.
//!
//! Wire format:
//! ```text
//! [codes: variable width, MSB first, tightly packed]
//! ```
//!
//! There is no header, length, or checksum. The final byte may carry
//! zero padding bits, discarded on decode because the decoder stops at
//! the first incomplete code.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use ahash::AHashMap;

use crate::bitstream::{BitReader, BitWriter};
use crate::error::{LzwError, Result};

/// Maximum code width in bits.
pub const MAX_CODE_WIDTH: u32 = 12;

/// Maximum number of dictionary entries (4096).
pub const MAX_DICT_SIZE: u32 = 1 << MAX_CODE_WIDTH;

/// Width of the first code in a stream.
const INITIAL_CODE_WIDTH: u32 = 9;

/// Width promotion rule shared by the encoder and the decoder.
///
/// Promotes by exactly one bit when the next code to be assigned would
/// no longer fit in the current width. Both sides must apply this at
/// the same point, immediately after a dictionary insertion, or their
/// dictionaries desynchronize.
fn next_width(current: u32, next_code: u32, max: u32) -> u32 {
    if next_code == (1 << current) && current < max {
        current + 1
    } else {
        current
    }
}

/// Compress a byte stream into an LZW code stream.
///
/// Greedy longest-match loop: the current match extends while the
/// extended sequence is a known dictionary key; otherwise the match's
/// code is emitted and the extended sequence becomes a new entry.
/// Empty input produces an empty output stream.
pub fn compress<R: Read, W: Write>(input: R, output: W) -> Result<()> {
    let mut dictionary: AHashMap<Vec<u8>, u32> = AHashMap::with_capacity(MAX_DICT_SIZE as usize);
    for byte in 0..=255u8 {
        dictionary.insert(vec![byte], u32::from(byte));
    }

    let mut next_code: u32 = 256;
    let mut width = INITIAL_CODE_WIDTH;
    let mut writer = BitWriter::new(output);

    // Current longest known match and its code
    let mut current: Vec<u8> = Vec::new();
    let mut current_code: u32 = 0;

    for byte in input.bytes() {
        let byte = byte?;
        if current.is_empty() {
            current.push(byte);
            current_code = u32::from(byte);
            continue;
        }

        current.push(byte);
        if let Some(&code) = dictionary.get(current.as_slice()) {
            current_code = code;
            continue;
        }

        // The extended sequence is unknown: emit the match so far and
        // register the extension as the next dictionary entry.
        writer.write(current_code, width)?;
        if next_code < MAX_DICT_SIZE {
            dictionary.insert(std::mem::take(&mut current), next_code);
            next_code += 1;
        } else {
            current.clear();
        }
        width = next_width(width, next_code, MAX_CODE_WIDTH);

        current.push(byte);
        current_code = u32::from(byte);
    }

    if !current.is_empty() {
        writer.write(current_code, width)?;
    }
    writer.finish()
}

/// Decompress an LZW code stream back into the original bytes.
///
/// Rebuilds the encoder's dictionary in lock step. A code equal to the
/// next unassigned code is the KWKWK case: the entry is the previous
/// sequence extended by its own first byte. Any other unknown code is
/// stream corruption. A partial code at end of stream terminates the
/// decode normally.
pub fn decompress<R: Read, W: Write>(input: R, mut output: W) -> Result<()> {
    let mut dictionary: Vec<Vec<u8>> = Vec::with_capacity(MAX_DICT_SIZE as usize);
    for byte in 0..=255u8 {
        dictionary.push(vec![byte]);
    }

    let mut next_code: u32 = 256;
    let mut width = INITIAL_CODE_WIDTH;
    let mut reader = BitReader::new(input);

    let first = match reader.read(width)? {
        Some(code) => code,
        None => return Ok(()),
    };
    let mut previous: Vec<u8> = match dictionary.get(first as usize) {
        Some(entry) => entry.clone(),
        None => {
            return Err(LzwError::InvalidCode {
                code: first,
                next_code,
            })
        }
    };
    output.write_all(&previous)?;

    while let Some(code) = reader.read(width)? {
        let entry: Vec<u8> = if let Some(entry) = dictionary.get(code as usize) {
            entry.clone()
        } else if code == next_code {
            // KWKWK: the encoder emitted a code one step ahead of what
            // this side has inserted. The entry must be the previous
            // sequence extended by its own first byte.
            let mut entry = previous.clone();
            entry.push(previous[0]);
            entry
        } else {
            return Err(LzwError::InvalidCode { code, next_code });
        };

        output.write_all(&entry)?;

        if next_code < MAX_DICT_SIZE {
            let mut new_entry = previous;
            new_entry.push(entry[0]);
            dictionary.push(new_entry);
            next_code += 1;
        }
        // When a code arrives, this side has made one insertion fewer
        // than the encoder had when it emitted that code. Checking one
        // assignment ahead keeps the read width equal to the width the
        // encoder used at every 512/1024/2048 boundary.
        width = next_width(width, next_code + 1, MAX_CODE_WIDTH);

        previous = entry;
    }
    Ok(())
}

/// Compress a file into a new file.
pub fn compress_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    let reader = BufReader::new(File::open(input)?);
    let writer = BufWriter::new(File::create(output)?);
    compress(reader, writer)
}

/// Decompress a file into a new file.
pub fn decompress_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    let reader = BufReader::new(File::open(input)?);
    let writer = BufWriter::new(File::create(output)?);
    decompress(reader, writer)
}
