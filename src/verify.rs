//! Byte-for-byte file comparison.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::Result;

/// Compare two files byte by byte.
///
/// Returns `Ok(false)` as soon as the sizes differ or the first
/// mismatching byte is found.
pub fn files_identical<P: AsRef<Path>, Q: AsRef<Path>>(first: P, second: Q) -> Result<bool> {
    let first = File::open(first)?;
    let second = File::open(second)?;

    if first.metadata()?.len() != second.metadata()?.len() {
        return Ok(false);
    }

    let mut first = BufReader::new(first);
    let mut second = BufReader::new(second);
    let mut buf_a = [0u8; 8192];
    let mut buf_b = [0u8; 8192];

    loop {
        let n = first.read(&mut buf_a)?;
        if n == 0 {
            return Ok(true);
        }
        second.read_exact(&mut buf_b[..n])?;
        if buf_a[..n] != buf_b[..n] {
            return Ok(false);
        }
    }
}
