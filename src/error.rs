//! Error types for lzwpack operations

use std::io;
use thiserror::Error;

/// Main error type for lzwpack operations
#[derive(Debug, Error)]
pub enum LzwError {
    /// IO error occurred during file or stream operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A code in the compressed stream is neither a dictionary entry nor
    /// the next code about to be assigned
    #[error("Invalid code {code} in compressed stream (next unassigned code is {next_code})")]
    InvalidCode {
        /// The code read from the stream
        code: u32,
        /// The next code the decoder was about to assign
        next_code: u32,
    },
}

/// Result type alias for lzwpack operations
pub type Result<T> = std::result::Result<T, LzwError>;
