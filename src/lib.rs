//! # lzwpack
//!
//! A pure Rust library for LZW file compression and decompression with
//! variable-width bit-packed codes.
//!
//! ## Features
//!
//! - Adaptive LZW dictionary coding over arbitrary binary data
//! - Variable code width, 9 to 12 bits, promoted as the dictionary grows
//! - MSB-first bit packing with no padding except the final partial byte
//! - Streaming operation over any `Read` source and `Write` sink
//!
//! ## Quick Start
//!
//! ```rust
//! use lzwpack::{compress, decompress};
//!
//! let input = b"a banana, a banana, a banana";
//! let mut compressed = Vec::new();
//! compress(&input[..], &mut compressed)?;
//!
//! let mut restored = Vec::new();
//! decompress(compressed.as_slice(), &mut restored)?;
//! assert_eq!(restored, input);
//! # Ok::<(), lzwpack::LzwError>(())
//! ```
//!
//! ## Wire format
//!
//! The compressed stream is a raw, unframed sequence of MSB-first codes
//! starting at 9 bits. Codes 0-255 name literal bytes; codes from 256 up
//! name dictionary entries discovered during encoding. The decoder
//! rebuilds the dictionary deterministically from the code sequence, so
//! the stream carries no header, length, or checksum.

pub mod bitstream;
pub mod error;
pub mod lzw;
pub mod verify;

// Re-export commonly used items
pub use bitstream::{BitReader, BitWriter};
pub use error::{LzwError, Result};
pub use lzw::{
    compress, compress_file, decompress, decompress_file, MAX_CODE_WIDTH, MAX_DICT_SIZE,
};
pub use verify::files_identical;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
