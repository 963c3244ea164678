//! Integration tests for LZW compression round trips

use lzwpack::{compress, compress_file, decompress, decompress_file, files_identical, LzwError};
use proptest::prelude::*;
use std::path::PathBuf;

fn round_trip(data: &[u8]) -> Vec<u8> {
    let mut compressed = Vec::new();
    compress(data, &mut compressed).unwrap();
    let mut decompressed = Vec::new();
    decompress(compressed.as_slice(), &mut decompressed).unwrap();
    decompressed
}

fn temp_dir() -> PathBuf {
    let dir = std::env::temp_dir().join("lzwpack_integration_tests");
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn round_trip_empty() {
    assert_eq!(round_trip(b""), b"");
}

#[test]
fn round_trip_single_byte() {
    assert_eq!(round_trip(&[0]), [0]);
    assert_eq!(round_trip(&[255]), [255]);
}

#[test]
fn round_trip_text() {
    let input = b"To be, or not to be, that is the question: \
        Whether 'tis nobler in the mind to suffer \
        The slings and arrows of outrageous fortune, \
        Or to take arms against a sea of troubles";
    assert_eq!(round_trip(input), input);
}

#[test]
fn round_trip_binary_with_zeros() {
    let mut input = vec![0u8; 256];
    input.extend((0..=255u8).rev());
    input.extend(vec![0u8; 256]);
    assert_eq!(round_trip(&input), input);
}

#[test]
fn round_trip_kwkwk_pattern() {
    assert_eq!(round_trip(b"ABABABA"), b"ABABABA");
    // Runs of one byte hit the self-referencing case repeatedly
    let runs = vec![b'z'; 10_000];
    assert_eq!(round_trip(&runs), runs);
}

#[test]
fn round_trip_large_mixed_content() {
    let mut input = Vec::new();
    for block in 0..64u32 {
        input.extend_from_slice(&block.to_le_bytes());
        input.extend_from_slice(&b"lorem ipsum dolor sit amet ".repeat(40));
        input.extend((0..=255u8).map(|b| b.wrapping_mul(block as u8 | 1)));
    }
    assert_eq!(round_trip(&input), input);
}

#[test]
fn corrupt_stream_is_rejected() {
    // A stream of 0xFF bytes decodes a first literal then hits a code
    // that is far beyond anything the dictionary could contain.
    let garbage = vec![0xFFu8; 16];
    let mut output = Vec::new();
    let result = decompress(garbage.as_slice(), &mut output);
    assert!(matches!(result, Err(LzwError::InvalidCode { .. })));
}

#[test]
fn file_round_trip_and_verify() {
    let dir = temp_dir();
    let original = dir.join("sample.bin");
    let packed = dir.join("sample.lzw");
    let restored = dir.join("sample.out");

    let data: Vec<u8> = (0..40_000u32)
        .map(|i| (i.wrapping_mul(2_654_435_761) >> 13) as u8)
        .collect();
    std::fs::write(&original, &data).unwrap();

    compress_file(&original, &packed).unwrap();
    decompress_file(&packed, &restored).unwrap();

    assert!(files_identical(&original, &restored).unwrap());
    assert!(!files_identical(&original, &packed).unwrap());
}

proptest! {
    #[test]
    fn round_trip_arbitrary_bytes(data in proptest::collection::vec(any::<u8>(), 0..4096)) {
        let mut compressed = Vec::new();
        compress(data.as_slice(), &mut compressed).unwrap();
        let mut decompressed = Vec::new();
        decompress(compressed.as_slice(), &mut decompressed).unwrap();
        prop_assert_eq!(decompressed, data);
    }

    #[test]
    fn compressed_output_is_deterministic(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
        let mut first = Vec::new();
        compress(data.as_slice(), &mut first).unwrap();
        let mut second = Vec::new();
        compress(data.as_slice(), &mut second).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn truncated_stream_never_errors(data in proptest::collection::vec(any::<u8>(), 1..1024), cut in 1usize..16) {
        let mut compressed = Vec::new();
        compress(data.as_slice(), &mut compressed).unwrap();
        let keep = compressed.len().saturating_sub(cut);
        let mut decompressed = Vec::new();
        decompress(&compressed[..keep], &mut decompressed).unwrap();
        prop_assert!(data.starts_with(&decompressed));
    }
}
