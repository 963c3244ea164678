//! LZW file compression utility.
//!
//! Compresses, decompresses, or verifies files from the command line.

use anyhow::{Context, Result};
use std::env;
use std::process::ExitCode;
use std::time::Instant;

fn print_usage(program: &str) {
    eprintln!(
        "LZW File Compression Utility\n\
         ----------------------------\n\
         Usage: {program} <mode> <input_file> <output_file>\n\
         \x20 <mode>: -c to compress\n\
         \x20         -d to decompress\n\
         \x20         -v to verify two files"
    );
}

fn run(mode: &str, first: &str, second: &str) -> Result<bool> {
    match mode {
        "-c" => {
            println!("Compressing '{first}' -> '{second}'...");
            lzwpack::compress_file(first, second)
                .with_context(|| format!("failed to compress '{first}'"))?;
            println!("Compression successful.");
            Ok(true)
        }
        "-d" => {
            println!("Decompressing '{first}' -> '{second}'...");
            lzwpack::decompress_file(first, second)
                .with_context(|| format!("failed to decompress '{first}'"))?;
            println!("Decompression successful.");
            Ok(true)
        }
        "-v" => {
            println!("Verifying '{first}' and '{second}'...");
            let identical = lzwpack::files_identical(first, second)
                .with_context(|| format!("failed to compare '{first}' and '{second}'"))?;
            if identical {
                println!("Verification successful: Files are identical.");
            } else {
                println!("Verification FAILED: Files are different.");
            }
            Ok(identical)
        }
        _ => unreachable!("mode validated by caller"),
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        eprintln!("Error: Invalid number of arguments.\n");
        print_usage(&args[0]);
        return ExitCode::FAILURE;
    }

    let mode = args[1].as_str();
    if !matches!(mode, "-c" | "-d" | "-v") {
        eprintln!("Error: Invalid mode '{mode}'.\n");
        print_usage(&args[0]);
        return ExitCode::FAILURE;
    }

    let start = Instant::now();
    match run(mode, &args[2], &args[3]) {
        Ok(success) => {
            println!("Operation completed in {} ms.", start.elapsed().as_millis());
            if success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            eprintln!("An error occurred: {err:#}");
            ExitCode::FAILURE
        }
    }
}
