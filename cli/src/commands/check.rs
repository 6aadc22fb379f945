//! Check Command
//!
//! Verify checksums from file (like sha256sum -c).

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::warn;

use super::digest_file;

// =============================================================================
// CHECK
// =============================================================================

/// Verify checksums from a checksum file.
pub fn check_mode(checksum_file: &PathBuf) -> Result<()> {
    let file = File::open(checksum_file)
        .with_context(|| format!("Failed to open: {}", checksum_file.display()))?;

    let reader = BufReader::new(file);
    let mut total = 0;
    let mut failed = 0;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Format: "hash  filename" (two spaces)
        let Some((expected_hash, file_path)) = line.split_once("  ") else {
            warn!("Invalid format: {}", line);
            continue;
        };
        let expected_hash = expected_hash.trim();
        let file_path = file_path.trim();
        total += 1;

        match digest_file(Path::new(file_path)) {
            Ok(digest) if hex::encode(digest).eq_ignore_ascii_case(expected_hash) => {
                println!("{file_path}: OK");
            }
            Ok(_) => {
                println!("{file_path}: FAILED");
                failed += 1;
            }
            Err(e) => {
                println!("{file_path}: FAILED ({e:#})");
                failed += 1;
            }
        }
    }

    println!();
    if failed == 0 {
        println!("All {total} checksums verified");
    } else {
        eprintln!("WARNING: {failed} of {total} checksums did NOT match");
        std::process::exit(1);
    }

    Ok(())
}
