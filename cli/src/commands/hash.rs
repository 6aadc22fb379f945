//! Hash Command
//!
//! File hashing, one file per Rayon task.

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Read size; a multiple of the 64-byte stride so no bytes are buffered
/// between reads of a well-formed file.
const READ_BUFFER: usize = 128 * 1024;

/// Stream one file through the incremental hasher.
pub fn digest_file(path: &Path) -> Result<rxaes::Digest> {
    let mut file =
        File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;

    let mut hasher = rxaes::Hasher::new();
    let mut buffer = vec![0u8; READ_BUFFER];

    loop {
        let n = file
            .read(&mut buffer)
            .with_context(|| format!("Failed to read: {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    debug!(path = %path.display(), bytes = hasher.absorbed(), "hashed file");
    hasher
        .finalize()
        .with_context(|| format!("Cannot hash {}", path.display()))
}

/// Hash files in parallel and print `digest  path` lines in argument order.
pub fn hash_files(files: &[PathBuf]) -> Result<()> {
    let results: Vec<Result<String>> = files
        .par_iter()
        .map(|path| digest_file(path).map(hex::encode))
        .collect();

    let mut failed = 0usize;
    for (path, result) in files.iter().zip(results) {
        match result {
            Ok(hex_hash) => println!("{}  {}", hex_hash, path.display()),
            Err(e) => {
                warn!("{:#}", e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("Failed to hash {failed} file(s)");
    }

    Ok(())
}
