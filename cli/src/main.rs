//! rxaes CLI
//!
//! Hash files and print generator streams from the command line.

mod commands;
mod logging;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check_mode, fill_stream, hash_files, print_backend, FillArgs};
use std::path::PathBuf;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "rxaes")]
#[command(about = "AES-round hash and scratchpad fill engines", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Files to hash (if no subcommand)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash files (length must be a multiple of 64 bytes)
    Hash {
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },
    /// Verify checksums from file (like sha256sum -c)
    Check {
        #[arg(value_name = "FILE")]
        checksum_file: PathBuf,
    },
    /// Print a generator stream and the resulting state
    Fill(FillArgs),
    /// Print the active hardware backend
    Backend,
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Hash { files }) => hash_files(files)?,
        Some(Commands::Check { checksum_file }) => check_mode(checksum_file)?,
        Some(Commands::Fill(args)) => fill_stream(args)?,
        Some(Commands::Backend) => print_backend(),
        None => {
            if cli.files.is_empty() {
                eprintln!("Error: No files specified");
                eprintln!("Usage: rxaes [FILE]... or rxaes --help");
                std::process::exit(1);
            }

            hash_files(&cli.files)?;
        }
    }

    Ok(())
}
