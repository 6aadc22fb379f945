//! # `PractRand` Stream Generator
//!
//! Writes an endless raw byte stream to stdout for statistical testing,
//! e.g. `rxaes_stream 4r | RNG_test stdin`.
//!
//! Modes:
//! - `hash`: digests of an incrementing 64-bit counter (one 64-byte block each)
//! - `1r`: the one-round generator stream
//! - `4r`: the four-round generator stream under a seed-derived key schedule
//! - `fused`: a scratchpad repeatedly passed through the fused sweep; the
//!   rewritten pad and the digest are both emitted

mod logging;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rxaes::{KeySchedule, State, KEY_SCHEDULE_SIZE, STATE_SIZE};
use std::io::{self, ErrorKind, Write};
use tracing::info;

/// Bytes produced per generator call.
const CHUNK: usize = 64 * 1024;

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum Mode {
    Hash,
    #[value(name = "1r")]
    OneRound,
    #[value(name = "4r")]
    FourRound,
    Fused,
}

#[derive(Parser)]
#[command(name = "rxaes_stream")]
#[command(about = "Raw rxaes output stream for PractRand", long_about = None)]
struct Args {
    /// Stream to generate
    #[arg(value_enum, default_value_t = Mode::OneRound)]
    mode: Mode,

    /// Seed for the initial state and key schedule
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

/// Expand a 64-bit seed into `N` bytes by hashing `seed || index` blocks.
fn derive<const N: usize>(seed: u64) -> Result<[u8; N]> {
    let mut out = [0u8; N];
    for (index, chunk) in out.chunks_mut(STATE_SIZE).enumerate() {
        let mut block = [0u8; 64];
        block[..8].copy_from_slice(&seed.to_le_bytes());
        block[8..16].copy_from_slice(&(index as u64).to_le_bytes());
        let digest = rxaes::hash(&block)?;
        chunk.copy_from_slice(&digest[..chunk.len()]);
    }
    Ok(out)
}

/// Run `step` until stdout closes; a broken pipe is the normal way to stop.
fn pump(mut step: impl FnMut(&mut dyn Write) -> Result<()>) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = io::BufWriter::new(stdout.lock());
    loop {
        if let Err(e) = step(&mut handle) {
            if let Some(io_err) = e.downcast_ref::<io::Error>() {
                if io_err.kind() == ErrorKind::BrokenPipe {
                    return Ok(());
                }
            }
            return Err(e);
        }
    }
}

fn main() -> Result<()> {
    logging::init_tracing();
    let args = Args::parse();
    info!(mode = ?args.mode, seed = args.seed, backend = rxaes::active_backend(), "streaming");

    let mut state: State = derive(args.seed)?;
    let keys = KeySchedule::from_bytes(&derive::<KEY_SCHEDULE_SIZE>(args.seed ^ u64::MAX)?);
    let mut buffer = vec![0u8; CHUNK];

    match args.mode {
        Mode::Hash => {
            let mut counter = args.seed;
            pump(|out| {
                let mut block = [0u8; 64];
                for (i, item) in block.iter_mut().enumerate() {
                    *item = counter.to_le_bytes()[i % 8];
                }
                out.write_all(&rxaes::hash(&block)?)?;
                counter = counter.wrapping_add(1);
                Ok(())
            })
        }
        Mode::OneRound => pump(|out| {
            rxaes::fill_1r(&mut state, &mut buffer)?;
            out.write_all(&buffer)?;
            Ok(())
        }),
        Mode::FourRound => pump(|out| {
            rxaes::fill_4r(&mut state, &mut buffer, &keys)?;
            out.write_all(&buffer)?;
            Ok(())
        }),
        Mode::Fused => {
            rxaes::fill_1r(&mut state, &mut buffer).context("initial scratchpad fill")?;
            pump(|out| {
                let digest = rxaes::hash_and_fill(&mut buffer, &mut state)?;
                out.write_all(&buffer)?;
                out.write_all(&digest)?;
                Ok(())
            })
        }
    }
}
