//! Fill Command
//!
//! Print a one- or four-round generator stream in hex, 64 bytes per line,
//! followed by the state the stream leaves behind.

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use rxaes::{KeySchedule, State, BLOCK_SIZE, STATE_SIZE};
use std::io::{self, BufWriter, Write};
use tracing::info;

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum Rounds {
    /// One-round generator (fixed keys)
    #[value(name = "1")]
    One,
    /// Four-round generator (external key schedule)
    #[value(name = "4")]
    Four,
}

#[derive(Args, Debug)]
pub struct FillArgs {
    /// Initial state as 128 hex digits (default: all zero)
    #[arg(long, value_name = "HEX")]
    seed: Option<String>,

    /// Number of bytes to generate (multiple of 64)
    #[arg(long, value_name = "N", default_value_t = 256)]
    bytes: usize,

    /// Generator variant
    #[arg(long, value_enum, default_value_t = Rounds::One)]
    rounds: Rounds,

    /// Four-round key schedule as 256 hex digits
    #[arg(long, value_name = "HEX", required_if_eq("rounds", "4"))]
    keys: Option<String>,
}

fn parse_seed(seed: Option<&str>) -> Result<State> {
    let Some(seed) = seed else {
        return Ok([0u8; STATE_SIZE]);
    };
    let bytes = hex::decode(seed).context("--seed is not valid hex")?;
    let len = bytes.len();
    bytes
        .try_into()
        .map_err(|_| anyhow::anyhow!("--seed must be {STATE_SIZE} bytes, got {len}"))
}

/// Generate the requested stream and print it.
pub fn fill_stream(args: &FillArgs) -> Result<()> {
    let mut state = parse_seed(args.seed.as_deref())?;

    let stream = match args.rounds {
        Rounds::One => rxaes::expand_1r(&mut state, args.bytes)?,
        Rounds::Four => {
            let Some(keys) = args.keys.as_deref() else {
                bail!("--keys is required with --rounds 4");
            };
            let keys = hex::decode(keys).context("--keys is not valid hex")?;
            let schedule = KeySchedule::try_from(keys.as_slice())?;
            rxaes::expand_4r(&mut state, args.bytes, &schedule)?
        }
    };

    info!(
        backend = rxaes::active_backend(),
        rounds = ?args.rounds,
        bytes = args.bytes,
        "generated stream"
    );

    let mut out = BufWriter::new(io::stdout().lock());
    for block in stream.chunks(BLOCK_SIZE) {
        writeln!(out, "{}", hex::encode(block))?;
    }
    writeln!(out, "state: {}", hex::encode(state))?;
    out.flush()?;

    Ok(())
}
