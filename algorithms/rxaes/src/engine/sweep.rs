//! Engine Sweeps
//!
//! The hash, fill and fused loops, written once over the [`AesRound`]
//! primitive. Every function here is `#[inline(always)]` so that it is
//! compiled inside the calling backend's `#[target_feature]` context.
//!
//! All entry points take whole 64-byte blocks: stride validation happens in
//! the public API before any of this runs.

#![allow(clippy::inline_always)]

use crate::kernels::constants::{FILL_4R_ROUNDS, GEN_1R_KEY, HASH_XKEY, LANE_SIZE, NUM_LANES};
use crate::kernels::AesRound;
use crate::types::{Block, Digest, KeySchedule, State};

type Lanes<R> = [<R as AesRound>::Lane; NUM_LANES];
type RoundKeys<R> = [<R as AesRound>::Lane; FILL_4R_ROUNDS];

// =============================================================================
// LANE I/O
// =============================================================================

#[inline(always)]
fn load_lanes<R: AesRound>(r: R, bytes: &[u8; NUM_LANES * LANE_SIZE]) -> Lanes<R> {
    let (lanes, _) = bytes.as_chunks::<LANE_SIZE>();
    [
        r.load(&lanes[0]),
        r.load(&lanes[1]),
        r.load(&lanes[2]),
        r.load(&lanes[3]),
    ]
}

#[inline(always)]
fn store_lanes<R: AesRound>(r: R, lanes: &Lanes<R>, out: &mut [u8; NUM_LANES * LANE_SIZE]) {
    let (chunks, _) = out.as_chunks_mut::<LANE_SIZE>();
    for (dst, lane) in chunks.iter_mut().zip(lanes) {
        r.store(*lane, dst);
    }
}

#[inline(always)]
fn generator_keys<R: AesRound>(r: R) -> Lanes<R> {
    [
        r.from_words([GEN_1R_KEY[0].0, GEN_1R_KEY[0].1]),
        r.from_words([GEN_1R_KEY[1].0, GEN_1R_KEY[1].1]),
        r.from_words([GEN_1R_KEY[2].0, GEN_1R_KEY[2].1]),
        r.from_words([GEN_1R_KEY[3].0, GEN_1R_KEY[3].1]),
    ]
}

// =============================================================================
// ROUND GROUPS
// =============================================================================

/// Absorb one block: even lanes encrypt, odd lanes decrypt, keyed by the block.
#[inline(always)]
fn absorb_block<R: AesRound>(r: R, state: &mut Lanes<R>, block: &Lanes<R>) {
    state[0] = r.enc(state[0], block[0]);
    state[1] = r.dec(state[1], block[1]);
    state[2] = r.enc(state[2], block[2]);
    state[3] = r.dec(state[3], block[3]);
}

/// One generator step: even lanes decrypt, odd lanes encrypt.
#[inline(always)]
fn generate_block<R: AesRound>(r: R, state: &mut Lanes<R>, keys: &Lanes<R>) {
    state[0] = r.dec(state[0], keys[0]);
    state[1] = r.enc(state[1], keys[1]);
    state[2] = r.dec(state[2], keys[2]);
    state[3] = r.enc(state[3], keys[3]);
}

/// Four generator steps; group A keys lanes 0-1, group B keys lanes 2-3.
#[inline(always)]
fn generate_block_4r<R: AesRound>(
    r: R,
    state: &mut Lanes<R>,
    group_a: &RoundKeys<R>,
    group_b: &RoundKeys<R>,
) {
    for (&ka, &kb) in group_a.iter().zip(group_b) {
        generate_block(r, state, &[ka, ka, kb, kb]);
    }
}

/// Two whitening rounds, then serialize.
#[inline(always)]
fn whiten<R: AesRound>(r: R, mut state: Lanes<R>) -> Digest {
    for &(lo, hi) in &HASH_XKEY {
        let xkey = r.from_words([lo, hi]);
        absorb_block(r, &mut state, &[xkey; NUM_LANES]);
    }
    let mut digest = [0u8; NUM_LANES * LANE_SIZE];
    store_lanes(r, &state, &mut digest);
    digest
}

// =============================================================================
// ENGINES
// =============================================================================

/// Single round on one lane given as `[low, high]` words.
#[inline(always)]
pub(crate) fn enc_round<R: AesRound>(r: R, lane: [u64; 2], key: [u64; 2]) -> [u64; 2] {
    r.to_words(r.enc(r.from_words(lane), r.from_words(key)))
}

/// Single inverse round on one lane given as `[low, high]` words.
#[inline(always)]
pub(crate) fn dec_round<R: AesRound>(r: R, lane: [u64; 2], key: [u64; 2]) -> [u64; 2] {
    r.to_words(r.dec(r.from_words(lane), r.from_words(key)))
}

/// Absorb `input` into a running hash state.
#[inline(always)]
pub(crate) fn absorb<R: AesRound>(r: R, state: &mut State, input: &[Block]) {
    let mut lanes = load_lanes(r, state);
    for block in input {
        absorb_block(r, &mut lanes, &load_lanes(r, block));
    }
    store_lanes(r, &lanes, state);
}

/// Apply the finalization rounds to a hash state.
#[inline(always)]
pub(crate) fn finalize<R: AesRound>(r: R, state: &State) -> Digest {
    whiten(r, load_lanes(r, state))
}

/// One-round generator: one block of output per step.
#[inline(always)]
pub(crate) fn fill_1r<R: AesRound>(r: R, state: &mut State, output: &mut [Block]) {
    let keys = generator_keys(r);
    let mut lanes = load_lanes(r, state);
    for block in output {
        generate_block(r, &mut lanes, &keys);
        store_lanes(r, &lanes, block);
    }
    store_lanes(r, &lanes, state);
}

/// Four-round generator keyed by an external schedule.
#[inline(always)]
pub(crate) fn fill_4r<R: AesRound>(
    r: R,
    state: &mut State,
    output: &mut [Block],
    schedule: &KeySchedule,
) {
    let keys = schedule.keys();
    let group_a: RoundKeys<R> = core::array::from_fn(|i| r.load(&keys[i]));
    let group_b: RoundKeys<R> = core::array::from_fn(|i| r.load(&keys[FILL_4R_ROUNDS + i]));
    let mut lanes = load_lanes(r, state);
    for block in output {
        generate_block_4r(r, &mut lanes, &group_a, &group_b);
        store_lanes(r, &lanes, block);
    }
    store_lanes(r, &lanes, state);
}

/// Single sweep: absorb each stride, then overwrite it with generator output.
#[inline(always)]
pub(crate) fn hash_and_fill<R: AesRound>(
    r: R,
    scratchpad: &mut [Block],
    fill_state: &mut State,
) -> Digest {
    let keys = generator_keys(r);
    let mut hash_lanes = load_lanes(r, &crate::engine::HASH_INIT_STATE);
    let mut fill_lanes = load_lanes(r, fill_state);

    for block in scratchpad {
        // The stride must be read before it is overwritten below.
        let data = load_lanes(r, block);
        absorb_block(r, &mut hash_lanes, &data);
        generate_block(r, &mut fill_lanes, &keys);
        store_lanes(r, &fill_lanes, block);
    }

    store_lanes(r, &fill_lanes, fill_state);
    whiten(r, hash_lanes)
}
