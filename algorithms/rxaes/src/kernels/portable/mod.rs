//! Portable implementation of the round primitive.
//!
//! Pure software AES rounds over byte arrays. Slow, but available on every
//! target, and the reference every hardware backend is checked against.

#![allow(clippy::inline_always)]

use self::utils::{aesdec, aesenc, U128};
use crate::engine::dispatcher::Backend;
use crate::engine::sweep;
use crate::kernels::constants::LANE_SIZE;
use crate::kernels::AesRound;
use crate::types::{Block, Digest, KeySchedule, State};

mod utils;

// =============================================================================
// ROUND PRIMITIVE
// =============================================================================

/// Capability token for the software round primitive.
#[derive(Clone, Copy, Debug, Default)]
pub struct Portable;

impl AesRound for Portable {
    type Lane = U128;

    #[inline(always)]
    fn load(self, bytes: &[u8; LANE_SIZE]) -> U128 {
        U128::from_bytes(*bytes)
    }

    #[inline(always)]
    fn store(self, lane: U128, out: &mut [u8; LANE_SIZE]) {
        *out = lane.b;
    }

    #[inline(always)]
    fn enc(self, lane: U128, key: U128) -> U128 {
        aesenc(lane, key)
    }

    #[inline(always)]
    fn dec(self, lane: U128, key: U128) -> U128 {
        aesdec(lane, key)
    }

    #[inline(always)]
    fn from_words(self, words: [u64; 2]) -> U128 {
        U128::from_u64s(words[0], words[1])
    }
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Forward round on one `[low, high]` lane.
#[must_use]
pub fn enc_round(lane: [u64; 2], key: [u64; 2]) -> [u64; 2] {
    sweep::enc_round(Portable, lane, key)
}

/// Inverse round on one `[low, high]` lane.
#[must_use]
pub fn dec_round(lane: [u64; 2], key: [u64; 2]) -> [u64; 2] {
    sweep::dec_round(Portable, lane, key)
}

/// Absorb whole blocks into a hash state.
pub fn absorb(state: &mut State, input: &[Block]) {
    sweep::absorb(Portable, state, input);
}

/// Finalize a hash state.
#[must_use]
pub fn finalize(state: &State) -> Digest {
    sweep::finalize(Portable, state)
}

/// One-round generator.
pub fn fill_1r(state: &mut State, output: &mut [Block]) {
    sweep::fill_1r(Portable, state, output);
}

/// Four-round generator.
pub fn fill_4r(state: &mut State, output: &mut [Block], schedule: &KeySchedule) {
    sweep::fill_4r(Portable, state, output, schedule);
}

/// Fused hash-and-fill sweep.
pub fn hash_and_fill(scratchpad: &mut [Block], fill_state: &mut State) -> Digest {
    sweep::hash_and_fill(Portable, scratchpad, fill_state)
}

pub(crate) const fn backend() -> Backend {
    Backend {
        name: "Portable",
        enc_round,
        dec_round,
        absorb,
        finalize,
        fill_1r,
        fill_4r,
        hash_and_fill,
    }
}
