//! RISC-V Scalar Crypto Kernel Module
//!
//! RV64 `Zkne`/`Zknd` work on 64-bit halves: `aes64esm rs1, rs2` yields the low
//! half of a forward round over the state `{rs2:rs1}`, so a full lane takes two
//! instructions with the operands swapped. The output matches x86 `AESENC` /
//! `AESDEC` once the round key is XORed in.
//!
//! Selected statically: the module only compiles when the target enables both
//! extensions.

#![allow(unsafe_code)]
#![allow(clippy::inline_always)]

use core::arch::asm;

use crate::engine::dispatcher::Backend;
use crate::engine::sweep;
use crate::kernels::constants::LANE_SIZE;
use crate::kernels::AesRound;
use crate::types::{Block, Digest, KeySchedule, State};

pub(crate) const fn detect() -> Option<Backend> {
    Some(Backend {
        name: "RISC-V Zkn",
        enc_round,
        dec_round,
        absorb,
        finalize,
        fill_1r,
        fill_4r,
        hash_and_fill,
    })
}

// =============================================================================
// INSTRUCTIONS
// =============================================================================

#[inline(always)]
fn aes64esm(rs1: u64, rs2: u64) -> u64 {
    let rd: u64;
    // SAFETY: the module is only compiled with `zkne` enabled; the instruction
    // touches registers only.
    unsafe {
        asm!(
            "aes64esm {rd}, {rs1}, {rs2}",
            rd = lateout(reg) rd,
            rs1 = in(reg) rs1,
            rs2 = in(reg) rs2,
            options(pure, nomem, nostack),
        );
    }
    rd
}

#[inline(always)]
fn aes64dsm(rs1: u64, rs2: u64) -> u64 {
    let rd: u64;
    // SAFETY: the module is only compiled with `zknd` enabled; the instruction
    // touches registers only.
    unsafe {
        asm!(
            "aes64dsm {rd}, {rs1}, {rs2}",
            rd = lateout(reg) rd,
            rs1 = in(reg) rs1,
            rs2 = in(reg) rs2,
            options(pure, nomem, nostack),
        );
    }
    rd
}

// =============================================================================
// ROUND PRIMITIVE
// =============================================================================

/// Capability token for the scalar crypto round primitive.
#[derive(Clone, Copy, Debug, Default)]
pub struct Zkn;

impl AesRound for Zkn {
    type Lane = [u64; 2];

    #[inline(always)]
    fn load(self, bytes: &[u8; LANE_SIZE]) -> [u64; 2] {
        let (words, _) = bytes.as_chunks::<8>();
        [u64::from_le_bytes(words[0]), u64::from_le_bytes(words[1])]
    }

    #[inline(always)]
    fn store(self, lane: [u64; 2], out: &mut [u8; LANE_SIZE]) {
        let (words, _) = out.as_chunks_mut::<8>();
        words[0] = lane[0].to_le_bytes();
        words[1] = lane[1].to_le_bytes();
    }

    #[inline(always)]
    fn enc(self, [lo, hi]: [u64; 2], key: [u64; 2]) -> [u64; 2] {
        [aes64esm(lo, hi) ^ key[0], aes64esm(hi, lo) ^ key[1]]
    }

    #[inline(always)]
    fn dec(self, [lo, hi]: [u64; 2], key: [u64; 2]) -> [u64; 2] {
        [aes64dsm(lo, hi) ^ key[0], aes64dsm(hi, lo) ^ key[1]]
    }

    #[inline(always)]
    fn from_words(self, words: [u64; 2]) -> [u64; 2] {
        words
    }

    #[inline(always)]
    fn to_words(self, lane: [u64; 2]) -> [u64; 2] {
        lane
    }
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Forward round on one `[low, high]` lane.
#[must_use]
pub fn enc_round(lane: [u64; 2], key: [u64; 2]) -> [u64; 2] {
    sweep::enc_round(Zkn, lane, key)
}

/// Inverse round on one `[low, high]` lane.
#[must_use]
pub fn dec_round(lane: [u64; 2], key: [u64; 2]) -> [u64; 2] {
    sweep::dec_round(Zkn, lane, key)
}

/// Absorb whole blocks into a hash state.
pub fn absorb(state: &mut State, input: &[Block]) {
    sweep::absorb(Zkn, state, input);
}

/// Finalize a hash state.
#[must_use]
pub fn finalize(state: &State) -> Digest {
    sweep::finalize(Zkn, state)
}

/// One-round generator.
pub fn fill_1r(state: &mut State, output: &mut [Block]) {
    sweep::fill_1r(Zkn, state, output);
}

/// Four-round generator.
pub fn fill_4r(state: &mut State, output: &mut [Block], schedule: &KeySchedule) {
    sweep::fill_4r(Zkn, state, output, schedule);
}

/// Fused hash-and-fill sweep.
pub fn hash_and_fill(scratchpad: &mut [Block], fill_state: &mut State) -> Digest {
    sweep::hash_and_fill(Zkn, scratchpad, fill_state)
}
