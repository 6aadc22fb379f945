//! ARMv8 Crypto Extension Kernel Module
//!
//! `AESE`/`AESD` XOR the key *before* the byte substitution, so rounds run with
//! a zero key and the real key is XORed after `AESMC`/`AESIMC` to match the
//! x86 round semantics.

#![allow(unsafe_code)]
#![allow(clippy::inline_always)]

use core::arch::aarch64::{
    uint8x16_t, vaesdq_u8, vaeseq_u8, vaesimcq_u8, vaesmcq_u8, vdupq_n_u8, veorq_u8, vld1q_u8,
    vst1q_u8,
};

use crate::engine::dispatcher::Backend;
use crate::engine::sweep;
use crate::kernels::constants::LANE_SIZE;
use crate::kernels::AesRound;
use crate::types::{Block, Digest, KeySchedule, State};

// =============================================================================
// DETECTION
// =============================================================================

fn has_aes() -> bool {
    #[cfg(feature = "std")]
    {
        std::arch::is_aarch64_feature_detected!("aes")
    }
    #[cfg(not(feature = "std"))]
    {
        cfg!(target_feature = "aes")
    }
}

pub(crate) fn detect() -> Option<Backend> {
    has_aes().then_some(Backend {
        name: "ARMv8 AES",
        enc_round: safe_enc_round,
        dec_round: safe_dec_round,
        absorb: safe_absorb,
        finalize: safe_finalize,
        fill_1r: safe_fill_1r,
        fill_4r: safe_fill_4r,
        hash_and_fill: safe_hash_and_fill,
    })
}

// =============================================================================
// ROUND PRIMITIVE
// =============================================================================

/// Capability token: exists only once the AES extension is known to be present.
#[derive(Clone, Copy, Debug)]
pub struct ArmAes(());

impl AesRound for ArmAes {
    type Lane = uint8x16_t;

    #[inline(always)]
    fn load(self, bytes: &[u8; LANE_SIZE]) -> uint8x16_t {
        // SAFETY: NEON is implied by the AES extension. Reads 16 bytes from a
        // `[u8; 16]`; `vld1q_u8` has no alignment requirement.
        unsafe { vld1q_u8(bytes.as_ptr()) }
    }

    #[inline(always)]
    fn store(self, lane: uint8x16_t, out: &mut [u8; LANE_SIZE]) {
        // SAFETY: NEON is implied by the AES extension. Writes 16 bytes into a
        // `[u8; 16]`.
        unsafe { vst1q_u8(out.as_mut_ptr(), lane) }
    }

    #[inline(always)]
    fn enc(self, lane: uint8x16_t, key: uint8x16_t) -> uint8x16_t {
        // SAFETY: the AES extension is guaranteed by the token.
        unsafe { veorq_u8(vaesmcq_u8(vaeseq_u8(lane, vdupq_n_u8(0))), key) }
    }

    #[inline(always)]
    fn dec(self, lane: uint8x16_t, key: uint8x16_t) -> uint8x16_t {
        // SAFETY: the AES extension is guaranteed by the token.
        unsafe { veorq_u8(vaesimcq_u8(vaesdq_u8(lane, vdupq_n_u8(0))), key) }
    }
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Forward round on one `[low, high]` lane.
///
/// # Safety
/// The CPU must support the ARMv8 AES extension.
#[target_feature(enable = "neon,aes")]
#[must_use]
pub unsafe fn enc_round(lane: [u64; 2], key: [u64; 2]) -> [u64; 2] {
    sweep::enc_round(ArmAes(()), lane, key)
}

/// Inverse round on one `[low, high]` lane.
///
/// # Safety
/// The CPU must support the ARMv8 AES extension.
#[target_feature(enable = "neon,aes")]
#[must_use]
pub unsafe fn dec_round(lane: [u64; 2], key: [u64; 2]) -> [u64; 2] {
    sweep::dec_round(ArmAes(()), lane, key)
}

/// Absorb whole blocks into a hash state.
///
/// # Safety
/// The CPU must support the ARMv8 AES extension.
#[target_feature(enable = "neon,aes")]
pub unsafe fn absorb(state: &mut State, input: &[Block]) {
    sweep::absorb(ArmAes(()), state, input);
}

/// Finalize a hash state.
///
/// # Safety
/// The CPU must support the ARMv8 AES extension.
#[target_feature(enable = "neon,aes")]
#[must_use]
pub unsafe fn finalize(state: &State) -> Digest {
    sweep::finalize(ArmAes(()), state)
}

/// One-round generator.
///
/// # Safety
/// The CPU must support the ARMv8 AES extension.
#[target_feature(enable = "neon,aes")]
pub unsafe fn fill_1r(state: &mut State, output: &mut [Block]) {
    sweep::fill_1r(ArmAes(()), state, output);
}

/// Four-round generator.
///
/// # Safety
/// The CPU must support the ARMv8 AES extension.
#[target_feature(enable = "neon,aes")]
pub unsafe fn fill_4r(state: &mut State, output: &mut [Block], schedule: &KeySchedule) {
    sweep::fill_4r(ArmAes(()), state, output, schedule);
}

/// Fused hash-and-fill sweep.
///
/// # Safety
/// The CPU must support the ARMv8 AES extension.
#[target_feature(enable = "neon,aes")]
pub unsafe fn hash_and_fill(scratchpad: &mut [Block], fill_state: &mut State) -> Digest {
    sweep::hash_and_fill(ArmAes(()), scratchpad, fill_state)
}

// =============================================================================
// WRAPPERS
// =============================================================================

// SAFETY (all wrappers): only reachable through the table built by `detect()`,
// which checks the AES extension first.

fn safe_enc_round(lane: [u64; 2], key: [u64; 2]) -> [u64; 2] {
    unsafe { enc_round(lane, key) }
}

fn safe_dec_round(lane: [u64; 2], key: [u64; 2]) -> [u64; 2] {
    unsafe { dec_round(lane, key) }
}

fn safe_absorb(state: &mut State, input: &[Block]) {
    unsafe { absorb(state, input) }
}

fn safe_finalize(state: &State) -> Digest {
    unsafe { finalize(state) }
}

fn safe_fill_1r(state: &mut State, output: &mut [Block]) {
    unsafe { fill_1r(state, output) }
}

fn safe_fill_4r(state: &mut State, output: &mut [Block], schedule: &KeySchedule) {
    unsafe { fill_4r(state, output, schedule) }
}

fn safe_hash_and_fill(scratchpad: &mut [Block], fill_state: &mut State) -> Digest {
    unsafe { hash_and_fill(scratchpad, fill_state) }
}
