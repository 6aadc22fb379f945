//! AES-NI Kernel Module
//!
//! Round primitive on x86 `AESENC` / `AESDEC`. Each lane lives in one XMM
//! register; the four lanes of a block are independent, so the CPU overlaps
//! their rounds.

#![allow(unsafe_code)]
#![allow(clippy::inline_always)]

#[cfg(target_arch = "x86")]
use core::arch::x86 as arch;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64 as arch;

use arch::{__m128i, _mm_aesdec_si128, _mm_aesenc_si128, _mm_loadu_si128, _mm_storeu_si128};

use crate::engine::dispatcher::Backend;
use crate::engine::sweep;
use crate::kernels::constants::LANE_SIZE;
use crate::kernels::AesRound;
use crate::types::{Block, Digest, KeySchedule, State};

// =============================================================================
// DETECTION
// =============================================================================

fn has_aesni() -> bool {
    #[cfg(feature = "std")]
    {
        std::arch::is_x86_feature_detected!("aes") && std::arch::is_x86_feature_detected!("sse2")
    }
    #[cfg(not(feature = "std"))]
    {
        cfg!(all(target_feature = "aes", target_feature = "sse2"))
    }
}

pub(crate) fn detect() -> Option<Backend> {
    has_aesni().then_some(Backend {
        name: "AES-NI",
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

/// Capability token: exists only once AES-NI and SSE2 are known to be present.
#[derive(Clone, Copy, Debug)]
pub struct AesNi(());

impl AesRound for AesNi {
    type Lane = __m128i;

    #[inline(always)]
    fn load(self, bytes: &[u8; LANE_SIZE]) -> __m128i {
        // SAFETY: SSE2 is guaranteed by the token. Reads 16 bytes from a
        // `[u8; 16]`; unaligned loads have no alignment requirement.
        unsafe { _mm_loadu_si128(bytes.as_ptr().cast()) }
    }

    #[inline(always)]
    fn store(self, lane: __m128i, out: &mut [u8; LANE_SIZE]) {
        // SAFETY: SSE2 is guaranteed by the token. Writes 16 bytes into a
        // `[u8; 16]`; unaligned stores have no alignment requirement.
        unsafe { _mm_storeu_si128(out.as_mut_ptr().cast(), lane) }
    }

    #[inline(always)]
    fn enc(self, lane: __m128i, key: __m128i) -> __m128i {
        // SAFETY: AES-NI is guaranteed by the token.
        unsafe { _mm_aesenc_si128(lane, key) }
    }

    #[inline(always)]
    fn dec(self, lane: __m128i, key: __m128i) -> __m128i {
        // SAFETY: AES-NI is guaranteed by the token.
        unsafe { _mm_aesdec_si128(lane, key) }
    }
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Forward round on one `[low, high]` lane.
///
/// # Safety
/// The CPU must support AES-NI and SSE2.
#[target_feature(enable = "aes,sse2")]
#[must_use]
pub unsafe fn enc_round(lane: [u64; 2], key: [u64; 2]) -> [u64; 2] {
    sweep::enc_round(AesNi(()), lane, key)
}

/// Inverse round on one `[low, high]` lane.
///
/// # Safety
/// The CPU must support AES-NI and SSE2.
#[target_feature(enable = "aes,sse2")]
#[must_use]
pub unsafe fn dec_round(lane: [u64; 2], key: [u64; 2]) -> [u64; 2] {
    sweep::dec_round(AesNi(()), lane, key)
}

/// Absorb whole blocks into a hash state.
///
/// # Safety
/// The CPU must support AES-NI and SSE2.
#[target_feature(enable = "aes,sse2")]
pub unsafe fn absorb(state: &mut State, input: &[Block]) {
    sweep::absorb(AesNi(()), state, input);
}

/// Finalize a hash state.
///
/// # Safety
/// The CPU must support AES-NI and SSE2.
#[target_feature(enable = "aes,sse2")]
#[must_use]
pub unsafe fn finalize(state: &State) -> Digest {
    sweep::finalize(AesNi(()), state)
}

/// One-round generator.
///
/// # Safety
/// The CPU must support AES-NI and SSE2.
#[target_feature(enable = "aes,sse2")]
pub unsafe fn fill_1r(state: &mut State, output: &mut [Block]) {
    sweep::fill_1r(AesNi(()), state, output);
}

/// Four-round generator.
///
/// # Safety
/// The CPU must support AES-NI and SSE2.
#[target_feature(enable = "aes,sse2")]
pub unsafe fn fill_4r(state: &mut State, output: &mut [Block], schedule: &KeySchedule) {
    sweep::fill_4r(AesNi(()), state, output, schedule);
}

/// Fused hash-and-fill sweep.
///
/// # Safety
/// The CPU must support AES-NI and SSE2.
#[target_feature(enable = "aes,sse2")]
pub unsafe fn hash_and_fill(scratchpad: &mut [Block], fill_state: &mut State) -> Digest {
    sweep::hash_and_fill(AesNi(()), scratchpad, fill_state)
}

// =============================================================================
// WRAPPERS
// =============================================================================

// SAFETY (all wrappers): only reachable through the table built by `detect()`,
// which checks AES-NI and SSE2 first.

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
