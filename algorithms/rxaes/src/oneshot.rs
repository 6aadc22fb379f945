//! Public API Layer
//!
//! Byte-slice entry points. Lengths are validated here, before any round runs,
//! so a rejected call leaves the caller's state and buffers untouched.

use crate::engine::dispatcher;
use crate::kernels::constants::BLOCK_SIZE;
use crate::types::{check_stride, Digest, KeySchedule, LengthError, State};

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

// =============================================================================
// ROUND PRIMITIVE
// =============================================================================

/// One forward AES round on a `[low, high]` lane, then XOR `key`.
///
/// Bit-identical to x86 `AESENC`.
///
/// # Example
/// ```rust
/// let lane = rxaes::enc_round([0, 0], [1, 2]);
/// assert_ne!(lane, [1, 2]);
/// ```
#[must_use]
pub fn enc_round(lane: [u64; 2], key: [u64; 2]) -> [u64; 2] {
    dispatcher::get_best_backend().enc_round(lane, key)
}

/// One inverse AES round on a `[low, high]` lane, then XOR `key`.
///
/// Bit-identical to x86 `AESDEC`.
#[must_use]
pub fn dec_round(lane: [u64; 2], key: [u64; 2]) -> [u64; 2] {
    dispatcher::get_best_backend().dec_round(lane, key)
}

// =============================================================================
// HASHING
// =============================================================================

/// Hash `input` into a 64-byte digest.
///
/// # Errors
/// Returns [`LengthError::Unaligned`] if `input.len()` is not a multiple of 64.
///
/// # Example
/// ```rust
/// let digest = rxaes::hash(&[]).unwrap();
/// assert_eq!(digest[0], 0xcf);
/// assert!(rxaes::hash(&[0u8; 63]).is_err());
/// ```
pub fn hash(input: &[u8]) -> Result<Digest, LengthError> {
    check_stride(input.len())?;
    let (blocks, _) = input.as_chunks::<BLOCK_SIZE>();
    Ok(dispatcher::get_best_backend().hash(blocks))
}

// =============================================================================
// GENERATORS
// =============================================================================

/// Fill `output` with the one-round generator stream, advancing `state`.
///
/// Calling twice on consecutive halves of a buffer produces the same bytes as
/// one call on the whole buffer.
///
/// # Errors
/// Returns [`LengthError::Unaligned`] if `output.len()` is not a multiple of 64.
pub fn fill_1r(state: &mut State, output: &mut [u8]) -> Result<(), LengthError> {
    check_stride(output.len())?;
    let (blocks, _) = output.as_chunks_mut::<BLOCK_SIZE>();
    dispatcher::get_best_backend().fill_1r(state, blocks);
    Ok(())
}

/// Allocate and return `len` bytes of the one-round generator stream.
///
/// # Errors
/// Returns [`LengthError::Unaligned`] if `len` is not a multiple of 64.
pub fn expand_1r(state: &mut State, len: usize) -> Result<Vec<u8>, LengthError> {
    check_stride(len)?;
    let mut out = vec![0u8; len];
    fill_1r(state, &mut out)?;
    Ok(out)
}

/// Fill `output` with the four-round generator stream keyed by `keys`,
/// advancing `state`.
///
/// # Errors
/// Returns [`LengthError::Unaligned`] if `output.len()` is not a multiple of 64.
///
/// # Example
/// ```rust
/// use rxaes::KeySchedule;
///
/// let keys = KeySchedule::from_bytes(&[1u8; 128]);
/// let mut state = [0u8; 64];
/// let mut out = vec![0u8; 192];
/// rxaes::fill_4r(&mut state, &mut out, &keys).unwrap();
/// assert_eq!(&out[128..], &state[..]);
/// ```
pub fn fill_4r(
    state: &mut State,
    output: &mut [u8],
    keys: &KeySchedule,
) -> Result<(), LengthError> {
    check_stride(output.len())?;
    let (blocks, _) = output.as_chunks_mut::<BLOCK_SIZE>();
    dispatcher::get_best_backend().fill_4r(state, blocks, keys);
    Ok(())
}

/// Allocate and return `len` bytes of the four-round generator stream.
///
/// # Errors
/// Returns [`LengthError::Unaligned`] if `len` is not a multiple of 64.
pub fn expand_4r(
    state: &mut State,
    len: usize,
    keys: &KeySchedule,
) -> Result<Vec<u8>, LengthError> {
    check_stride(len)?;
    let mut out = vec![0u8; len];
    fill_4r(state, &mut out, keys)?;
    Ok(out)
}

// =============================================================================
// FUSED SWEEP
// =============================================================================

/// Hash `scratchpad` and overwrite it with the one-round stream in one pass.
///
/// Returns the digest `hash` would give for the original contents; afterwards
/// `scratchpad` and `fill_state` hold exactly what [`fill_1r`] would produce.
///
/// # Errors
/// Returns [`LengthError::Unaligned`] if `scratchpad.len()` is not a multiple
/// of 64.
pub fn hash_and_fill(
    scratchpad: &mut [u8],
    fill_state: &mut State,
) -> Result<Digest, LengthError> {
    check_stride(scratchpad.len())?;
    let (blocks, _) = scratchpad.as_chunks_mut::<BLOCK_SIZE>();
    Ok(dispatcher::get_best_backend().hash_and_fill(blocks, fill_state))
}
