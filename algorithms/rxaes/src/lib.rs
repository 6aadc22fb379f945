#![cfg_attr(not(feature = "std"), no_std)]

//! # rxaes
//!
//! AES-round state mixing engine: a 64-byte lane hash, one- and four-round
//! state generators, and a fused hash-and-fill sweep over a scratchpad.
//! Accelerated by AES-NI, ARMv8 AES or RISC-V scalar crypto, with a portable
//! software fallback.

//! # Usage
//! ```rust
//! use rxaes::{KeySchedule, State};
//!
//! // 1. Hashing (input length must be a multiple of 64)
//! let digest = rxaes::hash(&[0u8; 128])?;
//!
//! // 2. One-round stream, resumable from the updated state
//! let mut state: State = digest;
//! let stream = rxaes::expand_1r(&mut state, 256)?;
//! assert_eq!(stream.len(), 256);
//!
//! // 3. Four-round stream under an external key schedule
//! let keys = KeySchedule::from_bytes(&[7u8; 128]);
//! let mut state: State = [0u8; 64];
//! let mut out = [0u8; 64];
//! rxaes::fill_4r(&mut state, &mut out, &keys)?;
//!
//! // 4. Incremental hashing
//! let mut hasher = rxaes::Hasher::new();
//! hasher.update(&[0u8; 100]);
//! hasher.update(&[0u8; 28]);
//! assert_eq!(hasher.finalize()?, digest);
//! # Ok::<(), rxaes::LengthError>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

#[cfg(not(feature = "std"))]
extern crate alloc;

mod engine;
#[cfg(feature = "std")]
mod ffi;
// Raw kernels stay reachable for benches and conformance tests.
#[doc(hidden)]
pub mod kernels;
mod oneshot;
mod streaming;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use engine::dispatcher::{available_backends, Backend};
pub use kernels::constants::{BLOCK_SIZE, DIGEST_SIZE, KEY_SCHEDULE_SIZE, STATE_SIZE};
pub use oneshot::{
    dec_round, enc_round, expand_1r, expand_4r, fill_1r, fill_4r, hash, hash_and_fill,
};
pub use streaming::Hasher;
pub use types::{Block, Digest, KeySchedule, LengthError, State};

/// Returns the name of the hardware backend currently in use.
#[must_use]
pub fn active_backend() -> &'static str {
    engine::get_active_backend_name()
}
