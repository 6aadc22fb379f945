//! Hardware Dispatcher
//!
//! Selects the fastest available round-primitive backend (AES-NI, ARMv8 AES,
//! RISC-V scalar crypto, or portable) for the current CPU.

use crate::kernels;
use crate::types::{
    AbsorbFn, Block, Digest, Fill1Fn, Fill4Fn, FinalizeFn, HashFillFn, KeySchedule, RoundFn,
    State,
};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// =============================================================================
// BACKEND
// =============================================================================

/// Table of engine entry points for one round-primitive implementation.
///
/// A `Backend` for a hardware implementation can only be obtained through
/// detection, so every entry point in the table is safe to call.
#[derive(Clone, Copy, Debug)]
pub struct Backend {
    pub(crate) name: &'static str,
    pub(crate) enc_round: RoundFn,
    pub(crate) dec_round: RoundFn,
    pub(crate) absorb: AbsorbFn,
    pub(crate) finalize: FinalizeFn,
    pub(crate) fill_1r: Fill1Fn,
    pub(crate) fill_4r: Fill4Fn,
    pub(crate) hash_and_fill: HashFillFn,
}

impl Backend {
    /// The portable software backend, available everywhere.
    #[must_use]
    pub const fn portable() -> Self {
        kernels::portable::backend()
    }

    /// Returns the fastest backend for this CPU.
    ///
    /// Hardware backends target mutually exclusive architectures, so chaining
    /// them is only a way to avoid repeating the `cfg` conditions here.
    #[must_use]
    pub fn detect_best() -> Self {
        let backend = kernels::aesni::detect()
            .or_else(kernels::neon::detect)
            .or_else(kernels::zkn::detect)
            .unwrap_or_else(Self::portable);

        #[cfg(feature = "tracing")]
        tracing::debug!(backend = backend.name, "selected AES round backend");

        backend
    }

    /// Human-readable backend name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Forward AES round on `[low, high]`, then XOR `key`.
    #[must_use]
    pub fn enc_round(&self, lane: [u64; 2], key: [u64; 2]) -> [u64; 2] {
        (self.enc_round)(lane, key)
    }

    /// Inverse AES round on `[low, high]`, then XOR `key`.
    #[must_use]
    pub fn dec_round(&self, lane: [u64; 2], key: [u64; 2]) -> [u64; 2] {
        (self.dec_round)(lane, key)
    }

    /// Absorb whole blocks into a running hash state.
    pub fn absorb(&self, state: &mut State, input: &[Block]) {
        (self.absorb)(state, input);
    }

    /// Apply the two whitening rounds and emit the digest.
    #[must_use]
    pub fn finalize(&self, state: &State) -> Digest {
        (self.finalize)(state)
    }

    /// Hash whole blocks from the initial hash state.
    #[must_use]
    pub fn hash(&self, input: &[Block]) -> Digest {
        let mut state = super::HASH_INIT_STATE;
        self.absorb(&mut state, input);
        self.finalize(&state)
    }

    /// One-round generator over whole blocks.
    pub fn fill_1r(&self, state: &mut State, output: &mut [Block]) {
        (self.fill_1r)(state, output);
    }

    /// Four-round generator over whole blocks.
    pub fn fill_4r(&self, state: &mut State, output: &mut [Block], schedule: &KeySchedule) {
        (self.fill_4r)(state, output, schedule);
    }

    /// Fused absorb-then-overwrite sweep over whole blocks.
    pub fn hash_and_fill(&self, scratchpad: &mut [Block], fill_state: &mut State) -> Digest {
        (self.hash_and_fill)(scratchpad, fill_state)
    }
}

// =============================================================================
// DISPATCHER
// =============================================================================

/// Returns the fastest backend for this CPU.
#[must_use]
pub fn get_best_backend() -> Backend {
    Backend::detect_best()
}

/// Every backend usable on this CPU, portable last.
#[must_use]
pub fn available_backends() -> Vec<Backend> {
    [
        kernels::aesni::detect(),
        kernels::neon::detect(),
        kernels::zkn::detect(),
        Some(Backend::portable()),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Returns the name of the active hardware backend.
#[must_use]
pub fn get_active_backend_name() -> &'static str {
    get_best_backend().name
}
