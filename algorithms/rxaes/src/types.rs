//! Shared types used across the rxaes library.

use crate::kernels::constants::{
    words_to_lane, BLOCK_SIZE, DIGEST_SIZE, KEY_SCHEDULE_SIZE, LANE_SIZE, SCHEDULE_KEYS,
    STATE_SIZE,
};
use core::fmt;
#[cfg(feature = "std")]
use std::error;

// =============================================================================
// FIXED-SIZE VALUES
// =============================================================================

/// 64-byte digest: the 4 finalized hash lanes in lane order.
pub type Digest = [u8; DIGEST_SIZE];

/// 512-bit lane state (4 lanes of 128 bits, little-endian words).
pub type State = [u8; STATE_SIZE];

/// One 64-byte stride of an input or output buffer.
pub type Block = [u8; BLOCK_SIZE];

// =============================================================================
// KERNEL INTERFACE
// =============================================================================

/// Single round over one lane: `(lane, key) -> lane'`, lanes as `[low, high]`.
pub type RoundFn = fn([u64; 2], [u64; 2]) -> [u64; 2];

/// Absorb whole blocks into a running hash state.
pub type AbsorbFn = fn(&mut State, &[Block]);

/// Whitening rounds over a hash state.
pub type FinalizeFn = fn(&State) -> Digest;

/// One-round generator: fill whole blocks, advancing the state.
pub type Fill1Fn = fn(&mut State, &mut [Block]);

/// Four-round generator keyed by an external schedule.
pub type Fill4Fn = fn(&mut State, &mut [Block], &KeySchedule);

/// Fused sweep: absorb each stride, overwrite it, return the digest.
pub type HashFillFn = fn(&mut [Block], &mut State) -> Digest;

// =============================================================================
// KEY SCHEDULE
// =============================================================================

/// Externally supplied key schedule of the four-round generator.
///
/// Keys 0..4 form group A (lanes 0 and 1), keys 4..8 form group B (lanes 2
/// and 3). The schedule is opaque parameter data: its provenance belongs to
/// whoever configures the surrounding algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeySchedule {
    keys: [[u8; LANE_SIZE]; SCHEDULE_KEYS],
}

impl KeySchedule {
    /// Build a schedule from 8 `(low, high)` word pairs.
    #[must_use]
    pub const fn from_words(words: [(u64, u64); SCHEDULE_KEYS]) -> Self {
        let mut keys = [[0u8; LANE_SIZE]; SCHEDULE_KEYS];
        let mut i = 0;
        while i < SCHEDULE_KEYS {
            keys[i] = words_to_lane(words[i]);
            i += 1;
        }
        Self { keys }
    }

    /// Build a schedule from its 128-byte serialized form.
    #[must_use]
    pub fn from_bytes(bytes: &[u8; KEY_SCHEDULE_SIZE]) -> Self {
        let (chunks, _) = bytes.as_chunks::<LANE_SIZE>();
        let mut keys = [[0u8; LANE_SIZE]; SCHEDULE_KEYS];
        keys.copy_from_slice(chunks);
        Self { keys }
    }

    /// Serialize the schedule back to 128 bytes.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; KEY_SCHEDULE_SIZE] {
        let mut out = [0u8; KEY_SCHEDULE_SIZE];
        for (dst, key) in out.chunks_exact_mut(LANE_SIZE).zip(&self.keys) {
            dst.copy_from_slice(key);
        }
        out
    }

    /// All 8 keys in schedule order.
    #[must_use]
    pub const fn keys(&self) -> &[[u8; LANE_SIZE]; SCHEDULE_KEYS] {
        &self.keys
    }

    /// Group A keys, applied to lanes 0 and 1.
    #[must_use]
    pub fn group_a(&self) -> &[[u8; LANE_SIZE]] {
        &self.keys[..SCHEDULE_KEYS / 2]
    }

    /// Group B keys, applied to lanes 2 and 3.
    #[must_use]
    pub fn group_b(&self) -> &[[u8; LANE_SIZE]] {
        &self.keys[SCHEDULE_KEYS / 2..]
    }
}

impl From<&[u8; KEY_SCHEDULE_SIZE]> for KeySchedule {
    fn from(bytes: &[u8; KEY_SCHEDULE_SIZE]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl TryFrom<&[u8]> for KeySchedule {
    type Error = LengthError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: &[u8; KEY_SCHEDULE_SIZE] = bytes
            .try_into()
            .map_err(|_| LengthError::KeySchedule { len: bytes.len() })?;
        Ok(Self::from_bytes(bytes))
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Rejected length precondition.
///
/// Raised before any round is computed, so the caller's state and buffers are
/// left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthError {
    /// A buffer length is not a multiple of the 64-byte stride.
    Unaligned {
        /// Offending length in bytes.
        len: usize,
    },
    /// A serialized key schedule is not exactly 128 bytes.
    KeySchedule {
        /// Offending length in bytes.
        len: usize,
    },
}

impl fmt::Display for LengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unaligned { len } => write!(
                f,
                "buffer length {len} is not a multiple of the {BLOCK_SIZE}-byte stride"
            ),
            Self::KeySchedule { len } => write!(
                f,
                "key schedule must be exactly {KEY_SCHEDULE_SIZE} bytes, got {len}"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for LengthError {}

/// Check that `len` is a whole number of blocks.
pub(crate) const fn check_stride(len: usize) -> Result<(), LengthError> {
    if len % BLOCK_SIZE == 0 {
        Ok(())
    } else {
        Err(LengthError::Unaligned { len })
    }
}
