//! Round Primitive Kernels
//!
//! One implementation of the AES round primitive per hardware backend. The
//! engines in `crate::engine::sweep` are written once against [`AesRound`] and
//! instantiated inside each backend's `#[target_feature]` entry points.

#![allow(clippy::inline_always)]

use self::constants::LANE_SIZE;

pub mod constants;
pub mod portable;

macro_rules! arch_backends {
    ($(#[cfg($cond:meta)] pub mod $name:ident;)+) => {
        $(
            #[cfg($cond)]
            pub mod $name;

            #[cfg(not($cond))]
            pub mod $name {
                pub(crate) const fn detect() -> Option<crate::engine::dispatcher::Backend> {
                    None
                }
            }
        )+
    };
}

arch_backends! {
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    pub mod aesni;

    // Little-endian only: lanes are loaded byte-wise and must line up with the
    // little-endian word layout of the portable reference.
    #[cfg(all(target_arch = "aarch64", target_endian = "little"))]
    pub mod neon;

    // The scalar crypto extension has no runtime detection in std, so this one
    // is selected statically.
    #[cfg(all(target_arch = "riscv64", target_feature = "zkne", target_feature = "zknd"))]
    pub mod zkn;
}

// =============================================================================
// ROUND PRIMITIVE
// =============================================================================

/// A single AES round over one 128-bit lane, followed by a round-key XOR.
///
/// Implementors are zero-sized capability tokens: holding a value proves the
/// instructions behind the methods are usable on this CPU.
pub trait AesRound: Copy {
    /// Register representation of one lane.
    type Lane: Copy;

    /// Load a lane from its 16-byte little-endian form.
    fn load(self, bytes: &[u8; LANE_SIZE]) -> Self::Lane;

    /// Store a lane to its 16-byte little-endian form.
    fn store(self, lane: Self::Lane, out: &mut [u8; LANE_SIZE]);

    /// `ShiftRows`, `SubBytes`, `MixColumns`, then XOR `key`.
    fn enc(self, lane: Self::Lane, key: Self::Lane) -> Self::Lane;

    /// `InvShiftRows`, `InvSubBytes`, `InvMixColumns`, then XOR `key`.
    fn dec(self, lane: Self::Lane, key: Self::Lane) -> Self::Lane;

    /// Load a lane from its `[low, high]` word pair.
    #[inline(always)]
    fn from_words(self, words: [u64; 2]) -> Self::Lane {
        self.load(&constants::words_to_lane((words[0], words[1])))
    }

    /// Store a lane as its `[low, high]` word pair.
    #[inline(always)]
    fn to_words(self, lane: Self::Lane) -> [u64; 2] {
        let mut bytes = [0u8; LANE_SIZE];
        self.store(lane, &mut bytes);
        let (words, _) = bytes.as_chunks::<8>();
        [u64::from_le_bytes(words[0]), u64::from_le_bytes(words[1])]
    }
}
