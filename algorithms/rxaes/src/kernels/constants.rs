//! Engine Constants
//!
//! Frozen algorithm parameters of the AES hash/fill scheme. The values are
//! interoperability test vectors shared with every other implementation of the
//! proof-of-work algorithm and must be kept verbatim.
//!
//! 128-bit values are written as `(low, high)` pairs of little-endian 64-bit
//! words, i.e. the low word occupies bytes 0..8 of the lane.

// =============================================================================
// STRUCTURAL CONSTANTS
// =============================================================================

/// Number of parallel 128-bit lanes in every state.
pub const NUM_LANES: usize = 4;

/// Size of a single lane in bytes.
pub const LANE_SIZE: usize = 16;

/// Stride of every operation: one round group per 64-byte block.
pub const BLOCK_SIZE: usize = NUM_LANES * LANE_SIZE;

/// Size of a hash or fill state in bytes.
pub const STATE_SIZE: usize = BLOCK_SIZE;

/// Digest size in bytes (the 4 finalized lanes).
pub const DIGEST_SIZE: usize = STATE_SIZE;

/// Rounds applied per lane per block by the four-round generator.
pub const FILL_4R_ROUNDS: usize = 4;

/// Number of keys in the four-round generator schedule: one group per lane
/// pair, one key per round.
pub const SCHEDULE_KEYS: usize = 2 * FILL_4R_ROUNDS;

/// Serialized size of a four-round key schedule.
pub const KEY_SCHEDULE_SIZE: usize = SCHEDULE_KEYS * LANE_SIZE;

/// AES GF(2^8) reduction polynomial: x^8 + x^4 + x^3 + x + 1
pub const GF_POLY: u8 = 0x1b;

// =============================================================================
// HASH ENGINE
// =============================================================================

/// Initial hash state, one entry per lane.
pub const HASH_INIT: [(u64, u64); NUM_LANES] = [
    (0x9fa8_56de_92b5_2c0d, 0xd798_3aad_cc82_db47),
    (0x15c7_b798_338d_996e, 0xace7_8057_f59e_125a),
    (0xae62_c7d0_6a77_0017, 0xe8a0_7ce4_5079_506b),
    (0x07ad_828d_630a_240c, 0x7e99_4948_79a1_0005),
];

/// Whitening keys for the two finalization rounds, applied to all lanes.
pub const HASH_XKEY: [(u64, u64); 2] = [
    (0x8b24_949f_f6fa_8389, 0x0689_0201_90dc_56bf),
    (0x51f4_e03c_61b2_63d1, 0xed18_f99b_ee10_43c6),
];

// =============================================================================
// ONE-ROUND GENERATOR
// =============================================================================

/// Fixed per-lane keys of the one-round generator.
pub const GEN_1R_KEY: [(u64, u64); NUM_LANES] = [
    (0x6271_6609_6dac_a553, 0xb4f4_4917_dbb5_552b),
    (0x846a_710d_6d7c_af07, 0x0da1_dc4e_1725_d378),
    (0x9f94_7ec6_3f12_62f1, 0x3e20_e345_f4c0_794f),
    (0xb1ba_317c_6aef_8135, 0x4916_9154_1631_4c88),
];

// =============================================================================
// PRECOMPUTED DIGESTS
// =============================================================================

/// Digest of the empty input: `HASH_INIT` through the two whitening rounds.
pub const EMPTY_DIGEST: [(u64, u64); NUM_LANES] = [
    (0xa5fa_2aec_c207_cdcf, 0xfc5c_169e_480b_edf2),
    (0xfe35_8d98_4fb9_ff8f, 0xca8d_0517_c169_e8aa),
    (0x49b0_4f66_4add_83d7, 0x0224_f80f_c472_25d1),
    (0x6031_2165_a881_74ce, 0x68db_7d97_7416_fc27),
];

/// Serialize a table of `(low, high)` lane words into a 64-byte state.
#[must_use]
pub const fn lanes_to_bytes(lanes: &[(u64, u64); NUM_LANES]) -> [u8; STATE_SIZE] {
    let mut out = [0u8; STATE_SIZE];
    let mut lane = 0;
    while lane < NUM_LANES {
        let lo = lanes[lane].0.to_le_bytes();
        let hi = lanes[lane].1.to_le_bytes();
        let mut i = 0;
        while i < 8 {
            out[lane * LANE_SIZE + i] = lo[i];
            out[lane * LANE_SIZE + 8 + i] = hi[i];
            i += 1;
        }
        lane += 1;
    }
    out
}

/// Serialize one `(low, high)` pair into lane bytes.
#[must_use]
pub const fn words_to_lane(words: (u64, u64)) -> [u8; LANE_SIZE] {
    let lo = words.0.to_le_bytes();
    let hi = words.1.to_le_bytes();
    let mut out = [0u8; LANE_SIZE];
    let mut i = 0;
    while i < 8 {
        out[i] = lo[i];
        out[8 + i] = hi[i];
        i += 1;
    }
    out
}
