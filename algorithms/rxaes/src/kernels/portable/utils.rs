//! Portable software implementation of the AES round primitives.

use crate::kernels::constants::{GF_POLY, LANE_SIZE};

// AES S-Box
#[rustfmt::skip]
const SBOX: [u8; 256] = [
    0x63, 0x7c, 0x77, 0x7b, 0xf2, 0x6b, 0x6f, 0xc5, 0x30, 0x01, 0x67, 0x2b, 0xfe, 0xd7, 0xab, 0x76,
    0xca, 0x82, 0xc9, 0x7d, 0xfa, 0x59, 0x47, 0xf0, 0xad, 0xd4, 0xa2, 0xaf, 0x9c, 0xa4, 0x72, 0xc0,
    0xb7, 0xfd, 0x93, 0x26, 0x36, 0x3f, 0xf7, 0xcc, 0x34, 0xa5, 0xe5, 0xf1, 0x71, 0xd8, 0x31, 0x15,
    0x04, 0xc7, 0x23, 0xc3, 0x18, 0x96, 0x05, 0x9a, 0x07, 0x12, 0x80, 0xe2, 0xeb, 0x27, 0xb2, 0x75,
    0x09, 0x83, 0x2c, 0x1a, 0x1b, 0x6e, 0x5a, 0xa0, 0x52, 0x3b, 0xd6, 0xb3, 0x29, 0xe3, 0x2f, 0x84,
    0x53, 0xd1, 0x00, 0xed, 0x20, 0xfc, 0xb1, 0x5b, 0x6a, 0xcb, 0xbe, 0x39, 0x4a, 0x4c, 0x58, 0xcf,
    0xd0, 0xef, 0xaa, 0xfb, 0x43, 0x4d, 0x33, 0x85, 0x45, 0xf9, 0x02, 0x7f, 0x50, 0x3c, 0x9f, 0xa8,
    0x51, 0xa3, 0x40, 0x8f, 0x92, 0x9d, 0x38, 0xf5, 0xbc, 0xb6, 0xda, 0x21, 0x10, 0xff, 0xf3, 0xd2,
    0xcd, 0x0c, 0x13, 0xec, 0x5f, 0x97, 0x44, 0x17, 0xc4, 0xa7, 0x7e, 0x3d, 0x64, 0x5d, 0x19, 0x73,
    0x60, 0x81, 0x4f, 0xdc, 0x22, 0x2a, 0x90, 0x88, 0x46, 0xee, 0xb8, 0x14, 0xde, 0x5e, 0x0b, 0xdb,
    0xe0, 0x32, 0x3a, 0x0a, 0x49, 0x06, 0x24, 0x5c, 0xc2, 0xd3, 0xac, 0x62, 0x91, 0x95, 0xe4, 0x79,
    0xe7, 0xc8, 0x37, 0x6d, 0x8d, 0xd5, 0x4e, 0xa9, 0x6c, 0x56, 0xf4, 0xea, 0x65, 0x7a, 0xae, 0x08,
    0xba, 0x78, 0x25, 0x2e, 0x1c, 0xa6, 0xb4, 0xc6, 0xe8, 0xdd, 0x74, 0x1f, 0x4b, 0xbd, 0x8b, 0x8a,
    0x70, 0x3e, 0xb5, 0x66, 0x48, 0x03, 0xf6, 0x0e, 0x61, 0x35, 0x57, 0xb9, 0x86, 0xc1, 0x1d, 0x9e,
    0xe1, 0xf8, 0x98, 0x11, 0x69, 0xd9, 0x8e, 0x94, 0x9b, 0x1e, 0x87, 0xe9, 0xce, 0x55, 0x28, 0xdf,
    0x8c, 0xa1, 0x89, 0x0d, 0xbf, 0xe6, 0x42, 0x68, 0x41, 0x99, 0x2d, 0x0f, 0xb0, 0x54, 0xbb, 0x16
];

/// Inverse S-Box, derived from `SBOX` at compile time.
#[allow(clippy::cast_possible_truncation)]
const INV_SBOX: [u8; 256] = {
    let mut inv = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        inv[SBOX[i] as usize] = i as u8;
        i += 1;
    }
    inv
};

/// One lane as raw bytes, in AES column-major state order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(C, align(16))]
pub struct U128 {
    pub b: [u8; LANE_SIZE],
}

impl U128 {
    pub const fn zero() -> Self {
        Self { b: [0; LANE_SIZE] }
    }

    pub const fn from_bytes(b: [u8; LANE_SIZE]) -> Self {
        Self { b }
    }

    pub fn from_u64s(lo: u64, hi: u64) -> Self {
        let mut b = [0u8; LANE_SIZE];
        b[0..8].copy_from_slice(&lo.to_le_bytes());
        b[8..16].copy_from_slice(&hi.to_le_bytes());
        Self { b }
    }

    pub fn xor(&self, other: &Self) -> Self {
        let mut res = Self::zero();
        for (res_i, (a, b)) in res.b.iter_mut().zip(self.b.iter().zip(&other.b)) {
            *res_i = a ^ b;
        }
        res
    }
}

/// GF(2^8) multiplication by 2 (used in `MixColumns`).
/// Branchless: `b >> 7` extracts the MSB as 0 or 1; multiplying by `GF_POLY`
/// produces the conditional reduction polynomial without a data-dependent branch.
const fn gf_double(b: u8) -> u8 {
    (b << 1) ^ ((b >> 7) * GF_POLY)
}

/// AES `MixColumns` on a single 4-byte column.
fn mix_column(c: &mut [u8]) {
    let t = [c[0], c[1], c[2], c[3]];
    c[0] = gf_double(t[0] ^ t[1]) ^ t[1] ^ t[2] ^ t[3];
    c[1] = gf_double(t[1] ^ t[2]) ^ t[2] ^ t[3] ^ t[0];
    c[2] = gf_double(t[2] ^ t[3]) ^ t[3] ^ t[0] ^ t[1];
    c[3] = gf_double(t[3] ^ t[0]) ^ t[0] ^ t[1] ^ t[2];
}

/// AES `InvMixColumns` on a single 4-byte column.
///
/// Multiplies by `{04}x^2 + {05}` first, after which a plain `MixColumns`
/// yields the inverse matrix.
fn inv_mix_column(c: &mut [u8]) {
    let u = gf_double(gf_double(c[0] ^ c[2]));
    let v = gf_double(gf_double(c[1] ^ c[3]));
    c[0] ^= u;
    c[1] ^= v;
    c[2] ^= u;
    c[3] ^= v;
    mix_column(c);
}

fn add_round_key(s: &[u8; LANE_SIZE], key: &U128) -> U128 {
    let mut res = U128::zero();
    for (res_i, (a, k)) in res.b.iter_mut().zip(s.iter().zip(&key.b)) {
        *res_i = a ^ k;
    }
    res
}

/// Forward round, bit-compatible with x86 `AESENC`.
pub fn aesenc(state: U128, key: U128) -> U128 {
    let mut s = state.b;

    // SubBytes
    for b in &mut s {
        *b = SBOX[*b as usize];
    }

    // ShiftRows
    // Row 0: No shift
    // Row 1: Shift left 1
    let tmp = s[1];
    s[1] = s[5];
    s[5] = s[9];
    s[9] = s[13];
    s[13] = tmp;
    // Row 2: Shift left 2
    s.swap(2, 10);
    s.swap(6, 14);
    // Row 3: Shift left 3
    let tmp = s[15];
    s[15] = s[11];
    s[11] = s[7];
    s[7] = s[3];
    s[3] = tmp;

    // MixColumns
    for column in s.chunks_exact_mut(4) {
        mix_column(column);
    }

    add_round_key(&s, &key)
}

/// Inverse round, bit-compatible with x86 `AESDEC`.
pub fn aesdec(state: U128, key: U128) -> U128 {
    let mut s = state.b;

    // InvShiftRows
    // Row 1: Shift right 1
    let tmp = s[13];
    s[13] = s[9];
    s[9] = s[5];
    s[5] = s[1];
    s[1] = tmp;
    // Row 2: Shift right 2
    s.swap(2, 10);
    s.swap(6, 14);
    // Row 3: Shift right 3
    let tmp = s[3];
    s[3] = s[7];
    s[7] = s[11];
    s[11] = s[15];
    s[15] = tmp;

    // InvSubBytes
    for b in &mut s {
        *b = INV_SBOX[*b as usize];
    }

    // InvMixColumns
    for column in s.chunks_exact_mut(4) {
        inv_mix_column(column);
    }

    add_round_key(&s, &key)
}
