//! Consistency & Regression Tests
//!
//! Verifies the structural guarantees the engines make to their callers.
//! - Generator stream resumability (one- and four-round)
//! - Fused sweep equivalence with separate hash + fill
//! - Zero-length boundaries
//! - Streaming vs one-shot hashing

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used)]

use rxaes::{expand_1r, expand_4r, fill_1r, hash, hash_and_fill, Hasher, KeySchedule, State};

fn seed(tag: u8) -> State {
    std::array::from_fn(|i| (i as u8).wrapping_mul(31) ^ tag)
}

fn schedule() -> KeySchedule {
    let bytes: [u8; 128] = std::array::from_fn(|i| (i as u8).wrapping_mul(17).wrapping_add(5));
    KeySchedule::from_bytes(&bytes)
}

// =============================================================================
// STREAM RESUMABILITY
// =============================================================================

#[test]
fn test_fill_1r_resumable() {
    let total = 64 * 16;
    let mut whole_state = seed(1);
    let whole = expand_1r(&mut whole_state, total).unwrap();

    for split in (0..=total).step_by(64) {
        let mut state = seed(1);
        let mut parts = expand_1r(&mut state, split).unwrap();
        parts.extend(expand_1r(&mut state, total - split).unwrap());

        assert_eq!(parts, whole, "1R stream diverged when split at {split}");
        assert_eq!(state, whole_state, "1R state diverged when split at {split}");
    }
}

#[test]
fn test_fill_4r_resumable() {
    let keys = schedule();
    let total = 64 * 12;
    let mut whole_state = seed(2);
    let whole = expand_4r(&mut whole_state, total, &keys).unwrap();

    for split in (0..=total).step_by(64) {
        let mut state = seed(2);
        let mut parts = expand_4r(&mut state, split, &keys).unwrap();
        parts.extend(expand_4r(&mut state, total - split, &keys).unwrap());

        assert_eq!(parts, whole, "4R stream diverged when split at {split}");
        assert_eq!(state, whole_state, "4R state diverged when split at {split}");
    }
}

#[test]
fn test_state_is_last_block() {
    let keys = schedule();
    let mut state = seed(3);
    let out = expand_4r(&mut state, 320, &keys).unwrap();
    assert_eq!(&out[256..], &state[..]);

    let mut state = seed(3);
    let out = expand_1r(&mut state, 320).unwrap();
    assert_eq!(&out[256..], &state[..]);
}

// =============================================================================
// FUSION EQUIVALENCE
// =============================================================================

#[test]
fn test_hash_and_fill_equivalence() {
    for blocks in [0usize, 1, 2, 7, 64] {
        let original: Vec<u8> = (0..blocks * 64).map(|i| (i * 13 + 1) as u8).collect();

        let expected_digest = hash(&original).unwrap();
        let mut expected_state = seed(4);
        let expected_buf = expand_1r(&mut expected_state, original.len()).unwrap();

        let mut buf = original.clone();
        let mut state = seed(4);
        let digest = hash_and_fill(&mut buf, &mut state).unwrap();

        assert_eq!(digest, expected_digest, "digest mismatch at {blocks} blocks");
        assert_eq!(buf, expected_buf, "buffer mismatch at {blocks} blocks");
        assert_eq!(state, expected_state, "fill state mismatch at {blocks} blocks");
    }
}

#[test]
fn test_hash_and_fill_in_place_fill_agrees() {
    let mut a = vec![0xeeu8; 640];
    let mut b = vec![0x11u8; 640];
    let mut state_a = seed(5);
    let mut state_b = seed(5);

    hash_and_fill(&mut a, &mut state_a).unwrap();
    fill_1r(&mut state_b, &mut b).unwrap();

    assert_eq!(a, b, "output must not depend on prior buffer contents");
    assert_eq!(state_a, state_b);
}

// =============================================================================
// BOUNDARY CONDITIONS
// =============================================================================

#[test]
fn test_zero_length_is_noop() {
    let keys = schedule();
    let mut state = seed(6);

    assert!(expand_1r(&mut state, 0).unwrap().is_empty());
    assert!(expand_4r(&mut state, 0, &keys).unwrap().is_empty());
    assert_eq!(state, seed(6));

    let digest = hash_and_fill(&mut [], &mut state).unwrap();
    assert_eq!(digest, hash(&[]).unwrap());
    assert_eq!(state, seed(6));
}

#[test]
fn test_determinism() {
    let input = vec![0x42u8; 64 * 100];
    assert_eq!(hash(&input), hash(&input));

    let keys = schedule();
    let mut s1 = seed(7);
    let mut s2 = seed(7);
    assert_eq!(
        expand_4r(&mut s1, 1024, &keys).unwrap(),
        expand_4r(&mut s2, 1024, &keys).unwrap()
    );
}

// =============================================================================
// STREAMING CONSISTENCY
// =============================================================================

#[test]
fn test_streaming_consistency() {
    let sizes = [0usize, 64, 1024, 64 * 1024, 1024 * 1024];

    for &size in &sizes {
        let input: Vec<u8> = (0..size).map(|i| (i % 251) as u8).collect();
        let h_oneshot = hash(&input).unwrap();

        for chunk in [1usize, 7, 64, 1000] {
            if size > 64 * 1024 && chunk < 64 {
                continue;
            }
            let mut hasher = Hasher::new();
            for piece in input.chunks(chunk) {
                hasher.update(piece);
            }
            assert_eq!(hasher.absorbed(), size);
            assert_eq!(
                hasher.finalize().unwrap(),
                h_oneshot,
                "CONSISTENCY FAILURE at size {size}, chunk {chunk}",
            );
        }
    }
}

#[test]
fn test_streaming_rejects_unaligned_total() {
    let mut hasher = Hasher::new();
    hasher.update(&[0u8; 130]);
    assert!(hasher.finalize().is_err());
}
