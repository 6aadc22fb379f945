//! Official Test Vectors for rxaes
//!
//! Verifies every engine against the canonical JSON test vectors, on the
//! dispatched backend and on every other backend this CPU supports.

#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

use rxaes::{available_backends, Block, KeySchedule, State};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;

#[derive(Deserialize)]
struct HashVector {
    name: String,
    input: String,
    digest: String,
}

#[derive(Deserialize)]
struct FillVector {
    name: String,
    seed: String,
    #[serde(default)]
    keys: Option<String>,
    length: usize,
    output: String,
    state: String,
}

#[derive(Deserialize)]
struct FusedVector {
    name: String,
    seed: String,
    buffer: String,
    digest: String,
    output: String,
    state: String,
}

#[derive(Deserialize)]
struct TestVectors {
    hash: Vec<HashVector>,
    fill_1r: Vec<FillVector>,
    fill_4r: Vec<FillVector>,
    hash_and_fill: Vec<FusedVector>,
}

fn load() -> TestVectors {
    let file = File::open("tests/test_vectors.json").expect("Failed to open test_vectors.json");
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).expect("Failed to parse JSON")
}

fn state(hex_str: &str) -> State {
    hex::decode(hex_str).unwrap().try_into().unwrap()
}

fn hash_input(name: &str) -> Vec<u8> {
    match name {
        "EMPTY" => Vec::new(),
        "ZERO_64" => vec![0u8; 64],
        "RAMP_256" => (0..256).map(|i| i as u8).collect(),
        "A_1024" => vec![b'A'; 1024],
        other => panic!("unknown input tag {other}"),
    }
}

fn blocks_mut(buf: &mut [u8]) -> &mut [Block] {
    buf.as_chunks_mut::<64>().0
}

// =============================================================================
// HASH
// =============================================================================

#[test]
fn test_hash_vectors() {
    let data = load();
    println!("\n=== Verifying Hash Vectors ===");

    for vector in data.hash {
        let input = hash_input(&vector.input);
        let digest = rxaes::hash(&input).unwrap();
        assert_eq!(hex::encode(digest), vector.digest, "Vector Mismatched: {}", vector.name);

        for backend in available_backends() {
            let got = backend.hash(input.as_chunks::<64>().0);
            assert_eq!(hex::encode(got), vector.digest, "{} on {}", vector.name, backend.name());
        }
        println!("✅ {:<16} | {}", vector.name, &vector.digest[..32]);
    }
}

// =============================================================================
// GENERATORS
// =============================================================================

#[test]
fn test_fill_1r_vectors() {
    for vector in load().fill_1r {
        for backend in available_backends() {
            let mut s = state(&vector.seed);
            let mut out = vec![0u8; vector.length];
            backend.fill_1r(&mut s, blocks_mut(&mut out));
            assert_eq!(hex::encode(&out), vector.output, "{} on {}", vector.name, backend.name());
            assert_eq!(hex::encode(s), vector.state, "{} state on {}", vector.name, backend.name());
        }

        let mut s = state(&vector.seed);
        let out = rxaes::expand_1r(&mut s, vector.length).unwrap();
        assert_eq!(hex::encode(out), vector.output);
        assert_eq!(hex::encode(s), vector.state);
    }
}

#[test]
fn test_fill_4r_vectors() {
    for vector in load().fill_4r {
        let keys_hex = vector.keys.as_deref().expect("fill_4r vector without keys");
        let keys = KeySchedule::try_from(hex::decode(keys_hex).unwrap().as_slice()).unwrap();

        for backend in available_backends() {
            let mut s = state(&vector.seed);
            let mut out = vec![0u8; vector.length];
            backend.fill_4r(&mut s, blocks_mut(&mut out), &keys);
            assert_eq!(hex::encode(&out), vector.output, "{} on {}", vector.name, backend.name());
            assert_eq!(hex::encode(s), vector.state, "{} state on {}", vector.name, backend.name());
        }

        let mut s = state(&vector.seed);
        let out = rxaes::expand_4r(&mut s, vector.length, &keys).unwrap();
        assert_eq!(hex::encode(out), vector.output);
        assert_eq!(hex::encode(s), vector.state);
    }
}

// =============================================================================
// FUSED SWEEP
// =============================================================================

#[test]
fn test_hash_and_fill_vectors() {
    for vector in load().hash_and_fill {
        for backend in available_backends() {
            let mut s = state(&vector.seed);
            let mut buf = hex::decode(&vector.buffer).unwrap();
            let digest = backend.hash_and_fill(blocks_mut(&mut buf), &mut s);
            assert_eq!(hex::encode(digest), vector.digest, "{} on {}", vector.name, backend.name());
            assert_eq!(hex::encode(&buf), vector.output, "{} buffer", vector.name);
            assert_eq!(hex::encode(s), vector.state, "{} state", vector.name);
        }
    }
}
