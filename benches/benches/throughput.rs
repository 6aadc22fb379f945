//! rxaes Criterion Benchmark
//!
//! Latency of short hashes and throughput of the scratchpad-sized sweeps.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use rxaes::KeySchedule;
use std::hint::black_box;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

/// Scratchpad sizes: L1- and L2-resident pads, then the full 2 MiB pad.
const SCRATCHPAD_SIZES: [(usize, &str); 3] =
    [(16 * KB, "16KB"), (256 * KB, "256KB"), (2 * MB, "2MB")];

fn random_bytes(len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    rand::rng().fill(&mut buf[..]);
    buf
}

fn random_state() -> rxaes::State {
    let mut state = [0u8; 64];
    rand::rng().fill(&mut state[..]);
    state
}

// =============================================================================
// BENCHMARK 1: LATENCY
// =============================================================================

/// Hot path latency for short inputs (register-file digests).
fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Latency");

    let sizes = [(64, "64B"), (256, "256B"), (KB, "1KB"), (4 * KB, "4KB")];

    for (size, name) in sizes {
        let input = random_bytes(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, data| {
            b.iter(|| rxaes::hash(black_box(data)).unwrap())
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: SCRATCHPAD SWEEPS
// =============================================================================

/// Hash, one-round fill, four-round fill and the fused sweep per size.
fn bench_sweeps(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Scratchpad");
    let keys = KeySchedule::try_from(random_bytes(128).as_slice()).unwrap();

    for (size, name) in SCRATCHPAD_SIZES {
        let mut pad = random_bytes(size);
        let mut state = random_state();
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_function(BenchmarkId::new("hash", name), |b| {
            b.iter(|| rxaes::hash(black_box(&pad)).unwrap())
        });
        group.bench_function(BenchmarkId::new("fill_1r", name), |b| {
            b.iter(|| rxaes::fill_1r(&mut state, black_box(&mut pad)).unwrap())
        });
        group.bench_function(BenchmarkId::new("fill_4r", name), |b| {
            b.iter(|| rxaes::fill_4r(&mut state, black_box(&mut pad), &keys).unwrap())
        });
        group.bench_function(BenchmarkId::new("hash_and_fill", name), |b| {
            b.iter(|| rxaes::hash_and_fill(black_box(&mut pad), &mut state).unwrap())
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: FUSION GAIN
// =============================================================================

/// Fused sweep against a separate hash pass followed by a fill pass.
fn bench_fusion(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Fusion");
    let mut pad = random_bytes(2 * MB);
    let mut state = random_state();
    group.throughput(Throughput::Bytes(pad.len() as u64));

    group.bench_function("separate", |b| {
        b.iter(|| {
            let digest = rxaes::hash(black_box(&pad)).unwrap();
            rxaes::fill_1r(&mut state, &mut pad).unwrap();
            digest
        })
    });
    group.bench_function("fused", |b| {
        b.iter(|| rxaes::hash_and_fill(black_box(&mut pad), &mut state).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_latency, bench_sweeps, bench_fusion);
criterion_main!(benches);
