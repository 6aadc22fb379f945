//! Backend Comparison Benchmark
//!
//! Compares the runtime dispatcher against every backend usable on this CPU,
//! down to the portable software rounds.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rxaes::{available_backends, Block, KeySchedule};
use std::hint::black_box;

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("rxaes Backends");
    let keys = KeySchedule::from_bytes(&[0x5a; 128]);

    // Scenarios:
    // - Small (64B): Dispatch overhead vs one round group
    // - Large (256KB): Bulk throughput
    let sizes = [64, 256 * 1024];

    for size in sizes {
        let mut blocks: Vec<Block> = vec![[0u8; 64]; size / 64];
        let mut state = [0u8; 64];
        group.throughput(Throughput::Bytes(size as u64));

        // Production path: runtime dispatch + fastest backend
        let input = vec![0u8; size];
        group.bench_function(format!("Dispatched hash - {size} bytes"), |b| {
            b.iter(|| rxaes::hash(black_box(&input)).unwrap());
        });

        for backend in available_backends() {
            let name = backend.name();
            group.bench_function(format!("{name} hash - {size} bytes"), |b| {
                b.iter(|| backend.hash(black_box(&blocks)));
            });
            group.bench_function(format!("{name} fill_1r - {size} bytes"), |b| {
                b.iter(|| backend.fill_1r(&mut state, black_box(&mut blocks)));
            });
            group.bench_function(format!("{name} fill_4r - {size} bytes"), |b| {
                b.iter(|| backend.fill_4r(&mut state, black_box(&mut blocks), &keys));
            });
            group.bench_function(format!("{name} hash_and_fill - {size} bytes"), |b| {
                b.iter(|| backend.hash_and_fill(black_box(&mut blocks), &mut state));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_backends);
criterion_main!(benches);
