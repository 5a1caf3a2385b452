//! Benchmarks for the encoding pipeline.
//!
//! Measures per-character throughput for the classic machine and how it
//! scales with the repeat count and the number of rotors.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use enigma_sim_core::{Encoder, MachineConfig};

/// Message used consistently across all benchmarks.
const BENCH_MESSAGE: &str = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG";

/// Benchmarks a full message on the classic three-rotor machine.
fn bench_classic(c: &mut Criterion) {
    let set = MachineConfig::classic().build().unwrap();

    let mut group = c.benchmark_group("encode_message");
    group.throughput(Throughput::Elements(BENCH_MESSAGE.len() as u64));
    group.bench_function("classic", |b| {
        let mut encoder = Encoder::new(set.clone());
        b.iter(|| encoder.encode(black_box(BENCH_MESSAGE)).unwrap());
    });
    group.finish();
}

/// Benchmarks throughput as the traversal repeat count grows.
fn bench_repeat_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_repeat");
    group.throughput(Throughput::Elements(BENCH_MESSAGE.len() as u64));

    for repeat in [1usize, 2, 4, 8] {
        let mut config = MachineConfig::classic();
        config.repeat = repeat;
        let set = config.build().unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(repeat), &set, |b, set| {
            let mut encoder = Encoder::new(set.clone());
            b.iter(|| encoder.encode(black_box(BENCH_MESSAGE)).unwrap());
        });
    }
    group.finish();
}

/// Benchmarks throughput as the rotor stack grows.
fn bench_rotor_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_rotors");
    group.throughput(Throughput::Elements(BENCH_MESSAGE.len() as u64));

    for count in [1usize, 3, 5, 10] {
        let set = MachineConfig::random(count as u64, count).build().unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(count), &set, |b, set| {
            let mut encoder = Encoder::new(set.clone());
            b.iter(|| encoder.encode(black_box(BENCH_MESSAGE)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_classic, bench_repeat_scaling, bench_rotor_scaling);
criterion_main!(benches);
