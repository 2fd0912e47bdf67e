//! Criterion benchmarks for both dynamical pipelines.
//!
//! Run with:
//!   cargo bench
//!   cargo bench --features parallel
//!
//! Results are saved to target/criterion/

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use resona::prelude::*;
use resona::prng::Prng;
use resona::ternary::quantize;

fn vocab(n: usize) -> Vocabulary {
    Vocabulary::from_names((0..n).map(|i| format!("w{i}")))
}

fn random_patterns(n: usize, count: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = Prng::new(seed);
    (0..count)
        .map(|_| {
            (0..n)
                .map(|_| if rng.next_f64() < 0.5 { -1.0 } else { 1.0 })
                .collect()
        })
        .collect()
}

/// Hebbian accumulation with varying vocabulary sizes.
fn bench_train(c: &mut Criterion) {
    let mut group = c.benchmark_group("train");

    for size in [64, 128, 256, 512].iter() {
        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let patterns = random_patterns(size, 8, 42);
            b.iter(|| {
                let mut net = TernaryNet::new(vocab(size));
                net.train(black_box(&patterns)).unwrap();
                black_box(net.weights().mean_abs())
            });
        });
    }

    group.finish();
}

/// Ternary quantization of a trained weight matrix.
fn bench_quantize(c: &mut Criterion) {
    let mut group = c.benchmark_group("quantize");

    for size in [64, 256, 512].iter() {
        let mut net = TernaryNet::new(vocab(*size));
        net.train(&random_patterns(*size, 8, 42)).unwrap();

        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(quantize(net.weights()).nonzero()));
        });
    }

    group.finish();
}

/// Full recall from a corrupted query.
fn bench_recall(c: &mut Criterion) {
    let mut group = c.benchmark_group("recall");

    for size in [64, 256, 512].iter() {
        let patterns = random_patterns(*size, 4, 42);
        let mut net = TernaryNet::new(vocab(*size));
        net.train(&patterns).unwrap();
        net.crystallize();

        let mut query = patterns[0].clone();
        for flip in query.iter_mut().take(size / 10) {
            *flip = -*flip;
        }

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(net.recall(&query, 10).unwrap().energy_trace.len()));
        });
    }

    group.finish();
}

/// Oscillator integration: one Euler step at varying network sizes.
fn bench_oscillator_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("oscillator_step");

    for size in [64, 256, 1024].iter() {
        let names: Vec<String> = (0..*size).map(|i| format!("w{i}")).collect();
        let mut resonator = Resonator::new(
            Vocabulary::from_names(names.iter().cloned()),
            ResonatorConfig::default(),
        );
        // Ring topology keeps the coupling matrix sparse.
        let edges: Vec<(&str, &str, f64)> = (0..*size)
            .map(|i| (names[i].as_str(), names[(i + 1) % size].as_str(), 2.0))
            .collect();
        resonator.build_coupling(&edges).unwrap();

        let mut rng = Prng::new(7);
        let mut phases: Vec<f64> = (0..*size)
            .map(|_| rng.gen_range_f64(0.0, core::f64::consts::TAU))
            .collect();
        let omega: Vec<f64> = (0..*size).map(|_| rng.normal(1.0, 0.1)).collect();

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                resonator.step(&mut phases, &omega);
                black_box(phases[0])
            });
        });
    }

    group.finish();
}

/// Full resonance query including scoring.
fn bench_resonance_run(c: &mut Criterion) {
    let mut resonator = Resonator::new(
        Vocabulary::from_names(["King", "Queen", "Apple", "Fruit"]),
        ResonatorConfig::default(),
    );
    resonator
        .build_coupling(&[("King", "Queen", 5.0), ("Apple", "Fruit", 5.0)])
        .unwrap();

    c.bench_function("resonance_run_1000", |b| {
        b.iter(|| {
            let (_, scores) = resonator.run("King", 1000, Some(31)).unwrap();
            black_box(scores["Queen"])
        });
    });
}

criterion_group!(
    benches,
    bench_train,
    bench_quantize,
    bench_recall,
    bench_oscillator_step,
    bench_resonance_run
);
criterion_main!(benches);
