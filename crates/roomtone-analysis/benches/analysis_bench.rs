//! Criterion benchmarks for roomtone-analysis components
//!
//! Run with: cargo bench -p roomtone-analysis

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use roomtone_analysis::{
    AudioBuffer, SpectralSummary, SpectralTransform, compensate, estimate_rt60,
};
use std::f32::consts::PI;

const SAMPLE_RATE: u32 = 48000;

/// Decaying 440 Hz tone, 60 dB down after a quarter of the buffer.
fn generate_decay(size: usize) -> AudioBuffer {
    let rt60_samples = size as f32 / 4.0;
    let samples = (0..size)
        .map(|i| {
            let env = (-(i as f32) * 1000f32.ln() / rt60_samples).exp();
            env * (2.0 * PI * 440.0 * i as f32 / SAMPLE_RATE as f32).sin()
        })
        .collect();
    AudioBuffer::new(samples, SAMPLE_RATE).unwrap()
}

const SIZES: [usize; 4] = [4096, 48000, 96000, 480000];

// ============================================================================
// Spectral benchmarks
// ============================================================================

fn bench_spectral_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("Spectral_Summary");

    for &size in &SIZES {
        let buffer = generate_decay(size);
        let mut transform = SpectralTransform::new();

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let spectrum = transform.spectrum(black_box(&buffer)).unwrap();
                black_box(SpectralSummary::from_spectrum(&spectrum).unwrap())
            })
        });
    }

    group.finish();
}

// ============================================================================
// Reverberation benchmarks
// ============================================================================

fn bench_rt60(c: &mut Criterion) {
    let mut group = c.benchmark_group("RT60_Estimate");

    for &size in &SIZES {
        let buffer = generate_decay(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(estimate_rt60(black_box(&buffer))))
        });
    }

    group.finish();
}

fn bench_compensate(c: &mut Criterion) {
    let mut group = c.benchmark_group("Compensate");

    for &size in &SIZES {
        let buffer = generate_decay(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(compensate(black_box(&buffer), 0.05)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_spectral_summary, bench_rt60, bench_compensate);
criterion_main!(benches);
