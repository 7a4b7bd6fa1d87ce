//! Benchmarks for parameter automation rendering.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use conquest_audio::dsp::automation::ParamTimeline;

use crate::BLOCK_SIZES;

pub fn bench_automation(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/automation");

    // Pad envelope: set, linear swell, exponential fade (pow() per sample)
    let pad = ParamTimeline::new(0.0)
        .set(0.0, 0.0)
        .linear_ramp(0.1, 1.0)
        .exponential_ramp(0.001, 4.0);

    // Constant value: cheapest path
    let flat = ParamTimeline::new(0.5);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        group.bench_with_input(BenchmarkId::new("linear", size), &size, |b, _| {
            b.iter(|| pad.render(black_box(&mut buffer), black_box(0.5), 48_000.0))
        });

        group.bench_with_input(BenchmarkId::new("exponential", size), &size, |b, _| {
            b.iter(|| pad.render(black_box(&mut buffer), black_box(2.0), 48_000.0))
        });

        group.bench_with_input(BenchmarkId::new("constant", size), &size, |b, _| {
            b.iter(|| flat.render(black_box(&mut buffer), black_box(2.0), 48_000.0))
        });
    }

    group.finish();
}
