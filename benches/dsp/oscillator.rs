//! Benchmarks for oscillator waveform generation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use conquest_audio::dsp::oscillator::{OscillatorBlock, Waveform};
use conquest_audio::graph::node::RenderCtx;

use crate::BLOCK_SIZES;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");
    let ctx = RenderCtx::at(48_000.0, 0.0);

    let waveforms = [
        ("sine", Waveform::Sine),         // sin() transcendental function
        ("sawtooth", Waveform::Sawtooth), // simple linear ramp
        ("square", Waveform::Square),     // branch per sample
        ("triangle", Waveform::Triangle), // absolute value
        ("noise", Waveform::Noise),       // PRNG per sample
    ];

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        for (name, waveform) in waveforms {
            let mut osc = OscillatorBlock::new(waveform);
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    osc.render(black_box(&mut buffer), black_box(440.0), black_box(&ctx));
                })
            });
        }
    }

    group.finish();
}
