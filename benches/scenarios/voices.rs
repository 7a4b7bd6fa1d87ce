//! Benchmarks for complete instrument voices.
//!
//! Each voice is rendered mid-note, where its envelope is still moving, so
//! the automation and the oscillators are both on the hot path.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use conquest_audio::dsp::oscillator::Waveform;
use conquest_audio::graph::node::{GraphNode, RenderCtx};
use conquest_audio::voices;

use crate::BLOCK_SIZES;

fn bench_node(
    group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>,
    name: &str,
    size: usize,
    node: &mut impl GraphNode,
    ctx: &RenderCtx,
) {
    let mut buffer = vec![0.0f32; size];
    group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
        b.iter(|| {
            node.render_block(black_box(&mut buffer), black_box(ctx));
        })
    });
}

pub fn bench_voices(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/voices");
    let ctx = RenderCtx::at(48_000.0, 0.05);
    let mut rng = fastrand::Rng::with_seed(1);

    for &size in BLOCK_SIZES {
        // Sine with pitch curve: automation evaluated per sample twice
        bench_node(&mut group, "kick", size, &mut voices::kick(0.0, 0.5), &ctx);

        // Square → lowpass → gain
        bench_node(&mut group, "bass", size, &mut voices::bass(0.0, 110.0, 0.3), &ctx);

        // Three sawtooths on a bus
        bench_node(
            &mut group,
            "pad",
            size,
            &mut voices::pad(0.0, &[110.0, 164.8, 196.0], 4.0),
            &ctx,
        );

        bench_node(
            &mut group,
            "chord",
            size,
            &mut voices::chord(0.0, &[440.0, 523.0, 659.0], 0.1),
            &ctx,
        );

        bench_node(
            &mut group,
            "lead",
            size,
            &mut voices::lead(0.0, 880.0, Waveform::Sawtooth, 0.2),
            &ctx,
        );

        bench_node(&mut group, "bell", size, &mut voices::bell(0.0, 784.0, 2.5, 1.5), &ctx);

        // Buffer playback → highpass → gain
        let noise = voices::noise_buffer(&mut rng, 48_000.0, 0.1);
        bench_node(
            &mut group,
            "hihat",
            size,
            &mut voices::hihat(0.0, noise, 48_000.0, 0.1),
            &ctx,
        );
    }

    group.finish();
}
