//! Benchmarks for the mixer playing each music mode.
//!
//! The scheduler fills a window starting at time zero, then the mixer renders
//! the first block of it. This is the whole per-callback cost on the audio
//! thread at the densest point of a beat.

use std::hint::black_box;

use criterion::{BatchSize, BenchmarkId, Criterion};
use conquest_audio::engine::{AudioContext, Mixer, Scheduler};
use conquest_audio::{EngineConfig, MusicMode};

use crate::BLOCK_SIZES;

/// A running mixer with half a second of `mode` queued from time zero.
fn loaded_mixer(mode: MusicMode) -> (AudioContext, Mixer) {
    let config = EngineConfig::default()
        .seed(1)
        .start_delay(0.0)
        .lookahead(0.5);
    let (mut ctx, mixer) = AudioContext::offline(&config);
    // Resuming fails only for a closed context, which this is not.
    let _ = ctx.resume();

    let mut scheduler = Scheduler::new(&config);
    scheduler.start(mode, &mut ctx);
    scheduler.fill(&mut ctx);
    (ctx, mixer)
}

pub fn bench_mix(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/mix");

    for &size in BLOCK_SIZES {
        for mode in MusicMode::ALL {
            let mut buffer = vec![0.0f32; size];

            group.bench_with_input(BenchmarkId::new(mode.name(), size), &size, |b, _| {
                b.iter_batched_ref(
                    || loaded_mixer(mode),
                    |(_ctx, mixer)| mixer.render(black_box(&mut buffer)),
                    BatchSize::SmallInput,
                )
            });
        }
    }

    group.finish();
}
