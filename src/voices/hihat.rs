//! Hi-hat voice (closed).
//!
//! A tight, short burst of filtered noise. The hurry mode puts one on every
//! off-beat for rhythmic drive.
//!
//! # How It Works
//!
//! 1. A freshly rendered white-noise buffer provides the "metallic" character
//! 2. High-pass filter at 5 kHz removes low frequencies (hi-hats are bright)
//! 3. Very short envelope, 0.05 → 0.001, for that tight "tss" sound

use crate::{
    dsp::automation::ParamTimeline,
    graph::{
        buffer::BufferNode, envelope::EnvNode, extensions::NodeExt, filter::FilterNode, GraphNode,
    },
};

const CUTOFF_HZ: f32 = 5_000.0;
const LEVEL: f32 = 0.05;

/// Render `duration` seconds of white noise at `sample_rate`.
pub fn noise_buffer(rng: &mut fastrand::Rng, sample_rate: f32, duration: f64) -> Vec<f32> {
    let len = (sample_rate as f64 * duration).ceil() as usize;
    (0..len).map(|_| rng.f32() * 2.0 - 1.0).collect()
}

/// Create a closed hi-hat playing `noise` (rendered at `sample_rate`).
pub fn hihat(start: f64, noise: Vec<f32>, sample_rate: f32, duration: f64) -> impl GraphNode {
    BufferNode::new(noise, sample_rate, start)
        .through(FilterNode::highpass(CUTOFF_HZ))
        .amplify(EnvNode::new(envelope(start, duration)))
}

pub(crate) fn envelope(start: f64, duration: f64) -> ParamTimeline {
    ParamTimeline::new(LEVEL)
        .set(LEVEL, start)
        .exponential_ramp(0.001, start + duration)
}
