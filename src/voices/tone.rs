//! Plain tone for sound effects.
//!
//! One oscillator at a fixed pitch whose level falls from `volume` to 0.01.
//! Every one-shot effect in the game is made from these. `seed` only
//! matters for `Waveform::Noise`.

use crate::{
    dsp::{automation::ParamTimeline, oscillator::Waveform},
    graph::{envelope::EnvNode, extensions::NodeExt, oscillator::OscNode, GraphNode},
};

const TAIL: f32 = 0.01;

pub fn tone(
    start: f64,
    frequency: f32,
    waveform: Waveform,
    duration: f64,
    volume: f32,
    seed: u64,
) -> impl GraphNode {
    OscNode::new(waveform)
        .with_frequency(frequency)
        .with_seed(seed)
        .amplify(EnvNode::new(envelope(start, duration, volume)))
}

pub(crate) fn envelope(start: f64, duration: f64, volume: f32) -> ParamTimeline {
    ParamTimeline::new(volume)
        .set(volume, start)
        .exponential_ramp(TAIL, start + duration)
}
