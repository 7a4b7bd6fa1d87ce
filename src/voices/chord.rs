//! Chord stab voice.
//!
//! Stacked triangle waves under one short envelope. Triangles are soft
//! enough that three of them at once still sit behind the lead.

use crate::{
    dsp::automation::ParamTimeline,
    graph::{bus::Bus, envelope::EnvNode, extensions::NodeExt, oscillator::OscNode, GraphNode},
};

const LEVEL: f32 = 0.05;

/// Create a chord stab playing every frequency in `frequencies`.
pub fn chord(start: f64, frequencies: &[f32], duration: f64) -> impl GraphNode {
    let oscillators = frequencies
        .iter()
        .map(|&freq| OscNode::triangle().with_frequency(freq))
        .collect();

    Bus::new(oscillators).amplify(EnvNode::new(envelope(start, duration)))
}

pub(crate) fn envelope(start: f64, duration: f64) -> ParamTimeline {
    ParamTimeline::new(LEVEL)
        .set(LEVEL, start)
        .exponential_ramp(0.001, start + duration)
}
