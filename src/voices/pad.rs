//! Pad voice - sustained, atmospheric texture.
//!
//! Pads are the foundation of the title screen. They provide a slow,
//! swelling backdrop that fills sonic space without demanding attention.
//!
//! # How It Works
//!
//! 1. One sawtooth per chord tone, summed on a bus
//! 2. Slow linear fade-in from silence to 0.1 over the first second
//! 3. Exponential fade to 0.001 at the end of the note
//!
//! All chord tones share the single gain envelope, so the chord breathes
//! as one sound.

use crate::{
    dsp::automation::ParamTimeline,
    graph::{bus::Bus, envelope::EnvNode, extensions::NodeExt, oscillator::OscNode, GraphNode},
};

const LEVEL: f32 = 0.1;
const FADE_IN: f64 = 1.0;

/// Create a pad playing every frequency in `frequencies`.
pub fn pad(start: f64, frequencies: &[f32], duration: f64) -> impl GraphNode {
    let oscillators = frequencies
        .iter()
        .map(|&freq| OscNode::sawtooth().with_frequency(freq))
        .collect();

    Bus::new(oscillators).amplify(EnvNode::new(envelope(start, duration)))
}

/// Linear swell to 0.1 over the first second, then an exponential fade.
pub(crate) fn envelope(start: f64, duration: f64) -> ParamTimeline {
    ParamTimeline::new(0.0)
        .set(0.0, start)
        .linear_ramp(LEVEL, start + FADE_IN)
        .exponential_ramp(0.001, start + duration)
}
