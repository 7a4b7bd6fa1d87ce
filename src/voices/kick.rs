//! Kick drum voice.
//!
//! A synthesized kick drum: a sine wave whose pitch falls exponentially
//! from 150 Hz towards zero while the level decays from 0.3.
//!
//! # How It Works
//!
//! 1. Sine oscillator provides the body (pure, deep tone)
//! 2. Pitch curve: 150 Hz → 0.01 Hz exponentially over the note
//! 3. Amplitude: 0.3 → 0.001 exponentially over the same span
//!
//! The falling pitch is what gives the "punch". Most of the glide happens
//! in the first 100 ms, after that the tail is a low thump fading out.

use crate::{
    dsp::automation::ParamTimeline,
    graph::{envelope::EnvNode, extensions::NodeExt, oscillator::OscNode, GraphNode},
};

const START_HZ: f32 = 150.0;
const END_HZ: f32 = 0.01;
const LEVEL: f32 = 0.3;

/// Create a kick drum starting at `start`, lasting `duration` seconds.
pub fn kick(start: f64, duration: f64) -> impl GraphNode {
    let end = start + duration;

    OscNode::sine()
        .with_frequency_curve(
            ParamTimeline::new(START_HZ)
                .set(START_HZ, start)
                .exponential_ramp(END_HZ, end),
        )
        .amplify(EnvNode::new(envelope(start, duration)))
}

pub(crate) fn envelope(start: f64, duration: f64) -> ParamTimeline {
    ParamTimeline::new(LEVEL)
        .set(LEVEL, start)
        .exponential_ramp(0.001, start + duration)
}
