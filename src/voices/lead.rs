//! Lead voice.
//!
//! One oscillator, short decay. In normal mode it is a soft sine arpeggio;
//! hurry mode swaps in a sawtooth so the same line turns into an alarm.

use crate::{
    dsp::{automation::ParamTimeline, oscillator::Waveform},
    graph::{envelope::EnvNode, extensions::NodeExt, oscillator::OscNode, GraphNode},
};

const LEVEL: f32 = 0.05;

/// Create a lead note. `waveform` defaults to sine at the call site.
pub fn lead(start: f64, frequency: f32, waveform: Waveform, duration: f64) -> impl GraphNode {
    OscNode::new(waveform)
        .with_frequency(frequency)
        .amplify(EnvNode::new(envelope(start, duration)))
}

pub(crate) fn envelope(start: f64, duration: f64) -> ParamTimeline {
    ParamTimeline::new(LEVEL)
        .set(LEVEL, start)
        .exponential_ramp(0.001, start + duration)
}
