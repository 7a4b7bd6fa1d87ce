//! Bass voice.
//!
//! A classic subtractive bass using a square wave filtered down.
//! Square waves have only odd harmonics, giving a hollow, woody character
//! that works well for bass lines.
//!
//! # How It Works
//!
//! 1. Square wave oscillator provides rich harmonic content
//! 2. Low-pass filter at 600 Hz removes upper harmonics (subtractive synthesis)
//! 3. Amplitude: 0.1 → 0.001 exponentially, a short pluck on every hit

use crate::{
    dsp::automation::ParamTimeline,
    graph::{
        envelope::EnvNode, extensions::NodeExt, filter::FilterNode, oscillator::OscNode, GraphNode,
    },
};

const CUTOFF_HZ: f32 = 600.0;
const LEVEL: f32 = 0.1;

/// Create a bass note at `frequency` Hz.
pub fn bass(start: f64, frequency: f32, duration: f64) -> impl GraphNode {
    OscNode::square()
        .with_frequency(frequency)
        // Low-pass filter keeps it round and warm
        .through(FilterNode::lowpass(CUTOFF_HZ))
        .amplify(EnvNode::new(envelope(start, duration)))
}

/// 0.1 at the start, exponentially down to 0.001 at the end.
pub(crate) fn envelope(start: f64, duration: f64) -> ParamTimeline {
    ParamTimeline::new(LEVEL)
        .set(LEVEL, start)
        .exponential_ramp(0.001, start + duration)
}
