//! Bell voice.
//!
//! Two sine waves: the fundamental and a partial at a non-integer ratio of
//! it (2.5 by default). The inharmonic partial is what makes it sound
//! metallic instead of like an organ.
//!
//! # How It Works
//!
//! 1. Sine at f, sine at ratio × f, summed on a bus
//! 2. Quick linear strike from silence to 0.1 in 50 ms
//! 3. Long exponential ring-out to 0.001

use crate::{
    dsp::automation::ParamTimeline,
    graph::{bus::Bus, envelope::EnvNode, extensions::NodeExt, oscillator::OscNode, GraphNode},
};

pub const DEFAULT_RATIO: f32 = 2.5;
const LEVEL: f32 = 0.1;
const STRIKE: f64 = 0.05;

/// Create a bell at `frequency` with a partial at `ratio × frequency`.
pub fn bell(start: f64, frequency: f32, ratio: f32, duration: f64) -> impl GraphNode {
    Bus::new(vec![
        OscNode::sine().with_frequency(frequency),
        OscNode::sine().with_frequency(frequency * ratio),
    ])
    .amplify(EnvNode::new(envelope(start, duration)))
}

pub(crate) fn envelope(start: f64, duration: f64) -> ParamTimeline {
    ParamTimeline::new(0.0)
        .set(0.0, start)
        .linear_ramp(LEVEL, start + STRIKE)
        .exponential_ramp(0.001, start + duration)
}
