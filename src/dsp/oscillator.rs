#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::f32::consts::TAU;

use crate::graph::node::RenderCtx;

/*
Phase Accumulator Oscillators
=============================

Every pitched waveform is a function of a normalized phase in [0, 1). Each
sample the phase advances by frequency / sample_rate and wraps around.

    phase   0 ────────────────────────────→ 1 (wraps)

    sine      sin(2π·phase)
    square    +1 for the first half cycle, -1 for the second
    sawtooth  rises linearly from -1 to +1, offset so it starts at 0
    triangle  0 → +1 → 0 → -1 → 0, starting at 0

Sawtooth and triangle are phase-shifted so that all pitched shapes start at
zero on the first sample. A voice that starts mid-buffer then begins without
a click.

Noise ignores the phase and draws uniform samples in [-1, 1) from a seeded
generator, so two noise oscillators with the same seed are identical.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Waveform {
    #[default]
    Sine,
    Square,
    Sawtooth,
    Triangle,
    Noise,
}

pub struct OscillatorBlock {
    waveform: Waveform,
    phase: f32,
    rng: fastrand::Rng,
}

impl OscillatorBlock {
    pub fn new(waveform: Waveform) -> Self {
        Self {
            waveform,
            phase: 0.0,
            rng: fastrand::Rng::with_seed(0),
        }
    }

    pub fn sine() -> Self {
        Self::new(Waveform::Sine)
    }

    pub fn square() -> Self {
        Self::new(Waveform::Square)
    }

    pub fn sawtooth() -> Self {
        Self::new(Waveform::Sawtooth)
    }

    pub fn triangle() -> Self {
        Self::new(Waveform::Triangle)
    }

    pub fn noise() -> Self {
        Self::new(Waveform::Noise)
    }

    /// Reseed the noise generator. Has no effect on pitched waveforms.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = fastrand::Rng::with_seed(seed);
        self
    }

    pub fn waveform(&self) -> Waveform {
        self.waveform
    }

    /// Produce one sample at `frequency` and advance the phase.
    #[inline]
    pub fn next_sample(&mut self, frequency: f32, sample_rate: f32) -> f32 {
        let phase = self.phase;
        let value = match self.waveform {
            Waveform::Sine => (TAU * phase).sin(),
            Waveform::Square => {
                if phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Sawtooth => 2.0 * (phase + 0.5).fract() - 1.0,
            Waveform::Triangle => 1.0 - 4.0 * ((phase + 0.25).fract() - 0.5).abs(),
            Waveform::Noise => self.rng.f32() * 2.0 - 1.0,
        };

        self.phase = (phase + frequency / sample_rate).rem_euclid(1.0);
        value
    }

    /// Fill `destination` at the constant frequency carried by `ctx`.
    pub fn render(&mut self, destination: &mut [f32], frequency: f32, ctx: &RenderCtx) {
        for sample in destination.iter_mut() {
            *sample = self.next_sample(frequency, ctx.sample_rate);
        }
    }
}
