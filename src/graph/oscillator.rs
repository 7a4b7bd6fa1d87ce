use crate::dsp::automation::ParamTimeline;
use crate::dsp::oscillator::{OscillatorBlock, Waveform};
use crate::graph::node::{GraphNode, RenderCtx};

/*
Audio Oscillator
================

An oscillator is the fundamental sound source in a synthesizer. It generates
a repeating waveform at a specific frequency (pitch), producing the raw
audio material that gets shaped by filters and gain envelopes.

Waveform Types and Their Character:
-----------------------------------

Sine: The purest tone - a single frequency with no harmonics.
  - Use here: kick body, bell partials, the normal-mode arpeggio lead

Sawtooth: The richest waveform - contains all harmonics.
  - Use here: title pads, the hurry-mode warning lead, defeat tones

Square: Hollow but powerful - only odd harmonics.
  - Use here: bass (filtered), key clicks

Triangle: Mellow and soft - weak odd harmonics.
  - Use here: short chord stabs, the victory fanfare

Noise: Random samples - no pitch.
  - Use here: available to tones; the hi-hat plays a pre-rendered buffer

Frequency
---------
An oscillator either sits at a fixed pitch or follows a ParamTimeline. The
kick drum glides its pitch exponentially from 150 Hz towards zero, which is
what gives it the "punch":

  let body = OscNode::sine().with_frequency_curve(
      ParamTimeline::new(150.0)
          .set(150.0, start)
          .exponential_ramp(0.01, start + 0.5),
  );

Example usage:
  let osc = OscNode::sine().with_frequency(523.0);      // Pure tone
  let osc = OscNode::sawtooth().with_frequency(110.0);  // Rich and bright

  // Bass: square → lowpass → gain envelope
  let voice = OscNode::square()
      .with_frequency(110.0)
      .through(FilterNode::lowpass(600.0))
      .amplify(EnvNode::new(envelope));
*/

enum Pitch {
    Fixed(f32),
    Curve(ParamTimeline),
}

pub struct OscNode {
    osc: OscillatorBlock,
    pitch: Pitch,
}

impl OscNode {
    pub fn new(waveform: Waveform) -> Self {
        Self {
            osc: OscillatorBlock::new(waveform),
            pitch: Pitch::Fixed(440.0),
        }
    }

    pub fn sine() -> Self {
        Self::new(Waveform::Sine)
    }

    pub fn sawtooth() -> Self {
        Self::new(Waveform::Sawtooth)
    }

    pub fn square() -> Self {
        Self::new(Waveform::Square)
    }

    pub fn triangle() -> Self {
        Self::new(Waveform::Triangle)
    }

    /// Seed the noise generator. Pitched waveforms ignore it.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.osc = self.osc.with_seed(seed);
        self
    }

    /// Set a fixed frequency in Hz.
    pub fn with_frequency(mut self, freq: f32) -> Self {
        self.pitch = Pitch::Fixed(freq);
        self
    }

    /// Let the frequency follow an automation curve on the absolute clock.
    pub fn with_frequency_curve(mut self, curve: ParamTimeline) -> Self {
        self.pitch = Pitch::Curve(curve);
        self
    }
}

impl GraphNode for OscNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        match &self.pitch {
            Pitch::Fixed(freq) => self.osc.render(out, *freq, ctx),
            Pitch::Curve(curve) => {
                for (i, sample) in out.iter_mut().enumerate() {
                    let freq = curve.value_at(ctx.sample_time(i));
                    *sample = self.osc.next_sample(freq, ctx.sample_rate);
                }
            }
        }
    }
}
