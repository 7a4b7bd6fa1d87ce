use crate::{
    dsp::filter::SVFilter,
    graph::node::{GraphNode, RenderCtx},
};

/*
State-Variable Filter (SVF)
===========================

A filter removes or attenuates certain frequencies from a signal. In subtractive
synthesis, you start with a harmonically rich waveform (like a square) and
filter out frequencies to sculpt the timbre.

Filter Types:
-------------

Lowpass (LP): Passes frequencies BELOW the cutoff, attenuates above.
  - The bass voice runs its square wave through a 600 Hz lowpass so the
    line sits round and warm under the chords.

Highpass (HP): Passes frequencies ABOVE the cutoff, attenuates below.
  - The hurry-mode hi-hat is white noise through a 5 kHz highpass: only the
    bright "tss" is left.

Cutoff (Hz): The frequency where the filter takes effect.
  - 200 Hz:    Muffled, like through a wall
  - 600 Hz:    Warm, round bass
  - 5000 Hz:   Thin, airy, metallic
  - 20000 Hz:  Fully open (no filtering)

Example usage:
  let bass = OscNode::square().with_frequency(110.0).through(FilterNode::lowpass(600.0));
  let hat = BufferNode::new(noise).through(FilterNode::highpass(5000.0));
*/

pub struct FilterNode {
    filter: SVFilter,
}

impl FilterNode {
    pub fn lowpass(cutoff_hz: f32) -> Self {
        FilterNode {
            filter: SVFilter::lowpass(cutoff_hz),
        }
    }

    pub fn highpass(cutoff_hz: f32) -> Self {
        FilterNode {
            filter: SVFilter::highpass(cutoff_hz),
        }
    }
}

impl GraphNode for FilterNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.filter.render(out, ctx);
    }
}
