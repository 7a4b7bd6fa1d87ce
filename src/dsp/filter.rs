use std::f32::consts::{FRAC_1_SQRT_2, TAU};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::graph::node::RenderCtx;

/*
| type      | constructed by | passes       | rejects      | used by        |
| --------- | -------------- | ------------ | ------------ | -------------- |
| low-pass  | LPF            | below cutoff | above cutoff | bass (600 Hz)  |
| high-pass | HPF            | above cutoff | below cutoff | hi-hat (5 kHz) |

The filter is a topology-preserving-transform state-variable filter. Both
responses come out of the same two integrators; only the tap differs.

Damping is k = 1/Q. The default Q of 1/√2 gives the maximally flat
(Butterworth) response, the same shape a default browser biquad produces.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterType {
    LowPass,
    HighPass,
}

pub struct SVFilter {
    ic1eq: f32, // First integrator's memory
    ic2eq: f32, // Second integrator's memory

    pub cutoff_hz: f32,
    q: f32,
    filter_type: FilterType,
}

impl SVFilter {
    pub fn new(filter_type: FilterType, cutoff_hz: f32) -> Self {
        Self {
            ic1eq: 0.0,
            ic2eq: 0.0,
            cutoff_hz,
            q: FRAC_1_SQRT_2,
            filter_type,
        }
    }

    pub fn lowpass(cutoff_hz: f32) -> Self {
        Self::new(FilterType::LowPass, cutoff_hz)
    }

    pub fn highpass(cutoff_hz: f32) -> Self {
        Self::new(FilterType::HighPass, cutoff_hz)
    }

    #[inline]
    fn compute_g(&self, ctx: &RenderCtx) -> f32 {
        // Keep the prewarp below Nyquist so tan() stays finite and positive.
        let nyquist = 0.5 * ctx.sample_rate;
        let cutoff = self.cutoff_hz.clamp(10.0, nyquist * 0.99);
        (TAU * cutoff / (2.0 * ctx.sample_rate)).tan()
    }

    /// Advance one sample and return the selected response.
    #[inline]
    fn tick(&mut self, sample: f32, k: f32, g: f32) -> f32 {
        let h = 1.0 / (1.0 + g * (g + k));
        let v3 = sample - self.ic2eq;
        let v1 = h * (self.ic1eq + g * v3);
        let v2 = self.ic2eq + g * v1;

        self.ic1eq = 2.0 * v1 - self.ic1eq;
        self.ic2eq = 2.0 * v2 - self.ic2eq;

        match self.filter_type {
            FilterType::LowPass => v2,
            FilterType::HighPass => sample - k * v1 - v2,
        }
    }

    pub fn render(&mut self, buffer: &mut [f32], ctx: &RenderCtx) {
        let g = self.compute_g(ctx);
        let k = 1.0 / self.q.max(0.05);

        for sample in buffer.iter_mut() {
            *sample = self.tick(*sample, k, g);
        }
    }

}
