/// Context passed to graph nodes during rendering
///
/// Contains information about what to render:
/// - sample_rate: Audio sample rate (e.g., 48000.0)
/// - time: Absolute clock time of the first sample in the block (seconds)
///
/// Voices carry their own frequencies and automation, so the context only
/// has to say *when* a block sounds.
#[derive(Debug, Clone, Copy)]
pub struct RenderCtx {
    pub sample_rate: f32,
    pub time: f64,
}

impl RenderCtx {
    pub fn at(sample_rate: f32, time: f64) -> Self {
        Self { sample_rate, time }
    }

    /// Absolute time of sample `index` within the block.
    #[inline]
    pub fn sample_time(&self, index: usize) -> f64 {
        self.time + index as f64 / self.sample_rate as f64
    }

    /// Context for the part of the block starting at sample `offset`.
    pub fn offset_by(&self, offset: usize) -> Self {
        Self {
            sample_rate: self.sample_rate,
            time: self.sample_time(offset),
        }
    }
}

/// Core trait for audio processing graph nodes
///
/// Nodes render consecutive blocks of audio. Any time-varying behaviour is
/// keyed on `ctx.time` so that a node scheduled far ahead renders exactly what
/// it planned once its block comes around.
pub trait GraphNode: Send {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx);
}

/// Allow boxed graph nodes to be used as graph nodes (for dynamic dispatch)
impl GraphNode for Box<dyn GraphNode> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        (**self).render_block(out, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_time_advances_by_period() {
        let ctx = RenderCtx::at(4.0, 1.0);
        assert_eq!(ctx.sample_time(0), 1.0);
        assert_eq!(ctx.sample_time(2), 1.5);
        assert_eq!(ctx.offset_by(4).time, 2.0);
    }
}
