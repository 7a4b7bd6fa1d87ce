use crate::graph::node::{GraphNode, RenderCtx};

/// Plays a pre-rendered sample buffer once, beginning at an absolute time.
///
/// Frames before `start` or past the end of the buffer render as silence. The
/// read position is derived from `ctx.time` on every block, so a voice that
/// the mixer starts mid-block still lines up with the clock.
pub struct BufferNode {
    samples: Vec<f32>,
    sample_rate: f32,
    start: f64,
}

impl BufferNode {
    /// `sample_rate` is the rate the buffer was rendered at.
    pub fn new(samples: Vec<f32>, sample_rate: f32, start: f64) -> Self {
        Self {
            samples,
            sample_rate,
            start,
        }
    }

    /// Length of the buffer in seconds.
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

impl GraphNode for BufferNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        for (i, sample) in out.iter_mut().enumerate() {
            let position = (ctx.sample_time(i) - self.start) * self.sample_rate as f64;
            *sample = if position < -0.5 {
                0.0
            } else {
                self.samples
                    .get(position.round() as usize)
                    .copied()
                    .unwrap_or(0.0)
            };
        }
    }
}
