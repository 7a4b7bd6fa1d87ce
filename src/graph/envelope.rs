use crate::{
    dsp::automation::ParamTimeline,
    graph::node::{GraphNode, RenderCtx},
};

/// Gain envelope node: renders a `ParamTimeline` as a control signal.
///
/// Multiply a source by it with `.amplify(EnvNode::new(..))`. Because the
/// timeline is on the absolute clock, the envelope needs no note-on: the
/// shape was decided when the voice was scheduled.
pub struct EnvNode {
    gain: ParamTimeline,
}

impl EnvNode {
    pub fn new(gain: ParamTimeline) -> Self {
        Self { gain }
    }
}

impl GraphNode for EnvNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.gain.render(out, ctx.time, ctx.sample_rate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn renders_timeline_at_block_time() {
        let timeline = ParamTimeline::new(0.0).set(0.05, 1.0).exponential_ramp(0.001, 1.1);
        let mut env = EnvNode::new(timeline);

        let mut before = [1.0f32; 8];
        env.render_block(&mut before, &RenderCtx::at(1_000.0, 0.9));
        assert!(before.iter().all(|&s| s == 0.0));

        let mut at = [0.0f32; 1];
        env.render_block(&mut at, &RenderCtx::at(1_000.0, 1.0));
        assert_abs_diff_eq!(at[0], 0.05, epsilon = 1e-7);
    }
}
