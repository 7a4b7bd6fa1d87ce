use crate::graph::node::{GraphNode, RenderCtx};

/// Serial chain: renders `source`, then runs `filter` over the same buffer
/// in place.
///
/// ```text
///   [OscNode::square] ──→ [FilterNode::lowpass] ──→ out      (bass)
///   [BufferNode]      ──→ [FilterNode::highpass] ──→ out     (hi-hat)
/// ```
///
/// Parallel sources go through `Bus`, gain through `Amplify`.
pub struct Through<S, F> {
    source: S,
    filter: F,
}

impl<S, F> Through<S, F> {
    pub fn new(source: S, filter: F) -> Self {
        Self { source, filter }
    }
}

impl<S: GraphNode, F: GraphNode> GraphNode for Through<S, F> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.source.render_block(out, ctx);
        self.filter.render_block(out, ctx);
    }
}
