use crate::{
    graph::node::{GraphNode, RenderCtx},
    MAX_BLOCK_SIZE,
};

pub struct Amplify<N, M> {
    pub signal: N,
    pub modulator: M,
    temp_buffer: Vec<f32>,
}

impl<N, M> Amplify<N, M> {
    pub fn new(signal: N, modulator: M) -> Self {
        Self {
            signal,
            modulator,
            temp_buffer: vec![0.0; MAX_BLOCK_SIZE],
        }
    }
}

impl<N: GraphNode, M: GraphNode> GraphNode for Amplify<N, M> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        // Render signal into output
        self.signal.render_block(out, ctx);

        // Blocks longer than the scratch space are processed in chunks
        for (chunk_index, chunk) in out.chunks_mut(MAX_BLOCK_SIZE).enumerate() {
            let frames = &mut self.temp_buffer[..chunk.len()];
            frames.fill(0.0);
            let chunk_ctx = ctx.offset_by(chunk_index * MAX_BLOCK_SIZE);
            self.modulator.render_block(frames, &chunk_ctx);

            // Multiply signal by modulator (amplitude control)
            for (o, m) in chunk.iter_mut().zip(frames.iter()) {
                *o *= *m;
            }
        }
    }
}
