use crate::{
    graph::node::{GraphNode, RenderCtx},
    MAX_BLOCK_SIZE,
};

/*
Parallel Summing Bus
====================

A Bus renders any number of sources and adds them together, unweighted. It is
the graph form of connecting several oscillators to the same gain node: the
chord and pad voices stack one oscillator per note, the bell stacks its
fundamental with an inharmonic partial.

How it works:
1. Render the first source straight into the output buffer
2. Render every further source into a scratch buffer
3. Add the scratch buffer into the output

No normalisation is applied. A three-note chord can reach 3.0 before the gain
envelope scales it down, which is why the gain goes AFTER the bus:

  Bus::new(vec![a, b, c]).amplify(env)   // ✓ one envelope for the stack

Example usage:
  let chord = Bus::new(
      [440.0, 523.0, 659.0]
          .into_iter()
          .map(|f| OscNode::triangle().with_frequency(f))
          .collect(),
  );
*/

pub struct Bus<N> {
    sources: Vec<N>,
    temp_buffer: Vec<f32>,
}

impl<N> Bus<N> {
    pub fn new(sources: Vec<N>) -> Self {
        Self {
            sources,
            temp_buffer: vec![0.0; MAX_BLOCK_SIZE],
        }
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl<N: GraphNode> GraphNode for Bus<N> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        let Some((first, rest)) = self.sources.split_first_mut() else {
            out.fill(0.0);
            return;
        };

        first.render_block(out, ctx);

        for (chunk_index, chunk) in out.chunks_mut(MAX_BLOCK_SIZE).enumerate() {
            let chunk_ctx = ctx.offset_by(chunk_index * MAX_BLOCK_SIZE);
            for source in rest.iter_mut() {
                let frames = &mut self.temp_buffer[..chunk.len()];
                frames.fill(0.0);
                source.render_block(frames, &chunk_ctx);

                for (o, s) in chunk.iter_mut().zip(frames.iter()) {
                    *o += *s;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::automation::ParamTimeline;
    use crate::graph::{envelope::EnvNode, oscillator::OscNode};

    #[test]
    fn sums_sources_without_weighting() {
        let ctx = RenderCtx::at(48_000.0, 0.0);
        let mut bus = Bus::new(vec![
            EnvNode::new(ParamTimeline::new(0.25)),
            EnvNode::new(ParamTimeline::new(0.5)),
            EnvNode::new(ParamTimeline::new(0.125)),
        ]);

        let mut buffer = vec![0.0f32; 64];
        bus.render_block(&mut buffer, &ctx);

        assert!(buffer.iter().all(|&s| s == 0.875));
    }

    #[test]
    fn empty_bus_is_silent() {
        let ctx = RenderCtx::at(48_000.0, 0.0);
        let mut bus: Bus<OscNode> = Bus::new(Vec::new());

        let mut buffer = vec![1.0f32; 32];
        bus.render_block(&mut buffer, &ctx);

        assert!(bus.is_empty());
        assert!(buffer.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn stacked_squares_exceed_unity() {
        let ctx = RenderCtx::at(48_000.0, 0.0);
        let mut bus = Bus::new(vec![
            OscNode::square().with_frequency(100.0),
            OscNode::square().with_frequency(100.0),
        ]);

        let mut buffer = vec![0.0f32; 128];
        bus.render_block(&mut buffer, &ctx);

        assert_eq!(bus.len(), 2);
        assert!(buffer.iter().all(|&s| s.abs() == 2.0));
    }
}
