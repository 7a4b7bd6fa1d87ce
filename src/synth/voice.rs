use std::fmt;

use crate::graph::node::{GraphNode, RenderCtx};

const FRAME_EPSILON: f64 = 1e-6;

/// Lightweight id for a voice owned by the mixer.
///
/// Handles are handed out in increasing order by the destination and are
/// never reused within one context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VoiceHandle(pub u64);

impl fmt::Display for VoiceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A voice the control side still tracks, with the time it ends on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveVoice {
    pub handle: VoiceHandle,
    pub stop_time: f64,
}

/// A scheduled voice: a graph that sounds between two absolute times.
///
/// Outside `[start_time, stop_time)` the voice contributes nothing. Once the
/// clock passes `stop_time` the mixer drops it.
pub struct Voice {
    graph: Box<dyn GraphNode>,
    start_time: f64,
    stop_time: f64,
}

impl Voice {
    pub fn new<N: GraphNode + 'static>(graph: N, start_time: f64, stop_time: f64) -> Self {
        Self {
            graph: Box::new(graph),
            start_time,
            stop_time: stop_time.max(start_time),
        }
    }

    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    pub fn stop_time(&self) -> f64 {
        self.stop_time
    }

    /// True once the block starting at `time` lies entirely past the stop.
    pub fn is_finished(&self, time: f64) -> bool {
        time >= self.stop_time
    }

    /// Frame range of a block of `len` frames at `ctx.time` that this voice
    /// is audible in.
    fn audible_range(&self, len: usize, ctx: &RenderCtx) -> (usize, usize) {
        let sr = ctx.sample_rate as f64;
        // First frame at or after `t`, tolerant of rounding in `t * sr`.
        let to_frame = |t: f64| {
            ((t - ctx.time) * sr - FRAME_EPSILON)
                .ceil()
                .clamp(0.0, len as f64) as usize
        };
        (to_frame(self.start_time), to_frame(self.stop_time))
    }

    /// Render the voice into `scratch` and add the audible part onto `out`.
    ///
    /// `scratch` must be at least as long as `out`.
    pub fn mix_into(&mut self, out: &mut [f32], scratch: &mut [f32], ctx: &RenderCtx) {
        let (first, last) = self.audible_range(out.len(), ctx);
        if first >= last {
            return;
        }

        let frames = &mut scratch[first..last];
        frames.fill(0.0);
        self.graph.render_block(frames, &ctx.offset_by(first));

        for (o, s) in out[first..last].iter_mut().zip(frames.iter()) {
            *o += *s;
        }
    }
}
