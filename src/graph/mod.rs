//! Composable building blocks for constructing audio-processing graphs.
//!
//! Graph nodes wrap the low-level DSP primitives with the ergonomics needed
//! for instrument design: absolute-time automation and block-based
//! rendering. The `extensions` module adds fluent helpers so voices can be
//! authored with a clear, chainable API.

/// Multiply two signals together (gain envelopes).
pub mod amplify;
/// One-shot playback of a pre-rendered sample buffer.
pub mod buffer;
/// Unweighted sum of any number of sources.
pub mod bus;
/// Gain envelope node driven by a parameter timeline.
pub mod envelope;
/// Fluent combinators (`.amplify()`, `.through()`).
pub mod extensions;
/// Lowpass and highpass filter node.
pub mod filter;
/// Core traits shared by all graph nodes.
pub mod node;
/// Audio-band oscillators with fixed or automated pitch.
pub mod oscillator;
/// Serial chaining of two nodes (source → effect).
pub mod through;

pub use node::{GraphNode, RenderCtx};
