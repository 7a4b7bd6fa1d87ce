//! Low-level DSP primitives used by the higher level graph nodes.
//!
//! These components are allocation-free once constructed, making them safe to
//! embed directly inside voices rendered on the audio thread. They stay
//! focused on the signal-processing math so graph combinators can layer on
//! scheduling and routing.

/// Set/linear/exponential parameter automation on the absolute clock.
pub mod automation;
/// State-variable filter with low-pass and high-pass responses.
pub mod filter;
/// Oscillator waveforms and noise sources.
pub mod oscillator;

pub use automation::{ParamTimeline, EXP_FLOOR};
pub use oscillator::Waveform;
