//! Real-world scenario benchmarks.
//!
//! These benchmarks model what the game actually plays: single instrument
//! voices, and the mixer rendering a full window of each music mode.

mod mix;
mod voices;

pub use mix::bench_mix;
pub use voices::bench_voices;
