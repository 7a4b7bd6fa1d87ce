//! Clock, destination, mixer and look-ahead scheduler.
//!
//! `AudioContext` and `Mixer` are the two halves of the output sink: the
//! context lives with the game, the mixer lives on the audio thread. The
//! `Scheduler` sits on the context side and feeds it voices ahead of time.

pub mod clock;
pub mod context;
pub mod mixer;
pub mod scheduler;

pub use clock::{ContextState, SampleClock};
pub use context::{AudioContext, Destination};
pub use mixer::Mixer;
pub use scheduler::{PlaybackState, Scheduler, SchedulerState};
