pub mod config;
pub mod dsp;
pub mod engine; // Clock, destination, mixer and look-ahead scheduler
pub mod error;
pub mod graph; // Composable audio graph nodes
pub mod io;
pub mod runtime; // Game-facing trigger API
pub mod sequencing; // Beat patterns per music mode
pub mod synth; // Scheduled voices and mixer commands
pub mod voices; // Instrument bank

pub use config::EngineConfig;
pub use error::{AudioError, Result};
pub use runtime::SoundFx;
pub use sequencing::MusicMode;

pub const MAX_BLOCK_SIZE: usize = 2048;
pub(crate) const MIN_TIME: f32 = 1.0 / 48_000.0;
