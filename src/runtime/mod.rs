//! Game-facing runtime.
//!
//! `SoundFx` is the trigger API the game calls into. It owns a `Session`
//! (context plus scheduler) behind a mutex and, unless configured
//! otherwise, a `LookaheadDriver` thread that keeps the music scheduled.
//!
//! # Example
//!
//! ```ignore
//! use conquest_audio::{EngineConfig, MusicMode, SoundFx};
//!
//! let mut sfx = SoundFx::new(EngineConfig::default());
//! if sfx.init() {
//!     sfx.play_bgm(MusicMode::Normal);
//! }
//! sfx.play_conquer();
//! sfx.play_win(); // stops the music first
//! ```

pub mod driver;
pub mod effects;
pub mod session;
pub mod sound_fx;

pub use driver::LookaheadDriver;
pub use effects::{SoundEffect, ToneSpec};
pub use session::{PlaybackStatus, Session};
pub use sound_fx::SoundFx;
