//! Error types for the audio engine.
//!
//! None of these are fatal. The runtime absorbs them at the instrument bank
//! and clock boundary so the surrounding game never sees a failure beyond
//! the "audio unavailable" flag returned by `SoundFx::init`.

use thiserror::Error;

use crate::synth::voice::VoiceHandle;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AudioError {
    /// The platform audio clock could not be created or resumed, or the
    /// mixer that drives it has gone away.
    #[error("audio clock unavailable: {0}")]
    ClockUnavailable(String),

    /// A stop was requested for a voice that already reached its end.
    #[error("voice {0} already stopped")]
    VoiceAlreadyStopped(VoiceHandle),

    /// The command queue towards the audio thread is full.
    #[error("mixer command queue is full")]
    QueueFull,
}

pub type Result<T> = std::result::Result<T, AudioError>;
