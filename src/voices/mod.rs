//! Instrument bank: the synthesis recipes behind every note and effect.
//!
//! Each recipe is a free function returning a node graph whose automation is
//! laid out on the absolute clock from a start time. `InstrumentBank` turns
//! composer events into voices, connects them to the context's destination
//! and absorbs connection failures.
//!
//! # Example
//!
//! ```ignore
//! use conquest_audio::voices;
//!
//! // Drums
//! let kick = voices::kick(start, 0.5);
//! let bass = voices::bass(start, 110.0, 0.3);
//!
//! // Melodic
//! let pad = voices::pad(start, &[110.0, 164.8, 196.0], 4.0);
//! let bell = voices::bell(start, 784.0, 2.5, 1.5);
//! ```

mod bass;
mod bell;
mod chord;
mod hihat;
mod kick;
mod lead;
mod pad;
mod tone;

pub use bass::bass;
pub use bell::{bell, DEFAULT_RATIO};
pub use chord::chord;
pub use hihat::{hihat, noise_buffer};
pub use kick::kick;
pub use lead::lead;
pub use pad::pad;
pub use tone::tone;

use tracing::warn;

use crate::{
    dsp::oscillator::Waveform,
    engine::context::AudioContext,
    sequencing::event::{Instrument, NoteEvent},
    synth::voice::{ActiveVoice, Voice},
};

/// Builds voices from events and connects them to a context.
pub struct InstrumentBank {
    rng: fastrand::Rng,
}

impl InstrumentBank {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Self { rng }
    }

    /// Build the voice for `event` starting at `start`. Returns `None` for a
    /// pitched instrument without frequencies.
    pub fn build(&mut self, event: &NoteEvent, start: f64, sample_rate: f32) -> Option<Voice> {
        let duration = event.duration;
        let stop = start + duration;

        let voice = match event.instrument {
            Instrument::Kick => Voice::new(kick(start, duration), start, stop),
            Instrument::Bass => Voice::new(bass(start, event.frequency()?, duration), start, stop),
            Instrument::Chord => {
                if event.frequencies.is_empty() {
                    return None;
                }
                Voice::new(chord(start, &event.frequencies, duration), start, stop)
            }
            Instrument::Lead => {
                let waveform = event.waveform.unwrap_or(Waveform::Sine);
                Voice::new(
                    lead(start, event.frequency()?, waveform, duration),
                    start,
                    stop,
                )
            }
            Instrument::Pad => {
                if event.frequencies.is_empty() {
                    return None;
                }
                Voice::new(pad(start, &event.frequencies, duration), start, stop)
            }
            Instrument::Bell => {
                let ratio = event.harmonic_ratio.unwrap_or(DEFAULT_RATIO);
                Voice::new(
                    bell(start, event.frequency()?, ratio, duration),
                    start,
                    stop,
                )
            }
            Instrument::Noise => {
                let noise = noise_buffer(&mut self.rng, sample_rate, duration);
                Voice::new(hihat(start, noise, sample_rate, duration), start, stop)
            }
        };

        Some(voice)
    }

    /// Build and connect the voice for `event`. Failures are logged and
    /// yield `None`.
    pub fn trigger(
        &mut self,
        event: &NoteEvent,
        start: f64,
        ctx: &mut AudioContext,
    ) -> Option<ActiveVoice> {
        let voice = self.build(event, start, ctx.sample_rate())?;
        connect(voice, ctx)
    }

    /// Play a plain tone, as used by the sound effects.
    pub fn tone(
        &mut self,
        start: f64,
        frequency: f32,
        waveform: Waveform,
        duration: f64,
        volume: f32,
        ctx: &mut AudioContext,
    ) -> Option<ActiveVoice> {
        let stop = start + duration;
        let seed = self.rng.u64(..);
        let voice = Voice::new(
            tone(start, frequency, waveform, duration, volume, seed),
            start,
            stop,
        );
        connect(voice, ctx)
    }
}

fn connect(voice: Voice, ctx: &mut AudioContext) -> Option<ActiveVoice> {
    let stop_time = voice.stop_time();
    match ctx.destination().connect(voice) {
        Ok(handle) => Some(ActiveVoice { handle, stop_time }),
        Err(err) => {
            warn!(%err, "dropping voice");
            None
        }
    }
}
