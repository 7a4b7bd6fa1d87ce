//! One-shot sound effects.
//!
//! Each effect is a short list of tones. Delays are relative to the moment
//! the effect fires and are laid out on the audio clock, so a fanfare keeps
//! its rhythm even if the game thread stalls.

use crate::dsp::oscillator::Waveform;

/// One tone of an effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSpec {
    pub delay: f64,
    pub frequency: f32,
    pub waveform: Waveform,
    pub duration: f64,
    pub volume: f32,
}

impl ToneSpec {
    const fn new(
        delay: f64,
        frequency: f32,
        waveform: Waveform,
        duration: f64,
        volume: f32,
    ) -> Self {
        Self {
            delay,
            frequency,
            waveform,
            duration,
            volume,
        }
    }
}

const VICTORY_NOTES: [f32; 6] = [440.0, 554.0, 659.0, 880.0, 1108.0, 1318.0];
const VICTORY_STEP: f64 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// A key press.
    Key,
    /// A word was completed and the cursor moves on.
    Advance,
    /// A territory was captured.
    Capture,
    /// The game was won.
    Victory,
    /// The game was lost.
    Defeat,
}

impl SoundEffect {
    pub fn tones(self) -> Vec<ToneSpec> {
        use Waveform::*;

        match self {
            SoundEffect::Key => vec![ToneSpec::new(0.0, 800.0, Square, 0.05, 0.03)],
            SoundEffect::Advance => vec![
                ToneSpec::new(0.0, 1200.0, Sine, 0.1, 0.1),
                ToneSpec::new(0.1, 1800.0, Sine, 0.2, 0.1),
            ],
            SoundEffect::Capture => vec![
                ToneSpec::new(0.0, 150.0, Sawtooth, 0.4, 0.2),
                ToneSpec::new(0.0, 100.0, Square, 0.4, 0.2),
            ],
            SoundEffect::Victory => VICTORY_NOTES
                .iter()
                .enumerate()
                .map(|(i, &freq)| ToneSpec::new(i as f64 * VICTORY_STEP, freq, Triangle, 0.6, 0.4))
                .collect(),
            SoundEffect::Defeat => vec![
                ToneSpec::new(0.0, 100.0, Sawtooth, 1.0, 0.3),
                ToneSpec::new(0.3, 80.0, Sawtooth, 1.5, 0.3),
            ],
        }
    }

    /// Whether the background music stops before the effect plays.
    pub fn halts_music(self) -> bool {
        matches!(self, SoundEffect::Victory | SoundEffect::Defeat)
    }
}
