use crate::dsp::oscillator::Waveform;

/// Which recipe of the instrument bank renders an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instrument {
    Kick,
    Bass,
    Chord,
    Lead,
    Pad,
    Bell,
    /// Hi-hat: filtered white noise.
    Noise,
}

/// A single trigger produced by the composer for one beat.
///
/// `offset` is relative to the beat start. `waveform` and `harmonic_ratio`
/// override the instrument's defaults where it has one to override.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteEvent {
    pub instrument: Instrument,
    pub frequencies: Vec<f32>,
    pub offset: f64,
    pub duration: f64,
    pub waveform: Option<Waveform>,
    pub harmonic_ratio: Option<f32>,
}

impl NoteEvent {
    pub fn new(instrument: Instrument, frequencies: impl Into<Vec<f32>>, duration: f64) -> Self {
        Self {
            instrument,
            frequencies: frequencies.into(),
            offset: 0.0,
            duration,
            waveform: None,
            harmonic_ratio: None,
        }
    }

    pub fn with_waveform(mut self, waveform: Waveform) -> Self {
        self.waveform = Some(waveform);
        self
    }

    pub fn with_harmonic_ratio(mut self, ratio: f32) -> Self {
        self.harmonic_ratio = Some(ratio);
        self
    }

    /// First (or only) frequency of the event.
    pub fn frequency(&self) -> Option<f32> {
        self.frequencies.first().copied()
    }
}
