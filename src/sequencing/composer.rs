//! Beat patterns for every music mode.
//!
//! `compose_beat` is a pure function of the mode, the beat index and a random
//! source. The scheduler calls it once per sixteenth note and hands the
//! resulting events to the instrument bank.

use crate::{
    dsp::oscillator::Waveform,
    sequencing::{
        event::{Instrument, NoteEvent},
        mode::MusicMode,
    },
};

/*
Pattern Tables
==============

Beats are sixteenth notes. Two counters locate a beat inside the loop:

  bar16 = beat % 16    position inside one bar
  bar32 = beat % 32    position inside the two-bar harmonic cycle

Title (60 BPM)
--------------
  bar32 = 0     Pad  A2 E3 G3      (Am7)
  bar32 = 16    Pad  F2 C3 F3      (Fmaj7)
  every beat    Bell with probability 0.2, pitch drawn from C5 E5 G5 C6

Normal (110 BPM)
----------------
  bar16:   0 1 2 3 4 5 6 7 8 9 A B C D E F
  Kick     x . . . x . . . x . . . x . . .
  Bass     . . x . . . . . . . x . . . x .     A2 then D3 in the second bar
  Chord    x . x . x . x . x . x . x . x .     Am then D
  Lead     x . x . x . x . x . x . x . x .     arpeggio C5 E5 G5 A5

Hurry (160 BPM)
---------------
  bar16:   0 1 2 3 4 5 6 7 8 9 A B C D E F
  Kick     x . x . x . x . x . x . x . x .
  Hi-hat   . x . x . x . x . x . x . x . x
  Bass     x . . . x . . . x . . . x . . .     A2 Bb2 A2 G#2
  Lead     x . x . x . x . x . x . x . x .     A5 on every 8th beat, else G#5

Within a beat, events come out in a fixed order (pad, bell / kick, noise,
bass, chord, lead) so scheduling stays deterministic for a given seed.
*/

const TITLE_PAD_A: [f32; 3] = [110.0, 164.8, 196.0];
const TITLE_PAD_F: [f32; 3] = [87.3, 130.8, 174.6];
const PAD_SECONDS: f64 = 4.0;

const BELL_NOTES: [f32; 4] = [523.0, 659.0, 784.0, 1046.0];
const BELL_PROBABILITY: f64 = 0.2;
const BELL_RATIO: f32 = 2.5;
const BELL_SECONDS: f64 = 1.5;

const NORMAL_BASS_BEATS: [u64; 3] = [2, 10, 14];
const NORMAL_CHORD_A: [f32; 3] = [440.0, 523.0, 659.0];
const NORMAL_CHORD_D: [f32; 3] = [587.0, 739.0, 880.0];
const NORMAL_ARPEGGIO: [f32; 4] = [523.0, 659.0, 784.0, 880.0];

const HURRY_BASS: [f32; 4] = [110.0, 116.0, 110.0, 103.0];

pub const KICK_SECONDS: f64 = 0.5;
pub const BASS_SECONDS: f64 = 0.3;
pub const CHORD_SECONDS: f64 = 0.1;
pub const LEAD_SECONDS: f64 = 0.2;
pub const NOISE_SECONDS: f64 = 0.05;

/// Random source for the composer.
///
/// Only the title mode draws from it. Tests can plug in a scripted sequence.
pub trait BeatRng {
    /// Uniform sample in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn below(&mut self, len: usize) -> usize {
        ((self.next_f64() * len as f64) as usize).min(len.saturating_sub(1))
    }
}

impl BeatRng for fastrand::Rng {
    fn next_f64(&mut self) -> f64 {
        self.f64()
    }
}

/// Events to trigger at beat `beat` of `mode`.
pub fn compose_beat(mode: MusicMode, beat: u64, rng: &mut impl BeatRng) -> Vec<NoteEvent> {
    match mode {
        MusicMode::Title => title_beat(beat, rng),
        MusicMode::Normal => normal_beat(beat),
        MusicMode::Hurry => hurry_beat(beat),
    }
}

fn title_beat(beat: u64, rng: &mut impl BeatRng) -> Vec<NoteEvent> {
    let bar32 = beat % 32;
    let mut events = Vec::new();

    match bar32 {
        0 => events.push(NoteEvent::new(Instrument::Pad, TITLE_PAD_A, PAD_SECONDS)),
        16 => events.push(NoteEvent::new(Instrument::Pad, TITLE_PAD_F, PAD_SECONDS)),
        _ => {}
    }

    if rng.next_f64() < BELL_PROBABILITY {
        let freq = BELL_NOTES[rng.below(BELL_NOTES.len())];
        events.push(
            NoteEvent::new(Instrument::Bell, [freq], BELL_SECONDS)
                .with_waveform(Waveform::Sine)
                .with_harmonic_ratio(BELL_RATIO),
        );
    }

    events
}

fn normal_beat(beat: u64) -> Vec<NoteEvent> {
    let bar16 = beat % 16;
    let first_bar = beat % 32 < 16;
    let mut events = Vec::new();

    if bar16 % 4 == 0 {
        events.push(NoteEvent::new(Instrument::Kick, [150.0], KICK_SECONDS));
    }

    if NORMAL_BASS_BEATS.contains(&bar16) {
        let root = if first_bar { 110.0 } else { 146.8 };
        events.push(NoteEvent::new(Instrument::Bass, [root], BASS_SECONDS));
    }

    if bar16 % 2 == 0 {
        let chord = if first_bar {
            NORMAL_CHORD_A
        } else {
            NORMAL_CHORD_D
        };
        events.push(
            NoteEvent::new(Instrument::Chord, chord, CHORD_SECONDS)
                .with_waveform(Waveform::Triangle),
        );
    }

    if beat % 2 == 0 {
        let note = NORMAL_ARPEGGIO[((beat / 2) % 4) as usize];
        events.push(
            NoteEvent::new(Instrument::Lead, [note], LEAD_SECONDS).with_waveform(Waveform::Sine),
        );
    }

    events
}

fn hurry_beat(beat: u64) -> Vec<NoteEvent> {
    let bar16 = beat % 16;
    let mut events = Vec::new();

    if bar16 % 2 == 0 {
        events.push(NoteEvent::new(Instrument::Kick, [150.0], KICK_SECONDS));
    } else {
        events.push(NoteEvent::new(Instrument::Noise, Vec::new(), NOISE_SECONDS));
    }

    if bar16 % 4 == 0 {
        let note = HURRY_BASS[(bar16 / 4) as usize];
        events.push(NoteEvent::new(Instrument::Bass, [note], BASS_SECONDS));
    }

    if bar16 % 2 == 0 {
        let note = if beat % 8 == 0 { 880.0 } else { 830.0 };
        events.push(
            NoteEvent::new(Instrument::Lead, [note], LEAD_SECONDS)
                .with_waveform(Waveform::Sawtooth),
        );
    }

    events
}

/// Seedable composer owned by the scheduler.
pub struct Composer {
    rng: fastrand::Rng,
}

impl Composer {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Self { rng }
    }

    pub fn compose(&mut self, mode: MusicMode, beat: u64) -> Vec<NoteEvent> {
        compose_beat(mode, beat, &mut self.rng)
    }
}
