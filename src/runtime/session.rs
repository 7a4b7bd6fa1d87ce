use crate::{
    config::EngineConfig,
    dsp::oscillator::Waveform,
    engine::{
        clock::ContextState,
        context::AudioContext,
        scheduler::{Scheduler, SchedulerState},
    },
    runtime::effects::SoundEffect,
    sequencing::mode::MusicMode,
};

/// Snapshot of the playback for display.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackStatus {
    pub mode: Option<MusicMode>,
    pub tempo_bpm: f64,
    pub beat_index: u64,
    pub next_note_time: f64,
    pub now: f64,
    pub sample_rate: f32,
    pub active_voices: usize,
    pub context_state: ContextState,
}

impl PlaybackStatus {
    /// Position of the last scheduled beat inside its bar.
    pub fn bar16(&self) -> u64 {
        self.beat_index.saturating_sub(1) % 16
    }
}

/// The context and the scheduler that feeds it, locked together.
pub struct Session {
    pub(crate) context: AudioContext,
    pub(crate) scheduler: Scheduler,
}

impl Session {
    pub fn new(context: AudioContext, config: &EngineConfig) -> Self {
        Self {
            context,
            scheduler: Scheduler::new(config),
        }
    }

    pub fn context(&self) -> &AudioContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut AudioContext {
        &mut self.context
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn is_scheduling(&self) -> bool {
        matches!(self.scheduler.state(), SchedulerState::Scheduling(_))
    }

    /// Start `mode` and commit its first window right away.
    pub fn start(&mut self, mode: MusicMode) {
        self.scheduler.start(mode, &mut self.context);
        self.scheduler.fill(&mut self.context);
    }

    pub fn stop(&mut self) {
        self.scheduler.stop(&mut self.context);
    }

    pub fn fill(&mut self) -> usize {
        self.scheduler.fill(&mut self.context)
    }

    pub fn play_effect(&mut self, effect: SoundEffect) {
        if effect.halts_music() {
            self.stop();
        }

        let now = self.context.now();
        for tone in effect.tones() {
            self.scheduler.bank_mut().tone(
                now + tone.delay,
                tone.frequency,
                tone.waveform,
                tone.duration,
                tone.volume,
                &mut self.context,
            );
        }
    }

    pub fn play_tone(&mut self, frequency: f32, waveform: Waveform, duration: f64, volume: f32) {
        let now = self.context.now();
        self.scheduler
            .bank_mut()
            .tone(now, frequency, waveform, duration, volume, &mut self.context);
    }

    pub fn status(&self) -> PlaybackStatus {
        let playback = self.scheduler.playback();
        PlaybackStatus {
            mode: self.scheduler.mode(),
            tempo_bpm: playback.tempo_bpm,
            beat_index: playback.beat_index,
            next_note_time: playback.next_note_time,
            now: self.context.now(),
            sample_rate: self.context.sample_rate(),
            active_voices: playback.active_voices.len(),
            context_state: self.context.state(),
        }
    }
}
