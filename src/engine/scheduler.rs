//! Look-ahead beat scheduler.
//!
//! Every call to `fill` commits the beats that start within the next
//! `lookahead` seconds of audio time. Voices are handed to the mixer with
//! absolute start times, so timing is exact no matter how late or jittery
//! the caller is, as long as it calls again before the window runs out.

use tracing::{debug, info};

use crate::{
    config::EngineConfig,
    engine::context::AudioContext,
    sequencing::{composer::Composer, duration::Duration, mode::MusicMode},
    synth::voice::ActiveVoice,
    voices::InstrumentBank,
};

/*
Timeline
========

  now                 now + lookahead
   │◄──── window ────►│
   ├────┬────┬────┬───┼┬────┬────
   │ b4 │ b5 │ b6 │ b7 ││ b8 │        beats are sixteenths at the mode tempo
   └────┴────┴────┴───┴┴────┴────
                       ▲
                       next_note_time after the fill

After a fill, `next_note_time` is the first beat at or past the end of the
window, so it is never further ahead than `lookahead + sixteenth`. If the
clock jumped (a stalled caller, a suspended context), the loop walks forward
one beat at a time until it catches up; beats are never skipped. Notes that
ended before `now` are counted but not sent to the mixer, so a long stall
cannot flood the command queue.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Scheduling(MusicMode),
}

/// Everything the scheduler knows about the music that is playing.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub state: SchedulerState,
    pub tempo_bpm: f64,
    /// Monotonic, reset only when a mode starts.
    pub beat_index: u64,
    pub next_note_time: f64,
    pub active_voices: Vec<ActiveVoice>,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            state: SchedulerState::Idle,
            tempo_bpm: 120.0,
            beat_index: 0,
            next_note_time: 0.0,
            active_voices: Vec::new(),
        }
    }
}

pub struct Scheduler {
    playback: PlaybackState,
    composer: Composer,
    bank: InstrumentBank,
    lookahead: f64,
    start_delay: f64,
}

impl Scheduler {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            playback: PlaybackState::default(),
            composer: Composer::new(config.seed),
            bank: InstrumentBank::new(config.seed.map(|seed| seed.wrapping_add(1))),
            lookahead: config.lookahead,
            start_delay: config.start_delay,
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.playback.state
    }

    pub fn mode(&self) -> Option<MusicMode> {
        match self.playback.state {
            SchedulerState::Scheduling(mode) => Some(mode),
            SchedulerState::Idle => None,
        }
    }

    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    /// Instrument bank shared with the sound effects.
    pub fn bank_mut(&mut self) -> &mut InstrumentBank {
        &mut self.bank
    }

    /// Seconds between beats at the current tempo.
    pub fn beat_seconds(&self) -> f64 {
        Duration::SIXTEENTH.to_seconds(self.playback.tempo_bpm)
    }

    /// Start `mode` from its first beat. Restarting the mode that is already
    /// playing does nothing.
    pub fn start(&mut self, mode: MusicMode, ctx: &mut AudioContext) {
        if self.playback.state == SchedulerState::Scheduling(mode) {
            return;
        }

        self.stop(ctx);

        let now = ctx.now();
        self.playback.tempo_bpm = mode.tempo_bpm();
        self.playback.beat_index = 0;
        self.playback.next_note_time = now + self.start_delay;
        self.playback.state = SchedulerState::Scheduling(mode);

        info!(%mode, tempo = self.playback.tempo_bpm, now, "music started");
    }

    /// One look-ahead pass. Returns the number of beats scheduled.
    pub fn fill(&mut self, ctx: &mut AudioContext) -> usize {
        let SchedulerState::Scheduling(mode) = self.playback.state else {
            return 0;
        };

        let now = ctx.now();
        let horizon = now + self.lookahead;
        let step = self.beat_seconds();
        let mut scheduled = 0;

        while self.playback.next_note_time < horizon {
            let beat_time = self.playback.next_note_time;
            for event in self.composer.compose(mode, self.playback.beat_index) {
                let start = beat_time + event.offset;
                // Already over: counting the beat is enough.
                if start + event.duration <= now {
                    continue;
                }
                if let Some(active) = self.bank.trigger(&event, start, ctx) {
                    self.playback.active_voices.push(active);
                }
            }

            self.playback.next_note_time += step;
            self.playback.beat_index += 1;
            scheduled += 1;
        }

        // Voices from the first catch-up beats may already have ended.
        self.playback
            .active_voices
            .retain(|voice| voice.stop_time > now);

        scheduled
    }

    /// Go idle and cut every voice this scheduler started. Safe to repeat.
    pub fn stop(&mut self, ctx: &mut AudioContext) {
        let was = self.playback.state;
        self.playback.state = SchedulerState::Idle;

        let voices = std::mem::take(&mut self.playback.active_voices);
        let destination = ctx.destination();
        for voice in &voices {
            if let Err(err) = destination.disconnect(voice.handle) {
                debug!(handle = %voice.handle, %err, "force-stop failed");
            }
        }

        if let SchedulerState::Scheduling(mode) = was {
            info!(%mode, stopped = voices.len(), "music stopped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::mixer::Mixer;

    fn setup() -> (AudioContext, Mixer, Scheduler) {
        let config = EngineConfig::default().seed(11);
        let (ctx, mixer) = AudioContext::offline(&config);
        ctx.resume().unwrap();
        (ctx, mixer, Scheduler::new(&config))
    }

    fn advance(mixer: &mut Mixer, seconds: f64) {
        let mut buffer = vec![0.0f32; (seconds * 48_000.0).round() as usize];
        mixer.render(&mut buffer);
    }

    #[test]
    fn start_resets_beat_and_sets_tempo() {
        let (mut ctx, _mixer, mut scheduler) = setup();
        scheduler.start(MusicMode::Hurry, &mut ctx);

        let playback = scheduler.playback();
        assert_eq!(playback.state, SchedulerState::Scheduling(MusicMode::Hurry));
        assert_eq!(playback.tempo_bpm, 160.0);
        assert_eq!(playback.beat_index, 0);
        assert_eq!(playback.next_note_time, 0.1);
    }

    #[test]
    fn idle_fill_does_nothing() {
        let (mut ctx, _mixer, mut scheduler) = setup();
        assert_eq!(scheduler.fill(&mut ctx), 0);
        assert_eq!(scheduler.playback().beat_index, 0);
    }

    #[test]
    fn first_fill_waits_for_start_delay() {
        let (mut ctx, mut mixer, mut scheduler) = setup();
        scheduler.start(MusicMode::Normal, &mut ctx);

        // next_note_time == now + lookahead: not strictly inside the window yet
        assert_eq!(scheduler.fill(&mut ctx), 0);

        advance(&mut mixer, 0.01);
        assert_eq!(scheduler.fill(&mut ctx), 1);
        assert_eq!(scheduler.playback().beat_index, 1);
    }

    #[test]
    fn restarting_same_mode_is_a_noop() {
        let (mut ctx, mut mixer, mut scheduler) = setup();
        scheduler.start(MusicMode::Normal, &mut ctx);
        advance(&mut mixer, 0.3);
        scheduler.fill(&mut ctx);
        let before = scheduler.playback().clone();

        scheduler.start(MusicMode::Normal, &mut ctx);
        assert_eq!(scheduler.playback().beat_index, before.beat_index);
        assert_eq!(scheduler.playback().next_note_time, before.next_note_time);
    }

    #[test]
    fn stop_twice_is_idle() {
        let (mut ctx, mut mixer, mut scheduler) = setup();
        scheduler.start(MusicMode::Title, &mut ctx);
        advance(&mut mixer, 0.2);
        scheduler.fill(&mut ctx);

        scheduler.stop(&mut ctx);
        scheduler.stop(&mut ctx);
        assert_eq!(scheduler.state(), SchedulerState::Idle);
        assert!(scheduler.playback().active_voices.is_empty());
    }

    #[test]
    fn catches_up_without_skipping() {
        let (mut ctx, mut mixer, mut scheduler) = setup();
        scheduler.start(MusicMode::Hurry, &mut ctx);
        advance(&mut mixer, 1.0);

        let scheduled = scheduler.fill(&mut ctx);
        let playback = scheduler.playback();
        assert_eq!(playback.beat_index, scheduled as u64);
        // beats from 0.1 s up to 1.1 s at 0.09375 s each
        assert_eq!(scheduled, 11);
        assert!(playback.next_note_time >= ctx.now() + 0.1);
        assert!(playback.next_note_time < ctx.now() + 0.1 + scheduler.beat_seconds());
    }

    #[test]
    fn expired_voices_are_pruned() {
        let (mut ctx, mut mixer, mut scheduler) = setup();
        scheduler.start(MusicMode::Normal, &mut ctx);
        advance(&mut mixer, 0.05);
        scheduler.fill(&mut ctx);
        assert!(!scheduler.playback().active_voices.is_empty());

        scheduler.stop(&mut ctx);
        scheduler.start(MusicMode::Hurry, &mut ctx);
        advance(&mut mixer, 5.0);
        scheduler.fill(&mut ctx);

        let now = ctx.now();
        assert!(scheduler
            .playback()
            .active_voices
            .iter()
            .all(|voice| voice.stop_time > now));
    }

    #[test]
    fn long_stall_only_sends_live_voices() {
        let (mut ctx, mut mixer, mut scheduler) = setup();
        scheduler.start(MusicMode::Hurry, &mut ctx);
        advance(&mut mixer, 90.0);

        let scheduled = scheduler.fill(&mut ctx);
        assert!(scheduled > 900);
        assert!(!scheduler.playback().active_voices.is_empty());

        // Only the current window reached the mixer.
        advance(&mut mixer, 0.001);
        assert!(mixer.active_voices() > 0);
        assert!(mixer.active_voices() < 16);
    }
}
