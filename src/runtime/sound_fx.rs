use std::sync::Arc;

use parking_lot::Mutex;
use rtrb::Consumer;
use tracing::{info, warn};

use crate::{
    config::EngineConfig,
    dsp::oscillator::Waveform,
    engine::{clock::ContextState, context::AudioContext},
    io::output::CpalOutput,
    runtime::{
        driver::LookaheadDriver,
        effects::SoundEffect,
        session::{PlaybackStatus, Session},
    },
    sequencing::mode::MusicMode,
};

const DEFAULT_TONE_VOLUME: f32 = 0.1;

/// Game-facing sound API. One per game session.
///
/// Nothing is opened until `init` (or the first `play_bgm`): platforms only
/// allow audio to start after a user gesture. If no output can be opened,
/// every call quietly does nothing.
///
/// ```ignore
/// use conquest_audio::{EngineConfig, MusicMode, SoundFx};
///
/// let mut sfx = SoundFx::new(EngineConfig::default());
/// sfx.play_bgm(MusicMode::Title);
/// sfx.play_key();
/// ```
pub struct SoundFx {
    config: EngineConfig,
    session: Option<Arc<Mutex<Session>>>,
    driver: Option<LookaheadDriver>,
    pending_context: Option<AudioContext>,
    output: Option<CpalOutput>,
}

impl SoundFx {
    /// Sound effects on the default output device, opened lazily.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            session: None,
            driver: None,
            pending_context: None,
            output: None,
        }
    }

    /// Sound effects on a context created by the caller, e.g. an offline
    /// context whose mixer is rendered by hand.
    pub fn with_context(config: EngineConfig, context: AudioContext) -> Self {
        Self {
            config,
            session: None,
            driver: None,
            pending_context: Some(context),
            output: None,
        }
    }

    /// Open and resume the audio context. Returns whether audio is
    /// available. Safe to call any number of times.
    pub fn init(&mut self) -> bool {
        if let Some(session) = &self.session {
            let session = session.lock();
            if session.context().state() == ContextState::Suspended {
                if let Err(err) = session.context().resume() {
                    warn!(%err, "failed to resume audio context");
                }
            }
            return session.context().state() == ContextState::Running;
        }

        let context = match self.pending_context.take() {
            Some(context) => context,
            None => match CpalOutput::open(&self.config) {
                Ok((output, context)) => {
                    self.output = Some(output);
                    context
                }
                Err(err) => {
                    warn!(%err, "audio unavailable");
                    return false;
                }
            },
        };

        if let Err(err) = context.resume() {
            warn!(%err, "audio unavailable");
            self.output = None;
            return false;
        }

        let session = Arc::new(Mutex::new(Session::new(context, &self.config)));
        if self.config.spawn_driver {
            match LookaheadDriver::spawn(session.clone(), self.config.poll_interval) {
                Ok(driver) => self.driver = Some(driver),
                Err(err) => warn!(%err, "no look-ahead thread, call pump() to schedule"),
            }
        }
        self.session = Some(session);

        info!("audio initialised");
        true
    }

    /// Whether `init` succeeded and the context has not closed since.
    pub fn is_available(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.lock().context().state() != ContextState::Closed)
    }

    /// Play background music in `mode`, initialising audio if needed.
    /// Asking for the mode that is already playing does nothing.
    pub fn play_bgm(&mut self, mode: MusicMode) {
        if !self.init() {
            return;
        }
        if let Some(session) = &self.session {
            session.lock().start(mode);
        }
        self.wake_driver();
    }

    pub fn stop_bgm(&mut self) {
        if let Some(session) = &self.session {
            session.lock().stop();
        }
        self.wake_driver();
    }

    pub fn play_key(&mut self) {
        self.play_effect(SoundEffect::Key);
    }

    pub fn play_next(&mut self) {
        self.play_effect(SoundEffect::Advance);
    }

    pub fn play_conquer(&mut self) {
        self.play_effect(SoundEffect::Capture);
    }

    /// Stops the music, then plays the victory fanfare.
    pub fn play_win(&mut self) {
        self.play_effect(SoundEffect::Victory);
    }

    /// Stops the music, then plays the defeat tones.
    pub fn play_over(&mut self) {
        self.play_effect(SoundEffect::Defeat);
    }

    /// Effects before `init` are dropped.
    pub fn play_effect(&mut self, effect: SoundEffect) {
        let Some(session) = &self.session else {
            return;
        };
        session.lock().play_effect(effect);
        if effect.halts_music() {
            self.wake_driver();
        }
    }

    pub fn play_tone(&mut self, frequency: f32, waveform: Waveform, duration: f64) {
        self.play_tone_at_volume(frequency, waveform, duration, DEFAULT_TONE_VOLUME);
    }

    pub fn play_tone_at_volume(
        &mut self,
        frequency: f32,
        waveform: Waveform,
        duration: f64,
        volume: f32,
    ) {
        if let Some(session) = &self.session {
            session.lock().play_tone(frequency, waveform, duration, volume);
        }
    }

    /// Run one look-ahead pass on the calling thread. Returns the number of
    /// beats scheduled.
    pub fn pump(&mut self) -> usize {
        self.session
            .as_ref()
            .map_or(0, |session| session.lock().fill())
    }

    pub fn status(&self) -> Option<PlaybackStatus> {
        self.session.as_ref().map(|session| session.lock().status())
    }

    /// Take the mix tap configured through `EngineConfig::scope_capacity`.
    /// Only available after `init`.
    pub fn take_scope(&mut self) -> Option<Consumer<f32>> {
        self.session
            .as_ref()
            .and_then(|session| session.lock().context_mut().take_scope())
    }

    fn wake_driver(&self) {
        if let Some(driver) = &self.driver {
            driver.wake();
        }
    }
}

impl Drop for SoundFx {
    fn drop(&mut self) {
        // Join the look-ahead thread before the output goes away.
        if let Some(mut driver) = self.driver.take() {
            driver.shutdown();
        }
    }
}
