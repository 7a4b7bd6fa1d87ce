use rtrb::{Consumer, Producer, RingBuffer};
use tracing::{debug, warn};

use crate::{
    config::EngineConfig,
    engine::{
        clock::{ContextState, SampleClock},
        mixer::Mixer,
    },
    error::{AudioError, Result},
    synth::{
        message::MixerCommand,
        voice::{Voice, VoiceHandle},
    },
};

/// Mixing endpoint: hands voices to the mixer over a lock-free queue.
pub struct Destination {
    tx: Producer<MixerCommand>,
    next_handle: u64,
}

impl Destination {
    fn send(&mut self, command: MixerCommand) -> Result<()> {
        if self.tx.is_abandoned() {
            return Err(AudioError::ClockUnavailable("mixer has been dropped".into()));
        }
        self.tx.push(command).map_err(|_| AudioError::QueueFull)
    }

    /// Give `voice` to the mixer. It sounds from its start to its stop time.
    pub fn connect(&mut self, voice: Voice) -> Result<VoiceHandle> {
        let handle = VoiceHandle(self.next_handle);
        self.send(MixerCommand::Start { handle, voice })?;
        self.next_handle += 1;
        Ok(handle)
    }

    /// Stop a voice now, before its own stop time.
    pub fn disconnect(&mut self, handle: VoiceHandle) -> Result<()> {
        self.send(MixerCommand::Stop(handle))
    }

    pub fn disconnect_all(&mut self) -> Result<()> {
        self.send(MixerCommand::StopAll)
    }
}

/// Control-side half of the audio engine.
///
/// Owns the clock reader, the destination and the scope tap. The matching
/// `Mixer` goes to whatever drives the output (a cpal stream, or a test that
/// renders by hand).
pub struct AudioContext {
    clock: SampleClock,
    destination: Destination,
    scope: Option<Consumer<f32>>,
}

impl AudioContext {
    /// Create a suspended context and the mixer that renders it.
    pub fn new(sample_rate: f32, config: &EngineConfig) -> (Self, Mixer) {
        let clock = SampleClock::new(sample_rate);
        let (tx, rx) = RingBuffer::<MixerCommand>::new(config.command_capacity);

        let (scope_tx, scope_rx) = if config.scope_capacity > 0 {
            let (scope_tx, scope_rx) = RingBuffer::<f32>::new(config.scope_capacity);
            (Some(scope_tx), Some(scope_rx))
        } else {
            (None, None)
        };

        let mixer = Mixer::new(clock.clone(), rx, config.master_volume, scope_tx);
        let context = Self {
            clock,
            destination: Destination { tx, next_handle: 0 },
            scope: scope_rx,
        };

        (context, mixer)
    }

    /// A context with no device behind it, running at
    /// `config.fallback_sample_rate`. The caller renders the mixer.
    pub fn offline(config: &EngineConfig) -> (Self, Mixer) {
        Self::new(config.fallback_sample_rate, config)
    }

    /// Current audio time in seconds.
    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    pub fn sample_rate(&self) -> f32 {
        self.clock.sample_rate()
    }

    pub fn destination(&mut self) -> &mut Destination {
        &mut self.destination
    }

    pub fn clock(&self) -> &SampleClock {
        &self.clock
    }

    pub fn state(&self) -> ContextState {
        if self.destination.tx.is_abandoned() {
            ContextState::Closed
        } else {
            self.clock.state()
        }
    }

    /// Let the mixer run. Fails once the context is closed.
    pub fn resume(&self) -> Result<()> {
        if self.state() == ContextState::Closed {
            warn!("cannot resume a closed audio context");
            return Err(AudioError::ClockUnavailable("audio context is closed".into()));
        }
        match self.clock.transition(ContextState::Running) {
            ContextState::Running => {
                debug!(now = self.now(), "audio context running");
                Ok(())
            }
            _ => Err(AudioError::ClockUnavailable("audio context is closed".into())),
        }
    }

    /// Freeze the clock. The mixer renders silence until resumed.
    pub fn suspend(&self) {
        if self.clock.transition(ContextState::Suspended) == ContextState::Suspended {
            debug!(now = self.now(), "audio context suspended");
        }
    }

    /// Take the consumer end of the scope tap, if one was configured.
    pub fn take_scope(&mut self) -> Option<Consumer<f32>> {
        self.scope.take()
    }
}
