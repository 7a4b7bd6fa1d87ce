use rtrb::{Consumer, Producer};

use crate::{
    engine::clock::{ContextState, SampleClock},
    error::{AudioError, Result},
    graph::node::RenderCtx,
    synth::{
        message::MixerCommand,
        voice::{Voice, VoiceHandle},
    },
    MAX_BLOCK_SIZE,
};

/// Audio-thread half of the engine.
///
/// Drains commands from the control side, renders every voice it owns over
/// its scheduled window, and advances the shared clock by the frames
/// rendered. Nothing here blocks or logs.
pub struct Mixer {
    clock: SampleClock,
    rx: Consumer<MixerCommand>,
    voices: Vec<(VoiceHandle, Voice)>,
    master_volume: f32,
    scope: Option<Producer<f32>>,
    voice_buffer: Vec<f32>,
    mono_buffer: Vec<f32>,
    stale_stops: u64,
}

impl Mixer {
    pub(crate) fn new(
        clock: SampleClock,
        rx: Consumer<MixerCommand>,
        master_volume: f32,
        scope: Option<Producer<f32>>,
    ) -> Self {
        Self {
            clock,
            rx,
            voices: Vec::with_capacity(128),
            master_volume,
            scope,
            voice_buffer: vec![0.0; MAX_BLOCK_SIZE],
            mono_buffer: vec![0.0; MAX_BLOCK_SIZE],
            stale_stops: 0,
        }
    }

    pub fn sample_rate(&self) -> f32 {
        self.clock.sample_rate()
    }

    pub fn active_voices(&self) -> usize {
        self.voices.len()
    }

    /// Stops that arrived after their voice had already ended.
    pub fn stale_stops(&self) -> u64 {
        self.stale_stops
    }

    /// Apply one command. Stopping an unknown voice reports
    /// `VoiceAlreadyStopped`.
    pub fn apply(&mut self, command: MixerCommand) -> Result<()> {
        match command {
            MixerCommand::Start { handle, voice } => {
                self.voices.push((handle, voice));
                Ok(())
            }
            MixerCommand::Stop(handle) => {
                match self.voices.iter().position(|(h, _)| *h == handle) {
                    Some(index) => {
                        self.voices.swap_remove(index);
                        Ok(())
                    }
                    None => Err(AudioError::VoiceAlreadyStopped(handle)),
                }
            }
            MixerCommand::StopAll => {
                self.voices.clear();
                Ok(())
            }
        }
    }

    fn drain_commands(&mut self) {
        while let Ok(command) = self.rx.pop() {
            if self.apply(command).is_err() {
                self.stale_stops += 1;
            }
        }
    }

    /// Render a mono block. Silence while the context is not running.
    pub fn render(&mut self, out: &mut [f32]) {
        self.drain_commands();

        if self.clock.state() != ContextState::Running {
            out.fill(0.0);
            return;
        }

        let sample_rate = self.clock.sample_rate();
        for chunk in out.chunks_mut(MAX_BLOCK_SIZE) {
            let ctx = RenderCtx::at(sample_rate, self.clock.now());
            chunk.fill(0.0);

            let scratch = &mut self.voice_buffer[..chunk.len()];
            for (_, voice) in self.voices.iter_mut() {
                voice.mix_into(chunk, scratch, &ctx);
            }

            for sample in chunk.iter_mut() {
                *sample = (*sample * self.master_volume).clamp(-1.0, 1.0);
            }

            if let Some(scope) = self.scope.as_mut() {
                for &sample in chunk.iter() {
                    // A full tap means nobody is reading; drop the sample.
                    if scope.push(sample).is_err() {
                        break;
                    }
                }
            }

            self.clock.advance(chunk.len());
            let now = self.clock.now();
            self.voices.retain(|(_, voice)| !voice.is_finished(now));
        }
    }

    /// Render into an interleaved buffer, copying the mono mix to every
    /// channel.
    pub fn render_interleaved(&mut self, data: &mut [f32], channels: usize) {
        let channels = channels.max(1);
        for frame_chunk in data.chunks_mut(MAX_BLOCK_SIZE * channels) {
            let frames = frame_chunk.len() / channels;
            let mut mono = std::mem::take(&mut self.mono_buffer);
            self.render(&mut mono[..frames]);

            for (frame, &sample) in frame_chunk.chunks_mut(channels).zip(mono.iter()) {
                frame.fill(sample);
            }
            self.mono_buffer = mono;
        }
    }
}

impl Drop for Mixer {
    fn drop(&mut self) {
        self.clock.close();
    }
}
