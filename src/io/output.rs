//! Default-device output through cpal.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use tracing::{info, warn};

use crate::{
    config::EngineConfig,
    engine::context::AudioContext,
    error::{AudioError, Result},
};

/// A running output stream that owns the mixer.
///
/// Dropping it stops the stream and closes the paired context.
pub struct CpalOutput {
    _stream: cpal::Stream,
    sample_rate: f32,
    channels: usize,
}

impl CpalOutput {
    /// Open the default output device and return it with a suspended
    /// context whose mixer feeds the stream.
    pub fn open(config: &EngineConfig) -> Result<(Self, AudioContext)> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| unavailable("no default output device available"))?;
        let supported = device
            .default_output_config()
            .map_err(|err| unavailable(format!("failed to fetch default output config: {err}")))?;

        let sample_rate = supported.sample_rate().0 as f32;
        let channels = supported.channels() as usize;
        let stream_config: cpal::StreamConfig = supported.into();

        let (context, mut mixer) = AudioContext::new(sample_rate, config);

        let stream = device
            .build_output_stream(
                &stream_config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    mixer.render_interleaved(data, channels);
                },
                |err| warn!(%err, "output stream error"),
                None,
            )
            .map_err(|err| unavailable(format!("failed to build output stream: {err}")))?;

        stream
            .play()
            .map_err(|err| unavailable(format!("failed to start output stream: {err}")))?;

        info!(
            device = %device.name().unwrap_or_default(),
            sample_rate,
            channels,
            "audio output opened"
        );

        Ok((
            Self {
                _stream: stream,
                sample_rate,
                channels,
            },
            context,
        ))
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn channels(&self) -> usize {
        self.channels
    }
}

fn unavailable(reason: impl Into<String>) -> AudioError {
    AudioError::ClockUnavailable(reason.into())
}
