use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Engine tuning shared by the scheduler, the mixer and the runtime.
///
/// Tempi are not here on purpose: each `MusicMode` carries its own fixed
/// tempo.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// How far ahead of the clock beats are committed (seconds).
    pub lookahead: f64,
    /// Slack between `start` and the first beat (seconds).
    pub start_delay: f64,
    /// Wall-clock period of the look-ahead loop.
    pub poll_interval: Duration,
    /// Gain applied to the final mix before clamping.
    pub master_volume: f32,
    /// Capacity of the control → audio command queue.
    pub command_capacity: usize,
    /// Capacity of the scope tap in samples. Zero disables the tap.
    pub scope_capacity: usize,
    /// Seed for the composer and noise buffers. `None` picks one at random.
    pub seed: Option<u64>,
    /// Run the look-ahead loop on a background thread. When false the host
    /// must call `SoundFx::pump` itself.
    pub spawn_driver: bool,
    /// Sample rate of `AudioContext::offline`.
    pub fallback_sample_rate: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            lookahead: 0.1,
            start_delay: 0.1,
            poll_interval: Duration::from_millis(25),
            master_volume: 1.0,
            command_capacity: 1024,
            scope_capacity: 0,
            seed: None,
            spawn_driver: true,
            fallback_sample_rate: 48_000.0,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookahead(mut self, seconds: f64) -> Self {
        self.lookahead = seconds.max(0.0);
        self
    }

    pub fn start_delay(mut self, seconds: f64) -> Self {
        self.start_delay = seconds.max(0.0);
        self
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn master_volume(mut self, volume: f32) -> Self {
        self.master_volume = volume.clamp(0.0, 1.0);
        self
    }

    pub fn command_capacity(mut self, capacity: usize) -> Self {
        self.command_capacity = capacity.max(1);
        self
    }

    pub fn scope_capacity(mut self, capacity: usize) -> Self {
        self.scope_capacity = capacity;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn spawn_driver(mut self, spawn: bool) -> Self {
        self.spawn_driver = spawn;
        self
    }

    pub fn fallback_sample_rate(mut self, sample_rate: f32) -> Self {
        self.fallback_sample_rate = sample_rate;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_scheduling_constants() {
        let config = EngineConfig::default();
        assert_eq!(config.lookahead, 0.1);
        assert_eq!(config.start_delay, 0.1);
        assert_eq!(config.poll_interval, Duration::from_millis(25));
        assert!(config.spawn_driver);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn builder_clamps_out_of_range_values() {
        let config = EngineConfig::new()
            .master_volume(3.0)
            .lookahead(-1.0)
            .command_capacity(0);

        assert_eq!(config.master_volume, 1.0);
        assert_eq!(config.lookahead, 0.0);
        assert_eq!(config.command_capacity, 1);
    }
}
