use std::sync::{
    atomic::{AtomicU64, AtomicU8, Ordering},
    Arc,
};

/// Lifecycle of an audio context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextState {
    /// Created but not yet allowed to play, or paused. The clock is frozen.
    Suspended,
    /// The mixer renders and the clock advances.
    Running,
    /// The mixer side is gone. Nothing will play again.
    Closed,
}

impl ContextState {
    fn from_u8(value: u8) -> Self {
        match value {
            1 => ContextState::Running,
            2 => ContextState::Closed,
            _ => ContextState::Suspended,
        }
    }

    fn as_u8(self) -> u8 {
        match self {
            ContextState::Suspended => 0,
            ContextState::Running => 1,
            ContextState::Closed => 2,
        }
    }
}

struct ClockShared {
    frames: AtomicU64,
    state: AtomicU8,
    sample_rate: f32,
}

/// Monotonic audio clock shared by the mixer (writer) and the control side.
///
/// Time is `frames rendered / sample_rate`, so it only moves while the mixer
/// is actually producing audio.
#[derive(Clone)]
pub struct SampleClock {
    shared: Arc<ClockShared>,
}

impl SampleClock {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            shared: Arc::new(ClockShared {
                frames: AtomicU64::new(0),
                state: AtomicU8::new(ContextState::Suspended.as_u8()),
                sample_rate,
            }),
        }
    }

    pub fn sample_rate(&self) -> f32 {
        self.shared.sample_rate
    }

    pub fn frames(&self) -> u64 {
        self.shared.frames.load(Ordering::Acquire)
    }

    /// Current time in seconds.
    pub fn now(&self) -> f64 {
        self.frames() as f64 / self.shared.sample_rate as f64
    }

    pub(crate) fn advance(&self, frames: usize) {
        self.shared
            .frames
            .fetch_add(frames as u64, Ordering::AcqRel);
    }

    pub fn state(&self) -> ContextState {
        ContextState::from_u8(self.shared.state.load(Ordering::Acquire))
    }

    /// Move to `next` unless the clock is already closed. Returns the state
    /// the clock ends up in.
    pub(crate) fn transition(&self, next: ContextState) -> ContextState {
        let result = self
            .shared
            .state
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                (current != ContextState::Closed.as_u8()).then_some(next.as_u8())
            });
        match result {
            Ok(_) => next,
            Err(_) => ContextState::Closed,
        }
    }

    pub(crate) fn close(&self) {
        self.shared
            .state
            .store(ContextState::Closed.as_u8(), Ordering::Release);
    }
}
