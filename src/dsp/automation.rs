use crate::MIN_TIME;

/*
Parameter Automation
====================

A voice's gain (and the kick's pitch) is not driven by a gate like an ADSR.
It is a short, pre-planned list of events on the absolute audio clock,
written once when the voice is created:

    set(0.3, t)  ──  exponential_ramp(0.001, t + 0.5)

  Level
   0.3 ┤╲
       │ ╲
       │  ╲__
       │     ╲______
 0.001 ┤            ╲─────────  (holds after the last event)
       └──────────────────────→ Time
       t                 t+0.5


Event Kinds
-----------

  set(v, t)               jump to v at t
  linear_ramp(v, t)       straight line from the previous event to (t, v)
  exponential_ramp(v, t)  geometric curve from the previous event to (t, v)

A ramp always starts from the previous event's (time, value). Before the first
event the timeline reports its initial value.


Exponential Ramps
-----------------

    v(x) = v0 · (v1 / v0) ^ ((x - t0) / (t1 - t0))

The curve is undefined when either endpoint is zero, so ramp targets are
clamped to EXP_FLOOR. A ramp that starts from zero (e.g. pad attack then decay)
starts from the floor instead.
*/

/// Smallest magnitude an exponential ramp may start from or reach.
pub const EXP_FLOOR: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ramp {
    Set,
    Linear,
    Exponential,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamEvent {
    pub ramp: Ramp,
    pub value: f32,
    pub time: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParamTimeline {
    initial: f32,
    events: Vec<ParamEvent>,
}

impl ParamTimeline {
    pub fn new(initial: f32) -> Self {
        Self {
            initial,
            events: Vec::with_capacity(4),
        }
    }

    /// Jump to `value` at `time`.
    pub fn set(mut self, value: f32, time: f64) -> Self {
        self.push(Ramp::Set, value, time);
        self
    }

    /// Straight line from the previous event to `value` at `time`.
    pub fn linear_ramp(mut self, value: f32, time: f64) -> Self {
        self.push(Ramp::Linear, value, time);
        self
    }

    /// Geometric curve from the previous event to `value` at `time`.
    ///
    /// A zero or negative target is replaced by `EXP_FLOOR`.
    pub fn exponential_ramp(mut self, value: f32, time: f64) -> Self {
        self.push(Ramp::Exponential, value.max(EXP_FLOOR), time);
        self
    }

    fn push(&mut self, ramp: Ramp, value: f32, time: f64) {
        // Events are kept in time order; a late-appended earlier event is moved
        // to its place instead of breaking the evaluation below.
        let index = self.events.partition_point(|e| e.time <= time);
        self.events.insert(index, ParamEvent { ramp, value, time });
    }

    pub fn events(&self) -> &[ParamEvent] {
        &self.events
    }

    /// Time of the last event, if any.
    pub fn end_time(&self) -> Option<f64> {
        self.events.last().map(|e| e.time)
    }

    /// Evaluate the parameter at absolute time `t`.
    pub fn value_at(&self, t: f64) -> f32 {
        let mut prev_value = self.initial;
        let mut prev_time = f64::NEG_INFINITY;

        for event in &self.events {
            if t < event.time {
                return match event.ramp {
                    Ramp::Set => prev_value,
                    // A ramp with no earlier anchor behaves like a held value.
                    _ if prev_time == f64::NEG_INFINITY => prev_value,
                    Ramp::Linear => {
                        let progress = progress(prev_time, event.time, t);
                        prev_value + (event.value - prev_value) * progress
                    }
                    Ramp::Exponential => {
                        let progress = progress(prev_time, event.time, t);
                        let start = prev_value.max(EXP_FLOOR);
                        start * (event.value / start).powf(progress)
                    }
                };
            }

            prev_value = event.value;
            prev_time = event.time;
        }

        prev_value
    }

    /// Fill `out` with values sampled from `start_time` at `sample_rate`.
    pub fn render(&self, out: &mut [f32], start_time: f64, sample_rate: f32) {
        let step = 1.0 / sample_rate as f64;
        for (i, sample) in out.iter_mut().enumerate() {
            *sample = self.value_at(start_time + i as f64 * step);
        }
    }
}

#[inline]
fn progress(from: f64, to: f64, t: f64) -> f32 {
    let span = (to - from).max(MIN_TIME as f64);
    ((t - from) / span).clamp(0.0, 1.0) as f32
}
