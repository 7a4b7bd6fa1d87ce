/// Note length as a fraction of a whole note.
///
/// Beats in every music mode are sixteenths, so the scheduler's step is
/// `Duration::SIXTEENTH.to_seconds(tempo)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration {
    pub numerator: u32,
    /// 4 = quarter, 16 = sixteenth
    pub denominator: u32,
}

impl Duration {
    pub const WHOLE: Duration = Duration::new(1, 1);
    pub const QUARTER: Duration = Duration::new(1, 4);
    pub const SIXTEENTH: Duration = Duration::new(1, 16);

    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Duration {
            numerator,
            denominator,
        }
    }

    /// Length in seconds at `bpm` quarter notes per minute.
    /// Formula: seconds = (numerator * 4 * 60) / (denominator * bpm)
    pub fn to_seconds(&self, bpm: f64) -> f64 {
        (self.numerator as f64 * 240.0) / (self.denominator as f64 * bpm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn quarter_is_one_beat() {
        assert_abs_diff_eq!(Duration::QUARTER.to_seconds(60.0), 1.0);
        assert_abs_diff_eq!(Duration::WHOLE.to_seconds(60.0), 4.0);
    }

    #[test]
    fn sixteenth_step_per_mode_tempo() {
        // (60 / tempo) / 4
        assert_abs_diff_eq!(Duration::SIXTEENTH.to_seconds(60.0), 0.25);
        assert_abs_diff_eq!(Duration::SIXTEENTH.to_seconds(110.0), 15.0 / 110.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Duration::SIXTEENTH.to_seconds(160.0), 0.09375, epsilon = 1e-12);
    }
}
