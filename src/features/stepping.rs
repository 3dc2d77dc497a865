//! Discrete stepping model for sliders
//!
//! A slider value lives in `[0, 1]` and is quantized onto one of
//! `StepCount` evenly spaced levels. [`SteppedProgress`] is the host-owned
//! value that a stepped slider renders; it remembers whether its last change
//! should be animated so the widget does not have to guess.

/// Smallest accepted number of steps (bottom and top)
pub const MIN_STEP_COUNT: f32 = 2.0;

/// Number of discrete positions a slider can occupy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepCount(f32);

impl Default for StepCount {
    fn default() -> Self {
        Self(MIN_STEP_COUNT)
    }
}

impl StepCount {
    /// Create a validated step count
    ///
    /// The count must be a finite whole number of at least two.
    pub fn new(count: f32) -> Result<Self, StepCountError> {
        if !count.is_finite() {
            return Err(StepCountError::NotFinite);
        }
        if count < MIN_STEP_COUNT {
            return Err(StepCountError::TooFew(count));
        }
        if count.fract() != 0.0 {
            return Err(StepCountError::Fractional(count));
        }
        Ok(Self(count))
    }

    /// Number of levels as an integer
    pub fn levels(self) -> u32 {
        self.0 as u32
    }

    /// Number of gaps between adjacent levels
    fn intervals(self) -> f32 {
        self.0 - 1.0
    }

    /// Snap a value onto the nearest level
    ///
    /// Input is clamped to `[0, 1]` first; NaN is treated as 0.
    pub fn quantize(self, value: f32) -> f32 {
        let value = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0)
        };
        let intervals = self.intervals();
        (intervals * value).round() / intervals
    }

    /// Index of the level nearest to `value` (0 is the bottom)
    pub fn index_of(self, value: f32) -> u32 {
        (self.quantize(value) * self.intervals()).round() as u32
    }

    /// Progress value of the level at `index`, clamped to the top level
    pub fn value_at(self, index: u32) -> f32 {
        let index = index.min(self.levels() - 1) as f32;
        index / self.intervals()
    }
}

/// Errors for invalid step counts
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepCountError {
    NotFinite,
    TooFew(f32),
    Fractional(f32),
}

impl std::fmt::Display for StepCountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepCountError::NotFinite => write!(f, "step count must be finite"),
            StepCountError::TooFew(n) => {
                write!(f, "step count must be at least {}, got {}", MIN_STEP_COUNT, n)
            }
            StepCountError::Fractional(n) => {
                write!(f, "step count must be a whole number, got {}", n)
            }
        }
    }
}

impl std::error::Error for StepCountError {}

/// How the slider dot should reach the current value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transition {
    /// Jump straight to the value
    #[default]
    Immediate,
    /// Ease towards the value
    Animated,
}

/// A quantized slider value owned by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteppedProgress {
    step_count: StepCount,
    value: f32,
    transition: Transition,
}

impl SteppedProgress {
    /// Create a progress value at the bottom level
    pub fn new(step_count: StepCount) -> Self {
        Self {
            step_count,
            value: 0.0,
            transition: Transition::Immediate,
        }
    }

    /// Create a progress value already snapped to `value`, without animation
    pub fn with_value(step_count: StepCount, value: f32) -> Self {
        Self {
            step_count,
            value: step_count.quantize(value),
            transition: Transition::Immediate,
        }
    }

    /// Current quantized value
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn step_count(&self) -> StepCount {
        self.step_count
    }

    /// How the last change should be presented
    pub fn transition(&self) -> Transition {
        self.transition
    }

    /// Index of the current level (0 is the bottom)
    pub fn level(&self) -> u32 {
        self.step_count.index_of(self.value)
    }

    /// Total number of levels
    pub fn levels(&self) -> u32 {
        self.step_count.levels()
    }

    /// Quantize and store `value`
    ///
    /// Returns `true` when the stored value changed. The transition is only
    /// updated on change, so re-assigning the same level keeps the dot still.
    pub fn set(&mut self, value: f32, animate: bool) -> bool {
        let snapped = self.step_count.quantize(value);
        if snapped == self.value {
            return false;
        }
        self.value = snapped;
        self.transition = if animate {
            Transition::Animated
        } else {
            Transition::Immediate
        };
        true
    }

    /// Move by a whole number of levels, saturating at both ends
    pub fn step_by(&mut self, steps: i32, animate: bool) -> bool {
        let target = self.level() as i64 + steps as i64;
        let target = target.clamp(0, self.levels() as i64 - 1) as u32;
        self.set(self.step_count.value_at(target), animate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(n: f32) -> StepCount {
        StepCount::new(n).unwrap()
    }

    mod step_count_validation {
        use super::*;

        #[test]
        fn accepts_two_and_more() {
            assert!(StepCount::new(2.0).is_ok());
            assert!(StepCount::new(11.0).is_ok());
        }

        #[test]
        fn rejects_fewer_than_two() {
            assert_eq!(StepCount::new(1.0), Err(StepCountError::TooFew(1.0)));
            assert_eq!(StepCount::new(0.0), Err(StepCountError::TooFew(0.0)));
            assert!(StepCount::new(-3.0).is_err());
        }

        #[test]
        fn rejects_non_finite_and_fractional() {
            assert_eq!(StepCount::new(f32::NAN), Err(StepCountError::NotFinite));
            assert_eq!(StepCount::new(f32::INFINITY), Err(StepCountError::NotFinite));
            assert_eq!(StepCount::new(2.5), Err(StepCountError::Fractional(2.5)));
        }

        #[test]
        fn default_is_two() {
            assert_eq!(StepCount::default().levels(), 2);
        }
    }

    mod quantization {
        use super::*;

        #[test]
        fn matches_rounding_formula() {
            for n in [2.0_f32, 3.0, 4.0, 5.0, 7.0, 10.0] {
                let count = steps(n);
                for i in 0..=100 {
                    let v = i as f32 / 100.0;
                    let expected = ((n - 1.0) * v).round() / (n - 1.0);
                    assert_eq!(count.quantize(v), expected, "n={} v={}", n, v);
                }
            }
        }

        #[test]
        fn is_idempotent() {
            for n in [2.0_f32, 3.0, 5.0, 9.0] {
                let count = steps(n);
                for i in 0..=50 {
                    let once = count.quantize(i as f32 / 50.0);
                    assert_eq!(count.quantize(once), once);
                }
            }
        }

        #[test]
        fn two_steps_split_at_half() {
            let count = steps(2.0);
            assert_eq!(count.quantize(0.0), 0.0);
            assert_eq!(count.quantize(0.49), 0.0);
            assert_eq!(count.quantize(0.5), 1.0);
            assert_eq!(count.quantize(0.75), 1.0);
            assert_eq!(count.quantize(1.0), 1.0);
        }

        #[test]
        fn five_steps_snap_to_quarters() {
            let count = steps(5.0);
            assert_eq!(count.quantize(0.3), 0.25);
            assert_eq!(count.quantize(0.42), 0.5);
            assert_eq!(count.quantize(0.1), 0.0);
            assert_eq!(count.quantize(0.9), 1.0);
        }

        #[test]
        fn clamps_out_of_range_input() {
            let count = steps(4.0);
            assert_eq!(count.quantize(-2.0), 0.0);
            assert_eq!(count.quantize(7.5), 1.0);
            assert_eq!(count.quantize(f32::NAN), 0.0);
        }

        #[test]
        fn level_indices() {
            let count = steps(5.0);
            assert_eq!(count.index_of(0.0), 0);
            assert_eq!(count.index_of(0.5), 2);
            assert_eq!(count.index_of(1.0), 4);
            assert_eq!(count.value_at(3), 0.75);
            assert_eq!(count.value_at(99), 1.0);
        }
    }

    mod stepped_progress {
        use super::*;

        #[test]
        fn set_reports_change_and_records_transition() {
            let mut progress = SteppedProgress::new(steps(5.0));
            assert!(progress.set(0.8, true));
            assert_eq!(progress.value(), 0.75);
            assert_eq!(progress.transition(), Transition::Animated);

            assert!(progress.set(0.0, false));
            assert_eq!(progress.transition(), Transition::Immediate);
        }

        #[test]
        fn same_level_is_not_a_change() {
            let mut progress = SteppedProgress::with_value(steps(3.0), 0.5);
            assert!(!progress.set(0.6, true));
            assert_eq!(progress.value(), 0.5);
            assert_eq!(progress.transition(), Transition::Immediate);
        }

        #[test]
        fn step_by_saturates() {
            let mut progress = SteppedProgress::new(steps(3.0));
            assert!(progress.step_by(1, true));
            assert_eq!(progress.value(), 0.5);
            assert!(progress.step_by(5, true));
            assert_eq!(progress.value(), 1.0);
            assert!(!progress.step_by(1, true));
            assert_eq!(progress.level(), 2);
            assert!(progress.step_by(-10, false));
            assert_eq!(progress.value(), 0.0);
        }

        #[test]
        fn restoring_snaps_without_animation() {
            let progress = SteppedProgress::with_value(steps(2.0), 0.25);
            assert_eq!(progress.value(), 0.0);
            assert_eq!(progress.levels(), 2);
            assert_eq!(progress.transition(), Transition::Immediate);
        }
    }
}
