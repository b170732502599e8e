// SPDX-License-Identifier: MPL-2.0
//! Decorative light sweep over the track.
//!
//! The shimmer runs continuously from construction and ignores gesture state.

use std::time::{Duration, Instant};

use crate::ui::design_tokens::motion;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shimmer {
    started_at: Instant,
    period: Duration,
}

impl Shimmer {
    #[must_use]
    pub fn new(started_at: Instant) -> Self {
        Self::with_period(started_at, Duration::from_millis(motion::SHIMMER_PERIOD_MS))
    }

    #[must_use]
    pub fn with_period(started_at: Instant, period: Duration) -> Self {
        Self { started_at, period }
    }

    /// Position of the sweep at `now`, in [0, 1).
    #[must_use]
    pub fn phase(&self, now: Instant) -> f32 {
        let period = self.period.as_millis();
        if period == 0 {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at).as_millis();
        #[allow(clippy::cast_precision_loss)]
        // remainder < period, a few thousand ms at most
        let phase = (elapsed % period) as f32 / period as f32;
        phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_starts_at_zero() {
        let start = Instant::now();
        assert_eq!(Shimmer::new(start).phase(start), 0.0);
    }

    #[test]
    fn phase_wraps_every_period() {
        let start = Instant::now();
        let shimmer = Shimmer::with_period(start, Duration::from_millis(1000));

        let quarter = shimmer.phase(start + Duration::from_millis(250));
        assert!((quarter - 0.25).abs() < f32::EPSILON);

        let wrapped = shimmer.phase(start + Duration::from_millis(1250));
        assert!((wrapped - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn phase_stays_below_one() {
        let start = Instant::now();
        let shimmer = Shimmer::new(start);
        for millis in (0..5000).step_by(37) {
            let phase = shimmer.phase(start + Duration::from_millis(millis));
            assert!((0.0..1.0).contains(&phase));
        }
    }

    #[test]
    fn zero_period_is_static() {
        let start = Instant::now();
        let shimmer = Shimmer::with_period(start, Duration::ZERO);
        assert_eq!(shimmer.phase(start + Duration::from_secs(3)), 0.0);
    }
}
