// SPDX-License-Identifier: MPL-2.0
//! Time-based property animation used to return the thumb to the start.
//!
//! The animation does not run on its own: the host samples it with the
//! current instant (usually from a frame or timer subscription) and applies
//! the returned value. Cancelling is dropping the handle, so a cancelled
//! animation can never report completion.

use std::time::{Duration, Instant};

use crate::ui::design_tokens::motion;

/// Types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Easing curves. The swipe button only needs linear motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
}

impl Easing {
    /// Maps a linear fraction in [0, 1] onto the curve.
    #[must_use]
    pub fn transform(self, fraction: f32) -> f32 {
        match self {
            Easing::Linear => fraction.clamp(0.0, 1.0),
        }
    }
}

/// Duration and easing of an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: Easing,
}

impl AnimationSpec {
    #[must_use]
    pub fn linear(duration_millis: u64) -> Self {
        Self {
            duration: Duration::from_millis(duration_millis),
            easing: Easing::Linear,
        }
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::linear(motion::RETURN_DURATION_MS)
    }
}

/// Result of sampling an animation at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationStep {
    Running(f32),
    Finished(f32),
}

impl AnimationStep {
    #[must_use]
    pub fn value(self) -> f32 {
        match self {
            AnimationStep::Running(value) | AnimationStep::Finished(value) => value,
        }
    }
}

/// A single in-flight animation of one `f32` property.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnAnimation {
    from: f32,
    to: f32,
    started_at: Instant,
    spec: AnimationSpec,
}

impl ReturnAnimation {
    #[must_use]
    pub fn start(from: f32, to: f32, now: Instant, spec: AnimationSpec) -> Self {
        Self {
            from,
            to,
            started_at: now,
            spec,
        }
    }

    /// Fraction of the duration elapsed at `now`, clamped to [0, 1].
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.spec.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.spec.duration.as_secs_f32()).min(1.0)
    }

    #[must_use]
    pub fn sample(&self, now: Instant) -> AnimationStep {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return AnimationStep::Finished(self.to);
        }
        let eased = self.spec.easing.transform(progress);
        AnimationStep::Running(self.from.lerp(&self.to, eased))
    }

}
