// SPDX-License-Identifier: MPL-2.0
//! Time-driven vertical transitions and cancelable timers.
//!
//! Nothing here reads the clock. Callers pass the current `Instant`, which
//! keeps banner motion deterministic and testable.

use std::time::{Duration, Instant};

/// Natural frequency of the spring over a normalized transition.
const SPRING_FREQUENCY: f32 = 10.0;

/// Progress curve of a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve {
    /// Damped spring; a damping below 1.0 overshoots the target once.
    Spring { damping: f32 },
    /// Smooth acceleration and deceleration.
    EaseInOut,
}

impl Curve {
    /// Maps linear progress in `[0, 1]` to eased progress. Ends exactly at 1.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t >= 1.0 {
            return 1.0;
        }

        match self {
            Curve::EaseInOut => t * t * (3.0 - 2.0 * t),
            Curve::Spring { damping } if damping >= 1.0 => {
                let w = SPRING_FREQUENCY * t;
                1.0 - (-w).exp() * (1.0 + w)
            }
            Curve::Spring { damping } => {
                let damping = damping.max(0.0);
                let root = (1.0 - damping * damping).sqrt();
                let damped = SPRING_FREQUENCY * root * t;
                let envelope = (-damping * SPRING_FREQUENCY * t).exp();
                1.0 - envelope * (damped.cos() + damping / root * damped.sin())
            }
        }
    }
}

/// Movement of a banner's top edge between two positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: f32,
    pub to: f32,
    pub started_at: Instant,
    pub duration: Duration,
    pub curve: Curve,
}

impl Transition {
    #[must_use]
    pub fn new(from: f32, to: f32, started_at: Instant, duration: Duration, curve: Curve) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
            curve,
        }
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        self.from + (self.to - self.from) * self.curve.apply(self.progress(now))
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }

    #[must_use]
    pub fn finishes_at(&self) -> Instant {
        self.started_at + self.duration
    }
}

/// Cancelable one-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    deadline: Instant,
    cancelled: bool,
}

impl Timer {
    /// Timer firing `delay` after `start`.
    ///
    /// Returns `None` when the deadline is not representable; such a timer
    /// would never fire.
    #[must_use]
    pub fn after(start: Instant, delay: Duration) -> Option<Self> {
        start.checked_add(delay).map(|deadline| Self {
            deadline,
            cancelled: false,
        })
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// True once the deadline passed, unless cancelled.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        !self.cancelled && now >= self.deadline
    }
}
