// SPDX-License-Identifier: MPL-2.0
//! Slide and shake animations.
//!
//! Animations are plain values sampled with an [`Instant`]; they hold no
//! timers of their own. The owner decides when a finished animation's
//! completion runs.

use crate::domain::Point;
use std::time::{Duration, Instant};

/// Duration of a slide in or out.
pub const SLIDE_DURATION: Duration = Duration::from_secs(1);

/// Damping ratio of the slide spring. Values above 1 never overshoot.
pub const SPRING_DAMPING: f64 = 40.0;

/// Initial spring velocity, in slide distances per second.
pub const SPRING_INITIAL_VELOCITY: f64 = 20.0;

/// Residual displacement the spring is tuned to reach at the end of the slide.
const SPRING_SETTLE_TOLERANCE: f64 = 1e-3;

/// Length of one leg of the shake (out or back).
pub const SHAKE_LEG: Duration = Duration::from_millis(70);

/// Number of out-and-back shake cycles.
pub const SHAKE_REPEATS: u32 = 3;

/// Horizontal shake amplitude in points.
pub const SHAKE_DISTANCE: f32 = 10.0;

/// Cubic ease-in-out over `t` in `0..=1`.
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Progress of the slide spring at normalized time `t`.
///
/// Time is eased in-out before the spring is evaluated. Returns exactly 0
/// at the start and exactly 1 once `t >= 1`.
#[must_use]
pub fn spring_progress(t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let time = f64::from(ease_in_out(t));
    let zeta = SPRING_DAMPING;
    let root = (zeta * zeta - 1.0).sqrt();
    let slow = zeta - root;
    let fast = zeta + root;

    // Natural frequency chosen so the slow mode has decayed to the
    // tolerance at the end of the slide.
    let omega = (1.0 / SPRING_SETTLE_TOLERANCE).ln() / slow;
    let r_slow = -omega * slow;
    let r_fast = -omega * fast;

    let a = (-SPRING_INITIAL_VELOCITY - r_fast) / (r_slow - r_fast);
    let b = 1.0 - a;
    let displacement = a * (r_slow * time).exp() + b * (r_fast * time).exp();

    #[allow(clippy::cast_possible_truncation)]
    let progress = (1.0 - displacement) as f32;
    progress.clamp(0.0, 1.0)
}

fn normalized(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).min(1.0)
}

/// A center-point slide between two positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slide {
    pub from: Point,
    pub to: Point,
    pub started: Instant,
}

impl Slide {
    #[must_use]
    pub fn new(from: Point, to: Point, started: Instant) -> Self {
        Self { from, to, started }
    }

    /// Spring progress in `0..=1` at `now`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        spring_progress(normalized(elapsed, SLIDE_DURATION))
    }

    /// Interpolated center at `now`.
    #[must_use]
    pub fn center_at(&self, now: Instant) -> Point {
        let p = self.progress(now);
        Point::new(
            self.from.x + (self.to.x - self.from.x) * p,
            self.from.y + (self.to.y - self.from.y) * p,
        )
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= SLIDE_DURATION
    }
}

/// Horizontal "already visible" shake.
///
/// Each leg moves linearly between the resting x and `+SHAKE_DISTANCE`,
/// auto-reversing, for [`SHAKE_REPEATS`] cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shake {
    pub started: Instant,
}

impl Shake {
    /// Total time of the shake.
    pub const TOTAL: Duration = Duration::from_millis(70 * 2 * SHAKE_REPEATS as u64);

    #[must_use]
    pub fn new(started: Instant) -> Self {
        Self { started }
    }

    /// Horizontal offset from the resting position at `now`.
    #[must_use]
    pub fn offset_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= Self::TOTAL {
            return 0.0;
        }
        let leg = SHAKE_LEG.as_secs_f32();
        let phase = (elapsed.as_secs_f32() % (leg * 2.0)) / leg;
        if phase <= 1.0 {
            SHAKE_DISTANCE * phase
        } else {
            SHAKE_DISTANCE * (2.0 - phase)
        }
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= Self::TOTAL
    }
}
