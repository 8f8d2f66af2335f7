// SPDX-License-Identifier: MPL-2.0
//! Cancellable auto-dismiss timer.
//!
//! A banner holds at most one [`DismissTimer`]. Arming a new one replaces
//! the old token, so a stale deadline can never fire. Tokens come from a
//! [`TokenSource`] owned by the banner.

use std::time::{Duration, Instant};

/// Identifies one arming of the dismiss timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// Issues increasing [`TimerToken`]s.
#[derive(Debug, Clone, Default)]
pub struct TokenSource {
    next: u64,
}

impl TokenSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a token never issued before by this source.
    pub fn issue(&mut self) -> TimerToken {
        let token = TimerToken(self.next);
        self.next = self.next.wrapping_add(1);
        token
    }
}

/// A pending auto-dismiss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissTimer {
    token: TimerToken,
    deadline: Instant,
}

impl DismissTimer {
    /// Arms a timer firing `delay` after `now`.
    #[must_use]
    pub fn arm(token: TimerToken, now: Instant, delay: Duration) -> Self {
        Self {
            token,
            deadline: now + delay,
        }
    }

    #[must_use]
    pub fn token(&self) -> TimerToken {
        self.token
    }

    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Time left before the deadline; zero once due.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }
}
