// SPDX-License-Identifier: MPL-2.0
//! Haptic feedback seam.
//!
//! Desktop hosts have no vibration motor, so the default implementation
//! only records the pulse in the log. Hosts with real hardware inject their
//! own [`Haptics`].

/// Kind of notification pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Played with the "already visible" shake.
    Error,
}

/// Plays haptic pulses.
pub trait Haptics {
    fn notify(&self, feedback: Feedback);
}

/// Writes each pulse to the log at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogHaptics;

impl Haptics for LogHaptics {
    fn notify(&self, feedback: Feedback) {
        log::debug!("haptic pulse: {feedback:?}");
    }
}

/// Drops every pulse. Used when haptics are disabled in the settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn notify(&self, _feedback: Feedback) {}
}
