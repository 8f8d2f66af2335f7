// SPDX-License-Identifier: MPL-2.0
//! Banner newtypes.
//!
//! Type-safe wrappers for the values a caller hands to the banner,
//! ensuring they are always valid once constructed.

use std::time::Duration;

// =============================================================================
// DismissDelay
// =============================================================================

/// Delay before an auto-dismiss, guaranteed within `0..=MAX_SECS`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct DismissDelay(f32);

impl DismissDelay {
    /// Longest representable delay (one day).
    pub const MAX_SECS: f32 = 86_400.0;

    /// Creates a delay from seconds.
    ///
    /// Negative or NaN input becomes zero; anything above
    /// [`DismissDelay::MAX_SECS`], including infinity, saturates to it.
    #[must_use]
    pub fn from_secs(secs: f32) -> Self {
        if secs.is_nan() || secs <= 0.0 {
            Self(0.0)
        } else {
            Self(secs.min(Self::MAX_SECS))
        }
    }

    /// Returns the delay in seconds.
    #[must_use]
    pub fn as_secs(self) -> f32 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs_f32(self.0)
    }
}

impl From<Duration> for DismissDelay {
    fn from(duration: Duration) -> Self {
        Self::from_secs(duration.as_secs_f32())
    }
}

// =============================================================================
// BannerText
// =============================================================================

/// Text shown in the banner.
///
/// The full string is kept; only the first [`BannerText::MAX_LINES`] lines
/// are ever displayed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BannerText(String);

impl BannerText {
    /// Maximum number of displayed lines.
    pub const MAX_LINES: usize = 2;

    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the raw text as given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the text capped to the displayable lines.
    #[must_use]
    pub fn display(&self) -> String {
        self.0
            .lines()
            .take(Self::MAX_LINES)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Returns whether some lines are cut off when displayed.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.0.lines().count() > Self::MAX_LINES
    }
}

impl From<&str> for BannerText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for BannerText {
    fn from(text: String) -> Self {
        Self(text)
    }
}
