// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Banner**: Auto-dismiss delay bounds
//! - **Window**: Simulated device screen of the demo application

// ==========================================================================
// Banner Defaults
// ==========================================================================

/// Default auto-dismiss delay used by the demo's "present" button (seconds).
pub const DEFAULT_DISMISS_AFTER_SECS: f32 = 3.0;

/// Minimum configurable auto-dismiss delay (seconds).
pub const MIN_DISMISS_AFTER_SECS: f32 = 0.5;

/// Maximum configurable auto-dismiss delay (seconds).
pub const MAX_DISMISS_AFTER_SECS: f32 = 60.0;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width, a portrait phone screen in points.
pub const DEFAULT_WINDOW_WIDTH: f32 = 390.0;

/// Default window height, a portrait phone screen in points.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 844.0;

/// Default simulated top safe-area inset (status bar).
pub const DEFAULT_SAFE_AREA_TOP: f32 = 47.0;

/// Default simulated bottom safe-area inset (home indicator).
pub const DEFAULT_SAFE_AREA_BOTTOM: f32 = 34.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_DISMISS_AFTER_SECS > 0.0);
    assert!(MAX_DISMISS_AFTER_SECS > MIN_DISMISS_AFTER_SECS);
    assert!(DEFAULT_DISMISS_AFTER_SECS >= MIN_DISMISS_AFTER_SECS);
    assert!(DEFAULT_DISMISS_AFTER_SECS <= MAX_DISMISS_AFTER_SECS);

    assert!(DEFAULT_WINDOW_WIDTH > 0.0);
    assert!(DEFAULT_WINDOW_HEIGHT > DEFAULT_SAFE_AREA_TOP + DEFAULT_SAFE_AREA_BOTTOM);
};
