// SPDX-License-Identifier: MPL-2.0
//! Slide-in banner component.
//!
//! A banner slides in from the top or bottom edge of the screen, shows an
//! icon next to up to two lines of text, and slides back out after a delay
//! or on demand.
//!
//! # Components
//!
//! - [`state`] - `Banner` presentation state machine
//! - [`animation`] - Spring slide and shake animations
//! - [`content`] - Icon/text content and the `ContentProvider` strategy
//! - [`layout`] - Icon and text regions inside the banner
//! - [`timer`] - Cancellable auto-dismiss timer
//! - [`registry`] - Handle-based ownership of banners
//! - [`host`] - View hierarchy seam (`Host`)
//! - [`haptics`] - Haptic feedback seam (`Haptics`)
//!
//! # Usage
//!
//! ```
//! use iced_banner::banner::{Banner, DefaultContent, Overlay};
//! use iced_banner::domain::{DismissDelay, Environment, Insets, Position, Size};
//! use std::time::{Duration, Instant};
//!
//! let env = Environment::from_bounds(Size::new(390.0, 844.0), Insets::new(47.0, 34.0));
//! let mut banner = Banner::new(Position::Top, env, &DefaultContent);
//! let mut overlay = Overlay::new();
//!
//! let start = Instant::now();
//! banner.present(&mut overlay, Some(DismissDelay::from_secs(3.0)), start);
//! banner.tick(&mut overlay, start + Duration::from_secs(1));
//! assert!(banner.is_shown());
//! ```
//!
//! Time is always passed in explicitly; the host calls [`Banner::tick`]
//! while [`Banner::needs_tick`] is true.

pub mod animation;
pub mod content;
pub mod haptics;
pub mod host;
pub mod layout;
pub mod registry;
pub mod state;
pub mod timer;

pub use content::{Content, ContentProvider, DefaultContent, Icon};
pub use haptics::{Feedback, Haptics, LogHaptics, NoHaptics};
pub use host::{Host, Overlay};
pub use layout::ContentLayout;
pub use registry::{BannerHandle, Registry};
pub use state::{Banner, BannerEvent, BANNER_TAG};
pub use timer::TimerToken;
