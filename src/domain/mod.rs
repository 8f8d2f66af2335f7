// SPDX-License-Identifier: MPL-2.0
//! Domain layer - banner value types with ZERO external dependencies.
//!
//! This module contains the pure geometry and value objects the banner is
//! built from. It depends on nothing but `std`, so it can be tested without
//! a windowing toolkit.
//!
//! # Modules
//!
//! - [`geometry`]: Screen bounds, orientation and the banner frame
//!   ([`Environment`](geometry::Environment), [`BannerGeometry`](geometry::BannerGeometry))
//! - [`newtypes`]: Validated values ([`DismissDelay`](newtypes::DismissDelay),
//!   [`BannerText`](newtypes::BannerText))

pub mod geometry;
pub mod newtypes;

pub use geometry::{BannerGeometry, Environment, Insets, Margins, Orientation, Point, Position, Size};
pub use newtypes::{BannerText, DismissDelay};
