// SPDX-License-Identifier: MPL-2.0
//! `iced_banner` is a slide-in notification banner for the Iced GUI framework.
//!
//! A [`banner::Banner`] slides in from the top or bottom edge of its host,
//! shakes when presented twice, and slides back out on dismissal, either
//! manually or after an optional delay. The [`app`] module hosts it in a
//! small demo window.

pub mod app;
pub mod banner;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
