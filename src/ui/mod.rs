// SPDX-License-Identifier: MPL-2.0
//! Iced widgets and styling.

pub mod banner_view;
pub mod design_tokens;
