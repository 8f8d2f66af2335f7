// SPDX-License-Identifier: MPL-2.0
//! Placement of the icon and text inside the banner.
//!
//! Regions are relative to the banner's top-left corner.

use crate::domain::{Point, Size};

/// Inset between the banner edges, the icon and the text.
pub const CONTENT_PADDING: f32 = 8.0;

/// An axis-aligned rectangle relative to the banner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Region {
    pub origin: Point,
    pub size: Size,
}

impl Region {
    #[must_use]
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    #[must_use]
    pub fn center_y(&self) -> f32 {
        self.origin.y + self.size.height / 2.0
    }
}

/// Icon and text regions for one banner size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentLayout {
    pub icon: Region,
    pub text: Region,
}

impl ContentLayout {
    /// Lays out a square icon pinned to the leading edge, then the text
    /// filling the remaining width. Both are vertically centered.
    #[must_use]
    pub fn compute(banner: Size) -> Self {
        let side = (banner.height - CONTENT_PADDING).max(0.0);
        let inset_y = (banner.height - side) / 2.0;

        let icon = Region {
            origin: Point::new(CONTENT_PADDING, inset_y),
            size: Size::new(side, side),
        };

        let text_x = icon.right() + CONTENT_PADDING;
        let text_width = (banner.width - CONTENT_PADDING - text_x).max(0.0);
        let text = Region {
            origin: Point::new(text_x, inset_y),
            size: Size::new(text_width, side),
        };

        Self { icon, text }
    }
}
