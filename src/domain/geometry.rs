// SPDX-License-Identifier: MPL-2.0
//! Banner geometry derived from the screen.
//!
//! The banner frame is a pure function of the screen bounds, the safe-area
//! insets and the interface orientation. Nothing here is cached: callers
//! recompute a [`BannerGeometry`] whenever the [`Environment`] changes.

/// A point in screen coordinates (points, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair in points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Safe-area insets reported by the host window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    #[must_use]
    pub const fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }
}

/// Interface orientation of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Guesses the orientation from the screen bounds.
    ///
    /// Used when the host has no orientation of its own (desktop windows).
    #[must_use]
    pub fn from_bounds(bounds: Size) -> Self {
        if bounds.width > bounds.height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// Screen edge the banner is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    #[default]
    Top,
    Bottom,
}

/// Everything the geometry calculator needs to know about the screen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Environment {
    pub bounds: Size,
    pub safe_area: Insets,
    /// `None` when the host cannot report one; portrait margins apply.
    pub orientation: Option<Orientation>,
}

impl Environment {
    #[must_use]
    pub fn new(bounds: Size, safe_area: Insets, orientation: Option<Orientation>) -> Self {
        Self {
            bounds,
            safe_area,
            orientation,
        }
    }

    /// Builds an environment whose orientation is derived from the bounds.
    #[must_use]
    pub fn from_bounds(bounds: Size, safe_area: Insets) -> Self {
        Self::new(bounds, safe_area, Some(Orientation::from_bounds(bounds)))
    }
}

/// Horizontal correction and vertical divisor for one orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    /// Total horizontal space left free around the banner.
    pub width_correction: f32,
    /// Screen height is divided by this to get the banner height.
    pub height_divisor: f32,
}

impl Margins {
    pub const LANDSCAPE: Margins = Margins {
        width_correction: 80.0,
        height_divisor: 7.0,
    };
    pub const PORTRAIT: Margins = Margins {
        width_correction: 40.0,
        height_divisor: 15.0,
    };

    /// Looks up the margins for an orientation; unknown orientations get
    /// the portrait values.
    #[must_use]
    pub fn for_orientation(orientation: Option<Orientation>) -> Self {
        match orientation {
            Some(Orientation::Landscape) => Self::LANDSCAPE,
            Some(Orientation::Portrait) | None => Self::PORTRAIT,
        }
    }
}

/// Frame, corner radius and the two resting centers of a banner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BannerGeometry {
    pub origin: Point,
    pub size: Size,
    pub corner_radius: f32,
    pub shown_center: Point,
    pub hidden_center: Point,
}

impl BannerGeometry {
    /// Computes the banner frame for the given edge and screen.
    #[must_use]
    pub fn compute(position: Position, env: &Environment) -> Self {
        let margins = Margins::for_orientation(env.orientation);
        let screen = env.bounds;

        let size = Size::new(
            (screen.width - margins.width_correction).max(0.0),
            screen.height / margins.height_divisor,
        );

        let origin_y = match position {
            Position::Top => env.safe_area.top,
            Position::Bottom => screen.height - env.safe_area.bottom - size.height,
        };
        let origin = Point::new(margins.width_correction / 2.0, origin_y);

        let shown_center = Point::new(
            origin.x + size.width / 2.0,
            origin.y + size.height / 2.0,
        );
        let hidden_y = match position {
            Position::Top => shown_center.y - size.height * 2.0,
            Position::Bottom => screen.height + size.height / 2.0,
        };

        Self {
            origin,
            size,
            corner_radius: size.height / 4.0,
            shown_center,
            hidden_center: Point::new(shown_center.x, hidden_y),
        }
    }

    /// Top-left corner of the banner when its center sits at `center`.
    #[must_use]
    pub fn origin_for_center(&self, center: Point) -> Point {
        Point::new(
            center.x - self.size.width / 2.0,
            center.y - self.size.height / 2.0,
        )
    }
}
