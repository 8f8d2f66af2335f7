// SPDX-License-Identifier: MPL-2.0
//! What the banner shows: icon, text and colors.
//!
//! Content is configured once at construction through a [`ContentProvider`]
//! and can be partially updated later with [`Content::set_image_and_text`].

use crate::domain::BannerText;
use crate::ui::design_tokens::palette;
use iced::widget::image::Handle;
use iced::Color;
use std::borrow::Cow;

/// Icon displayed on the leading edge of the banner.
#[derive(Debug, Clone)]
pub enum Icon {
    /// Named symbol rendered as a glyph (`"circle"`, `"checkmark"`, ...).
    Symbol(Cow<'static, str>),
    /// Raster image.
    Image(Handle),
}

impl Icon {
    #[must_use]
    pub fn symbol(name: impl Into<Cow<'static, str>>) -> Self {
        Icon::Symbol(name.into())
    }

    /// Glyph used to draw a symbol icon. Unknown names fall back to a dot.
    #[must_use]
    pub fn glyph(&self) -> Option<&'static str> {
        match self {
            Icon::Symbol(name) => Some(match name.as_ref() {
                "circle" => "○",
                "checkmark" => "✓",
                "xmark" => "✕",
                "exclamationmark" => "!",
                "info" => "i",
                "bell" => "🔔",
                _ => "•",
            }),
            Icon::Image(_) => None,
        }
    }
}

/// Visible content of a banner.
#[derive(Debug, Clone)]
pub struct Content {
    pub icon: Icon,
    pub text: BannerText,
    /// Color of symbol icons and text.
    pub tint: Color,
    pub background: Color,
}

impl Default for Content {
    fn default() -> Self {
        Self {
            icon: Icon::symbol("circle"),
            text: BannerText::new("Placeholder line\nNext"),
            tint: palette::WHITE,
            background: palette::TEAL_500,
        }
    }
}

impl Content {
    /// Replaces the icon and/or the text; `None` leaves a field unchanged.
    pub fn set_image_and_text(&mut self, image: Option<Icon>, text: Option<BannerText>) {
        if let Some(icon) = image {
            self.icon = icon;
        }
        if let Some(text) = text {
            self.text = text;
        }
    }
}

/// Supplies the initial content of a banner.
///
/// Implemented for any `Fn(&mut Content)`, so a closure is enough for
/// one-off customisation.
pub trait ContentProvider {
    /// Adjusts `content`, which starts out as [`Content::default`].
    fn configure(&self, content: &mut Content);
}

/// Keeps the default placeholder content.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultContent;

impl ContentProvider for DefaultContent {
    fn configure(&self, _content: &mut Content) {}
}

impl<F> ContentProvider for F
where
    F: Fn(&mut Content),
{
    fn configure(&self, content: &mut Content) {
        self(content);
    }
}

/// Builds content by running a provider over the defaults.
pub fn configured(provider: &dyn ContentProvider) -> Content {
    let mut content = Content::default();
    provider.configure(&mut content);
    content
}
