// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of a [`Banner`].
//!
//! The banner is drawn as a rounded card pinned at its presented origin,
//! stacked over the host's content. Detached banners draw nothing.

use crate::banner::{Banner, ContentLayout, Icon};
use crate::banner::layout::CONTENT_PADDING;
use crate::domain::BannerText;
use crate::ui::design_tokens::{shadow, typography};
use iced::widget::image::Image;
use iced::widget::{container, pin, text, Container, Row, Stack, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Padding, Theme};
use std::time::Instant;

/// Share of the icon region a symbol glyph occupies.
const GLYPH_SCALE: f32 = 0.6;

/// Line height of the banner text, relative to its size.
const TEXT_LINE_HEIGHT: f32 = 1.3;

/// Height of the text label: at most [`BannerText::MAX_LINES`] lines of
/// body text, never taller than the text region.
///
/// The label clips, so text that wraps past the last line is cut off too.
#[must_use]
pub fn label_height(region_height: f32) -> f32 {
    #[allow(clippy::cast_precision_loss)]
    let lines = BannerText::MAX_LINES as f32;
    (typography::BODY * TEXT_LINE_HEIGHT * lines).min(region_height)
}

/// Renders the banner card itself, sized to the banner frame.
pub fn card<'a, Message: 'a>(banner: &'a Banner) -> Element<'a, Message> {
    let content = banner.content();
    let size = banner.size();
    let layout = ContentLayout::compute(size);
    let tint = content.tint;

    let icon: Element<'a, Message> = match &content.icon {
        Icon::Image(handle) => Image::new(handle.clone())
            .width(Length::Fixed(layout.icon.size.width))
            .height(Length::Fixed(layout.icon.size.height))
            .into(),
        symbol @ Icon::Symbol(_) => Container::new(
            Text::new(symbol.glyph().unwrap_or_default())
                .size(layout.icon.size.height * GLYPH_SCALE)
                .style(move |_theme: &Theme| text::Style { color: Some(tint) }),
        )
        .width(Length::Fixed(layout.icon.size.width))
        .height(Length::Fixed(layout.icon.size.height))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into(),
    };

    let label = Container::new(
        Container::new(
            Text::new(content.text.display())
                .size(typography::BODY)
                .line_height(text::LineHeight::Relative(TEXT_LINE_HEIGHT))
                .style(move |_theme: &Theme| text::Style { color: Some(tint) }),
        )
        .width(Length::Fixed(layout.text.size.width))
        .height(Length::Fixed(label_height(layout.text.size.height)))
        .clip(true),
    )
    .width(Length::Fixed(layout.text.size.width))
    .height(Length::Fixed(layout.text.size.height))
    .align_y(alignment::Vertical::Center);

    let row = Row::new()
        .spacing(layout.text.origin.x - layout.icon.right())
        .align_y(alignment::Vertical::Center)
        .push(icon)
        .push(label);

    let background = content.background;
    let radius = banner.corner_radius();

    Container::new(row)
        .width(Length::Fixed(size.width))
        .height(Length::Fixed(size.height))
        .padding(Padding {
            top: layout.icon.origin.y,
            right: CONTENT_PADDING,
            bottom: layout.icon.origin.y,
            left: CONTENT_PADDING,
        })
        .style(move |_theme: &Theme| card_style(background, tint, radius))
        .into()
}

/// Stacks the banner over `base` when it is attached to the host.
pub fn overlay<'a, Message: 'a>(
    base: Element<'a, Message>,
    banner: &'a Banner,
    now: Instant,
) -> Element<'a, Message> {
    if !banner.is_attached() {
        return base;
    }

    let origin = banner.presented_origin(now);
    let pinned = pin(card(banner)).x(origin.x).y(origin.y);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(pinned)
        .into()
}

/// Style of the banner card.
fn card_style(background: Color, tint: Color, radius: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius.into(),
            ..Border::default()
        },
        shadow: shadow::MD,
        text_color: Some(tint),
        ..Default::default()
    }
}
