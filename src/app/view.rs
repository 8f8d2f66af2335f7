// SPDX-License-Identifier: MPL-2.0
//! Demo screen: operation buttons, a status line and the banner overlay.

use super::{App, Message};
use crate::banner::BannerEvent;
use crate::domain::Orientation;
use crate::ui::banner_view;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

pub fn view(app: &App) -> Element<'_, Message> {
    let title = Text::new("Banner playground").size(typography::TITLE_MD);

    let present_row = Row::new()
        .spacing(spacing::XS)
        .push(action("Present", Message::Present))
        .push(action("Present timed", Message::PresentTimed));

    let dismiss_row = Row::new()
        .spacing(spacing::XS)
        .push(action("Dismiss", Message::Dismiss))
        .push(action("Dismiss + handler", Message::DismissWithHandler));

    let content_row = Row::new()
        .spacing(spacing::XS)
        .push(action("Next content", Message::NextContent))
        .push(action("Toggle edge", Message::TogglePosition));

    let status = Text::new(status_line(app))
        .size(typography::CAPTION)
        .style(|_theme: &Theme| iced::widget::text::Style {
            color: Some(palette::GRAY_700),
        });

    let column = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(present_row)
        .push(dismiss_row)
        .push(content_row)
        .push(status);

    let base: Element<'_, Message> = Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG)
        .into();

    match app.banner() {
        Some(banner) => banner_view::overlay(base, banner, app.now()),
        None => base,
    }
}

fn action(label: &str, message: Message) -> Element<'_, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XXS, spacing::SM])
        .into()
}

fn status_line(app: &App) -> String {
    let orientation = match app.environment().orientation {
        Some(Orientation::Landscape) => "landscape",
        Some(Orientation::Portrait) | None => "portrait",
    };
    let event = match app.last_event() {
        Some(BannerEvent::Presented) => "presented",
        Some(BannerEvent::AutoDismissStarted) => "auto-dismissing",
        Some(BannerEvent::Dismissed) => "dismissed",
        None => "idle",
    };
    let auto = app
        .dismiss_after_secs()
        .map_or_else(|| String::from("off"), |secs| format!("{secs:.1}s"));

    format!(
        "{:?} · {orientation} · {event} · handlers run: {} · auto-dismiss: {auto}",
        app.position(),
        app.handler_runs(),
    )
}
