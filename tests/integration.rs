// SPDX-License-Identifier: MPL-2.0
use iced_banner::banner::{Banner, BannerEvent, Content, Icon, NoHaptics, Overlay, Registry, BANNER_TAG};
use iced_banner::config::{self, BannerPosition, Config};
use iced_banner::domain::{BannerText, DismissDelay, Environment, Insets, Position, Size};
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn phone() -> Environment {
    Environment::from_bounds(Size::new(390.0, 844.0), Insets::new(47.0, 34.0))
}

fn quiet_banner(position: Position) -> Banner {
    let provider = |content: &mut Content| {
        content.icon = Icon::symbol("bell");
        content.text = BannerText::new("Reminder\nStand-up in five minutes");
    };
    Banner::new(position, phone(), &provider).with_haptics(Box::new(NoHaptics))
}

#[test]
fn config_round_trip_drives_banner_placement() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut saved = Config::default();
    saved.banner.position = Some(BannerPosition::Bottom);
    saved.banner.dismiss_after_secs = Some(2.0);
    config::save_to_path(&saved, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded, saved);

    let position: Position = loaded.banner.position.unwrap_or_default().into();
    let banner = Banner::new(position, loaded.window.environment(), &|_: &mut Content| {});
    let screen_height = loaded.window.height;
    assert!(banner.shown_center().y > screen_height / 2.0);
    assert!(banner.hidden_center().y > screen_height);
}

#[test]
fn full_lifecycle_with_auto_dismiss() {
    let mut host = Overlay::new();
    let mut banner = quiet_banner(Position::Top);
    let t0 = Instant::now();

    banner.present(&mut host, Some(DismissDelay::from_secs(2.0)), t0);
    assert!(host.is_attached(BANNER_TAG));
    assert!(banner.tick(&mut host, t0 + Duration::from_millis(500)).is_empty());

    let events = banner.tick(&mut host, t0 + Duration::from_secs(1));
    assert_eq!(events, vec![BannerEvent::Presented]);
    assert!(banner.is_shown());

    let events = banner.tick(&mut host, t0 + Duration::from_secs(3));
    assert_eq!(events, vec![BannerEvent::AutoDismissStarted]);

    let events = banner.tick(&mut host, t0 + Duration::from_secs(4));
    assert_eq!(events, vec![BannerEvent::Dismissed]);
    assert!(banner.is_hidden());
    assert!(!host.is_attached(BANNER_TAG));
    assert!(!banner.needs_tick());
}

#[test]
fn second_present_shakes_without_reattaching() {
    let mut host = Overlay::new();
    let mut banner = quiet_banner(Position::Bottom);
    let t0 = Instant::now();

    banner.present(&mut host, None, t0);
    banner.tick(&mut host, t0 + Duration::from_secs(1));
    let resting = banner.presented_center(t0 + Duration::from_secs(1));

    banner.present(&mut host, None, t0 + Duration::from_secs(2));
    assert_eq!(host.attached_count(), 1);

    let mid_shake = banner.presented_center(t0 + Duration::from_millis(2070));
    assert!(mid_shake.x > resting.x);
    assert_eq!(mid_shake.y, resting.y);

    banner.tick(&mut host, t0 + Duration::from_millis(2420));
    assert_eq!(banner.presented_center(t0 + Duration::from_millis(2420)), resting);
}

#[test]
fn dismiss_handler_runs_only_for_completed_slide_out() {
    let mut host = Overlay::new();
    let mut banner = quiet_banner(Position::Top);
    let runs = Rc::new(Cell::new(0));
    let t0 = Instant::now();

    banner.present(&mut host, None, t0);
    banner.tick(&mut host, t0 + Duration::from_secs(1));

    let counter = Rc::clone(&runs);
    banner.dismiss_with_handler(move || counter.set(counter.get() + 1), t0 + Duration::from_secs(2));
    // Presenting mid slide-out drops the pending handler.
    banner.present(&mut host, None, t0 + Duration::from_millis(2100));
    assert_eq!(banner.tick(&mut host, t0 + Duration::from_secs(4)), vec![BannerEvent::Presented]);
    assert_eq!(runs.get(), 0);

    let counter = Rc::clone(&runs);
    banner.dismiss_with_handler(move || counter.set(counter.get() + 1), t0 + Duration::from_secs(5));
    banner.tick(&mut host, t0 + Duration::from_secs(6));
    assert_eq!(runs.get(), 1);
    assert!(banner.is_hidden());

    // Already hidden: the handler never runs.
    let counter = Rc::clone(&runs);
    banner.dismiss_with_handler(move || counter.set(counter.get() + 1), t0 + Duration::from_secs(7));
    banner.tick(&mut host, t0 + Duration::from_secs(8));
    assert_eq!(runs.get(), 1);
}

#[test]
fn registry_returns_one_banner_per_tag() {
    let mut registry = Registry::new();
    let first = registry.create_or_find(BANNER_TAG, || quiet_banner(Position::Top));
    let again = registry.create_or_find(BANNER_TAG, || quiet_banner(Position::Bottom));

    assert_eq!(first, again);
    assert_eq!(registry.len(), 1);
    let banner = registry.get(first).expect("banner registered");
    assert_eq!(banner.position(), Position::Top);
    assert_eq!(banner.tag(), BANNER_TAG);
}

#[test]
fn content_updates_keep_omitted_fields() {
    let mut banner = quiet_banner(Position::Top);
    banner.set_image_and_text(None, Some(BannerText::from("Updated")));

    assert!(matches!(&banner.content().icon, Icon::Symbol(name) if name == "bell"));
    assert_eq!(banner.content().text.as_str(), "Updated");
}
