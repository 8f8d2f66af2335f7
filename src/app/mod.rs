// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting a single banner.
//!
//! The window stands in for a device screen: its size drives the banner
//! geometry and its orientation is derived from the aspect ratio. Buttons
//! exercise every banner operation.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::banner::{
    Banner, BannerEvent, BannerHandle, Content, Haptics, Icon, LogHaptics, NoHaptics, Overlay,
    Registry, BANNER_TAG,
};
use crate::config::{self, BannerPosition, Config};
use crate::domain::{BannerText, DismissDelay, Environment, Position, Size};
use iced::{window, Element, Subscription, Task, Theme};
use std::cell::Cell;
use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Instant;

/// Sample updates cycled by [`Message::NextContent`]. `None` leaves the
/// field unchanged.
const SAMPLES: &[(Option<&str>, Option<&str>)] = &[
    (Some("checkmark"), Some("Saved\nYour changes are stored")),
    (Some("exclamationmark"), Some("Connection lost\nRetrying in a moment")),
    (Some("bell"), None),
    (None, Some("Text only update\nThe icon stays")),
];

/// Root application state.
pub struct App {
    config: Config,
    /// Directory `settings.toml` is persisted to; `None` uses the default.
    config_dir: Option<PathBuf>,
    registry: Registry,
    banner: BannerHandle,
    overlay: Overlay,
    environment: Environment,
    position: Position,
    dismiss_after: Option<DismissDelay>,
    /// Number of completed `dismiss_with_handler` calls.
    handler_runs: Rc<Cell<u32>>,
    last_event: Option<BannerEvent>,
    next_sample: usize,
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("banner", &self.registry.get(self.banner))
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings from the configured screen size.
pub fn window_settings(config: &Config) -> window::Settings {
    window::Settings {
        size: iced::Size::new(config.window.width, config.window.height),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let (config, warning) = config::load_with_override(flags.config_dir.clone());
    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
    let settings = window_settings(&config);

    // iced requires an Fn boot closure; the state is built only once.
    let boot_state = RefCell::new(Some((flags, config)));
    let boot = move || {
        let (flags, config) = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags, config)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(settings)
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Creates the application and its banner.
    pub fn new(flags: Flags, config: Config) -> Self {
        let position: Position = flags
            .position
            .or(config.banner.position)
            .unwrap_or_default()
            .into();
        let dismiss_after = match flags.dismiss_after {
            Some(secs) => Some(config::clamp_dismiss_after(secs)),
            None => config.banner.dismiss_after(),
        };
        let environment = config.window.environment();
        let haptics: Box<dyn Haptics> = if config.banner.haptics.unwrap_or(true) {
            Box::new(LogHaptics)
        } else {
            Box::new(NoHaptics)
        };

        let welcome = |content: &mut Content| {
            content.text = BannerText::new("Hello from iced_banner\nPress Present again to shake");
        };

        let mut registry = Registry::new();
        let banner = registry.create_or_find(BANNER_TAG, || {
            Banner::new(position, environment, &welcome).with_haptics(haptics)
        });

        log::info!("banner ready at {position:?}, auto-dismiss {dismiss_after:?}");

        Self {
            config,
            config_dir: flags.config_dir,
            registry,
            banner,
            overlay: Overlay::new(),
            environment,
            position,
            dismiss_after,
            handler_runs: Rc::new(Cell::new(0)),
            last_event: None,
            next_sample: 0,
            now: Instant::now(),
        }
    }

    fn title(&self) -> String {
        String::from("iced_banner")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(self.needs_tick());
        Subscription::batch([event_sub, tick_sub])
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// The banner owned by this application.
    #[must_use]
    pub fn banner(&self) -> Option<&Banner> {
        self.registry.get(self.banner)
    }

    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.banner().is_some_and(Banner::needs_tick)
    }

    #[must_use]
    pub fn handler_runs(&self) -> u32 {
        self.handler_runs.get()
    }

    #[must_use]
    pub fn last_event(&self) -> Option<BannerEvent> {
        self.last_event
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn environment(&self) -> Environment {
        self.environment
    }

    #[must_use]
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Configured auto-dismiss delay in seconds, if any.
    #[must_use]
    pub fn dismiss_after_secs(&self) -> Option<f32> {
        self.dismiss_after.map(DismissDelay::as_secs)
    }

    /// Handles a message at the given instant.
    pub fn update_at(&mut self, message: Message, now: Instant) {
        self.now = now;
        let Some(banner) = self.registry.get_mut(self.banner) else {
            return;
        };

        match message {
            Message::Present => banner.present(&mut self.overlay, None, now),
            Message::PresentTimed => banner.present(&mut self.overlay, self.dismiss_after, now),
            Message::Dismiss => banner.dismiss(now),
            Message::DismissWithHandler => {
                let runs = Rc::clone(&self.handler_runs);
                banner.dismiss_with_handler(move || runs.set(runs.get() + 1), now);
            }
            Message::NextContent => {
                let (icon, text) = SAMPLES[self.next_sample % SAMPLES.len()];
                banner.set_image_and_text(
                    icon.map(|name| Icon::symbol(name.to_owned())),
                    text.map(BannerText::from),
                );
                self.next_sample += 1;
            }
            Message::TogglePosition => {
                self.position = match self.position {
                    Position::Top => Position::Bottom,
                    Position::Bottom => Position::Top,
                };
                banner.set_position(self.position);
                self.config.banner.position = Some(match self.position {
                    Position::Top => BannerPosition::Top,
                    Position::Bottom => BannerPosition::Bottom,
                });
                self.persist_config();
            }
            Message::Tick(_) => {
                for event in banner.tick(&mut self.overlay, now) {
                    log::info!("banner event: {event:?}");
                    self.last_event = Some(event);
                }
            }
            Message::WindowResized(size) => {
                self.environment = Environment::from_bounds(
                    Size::new(size.width, size.height),
                    self.config.window.safe_area(),
                );
                banner.set_environment(self.environment);
            }
        }
    }

    /// Writes the current configuration, logging instead of failing.
    fn persist_config(&self) {
        if let Err(err) = config::save_with_override(&self.config, self.config_dir.clone()) {
            log::warn!("failed to save settings: {err}");
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = match &message {
            Message::Tick(instant) => *instant,
            _ => Instant::now(),
        };
        self.update_at(message, now);
        Task::none()
    }
}
