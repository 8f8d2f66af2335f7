// SPDX-License-Identifier: MPL-2.0
//! Presentation state machine of a single banner.
//!
//! The banner rests at one of two centers: the hidden center (off screen,
//! detached from the host) or the shown center (on screen, attached).
//! Moving between them is a one second spring [`Slide`] whose completion
//! action runs from [`Banner::tick`].
//!
//! Like an animatable property of a platform view, the *model* center jumps
//! to the target as soon as a slide starts, while the *presented* center
//! interpolates. `present` and `dismiss` compare the model center, so a
//! second `present` during the slide-in already sees the banner as shown
//! and shakes instead of attaching twice.

use super::animation::{Shake, Slide, SLIDE_DURATION};
use super::content::{self, Content, ContentProvider, Icon};
use super::haptics::{Feedback, Haptics, LogHaptics};
use super::host::Host;
use super::layout::ContentLayout;
use super::timer::{DismissTimer, TimerToken, TokenSource};
use crate::domain::{BannerGeometry, BannerText, DismissDelay, Environment, Point, Position, Size};
use std::fmt;
use std::time::Instant;

/// Identifying tag of the banner slot in the host hierarchy.
pub const BANNER_TAG: u32 = 42;

/// Completion callback of [`Banner::dismiss_with_handler`].
pub type DismissHandler = Box<dyn FnOnce()>;

/// Something that happened while ticking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerEvent {
    /// The slide-in finished; the banner rests at the shown center.
    Presented,
    /// The auto-dismiss timer fired and the slide-out started.
    AutoDismissStarted,
    /// The slide-out finished and the banner was detached.
    Dismissed,
}

/// Action run when a slide completes.
enum Completion {
    Presented { dismiss_after: Option<DismissDelay> },
    Dismissed { handler: Option<DismissHandler> },
}

impl fmt::Debug for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Completion::Presented { dismiss_after } => f
                .debug_struct("Presented")
                .field("dismiss_after", dismiss_after)
                .finish(),
            Completion::Dismissed { handler } => f
                .debug_struct("Dismissed")
                .field("has_handler", &handler.is_some())
                .finish(),
        }
    }
}

#[derive(Debug)]
struct Transition {
    slide: Slide,
    completion: Completion,
}

/// A slide-in/slide-out banner with an icon and up to two lines of text.
pub struct Banner {
    tag: u32,
    position: Position,
    environment: Environment,
    geometry: BannerGeometry,
    /// Model center; equals the target of the running slide.
    center: Point,
    attached: bool,
    content: Content,
    transition: Option<Transition>,
    shake: Option<Shake>,
    timer: Option<DismissTimer>,
    tokens: TokenSource,
    haptics: Box<dyn Haptics>,
}

impl fmt::Debug for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Banner")
            .field("tag", &self.tag)
            .field("position", &self.position)
            .field("center", &self.center)
            .field("attached", &self.attached)
            .field("transition", &self.transition)
            .field("timer", &self.timer)
            .finish_non_exhaustive()
    }
}

impl Banner {
    /// Creates a hidden banner for the given screen edge.
    ///
    /// `provider` runs once here to set up the initial content.
    #[must_use]
    pub fn new(position: Position, environment: Environment, provider: &dyn ContentProvider) -> Self {
        let geometry = BannerGeometry::compute(position, &environment);
        Self {
            tag: BANNER_TAG,
            position,
            environment,
            geometry,
            center: geometry.hidden_center,
            attached: false,
            content: content::configured(provider),
            transition: None,
            shake: None,
            timer: None,
            tokens: TokenSource::new(),
            haptics: Box::new(LogHaptics),
        }
    }

    /// Replaces the haptics backend.
    #[must_use]
    pub fn with_haptics(mut self, haptics: Box<dyn Haptics>) -> Self {
        self.haptics = haptics;
        self
    }

    /// Uses a different identifying tag.
    #[must_use]
    pub fn with_tag(mut self, tag: u32) -> Self {
        self.tag = tag;
        self
    }

    // =========================================================================
    // Content
    // =========================================================================

    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Replaces the icon and/or the text; `None` leaves a field unchanged.
    pub fn set_image_and_text(&mut self, image: Option<Icon>, text: Option<BannerText>) {
        self.content.set_image_and_text(image, text);
    }

    /// Icon and text regions for the current banner size.
    #[must_use]
    pub fn content_layout(&self) -> ContentLayout {
        ContentLayout::compute(self.geometry.size)
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    #[must_use]
    pub fn tag(&self) -> u32 {
        self.tag
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn geometry(&self) -> &BannerGeometry {
        &self.geometry
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.geometry.size
    }

    #[must_use]
    pub fn corner_radius(&self) -> f32 {
        self.geometry.corner_radius
    }

    #[must_use]
    pub fn shown_center(&self) -> Point {
        self.geometry.shown_center
    }

    #[must_use]
    pub fn hidden_center(&self) -> Point {
        self.geometry.hidden_center
    }

    /// Model center: the resting center, or the target of the running slide.
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Records a new screen environment.
    ///
    /// The geometry is recomputed right away when the banner is fully
    /// hidden, otherwise on the next `present` from the hidden state.
    pub fn set_environment(&mut self, environment: Environment) {
        self.environment = environment;
        if self.is_hidden() && !self.attached {
            self.refresh_geometry();
        }
    }

    /// Changes the screen edge. Takes effect like an environment change.
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
        if self.is_hidden() && !self.attached {
            self.refresh_geometry();
        }
    }

    fn refresh_geometry(&mut self) {
        self.geometry = BannerGeometry::compute(self.position, &self.environment);
        self.center = self.geometry.hidden_center;
    }

    /// Where the banner is drawn at `now`, including the shake offset.
    #[must_use]
    pub fn presented_center(&self, now: Instant) -> Point {
        let base = match &self.transition {
            Some(transition) => transition.slide.center_at(now),
            None => self.center,
        };
        let offset = self.shake.map_or(0.0, |shake| shake.offset_at(now));
        Point::new(base.x + offset, base.y)
    }

    /// Top-left corner of the drawn banner at `now`.
    #[must_use]
    pub fn presented_origin(&self, now: Instant) -> Point {
        self.geometry.origin_for_center(self.presented_center(now))
    }

    // =========================================================================
    // State queries
    // =========================================================================

    /// Resting at the shown center with no slide running.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.transition.is_none() && self.center == self.geometry.shown_center
    }

    /// Resting at the hidden center with no slide running.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.transition.is_none() && self.center == self.geometry.hidden_center
    }

    /// Whether the banner is part of the host hierarchy.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Whether the host must keep calling [`Banner::tick`].
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.transition.is_some() || self.shake.is_some() || self.timer.is_some()
    }

    /// Token of the pending auto-dismiss, if any.
    #[must_use]
    pub fn pending_auto_dismiss(&self) -> Option<TimerToken> {
        self.timer.map(|timer| timer.token())
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Slides the banner in, optionally dismissing it after a delay.
    ///
    /// If the banner is already shown (or sliding in) it shakes instead. A
    /// delay passed while shown restarts the auto-dismiss countdown.
    pub fn present(&mut self, host: &mut dyn Host, dismiss_after: Option<DismissDelay>, now: Instant) {
        if self.center == self.geometry.shown_center {
            self.shake(now);
            if let Some(delay) = dismiss_after {
                if self.transition.is_none() {
                    self.timer = Some(DismissTimer::arm(self.tokens.issue(), now, delay.as_duration()));
                } else if let Some(Transition {
                    completion: Completion::Presented { dismiss_after: pending },
                    ..
                }) = &mut self.transition
                {
                    *pending = Some(delay);
                }
            }
            return;
        }

        if self.transition.is_none() && !self.attached {
            self.refresh_geometry();
        }

        if self.attached {
            log::debug!("banner {}: slide-out interrupted, staying attached", self.tag);
        } else if host.has_root_surface() {
            host.attach(self.tag);
            self.attached = true;
        } else {
            log::debug!("banner {}: no root surface, presenting detached", self.tag);
        }

        self.begin_slide(
            self.geometry.shown_center,
            Completion::Presented { dismiss_after },
            now,
        );
    }

    /// Slides the banner out and detaches it. No-op when already hidden.
    pub fn dismiss(&mut self, now: Instant) {
        self.dismiss_inner(None, now);
    }

    /// Like [`Banner::dismiss`], running `handler` right before detaching.
    ///
    /// The handler is dropped without running when the banner is already
    /// hidden, or when a `present` interrupts the slide-out.
    pub fn dismiss_with_handler(&mut self, handler: impl FnOnce() + 'static, now: Instant) {
        self.dismiss_inner(Some(Box::new(handler)), now);
    }

    fn dismiss_inner(&mut self, handler: Option<DismissHandler>, now: Instant) {
        if self.center == self.geometry.hidden_center {
            log::debug!("banner {}: dismiss ignored, already hidden", self.tag);
            return;
        }
        self.cancel_auto_dismiss();
        self.begin_slide(
            self.geometry.hidden_center,
            Completion::Dismissed { handler },
            now,
        );
    }

    /// Cancels the pending auto-dismiss. Returns whether one was pending.
    pub fn cancel_auto_dismiss(&mut self) -> bool {
        self.timer.take().is_some()
    }

    /// Plays the "already visible" shake and an error pulse.
    pub fn shake(&mut self, now: Instant) {
        self.shake = Some(Shake::new(now));
        self.haptics.notify(Feedback::Error);
    }

    fn begin_slide(&mut self, to: Point, completion: Completion, now: Instant) {
        let from = match &self.transition {
            Some(transition) => transition.slide.center_at(now),
            None => self.center,
        };
        if let Some(interrupted) = self.transition.take() {
            log::debug!(
                "banner {}: slide interrupted, dropping {:?}",
                self.tag,
                interrupted.completion
            );
        }
        self.center = to;
        self.transition = Some(Transition {
            slide: Slide::new(from, to, now),
            completion,
        });
    }

    /// Advances animations and timers to `now`.
    ///
    /// Runs the completion of a finished slide (arming the auto-dismiss or
    /// running the dismiss handler and detaching), then fires a due
    /// auto-dismiss.
    pub fn tick(&mut self, host: &mut dyn Host, now: Instant) -> Vec<BannerEvent> {
        let mut events = Vec::new();

        if self.shake.is_some_and(|shake| shake.is_finished(now)) {
            self.shake = None;
        }

        let finished = self
            .transition
            .as_ref()
            .is_some_and(|transition| transition.slide.is_finished(now));
        if finished {
            if let Some(Transition { slide, completion }) = self.transition.take() {
                match completion {
                    Completion::Presented { dismiss_after } => {
                        if let Some(delay) = dismiss_after {
                            let completed_at = slide.started + SLIDE_DURATION;
                            let token = self.tokens.issue();
                            self.timer = Some(DismissTimer::arm(token, completed_at, delay.as_duration()));
                        }
                        log::debug!("banner {}: presented", self.tag);
                        events.push(BannerEvent::Presented);
                    }
                    Completion::Dismissed { handler } => {
                        if let Some(handler) = handler {
                            handler();
                        }
                        if self.attached {
                            host.detach(self.tag);
                            self.attached = false;
                        }
                        log::debug!("banner {}: dismissed", self.tag);
                        events.push(BannerEvent::Dismissed);
                    }
                }
            }
        }

        if self.timer.is_some_and(|timer| timer.is_due(now)) {
            self.timer = None;
            events.push(BannerEvent::AutoDismissStarted);
            self.dismiss(now);
        }

        events
    }
}
