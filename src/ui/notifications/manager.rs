// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `NotificationQueue` shows one banner at a time, in enqueue order.
//! Everything it does happens on the UI thread in response to `update`:
//! ticks advance animations and timers, pointer messages become gestures,
//! and dismissals requested between ticks are applied on the next one.

use super::banner::{Banner, Completion, Phase};
use super::chrome::Surface;
use super::gesture::{Gesture, GestureTracker, SwipeDirection};
use super::layout::{GlyphMetrics, TextMeasure};
use super::notification::{DisplayDuration, NotificationSpec};
use super::notifier::{Inbox, Notifier};
use crate::config::Config;
use crate::design::DesignConfig;
use crate::error::Result;
use iced::{Point, Size};
use std::collections::VecDeque;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// Messages for queue state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Advance animations and timers to the given instant.
    Tick(Instant),
    /// Pointer position in surface coordinates.
    PointerMoved(Point),
    /// Pointer pressed on the banner.
    Pressed,
    /// Pointer released on the banner.
    Released,
    /// The banner's action button was pressed.
    ButtonPressed,
    /// The host container changed size.
    SurfaceResized(Size),
    /// The host surface was torn down while a banner may still be attached.
    SurfaceDetached,
}

/// Single-file queue of banners.
///
/// Hold one per process and pass it to whatever needs to show notifications.
pub struct NotificationQueue {
    config: Config,
    design: Arc<DesignConfig>,
    measure: Box<dyn TextMeasure + Send + Sync>,
    surface: Surface,
    /// Specs waiting for the active banner to leave (oldest first).
    pending: VecDeque<NotificationSpec>,
    active: Option<Banner>,
    /// Dismissals requested since the last tick.
    deferred: Vec<Option<Completion>>,
    gesture: GestureTracker,
    inbox: Option<Inbox>,
}

impl fmt::Debug for NotificationQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationQueue")
            .field("surface", &self.surface)
            .field("pending", &self.pending.len())
            .field("active", &self.active)
            .field("deferred", &self.deferred.len())
            .finish()
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl NotificationQueue {
    /// Creates an idle queue using the bundled design.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            design: DesignConfig::bundled(),
            measure: Box::new(GlyphMetrics::default()),
            surface: Surface::default(),
            pending: VecDeque::new(),
            active: None,
            deferred: Vec::new(),
            gesture: GestureTracker::default(),
            inbox: None,
        }
    }

    /// Replaces the design used for banners presented from now on.
    #[must_use]
    pub fn with_design(mut self, design: Arc<DesignConfig>) -> Self {
        self.design = design;
        self
    }

    /// Replaces the text measurement used for layout.
    #[must_use]
    pub fn with_measure(mut self, measure: impl TextMeasure + Send + Sync + 'static) -> Self {
        self.measure = Box::new(measure);
        self
    }

    #[must_use]
    pub fn with_surface(mut self, surface: Surface) -> Self {
        self.surface = surface;
        self
    }

    /// Appends `spec` and presents it right away if nothing is showing.
    pub fn enqueue(&mut self, spec: NotificationSpec) {
        self.enqueue_at(spec, Instant::now());
    }

    /// Same as [`enqueue`](Self::enqueue) with an explicit clock reading.
    pub fn enqueue_at(&mut self, spec: NotificationSpec, now: Instant) {
        log::debug!("enqueue {:?} '{}'", spec.kind(), spec.title());
        self.pending.push_back(spec);
        if self.active.is_none() {
            self.present_next(now);
        }
    }

    /// Requests the fade-out of the active banner.
    ///
    /// Returns `false` when nothing is displayed. Otherwise the request is
    /// applied on the next tick: a fully displayed banner starts leaving, a
    /// banner still entering leaves as soon as its entry completes.
    /// `on_complete` runs only if the exit animation finishes naturally.
    pub fn dismiss_active(&mut self, on_complete: Option<Completion>) -> bool {
        if self.active.is_none() {
            return false;
        }
        self.deferred.push(on_complete);
        true
    }

    /// Replaces the design with the document at `path`.
    ///
    /// # Panics
    ///
    /// Panics if the document cannot be read or parsed. A broken design is
    /// a configuration error, not a runtime condition.
    pub fn set_custom_design(&mut self, path: &Path) {
        if let Err(err) = self.try_set_custom_design(path) {
            panic!("Failed to load banner design {}: {}", path.display(), err);
        }
    }

    /// Fallible form of [`set_custom_design`](Self::set_custom_design).
    /// On error the current design stays in place.
    pub fn try_set_custom_design(&mut self, path: &Path) -> Result<()> {
        let design = DesignConfig::from_path(path)?;
        self.set_design(Arc::new(design));
        log::info!("banner design replaced from {}", path.display());
        Ok(())
    }

    /// Swaps the whole design. Banners already on screen keep their style.
    pub fn set_design(&mut self, design: Arc<DesignConfig>) {
        self.design = design;
    }

    /// Updates the host surface and re-lays out the active banner.
    pub fn set_surface(&mut self, surface: Surface) {
        self.surface = surface;
        if let Some(banner) = self.active.as_mut() {
            banner.relayout(&self.surface, &self.config, self.measure.as_ref());
        }
    }

    /// Returns a handle for enqueuing from other threads or tasks.
    pub fn notifier(&mut self) -> Notifier {
        self.inbox.get_or_insert_with(Inbox::new).notifier()
    }

    /// Handles a queue message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Tick(now) => self.tick(now),
            Message::PointerMoved(position) => self.gesture.moved(position),
            Message::Pressed => self.gesture.pressed(),
            Message::Released => {
                if let Some(gesture) = self.gesture.released(self.config.swipe_threshold) {
                    self.handle_gesture(gesture);
                }
            }
            Message::ButtonPressed => self.button_pressed(),
            Message::SurfaceResized(size) => self.set_surface(Surface {
                size,
                chrome: self.surface.chrome,
            }),
            Message::SurfaceDetached => self.surface_detached(),
        }
    }

    /// Advances the queue to `now`.
    pub fn tick(&mut self, now: Instant) {
        let received = self.inbox.as_mut().map(Inbox::drain).unwrap_or_default();
        for spec in received {
            self.enqueue_at(spec, now);
        }

        for completion in std::mem::take(&mut self.deferred) {
            match self.active.as_mut() {
                Some(banner) => banner.request_exit(completion),
                None => log::debug!("dismissal dropped: no active banner"),
            }
        }

        self.step(now);
    }

    /// Drops every queued spec and removes the active banner immediately.
    ///
    /// The active banner's exit is interrupted, so its completions never run.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.deferred.clear();
        self.gesture.reset();
        if let Some(mut banner) = self.active.take() {
            let dropped = banner.take_completions().len();
            log::debug!(
                "cleared active banner '{}', {} completion(s) not run",
                banner.spec().title(),
                dropped
            );
        }
    }

    /// Whether a banner is on screen (entering, displayed or exiting).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Returns the banner on screen.
    #[must_use]
    pub fn active(&self) -> Option<&Banner> {
        self.active.as_ref()
    }

    /// Returns the specs waiting behind the active banner.
    pub fn queued(&self) -> impl Iterator<Item = &NotificationSpec> {
        self.pending.iter()
    }

    /// Returns the number of specs waiting behind the active banner.
    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.pending.len()
    }

    /// Returns whether there is anything left to animate or show.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        self.active.is_some() || !self.pending.is_empty() || !self.deferred.is_empty()
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn design(&self) -> &Arc<DesignConfig> {
        &self.design
    }

    #[must_use]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Presents the head of the queue if nothing is showing.
    fn present_next(&mut self, now: Instant) {
        if self.active.is_some() {
            return;
        }
        let Some(spec) = self.pending.pop_front() else {
            return;
        };

        let style = self.design.style(spec.kind()).clone();
        let banner = Banner::present(
            spec,
            style,
            &self.surface,
            &self.config,
            self.measure.as_ref(),
            now,
        );
        log::debug!(
            "presenting '{}' at y={} (height {})",
            banner.spec().title(),
            banner.resting_y(),
            banner.layout().size.height
        );
        self.active = Some(banner);
    }

    fn step(&mut self, now: Instant) {
        let Some(banner) = self.active.as_mut() else {
            return;
        };

        let finished = banner.advance(now);
        match banner.phase() {
            Phase::Entering if finished => {
                banner.finish_entry();
                log::debug!("'{}' fully displayed", banner.spec().title());
            }
            Phase::Exiting if finished => {
                self.finish_exit(now);
                return;
            }
            _ => {}
        }

        if banner.phase() == Phase::Displayed
            && (banner.exit_requested() || banner.auto_dismiss_due(now))
        {
            log::debug!("fading out '{}'", banner.spec().title());
            banner.begin_exit(now, self.config.animation_duration());
        }
    }

    /// Detaches the exited banner, shows the next one, then runs completions.
    fn finish_exit(&mut self, now: Instant) {
        let Some(mut banner) = self.active.take() else {
            return;
        };
        self.gesture.reset();
        log::debug!("'{}' dismissed", banner.spec().title());

        let completions = banner.take_completions();
        drop(banner);

        self.present_next(now);
        for completion in completions {
            completion();
        }
    }

    /// Dismissal triggered from the banner itself, applied on the next tick.
    fn fade_me_out(&mut self) {
        if self
            .active
            .as_ref()
            .is_some_and(|banner| banner.phase() != Phase::Exiting)
        {
            self.deferred.push(None);
        }
    }

    fn handle_gesture(&mut self, gesture: Gesture) {
        let Some(banner) = self.active.as_ref() else {
            return;
        };
        if banner.phase() == Phase::Exiting {
            return;
        }
        let spec = banner.spec();

        match gesture {
            Gesture::Tap => {
                let dismiss = spec.is_dismissible();
                if let Some(action) = spec.tap_action() {
                    action();
                }
                if dismiss {
                    self.fade_me_out();
                }
            }
            Gesture::Swipe(direction) => {
                if spec.is_dismissible() && direction == SwipeDirection::dismissing(spec.position()) {
                    self.fade_me_out();
                }
            }
        }
    }

    fn button_pressed(&mut self) {
        let Some(banner) = self.active.as_ref() else {
            return;
        };
        if banner.phase() == Phase::Exiting {
            return;
        }
        if let Some(action) = banner.spec().button().and_then(|button| button.action.as_ref()) {
            action();
        }
        self.fade_me_out();
    }

    fn surface_detached(&mut self) {
        let endless = self
            .active
            .as_ref()
            .is_some_and(|banner| banner.spec().duration() == DisplayDuration::Endless);
        if endless {
            log::debug!("surface detached, fading out endless banner");
            self.fade_me_out();
        }
    }
}
