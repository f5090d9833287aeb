// SPDX-License-Identifier: MPL-2.0
//! Presentation state of the banner currently on screen.
//!
//! A `Banner` is built when its spec reaches the head of the queue. It
//! captures the style in effect at that moment, so replacing the design
//! later never changes a banner already on screen.

use super::animation::{Curve, Timer, Transition};
use super::chrome::Surface;
use super::layout::{self, BannerLayout, LayoutRequest, TextMeasure};
use super::notification::{DisplayDuration, Icon, NotificationSpec, Position};
use crate::config::{Config, ENTRY_SPRING_DAMPING};
use crate::design::Style;
use iced::{Point, Rectangle};
use std::fmt;
use std::time::{Duration, Instant};

/// Action run once a banner has finished leaving the screen.
pub type Completion = Box<dyn FnOnce() + Send>;

/// Lifecycle of the active banner. Queued specs have no banner yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Animating towards its resting position.
    Entering,
    /// Fully displayed and accepting dismissal.
    Displayed,
    /// Animating off screen.
    Exiting,
}

pub struct Banner {
    spec: NotificationSpec,
    style: Style,
    icon: Option<Icon>,
    layout: BannerLayout,
    phase: Phase,
    transition: Transition,
    y: f32,
    resting_y: f32,
    hidden_y: f32,
    auto_dismiss: Option<Timer>,
    /// A dismissal arrived while entering; exit as soon as entry completes.
    exit_requested: bool,
    completions: Vec<Completion>,
}

impl fmt::Debug for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Banner")
            .field("spec", &self.spec)
            .field("phase", &self.phase)
            .field("y", &self.y)
            .field("layout", &self.layout)
            .field("auto_dismiss", &self.auto_dismiss)
            .field("exit_requested", &self.exit_requested)
            .field("completions", &self.completions.len())
            .finish()
    }
}

impl Banner {
    /// Lays the banner out on `surface` and starts its entry at `now`.
    pub fn present(
        spec: NotificationSpec,
        style: Style,
        surface: &Surface,
        config: &Config,
        measure: &dyn TextMeasure,
        now: Instant,
    ) -> Self {
        let icon = layout::resolve_icon(&spec, &style);
        let layout = layout::compute(
            &LayoutRequest::new(&spec, icon.as_ref(), &style, surface),
            measure,
        );
        let (resting_y, hidden_y) = positions(spec.position(), &layout, surface, config);

        let transition = Transition::new(
            hidden_y,
            resting_y,
            now,
            config.entry_duration(),
            Curve::Spring {
                damping: ENTRY_SPRING_DAMPING,
            },
        );

        let auto_dismiss = match spec.duration() {
            DisplayDuration::Automatic => {
                Timer::after(now, config.automatic_display_time(layout.size.height))
            }
            DisplayDuration::Custom(duration) => Timer::after(now, duration),
            DisplayDuration::Endless => None,
        };

        Self {
            spec,
            style,
            icon,
            layout,
            phase: Phase::Entering,
            transition,
            y: hidden_y,
            resting_y,
            hidden_y,
            auto_dismiss,
            exit_requested: false,
            completions: Vec::new(),
        }
    }

    #[must_use]
    pub fn spec(&self) -> &NotificationSpec {
        &self.spec
    }

    #[must_use]
    pub fn style(&self) -> &Style {
        &self.style
    }

    #[must_use]
    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    #[must_use]
    pub fn layout(&self) -> &BannerLayout {
        &self.layout
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True only between the end of the entry and the start of the exit.
    #[must_use]
    pub fn fully_displayed(&self) -> bool {
        self.phase == Phase::Displayed
    }

    /// Current top edge in surface coordinates.
    #[must_use]
    pub fn y(&self) -> f32 {
        self.y
    }

    #[must_use]
    pub fn resting_y(&self) -> f32 {
        self.resting_y
    }

    #[must_use]
    pub fn hidden_y(&self) -> f32 {
        self.hidden_y
    }

    /// Current frame in surface coordinates.
    #[must_use]
    pub fn frame(&self) -> Rectangle {
        Rectangle::new(Point::new(0.0, self.y), self.layout.size)
    }

    /// Current background frame in surface coordinates.
    #[must_use]
    pub fn background_frame(&self) -> Rectangle {
        let background = self.layout.background;
        Rectangle {
            y: background.y + self.y,
            ..background
        }
    }

    /// Deadline of the pending auto-dismiss, if one is scheduled.
    #[must_use]
    pub fn auto_dismiss_at(&self) -> Option<Instant> {
        self.auto_dismiss
            .filter(|timer| !timer.is_cancelled())
            .map(|timer| timer.deadline())
    }

    pub(crate) fn auto_dismiss_due(&self, now: Instant) -> bool {
        self.auto_dismiss.is_some_and(|timer| timer.is_due(now))
    }

    pub(crate) fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Records a dismissal. Runs `completion` when the exit finishes naturally.
    pub(crate) fn request_exit(&mut self, completion: Option<Completion>) {
        self.exit_requested = true;
        if let Some(completion) = completion {
            self.completions.push(completion);
        }
    }

    /// Moves the banner along its transition. Returns true once it is finished.
    pub(crate) fn advance(&mut self, now: Instant) -> bool {
        self.y = self.transition.value_at(now);
        self.transition.is_finished(now)
    }

    pub(crate) fn finish_entry(&mut self) {
        self.phase = Phase::Displayed;
        self.y = self.resting_y;
    }

    /// Starts the exit from the current position and cancels the auto-dismiss.
    pub(crate) fn begin_exit(&mut self, now: Instant, duration: Duration) {
        self.phase = Phase::Exiting;
        self.exit_requested = false;
        if let Some(timer) = self.auto_dismiss.as_mut() {
            timer.cancel();
        }
        self.transition = Transition::new(self.y, self.hidden_y, now, duration, Curve::EaseInOut);
    }

    pub(crate) fn take_completions(&mut self) -> Vec<Completion> {
        std::mem::take(&mut self.completions)
    }

    /// Recomputes geometry after the surface changed.
    pub(crate) fn relayout(&mut self, surface: &Surface, config: &Config, measure: &dyn TextMeasure) {
        self.layout = layout::compute(
            &LayoutRequest::new(&self.spec, self.icon.as_ref(), &self.style, surface),
            measure,
        );
        let (resting_y, hidden_y) = positions(self.spec.position(), &self.layout, surface, config);
        self.resting_y = resting_y;
        self.hidden_y = hidden_y;

        match self.phase {
            Phase::Entering => self.transition.to = resting_y,
            Phase::Displayed => self.y = resting_y,
            Phase::Exiting => self.transition.to = hidden_y,
        }
    }
}

/// Resting and off-screen top edges for a banner at `position`.
fn positions(
    position: Position,
    layout: &BannerLayout,
    surface: &Surface,
    config: &Config,
) -> (f32, f32) {
    let height = layout.size.height;
    match position {
        Position::Top | Position::NavBarOverlay => (
            config.offset_height + surface.chrome.vertical_offset(position),
            -height,
        ),
        Position::Bottom => (
            surface.size.height - height - surface.chrome.bottom_inset(),
            surface.size.height,
        ),
    }
}
