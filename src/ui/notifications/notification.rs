// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the immutable `NotificationSpec` a caller enqueues,
//! along with the `Kind`, `DisplayDuration` and `Position` enums that
//! drive styling, timing and placement.

use iced::Size;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Zero-argument action attached to a banner tap or button.
pub type Callback = Arc<dyn Fn() + Send + Sync>;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Notification type, selecting the design used for the banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Kind {
    /// Neutral information (gray).
    #[default]
    Message,
    /// Something needs attention (yellow).
    Warning,
    /// Something failed (red).
    Error,
    /// Something completed (green).
    Success,
}

impl Kind {
    pub const ALL: [Kind; 4] = [Kind::Message, Kind::Warning, Kind::Error, Kind::Success];

    /// Returns the table name of this type in a design document.
    #[must_use]
    pub fn design_key(self) -> &'static str {
        match self {
            Kind::Message => "message",
            Kind::Warning => "warning",
            Kind::Error => "error",
            Kind::Success => "success",
        }
    }
}

/// How long a banner stays fully displayed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DisplayDuration {
    /// Derived from the banner height; taller banners stay longer.
    #[default]
    Automatic,
    /// Stays until dismissed explicitly or its surface goes away.
    Endless,
    /// Fixed duration measured from the start of presentation.
    Custom(Duration),
}

/// Where the banner appears on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    /// Below the status and navigation bars.
    #[default]
    Top,
    /// Above the bottom edge (and any visible toolbar).
    Bottom,
    /// On top of the navigation bar.
    NavBarOverlay,
}

/// Icon shown on the left of the banner.
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    /// Resource name, resolved against the configured icon directory.
    pub name: String,
    pub size: Size,
}

impl Icon {
    pub fn new(name: impl Into<String>, size: Size) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// Action button shown on the right of the banner.
#[derive(Clone)]
pub struct ButtonSpec {
    pub title: String,
    pub action: Option<Callback>,
}

impl fmt::Debug for ButtonSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonSpec")
            .field("title", &self.title)
            .field("has_action", &self.action.is_some())
            .finish()
    }
}

/// A notification to be displayed as a banner.
///
/// Immutable once enqueued. The builder methods consume and return the spec.
#[derive(Clone)]
pub struct NotificationSpec {
    id: NotificationId,
    kind: Kind,
    title: String,
    subtitle: Option<String>,
    icon: Option<Icon>,
    duration: DisplayDuration,
    position: Position,
    dismissible: bool,
    on_tap: Option<Callback>,
    button: Option<ButtonSpec>,
}

impl fmt::Debug for NotificationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationSpec")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("title", &self.title)
            .field("subtitle", &self.subtitle)
            .field("duration", &self.duration)
            .field("position", &self.position)
            .field("dismissible", &self.dismissible)
            .field("has_tap_action", &self.on_tap.is_some())
            .field("button", &self.button)
            .finish()
    }
}

impl NotificationSpec {
    /// Creates a dismissible, top-positioned notification with automatic duration.
    pub fn new(kind: Kind, title: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            title: title.into(),
            subtitle: None,
            icon: None,
            duration: DisplayDuration::Automatic,
            position: Position::Top,
            dismissible: true,
            on_tap: None,
            button: None,
        }
    }

    /// Creates a message notification.
    pub fn message(title: impl Into<String>) -> Self {
        Self::new(Kind::Message, title)
    }

    /// Creates a warning notification.
    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(Kind::Warning, title)
    }

    /// Creates an error notification.
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(Kind::Error, title)
    }

    /// Creates a success notification.
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(Kind::Success, title)
    }

    /// Sets the text shown below the title. An empty subtitle is ignored.
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        let subtitle = subtitle.into();
        self.subtitle = (!subtitle.is_empty()).then_some(subtitle);
        self
    }

    /// Replaces the per-type default icon.
    #[must_use]
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration: DisplayDuration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Whether a tap or swipe on the banner dismisses it.
    #[must_use]
    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }

    /// Sets the action run when the banner is tapped.
    #[must_use]
    pub fn on_tap(mut self, action: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_tap = Some(Arc::new(action));
        self
    }

    /// Adds an action button. An empty title is ignored.
    #[must_use]
    pub fn with_button(
        mut self,
        title: impl Into<String>,
        action: Option<Callback>,
    ) -> Self {
        let title = title.into();
        self.button = (!title.is_empty()).then_some(ButtonSpec { title, action });
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    #[must_use]
    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    #[must_use]
    pub fn duration(&self) -> DisplayDuration {
        self.duration
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn is_dismissible(&self) -> bool {
        self.dismissible
    }

    #[must_use]
    pub fn tap_action(&self) -> Option<&Callback> {
        self.on_tap.as_ref()
    }

    #[must_use]
    pub fn button(&self) -> Option<&ButtonSpec> {
        self.button.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn notification_ids_are_unique() {
        let n1 = NotificationSpec::message("test");
        let n2 = NotificationSpec::message("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn constructors_set_correct_kind() {
        assert_eq!(NotificationSpec::message("").kind(), Kind::Message);
        assert_eq!(NotificationSpec::warning("").kind(), Kind::Warning);
        assert_eq!(NotificationSpec::error("").kind(), Kind::Error);
        assert_eq!(NotificationSpec::success("").kind(), Kind::Success);
    }

    #[test]
    fn defaults_match_plain_show_call() {
        let spec = NotificationSpec::message("Saved");
        assert_eq!(spec.duration(), DisplayDuration::Automatic);
        assert_eq!(spec.position(), Position::Top);
        assert!(spec.is_dismissible());
        assert!(spec.subtitle().is_none());
        assert!(spec.button().is_none());
        assert!(spec.tap_action().is_none());
    }

    #[test]
    fn empty_subtitle_and_button_title_are_dropped() {
        let spec = NotificationSpec::error("Oops")
            .with_subtitle("")
            .with_button("", None);
        assert!(spec.subtitle().is_none());
        assert!(spec.button().is_none());
    }

    #[test]
    fn builder_pattern_works() {
        let spec = NotificationSpec::warning("Low battery")
            .with_subtitle("10% remaining")
            .with_duration(DisplayDuration::Custom(Duration::from_secs(10)))
            .with_position(Position::Bottom)
            .dismissible(false)
            .with_button("Settings", None);

        assert_eq!(spec.title(), "Low battery");
        assert_eq!(spec.subtitle(), Some("10% remaining"));
        assert_eq!(
            spec.duration(),
            DisplayDuration::Custom(Duration::from_secs(10))
        );
        assert_eq!(spec.position(), Position::Bottom);
        assert!(!spec.is_dismissible());
        assert_eq!(spec.button().map(|b| b.title.as_str()), Some("Settings"));
    }

    #[test]
    fn tap_action_is_callable() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let spec = NotificationSpec::message("Tap me").on_tap(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        if let Some(action) = spec.tap_action() {
            action();
        }
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn design_keys_are_lowercase_names() {
        let keys: Vec<_> = Kind::ALL.iter().map(|k| k.design_key()).collect();
        assert_eq!(keys, ["message", "warning", "error", "success"]);
    }
}
