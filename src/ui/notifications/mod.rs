// SPDX-License-Identifier: MPL-2.0
//! Transient banner notifications.
//!
//! Banners slide in at the top or bottom of the host surface, stay for a
//! while and slide back out. At most one banner is visible at a time; the
//! others wait in enqueue order.
//!
//! # Components
//!
//! - [`notification`] - `NotificationSpec` and its builder
//! - [`manager`] - `NotificationQueue`, the single-file lifecycle state machine
//! - [`banner`] - presentation state of the banner on screen
//! - [`layout`] - banner geometry from text measurement and container width
//! - [`chrome`] - host surface and the chrome banners must avoid
//! - [`animation`] - clock-driven transitions and timers
//! - [`gesture`] - tap and swipe recognition
//! - [`notifier`] - `Send` handle for enqueuing from other threads
//! - [`toast`] - iced rendering of the active banner
//!
//! # Usage
//!
//! ```ignore
//! use iced_banners::ui::notifications::{NotificationQueue, NotificationSpec, Toast};
//!
//! let mut queue = NotificationQueue::default();
//! queue.enqueue(NotificationSpec::success("Saved").with_subtitle("All changes are on disk"));
//!
//! // Drive it from your update loop and draw it over your content.
//! queue.update(Message::Tick(now));
//! let overlay = Toast::view(&queue).map(AppMessage::Banner);
//! ```

pub mod animation;
pub mod banner;
pub mod chrome;
pub mod gesture;
pub mod layout;
mod manager;
mod notification;
mod notifier;
mod toast;

pub use banner::{Banner, Completion, Phase};
pub use chrome::{Chrome, NavigationBar, Surface};
pub use layout::{BannerLayout, GlyphMetrics, TextMeasure};
pub use manager::{Message, NotificationQueue};
pub use notification::{
    ButtonSpec, Callback, DisplayDuration, Icon, Kind, NotificationId, NotificationSpec, Position,
};
pub use notifier::Notifier;
pub use toast::Toast;
