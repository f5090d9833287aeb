// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for banner timing and layout.
//!
//! This module serves as the single source of truth for the constants used
//! by the queue and the layout engine. Constants are organized by category.
//!
//! # Categories
//!
//! - **Timing**: Display and animation durations
//! - **Layout**: Padding, gaps and fixed component sizes
//! - **Gestures**: Swipe recognition

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Base time a banner stays fully visible with the automatic policy (ms).
pub const DEFAULT_DISPLAY_TIME_MS: u64 = 1_500;

/// Extra display time per unit of banner height (ms).
/// Taller banners carry more text and stay longer.
pub const DEFAULT_EXTRA_DISPLAY_TIME_PER_PIXEL_MS: f32 = 40.0;

/// Duration of the exit animation (ms).
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 300;

/// The entry animation runs this much longer than the exit animation (ms).
pub const ENTRY_ANIMATION_EXTRA_MS: u64 = 100;

/// Damping ratio of the entry spring. Below 1.0 the banner overshoots.
pub const ENTRY_SPRING_DAMPING: f32 = 0.8;

/// Additional offset from the top edge applied to every non-bottom banner.
pub const DEFAULT_OFFSET_HEIGHT: f32 = 0.0;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Minimum padding around banner content.
pub const MIN_PADDING: f32 = 15.0;

/// Extra padding for banners overlaying the navigation bar.
pub const NAV_BAR_OVERLAY_EXTRA_PADDING: f32 = 10.0;

/// Vertical gap between title and subtitle.
pub const SUBTITLE_GAP: f32 = 5.0;

/// Distance the background extends past the edge the banner travels from,
/// masking the gap revealed by spring overshoot.
pub const OVERSHOOT_INSET: f32 = 30.0;

/// Fixed height of the action button.
pub const BUTTON_HEIGHT: f32 = 31.0;

/// Font size of the action button title.
pub const BUTTON_FONT_SIZE: f32 = 14.0;

/// Horizontal inset between the button edge and its title.
pub const BUTTON_CONTENT_INSET: f32 = 5.0;

/// Icon edge length used when a design does not specify one.
pub const DEFAULT_ICON_SIZE: f32 = 32.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Minimum vertical pointer travel recognized as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 20.0;
