// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::notifications;
use std::path::PathBuf;

/// Which demo notification a button shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    Error,
    Warning,
    Message,
    Success,
    WithButton,
    Endless,
    LongDuration,
    LongText,
    Bottom,
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Banner(notifications::Message),
    Show(Sample),
    DismissActive,
    ApplyCustomDesign,
    ToggleNavigationBar,
    ToggleNavigationBarOpacity,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional custom design applied by the "Custom design" button.
    pub design: Option<PathBuf>,
    /// Optional settings file overriding the per-user `banners.toml`.
    pub config: Option<PathBuf>,
}
