// SPDX-License-Identifier: MPL-2.0
//! This module handles the banner settings, including loading and saving
//! them to a `banners.toml` file.
//!
//! Settings only tune timing and placement. The visual design of each
//! notification type lives in [`crate::design`].
//!
//! # Examples
//!
//! ```no_run
//! use iced_banners::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing settings
//! let mut config = config::load().unwrap_or_default();
//!
//! // Keep banners below a custom header
//! config.offset_height = 12.0;
//!
//! // Save to a specific path
//! let path = PathBuf::from("./banners.toml");
//! config::save_to_path(&config, &path).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub use defaults::*;

const CONFIG_FILE: &str = "banners.toml";
const APP_NAME: &str = "IcedBanners";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub animation_duration_ms: u64,
    pub display_time_ms: u64,
    pub extra_display_time_per_pixel_ms: f32,
    pub offset_height: f32,
    pub swipe_threshold: f32,
    /// Directory used to resolve icon resource names to image files.
    pub icon_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
            display_time_ms: DEFAULT_DISPLAY_TIME_MS,
            extra_display_time_per_pixel_ms: DEFAULT_EXTRA_DISPLAY_TIME_PER_PIXEL_MS,
            offset_height: DEFAULT_OFFSET_HEIGHT,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            icon_dir: None,
        }
    }
}

impl Config {
    /// Duration of the exit animation.
    #[must_use]
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    /// Duration of the entry animation, slightly longer than the exit.
    #[must_use]
    pub fn entry_duration(&self) -> Duration {
        Duration::from_millis(
            self.animation_duration_ms
                .saturating_add(ENTRY_ANIMATION_EXTRA_MS),
        )
    }

    /// Automatic display time for a banner of the given height.
    ///
    /// `animation + base + per_pixel * height`, non-decreasing in `height`.
    /// Saturates at `Duration::MAX` for out-of-range settings.
    #[must_use]
    pub fn automatic_display_time(&self, banner_height: f32) -> Duration {
        let extra_ms = self.extra_display_time_per_pixel_ms.max(0.0) * banner_height.max(0.0);
        let extra = if extra_ms.is_nan() {
            Duration::ZERO
        } else {
            Duration::try_from_secs_f32(extra_ms / 1000.0).unwrap_or(Duration::MAX)
        };
        Duration::from_millis(self.animation_duration_ms.saturating_add(self.display_time_ms))
            .saturating_add(extra)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!("ignoring invalid settings in {}: {}", path.display(), err);
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_offset() {
        let config = Config {
            offset_height: 12.0,
            display_time_ms: 2_000,
            icon_dir: Some(PathBuf::from("icons")),
            ..Config::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("banners.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("banners.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("banners.toml");
        fs::write(&config_path, "display_time_ms = 4000\n").expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.display_time_ms, 4_000);
        assert_eq!(loaded.animation_duration_ms, DEFAULT_ANIMATION_DURATION_MS);
    }

    #[test]
    fn load_from_missing_path_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn automatic_display_time_matches_formula() {
        let config = Config::default();
        // 0.3 + 1.5 + 0.04 * 50 = 3.8 s
        let duration = config.automatic_display_time(50.0);
        assert!((duration.as_secs_f32() - 3.8).abs() < 1e-3);
    }

    #[test]
    fn entry_runs_longer_than_exit() {
        let config = Config::default();
        assert_eq!(config.entry_duration(), Duration::from_millis(400));
        assert_eq!(config.animation_duration(), Duration::from_millis(300));
    }

    #[test]
    fn infinite_per_pixel_time_saturates() {
        let config: Config =
            toml::from_str("extra_display_time_per_pixel_ms = inf").expect("valid toml");
        assert_eq!(config.automatic_display_time(50.0), Duration::MAX);
        assert_eq!(
            config.automatic_display_time(0.0),
            Duration::from_millis(DEFAULT_ANIMATION_DURATION_MS + DEFAULT_DISPLAY_TIME_MS)
        );
    }

    #[test]
    fn huge_millisecond_settings_saturate() {
        let config = Config {
            animation_duration_ms: u64::MAX,
            display_time_ms: u64::MAX,
            extra_display_time_per_pixel_ms: f32::MAX,
            ..Config::default()
        };
        assert_eq!(config.automatic_display_time(1_000.0), Duration::MAX);
        assert_eq!(config.entry_duration(), Duration::from_millis(u64::MAX));
    }
}
