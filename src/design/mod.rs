// SPDX-License-Identifier: MPL-2.0
//! Per-type banner design.
//!
//! A design document maps each notification type (`message`, `warning`,
//! `error`, `success`) to its colors, fonts, icon and button styling. The
//! default document is embedded in the binary and parsed once per process;
//! hosts may replace it wholesale with their own file.
//!
//! # Examples
//!
//! ```
//! use iced_banners::design::DesignConfig;
//! use iced_banners::ui::notifications::Kind;
//!
//! let design = DesignConfig::bundled();
//! let style = design.style(Kind::Error);
//! assert_eq!(style.text_color, iced::Color::WHITE);
//! ```

use crate::config::{BUTTON_FONT_SIZE, DEFAULT_ICON_SIZE};
use crate::error::{DesignError, Result};
use crate::ui::notifications::Kind;
use iced::{Color, Vector};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, OnceLock};

#[derive(RustEmbed)]
#[folder = "assets/design/"]
struct Asset;

const DEFAULT_DESIGN_FILE: &str = "default.toml";

static BUNDLED: OnceLock<Arc<DesignConfig>> = OnceLock::new();

/// Font request handed to the renderer and to text measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    /// Family name; `None` selects the toolkit default.
    pub name: Option<String>,
    pub size: f32,
    pub bold: bool,
}

impl FontSpec {
    #[must_use]
    pub fn system(size: f32, bold: bool) -> Self {
        Self {
            name: None,
            size,
            bold,
        }
    }
}

/// Styling of the optional action button.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonStyle {
    pub background_color: Color,
    pub title_color: Color,
    pub title_shadow_color: Color,
    pub title_shadow_offset: Vector,
    pub font: FontSpec,
}

/// Resolved style of one notification type.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub background_color: Color,
    pub text_color: Color,
    pub content_text_color: Color,
    pub title_font: FontSpec,
    pub content_font: FontSpec,
    /// Resource name of the default icon for this type.
    pub image_name: String,
    pub icon_size: f32,
    pub shadow_color: Color,
    pub shadow_offset: Vector,
    pub button: ButtonStyle,
}

/// Lookup table from notification type to [`Style`].
///
/// Lookups are pure. A `DesignConfig` is never mutated once built; swapping
/// designs means building a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignConfig {
    styles: HashMap<Kind, Style>,
}

impl DesignConfig {
    /// Returns the design embedded in the library, parsed on first use.
    ///
    /// # Panics
    ///
    /// Panics if the embedded document is missing or malformed, which can
    /// only happen with a broken build.
    pub fn bundled() -> Arc<DesignConfig> {
        BUNDLED
            .get_or_init(|| {
                let file =
                    Asset::get(DEFAULT_DESIGN_FILE).expect("Bundled design document is missing.");
                let content = String::from_utf8_lossy(file.data.as_ref());
                let design =
                    DesignConfig::from_toml_str(&content).expect("Bundled design is malformed.");
                log::debug!("loaded bundled banner design");
                Arc::new(design)
            })
            .clone()
    }

    /// Parses a design document. Every notification type must be present.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: HashMap<String, RawStyle> =
            toml::from_str(content).map_err(|err| DesignError::Syntax(err.to_string()))?;

        let mut styles = HashMap::with_capacity(Kind::ALL.len());
        for kind in Kind::ALL {
            let key = kind.design_key();
            let entry = raw.get(key).ok_or(DesignError::MissingKind(key))?;
            styles.insert(kind, entry.resolve(key)?);
        }

        for key in raw.keys() {
            if !Kind::ALL.iter().any(|kind| kind.design_key() == key) {
                log::debug!("ignoring design table for unknown type '{}'", key);
            }
        }

        Ok(Self { styles })
    }

    /// Reads and parses a design document from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|err| DesignError::Unreadable(format!("{}: {}", path.display(), err)))?;
        Self::from_toml_str(&content)
    }

    /// Returns the style for a notification type.
    #[must_use]
    pub fn style(&self, kind: Kind) -> &Style {
        // Construction guarantees every kind is present.
        &self.styles[&kind]
    }
}

#[derive(Debug, Deserialize)]
struct RawStyle {
    background_color: String,
    text_color: String,
    content_text_color: Option<String>,
    title_font_name: Option<String>,
    #[serde(default = "default_title_font_size")]
    title_font_size: f32,
    content_font_name: Option<String>,
    #[serde(default = "default_content_font_size")]
    content_font_size: f32,
    #[serde(default)]
    image_name: String,
    #[serde(default = "default_icon_size")]
    icon_size: f32,
    shadow_color: Option<String>,
    #[serde(default)]
    shadow_offset_x: f32,
    #[serde(default)]
    shadow_offset_y: f32,
    button_background_color: Option<String>,
    button_title_text_color: Option<String>,
    button_title_shadow_color: Option<String>,
    #[serde(default)]
    button_title_shadow_offset_x: f32,
    #[serde(default)]
    button_title_shadow_offset_y: f32,
}

fn default_title_font_size() -> f32 {
    14.0
}

fn default_content_font_size() -> f32 {
    12.0
}

fn default_icon_size() -> f32 {
    DEFAULT_ICON_SIZE
}

impl RawStyle {
    fn resolve(&self, kind: &'static str) -> std::result::Result<Style, DesignError> {
        let color = |field: &'static str, value: &str| {
            value.parse::<Color>().ok().ok_or_else(|| DesignError::InvalidColor {
                kind,
                field,
                value: value.to_string(),
            })
        };
        let optional = |field: &'static str, value: &Option<String>| match value {
            Some(value) if !value.is_empty() => color(field, value.as_str()).map(Some),
            _ => Ok(None),
        };

        let background_color = color("background_color", self.background_color.as_str())?;
        let text_color = color("text_color", self.text_color.as_str())?;
        let content_text_color =
            optional("content_text_color", &self.content_text_color)?.unwrap_or(text_color);
        let shadow_color = optional("shadow_color", &self.shadow_color)?.unwrap_or(Color::TRANSPARENT);

        let button_background_color = optional("button_background_color", &self.button_background_color)?
            .unwrap_or(background_color);
        let button_title_color =
            optional("button_title_text_color", &self.button_title_text_color)?.unwrap_or(text_color);
        let button_title_shadow_color =
            optional("button_title_shadow_color", &self.button_title_shadow_color)?
                .unwrap_or(shadow_color);

        Ok(Style {
            background_color,
            text_color,
            content_text_color,
            title_font: FontSpec {
                name: non_empty(&self.title_font_name),
                size: self.title_font_size,
                bold: true,
            },
            content_font: FontSpec {
                name: non_empty(&self.content_font_name),
                size: self.content_font_size,
                bold: false,
            },
            image_name: self.image_name.clone(),
            icon_size: self.icon_size,
            shadow_color,
            shadow_offset: Vector::new(self.shadow_offset_x, self.shadow_offset_y),
            button: ButtonStyle {
                background_color: button_background_color,
                title_color: button_title_color,
                title_shadow_color: button_title_shadow_color,
                title_shadow_offset: Vector::new(
                    self.button_title_shadow_offset_x,
                    self.button_title_shadow_offset_y,
                ),
                font: FontSpec::system(BUTTON_FONT_SIZE, true),
            },
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|name| !name.is_empty()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const MINIMAL: &str = r##"
        [message]
        background_color = "#000000"
        text_color = "#FFFFFF"
        [warning]
        background_color = "#111111"
        text_color = "#FFFFFF"
        [error]
        background_color = "#FF0000"
        text_color = "#FFFFFF"
        [success]
        background_color = "#00FF00"
        text_color = "#FFFFFF"
    "##;

    #[test]
    fn bundled_design_covers_every_kind() {
        let design = DesignConfig::bundled();
        for kind in Kind::ALL {
            let style = design.style(kind);
            assert!(!style.image_name.is_empty());
            assert!(style.icon_size > 0.0);
        }
    }

    #[test]
    fn bundled_design_is_parsed_once() {
        let first = DesignConfig::bundled();
        let second = DesignConfig::bundled();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn background_colors_are_distinct() {
        let design = DesignConfig::bundled();
        let colors: Vec<Color> = Kind::ALL
            .iter()
            .map(|kind| design.style(*kind).background_color)
            .collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn optional_colors_fall_back_to_text_color() {
        let design = DesignConfig::from_toml_str(MINIMAL).expect("minimal design parses");
        let style = design.style(Kind::Error);
        assert_eq!(style.content_text_color, style.text_color);
        assert_eq!(style.button.title_color, style.text_color);
        assert_eq!(style.button.background_color, style.background_color);
        assert_eq!(style.icon_size, DEFAULT_ICON_SIZE);
        assert!(style.title_font.bold);
        assert!(!style.content_font.bold);
    }

    #[test]
    fn missing_kind_is_rejected() {
        let content = r##"
            [message]
            background_color = "#000000"
            text_color = "#FFFFFF"
        "##;
        let err = DesignConfig::from_toml_str(content).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Design(DesignError::MissingKind(_))
        ));
    }

    #[test]
    fn invalid_color_is_rejected() {
        let content = MINIMAL.replace("#FF0000", "red-ish");
        let err = DesignConfig::from_toml_str(&content).unwrap_err();
        match err {
            crate::error::Error::Design(DesignError::InvalidColor { kind, field, value }) => {
                assert_eq!(kind, "error");
                assert_eq!(field, "background_color");
                assert_eq!(value, "red-ish");
            }
            other => panic!("expected invalid color, got {other:?}"),
        }
    }

    #[test]
    fn syntax_error_is_rejected() {
        let err = DesignConfig::from_toml_str("[message\nbroken").unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Design(DesignError::Syntax(_))
        ));
    }

    #[test]
    fn empty_font_name_means_system_font() {
        let content = MINIMAL.replace(
            "[success]",
            "[success]\ntitle_font_name = \"\"\ncontent_font_name = \"Serif\"",
        );
        let design = DesignConfig::from_toml_str(&content).expect("design parses");
        let style = design.style(Kind::Success);
        assert_eq!(style.title_font.name, None);
        assert_eq!(style.content_font.name.as_deref(), Some("Serif"));
    }

    #[test]
    fn from_path_reads_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("design.toml");
        fs::write(&path, MINIMAL).expect("failed to write design");

        let design = DesignConfig::from_path(&path).expect("design loads");
        assert_eq!(
            design.style(Kind::Success).background_color,
            Color::from_rgb8(0, 255, 0)
        );
    }

    #[test]
    fn from_missing_path_is_unreadable() {
        let dir = tempdir().expect("failed to create temp dir");
        let err = DesignConfig::from_path(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Design(DesignError::Unreadable(_))
        ));
    }
}
