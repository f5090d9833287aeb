// SPDX-License-Identifier: MPL-2.0
//! Banner geometry.
//!
//! `compute` sizes a banner to its content and the container width. It is a
//! pure function of its inputs: the same request and text measurement always
//! produce the same frames.
//!
//! Layout, left to right: `[2p] [icon] [2p] [title / subtitle] [p] [button] [p]`
//! where `p` is the padding.

use super::chrome::Surface;
use super::notification::{Icon, NotificationSpec, Position};
use crate::config::{
    BUTTON_CONTENT_INSET, BUTTON_HEIGHT, MIN_PADDING, NAV_BAR_OVERLAY_EXTRA_PADDING,
    OVERSHOOT_INSET, SUBTITLE_GAP,
};
use crate::design::{FontSpec, Style};
use iced::{Rectangle, Size};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Measures wrapped text. Provided by the host toolkit.
pub trait TextMeasure {
    /// Size of `text` drawn with `font`, wrapped at word boundaries to fit
    /// `max_width`. Empty text measures as zero.
    fn measure(&self, text: &str, font: &FontSpec, max_width: f32) -> Size;
}

/// Approximate measurement from average glyph metrics.
///
/// Each display column (as reported by `unicode-width`) advances by
/// `advance * font size`; lines are `line_height * font size` tall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphMetrics {
    pub advance: f32,
    pub line_height: f32,
    /// Width multiplier applied to bold fonts.
    pub bold_factor: f32,
}

impl Default for GlyphMetrics {
    fn default() -> Self {
        Self {
            advance: 0.55,
            line_height: 1.2,
            bold_factor: 1.08,
        }
    }
}

impl GlyphMetrics {
    fn column_width(&self, font: &FontSpec) -> f32 {
        let factor = if font.bold { self.bold_factor } else { 1.0 };
        font.size * self.advance * factor
    }

    /// Widths of the lines `text` wraps into.
    fn wrap(&self, text: &str, font: &FontSpec, max_width: f32) -> Vec<f32> {
        let column = self.column_width(font);
        let mut lines = Vec::new();

        for paragraph in text.split('\n') {
            let mut current: Option<f32> = None;

            for word in paragraph.split_whitespace() {
                let word_width = word.width() as f32 * column;

                match current {
                    Some(width) if width + column + word_width <= max_width => {
                        current = Some(width + column + word_width);
                    }
                    _ => {
                        if let Some(width) = current.take() {
                            lines.push(width);
                        }
                        if word_width <= max_width {
                            current = Some(word_width);
                        } else {
                            // Break inside the word; at least one glyph per line.
                            let mut width = 0.0;
                            for ch in word.chars() {
                                let glyph = ch.width().unwrap_or(0) as f32 * column;
                                if width > 0.0 && width + glyph > max_width {
                                    lines.push(width);
                                    width = 0.0;
                                }
                                width += glyph;
                            }
                            current = Some(width);
                        }
                    }
                }
            }

            if let Some(width) = current {
                lines.push(width);
            }
        }

        lines
    }
}

impl TextMeasure for GlyphMetrics {
    fn measure(&self, text: &str, font: &FontSpec, max_width: f32) -> Size {
        let lines = self.wrap(text, font, max_width);
        let widest = lines.iter().copied().fold(0.0_f32, f32::max);
        Size::new(
            widest.min(max_width.max(0.0)),
            lines.len() as f32 * font.size * self.line_height,
        )
    }
}

/// Everything the layout needs to know about one banner.
#[derive(Debug, Clone)]
pub struct LayoutRequest<'a> {
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    pub icon: Option<Size>,
    pub button_title: Option<&'a str>,
    pub position: Position,
    pub width: f32,
    pub style: &'a Style,
    /// Extend the background above a top banner.
    pub mask_top_overshoot: bool,
}

impl<'a> LayoutRequest<'a> {
    /// Builds the request for `spec` drawn with `style` into `surface`.
    pub fn new(
        spec: &'a NotificationSpec,
        icon: Option<&Icon>,
        style: &'a Style,
        surface: &Surface,
    ) -> Self {
        Self {
            title: spec.title(),
            subtitle: spec.subtitle(),
            icon: icon.map(|icon| icon.size),
            button_title: spec.button().map(|button| button.title.as_str()),
            position: spec.position(),
            width: surface.size.width,
            style,
            mask_top_overshoot: surface.chrome.masks_top_overshoot(),
        }
    }
}

/// Frames of one banner, relative to its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BannerLayout {
    pub size: Size,
    pub padding: f32,
    pub icon: Option<Rectangle>,
    pub title: Rectangle,
    pub subtitle: Option<Rectangle>,
    pub button: Option<Rectangle>,
    /// Background fill; may extend past the content box on the edge the
    /// banner travels from.
    pub background: Rectangle,
}

/// Icon drawn for `spec`: its own, else the type default from `style`.
#[must_use]
pub fn resolve_icon(spec: &NotificationSpec, style: &Style) -> Option<Icon> {
    spec.icon().cloned().or_else(|| {
        (!style.image_name.is_empty()).then(|| {
            Icon::new(
                style.image_name.clone(),
                Size::new(style.icon_size, style.icon_size),
            )
        })
    })
}

/// Padding used around content at `position`.
#[must_use]
pub fn padding_for(position: Position) -> f32 {
    match position {
        Position::NavBarOverlay => MIN_PADDING + NAV_BAR_OVERLAY_EXTRA_PADDING,
        Position::Top | Position::Bottom => MIN_PADDING,
    }
}

/// Computes the banner frames.
pub fn compute(request: &LayoutRequest<'_>, measure: &dyn TextMeasure) -> BannerLayout {
    let padding = padding_for(request.position);
    let width = request.width;
    let style = request.style;

    let mut text_left = 2.0 * padding;
    let mut icon = request.icon.map(|size| {
        text_left += size.width + 2.0 * padding;
        Rectangle {
            x: 2.0 * padding,
            y: padding,
            width: size.width,
            height: size.height,
        }
    });

    let button_width = request.button_title.map(|title| {
        measure.measure(title, &style.button.font, f32::INFINITY).width
            + 2.0 * BUTTON_CONTENT_INSET
    });
    let text_right = button_width.map_or(0.0, |button| button + padding);

    let text_width = (width - padding - text_left - text_right).max(0.0);

    let title_height = measure.measure(request.title, &style.title_font, text_width).height;
    let title = Rectangle {
        x: text_left,
        y: padding,
        width: text_width,
        height: title_height,
    };

    let subtitle = request.subtitle.map(|subtitle| Rectangle {
        x: text_left,
        y: title.y + title.height + SUBTITLE_GAP,
        width: text_width,
        height: measure.measure(subtitle, &style.content_font, text_width).height,
    });

    let content_bottom = subtitle.map_or(title.y + title.height, |s| s.y + s.height);
    let mut height = content_bottom + padding;

    if let Some(frame) = icon.as_mut() {
        let icon_bottom = frame.y + frame.height + padding;
        if icon_bottom > height {
            height = icon_bottom;
        } else {
            frame.y = (height / 2.0).round() - frame.height / 2.0;
        }
    }

    let button = button_width.map(|button_width| Rectangle {
        x: width - text_right,
        y: (height / 2.0 - BUTTON_HEIGHT / 2.0).round(),
        width: button_width,
        height: BUTTON_HEIGHT,
    });

    let mut background = Rectangle {
        x: 0.0,
        y: 0.0,
        width,
        height,
    };
    match request.position {
        Position::Top if request.mask_top_overshoot => {
            background.y -= OVERSHOOT_INSET;
            background.height += OVERSHOOT_INSET;
        }
        Position::NavBarOverlay => {
            background.y -= OVERSHOOT_INSET;
            background.height += OVERSHOOT_INSET;
        }
        Position::Bottom => background.height += OVERSHOOT_INSET,
        Position::Top => {}
    }

    BannerLayout {
        size: Size::new(width, height),
        padding,
        icon,
        title,
        subtitle,
        button,
        background,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::DesignConfig;
    use crate::ui::notifications::Kind;

    /// One 20-unit line per paragraph, 8 units per byte.
    struct FixedLines;

    impl TextMeasure for FixedLines {
        fn measure(&self, text: &str, _font: &FontSpec, max_width: f32) -> Size {
            if text.is_empty() {
                return Size::ZERO;
            }
            let lines = text.split('\n').count() as f32;
            Size::new((text.len() as f32 * 8.0).min(max_width), lines * 20.0)
        }
    }

    fn request<'a>(style: &'a Style) -> LayoutRequest<'a> {
        LayoutRequest {
            title: "Title",
            subtitle: None,
            icon: None,
            button_title: None,
            position: Position::Top,
            width: 320.0,
            style,
            mask_top_overshoot: false,
        }
    }

    #[test]
    fn title_only_banner() {
        let design = DesignConfig::bundled();
        let layout = compute(&request(design.style(Kind::Message)), &FixedLines);

        assert_eq!(layout.title, Rectangle { x: 30.0, y: 15.0, width: 275.0, height: 20.0 });
        assert_eq!(layout.size, Size::new(320.0, 50.0));
        assert_eq!(layout.background, Rectangle { x: 0.0, y: 0.0, width: 320.0, height: 50.0 });
        assert!(layout.icon.is_none());
        assert!(layout.button.is_none());
    }

    #[test]
    fn tall_icon_grows_banner() {
        let design = DesignConfig::bundled();
        let mut req = request(design.style(Kind::Message));
        req.icon = Some(Size::new(32.0, 32.0));
        let layout = compute(&req, &FixedLines);

        assert_eq!(layout.title.x, 92.0);
        assert_eq!(layout.title.width, 320.0 - 15.0 - 92.0);
        assert_eq!(layout.icon, Some(Rectangle { x: 30.0, y: 15.0, width: 32.0, height: 32.0 }));
        assert_eq!(layout.size.height, 62.0);
    }

    #[test]
    fn short_icon_is_centered_vertically() {
        let design = DesignConfig::bundled();
        let mut req = request(design.style(Kind::Message));
        req.icon = Some(Size::new(32.0, 32.0));
        req.subtitle = Some("Details");
        let layout = compute(&req, &FixedLines);

        let subtitle = layout.subtitle.expect("subtitle frame");
        assert_eq!(subtitle.y, 40.0);
        assert_eq!(layout.size.height, 75.0);
        // round(75 / 2) - 32 / 2
        assert_eq!(layout.icon.map(|icon| icon.y), Some(22.0));
    }

    #[test]
    fn button_reserves_right_inset_and_is_centered() {
        let design = DesignConfig::bundled();
        let mut req = request(design.style(Kind::Error));
        req.button_title = Some("OK");
        let layout = compute(&req, &FixedLines);

        let button = layout.button.expect("button frame");
        assert_eq!(button.width, 26.0);
        assert_eq!(button.x, 320.0 - 41.0);
        assert_eq!(button.height, BUTTON_HEIGHT);
        assert_eq!(button.y, 10.0);
        assert_eq!(layout.title.width, 320.0 - 15.0 - 30.0 - 41.0);
    }

    #[test]
    fn overlay_uses_wider_padding_and_masks_top() {
        let design = DesignConfig::bundled();
        let mut req = request(design.style(Kind::Message));
        req.position = Position::NavBarOverlay;
        let layout = compute(&req, &FixedLines);

        assert_eq!(layout.padding, 25.0);
        assert_eq!(layout.title.x, 50.0);
        assert_eq!(layout.size.height, 70.0);
        assert_eq!(layout.background.y, -OVERSHOOT_INSET);
        assert_eq!(layout.background.height, 70.0 + OVERSHOOT_INSET);
    }

    #[test]
    fn top_banner_masks_only_when_requested() {
        let design = DesignConfig::bundled();
        let mut req = request(design.style(Kind::Message));
        req.mask_top_overshoot = true;
        let layout = compute(&req, &FixedLines);
        assert_eq!(layout.background.y, -OVERSHOOT_INSET);
    }

    #[test]
    fn bottom_banner_extends_background_downward() {
        let design = DesignConfig::bundled();
        let mut req = request(design.style(Kind::Message));
        req.position = Position::Bottom;
        let layout = compute(&req, &FixedLines);

        assert_eq!(layout.background.y, 0.0);
        assert_eq!(layout.background.height, 50.0 + OVERSHOOT_INSET);
    }

    #[test]
    fn narrow_container_never_yields_negative_text_width() {
        let design = DesignConfig::bundled();
        let mut req = request(design.style(Kind::Message));
        req.width = 40.0;
        req.icon = Some(Size::new(32.0, 32.0));
        let layout = compute(&req, &FixedLines);
        assert_eq!(layout.title.width, 0.0);
    }

    #[test]
    fn glyph_metrics_wraps_at_word_boundaries() {
        let metrics = GlyphMetrics {
            advance: 1.0,
            line_height: 1.0,
            bold_factor: 1.0,
        };
        let font = FontSpec::system(10.0, false);

        // "aaaa bbbb" is 90 wide on one line.
        assert_eq!(metrics.measure("aaaa bbbb", &font, 100.0), Size::new(90.0, 10.0));
        // Too narrow: two lines of 40.
        assert_eq!(metrics.measure("aaaa bbbb", &font, 60.0), Size::new(40.0, 20.0));
    }

    #[test]
    fn glyph_metrics_breaks_long_words() {
        let metrics = GlyphMetrics {
            advance: 1.0,
            line_height: 1.0,
            bold_factor: 1.0,
        };
        let font = FontSpec::system(10.0, false);
        let size = metrics.measure("abcdefghij", &font, 30.0);
        assert_eq!(size.height, 40.0);
        assert_eq!(size.width, 30.0);
    }

    #[test]
    fn glyph_metrics_counts_wide_characters() {
        let metrics = GlyphMetrics {
            advance: 1.0,
            line_height: 1.0,
            bold_factor: 1.0,
        };
        let font = FontSpec::system(10.0, false);
        assert_eq!(metrics.measure("日本", &font, 100.0).width, 40.0);
    }

    #[test]
    fn empty_text_measures_zero() {
        let metrics = GlyphMetrics::default();
        let font = FontSpec::system(14.0, true);
        assert_eq!(metrics.measure("", &font, 100.0), Size::ZERO);
    }

    #[test]
    fn spec_icon_overrides_type_default() {
        let design = DesignConfig::bundled();
        let style = design.style(Kind::Warning);

        let plain = NotificationSpec::warning("w");
        let default_icon = resolve_icon(&plain, style).expect("type default icon");
        assert_eq!(default_icon.name, style.image_name);

        let custom = NotificationSpec::warning("w").with_icon(Icon::new("mine.png", Size::new(20.0, 24.0)));
        let icon = resolve_icon(&custom, style).expect("custom icon");
        assert_eq!(icon.name, "mine.png");
        assert_eq!(icon.size, Size::new(20.0, 24.0));
    }
}
