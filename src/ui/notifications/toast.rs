// SPDX-License-Identifier: MPL-2.0
//! Banner rendering.
//!
//! The active banner is drawn full width at its animated position. Every
//! element sits at the frame computed by the layout, so what is drawn is
//! exactly what was measured.

use super::banner::Banner;
use super::layout::BannerLayout;
use super::manager::{Message, NotificationQueue};
use super::notification::Kind;
use crate::design::{ButtonStyle, FontSpec, Style};
use crate::ui::design_tokens::{border, radius};
use crate::ui::widgets::pinned;
use iced::font::{self, Font};
use iced::widget::image::{self, Handle};
use iced::widget::{button, container, mouse_area, text, Container, Stack};
use iced::{alignment, mouse, Background, Color, Element, Length, Point, Rectangle, Shadow, Theme, Vector};
use std::path::Path;

/// Banner widget.
pub struct Toast;

impl Toast {
    /// Renders the queue's active banner over the whole surface.
    ///
    /// Returns an empty element when nothing is displayed.
    pub fn view(queue: &NotificationQueue) -> Element<'_, Message> {
        match queue.active() {
            Some(banner) => pinned(
                Self::banner(banner, queue.config().icon_dir.as_deref()),
                banner.background_frame(),
            )
            .into(),
            None => Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into(),
        }
    }

    /// Renders one banner, sized to its background frame.
    fn banner<'a>(banner: &'a Banner, icon_dir: Option<&Path>) -> Element<'a, Message> {
        let layout = banner.layout();
        let style = banner.style();
        let spec = banner.spec();
        let local = |frame: Rectangle| to_background(layout, frame);

        let background = container(text(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .style({
                let style = style.clone();
                move |_theme: &Theme| background_style(&style)
            });

        let mut layers = Stack::new()
            .width(Length::Fixed(layout.background.width))
            .height(Length::Fixed(layout.background.height))
            .push(background);

        if let (Some(frame), Some(icon)) = (layout.icon, banner.icon()) {
            let path = icon_dir.map(|dir| dir.join(&icon.name));
            layers = layers.push(pinned(Self::icon(spec.kind(), style, path.as_deref()), local(frame)));
        }

        for layer in shadowed_label(
            spec.title(),
            &style.title_font,
            style.text_color,
            (style.shadow_color, style.shadow_offset),
            local(layout.title),
            false,
        ) {
            layers = layers.push(layer);
        }

        if let (Some(subtitle), Some(frame)) = (spec.subtitle(), layout.subtitle) {
            for layer in shadowed_label(
                subtitle,
                &style.content_font,
                style.content_text_color,
                (style.shadow_color, style.shadow_offset),
                local(frame),
                false,
            ) {
                layers = layers.push(layer);
            }
        }

        if let (Some(action), Some(frame)) = (spec.button(), layout.button) {
            layers = layers.push(pinned(
                Self::action_button(&action.title, &style.button, frame.size()),
                local(frame),
            ));
        }

        mouse_area(layers)
            .on_press(Message::Pressed)
            .interaction(mouse::Interaction::Pointer)
            .into()
    }

    /// Icon image, or a drawn badge when no image file is available.
    fn icon<'a>(kind: Kind, style: &Style, path: Option<&Path>) -> Element<'a, Message> {
        if let Some(path) = path.filter(|path| path.is_file()) {
            return image::Image::new(Handle::from_path(path))
                .width(Length::Fill)
                .height(Length::Fill)
                .into();
        }

        let color = style.text_color;
        let size = style.icon_size;
        Container::new(
            text(badge_glyph(kind))
                .size(size * 0.6)
                .font(BOLD)
                .color(color),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_theme: &Theme| container::Style {
            border: iced::Border {
                color,
                width: border::WIDTH_MD,
                radius: (size / 2.0).into(),
            },
            ..Default::default()
        })
        .into()
    }

    fn action_button<'a>(title: &'a str, style: &ButtonStyle, size: iced::Size) -> Element<'a, Message> {
        let frame = Rectangle::new(Point::ORIGIN, size);
        let mut label = Stack::new().width(Length::Fill).height(Length::Fill);
        for layer in shadowed_label(
            title,
            &style.font,
            style.title_color,
            (style.title_shadow_color, style.title_shadow_offset),
            frame,
            true,
        ) {
            label = label.push(layer);
        }

        let background = style.background_color;
        button(label)
            .padding(0)
            .width(Length::Fill)
            .height(Length::Fill)
            .on_press(Message::ButtonPressed)
            .style(move |_theme: &Theme, status| action_button_style(background, status))
            .into()
    }
}

const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// Text layers for `content`: an offset shadow copy when the shadow is
/// visible, then the text itself.
fn shadowed_label<'a>(
    content: &'a str,
    font: &FontSpec,
    color: Color,
    (shadow_color, shadow_offset): (Color, Vector),
    frame: Rectangle,
    centered: bool,
) -> Vec<Element<'a, Message>> {
    // Measured heights are approximate; leave room for one more line.
    let frame = if centered {
        frame
    } else {
        Rectangle {
            height: frame.height + font.size,
            ..frame
        }
    };

    let mut layers = Vec::with_capacity(2);
    if shadow_color.a > 0.0 && shadow_offset != Vector::ZERO {
        layers.push(pinned(label(content, font, shadow_color, centered), frame + shadow_offset).into());
    }
    layers.push(pinned(label(content, font, color, centered), frame).into());
    layers
}

fn label<'a>(content: &'a str, font: &FontSpec, color: Color, centered: bool) -> Element<'a, Message> {
    let widget = text(content)
        .size(font.size)
        .font(iced_font(font))
        .color(color);

    if centered {
        Container::new(widget)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into()
    } else {
        widget.width(Length::Fill).into()
    }
}

/// Maps a design font onto a renderer font.
///
/// Only the weight is carried over; family names from the design document
/// are resolved by the system font fallback.
fn iced_font(spec: &FontSpec) -> Font {
    if spec.bold {
        BOLD
    } else {
        Font::DEFAULT
    }
}

fn badge_glyph(kind: Kind) -> &'static str {
    match kind {
        Kind::Message => "i",
        Kind::Warning => "!",
        Kind::Error => "×",
        Kind::Success => "✓",
    }
}

/// Translates a banner frame into the background frame's coordinates.
fn to_background(layout: &BannerLayout, frame: Rectangle) -> Rectangle {
    Rectangle {
        x: frame.x - layout.background.x,
        y: frame.y - layout.background.y,
        ..frame
    }
}

fn background_style(style: &Style) -> container::Style {
    container::Style {
        background: Some(Background::Color(style.background_color)),
        shadow: Shadow {
            color: style.shadow_color,
            offset: style.shadow_offset,
            blur_radius: 0.0,
        },
        ..Default::default()
    }
}

fn action_button_style(background: Color, status: button::Status) -> button::Style {
    let shade = match status {
        button::Status::Hovered => 0.9,
        button::Status::Pressed => 0.8,
        button::Status::Active | button::Status::Disabled => 1.0,
    };

    button::Style {
        background: Some(Background::Color(Color {
            r: background.r * shade,
            g: background.g * shade,
            b: background.b * shade,
            ..background
        })),
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::DesignConfig;
    use iced::Size;

    #[test]
    fn background_style_uses_design_colors() {
        let design = DesignConfig::bundled();
        let style = design.style(Kind::Error);
        let container = background_style(style);

        assert_eq!(
            container.background,
            Some(Background::Color(style.background_color))
        );
        assert_eq!(container.shadow.offset, style.shadow_offset);
    }

    #[test]
    fn pressed_button_is_darker_than_idle() {
        let color = Color::from_rgb(0.8, 0.6, 0.4);
        let idle = action_button_style(color, button::Status::Active);
        let pressed = action_button_style(color, button::Status::Pressed);

        let red = |style: &button::Style| match style.background {
            Some(Background::Color(color)) => color.r,
            _ => panic!("expected a solid background"),
        };
        assert!(red(&pressed) < red(&idle));
    }

    #[test]
    fn frames_are_moved_into_background_space() {
        let layout = BannerLayout {
            size: Size::new(320.0, 60.0),
            padding: 15.0,
            icon: None,
            title: Rectangle::new(Point::new(30.0, 15.0), Size::new(200.0, 20.0)),
            subtitle: None,
            button: None,
            background: Rectangle::new(Point::new(0.0, -30.0), Size::new(320.0, 90.0)),
        };
        let title = to_background(&layout, layout.title);
        assert_eq!(title.x, 30.0);
        assert_eq!(title.y, 45.0);
        assert_eq!(title.size(), layout.title.size());
    }

    #[test]
    fn bold_fonts_map_to_bold_weight() {
        assert_eq!(iced_font(&FontSpec::system(14.0, true)).weight, font::Weight::Bold);
        assert_eq!(iced_font(&FontSpec::system(12.0, false)), Font::DEFAULT);
    }

    #[test]
    fn every_kind_has_a_badge() {
        for kind in Kind::ALL {
            assert!(!badge_glyph(kind).is_empty());
        }
    }
}
