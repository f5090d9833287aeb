// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.
//!
//! A simulated navigation bar sits at the top of the window, the sample
//! buttons fill the rest and the active banner is stacked over everything.

use super::message::Sample;
use super::Message;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::notifications::{NavigationBar, NotificationQueue, Toast};
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{alignment, Background, Color, Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub queue: &'a NotificationQueue,
    pub navigation_bar: NavigationBar,
    pub custom_design_available: bool,
}

/// Renders the demo screen with the banner overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut column = Column::new().width(Length::Fill).height(Length::Fill);
    if !ctx.navigation_bar.hidden {
        column = column.push(navigation_bar(ctx.navigation_bar));
    }
    column = column.push(
        Container::new(samples(ctx.custom_design_available))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    );

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(column)
        .push(Toast::view(ctx.queue).map(Message::Banner))
        .into()
}

fn navigation_bar<'a>(bar: NavigationBar) -> Element<'a, Message> {
    let alpha = if bar.opaque {
        opacity::OPAQUE
    } else {
        opacity::OVERLAY_MEDIUM
    };
    Container::new(Text::new("Iced Banners").size(typography::TITLE_SM))
        .width(Length::Fill)
        .height(Length::Fixed(bar.height))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |theme: &Theme| iced::widget::container::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..palette::PRIMARY_500
            })),
            text_color: Some(theme.palette().text),
            ..Default::default()
        })
        .into()
}

fn samples<'a>(custom_design_available: bool) -> Element<'a, Message> {
    let sample = |label: &'a str, sample: Sample| action(label, Some(Message::Show(sample)));

    Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(sample("Error", Sample::Error))
                .push(sample("Warning", Sample::Warning))
                .push(sample("Message", Sample::Message))
                .push(sample("Success", Sample::Success)),
        )
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(sample("With button", Sample::WithButton))
                .push(sample("Endless", Sample::Endless))
                .push(sample("10 seconds", Sample::LongDuration)),
        )
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(sample("Long text", Sample::LongText))
                .push(sample("Bottom", Sample::Bottom))
                .push(action(
                    "Custom design",
                    custom_design_available.then_some(Message::ApplyCustomDesign),
                )),
        )
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(action("Toggle navigation bar", Some(Message::ToggleNavigationBar)))
                .push(action(
                    "Toggle navigation bar opacity",
                    Some(Message::ToggleNavigationBarOpacity),
                ))
                .push(action("Dismiss active", Some(Message::DismissActive))),
        )
        .into()
}

fn action(label: &str, on_press: Option<Message>) -> Element<'_, Message> {
    button(Text::new(label).size(typography::BODY))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::XXS, spacing::SM])
        .on_press_maybe(on_press)
        .into()
}
