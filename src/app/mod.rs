// SPDX-License-Identifier: MPL-2.0
//! Demo application showing every kind of banner.
//!
//! The `App` owns a single `NotificationQueue`, feeds it window and pointer
//! events and draws it over a screen of sample buttons. It also toggles a
//! simulated navigation bar so banner placement around host chrome can be
//! tried out.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message, Sample};

use crate::config;
use crate::ui::design_tokens::sizing::NAVIGATION_BAR_HEIGHT;
use crate::ui::notifications::{
    Callback, Chrome, DisplayDuration, NavigationBar, NotificationQueue, NotificationSpec,
    Notifier, Position, Surface,
};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state.
pub struct App {
    queue: NotificationQueue,
    notifier: Notifier,
    navigation_bar: NavigationBar,
    custom_design: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("queue", &self.queue)
            .field("navigation_bar", &self.navigation_bar)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot function; flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let settings = match flags.config.as_deref() {
            Some(path) => config::load_from_path(path),
            None => config::load(),
        }
        .unwrap_or_else(|err| {
            log::warn!("Using default banner settings: {err}");
            config::Config::default()
        });

        let navigation_bar = NavigationBar {
            height: NAVIGATION_BAR_HEIGHT,
            hidden: false,
            opaque: false,
        };
        let surface = Surface::new(Size::new(
            WINDOW_DEFAULT_WIDTH as f32,
            WINDOW_DEFAULT_HEIGHT as f32,
        ))
        .with_chrome(chrome(navigation_bar));

        let mut queue = NotificationQueue::new(settings).with_surface(surface);
        let notifier = queue.notifier();

        let app = App {
            queue,
            notifier,
            navigation_bar,
            custom_design: flags.design,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Iced Banners")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Banner(message) => self.queue.update(message),
            Message::Show(sample) => self.queue.enqueue(self.sample(sample)),
            Message::DismissActive => {
                if !self.queue.dismiss_active(None) {
                    log::debug!("nothing to dismiss");
                }
            }
            Message::ApplyCustomDesign => {
                if let Some(path) = self.custom_design.clone() {
                    self.queue.set_custom_design(&path);
                    self.queue.enqueue(
                        NotificationSpec::success("Updated to custom design file")
                            .with_subtitle("From now on, banners use the new design"),
                    );
                }
            }
            Message::ToggleNavigationBar => {
                self.navigation_bar.hidden = !self.navigation_bar.hidden;
                self.sync_chrome();
            }
            Message::ToggleNavigationBarOpacity => {
                self.navigation_bar.opaque = !self.navigation_bar.opaque;
                self.sync_chrome();
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            queue: &self.queue,
            navigation_bar: self.navigation_bar,
            custom_design_available: self.custom_design.is_some(),
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.queue.has_notifications()),
        ])
    }

    fn sync_chrome(&mut self) {
        let surface = Surface {
            chrome: chrome(self.navigation_bar),
            ..*self.queue.surface()
        };
        self.queue.set_surface(surface);
    }

    fn sample(&self, sample: Sample) -> NotificationSpec {
        match sample {
            Sample::Error => NotificationSpec::error("Something failed!")
                .with_subtitle("Cannot open the pod bay doors"),
            Sample::Warning => NotificationSpec::warning("Warning").with_subtitle(
                "Imminent singularity, please take shelter or wage Butlerian Jihad",
            ),
            Sample::Message => NotificationSpec::message("Info")
                .with_subtitle("Humans are required to submit for mandatory inspection!"),
            Sample::Success => NotificationSpec::success("Success")
                .with_subtitle("1 Ring delivered to Mount Doom"),
            Sample::WithButton => {
                let notifier = self.notifier.clone();
                let thanks: Callback = Arc::new(move || {
                    notifier.notify(NotificationSpec::success("Thanks for updating"));
                });
                NotificationSpec::success("Update available")
                    .with_subtitle("Please update our app. We added AI to replace you")
                    .with_button("Update", Some(thanks))
            }
            Sample::Endless => NotificationSpec::success("Endless")
                .with_subtitle(
                    "This message can not be dismissed and will not be hidden automatically. \
                     Tap the 'Dismiss active' button to dismiss the currently shown message",
                )
                .with_duration(DisplayDuration::Endless)
                .dismissible(false),
            Sample::LongDuration => NotificationSpec::success("Long")
                .with_subtitle("This message is displayed 10 seconds instead of the calculated value")
                .with_duration(DisplayDuration::Custom(Duration::from_secs(10)))
                .dismissible(false),
            Sample::LongText => NotificationSpec::success("Long Text")
                .with_subtitle(
                    "Lorem ipsum dolor sit amet, consetetur sadipscing elitr, sed diam nonumy \
                     eirmod tempor invidunt ut labore et dolore magna aliquyam erat, sed diam \
                     voluptua. At vero eos et accusam et justo duo dolores et ea rebum. Stet \
                     clita kasd gubergren, no sea takimata sanctus",
                )
                .dismissible(false),
            Sample::Bottom => NotificationSpec::success("Bottom")
                .with_subtitle("showing message at bottom of screen")
                .with_position(Position::Bottom)
                .dismissible(false),
        }
    }
}

fn chrome(navigation_bar: NavigationBar) -> Chrome {
    Chrome {
        navigation_bar: Some(navigation_bar),
        ..Chrome::default()
    }
}
