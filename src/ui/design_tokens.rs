// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the chrome around banners.
//!
//! Banner colors and fonts come from the design document (see
//! [`crate::design`]). These tokens only cover what the library draws on its
//! own: the icon badge, the action button shape and the demo screen.
//!
//! ```
//! use iced_banners::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let translucent_bar = Color {
//!     a: opacity::OVERLAY_MEDIUM,
//!     ..palette::PRIMARY_500
//! };
//! let padding = spacing::SM; // 12px
//! ```

pub mod palette {
    use iced::Color;

    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9); // Primary blue
}

pub mod opacity {
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;
}

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
}

pub mod sizing {
    /// Demo screen buttons.
    pub const BUTTON_HEIGHT: f32 = 36.0;
    /// Height of the simulated navigation bar.
    pub const NAVIGATION_BAR_HEIGHT: f32 = 44.0;
}

pub mod typography {
    /// Navigation bar title
    pub const TITLE_SM: f32 = 18.0;

    /// Standard body - demo button labels
    pub const BODY: f32 = 14.0;
}

pub mod border {
    /// Medium border - icon badge outline
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
}

const _: () = {
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::XS > spacing::XXS);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < opacity::OPAQUE);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(sizing::NAVIGATION_BAR_HEIGHT > sizing::BUTTON_HEIGHT);
};
