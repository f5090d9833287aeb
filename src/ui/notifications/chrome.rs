// SPDX-License-Identifier: MPL-2.0
//! Host surface description.
//!
//! The host tells the queue how large its container is and which bars
//! (status, navigation, toolbar) occupy its edges. Banners use this to find
//! their resting position and to decide whether the background must extend
//! past the top edge.

use super::notification::Position;
use iced::Size;

/// Navigation bar across the top of the host surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationBar {
    pub height: f32,
    pub hidden: bool,
    /// Opaque bars hide whatever is drawn behind them.
    pub opaque: bool,
}

/// Bars reserved by the host around its content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Chrome {
    pub status_bar_height: f32,
    pub navigation_bar: Option<NavigationBar>,
    /// Height of a visible bottom toolbar.
    pub toolbar_height: Option<f32>,
    /// Whether the host content extends under the status bar.
    pub content_under_status_bar: bool,
}

impl Chrome {
    /// Vertical distance from the top edge a non-bottom banner must clear.
    #[must_use]
    pub fn vertical_offset(&self, position: Position) -> f32 {
        let status_bar = if position == Position::NavBarOverlay {
            0.0
        } else {
            self.status_bar_height
        };

        match self.navigation_bar {
            Some(bar) => {
                let under_status_bar = self.content_under_status_bar || !bar.hidden;
                let mut offset = 0.0;
                if !bar.hidden && position != Position::NavBarOverlay {
                    offset = bar.height;
                }
                if under_status_bar {
                    offset += status_bar;
                }
                offset
            }
            None => status_bar,
        }
    }

    /// Whether a top banner must extend its background upward so spring
    /// overshoot never reveals a gap.
    #[must_use]
    pub fn masks_top_overshoot(&self) -> bool {
        self.navigation_bar
            .is_some_and(|bar| bar.hidden || bar.opaque)
    }

    /// Space reserved at the bottom edge.
    #[must_use]
    pub fn bottom_inset(&self) -> f32 {
        self.toolbar_height.unwrap_or(0.0)
    }
}

/// Container the banners are drawn into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub size: Size,
    pub chrome: Chrome,
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(Size::ZERO)
    }
}

impl Surface {
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            chrome: Chrome::default(),
        }
    }

    #[must_use]
    pub fn with_chrome(mut self, chrome: Chrome) -> Self {
        self.chrome = chrome;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav_bar(hidden: bool, opaque: bool) -> NavigationBar {
        NavigationBar {
            height: 44.0,
            hidden,
            opaque,
        }
    }

    #[test]
    fn bare_surface_clears_status_bar() {
        let chrome = Chrome {
            status_bar_height: 20.0,
            ..Chrome::default()
        };
        assert_eq!(chrome.vertical_offset(Position::Top), 20.0);
        assert_eq!(chrome.vertical_offset(Position::NavBarOverlay), 0.0);
    }

    #[test]
    fn visible_navigation_bar_pushes_top_banner_below_it() {
        let chrome = Chrome {
            status_bar_height: 20.0,
            navigation_bar: Some(nav_bar(false, false)),
            ..Chrome::default()
        };
        assert_eq!(chrome.vertical_offset(Position::Top), 64.0);
    }

    #[test]
    fn overlay_ignores_navigation_bar() {
        let chrome = Chrome {
            status_bar_height: 20.0,
            navigation_bar: Some(nav_bar(false, false)),
            ..Chrome::default()
        };
        assert_eq!(chrome.vertical_offset(Position::NavBarOverlay), 0.0);
    }

    #[test]
    fn hidden_navigation_bar_only_counts_status_bar_when_under_it() {
        let mut chrome = Chrome {
            status_bar_height: 20.0,
            navigation_bar: Some(nav_bar(true, false)),
            ..Chrome::default()
        };
        assert_eq!(chrome.vertical_offset(Position::Top), 0.0);

        chrome.content_under_status_bar = true;
        assert_eq!(chrome.vertical_offset(Position::Top), 20.0);
    }

    #[test]
    fn overshoot_masking_needs_hidden_or_opaque_bar() {
        let mut chrome = Chrome::default();
        assert!(!chrome.masks_top_overshoot());

        chrome.navigation_bar = Some(nav_bar(false, false));
        assert!(!chrome.masks_top_overshoot());

        chrome.navigation_bar = Some(nav_bar(true, false));
        assert!(chrome.masks_top_overshoot());

        chrome.navigation_bar = Some(nav_bar(false, true));
        assert!(chrome.masks_top_overshoot());
    }

    #[test]
    fn bottom_inset_follows_toolbar() {
        let mut chrome = Chrome::default();
        assert_eq!(chrome.bottom_inset(), 0.0);
        chrome.toolbar_height = Some(44.0);
        assert_eq!(chrome.bottom_inset(), 44.0);
    }
}
