// SPDX-License-Identifier: MPL-2.0
//! Tap and swipe recognition on the active banner.

use super::notification::Position;
use iced::Point;

/// Vertical swipe direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Up,
    Down,
}

impl SwipeDirection {
    /// The swipe that sends a banner at `position` back where it came from.
    #[must_use]
    pub fn dismissing(position: Position) -> Self {
        match position {
            Position::Top | Position::NavBarOverlay => SwipeDirection::Up,
            Position::Bottom => SwipeDirection::Down,
        }
    }
}

/// Recognized pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Tap,
    Swipe(SwipeDirection),
}

/// Turns press, move and release events into a [`Gesture`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureTracker {
    cursor: Option<Point>,
    pressed_at: Option<Point>,
}

impl GestureTracker {
    pub fn moved(&mut self, position: Point) {
        self.cursor = Some(position);
    }

    pub fn pressed(&mut self) {
        self.pressed_at = Some(self.cursor.unwrap_or(Point::ORIGIN));
    }

    /// Ends the gesture. Returns `None` when no press was recorded.
    pub fn released(&mut self, threshold: f32) -> Option<Gesture> {
        let origin = self.pressed_at.take()?;
        let end = self.cursor.unwrap_or(origin);
        let delta = end.y - origin.y;

        Some(if delta <= -threshold {
            Gesture::Swipe(SwipeDirection::Up)
        } else if delta >= threshold {
            Gesture::Swipe(SwipeDirection::Down)
        } else {
            Gesture::Tap
        })
    }

    /// Forgets a press in progress, e.g. when the banner goes away.
    pub fn reset(&mut self) {
        self.pressed_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release_in_place_is_a_tap() {
        let mut tracker = GestureTracker::default();
        tracker.moved(Point::new(10.0, 10.0));
        tracker.pressed();
        tracker.moved(Point::new(12.0, 14.0));
        assert_eq!(tracker.released(20.0), Some(Gesture::Tap));
    }

    #[test]
    fn upward_drag_is_an_up_swipe() {
        let mut tracker = GestureTracker::default();
        tracker.moved(Point::new(10.0, 60.0));
        tracker.pressed();
        tracker.moved(Point::new(10.0, 30.0));
        assert_eq!(
            tracker.released(20.0),
            Some(Gesture::Swipe(SwipeDirection::Up))
        );
    }

    #[test]
    fn downward_drag_is_a_down_swipe() {
        let mut tracker = GestureTracker::default();
        tracker.moved(Point::new(10.0, 30.0));
        tracker.pressed();
        tracker.moved(Point::new(10.0, 80.0));
        assert_eq!(
            tracker.released(20.0),
            Some(Gesture::Swipe(SwipeDirection::Down))
        );
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut tracker = GestureTracker::default();
        assert_eq!(tracker.released(20.0), None);

        tracker.pressed();
        tracker.reset();
        assert_eq!(tracker.released(20.0), None);
    }

    #[test]
    fn dismissing_swipe_reverses_entry() {
        assert_eq!(SwipeDirection::dismissing(Position::Top), SwipeDirection::Up);
        assert_eq!(
            SwipeDirection::dismissing(Position::NavBarOverlay),
            SwipeDirection::Up
        );
        assert_eq!(
            SwipeDirection::dismissing(Position::Bottom),
            SwipeDirection::Down
        );
    }
}
