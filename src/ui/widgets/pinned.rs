// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that places its content at a fixed frame and clips it.
//!
//! The frame is relative to the widget's own bounds and may extend past
//! them (a banner sliding in from above starts at a negative y). Whatever
//! falls outside the bounds is neither drawn nor interactive.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Rectangle, Size, Vector};

/// Content laid out at exactly `frame`, inside a widget that fills its parent.
pub struct Pinned<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    frame: Rectangle,
}

impl<'a, Message, Theme, Renderer> Pinned<'a, Message, Theme, Renderer> {
    /// Creates a new `Pinned` placing `content` at `frame`.
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>, frame: Rectangle) -> Self {
        Self {
            content: content.into(),
            frame,
        }
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Pinned<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let content_limits = layout::Limits::new(Size::ZERO, self.frame.size());
        let content = self
            .content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, &content_limits)
            .move_to(self.frame.position());

        layout::Node::with_children(limits.max(), vec![content])
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let Some(clip) = bounds.intersection(viewport) else {
            return;
        };
        let Some(content_layout) = layout.children().next() else {
            return;
        };

        renderer.with_layer(clip, |renderer| {
            self.content.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                content_layout,
                clip_cursor(cursor, bounds),
                &clip,
            );
        });
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let Some(content_layout) = layout.children().next() else {
            return;
        };

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            content_layout,
            clip_cursor(cursor, bounds),
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        let Some(content_layout) = layout.children().next() else {
            return mouse::Interaction::None;
        };

        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            content_layout,
            clip_cursor(cursor, layout.bounds()),
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        if let Some(content_layout) = layout.children().next() {
            self.content.as_widget_mut().operate(
                &mut tree.children[0],
                content_layout,
                renderer,
                operation,
            );
        }
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        let content_layout = layout.children().next()?;
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            content_layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<Pinned<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(pinned: Pinned<'a, Message, Theme, Renderer>) -> Self {
        Self::new(pinned)
    }
}

/// Helper function to pin content at a frame.
pub fn pinned<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    frame: Rectangle,
) -> Pinned<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    Pinned::new(content, frame)
}

/// Hides the cursor from content when it is over a clipped-away region.
fn clip_cursor(cursor: mouse::Cursor, bounds: Rectangle) -> mouse::Cursor {
    if cursor.is_over(bounds) {
        cursor
    } else {
        mouse::Cursor::Unavailable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;

    #[test]
    fn cursor_inside_bounds_is_kept() {
        let bounds = Rectangle::new(Point::ORIGIN, Size::new(100.0, 50.0));
        let cursor = mouse::Cursor::Available(Point::new(10.0, 10.0));
        assert_eq!(clip_cursor(cursor, bounds), cursor);
    }

    #[test]
    fn cursor_over_clipped_region_is_hidden() {
        let bounds = Rectangle::new(Point::ORIGIN, Size::new(100.0, 50.0));
        let cursor = mouse::Cursor::Available(Point::new(10.0, -5.0));
        assert_eq!(clip_cursor(cursor, bounds), mouse::Cursor::Unavailable);
    }
}
