// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that takes the mouse wheel away from its content.
//!
//! While active, wheel events over the wrapper never reach the wrapped
//! scrollable; they are turned into a zoom message instead. An inactive
//! wrapper, and every other event (grab-and-drag, hover), passes through
//! untouched.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Rectangle, Size};

/// Wraps content and reports wheel deltas instead of forwarding them.
pub struct WheelZoom<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    on_wheel: Option<Box<dyn Fn(mouse::ScrollDelta) -> Message + 'a>>,
    active: bool,
}

impl<'a, Message, Theme, Renderer> WheelZoom<'a, Message, Theme, Renderer> {
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            content: content.into(),
            on_wheel: None,
            active: true,
        }
    }

    /// Message to publish for each wheel event over the wrapper.
    #[must_use]
    pub fn on_wheel(mut self, f: impl Fn(mouse::ScrollDelta) -> Message + 'a) -> Self {
        self.on_wheel = Some(Box::new(f));
        self
    }

    /// Whether wheel events are taken at all. Inactive, the content scrolls.
    #[must_use]
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for WheelZoom<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
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
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
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
        let over = cursor.is_over(layout.bounds());
        if let (Some(delta), Some(on_wheel)) =
            (captured_delta(event, self.active, over), &self.on_wheel)
        {
            shell.publish(on_wheel(delta));
            shell.capture_event();
            return;
        }

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
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
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
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
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<WheelZoom<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(wrapper: WheelZoom<'a, Message, Theme, Renderer>) -> Self {
        Self::new(wrapper)
    }
}

pub fn wheel_zoom<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> WheelZoom<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    WheelZoom::new(content)
}

fn wheel_delta(event: &Event) -> Option<mouse::ScrollDelta> {
    match event {
        Event::Mouse(mouse::Event::WheelScrolled { delta }) => Some(*delta),
        _ => None,
    }
}

/// Wheel delta the wrapper takes from its content, if any.
fn captured_delta(event: &Event, active: bool, cursor_over: bool) -> Option<mouse::ScrollDelta> {
    if active && cursor_over {
        wheel_delta(event)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_delta_is_extracted() {
        let event = Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Lines { x: 0.0, y: -2.0 },
        });
        assert_eq!(
            wheel_delta(&event),
            Some(mouse::ScrollDelta::Lines { x: 0.0, y: -2.0 })
        );
    }

    #[test]
    fn button_events_pass_through() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        assert!(wheel_delta(&event).is_none());
    }

    #[test]
    fn window_events_pass_through() {
        let event = Event::Window(iced::window::Event::Resized(Size::new(100.0, 50.0)));
        assert!(wheel_delta(&event).is_none());
    }

    #[test]
    fn wheel_is_taken_only_when_active_and_hovered() {
        let event = Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 },
        });
        assert!(captured_delta(&event, true, true).is_some());
        assert!(captured_delta(&event, false, true).is_none());
        assert!(captured_delta(&event, true, false).is_none());
    }
}
