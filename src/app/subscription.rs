// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Mouse button and cursor events that no widget captured are routed to the
//! viewer for grab-and-drag panning. Wheel events are handled by the viewer's
//! widget tree directly and are not routed here.

use super::Message;
use crate::ui::viewer;
use iced::{event, mouse, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if !is_drag_event(&event) {
            return None;
        }

        match status {
            event::Status::Ignored => Some(Message::Viewer(viewer::Message::RawEvent(event))),
            event::Status::Captured => None,
        }
    })
}

fn is_drag_event(event: &event::Event) -> bool {
    matches!(
        event,
        event::Event::Mouse(
            mouse::Event::CursorMoved { .. }
                | mouse::Event::ButtonPressed(mouse::Button::Left)
                | mouse::Event::ButtonReleased(mouse::Button::Left)
        )
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;

    #[test]
    fn cursor_and_left_button_events_are_routed() {
        assert!(is_drag_event(&event::Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(1.0, 2.0),
        })));
        assert!(is_drag_event(&event::Event::Mouse(mouse::Event::ButtonPressed(
            mouse::Button::Left
        ))));
        assert!(is_drag_event(&event::Event::Mouse(mouse::Event::ButtonReleased(
            mouse::Button::Left
        ))));
    }

    #[test]
    fn wheel_and_right_button_are_not_routed() {
        assert!(!is_drag_event(&event::Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 },
        })));
        assert!(!is_drag_event(&event::Event::Mouse(mouse::Event::ButtonPressed(
            mouse::Button::Right
        ))));
    }
}
