// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating state and update logic.
//!
//! Messages are translated into [`ZoomPanController`] calls first; widget
//! side effects (snapping the scroll area) are issued afterwards as tasks.

use crate::config::PIXELS_PER_WHEEL_LINE;
use crate::media::ImageData;
use crate::ui::state::{DragState, ViewportAnchor, ViewportState};
use crate::ui::viewer::pane;
use crate::ui::zoom_pan::{ScrollOutcome, ZoomPanController, ZoomUpdate};
use iced::widget::scrollable::{AbsoluteOffset, RelativeOffset};
use iced::widget::{operation, Id};
use iced::{event, mouse, Element, Point, Rectangle, Size, Task};

/// Identifier used for the viewer scrollable widget.
pub const SCROLLABLE_ID: &str = "pan-zoom-image-scrollable";

/// Messages emitted by viewer-related widgets.
#[derive(Debug, Clone)]
pub enum Message {
    SliderChanged(f64),
    WheelScrolled(mouse::ScrollDelta),
    ViewportChanged {
        bounds: Rectangle,
        content_bounds: Rectangle,
        offset: AbsoluteOffset,
    },
    ImageHovered(bool),
    /// Native event not captured by any widget (drag tracking).
    RawEvent(event::Event),
}

#[derive(Debug, Clone)]
pub struct State {
    image: ImageData,
    controller: ZoomPanController,
    viewport: ViewportState,
    drag: DragState,
    cursor_over_image: bool,
    cursor_position: Option<Point>,
    slider_step: f64,
}

impl State {
    #[must_use]
    pub fn new(image: ImageData, slider_step: f64) -> Self {
        let controller = ZoomPanController::new(image.dimensions());
        Self {
            image,
            controller,
            viewport: ViewportState::default(),
            drag: DragState::default(),
            cursor_over_image: false,
            cursor_position: None,
            slider_step,
        }
    }

    /// Centers the scroll area once the window is up.
    #[must_use]
    pub fn initial_task(&self) -> Task<Message> {
        snap_to(ViewportAnchor::CENTER)
    }

    #[must_use]
    pub fn controller(&self) -> &ZoomPanController {
        &self.controller
    }

    #[cfg(test)]
    fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SliderChanged(value) => {
                let update = self.controller.on_slider_changed(value);
                self.restore_anchor(update)
            }
            Message::WheelScrolled(delta) => self.handle_wheel_zoom(delta),
            Message::ViewportChanged {
                bounds,
                content_bounds,
                offset,
            } => {
                let anchor = self.viewport.update(bounds, content_bounds.size(), offset);
                self.controller.set_anchor(anchor);
                Task::none()
            }
            Message::ImageHovered(hovered) => {
                self.cursor_over_image = hovered;
                Task::none()
            }
            Message::RawEvent(event) => self.handle_raw_event(event),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        pane::view(pane::ViewModel {
            image: &self.image,
            rendered: self.rendered_size(),
            scale: self.controller.scale(),
            slider_value: self.controller.slider_value(),
            slider_step: self.slider_step,
            wheel_zoom_active: self.cursor_over_image,
        })
    }

    /// Applies wheel zoom while the cursor is over the image. Horizontal-only
    /// wheel movement carries no zoom intent.
    fn handle_wheel_zoom(&mut self, delta: mouse::ScrollDelta) -> Task<Message> {
        let steps = scroll_steps(&delta);
        if !self.cursor_over_image || steps == 0.0 {
            return Task::none();
        }

        match self.controller.on_scroll(f64::from(steps)) {
            ScrollOutcome::Applied(update) => self.restore_anchor(update),
            ScrollOutcome::Ignored(_) => Task::none(),
        }
    }

    fn handle_raw_event(&mut self, event: event::Event) -> Task<Message> {
        match event {
            event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if self.cursor_over_image {
                    if let Some(position) = self.cursor_position {
                        self.drag.begin(position, self.viewport.offset);
                    }
                }
                Task::none()
            }
            event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                self.drag.end();
                Task::none()
            }
            event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                self.cursor_position = Some(position);
                self.pan_with_cursor(position)
            }
            _ => Task::none(),
        }
    }

    /// Scrolls so the grabbed point follows the cursor, clamped to the
    /// scrollable range of the rendered image.
    fn pan_with_cursor(&mut self, position: Point) -> Task<Message> {
        let Some(proposed) = self.drag.offset_for(position) else {
            return Task::none();
        };

        match self.viewport.pan_to(proposed, self.rendered_size()) {
            Some(anchor) => {
                self.controller.set_anchor(anchor);
                snap_to(anchor)
            }
            None => Task::none(),
        }
    }

    fn restore_anchor(&mut self, update: ZoomUpdate) -> Task<Message> {
        self.viewport.anchor = update.anchor;
        snap_to(update.anchor)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn rendered_size(&self) -> Size {
        Size::new(
            self.controller.rendered_width() as f32,
            self.controller.rendered_height() as f32,
        )
    }
}

fn snap_to(anchor: ViewportAnchor) -> Task<Message> {
    operation::snap_to(Id::new(SCROLLABLE_ID), RelativeOffset::from(anchor))
}

/// Converts a wheel delta to line steps; pixel deltas are scaled down.
fn scroll_steps(delta: &mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => *y,
        mouse::ScrollDelta::Pixels { y, .. } => *y / PIXELS_PER_WHEEL_LINE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, assert_relative_eq, F64_EPSILON};

    fn state() -> State {
        let image = ImageData::from_rgba(800, 600, vec![0; 800 * 600 * 4]);
        State::new(image, 0.1)
    }

    fn wheel(y: f32) -> Message {
        Message::WheelScrolled(mouse::ScrollDelta::Lines { x: 0.0, y })
    }

    fn mouse_event(event: mouse::Event) -> Message {
        Message::RawEvent(event::Event::Mouse(event))
    }

    fn viewport_changed(state: &mut State, offset: AbsoluteOffset) {
        let _ = state.update(Message::ViewportChanged {
            bounds: Rectangle::new(Point::ORIGIN, Size::new(400.0, 300.0)),
            content_bounds: Rectangle::new(Point::ORIGIN, Size::new(800.0, 600.0)),
            offset,
        });
    }

    #[test]
    fn slider_changes_rendered_width() {
        let mut state = state();
        let _ = state.update(Message::SliderChanged(2.0));

        assert_eq!(state.controller().rendered_width(), 1600.0);
        assert_eq!(state.rendered_size(), Size::new(1600.0, 1200.0));
    }

    #[test]
    fn wheel_is_ignored_outside_image() {
        let mut state = state();
        let _ = state.update(wheel(1.0));
        assert_eq!(state.controller().scale(), 1.0);
    }

    #[test]
    fn wheel_over_image_zooms() {
        let mut state = state();
        let _ = state.update(Message::ImageHovered(true));
        let _ = state.update(wheel(-1.0));

        assert_relative_eq!(state.controller().scale(), 0.95, epsilon = F64_EPSILON);
    }

    #[test]
    fn pixel_deltas_only_count_their_sign() {
        let mut state = state();
        let _ = state.update(Message::ImageHovered(true));
        let _ = state.update(Message::WheelScrolled(mouse::ScrollDelta::Pixels {
            x: 0.0,
            y: 3.0,
        }));

        assert_relative_eq!(state.controller().scale(), 1.05, epsilon = F64_EPSILON);
    }

    #[test]
    fn horizontal_wheel_does_not_zoom() {
        let mut state = state();
        let _ = state.update(Message::ImageHovered(true));
        let _ = state.update(Message::WheelScrolled(mouse::ScrollDelta::Lines {
            x: 3.0,
            y: 0.0,
        }));

        assert_eq!(state.controller().scale(), 1.0);
    }

    #[test]
    fn viewport_change_updates_anchor() {
        let mut state = state();
        viewport_changed(&mut state, AbsoluteOffset { x: 400.0, y: 0.0 });

        let anchor = state.controller().anchor();
        assert_abs_diff_eq!(anchor.x, 1.0);
        assert_abs_diff_eq!(anchor.y, 0.0);
    }

    #[test]
    fn zoom_keeps_recorded_anchor() {
        let mut state = state();
        viewport_changed(&mut state, AbsoluteOffset { x: 100.0, y: 225.0 });
        let _ = state.update(Message::SliderChanged(3.0));

        let anchor = state.controller().anchor();
        assert_abs_diff_eq!(anchor.x, 0.25);
        assert_abs_diff_eq!(anchor.y, 0.75);
    }

    #[test]
    fn drag_pans_opposite_to_cursor() {
        let mut state = state();
        viewport_changed(&mut state, AbsoluteOffset { x: 200.0, y: 150.0 });
        let _ = state.update(Message::ImageHovered(true));
        let _ = state.update(mouse_event(mouse::Event::CursorMoved {
            position: Point::new(300.0, 200.0),
        }));
        let _ = state.update(mouse_event(mouse::Event::ButtonPressed(mouse::Button::Left)));
        assert!(state.is_dragging());

        let _ = state.update(mouse_event(mouse::Event::CursorMoved {
            position: Point::new(200.0, 200.0),
        }));

        // Offset 200 -> 300 out of a 400px range.
        let anchor = state.controller().anchor();
        assert_abs_diff_eq!(anchor.x, 0.75);
        assert_abs_diff_eq!(anchor.y, 0.5);

        let _ = state.update(mouse_event(mouse::Event::ButtonReleased(mouse::Button::Left)));
        assert!(!state.is_dragging());
    }

    #[test]
    fn press_outside_image_does_not_drag() {
        let mut state = state();
        let _ = state.update(mouse_event(mouse::Event::CursorMoved {
            position: Point::new(10.0, 10.0),
        }));
        let _ = state.update(mouse_event(mouse::Event::ButtonPressed(mouse::Button::Left)));
        assert!(!state.is_dragging());
    }

    #[test]
    fn scroll_steps_scale_pixels() {
        assert_eq!(
            scroll_steps(&mouse::ScrollDelta::Lines { x: 0.0, y: 2.0 }),
            2.0
        );
        assert_eq!(
            scroll_steps(&mouse::ScrollDelta::Pixels { x: 0.0, y: -240.0 }),
            -2.0
        );
    }
}
