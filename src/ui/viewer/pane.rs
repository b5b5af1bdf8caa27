// SPDX-License-Identifier: MPL-2.0
//! Viewer pane that renders the image inside the scroll area and the zoom
//! slider underneath.

use crate::config::{SLIDER_DRAG_STEP, SLIDER_MAX_SCALE, SLIDER_MIN_SCALE};
use crate::media::ImageData;
use crate::ui::state::zoom::format_scale;
use crate::ui::viewer::component::{Message, SCROLLABLE_ID};
use crate::ui::widgets::wheel_zoom;
use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::{mouse_area, responsive, slider, text, Container, Id, Image, Row, Scrollable};
use iced::{alignment::Vertical, Element, Length, Padding, Size};

const SLIDER_BAR_PADDING: f32 = 8.0;
const SLIDER_BAR_SPACING: f32 = 12.0;
const SCALE_LABEL_WIDTH: f32 = 56.0;

pub struct ViewModel<'a> {
    pub image: &'a ImageData,
    /// Image size at the current scale.
    pub rendered: Size,
    pub scale: f64,
    pub slider_value: f64,
    /// Block increment used while Shift is held.
    pub slider_step: f64,
    /// Whether the wheel zooms; otherwise it scrolls the image area.
    pub wheel_zoom_active: bool,
}

pub fn view(model: ViewModel<'_>) -> Element<'_, Message> {
    let slider_bar = slider_bar(&model);

    // Use responsive widget to center images smaller than the available space
    let image_area = responsive(move |available: Size| image_area(&model, available));

    iced::widget::Column::new()
        .push(Container::new(image_area).width(Length::Fill).height(Length::Fill))
        .push(slider_bar)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Padding that centers content of `content` size within `available` space.
fn centering_padding(content: Size, available: Size) -> Padding {
    let horizontal = ((available.width - content.width) / 2.0).max(0.0);
    let vertical = ((available.height - content.height) / 2.0).max(0.0);

    Padding {
        top: vertical,
        right: horizontal,
        bottom: vertical,
        left: horizontal,
    }
}

fn image_area<'a>(model: &ViewModel<'a>, available: Size) -> Element<'a, Message> {
    let picture = Image::new(model.image.handle.clone())
        .width(Length::Fixed(model.rendered.width))
        .height(Length::Fixed(model.rendered.height));

    // Hover tracking decides whether wheel and drag act on the image
    let hover = mouse_area(picture)
        .on_enter(Message::ImageHovered(true))
        .on_exit(Message::ImageHovered(false));

    let content = Container::new(hover).padding(centering_padding(model.rendered, available));

    let scrollable = Scrollable::new(content)
        .id(Id::new(SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Both {
            vertical: Scrollbar::default(),
            horizontal: Scrollbar::default(),
        })
        .on_scroll(|viewport: Viewport| Message::ViewportChanged {
            bounds: viewport.bounds(),
            content_bounds: viewport.content_bounds(),
            offset: viewport.absolute_offset(),
        });

    wheel_zoom(scrollable)
        .on_wheel(Message::WheelScrolled)
        .active(model.wheel_zoom_active)
        .into()
}

fn slider_bar<'a>(model: &ViewModel<'a>) -> Element<'a, Message> {
    let zoom_slider = slider(
        SLIDER_MIN_SCALE..=SLIDER_MAX_SCALE,
        model.slider_value,
        Message::SliderChanged,
    )
    .step(SLIDER_DRAG_STEP)
    .shift_step(model.slider_step)
    .width(Length::Fill);

    let label = text(format!("{}×", format_scale(model.scale))).width(Length::Fixed(SCALE_LABEL_WIDTH));

    Row::new()
        .push(zoom_slider)
        .push(label)
        .spacing(SLIDER_BAR_SPACING)
        .padding(SLIDER_BAR_PADDING)
        .align_y(Vertical::Center)
        .width(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_content_is_centered() {
        let padding = centering_padding(Size::new(200.0, 100.0), Size::new(800.0, 600.0));
        assert_eq!(padding.left, 300.0);
        assert_eq!(padding.right, 300.0);
        assert_eq!(padding.top, 250.0);
        assert_eq!(padding.bottom, 250.0);
    }

    #[test]
    fn large_content_gets_no_padding() {
        let padding = centering_padding(Size::new(1600.0, 1200.0), Size::new(800.0, 600.0));
        assert_eq!(padding, Padding::ZERO);
    }
}
