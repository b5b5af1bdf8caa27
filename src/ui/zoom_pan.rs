// SPDX-License-Identifier: MPL-2.0
//! Zoom/pan controller.
//!
//! [`ZoomPanController`] turns zoom intents (a slider value or a wheel delta)
//! into a new rendered width for the image while keeping the viewport at the
//! same fractional scroll position. It never touches widgets: every operation
//! returns a [`ZoomUpdate`] that the viewer applies afterwards (resize the
//! image, then snap the scroll area back to `anchor`).
//!
//! The scale is owned here and only mutated through the two operations, so
//! slider and wheel zoom always agree on the current level.

use crate::ui::state::zoom::format_scale;
use crate::ui::state::{SliderScale, ViewportAnchor, ZoomGuard, ZoomState};

/// Natural size of the loaded image, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseImageDimensions {
    pub width: f64,
    pub height: f64,
}

impl BaseImageDimensions {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Height divided by width, or 0 for a degenerate image.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        if self.width > 0.0 {
            self.height / self.width
        } else {
            0.0
        }
    }
}

/// Result of an accepted zoom intent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomUpdate {
    pub scale: f64,
    pub rendered_width: f64,
    /// Fractional scroll position recorded before the resize. The viewer
    /// snaps the scroll area back to it after the new width is laid out.
    pub anchor: ViewportAnchor,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollOutcome {
    Applied(ZoomUpdate),
    Ignored(ZoomGuard),
}

impl ScrollOutcome {
    #[must_use]
    pub fn update(self) -> Option<ZoomUpdate> {
        match self {
            ScrollOutcome::Applied(update) => Some(update),
            ScrollOutcome::Ignored(_) => None,
        }
    }
}

/// Rendered width for an image of natural size `base` at `scale`.
#[must_use]
pub fn rendered_width(base: BaseImageDimensions, scale: f64) -> f64 {
    base.width * scale
}

/// Computes the scale a wheel event would produce without mutating anything.
///
/// # Errors
///
/// Returns the [`ZoomGuard`] that discards the event.
pub fn plan_scroll(zoom: &ZoomState, delta_y: f64) -> Result<f64, ZoomGuard> {
    zoom.wheel_factor(delta_y).map(|factor| zoom.scale * factor)
}

#[derive(Debug, Clone)]
pub struct ZoomPanController {
    zoom: ZoomState,
    base: BaseImageDimensions,
    slider: SliderScale,
    rendered_width: f64,
    anchor: ViewportAnchor,
}

impl ZoomPanController {
    /// Controller for a freshly loaded image: default scale, centered viewport.
    #[must_use]
    pub fn new(base: BaseImageDimensions) -> Self {
        Self::with_zoom(base, ZoomState::default())
    }

    #[must_use]
    pub fn with_zoom(base: BaseImageDimensions, zoom: ZoomState) -> Self {
        Self {
            slider: SliderScale::new(zoom.scale),
            rendered_width: rendered_width(base, zoom.scale),
            anchor: ViewportAnchor::CENTER,
            zoom,
            base,
        }
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.zoom.scale
    }

    /// Position the slider should display. Follows the scale, clamped to the
    /// slider range when the wheel has zoomed past it.
    #[must_use]
    pub fn slider_value(&self) -> f64 {
        self.slider.value()
    }

    #[must_use]
    pub fn rendered_width(&self) -> f64 {
        self.rendered_width
    }

    #[must_use]
    pub fn rendered_height(&self) -> f64 {
        self.rendered_width * self.base.aspect_ratio()
    }

    #[must_use]
    pub fn base(&self) -> BaseImageDimensions {
        self.base
    }

    #[must_use]
    pub fn anchor(&self) -> ViewportAnchor {
        self.anchor
    }

    /// Records the scroll area's current fractional position.
    pub fn set_anchor(&mut self, anchor: ViewportAnchor) {
        self.anchor = anchor;
    }

    /// Handles a slider drag to `new_value`.
    pub fn on_slider_changed(&mut self, new_value: f64) -> ZoomUpdate {
        let scale = SliderScale::new(new_value).value();
        self.apply_scale(scale)
    }

    /// Handles a wheel event. Positive `delta_y` grows the image by 5%,
    /// any other value shrinks it by 5%.
    pub fn on_scroll(&mut self, delta_y: f64) -> ScrollOutcome {
        match plan_scroll(&self.zoom, delta_y) {
            Ok(scale) => ScrollOutcome::Applied(self.apply_scale(scale)),
            Err(guard) => {
                tracing::debug!(scale = self.zoom.scale, delta_y, "wheel zoom ignored: {guard}");
                ScrollOutcome::Ignored(guard)
            }
        }
    }

    /// Single width mutation. The anchor recorded before it is handed back
    /// in the update for the viewer to restore once the new width is laid out.
    fn apply_scale(&mut self, scale: f64) -> ZoomUpdate {
        self.zoom.scale = scale;
        // Written directly: the slider's change handler must not run again.
        self.slider = SliderScale::new(scale);
        self.rendered_width = rendered_width(self.base, scale);

        tracing::debug!("image scale factor {}", format_scale(scale));

        ZoomUpdate {
            scale,
            rendered_width: self.rendered_width,
            anchor: self.anchor,
        }
    }
}
