// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Tracks the scrollable area (bounds and offset) and expresses the scroll
//! position as a fractional [`ViewportAnchor`].

use crate::config::INITIAL_ANCHOR;
use iced::widget::scrollable::{AbsoluteOffset, RelativeOffset};
use iced::{Rectangle, Size};

/// Scroll position as a fraction of the scrollable range on each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportAnchor {
    pub x: f64,
    pub y: f64,
}

impl ViewportAnchor {
    pub const CENTER: Self = Self {
        x: INITIAL_ANCHOR,
        y: INITIAL_ANCHOR,
    };

    /// Creates an anchor with both components clamped to `[0, 1]`.
    /// NaN components fall back to the center.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: clamp_fraction(x),
            y: clamp_fraction(y),
        }
    }
}

impl Default for ViewportAnchor {
    fn default() -> Self {
        Self::CENTER
    }
}

impl From<ViewportAnchor> for RelativeOffset {
    #[allow(clippy::cast_possible_truncation)]
    fn from(anchor: ViewportAnchor) -> Self {
        RelativeOffset {
            x: anchor.x as f32,
            y: anchor.y as f32,
        }
    }
}

fn clamp_fraction(value: f64) -> f64 {
    if value.is_nan() {
        INITIAL_ANCHOR
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Manages viewport and scroll state
#[derive(Debug, Clone)]
pub struct ViewportState {
    /// Current scroll offset
    pub offset: AbsoluteOffset,

    /// Visible area of the scrollable
    pub bounds: Option<Rectangle>,

    /// Fractional position, kept per axis while that axis cannot scroll
    pub anchor: ViewportAnchor,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            offset: AbsoluteOffset { x: 0.0, y: 0.0 },
            bounds: None,
            anchor: ViewportAnchor::CENTER,
        }
    }
}

impl ViewportState {
    /// Records a viewport notification from the scrollable and returns the
    /// resulting anchor.
    pub fn update(
        &mut self,
        bounds: Rectangle,
        content_size: Size,
        offset: AbsoluteOffset,
    ) -> ViewportAnchor {
        self.bounds = Some(bounds);
        self.offset = offset;

        let max_x = (content_size.width - bounds.width).max(0.0);
        let max_y = (content_size.height - bounds.height).max(0.0);

        let x = if max_x > 0.0 {
            f64::from(offset.x / max_x)
        } else {
            self.anchor.x
        };
        let y = if max_y > 0.0 {
            f64::from(offset.y / max_y)
        } else {
            self.anchor.y
        };

        self.anchor = ViewportAnchor::new(x, y);
        self.anchor
    }

    /// Maximum scroll offset for content of the given size.
    #[must_use]
    pub fn max_offset(&self, content_size: Size) -> Option<AbsoluteOffset> {
        let bounds = self.bounds?;
        Some(AbsoluteOffset {
            x: (content_size.width - bounds.width).max(0.0),
            y: (content_size.height - bounds.height).max(0.0),
        })
    }

    /// Clamps `proposed` into the scrollable range, stores it, and returns the
    /// equivalent anchor. Returns `None` until the viewport bounds are known.
    pub fn pan_to(&mut self, proposed: AbsoluteOffset, content_size: Size) -> Option<ViewportAnchor> {
        let max = self.max_offset(content_size)?;

        self.offset = AbsoluteOffset {
            x: proposed.x.clamp(0.0, max.x),
            y: proposed.y.clamp(0.0, max.y),
        };

        let x = if max.x > 0.0 {
            f64::from(self.offset.x / max.x)
        } else {
            self.anchor.x
        };
        let y = if max.y > 0.0 {
            f64::from(self.offset.y / max.y)
        } else {
            self.anchor.y
        };

        self.anchor = ViewportAnchor::new(x, y);
        Some(self.anchor)
    }
}
