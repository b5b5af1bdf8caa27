// SPDX-License-Identifier: MPL-2.0
//! Zoom state management
//!
//! This module holds the cumulative zoom scale and the rules that decide
//! whether a zoom intent is accepted:
//! - Slider values are clamped to the slider range
//! - Wheel events are guarded by a separate, wider range

pub use crate::config::{
    DEFAULT_SCALE, SLIDER_MAX_SCALE, SLIDER_MIN_SCALE, WHEEL_GROW_FACTOR, WHEEL_MAX_SCALE,
    WHEEL_MIN_SCALE, WHEEL_SHRINK_FACTOR,
};

use std::fmt;

/// Slider position, guaranteed to be within the slider range (0.2–5.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderScale(f64);

impl SliderScale {
    /// Creates a slider value, clamping it to the valid range.
    /// NaN falls back to the default scale.
    #[must_use]
    pub fn new(scale: f64) -> Self {
        if scale.is_nan() {
            return Self::default();
        }
        Self(scale.clamp(SLIDER_MIN_SCALE, SLIDER_MAX_SCALE))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for SliderScale {
    fn default() -> Self {
        Self(DEFAULT_SCALE)
    }
}

/// Reason a wheel event was discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomGuard {
    /// Growing past the upper wheel bound.
    TooLarge,
    /// Shrinking past the lower wheel bound.
    TooSmall,
}

impl fmt::Display for ZoomGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoomGuard::TooLarge => write!(f, "scale too large"),
            ZoomGuard::TooSmall => write!(f, "scale too small"),
        }
    }
}

/// Cumulative zoom level shared by the slider and the wheel.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomState {
    /// Last scale applied to the rendered width.
    pub scale: f64,

    /// Wheel shrinking stops below this.
    pub min_scale: f64,

    /// Wheel growing stops above this.
    pub max_scale: f64,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            min_scale: WHEEL_MIN_SCALE,
            max_scale: WHEEL_MAX_SCALE,
        }
    }
}

impl ZoomState {
    #[must_use]
    pub fn with_scale(scale: f64) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }

    /// Returns the factor a wheel event of `delta_y` would apply, or the
    /// guard that rejects it. Only a positive delta grows; anything else
    /// shrinks. Bounds are checked against the current scale, so one step
    /// may land slightly past them.
    pub fn wheel_factor(&self, delta_y: f64) -> Result<f64, ZoomGuard> {
        if delta_y > 0.0 {
            if self.scale > self.max_scale {
                return Err(ZoomGuard::TooLarge);
            }
            Ok(WHEEL_GROW_FACTOR)
        } else if self.scale < self.min_scale {
            Err(ZoomGuard::TooSmall)
        } else {
            Ok(WHEEL_SHRINK_FACTOR)
        }
    }
}

/// Formats a scale for display with three decimals (e.g. "1.050").
#[must_use]
pub fn format_scale(scale: f64) -> String {
    format!("{scale:.3}")
}
