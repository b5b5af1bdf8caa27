// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for the numbers that
//! drive zooming, panning and the window. Constants are organized by category.
//!
//! # Categories
//!
//! - **Slider**: Slider range and step
//! - **Wheel**: Scroll-wheel zoom factors and guard bounds
//! - **Viewport**: Initial scroll anchor
//! - **Window**: Default and minimum window size

// ==========================================================================
// Slider Defaults
// ==========================================================================

/// Zoom scale applied when an image is first shown (1.0 = natural size).
pub const DEFAULT_SCALE: f64 = 1.0;

/// Lowest value the zoom slider can take.
pub const SLIDER_MIN_SCALE: f64 = 0.2;

/// Highest value the zoom slider can take.
pub const SLIDER_MAX_SCALE: f64 = 5.0;

/// Slider block increment, applied while Shift is held.
pub const DEFAULT_SLIDER_STEP: f64 = 0.1;

/// Plain drag granularity, fine enough to feel continuous.
pub const SLIDER_DRAG_STEP: f64 = 0.001;

/// Smallest slider step accepted from the config file.
pub const MIN_SLIDER_STEP: f64 = 0.01;

/// Largest slider step accepted from the config file.
pub const MAX_SLIDER_STEP: f64 = 1.0;

// ==========================================================================
// Wheel Defaults
// ==========================================================================

/// Wheel events shrinking the image are dropped once the scale is below this.
pub const WHEEL_MIN_SCALE: f64 = 0.2;

/// Wheel events growing the image are dropped once the scale is above this.
///
/// Wider than [`SLIDER_MAX_SCALE`]: the wheel can zoom further than the slider.
pub const WHEEL_MAX_SCALE: f64 = 10.0;

/// Multiplier applied for a positive wheel delta.
pub const WHEEL_GROW_FACTOR: f64 = 1.05;

/// Multiplier applied for a negative wheel delta.
pub const WHEEL_SHRINK_FACTOR: f64 = 0.95;

/// Pixel-based wheel deltas (touchpads) are divided by this to get line steps.
pub const PIXELS_PER_WHEEL_LINE: f32 = 120.0;

// ==========================================================================
// Viewport Defaults
// ==========================================================================

/// Fractional scroll position on both axes when the window opens (centered).
pub const INITIAL_ANCHOR: f64 = 0.5;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const DEFAULT_WINDOW_WIDTH: f32 = 800.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 600.0;
pub const MIN_WINDOW_WIDTH: f32 = 320.0;
pub const MIN_WINDOW_HEIGHT: f32 = 240.0;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Filter directive used when neither `RUST_LOG`, `--log` nor the config set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Slider validation
    assert!(SLIDER_MIN_SCALE > 0.0);
    assert!(SLIDER_MIN_SCALE < DEFAULT_SCALE);
    assert!(SLIDER_MAX_SCALE > DEFAULT_SCALE);
    assert!(MIN_SLIDER_STEP > 0.0);
    assert!(MAX_SLIDER_STEP > MIN_SLIDER_STEP);
    assert!(DEFAULT_SLIDER_STEP >= MIN_SLIDER_STEP);
    assert!(DEFAULT_SLIDER_STEP <= MAX_SLIDER_STEP);
    assert!(SLIDER_DRAG_STEP > 0.0);
    assert!(SLIDER_DRAG_STEP < MIN_SLIDER_STEP);

    // Wheel validation
    assert!(WHEEL_MIN_SCALE > 0.0);
    assert!(WHEEL_MAX_SCALE > WHEEL_MIN_SCALE);
    assert!(WHEEL_GROW_FACTOR > 1.0);
    assert!(WHEEL_SHRINK_FACTOR < 1.0);
    assert!(WHEEL_SHRINK_FACTOR > 0.0);
    assert!(PIXELS_PER_WHEEL_LINE > 0.0);

    // Anchor validation
    assert!(INITIAL_ANCHOR >= 0.0);
    assert!(INITIAL_ANCHOR <= 1.0);

    // Window validation
    assert!(MIN_WINDOW_WIDTH > 0.0);
    assert!(MIN_WINDOW_HEIGHT > 0.0);
    assert!(DEFAULT_WINDOW_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(DEFAULT_WINDOW_HEIGHT >= MIN_WINDOW_HEIGHT);
};
