// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Plain state types the viewer component is built from, kept free of
//! widget code so they can be tested directly.

pub mod drag;
pub mod viewport;
pub mod zoom;

// Re-export commonly used types for convenience
pub use drag::DragState;
pub use viewport::{ViewportAnchor, ViewportState};
pub use zoom::{SliderScale, ZoomGuard, ZoomState};
