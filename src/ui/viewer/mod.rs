// SPDX-License-Identifier: MPL-2.0
//! Image viewer: scrollable image with slider and wheel zoom.

pub mod component;
pub mod pane;

pub use component::{Message, State, SCROLLABLE_ID};
