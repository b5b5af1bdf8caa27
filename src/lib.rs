// SPDX-License-Identifier: MPL-2.0
//! `pan_zoom` is a single-window image viewer built with the Iced GUI framework.
//!
//! The image can be zoomed with a slider or the scroll wheel and panned by
//! dragging; zooming keeps the viewport at the same fractional scroll
//! position. The zoom arithmetic lives in [`ui::zoom_pan`] and is independent
//! of the toolkit.

pub mod app;
pub mod config;
pub mod error;
pub mod media;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
