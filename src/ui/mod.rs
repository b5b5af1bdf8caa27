// SPDX-License-Identifier: MPL-2.0
//! User interface: state types, the zoom/pan controller, widgets and the
//! viewer component.

pub mod state;
pub mod viewer;
pub mod widgets;
pub mod zoom_pan;
