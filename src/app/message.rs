// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and startup flags for the application.

use crate::config::Config;
use crate::media::ImageData;
use crate::ui::viewer;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(viewer::Message),
}

/// Everything resolved before the event loop starts: the decoded image and
/// the configuration it should be shown with.
#[derive(Debug)]
pub struct Flags {
    pub image: ImageData,
    /// Path the image was loaded from (used for the window title).
    pub path: PathBuf,
    pub config: Config,
}
