// SPDX-License-Identifier: MPL-2.0
//! Native file picker shown before the window opens.

use std::path::{Path, PathBuf};

/// Extensions offered by the "Images" filter.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "tif", "tiff", "webp", "ico", "svg",
];

/// Asks the user for an image file, starting in `start_dir`.
///
/// Returns `None` when the dialog is cancelled.
pub fn pick_image_file(start_dir: &Path) -> Option<PathBuf> {
    let mut dialog = rfd::FileDialog::new()
        .set_title("Open Image")
        .add_filter("Images", IMAGE_EXTENSIONS)
        .add_filter("All files", &["*"]);

    if start_dir.is_dir() {
        dialog = dialog.set_directory(start_dir);
    }

    dialog.pick_file()
}

/// Directory the picker starts in: the process working directory.
pub fn start_directory() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
