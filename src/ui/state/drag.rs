// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Grab-and-drag panning: the scroll area follows the cursor while the left
//! button is held over the image.

use iced::widget::scrollable::AbsoluteOffset;
use iced::Point;

/// Cursor and scroll offset captured when a drag begins.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragOrigin {
    cursor: Point,
    offset: AbsoluteOffset,
}

#[derive(Debug, Clone, Default)]
pub struct DragState {
    origin: Option<DragOrigin>,
}

impl DragState {
    pub fn begin(&mut self, cursor: Point, offset: AbsoluteOffset) {
        self.origin = Some(DragOrigin { cursor, offset });
    }

    pub fn end(&mut self) {
        self.origin = None;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    /// Offset the scroll area should move to for the given cursor position.
    /// Moving the cursor right scrolls the content left. The result is not
    /// clamped to the scrollable range.
    #[must_use]
    pub fn offset_for(&self, cursor: Point) -> Option<AbsoluteOffset> {
        let origin = self.origin?;
        Some(AbsoluteOffset {
            x: origin.offset.x - (cursor.x - origin.cursor.x),
            y: origin.offset.y - (cursor.y - origin.cursor.y),
        })
    }
}
