use serde::{Deserialize, Serialize};

use super::Point;

/// A committed room: an axis-aligned rectangle with positive extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Room {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        debug_assert!(
            width > 0.0 && height > 0.0,
            "room extents must be positive, got {width}x{height}"
        );
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Corners in snap order: top-left, top-right, bottom-left, bottom-right.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.right(), self.y),
            Point::new(self.x, self.bottom()),
            Point::new(self.right(), self.bottom()),
        ]
    }
}

/// A room being dragged out. The anchor stays where the drag started and
/// the extents are signed, so dragging up or left gives negative values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomDraft {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RoomDraft {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A zero-sized draft anchored at `anchor`.
    pub fn at(anchor: Point) -> Self {
        Self::new(anchor.x, anchor.y, 0.0, 0.0)
    }

    pub fn anchor(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// True when both extents exceed `min_extent` in magnitude.
    pub fn is_large_enough(&self, min_extent: f64) -> bool {
        self.width.abs() > min_extent && self.height.abs() > min_extent
    }

    /// Moves the anchor to the top-left corner and takes absolute extents.
    ///
    /// Returns `None` unless both extents exceed `min_extent` in magnitude.
    /// A negative or NaN `min_extent` counts as zero, so degenerate drafts
    /// are still rejected.
    pub fn normalize(&self, min_extent: f64) -> Option<Room> {
        if !self.is_large_enough(min_extent.max(0.0)) {
            return None;
        }

        let x = if self.width < 0.0 {
            self.x + self.width
        } else {
            self.x
        };
        let y = if self.height < 0.0 {
            self.y + self.height
        } else {
            self.y
        };

        Some(Room::new(x, y, self.width.abs(), self.height.abs()))
    }
}
