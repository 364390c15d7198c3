//! In-memory store of rooms and doors.

use serde::Serialize;
use tracing::debug;

use crate::model::{Door, Point, Room, RoomDraft, Segment, WallSegment};
use crate::snap::snap_points;
use crate::walls::{drawable_segments, walls_of};

/// The rooms and doors of one floor plan, in insertion order.
///
/// Growth is append-only; derived geometry (walls, snap points) is
/// recomputed from the rooms on every query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    rooms: Vec<Room>,
    doors: Vec<Door>,
}

impl Layout {
    /// Creates an empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn door_count(&self) -> usize {
        self.doors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty() && self.doors.is_empty()
    }

    /// Normalises `draft` and appends it.
    ///
    /// Drafts whose width or height does not exceed `min_extent` in
    /// magnitude are dropped. Returns the committed room, if any.
    pub fn add_room(&mut self, draft: RoomDraft, min_extent: f64) -> Option<Room> {
        match draft.normalize(min_extent) {
            Some(room) => {
                debug!(
                    "Added room at ({}, {}) size {}x{}",
                    room.x, room.y, room.width, room.height
                );
                self.rooms.push(room);
                Some(room)
            }
            None => {
                debug!(
                    "Discarded room draft {}x{} (minimum extent {})",
                    draft.width, draft.height, min_extent
                );
                None
            }
        }
    }

    /// Appends a door. No validation is performed.
    pub fn add_door(&mut self, door: Door) {
        debug!(
            "Added {} door at ({}, {})",
            door.orientation, door.x, door.y
        );
        self.doors.push(door);
    }

    /// Removes every room and door.
    pub fn clear(&mut self) {
        self.rooms.clear();
        self.doors.clear();
    }

    /// Corners of every room, used as snap targets.
    pub fn snap_points(&self) -> Vec<Point> {
        snap_points(&self.rooms)
    }

    /// All walls, rooms in insertion order, four per room.
    pub fn walls(&self) -> Vec<WallSegment> {
        self.rooms.iter().flat_map(walls_of).collect()
    }

    /// Drawable pieces of every wall after cutting door gaps.
    pub fn drawable_walls(&self, door_width: f64) -> Vec<Segment> {
        self.walls()
            .iter()
            .flat_map(|wall| drawable_segments(wall, &self.doors, door_width))
            .collect()
    }
}
