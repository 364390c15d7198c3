//! Door placement against room walls.

use floorplan_core::LayoutConfig;
use serde::{Deserialize, Serialize};

use crate::model::{Door, Orientation, Point, Room, WallSide};
use crate::snap::snap_point_to_grid;

/// A click resolved onto a wall: the point on the wall line and the axis
/// of that wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallHit {
    pub point: Point,
    pub orientation: Orientation,
}

impl WallHit {
    pub fn new(point: Point, orientation: Orientation) -> Self {
        Self { point, orientation }
    }

    /// The door this hit places.
    pub fn to_door(&self) -> Door {
        Door::new(self.point.x, self.point.y, self.orientation)
    }
}

/// Edges are tested in this order for every room; the first match wins.
const EDGE_TEST_ORDER: [WallSide; 4] = [WallSide::Top, WallSide::Bottom, WallSide::Left, WallSide::Right];

fn hit_edge(room: &Room, side: WallSide, p: Point, tolerance: f64) -> Option<WallHit> {
    let within_x = p.x >= room.x && p.x <= room.right();
    let within_y = p.y >= room.y && p.y <= room.bottom();

    let (line, off_axis, within_span) = match side {
        WallSide::Top => (room.y, p.y, within_x),
        WallSide::Bottom => (room.bottom(), p.y, within_x),
        WallSide::Left => (room.x, p.x, within_y),
        WallSide::Right => (room.right(), p.x, within_y),
    };

    if (off_axis - line).abs() >= tolerance || !within_span {
        return None;
    }

    let point = if side.is_horizontal() {
        Point::new(p.x, line)
    } else {
        Point::new(line, p.y)
    };
    Some(WallHit::new(point, side.orientation()))
}

/// Resolves a raw click to a point on the nearest qualifying wall.
///
/// The click is grid-snapped first. Rooms are scanned in insertion order and
/// each room's edges in the order top, bottom, left, right; the first edge
/// whose line is strictly within `wall_intersection_tolerance` of the
/// snapped point, and whose span contains it, wins. Coinciding walls of
/// adjacent rooms therefore resolve to the earlier room.
pub fn find_wall_intersection(x: f64, y: f64, rooms: &[Room], config: &LayoutConfig) -> Option<WallHit> {
    let snapped = snap_point_to_grid(x, y, config.grid_size);
    let tolerance = config.wall_intersection_tolerance;

    rooms.iter().find_map(|room| {
        EDGE_TEST_ORDER
            .iter()
            .find_map(|side| hit_edge(room, *side, snapped, tolerance))
    })
}
