//! Grid and corner snapping.
//!
//! Every point a user drags is quantised here before it reaches the layout:
//! first against the corners of existing rooms, then against the grid.

use floorplan_core::LayoutConfig;

use crate::model::{Point, Room};

/// Rounds `value` to the nearest multiple of `grid_size`.
///
/// Halfway values round toward positive infinity, so `-10.0` on a 20 grid
/// snaps to `0.0` while `10.0` snaps to `20.0`.
pub fn snap_to_grid(value: f64, grid_size: f64) -> f64 {
    (value / grid_size + 0.5).floor() * grid_size
}

/// Snaps both coordinates of a point to the grid.
pub fn snap_point_to_grid(x: f64, y: f64, grid_size: f64) -> Point {
    Point::new(snap_to_grid(x, grid_size), snap_to_grid(y, grid_size))
}

/// Corners of every room, rooms in insertion order, corners in
/// [`Room::corners`] order.
pub fn snap_points(rooms: &[Room]) -> Vec<Point> {
    rooms.iter().flat_map(|room| room.corners()).collect()
}

/// Snaps `(x, y)` to the closest candidate strictly within
/// `config.snap_distance`, or to the grid when none is that close.
///
/// When several candidates are equally close the first one wins. A NaN
/// coordinate is never within range of a candidate.
pub fn snap_to_nearest_point(x: f64, y: f64, candidates: &[Point], config: &LayoutConfig) -> Point {
    let raw = Point::new(x, y);
    let mut closest: Option<(f64, Point)> = None;

    for candidate in candidates {
        let distance = raw.distance_to(candidate);
        if distance.is_nan() || distance >= config.snap_distance {
            continue;
        }
        match closest {
            Some((best, _)) if distance >= best => {}
            _ => closest = Some((distance, *candidate)),
        }
    }

    match closest {
        Some((_, point)) => point,
        None => snap_point_to_grid(x, y, config.grid_size),
    }
}
