//! Wall decomposition.
//!
//! A room has four walls. Each door lying on a wall cuts a gap of
//! `door_width` centred on the door; what remains of the wall is returned
//! as drawable segments ordered along the wall axis.

use floorplan_core::WALL_EPSILON;

use crate::model::{Door, Point, Room, Segment, WallSegment, WallSide};

/// The four walls of `room` in the order top, right, bottom, left.
pub fn walls_of(room: &Room) -> [WallSegment; 4] {
    let (left, top, right, bottom) = (room.x, room.y, room.right(), room.bottom());
    [
        WallSegment::new(Point::new(left, top), Point::new(right, top), WallSide::Top),
        WallSegment::new(Point::new(right, top), Point::new(right, bottom), WallSide::Right),
        WallSegment::new(
            Point::new(left, bottom),
            Point::new(right, bottom),
            WallSide::Bottom,
        ),
        WallSegment::new(Point::new(left, top), Point::new(left, bottom), WallSide::Left),
    ]
}

/// True when `door` sits on the wall line (within [`WALL_EPSILON`]) and
/// inside the wall span, endpoints included.
///
/// The door's orientation is not consulted: a door on a shared corner cuts
/// every wall that passes through it.
pub fn is_door_on_wall(wall: &WallSegment, door: &Door) -> bool {
    let p = door.position();
    let off_axis = if wall.is_horizontal() { p.y } else { p.x };
    let along = wall.axis_position(p);
    let (start, end) = wall.span();

    (off_axis - wall.line()).abs() < WALL_EPSILON && along >= start && along <= end
}

/// Doors cutting `wall`, in the order they appear in `doors`.
pub fn doors_on_wall<'a>(wall: &WallSegment, doors: &'a [Door]) -> Vec<&'a Door> {
    doors.iter().filter(|door| is_door_on_wall(wall, door)).collect()
}

/// Splits `wall` into the pieces left standing around its doors.
///
/// Doors are processed in ascending position along the wall. Gaps that
/// overlap, or that start before the wall does, are clamped: the cursor
/// only ever moves forward and no zero or negative length piece is emitted.
pub fn drawable_segments(wall: &WallSegment, doors: &[Door], door_width: f64) -> Vec<Segment> {
    let mut on_wall = doors_on_wall(wall, doors);
    if on_wall.is_empty() {
        return vec![wall.as_segment()];
    }

    on_wall.sort_by(|a, b| {
        wall.axis_position(a.position())
            .total_cmp(&wall.axis_position(b.position()))
    });

    let half = door_width / 2.0;
    let (start, end) = wall.span();
    let mut cursor = start;
    let mut segments = Vec::with_capacity(on_wall.len() + 1);

    for door in on_wall {
        let pos = wall.axis_position(door.position());
        if pos - half > cursor {
            segments.push(Segment::new(wall.point_at(cursor), wall.point_at(pos - half)));
        }
        cursor = pos + half;
    }

    if cursor < end {
        segments.push(Segment::new(wall.point_at(cursor), wall.point_at(end)));
    }

    segments
}
