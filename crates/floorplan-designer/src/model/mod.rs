use serde::{Deserialize, Serialize};

mod door;
mod room;
mod wall;

pub use door::{Door, Orientation};
pub use room::{Room, RoomDraft};
pub use wall::{Segment, WallSegment, WallSide};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
