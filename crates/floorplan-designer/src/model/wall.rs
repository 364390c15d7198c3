use serde::{Deserialize, Serialize};

use super::{Orientation, Point};

/// Which side of its room a wall bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallSide {
    Top,
    Right,
    Bottom,
    Left,
}

impl WallSide {
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// Orientation of a door cut into this wall.
    pub fn orientation(&self) -> Orientation {
        if self.is_horizontal() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// One side of a room. Derived from the room bounds on demand, never stored.
///
/// `start` is always the end with the smaller coordinate along the wall axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallSegment {
    pub start: Point,
    pub end: Point,
    pub side: WallSide,
}

impl WallSegment {
    pub fn new(start: Point, end: Point, side: WallSide) -> Self {
        Self { start, end, side }
    }

    pub fn is_horizontal(&self) -> bool {
        self.side.is_horizontal()
    }

    /// Fixed coordinate of the wall line (y for horizontal walls, x for vertical).
    pub fn line(&self) -> f64 {
        if self.is_horizontal() {
            self.start.y
        } else {
            self.start.x
        }
    }

    /// Start and end coordinates along the wall axis.
    pub fn span(&self) -> (f64, f64) {
        if self.is_horizontal() {
            (self.start.x, self.end.x)
        } else {
            (self.start.y, self.end.y)
        }
    }

    /// Projects `p` onto the wall axis.
    pub fn axis_position(&self, p: Point) -> f64 {
        if self.is_horizontal() {
            p.x
        } else {
            p.y
        }
    }

    /// Point on the wall line at `pos` along the wall axis.
    pub fn point_at(&self, pos: f64) -> Point {
        if self.is_horizontal() {
            Point::new(pos, self.start.y)
        } else {
            Point::new(self.start.x, pos)
        }
    }

    pub fn length(&self) -> f64 {
        let (start, end) = self.span();
        end - start
    }

    pub fn as_segment(&self) -> Segment {
        Segment::new(self.start, self.end)
    }
}

/// A drawable straight piece of wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }
}
