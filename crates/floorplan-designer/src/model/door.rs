use std::fmt;

use serde::{Deserialize, Serialize};

use super::Point;

/// The wall axis a door interrupts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Door on a top or bottom wall
    Horizontal,
    /// Door on a left or right wall
    Vertical,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// A door centred on a room wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Door {
    pub x: f64,
    pub y: f64,
    pub orientation: Orientation,
}

impl Door {
    pub fn new(x: f64, y: f64, orientation: Orientation) -> Self {
        Self { x, y, orientation }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}
