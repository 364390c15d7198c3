//! Door placement on click.

use tracing::debug;

use super::{FloorPlanEditor, Tool};
use crate::intersection::find_wall_intersection;
use crate::model::{Door, Point};

impl FloorPlanEditor {
    /// Resolves `raw` onto a wall and appends a door there.
    ///
    /// Returns `None`, leaving the layout untouched, when no wall is close.
    pub fn place_door(&mut self, raw: Point) -> Option<Door> {
        let Some(hit) = find_wall_intersection(raw.x, raw.y, self.layout.rooms(), &self.config)
        else {
            debug!("No wall near ({}, {}), click ignored", raw.x, raw.y);
            return None;
        };

        let door = hit.to_door();
        self.layout.add_door(door);
        Some(door)
    }

    /// Places a door when the door tool is selected; otherwise ignored.
    pub fn click(&mut self, raw: Point) -> Option<Door> {
        if self.tool != Tool::Door {
            return None;
        }
        self.place_door(raw)
    }
}
