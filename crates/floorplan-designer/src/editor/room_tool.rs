//! Room drag: anchor on pointer down, resize on move, commit on release.

use tracing::debug;

use super::{FloorPlanEditor, Tool};
use crate::model::{Point, Room, RoomDraft};
use crate::snap::snap_to_nearest_point;

impl FloorPlanEditor {
    fn snap(&self, raw: Point) -> Point {
        snap_to_nearest_point(raw.x, raw.y, &self.layout.snap_points(), &self.config)
    }

    /// Anchor for a new room: `raw` snapped to a room corner or the grid.
    pub fn begin_room(&self, raw: Point) -> Point {
        self.snap(raw)
    }

    /// Candidate room from `anchor` to the snapped `raw` corner. Not committed.
    pub fn update_room(&self, anchor: Point, raw: Point) -> RoomDraft {
        let corner = self.snap(raw);
        RoomDraft::new(anchor.x, anchor.y, corner.x - anchor.x, corner.y - anchor.y)
    }

    /// Commits `draft` to the layout. Returns false when it was too small.
    pub fn commit_room(&mut self, draft: RoomDraft) -> bool {
        self.layout
            .add_room(draft, self.config.min_room_extent())
            .is_some()
    }

    /// Starts a room drag. Ignored while the door tool is selected.
    pub fn pointer_down(&mut self, raw: Point) {
        if self.tool == Tool::Door {
            return;
        }
        let anchor = self.begin_room(raw);
        debug!("Room drag anchored at ({}, {})", anchor.x, anchor.y);
        self.draft = Some(RoomDraft::at(anchor));
    }

    /// Resizes the room being dragged. Ignored when no drag is active.
    pub fn pointer_move(&mut self, raw: Point) {
        if let Some(draft) = self.draft {
            self.draft = Some(self.update_room(draft.anchor(), raw));
        }
    }

    /// Ends a room drag, committing the draft if it is large enough.
    ///
    /// Returns the committed room. Ignored when no drag is active.
    pub fn pointer_up(&mut self) -> Option<Room> {
        let draft = self.draft.take()?;
        self.layout.add_room(draft, self.config.min_room_extent())
    }

    /// The pointer left the canvas; handled exactly like a release.
    pub fn pointer_leave(&mut self) -> Option<Room> {
        self.pointer_up()
    }
}
