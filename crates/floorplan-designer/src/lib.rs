//! # Floor-plan Designer
//!
//! This crate provides the geometric layout engine of the floor-plan editor:
//! rooms are dragged out on a grid, doors are clicked onto walls, and walls
//! are split around door openings for drawing.
//!
//! ## Core Components
//!
//! - **Snap**: Grid quantisation and snapping to existing room corners
//! - **Walls**: Four walls per room, cut into drawable pieces around doors
//! - **Intersection**: Resolving a click onto the nearest room wall
//! - **Layout**: Append-only store of rooms and doors
//! - **Editor**: Tool selection and pointer handling over one layout
//! - **Scene**: Renderer-neutral primitives for a host to draw
//!
//! ## Architecture
//!
//! ```text
//! FloorPlanEditor (commands from the host)
//!   ├── Layout (rooms, doors)
//!   ├── Snap / Intersection (input -> geometry)
//!   └── Scene (queries for the host)
//!         └── Walls (door cut-outs)
//! ```
//!
//! Derived geometry is never cached: walls and snap points are recomputed
//! from the rooms on every query.
//!
//! ## Usage
//!
//! ```rust
//! use floorplan_designer::{FloorPlanEditor, Point, Tool};
//!
//! let mut editor = FloorPlanEditor::new();
//! editor.pointer_down(Point::new(5.0, 5.0));
//! editor.pointer_move(Point::new(205.0, 105.0));
//! assert!(editor.pointer_up().is_some());
//!
//! editor.set_tool(Tool::Door);
//! assert!(editor.click(Point::new(100.0, 2.0)).is_some());
//!
//! let scene = editor.scene();
//! assert_eq!(scene.walls.len(), 5);
//! ```

pub mod editor;
pub mod intersection;
pub mod layout;
pub mod model;
pub mod scene;
pub mod snap;
pub mod walls;

pub use editor::{shared_editor, FloorPlanEditor, Tool};
pub use intersection::{find_wall_intersection, WallHit};
pub use layout::Layout;
pub use model::{Door, Orientation, Point, Room, RoomDraft, Segment, WallSegment, WallSide};
pub use scene::{build_scene, ArcPrimitive, DimensionLabel, DoorSymbol, Scene};
pub use snap::{snap_point_to_grid, snap_points, snap_to_grid, snap_to_nearest_point};
pub use walls::{doors_on_wall, drawable_segments, is_door_on_wall, walls_of};
