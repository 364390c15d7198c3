//! Renderer-neutral drawing primitives.
//!
//! [`build_scene`] flattens the layout into what a host has to draw: grid
//! lines, room rectangles, the wall pieces left between doors, dimension
//! labels, door symbols and the room currently being dragged. Colours,
//! stroke widths and fonts are the host's business.

use std::f64::consts::PI;

use floorplan_core::{format_grid_length, LayoutConfig};
use serde::Serialize;

use crate::layout::Layout;
use crate::model::{Door, Orientation, Point, Room, RoomDraft, Segment};

/// Distance of the top width label above the room.
const TOP_LABEL_OFFSET: f64 = 5.0;
/// Distance of the bottom width label below the room (baseline).
const BOTTOM_LABEL_OFFSET: f64 = 15.0;
/// Distance of the height labels from the side walls.
const SIDE_LABEL_OFFSET: f64 = 10.0;

/// A dimension label anchored at its centre.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionLabel {
    pub text: String,
    pub position: Point,
    /// Rotated a quarter turn counter-clockwise (height labels)
    pub rotated: bool,
}

/// A circular arc, angles in radians, drawn clockwise in screen space
/// from `start_angle` to `end_angle`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArcPrimitive {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// Plan symbol of a door: the leaf across the gap, the quarter-circle swing
/// and the open-leaf guide line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DoorSymbol {
    pub door: Door,
    pub leaf: Segment,
    pub swing: ArcPrimitive,
    pub guide: Segment,
}

impl DoorSymbol {
    pub fn new(door: Door, door_width: f64) -> Self {
        let half = door_width / 2.0;
        let (x, y) = (door.x, door.y);

        match door.orientation {
            Orientation::Horizontal => Self {
                door,
                leaf: Segment::new(Point::new(x - half, y), Point::new(x + half, y)),
                swing: ArcPrimitive {
                    center: Point::new(x + half, y),
                    radius: door_width,
                    start_angle: PI,
                    end_angle: PI * 1.5,
                },
                guide: Segment::new(
                    Point::new(x + half, y),
                    Point::new(x + half, y - door_width),
                ),
            },
            Orientation::Vertical => Self {
                door,
                leaf: Segment::new(Point::new(x, y - half), Point::new(x, y + half)),
                swing: ArcPrimitive {
                    center: Point::new(x, y + half),
                    radius: door_width,
                    start_angle: PI * 1.5,
                    end_angle: PI * 2.0,
                },
                guide: Segment::new(
                    Point::new(x, y + half),
                    Point::new(x + door_width, y + half),
                ),
            },
        }
    }
}

/// Everything a host needs to draw one frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scene {
    pub grid_lines: Vec<Segment>,
    pub rooms: Vec<Room>,
    pub walls: Vec<Segment>,
    pub dimensions: Vec<DimensionLabel>,
    pub doors: Vec<DoorSymbol>,
    pub preview: Option<RoomDraft>,
}

/// Vertical grid lines first, then horizontal, each covering the canvas.
pub fn grid_lines(width: f64, height: f64, grid_size: f64) -> Vec<Segment> {
    let columns = (width / grid_size).floor() as usize;
    let rows = (height / grid_size).floor() as usize;
    let mut lines = Vec::with_capacity(columns + rows + 2);

    for i in 0..=columns {
        let x = i as f64 * grid_size;
        lines.push(Segment::new(Point::new(x, 0.0), Point::new(x, height)));
    }
    for i in 0..=rows {
        let y = i as f64 * grid_size;
        lines.push(Segment::new(Point::new(0.0, y), Point::new(width, y)));
    }

    lines
}

/// Width labels above and below, height labels left and right.
///
/// Extents are taken as given, so an in-progress drag up or left shows
/// negative lengths.
pub fn dimension_labels(x: f64, y: f64, width: f64, height: f64, grid_size: f64) -> [DimensionLabel; 4] {
    let width_text = format_grid_length(width, grid_size);
    let height_text = format_grid_length(height, grid_size);
    let mid_x = x + width / 2.0;
    let mid_y = y + height / 2.0;

    [
        DimensionLabel {
            text: width_text.clone(),
            position: Point::new(mid_x, y - TOP_LABEL_OFFSET),
            rotated: false,
        },
        DimensionLabel {
            text: width_text,
            position: Point::new(mid_x, y + height + BOTTOM_LABEL_OFFSET),
            rotated: false,
        },
        DimensionLabel {
            text: height_text.clone(),
            position: Point::new(x - SIDE_LABEL_OFFSET, mid_y),
            rotated: true,
        },
        DimensionLabel {
            text: height_text,
            position: Point::new(x + width + SIDE_LABEL_OFFSET, mid_y),
            rotated: true,
        },
    ]
}

/// Builds the scene for `layout` plus an optional room being dragged.
pub fn build_scene(layout: &Layout, draft: Option<&RoomDraft>, config: &LayoutConfig) -> Scene {
    let grid = config.grid_size;

    let mut dimensions: Vec<DimensionLabel> = layout
        .rooms()
        .iter()
        .flat_map(|room| dimension_labels(room.x, room.y, room.width, room.height, grid))
        .collect();
    if let Some(draft) = draft {
        dimensions.extend(dimension_labels(draft.x, draft.y, draft.width, draft.height, grid));
    }

    Scene {
        grid_lines: grid_lines(config.canvas_width, config.canvas_height, grid),
        rooms: layout.rooms().to_vec(),
        walls: layout.drawable_walls(config.door_width),
        dimensions,
        doors: layout
            .doors()
            .iter()
            .map(|door| DoorSymbol::new(*door, config.door_width))
            .collect(),
        preview: draft.copied(),
    }
}
