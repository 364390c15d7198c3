//! Tuning configuration for the layout engine
//!
//! Every constant the snapping and wall algorithms depend on lives in
//! [`LayoutConfig`] so hosts can adjust them without touching the engine:
//! - `grid_size`: grid cell size, snap quantum, and the minimum room extent
//! - `snap_distance`: capture radius for snapping to room corners
//! - `door_width`: gap reserved in a wall for each door
//! - `wall_intersection_tolerance`: capture radius for door clicks near a wall,
//!   half a grid cell unless set explicitly
//! - `canvas_width` / `canvas_height`: extent of the drawn grid

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// Default grid cell size in canvas units.
pub const DEFAULT_GRID_SIZE: f64 = 20.0;

/// Default capture radius for corner snapping.
pub const DEFAULT_SNAP_DISTANCE: f64 = 15.0;

/// Default door gap width.
pub const DEFAULT_DOOR_WIDTH: f64 = 40.0;

/// Default canvas width used for grid lines.
pub const DEFAULT_CANVAS_WIDTH: f64 = 1880.0;

/// Default canvas height used for grid lines.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 750.0;

/// Maximum distance between a door and a wall line for the door to cut that wall.
pub const WALL_EPSILON: f64 = 1.0;

/// Tuning parameters of the layout engine.
///
/// Missing keys take their defaults when deserialised. A missing
/// `wall_intersection_tolerance` follows the deserialised `grid_size`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "LayoutConfigFile")]
pub struct LayoutConfig {
    /// Grid cell size and snap quantum
    pub grid_size: f64,
    /// Corner snap capture radius (strict)
    pub snap_distance: f64,
    /// Width of the gap each door cuts into its wall
    pub door_width: f64,
    /// Capture radius for placing doors on walls (strict)
    pub wall_intersection_tolerance: f64,
    /// Canvas width covered by grid lines
    pub canvas_width: f64,
    /// Canvas height covered by grid lines
    pub canvas_height: f64,
}

/// On-disk shape of [`LayoutConfig`], every key optional.
#[derive(Deserialize)]
struct LayoutConfigFile {
    grid_size: Option<f64>,
    snap_distance: Option<f64>,
    door_width: Option<f64>,
    wall_intersection_tolerance: Option<f64>,
    canvas_width: Option<f64>,
    canvas_height: Option<f64>,
}

impl From<LayoutConfigFile> for LayoutConfig {
    fn from(file: LayoutConfigFile) -> Self {
        let base = Self::with_grid_size(file.grid_size.unwrap_or(DEFAULT_GRID_SIZE));
        Self {
            snap_distance: file.snap_distance.unwrap_or(base.snap_distance),
            door_width: file.door_width.unwrap_or(base.door_width),
            wall_intersection_tolerance: file
                .wall_intersection_tolerance
                .unwrap_or(base.wall_intersection_tolerance),
            canvas_width: file.canvas_width.unwrap_or(base.canvas_width),
            canvas_height: file.canvas_height.unwrap_or(base.canvas_height),
            ..base
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::with_grid_size(DEFAULT_GRID_SIZE)
    }
}

impl LayoutConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config for the given grid size, with the wall tolerance at half a cell.
    pub fn with_grid_size(grid_size: f64) -> Self {
        Self {
            grid_size,
            snap_distance: DEFAULT_SNAP_DISTANCE,
            door_width: DEFAULT_DOOR_WIDTH,
            wall_intersection_tolerance: grid_size / 2.0,
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
        }
    }

    /// Smallest extent (exclusive) a dragged room must exceed on both axes.
    pub fn min_room_extent(&self) -> f64 {
        self.grid_size
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("grid_size", self.grid_size),
            ("snap_distance", self.snap_distance),
            ("door_width", self.door_width),
            ("wall_intersection_tolerance", self.wall_intersection_tolerance),
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
        ];

        for (key, value) in fields {
            if !value.is_finite() {
                debug!("Rejected layout config: {} = {} is not finite", key, value);
                return Err(ConfigError::NotFinite {
                    key: key.to_string(),
                    value,
                });
            }
            if value <= 0.0 {
                debug!("Rejected layout config: {} = {} is not positive", key, value);
                return Err(ConfigError::NotPositive {
                    key: key.to_string(),
                    value,
                });
            }
        }

        Ok(())
    }
}
