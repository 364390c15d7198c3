//! Grid unit conversion utilities
//!
//! Canvas coordinates are converted to human-readable lengths by dividing
//! by the grid size: one grid cell is one unit of length on the plan.

/// Converts a canvas length to grid units.
pub fn to_grid_units(value: f64, grid_size: f64) -> f64 {
    value / grid_size
}

/// Format a canvas length for display in grid units
///
/// * `value` - Length in canvas units (may be negative for an in-progress drag)
/// * `grid_size` - Grid cell size
///
/// Always one decimal place.
pub fn format_grid_length(value: f64, grid_size: f64) -> String {
    format!("{:.1}", to_grid_units(value, grid_size))
}
