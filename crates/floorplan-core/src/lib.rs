//! # Floor-plan Core
//!
//! Core types and utilities shared by the floor-plan crates.
//! Provides the tuning configuration for the layout engine, error types,
//! grid-unit formatting, and shared-state aliases for hosts that drive the
//! editor from more than one thread.

pub mod config;
pub mod error;
pub mod types;
pub mod units;

pub use config::{
    LayoutConfig, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_DOOR_WIDTH,
    DEFAULT_GRID_SIZE, DEFAULT_SNAP_DISTANCE, WALL_EPSILON,
};
pub use error::ConfigError;
pub use types::{thread_safe, ThreadSafe};
pub use units::{format_grid_length, to_grid_units};
