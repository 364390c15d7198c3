//! # Floorplan
//!
//! An interactive floor-plan editor core: draw rectangular rooms on a grid
//! and place doors on their walls, with snapping to the grid and to the
//! corners of existing rooms.
//!
//! ## Architecture
//!
//! Floorplan is organized as a workspace with multiple crates:
//!
//! 1. **floorplan-core** - Layout tuning, error types, grid units, shared-state aliases
//! 2. **floorplan-designer** - Snapping, wall decomposition, door placement, editor, scene
//! 3. **floorplan-settings** - Settings file loading and validation
//! 4. **floorplan** - Binary with a headless driver that reads pointer events
//!    from stdin and writes scenes as JSON

pub mod session;

pub use floorplan_core as core;
pub use floorplan_designer as designer;
pub use floorplan_settings as settings;

pub use floorplan_core::{ConfigError, LayoutConfig};
pub use floorplan_designer::{
    Door, FloorPlanEditor, Layout, Orientation, Point, Room, RoomDraft, Scene, Segment, Tool,
};
pub use floorplan_settings::{LoggingSettings, Settings};
pub use session::{Command, Session};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output on stderr (stdout carries driver output)
/// - RUST_LOG environment variable support, falling back to the
///   configured level
/// - Human-readable or JSON lines, per the logging settings
pub fn init_logging(logging: &LoggingSettings) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    let registry = tracing_subscriber::registry().with(env_filter);
    if logging.json {
        registry.with(fmt_layer.json()).try_init()?;
    } else {
        registry.with(fmt_layer).try_init()?;
    }

    Ok(())
}
