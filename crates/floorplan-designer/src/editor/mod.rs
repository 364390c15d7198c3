//! Editor state for host integration.
//! Owns the layout and turns pointer input into layout changes.
//!
//! This module is split into submodules by tool:
//! - `room_tool`: room drag (begin, update, commit) and its pointer handlers
//! - `door_tool`: door placement and the click handler
//!
//! The editor never redraws on its own. Hosts call [`FloorPlanEditor::scene`]
//! after handling an event and render the result.

mod door_tool;
mod room_tool;

use std::fmt;
use std::str::FromStr;

use floorplan_core::{thread_safe, LayoutConfig, ThreadSafe};
use serde::{Deserialize, Serialize};

use crate::layout::Layout;
use crate::model::RoomDraft;
use crate::scene::{build_scene, Scene};

/// Tool selected in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Drag out rectangular rooms
    #[default]
    Room,
    /// Click on walls to place doors
    Door,
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Room => write!(f, "room"),
            Self::Door => write!(f, "door"),
        }
    }
}

impl FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "room" => Ok(Self::Room),
            "door" => Ok(Self::Door),
            _ => Err(format!("Unknown tool: {}", s)),
        }
    }
}

/// Editor state: one layout, its tuning, the selected tool and any room
/// currently being dragged.
#[derive(Debug, Clone, Default)]
pub struct FloorPlanEditor {
    layout: Layout,
    config: LayoutConfig,
    tool: Tool,
    draft: Option<RoomDraft>,
}

impl FloorPlanEditor {
    /// Creates an editor with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an editor with the given configuration.
    pub fn with_config(config: LayoutConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid layout config: {config:?}");
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Selects a tool. Switching tools abandons a drag in progress.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool != tool && self.draft.take().is_some() {
            tracing::debug!("Abandoned room draft on switch to {} tool", tool);
        }
        self.tool = tool;
    }

    /// The room being dragged, if any.
    pub fn draft(&self) -> Option<&RoomDraft> {
        self.draft.as_ref()
    }

    pub fn is_drawing(&self) -> bool {
        self.draft.is_some()
    }

    /// Empties the layout and drops any drag in progress.
    pub fn clear(&mut self) {
        self.layout.clear();
        self.draft = None;
    }

    /// Renderer-neutral primitives for the current state.
    pub fn scene(&self) -> Scene {
        build_scene(&self.layout, self.draft.as_ref(), &self.config)
    }
}

/// Wraps an editor for hosts that dispatch input from several threads.
///
/// All mutation goes through the one lock, so the layout keeps a single
/// writer at a time.
pub fn shared_editor(config: LayoutConfig) -> ThreadSafe<FloorPlanEditor> {
    thread_safe(FloorPlanEditor::with_config(config))
}
