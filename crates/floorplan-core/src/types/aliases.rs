//! Type aliases for sharing editor state with a host.
//!
//! The layout engine is single-writer: every mutation goes through one
//! owner. A host that keeps the editor behind [`ThreadSafe`] keeps that
//! property, since all writes must take the same lock.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use floorplan_core::types::*;
//!
//! // Input and rendering on different threads
//! let editor: ThreadSafe<FloorPlanEditor> = thread_safe(FloorPlanEditor::default());
//! ```

use parking_lot::Mutex;
use std::sync::Arc;

/// A thread-safe, mutex-protected wrapper for cross-thread sharing.
///
/// Uses `parking_lot::Mutex`, which does not poison on panic.
pub type ThreadSafe<T> = Arc<Mutex<T>>;

/// Wraps a value behind a mutex for cross-thread sharing.
pub fn thread_safe<T>(value: T) -> ThreadSafe<T> {
    Arc::new(Mutex::new(value))
}
