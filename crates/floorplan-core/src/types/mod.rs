//! Shared-state type aliases.
//!
//! - [`aliases`]: `Arc<Mutex<T>>` for hosts that dispatch input on several threads.

pub mod aliases;

pub use aliases::*;
