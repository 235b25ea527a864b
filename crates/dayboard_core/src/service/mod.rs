//! Dashboard state container and lifecycle operations.
//!
//! # Responsibility
//! - Orchestrate entity mutations, archive moves and persistence marking
//!   behind one explicitly-owned state container.
//! - Keep the view layer decoupled from storage details.
//!
//! # Invariants
//! - The container is the sole writer of the active collections; archives
//!   are written only by the lifecycle moves (delete, complete, undo,
//!   restore, purge).

pub mod archive;
pub mod daily;
pub mod dashboard;
pub mod projects;
pub mod rollover;
pub mod weekly;
