//! Domain model for the dashboard state core.
//!
//! # Responsibility
//! - Define the canonical entity shapes persisted to storage slots.
//! - Keep lifecycle flags (`done`, `deleted`, `completed`) as plain data;
//!   transition rules live in the service layer.
//!
//! # Invariants
//! - Every entity is identified by a stable `EntryId`.
//! - Serialized field names follow the camelCase wire contract of the
//!   backup format.

pub mod archive;
pub mod history;
pub mod project;
pub mod task;
pub mod view;
