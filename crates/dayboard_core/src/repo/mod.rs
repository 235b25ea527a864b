//! Persistence layer: slot storage, debounced write scheduling, backups.
//!
//! # Responsibility
//! - Keep SQL and JSON (de)serialization details behind the slot boundary.
//! - Never let a corrupted slot surface as an error to state loading;
//!   loads degrade to typed fallbacks.
//!
//! # Invariants
//! - All slot access goes through `SlotKey`; no free-form slot names.

pub mod backup;
pub mod debounce;
pub mod slot_repo;
