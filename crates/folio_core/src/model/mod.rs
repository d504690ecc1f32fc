//! Domain model for the portfolio content core.
//!
//! # Responsibility
//! - Define the bundled base-dataset record types.
//! - Define the persisted override-layer state.
//!
//! # Invariants
//! - Base-dataset values are never mutated by core operations.
//! - Every override entry is identified by a stable `RecordId`.

pub mod overrides;
pub mod portfolio;
