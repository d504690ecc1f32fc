//! Display-view derivation.
//!
//! # Responsibility
//! - Compose override and base content into the dataset the renderer shows.
//!
//! # Invariants
//! - Derivation is pure; nothing here touches storage or session state.

pub mod merge;
