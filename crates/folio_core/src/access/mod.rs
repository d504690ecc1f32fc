//! Session visibility policy.
//!
//! # Responsibility
//! - Derive the read-only viewer mode from the page URL once per session.
//! - Build the shareable restricted-mode link.
//!
//! # Invariants
//! - The gate is enforced at the presentation boundary; the override layer
//!   itself carries no lock.

pub mod gate;
