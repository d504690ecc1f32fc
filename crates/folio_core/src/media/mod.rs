//! Image intake for override visuals.
//!
//! # Responsibility
//! - Turn user-selected image files into self-contained data URIs.
//!
//! # Invariants
//! - Every encode request delivers exactly one completion, success or
//!   failure.

pub mod encode;
