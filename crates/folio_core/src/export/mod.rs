//! Merged-dataset export.
//!
//! # Responsibility
//! - Render the full-replacement dataset into a loadable source artifact.
//! - Decode a rendered artifact back into its embedded dataset.
//!
//! # Invariants
//! - Export reads session state; it never alters it.
//! - `decode_artifact(render_artifact(..))` reproduces the merged dataset
//!   exactly.

pub mod artifact;
