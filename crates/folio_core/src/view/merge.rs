//! Merge engine producing the display-ready dataset.
//!
//! # Responsibility
//! - Concatenate override entries ahead of base entries per category.
//! - Resolve the hero image to the override when present, base otherwise.
//!
//! # Invariants
//! - `compute_view` is pure and idempotent: identical inputs always yield
//!   structurally identical output, and neither input is mutated.
//! - Relative order is preserved inside both the override and base parts.

use crate::model::overrides::{OverrideEntry, OverrideState};
use crate::model::portfolio::{Experience, PortfolioData, Project, SkillGroup};

/// The dataset actually rendered. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedView {
    /// Resolved hero image: override when set, base profile image otherwise.
    pub hero_image: String,
    pub experience: Vec<Experience>,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<Project>,
}

/// Computes the merged view for rendering and export.
pub fn compute_view(base: &PortfolioData, overrides: &OverrideState) -> MergedView {
    MergedView {
        hero_image: overrides
            .hero_image
            .clone()
            .unwrap_or_else(|| base.profile_image.clone()),
        experience: merge_category(&overrides.experience, &base.experience),
        skills: merge_category(&overrides.skills, &base.skills),
        projects: merge_category(&overrides.projects, &base.projects),
    }
}

fn merge_category<T: Clone>(overrides: &[OverrideEntry<T>], base: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(overrides.len() + base.len());
    merged.extend(overrides.iter().map(|entry| entry.record.clone()));
    merged.extend(base.iter().cloned());
    merged
}
