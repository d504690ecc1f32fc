//! Override-layer state.
//!
//! # Responsibility
//! - Hold the viewer-authored additions layered over the base dataset.
//! - Give every override entry a stable identity at creation time.
//!
//! # Invariants
//! - `RecordId` is assigned once and never reused for another entry.
//! - Entry order inside each sequence is the display order; newest entries
//!   sit at the front.
//! - An absent `hero_image` means "render the base profile image".

use crate::model::portfolio::{Experience, Project, SkillGroup};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one override entry.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RecordId = Uuid;

fn generate_record_id() -> RecordId {
    Uuid::new_v4()
}

/// One persisted override entry wrapping a dataset record.
///
/// The record flattens into the entry's JSON object, so persisted sequences
/// keep the plain record shape plus an `id` field. Sequences written before
/// ids existed decode fine; missing ids are regenerated on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideEntry<T> {
    /// Stable id used for durable addressing and auditing.
    #[serde(default = "generate_record_id")]
    pub id: RecordId,
    #[serde(flatten)]
    pub record: T,
}

impl<T> OverrideEntry<T> {
    /// Wraps a record with a freshly generated stable id.
    pub fn new(record: T) -> Self {
        Self {
            id: generate_record_id(),
            record,
        }
    }
}

/// The only mutable, persisted entity of the core.
///
/// Starts empty on first load; every mutation is written through to the
/// persistence adapter before the next one can begin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideState {
    /// Replacement hero image as a data URI; `None` falls back to base.
    pub hero_image: Option<String>,
    pub experience: Vec<OverrideEntry<Experience>>,
    pub projects: Vec<OverrideEntry<Project>>,
    pub skills: Vec<OverrideEntry<SkillGroup>>,
}

impl OverrideState {
    /// Returns whether no override of any category is present.
    pub fn is_empty(&self) -> bool {
        self.hero_image.is_none()
            && self.experience.is_empty()
            && self.projects.is_empty()
            && self.skills.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{OverrideEntry, OverrideState};
    use crate::model::portfolio::SkillGroup;

    #[test]
    fn new_entries_get_distinct_ids() {
        let group = SkillGroup {
            category: "Tools".to_string(),
            items: vec!["Git".to_string()],
            image: None,
        };
        let first = OverrideEntry::new(group.clone());
        let second = OverrideEntry::new(group);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn legacy_entry_without_id_decodes_with_generated_id() {
        let entry: OverrideEntry<SkillGroup> =
            serde_json::from_str(r#"{"category":"Data","items":["SQL"]}"#).unwrap();
        assert_eq!(entry.record.category, "Data");
        assert_eq!(entry.record.items, vec!["SQL".to_string()]);
    }

    #[test]
    fn default_state_is_empty() {
        assert!(OverrideState::default().is_empty());
    }
}
