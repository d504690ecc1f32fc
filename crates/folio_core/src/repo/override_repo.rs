//! Override persistence adapter over the key-value store.
//!
//! # Responsibility
//! - Own the four persisted override keys and their encodings.
//! - Load the full override state fail-soft: an absent key yields an empty
//!   category, a corrupt value degrades to empty and is reported as a
//!   diagnostic instead of failing the session.
//! - Provide full-sequence replacement writes per category.
//!
//! # Invariants
//! - The hero-image key stores a raw string; the three category keys store
//!   JSON sequences.
//! - `clear_all` removes all four keys as one logical action.
//! - Loading never invents entries and never reorders a decoded sequence.

use crate::model::overrides::{OverrideEntry, OverrideState};
use crate::model::portfolio::{Experience, Project, SkillGroup};
use crate::repo::kv_store::{KeyValueStore, StoreError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Hero-image override key. Raw data-URI string.
pub const KEY_HERO_IMAGE: &str = "folio_hero_image";
/// Experience override key. JSON sequence of experience entries.
pub const KEY_EXPERIENCE: &str = "folio_custom_experience";
/// Project override key. JSON sequence of project entries.
pub const KEY_PROJECTS: &str = "folio_custom_projects";
/// Skill-group override key. JSON sequence of skill-group entries.
pub const KEY_SKILLS: &str = "folio_custom_skills";

/// All persisted override keys in clearing order.
pub const OVERRIDE_KEYS: [&str; 4] = [KEY_HERO_IMAGE, KEY_EXPERIENCE, KEY_PROJECTS, KEY_SKILLS];

pub type RepoResult<T> = Result<T, RepoError>;

/// Adapter error for override persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Store(StoreError),
    Encode { key: &'static str, message: String },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Encode { key, message } => {
                write!(f, "failed to encode override value for `{key}`: {message}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Encode { .. } => None,
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// One degraded key observed while loading persisted override state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadIssue {
    /// The persisted key whose value could not be decoded.
    pub key: &'static str,
    pub detail: String,
}

/// Load result: the usable state plus any per-key degradations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedOverrides {
    pub state: OverrideState,
    pub issues: Vec<LoadIssue>,
}

/// Persistence contract consumed by the session service.
pub trait OverrideRepository {
    /// Loads all four keys. Absent keys yield empty categories; corrupt
    /// values degrade to empty and are reported in `issues`.
    fn load_state(&self) -> RepoResult<LoadedOverrides>;
    fn save_hero_image(&self, data_uri: &str) -> RepoResult<()>;
    fn clear_hero_image(&self) -> RepoResult<()>;
    fn save_experience(&self, entries: &[OverrideEntry<Experience>]) -> RepoResult<()>;
    fn save_projects(&self, entries: &[OverrideEntry<Project>]) -> RepoResult<()>;
    fn save_skills(&self, entries: &[OverrideEntry<SkillGroup>]) -> RepoResult<()>;
    /// Removes all four persisted keys as one logical action.
    fn clear_all(&self) -> RepoResult<()>;
}

/// Override repository over any key-value store capability.
pub struct KvOverrideRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> KvOverrideRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Exposes the underlying store, mainly for integration assertions.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn load_entries<T: DeserializeOwned>(
        &self,
        key: &'static str,
        issues: &mut Vec<LoadIssue>,
    ) -> RepoResult<Vec<OverrideEntry<T>>> {
        let Some(text) = self.store.get(key)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&text) {
            Ok(entries) => Ok(entries),
            Err(err) => {
                issues.push(LoadIssue {
                    key,
                    detail: err.to_string(),
                });
                Ok(Vec::new())
            }
        }
    }

    fn save_entries<T: Serialize>(
        &self,
        key: &'static str,
        entries: &[OverrideEntry<T>],
    ) -> RepoResult<()> {
        let text = serde_json::to_string(entries).map_err(|err| RepoError::Encode {
            key,
            message: err.to_string(),
        })?;
        self.store.set(key, &text)?;
        Ok(())
    }
}

impl<S: KeyValueStore> OverrideRepository for KvOverrideRepository<S> {
    fn load_state(&self) -> RepoResult<LoadedOverrides> {
        let mut issues = Vec::new();

        let hero_image = self.store.get(KEY_HERO_IMAGE)?;
        let experience = self.load_entries(KEY_EXPERIENCE, &mut issues)?;
        let projects = self.load_entries(KEY_PROJECTS, &mut issues)?;
        let skills = self.load_entries(KEY_SKILLS, &mut issues)?;

        Ok(LoadedOverrides {
            state: OverrideState {
                hero_image,
                experience,
                projects,
                skills,
            },
            issues,
        })
    }

    fn save_hero_image(&self, data_uri: &str) -> RepoResult<()> {
        self.store.set(KEY_HERO_IMAGE, data_uri)?;
        Ok(())
    }

    fn clear_hero_image(&self) -> RepoResult<()> {
        self.store.remove(KEY_HERO_IMAGE)?;
        Ok(())
    }

    fn save_experience(&self, entries: &[OverrideEntry<Experience>]) -> RepoResult<()> {
        self.save_entries(KEY_EXPERIENCE, entries)
    }

    fn save_projects(&self, entries: &[OverrideEntry<Project>]) -> RepoResult<()> {
        self.save_entries(KEY_PROJECTS, entries)
    }

    fn save_skills(&self, entries: &[OverrideEntry<SkillGroup>]) -> RepoResult<()> {
        self.save_entries(KEY_SKILLS, entries)
    }

    fn clear_all(&self) -> RepoResult<()> {
        for key in OVERRIDE_KEYS {
            self.store.remove(key)?;
        }
        Ok(())
    }
}
