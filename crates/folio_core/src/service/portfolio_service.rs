//! Portfolio session service.
//!
//! # Responsibility
//! - Own the single session state: base dataset, override state, viewer
//!   mode and share link.
//! - Provide the console-facing mutation API with synchronous write-through
//!   persistence.
//! - Provide the renderer-facing read API (merged view, gate, revision).
//!
//! # Invariants
//! - The base dataset is never mutated; only override state changes.
//! - In-memory state and persisted state stay in lockstep after every
//!   mutation; a failed write degrades to memory-only for this session and
//!   is logged, never surfaced as a blocking error.
//! - The viewer mode is derived once at open and immutable afterwards.
//! - `revision` strictly increases across mutating calls, so renderers can
//!   poll for changes without sharing ambient state.

use crate::access::gate::{share_link, ViewerMode};
use crate::export::artifact::{render_artifact, Artifact, ExportResult};
use crate::model::overrides::{OverrideEntry, OverrideState, RecordId};
use crate::model::portfolio::{Experience, PortfolioData, Project, SkillGroup};
use crate::repo::override_repo::{
    OverrideRepository, KEY_EXPERIENCE, KEY_HERO_IMAGE, KEY_PROJECTS, KEY_SKILLS,
};
use crate::view::merge::{compute_view, MergedView};
use log::{info, warn};

/// One portfolio viewing/editing session.
pub struct PortfolioService<R: OverrideRepository> {
    base: PortfolioData,
    repo: R,
    mode: ViewerMode,
    share_link: String,
    state: OverrideState,
    revision: u64,
}

impl<R: OverrideRepository> PortfolioService<R> {
    /// Opens a session: derives the gate from the page URL and loads
    /// persisted override state.
    ///
    /// Loading is fail-soft: transport errors and corrupt records degrade
    /// to an empty category and are logged, never fatal.
    pub fn open(base: PortfolioData, repo: R, page_url: &str) -> Self {
        let mode = ViewerMode::from_page_url(page_url);
        let link = share_link(page_url);

        let state = match repo.load_state() {
            Ok(loaded) => {
                for issue in &loaded.issues {
                    warn!(
                        "event=override_load module=service status=degraded key={} error={}",
                        issue.key, issue.detail
                    );
                }
                loaded.state
            }
            Err(err) => {
                warn!("event=override_load module=service status=error error={err}");
                OverrideState::default()
            }
        };

        info!(
            "event=session_open module=service status=ok mode={} experience={} projects={} skills={} hero_override={}",
            mode.as_str(),
            state.experience.len(),
            state.projects.len(),
            state.skills.len(),
            state.hero_image.is_some()
        );

        Self {
            base,
            repo,
            mode,
            share_link: link,
            state,
            revision: 0,
        }
    }

    /// Prepends an experience override and persists the sequence.
    pub fn add_experience(&mut self, record: Experience) -> RecordId {
        let entry = OverrideEntry::new(record);
        let id = entry.id;
        self.state.experience.insert(0, entry);
        self.committed("experience", id, "add");
        self.persist_experience();
        id
    }

    /// Prepends a project override and persists the sequence.
    pub fn add_project(&mut self, record: Project) -> RecordId {
        let entry = OverrideEntry::new(record);
        let id = entry.id;
        self.state.projects.insert(0, entry);
        self.committed("projects", id, "add");
        self.persist_projects();
        id
    }

    /// Prepends a skill-group override and persists the sequence.
    pub fn add_skill_group(&mut self, record: SkillGroup) -> RecordId {
        let entry = OverrideEntry::new(record);
        let id = entry.id;
        self.state.skills.insert(0, entry);
        self.committed("skills", id, "add");
        self.persist_skills();
        id
    }

    /// Removes the experience override at `index`.
    ///
    /// The index addresses the override sequence, not the merged view.
    /// Out-of-range is a no-op returning `false`.
    pub fn delete_experience(&mut self, index: usize) -> bool {
        if index >= self.state.experience.len() {
            return false;
        }
        let removed = self.state.experience.remove(index);
        self.committed("experience", removed.id, "delete");
        self.persist_experience();
        true
    }

    /// Removes the project override at `index`. Out-of-range is a no-op.
    pub fn delete_project(&mut self, index: usize) -> bool {
        if index >= self.state.projects.len() {
            return false;
        }
        let removed = self.state.projects.remove(index);
        self.committed("projects", removed.id, "delete");
        self.persist_projects();
        true
    }

    /// Removes the skill-group override at `index`. Out-of-range is a no-op.
    pub fn delete_skill_group(&mut self, index: usize) -> bool {
        if index >= self.state.skills.len() {
            return false;
        }
        let removed = self.state.skills.remove(index);
        self.committed("skills", removed.id, "delete");
        self.persist_skills();
        true
    }

    /// Removes the experience override with the given stable id.
    /// Unknown id is a no-op returning `false`.
    pub fn delete_experience_by_id(&mut self, id: RecordId) -> bool {
        match position_of(&self.state.experience, id) {
            Some(index) => self.delete_experience(index),
            None => false,
        }
    }

    /// Removes the project override with the given stable id.
    pub fn delete_project_by_id(&mut self, id: RecordId) -> bool {
        match position_of(&self.state.projects, id) {
            Some(index) => self.delete_project(index),
            None => false,
        }
    }

    /// Removes the skill-group override with the given stable id.
    pub fn delete_skill_group_by_id(&mut self, id: RecordId) -> bool {
        match position_of(&self.state.skills, id) {
            Some(index) => self.delete_skill_group(index),
            None => false,
        }
    }

    /// Replaces the hero-image override and persists it.
    ///
    /// The value is stored as provided; type filtering happens at the
    /// selection boundary, not here.
    pub fn set_hero_image(&mut self, data_uri: String) {
        if let Err(err) = self.repo.save_hero_image(&data_uri) {
            self.persist_degraded(KEY_HERO_IMAGE, &err.to_string());
        }
        self.state.hero_image = Some(data_uri);
        self.revision += 1;
        info!("event=override_hero module=service status=ok action=set");
    }

    /// Clears the hero-image override; subsequent merges fall back to the
    /// base profile image.
    pub fn reset_hero_image(&mut self) {
        self.state.hero_image = None;
        self.revision += 1;
        info!("event=override_hero module=service status=ok action=reset");
        if let Err(err) = self.repo.clear_hero_image() {
            self.persist_degraded(KEY_HERO_IMAGE, &err.to_string());
        }
    }

    /// Empties all four override categories and removes their persisted
    /// keys as one logical action.
    ///
    /// Destructive and irreversible for this profile; the console must
    /// collect explicit user confirmation before calling.
    pub fn clear_all(&mut self) {
        self.state = OverrideState::default();
        self.revision += 1;
        info!("event=override_clear module=service status=ok");
        if let Err(err) = self.repo.clear_all() {
            warn!("event=override_persist module=service status=error key=all error={err}");
        }
    }

    /// Computes the display-ready dataset for the current state.
    pub fn merged_view(&self) -> MergedView {
        compute_view(&self.base, &self.state)
    }

    /// Renders the export artifact for the current state.
    pub fn export_artifact(&self) -> ExportResult<Artifact> {
        let artifact = render_artifact(&self.base, &self.state)?;
        info!(
            "event=export_render module=service status=ok bytes={}",
            artifact.contents.len()
        );
        Ok(artifact)
    }

    /// Whether this session is read-only.
    pub fn is_restricted(&self) -> bool {
        self.mode.is_restricted()
    }

    pub fn mode(&self) -> ViewerMode {
        self.mode
    }

    /// The shareable restricted-mode link for this session's page.
    pub fn share_link(&self) -> &str {
        &self.share_link
    }

    /// Monotonic change counter; bumps on every mutating call.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn base(&self) -> &PortfolioData {
        &self.base
    }

    pub fn override_state(&self) -> &OverrideState {
        &self.state
    }

    fn committed(&mut self, category: &str, id: RecordId, action: &str) {
        self.revision += 1;
        info!(
            "event=override_{action} module=service status=ok category={category} id={id}"
        );
    }

    fn persist_experience(&self) {
        if let Err(err) = self.repo.save_experience(&self.state.experience) {
            self.persist_degraded(KEY_EXPERIENCE, &err.to_string());
        }
    }

    fn persist_projects(&self) {
        if let Err(err) = self.repo.save_projects(&self.state.projects) {
            self.persist_degraded(KEY_PROJECTS, &err.to_string());
        }
    }

    fn persist_skills(&self) {
        if let Err(err) = self.repo.save_skills(&self.state.skills) {
            self.persist_degraded(KEY_SKILLS, &err.to_string());
        }
    }

    fn persist_degraded(&self, key: &str, detail: &str) {
        // The edit stays valid in memory for this session only.
        warn!("event=override_persist module=service status=error key={key} error={detail}");
    }
}

fn position_of<T>(entries: &[OverrideEntry<T>], id: RecordId) -> Option<usize> {
    entries.iter().position(|entry| entry.id == id)
}
