//! Core domain logic for Folio.
//! This crate is the single source of truth for the layered content
//! override system: base dataset, override state, merge, persistence,
//! visibility gating and export.

pub mod access;
pub mod data;
pub mod db;
pub mod export;
pub mod logging;
pub mod media;
pub mod model;
pub mod repo;
pub mod service;
pub mod view;

pub use access::gate::{share_link, ViewerMode, RESTRICTED_SENTINEL, VIEW_PARAM};
pub use data::base_portfolio;
pub use export::artifact::{
    decode_artifact, render_artifact, write_artifact, Artifact, ExportError, ExportResult,
    ARTIFACT_FILE_NAME,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use media::encode::{
    encode_image_bytes, encode_image_file, encode_image_file_blocking, is_image_data_uri,
    EncodeError, EncodeResult,
};
pub use model::overrides::{OverrideEntry, OverrideState, RecordId};
pub use model::portfolio::{
    Certification, ContactInfo, Education, Experience, PortfolioData, Project, SkillGroup,
};
pub use repo::kv_store::{
    KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StoreError, StoreResult,
};
pub use repo::override_repo::{
    KvOverrideRepository, LoadIssue, LoadedOverrides, OverrideRepository, RepoError, RepoResult,
};
pub use service::portfolio_service::PortfolioService;
pub use view::merge::{compute_view, MergedView};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
