//! Export serializer for permanent adoption of session edits.
//!
//! # Responsibility
//! - Compute the full-replacement dataset (overrides adopted into each
//!   category, hero override adopted as the profile image).
//! - Render it as a Rust data module with a fixed file name, ready to
//!   replace the bundled dataset module.
//! - Decode such a module back into the embedded dataset.
//!
//! # Invariants
//! - The raw-string delimiter is widened until no embedded `"#...` run can
//!   terminate the literal early.
//! - Rendering is on-demand and side-effect free; only `write_artifact`
//!   touches the filesystem.

use crate::model::overrides::OverrideState;
use crate::model::portfolio::PortfolioData;
use crate::view::merge::compute_view;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed artifact file name; replaces the bundled dataset module on adoption.
pub const ARTIFACT_FILE_NAME: &str = "portfolio_data.rs";
/// Exported constant name the loader reads.
pub const ARTIFACT_CONST_NAME: &str = "PORTFOLIO_JSON";

pub type ExportResult<T> = Result<T, ExportError>;

/// Export/decode error.
#[derive(Debug)]
pub enum ExportError {
    /// Artifact text does not contain the expected constant declaration.
    MissingConstant,
    /// Embedded JSON failed to encode or decode.
    Json(String),
    Io(std::io::Error),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingConstant => write!(
                f,
                "artifact does not declare `{ARTIFACT_CONST_NAME}` as a raw string constant"
            ),
            Self::Json(message) => write!(f, "artifact dataset JSON error: {message}"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// A rendered export artifact ready for download/writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Always [`ARTIFACT_FILE_NAME`].
    pub file_name: &'static str,
    pub contents: String,
}

/// Renders the full-replacement dataset module for the given session state.
///
/// Override entries become permanent members of their categories and the
/// hero override, when present, becomes the new profile image.
pub fn render_artifact(
    base: &PortfolioData,
    overrides: &OverrideState,
) -> ExportResult<Artifact> {
    let merged = compute_view(base, overrides);
    let full = PortfolioData {
        name: base.name.clone(),
        headline: base.headline.clone(),
        summary: base.summary.clone(),
        profile_image: merged.hero_image,
        contact: base.contact.clone(),
        education: base.education.clone(),
        experience: merged.experience,
        skills: merged.skills,
        certifications: base.certifications.clone(),
        projects: merged.projects,
    };

    let json =
        serde_json::to_string_pretty(&full).map_err(|err| ExportError::Json(err.to_string()))?;
    let hashes = "#".repeat(raw_delimiter_width(&json));

    let contents = format!(
        "//! Generated portfolio dataset module.\n\
         //!\n\
         //! Produced by the console export action. To adopt the session edits\n\
         //! permanently, replace `src/data/{ARTIFACT_FILE_NAME}` with this file.\n\
         \n\
         /// Bundled dataset as pretty-printed JSON.\n\
         pub const {ARTIFACT_CONST_NAME}: &str = r{hashes}\"{json}\"{hashes};\n"
    );

    Ok(Artifact {
        file_name: ARTIFACT_FILE_NAME,
        contents,
    })
}

/// Decodes the dataset embedded in a rendered artifact.
pub fn decode_artifact(contents: &str) -> ExportResult<PortfolioData> {
    let marker = format!("{ARTIFACT_CONST_NAME}: &str = r");
    let start = contents.find(&marker).ok_or(ExportError::MissingConstant)?;
    let rest = &contents[start + marker.len()..];

    let hash_count = rest.bytes().take_while(|byte| *byte == b'#').count();
    let rest = rest[hash_count..]
        .strip_prefix('"')
        .ok_or(ExportError::MissingConstant)?;

    let terminator = format!("\"{}", "#".repeat(hash_count));
    let end = rest.find(&terminator).ok_or(ExportError::MissingConstant)?;

    serde_json::from_str(&rest[..end]).map_err(|err| ExportError::Json(err.to_string()))
}

/// Writes the artifact under its fixed file name and returns the path.
pub fn write_artifact(artifact: &Artifact, dir: impl AsRef<Path>) -> ExportResult<PathBuf> {
    let path = dir.as_ref().join(artifact.file_name);
    fs::write(&path, &artifact.contents)?;
    Ok(path)
}

/// Smallest delimiter width that no `"#...` run inside the payload reaches.
fn raw_delimiter_width(payload: &str) -> usize {
    let bytes = payload.as_bytes();
    let mut max_run = 0;
    let mut index = 0;
    while index < bytes.len() {
        if bytes[index] == b'"' {
            let mut run = 0;
            while index + 1 + run < bytes.len() && bytes[index + 1 + run] == b'#' {
                run += 1;
            }
            max_run = max_run.max(run);
            index += run + 1;
        } else {
            index += 1;
        }
    }
    max_run + 1
}

#[cfg(test)]
mod tests {
    use super::raw_delimiter_width;

    #[test]
    fn plain_json_needs_single_hash() {
        assert_eq!(raw_delimiter_width(r#"{"name":"Dana"}"#), 1);
    }

    #[test]
    fn embedded_quote_hash_runs_widen_the_delimiter() {
        assert_eq!(raw_delimiter_width(r##"{"note":"end"# mid"}"##), 2);
        assert_eq!(raw_delimiter_width("\"###"), 4);
    }

    #[test]
    fn hashes_without_a_preceding_quote_are_harmless() {
        assert_eq!(raw_delimiter_width("### no quote"), 1);
    }
}
