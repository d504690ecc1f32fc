//! Binary-to-text image encoding.
//!
//! # Responsibility
//! - Encode a selected image file into a `data:` URI off the caller's
//!   thread, delivering one completion callback per request.
//! - Filter non-image selections by extension, mirroring the host
//!   file-picker's `image/*` filter.
//!
//! # Invariants
//! - The callback fires exactly once and carries an explicit
//!   success/failure variant; no request completes silently.
//! - A completion only ever lands in the caller's pending draft, never in
//!   committed override state.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

static DATA_URI_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^data:image/[a-z0-9.+-]+;base64,[A-Za-z0-9+/]*={0,2}$")
        .expect("valid data uri regex")
});

pub type EncodeResult<T> = Result<T, EncodeError>;

/// Encode-pipeline failure delivered to the completion callback.
#[derive(Debug)]
pub enum EncodeError {
    /// Selected file extension is not a recognized image type.
    UnsupportedType { extension: String },
    /// Selected file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for EncodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedType { extension } => {
                write!(f, "unsupported image type `{extension}`")
            }
            Self::Io { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for EncodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnsupportedType { .. } => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Returns whether `value` is a well-formed base64 image data URI.
pub fn is_image_data_uri(value: &str) -> bool {
    DATA_URI_RE.is_match(value)
}

/// Encodes raw image bytes into a data URI for the given MIME type.
pub fn encode_image_bytes(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Synchronous encode path for sequential callers.
pub fn encode_image_file_blocking(path: &Path) -> EncodeResult<String> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    let mime = mime_for_extension(&extension)
        .ok_or(EncodeError::UnsupportedType { extension })?;

    let bytes = std::fs::read(path).map_err(|source| EncodeError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(encode_image_bytes(mime, &bytes))
}

/// Encodes a selected file off-thread; completion is delivered once via
/// `on_complete`.
///
/// The returned handle is for callers that need to bound shutdown; normal
/// callers may drop it, the worker finishes on its own.
pub fn encode_image_file<F>(path: PathBuf, on_complete: F) -> JoinHandle<()>
where
    F: FnOnce(EncodeResult<String>) + Send + 'static,
{
    thread::spawn(move || on_complete(encode_image_file_blocking(&path)))
}

fn mime_for_extension(extension: &str) -> Option<&'static str> {
    match extension {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        "bmp" => Some("image/bmp"),
        "avif" => Some("image/avif"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{encode_image_bytes, is_image_data_uri, mime_for_extension};

    #[test]
    fn known_extensions_map_to_image_mime_types() {
        assert_eq!(mime_for_extension("png"), Some("image/png"));
        assert_eq!(mime_for_extension("jpeg"), Some("image/jpeg"));
        assert_eq!(mime_for_extension("svg"), Some("image/svg+xml"));
        assert_eq!(mime_for_extension("txt"), None);
        assert_eq!(mime_for_extension(""), None);
    }

    #[test]
    fn encoded_bytes_form_a_valid_data_uri() {
        let uri = encode_image_bytes("image/png", &[0x89, 0x50, 0x4e, 0x47]);
        assert!(uri.starts_with("data:image/png;base64,"));
        assert!(is_image_data_uri(&uri));
    }

    #[test]
    fn data_uri_predicate_rejects_non_image_payloads() {
        assert!(!is_image_data_uri("data:text/plain;base64,aGk="));
        assert!(!is_image_data_uri("https://folio.example/hero.png"));
        assert!(!is_image_data_uri("data:image/png;base64,not*base64"));
    }
}
