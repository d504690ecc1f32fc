//! Visibility gate and share-link derivation.
//!
//! # Responsibility
//! - Parse the page URL's query string and derive the viewer mode.
//! - Build the restricted-mode share link from the page's base address.
//!
//! # Invariants
//! - The mode is computed once per session from the URL and never
//!   re-evaluated afterwards; callers hold the derived value.
//! - Only the `view` parameter is recognized; all others are ignored.
//! - `share_link` mutates no stored state.

/// Recognized query parameter switching the session into restricted mode.
pub const VIEW_PARAM: &str = "view";
/// Sentinel value of [`VIEW_PARAM`] that activates restricted mode.
pub const RESTRICTED_SENTINEL: &str = "hr";

/// Session visibility derived from the page URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerMode {
    /// Full surface: console and image controls reachable.
    Editor,
    /// Read-only surface: every mutation entry point hidden.
    Restricted,
}

impl ViewerMode {
    /// Derives the mode from the page URL's query string.
    ///
    /// Parameter names and values are percent-decoded before comparison;
    /// `+` decodes to a space, matching browser query semantics.
    pub fn from_page_url(page_url: &str) -> Self {
        let restricted = query_pairs(page_url)
            .any(|(name, value)| name == VIEW_PARAM && value == RESTRICTED_SENTINEL);
        if restricted {
            Self::Restricted
        } else {
            Self::Editor
        }
    }

    pub fn is_restricted(self) -> bool {
        matches!(self, Self::Restricted)
    }

    /// Stable lowercase label for logging.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Editor => "editor",
            Self::Restricted => "restricted",
        }
    }
}

/// Builds the shareable restricted-mode link for the given page URL.
///
/// The result is the page's base address (query and fragment stripped) with
/// the view parameter set to the sentinel value.
pub fn share_link(page_url: &str) -> String {
    let without_fragment = strip_fragment(page_url);
    let base = without_fragment
        .split('?')
        .next()
        .unwrap_or(without_fragment);
    format!("{base}?{VIEW_PARAM}={RESTRICTED_SENTINEL}")
}

fn strip_fragment(page_url: &str) -> &str {
    page_url.split('#').next().unwrap_or(page_url)
}

fn query_string(page_url: &str) -> &str {
    strip_fragment(page_url)
        .split_once('?')
        .map_or("", |(_, query)| query)
}

fn query_pairs(page_url: &str) -> impl Iterator<Item = (String, String)> + '_ {
    query_string(page_url)
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(name), decode_component(value))
        })
}

fn decode_component(raw: &str) -> String {
    let plus_as_space = raw.replace('+', " ");
    match urlencoding::decode(&plus_as_space) {
        Ok(decoded) => decoded.into_owned(),
        // Undecodable input cannot match a plain-ASCII sentinel anyway.
        Err(_) => plus_as_space,
    }
}
