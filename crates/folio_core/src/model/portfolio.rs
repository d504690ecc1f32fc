//! Base-dataset record types.
//!
//! # Responsibility
//! - Mirror the bundled dataset's JSON shape one-to-one.
//! - Keep wire names stable (`profileImage`, `type`) across persistence,
//!   merge and export.
//!
//! # Invariants
//! - These types carry no identity fields; base entries are addressed by
//!   their bundled position only.
//! - Optional image fields hold self-contained `data:` URIs or bundled
//!   asset URLs, never filesystem paths.

use serde::{Deserialize, Serialize};

/// Fixed contact channels shown in the contact section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub location: String,
}

/// One education entry. Base dataset only, not overridable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub major: String,
    pub period: String,
    pub details: Vec<String>,
}

/// One certification entry. Base dataset only, not overridable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub details: String,
}

/// One work-experience entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    pub location: String,
    /// Employment kind (e.g. "Professional", "Internship"). Serialized as
    /// `type` to match the dataset schema naming.
    #[serde(rename = "type")]
    pub kind: String,
    /// Ordered achievement bullet points.
    pub achievements: Vec<String>,
    /// Optional company logo as a data URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// One project entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub year: String,
    /// Ordered technology tags.
    pub stack: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    /// Optional cover visual as a data URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// One skill category with its ordered items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// The bundled, read-only dataset shipped with the build.
///
/// Core operations never mutate a `PortfolioData` value; the export
/// serializer produces a new one instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioData {
    pub name: String,
    pub headline: String,
    pub summary: String,
    #[serde(rename = "profileImage")]
    pub profile_image: String,
    pub contact: ContactInfo,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub skills: Vec<SkillGroup>,
    pub certifications: Vec<Certification>,
    pub projects: Vec<Project>,
}
