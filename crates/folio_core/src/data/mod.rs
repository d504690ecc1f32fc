//! Bundled base dataset.
//!
//! # Responsibility
//! - Embed the shipped dataset module and parse it once on first use.
//!
//! # Invariants
//! - The bundled dataset is immutable for the process lifetime; adopting
//!   session edits means replacing `portfolio_data.rs` with an export
//!   artifact and rebuilding.

use crate::model::portfolio::PortfolioData;
use once_cell::sync::Lazy;

mod portfolio_data;

pub use portfolio_data::PORTFOLIO_JSON;

static BASE: Lazy<PortfolioData> =
    Lazy::new(|| serde_json::from_str(PORTFOLIO_JSON).expect("bundled dataset is valid JSON"));

/// Returns the bundled, read-only dataset.
pub fn base_portfolio() -> &'static PortfolioData {
    &BASE
}
