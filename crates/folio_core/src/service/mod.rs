//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into session-level APIs.
//! - Keep console/renderer collaborators decoupled from storage details.

pub mod portfolio_service;
