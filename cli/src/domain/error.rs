//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::application`,
//! `tokio`, `std::fs`, `std::process`, or `std::net`. All error types
//! implement `thiserror::Error` and convert to `anyhow::Error` via the `?`
//! operator.

use thiserror::Error;

// ── Application selection errors ──────────────────────────────────────────────

/// Errors related to resolving the application token.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Unknown application: {token}\n\nValid applications: {valid}")]
    Unknown { token: String, valid: String },
}

// ── Target resolution errors ──────────────────────────────────────────────────

/// Errors related to resolving target tokens into hosts.
#[derive(Debug, Error)]
pub enum TargetError {
    #[error("No targets given. Pass 'all', a region, or one or more host names.")]
    Empty,

    #[error("Unknown host or region: {token}\n\nValid targets: {valid}")]
    UnknownHost { token: String, valid: String },
}
