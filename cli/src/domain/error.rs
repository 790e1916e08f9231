//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio` or the AWS SDK. All error types implement
//! `thiserror::Error` and convert to `anyhow::Error` via the `?` operator.

use thiserror::Error;

use crate::domain::resource::{ResourceCategory, ResourceDescriptor};

// ── Sweep errors ──────────────────────────────────────────────────────────────

/// Errors raised while listing or deleting resources.
///
/// `Listing` and `Deletion` are recoverable and end up in the sweep summary;
/// only `Incomplete` is returned to the caller, after the summary is printed.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("Could not list {}: {message}", category.label())]
    Listing {
        category: ResourceCategory,
        message: String,
    },

    #[error("Could not delete {} {}: {message}", descriptor.category.noun(), descriptor.display_name())]
    Deletion {
        descriptor: ResourceDescriptor,
        message: String,
    },

    #[error("Sweep completed with {errors} error(s). Re-run to retry the remaining resources.")]
    Incomplete { errors: usize },

    #[error("Refusing to delete without confirmation. Re-run with --yes or use --dry-run.")]
    ConfirmationRequired,
}

// ── Configuration errors ──────────────────────────────────────────────────────

/// Fatal configuration problems. Raised before any listing begins.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "No AWS region configured. Pass --region, set AWS_REGION, or run: bedrock-sweep config set region <region>"
    )]
    MissingRegion,

    #[error("AWS credentials are not available: {0}")]
    MissingCredentials(String),

    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: {value}\n\n{reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("Unknown resource category: {category}\n\nValid categories: {valid}")]
    UnknownCategory { category: String, valid: String },
}
