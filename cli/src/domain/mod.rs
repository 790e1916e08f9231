//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process` or the AWS SDK.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod plan;
pub mod resource;
pub mod summary;

pub use config::{SweepConfig, validate_config_key, validate_config_value};
pub use error::{ConfigError, SweepError};
pub use plan::{CategoryListing, ListingWarning, SweepPlan};
pub use resource::{PrefixRules, ResourceCategory, ResourceDescriptor};
pub use summary::{CategoryCounts, FailedDeletion, SweepResult};
