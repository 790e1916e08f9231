//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::PathBuf;

use anyhow::Result;

use crate::domain::{ResourceCategory, ResourceDescriptor, SweepConfig};

// ── Cloud Resource Ports ──────────────────────────────────────────────────────

/// Read-only enumeration of cloud resources.
///
/// Implementations return every resource of the category they can see,
/// following pagination to the end. Filtering by prefix is the caller's job.
#[allow(async_fn_in_trait)]
pub trait ResourceLister {
    /// List resources of `category`.
    ///
    /// `parent` scopes nested categories: vector indexes are listed per
    /// vector bucket. It is `None` for every top-level category.
    async fn list(
        &self,
        category: ResourceCategory,
        parent: Option<&str>,
    ) -> Result<Vec<ResourceDescriptor>>;
}

/// Deletion of a single listed resource.
#[allow(async_fn_in_trait)]
pub trait ResourceRemover {
    /// Delete `resource`, including whatever must be detached first (e.g.
    /// IAM policy attachments).
    async fn delete(&self, resource: &ResourceDescriptor) -> Result<()>;
}

/// Composite trait: any type implementing both halves is a `ResourceGateway`.
pub trait ResourceGateway: ResourceLister + ResourceRemover {}

/// Blanket implementation: any lister that can also remove is a gateway.
impl<T> ResourceGateway for T where T: ResourceLister + ResourceRemover {}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
    /// Emit a failure message. Never suppressed.
    fn failure(&self, message: &str);
}

// ── Configuration Port ────────────────────────────────────────────────────────

/// Abstracts loading and saving of the sweeper configuration file.
pub trait ConfigStore {
    /// Load the configuration, returning defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load(&self) -> Result<SweepConfig>;
    /// Persist the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn save(&self, config: &SweepConfig) -> Result<()>;
    /// Location of the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}
