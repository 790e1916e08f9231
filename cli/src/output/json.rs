//! JSON output helpers.
//!
//! Every `--json` code path writes exactly one pretty-printed object to
//! stdout. Failures use the error object from [`format_error`].

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{
    FailedDeletion, ListingWarning, PrefixRules, ResourceCategory, ResourceDescriptor,
    SweepConfig, SweepPlan, SweepResult,
};

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Counters for one category in a [`SweepReport`].
#[derive(Debug, Serialize)]
pub struct CategoryReport {
    pub category: ResourceCategory,
    pub label: &'static str,
    pub deleted: usize,
    pub would_delete: usize,
    pub errored: usize,
}

/// Machine-readable report of one sweep run.
#[derive(Debug, Serialize)]
pub struct SweepReport<'a> {
    pub region: &'a str,
    pub dry_run: bool,
    pub started_at: DateTime<Utc>,
    pub categories: Vec<CategoryReport>,
    pub resources: &'a [ResourceDescriptor],
    pub failures: &'a [FailedDeletion],
    pub warnings: &'a [ListingWarning],
    pub total_errors: usize,
}

impl<'a> SweepReport<'a> {
    #[must_use]
    pub fn new(
        region: &'a str,
        started_at: DateTime<Utc>,
        plan: &'a SweepPlan,
        result: &'a SweepResult,
    ) -> Self {
        Self {
            region,
            dry_run: result.dry_run,
            started_at,
            categories: result
                .counts
                .iter()
                .map(|(category, counts)| CategoryReport {
                    category: *category,
                    label: category.label(),
                    deleted: counts.deleted,
                    would_delete: counts.would_delete,
                    errored: counts.errored,
                })
                .collect(),
            resources: &plan.resources,
            failures: &result.failures,
            warnings: &result.warnings,
            total_errors: result.total_errors(),
        }
    }
}

/// Renders domain types as JSON on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    /// Print the version object.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(version: &str) -> Result<()> {
        print_json(&serde_json::json!({ "version": version }))
    }

    /// Print the resources matched by a listing-only run.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_plan(region: &str, plan: &SweepPlan) -> Result<()> {
        print_json(&serde_json::json!({
            "region": region,
            "resources": plan.resources,
            "warnings": plan.warnings,
        }))
    }

    /// Print the report of a sweep run.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_sweep(report: &SweepReport<'_>) -> Result<()> {
        print_json(report)
    }

    /// Print every category with its effective prefix, in deletion order.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_categories(rules: &PrefixRules) -> Result<()> {
        print_json(&categories_value(rules))
    }

    /// Print the stored configuration and its location.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_config(config: &SweepConfig, path: &Path) -> Result<()> {
        print_json(&serde_json::json!({
            "path": path.display().to_string(),
            "config": config,
        }))
    }
}

fn categories_value(rules: &PrefixRules) -> serde_json::Value {
    let categories: Vec<_> = ResourceCategory::ALL
        .iter()
        .map(|category| {
            serde_json::json!({
                "category": category,
                "label": category.label(),
                "prefix": rules.prefix(*category),
            })
        })
        .collect();
    serde_json::json!({ "categories": categories })
}

fn print_json(value: &impl Serialize) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("JSON serialization failed")?;
    println!("{out}");
    Ok(())
}
