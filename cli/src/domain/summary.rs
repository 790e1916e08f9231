//! Sweep result accounting and summary lines.

use serde::Serialize;

use crate::domain::error::SweepError;
use crate::domain::plan::{ListingWarning, SweepPlan};
use crate::domain::resource::{ResourceCategory, ResourceDescriptor};

/// Per-category counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub deleted: usize,
    pub would_delete: usize,
    pub errored: usize,
}

/// A deletion attempt that failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedDeletion {
    pub resource: ResourceDescriptor,
    pub message: String,
}

/// Outcome of sweeping one plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SweepResult {
    pub dry_run: bool,
    /// Counters for every category considered, in deletion order.
    pub counts: Vec<(ResourceCategory, CategoryCounts)>,
    pub failures: Vec<FailedDeletion>,
    pub warnings: Vec<ListingWarning>,
}

impl SweepResult {
    /// Empty result covering every category of `plan`.
    #[must_use]
    pub fn for_plan(plan: &SweepPlan, dry_run: bool) -> Self {
        Self {
            dry_run,
            counts: plan
                .categories
                .iter()
                .map(|c| (*c, CategoryCounts::default()))
                .collect(),
            failures: Vec::new(),
            warnings: plan.warnings.clone(),
        }
    }

    fn counts_mut(&mut self, category: ResourceCategory) -> &mut CategoryCounts {
        let pos = match self.counts.iter().position(|(c, _)| *c == category) {
            Some(pos) => pos,
            None => {
                self.counts.push((category, CategoryCounts::default()));
                self.counts.sort_by_key(|(c, _)| *c);
                self.counts
                    .iter()
                    .position(|(c, _)| *c == category)
                    .unwrap_or_default()
            }
        };
        &mut self.counts[pos].1
    }

    pub fn record_deleted(&mut self, category: ResourceCategory) {
        self.counts_mut(category).deleted += 1;
    }

    pub fn record_would_delete(&mut self, category: ResourceCategory) {
        self.counts_mut(category).would_delete += 1;
    }

    pub fn record_failure(&mut self, resource: ResourceDescriptor, message: String) {
        self.counts_mut(resource.category).errored += 1;
        self.failures.push(FailedDeletion { resource, message });
    }

    #[must_use]
    pub fn counts(&self, category: ResourceCategory) -> CategoryCounts {
        self.counts
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, counts)| *counts)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn total_deleted(&self) -> usize {
        self.counts.iter().map(|(_, c)| c.deleted).sum()
    }

    #[must_use]
    pub fn total_would_delete(&self) -> usize {
        self.counts.iter().map(|(_, c)| c.would_delete).sum()
    }

    #[must_use]
    pub fn total_errors(&self) -> usize {
        self.failures.len()
    }

    /// `true` when no deletion failed. Listing warnings do not count.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Turn deletion failures into the error that ends a real sweep.
    ///
    /// # Errors
    ///
    /// Returns `SweepError::Incomplete` when any deletion failed.
    pub fn ensure_clean(&self) -> Result<(), SweepError> {
        if self.is_clean() {
            Ok(())
        } else {
            Err(SweepError::Incomplete {
                errors: self.total_errors(),
            })
        }
    }

    /// One summary line per category, e.g.
    /// `Knowledge Bases: 0 deleted, 2 would-delete, 0 errors`.
    #[must_use]
    pub fn summary_lines(&self) -> Vec<String> {
        self.counts
            .iter()
            .map(|(category, counts)| summary_line(*category, *counts, self.dry_run))
            .collect()
    }
}

/// Format the summary line for one category.
///
/// The `would-delete` column only appears in dry-run mode, where it is the
/// only column that can be non-zero besides errors.
#[must_use]
pub fn summary_line(category: ResourceCategory, counts: CategoryCounts, dry_run: bool) -> String {
    let errors = plural(counts.errored, "error", "errors");
    if dry_run {
        format!(
            "{}: {} deleted, {} would-delete, {errors}",
            category.label(),
            counts.deleted,
            counts.would_delete,
        )
    } else {
        format!("{}: {} deleted, {errors}", category.label(), counts.deleted)
    }
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}
