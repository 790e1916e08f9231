//! Application service — sweep execution use-case.
//!
//! Walks a [`SweepPlan`] in order and either simulates (dry run) or performs
//! each deletion through the [`ResourceRemover`] port. A failed deletion is
//! recorded and the sweep moves on to the next resource.

use tracing::{debug, info};

use crate::application::ports::{ProgressReporter, ResourceRemover};
use crate::domain::{SweepError, SweepPlan, SweepResult};

/// Execute `plan`.
///
/// With `dry_run` no call reaches `remover`; every planned resource is
/// counted as "would delete".
pub async fn execute_plan(
    remover: &impl ResourceRemover,
    plan: &SweepPlan,
    dry_run: bool,
    reporter: &impl ProgressReporter,
) -> SweepResult {
    let mut result = SweepResult::for_plan(plan, dry_run);

    for resource in &plan.resources {
        let category = resource.category;
        let what = format!("{} {}", category.noun(), resource.display_name());

        if dry_run {
            reporter.step(&format!("[dry run] Would delete {what}"));
            result.record_would_delete(category);
            continue;
        }

        match remover.delete(resource).await {
            Ok(()) => {
                debug!(category = %category, name = %resource.name, "deleted resource");
                reporter.success(&format!("Deleted {what}"));
                result.record_deleted(category);
            }
            Err(e) => {
                let message = format!("{e:#}");
                debug!(category = %category, name = %resource.name, error = %message, "delete failed");
                let err = SweepError::Deletion {
                    descriptor: resource.clone(),
                    message: message.clone(),
                };
                reporter.failure(&err.to_string());
                result.record_failure(resource.clone(), message);
            }
        }
    }

    info!(
        dry_run,
        deleted = result.total_deleted(),
        would_delete = result.total_would_delete(),
        errors = result.total_errors(),
        "sweep finished"
    );
    result
}
