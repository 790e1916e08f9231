//! `bedrock-sweep sweep [--dry-run]` — list, plan, and delete.

use anyhow::Result;
use chrono::Utc;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::{config_service, inventory, sweep};
use crate::commands::selected_categories;
use crate::domain::ResourceCategory;
use crate::output::Renderer;

/// Arguments for the sweep command.
#[derive(Args)]
pub struct SweepArgs {
    /// Show what would be deleted without deleting anything
    #[arg(long)]
    pub dry_run: bool,

    /// Only sweep these categories (repeatable or comma-separated)
    #[arg(long, value_name = "CATEGORY", value_delimiter = ',')]
    pub only: Vec<ResourceCategory>,
}

/// Run `bedrock-sweep sweep`.
///
/// A real sweep shows the plan and asks for confirmation unless `--yes` or
/// `BEDROCK_SWEEP_YES` is set. The summary is always printed before any
/// deletion failure is returned.
///
/// # Errors
///
/// Returns a `ConfigError` before listing when region or credentials are
/// missing, `SweepError::ConfirmationRequired` when no prompt is possible,
/// and `SweepError::Incomplete` when any deletion failed.
pub async fn run(app: &AppContext, args: &SweepArgs) -> Result<()> {
    let rules = config_service::prefix_rules(&app.config_store)?;
    let (session, gateway) = app.connect().await?;
    let started_at = Utc::now();

    let renderer = app.renderer();
    if let Renderer::Human(human) = &renderer {
        human.render_banner(&session.region, args.dry_run);
    }

    let reporter = app.reporter();
    let plan = inventory::build_plan(
        &gateway,
        &rules,
        &selected_categories(&args.only),
        &reporter,
    )
    .await;

    if !args.dry_run && !plan.is_empty() {
        if let Renderer::Human(human) = &renderer {
            human.render_plan(&plan);
        }
        let prompt = format!(
            "Permanently delete {} resource(s) in {}?",
            plan.len(),
            session.region
        );
        if !app.confirm(&prompt)? {
            app.output.info("Cancelled. Nothing was deleted.");
            return Ok(());
        }
    }

    let result = sweep::execute_plan(&gateway, &plan, args.dry_run, &reporter).await;
    renderer.render_sweep(&session.region, started_at, &plan, &result)?;

    result.ensure_clean()?;
    Ok(())
}
