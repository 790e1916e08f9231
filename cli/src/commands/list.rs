//! `bedrock-sweep list` — show what a sweep would pick up.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::{config_service, inventory};
use crate::commands::selected_categories;
use crate::domain::ResourceCategory;

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Only list these categories (repeatable or comma-separated)
    #[arg(long, value_name = "CATEGORY", value_delimiter = ',')]
    pub only: Vec<ResourceCategory>,
}

/// Run `bedrock-sweep list`.
///
/// Listing failures are shown as warnings; the command still succeeds.
///
/// # Errors
///
/// Returns an error if configuration is invalid or AWS credentials are
/// missing.
pub async fn run(app: &AppContext, args: &ListArgs) -> Result<()> {
    let rules = config_service::prefix_rules(&app.config_store)?;
    let (session, gateway) = app.connect().await?;

    let plan = inventory::build_plan(
        &gateway,
        &rules,
        &selected_categories(&args.only),
        &app.reporter(),
    )
    .await;

    app.renderer().render_plan(&session.region, &plan)
}
