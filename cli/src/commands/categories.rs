//! `bedrock-sweep categories` — show every category with its effective prefix.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::config_service;

/// Run the categories command.
///
/// # Errors
///
/// Returns an error if the configuration file holds an invalid prefix.
pub fn run(app: &AppContext) -> Result<()> {
    let rules = config_service::prefix_rules(&app.config_store)?;
    app.renderer().render_categories(&rules)
}
