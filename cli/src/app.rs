//! Application context — unified state passed to every command handler.
//!
//! `AppContext` carries the output settings, the configuration store, and the
//! region flag. AWS clients are built lazily by [`AppContext::connect`] so
//! commands that never touch the account (`categories`, `config`, `version`)
//! work without credentials.

use std::io::IsTerminal as _;

use anyhow::Result;
use console::Term;

use crate::application::services::config_service;
use crate::domain::config::validate_region;
use crate::domain::{ConfigError, SweepError};
use crate::infra::aws::{self, AwsSession};
use crate::infra::config::YamlConfigStore;
use crate::infra::gateway::AwsGateway;
use crate::output::{
    HumanRenderer, JsonRenderer, OutputContext, Renderer, TerminalReporter, progress,
};

/// Environment variable that skips the deletion prompt.
pub const YES_ENV: &str = "BEDROCK_SWEEP_YES";

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Behaviour flags.
pub struct BehaviourFlags {
    /// Skip the deletion prompt (also set by `BEDROCK_SWEEP_YES`).
    pub yes: bool,
    /// Region from `--region` or `AWS_REGION`.
    pub region: Option<String>,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// Behaviour options.
    pub behaviour: BehaviourFlags,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Sweeper configuration file.
    pub config_store: YamlConfigStore,
    /// When `true`, deletions proceed without a prompt.
    pub non_interactive: bool,
    region_flag: Option<String>,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    #[must_use]
    pub fn new(flags: &AppFlags) -> Self {
        let yes_env = std::env::var(YES_ENV).is_ok_and(|v| !v.is_empty() && v != "0");
        let mode = if flags.output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        Self {
            output: OutputContext::new(flags.output.no_color, flags.output.quiet),
            mode,
            config_store: YamlConfigStore,
            non_interactive: flags.behaviour.yes || yes_env,
            region_flag: flags.behaviour.region.clone(),
        }
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Returns the appropriate `Renderer` variant for the current output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json(JsonRenderer),
        }
    }

    /// Progress reporter for application services. In JSON mode only
    /// failures reach the terminal (on stderr).
    #[must_use]
    pub fn reporter(&self) -> TerminalReporter<'_> {
        if self.is_json() {
            TerminalReporter::failures_only(&self.output)
        } else {
            TerminalReporter::new(&self.output)
        }
    }

    /// Ask the user to confirm a destructive step.
    ///
    /// Returns `true` immediately when `--yes` or `BEDROCK_SWEEP_YES` is set.
    ///
    /// # Errors
    ///
    /// Returns `SweepError::ConfirmationRequired` when stdin is not a
    /// terminal, or an error if the prompt itself fails.
    pub fn confirm(&self, prompt: &str) -> Result<bool> {
        let interactive = Term::stderr().is_term() && std::io::stdin().is_terminal();
        self.confirm_on(prompt, interactive)
    }

    fn confirm_on(&self, prompt: &str, interactive: bool) -> Result<bool> {
        if self.non_interactive {
            return Ok(true);
        }
        if !interactive {
            return Err(SweepError::ConfirmationRequired.into());
        }
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()?;
        Ok(confirmed)
    }

    /// Resolve the region, verify credentials, and build the AWS gateway.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when no region is configured, the region is
    /// malformed, or credentials cannot be resolved.
    pub async fn connect(&self) -> Result<(AwsSession, AwsGateway)> {
        let config = config_service::load_config(&self.config_store)?;
        let profile_region = aws::profile_region().await;
        let region = config_service::resolve_region(
            self.region_flag.as_deref(),
            &config,
            profile_region.as_deref(),
        )?;
        validate_region(&region)?;

        let pb = self
            .output
            .show_progress()
            .then(|| progress::spinner("Checking AWS credentials..."));
        match aws::connect(&region).await {
            Ok(session) => {
                if let Some(pb) = &pb {
                    progress::finish_ok(pb, &format!("Using region {region}"));
                }
                let gateway = AwsGateway::new(&session.config);
                Ok((session, gateway))
            }
            Err(e) => {
                if let Some(pb) = &pb {
                    progress::finish_clear(pb);
                }
                Err(e)
            }
        }
    }
}

/// Stable machine-readable code for a failed command, used in `--json` error
/// objects.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    if let Some(e) = err.downcast_ref::<ConfigError>() {
        return match e {
            ConfigError::MissingRegion => "MISSING_REGION",
            ConfigError::MissingCredentials(_) => "MISSING_CREDENTIALS",
            ConfigError::UnknownKey { .. }
            | ConfigError::InvalidValue { .. }
            | ConfigError::UnknownCategory { .. } => "INVALID_CONFIG",
        };
    }
    match err.downcast_ref::<SweepError>() {
        Some(SweepError::Incomplete { .. }) => "SWEEP_INCOMPLETE",
        Some(SweepError::ConfirmationRequired) => "CONFIRMATION_REQUIRED",
        Some(SweepError::Listing { .. } | SweepError::Deletion { .. }) | None => "ERROR",
    }
}
