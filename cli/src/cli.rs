//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags, BehaviourFlags, OutputFlags, error_code};
use crate::commands;
use crate::domain::SweepError;
use crate::output::json::format_error;

/// Find and delete the Bedrock, vector store, and AgentCore resources left
/// behind by the course notebooks
#[derive(Parser)]
#[command(
    name = "bedrock-sweep",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// AWS region to sweep
    #[arg(long, global = true, env = "AWS_REGION")]
    pub region: Option<String>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output (also honoured via `NO_COLOR`)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log SDK calls and per-resource decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Delete without asking for confirmation
    #[arg(short, long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Delete every resource that matches its category prefix
    Sweep(commands::sweep::SweepArgs),

    /// List matching resources without deleting anything
    List(commands::list::ListArgs),

    /// Show resource categories and their name prefixes
    Categories,

    /// Manage configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// In JSON mode a failure is also written to stdout as an error object,
    /// unless the command already printed its own report.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            region,
            json,
            quiet,
            no_color,
            verbose: _,
            yes,
            command,
        } = self;

        let app = AppContext::new(&AppFlags {
            output: OutputFlags {
                no_color,
                quiet,
                json,
            },
            behaviour: BehaviourFlags { yes, region },
        });

        let result = match command {
            Command::Sweep(args) => commands::sweep::run(&app, &args).await,
            Command::List(args) => commands::list::run(&app, &args).await,
            Command::Categories => commands::categories::run(&app),
            Command::Config(cmd) => commands::config::run(&app, cmd),
            Command::Version => commands::version::run(&app),
        };

        if let Err(e) = &result {
            let reported = matches!(
                e.downcast_ref::<SweepError>(),
                Some(SweepError::Incomplete { .. })
            );
            if app.is_json() && !reported {
                println!("{}", format_error(&format!("{e:#}"), error_code(e))?);
            }
        }
        result
    }
}
