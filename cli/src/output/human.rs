//! Human-readable terminal renderer.

use std::path::Path;

use owo_colors::OwoColorize as _;

use crate::domain::summary::summary_line;
use crate::domain::{PrefixRules, ResourceCategory, SweepConfig, SweepPlan, SweepResult};
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the CLI version information.
    pub fn render_version(&self, version: &str) {
        if self.ctx.quiet {
            return;
        }
        println!("bedrock-sweep {version}");
    }

    /// Print the run banner: region and mode.
    pub fn render_banner(&self, region: &str, dry_run: bool) {
        if self.ctx.quiet {
            return;
        }
        println!();
        self.ctx.header(&format!("Sweeping course resources in {region}"));
        if dry_run {
            self.ctx.info("Dry run: nothing will be deleted");
        }
        println!();
    }

    /// Render the planned resources grouped by category.
    pub fn render_plan(&self, plan: &SweepPlan) {
        if self.ctx.quiet {
            return;
        }
        println!();
        if plan.is_empty() {
            self.ctx.info("No matching resources found.");
            println!();
            return;
        }

        self.ctx.header(&format!("{} matching resource(s):", plan.len()));
        for category in &plan.categories {
            let mut resources = plan.in_category(*category).peekable();
            if resources.peek().is_none() {
                continue;
            }
            println!("  {}", category.label().style(self.ctx.styles.bold));
            for resource in resources {
                println!("    - {}", resource.display_name());
            }
        }
        println!();
    }

    /// Render the final summary table, warnings, and failures.
    pub fn render_summary(&self, result: &SweepResult) {
        if !self.ctx.quiet {
            println!();
            self.ctx.header("Summary:");
            let width = label_width(result.counts.iter().map(|(c, _)| *c));
            for (category, counts) in &result.counts {
                let line = summary_line(*category, *counts, result.dry_run);
                let (label, rest) = line.split_once(": ").unwrap_or((line.as_str(), ""));
                println!("    {:<width$}  {rest}", format!("{label}:"));
            }
            println!("    {:<width$}  {}", "Errors:", result.total_errors());
        }

        if !result.warnings.is_empty() && !self.ctx.quiet {
            println!();
            for warning in &result.warnings {
                self.ctx.warn(&format!(
                    "{} were not listed: {}",
                    warning.category.label(),
                    warning.message
                ));
            }
        }

        if !result.failures.is_empty() {
            eprintln!();
            for failure in &result.failures {
                self.ctx.error(&format!(
                    "{} {}: {}",
                    failure.resource.category.noun(),
                    failure.resource.display_name(),
                    failure.message
                ));
            }
        }

        if self.ctx.quiet {
            return;
        }
        println!();
        if result.dry_run {
            self.ctx
                .info("This was a dry run. Re-run without --dry-run to delete these resources.");
        } else if result.is_clean() {
            println!(
                "  {} Cleanup completed successfully.",
                "✓".style(self.ctx.styles.success)
            );
        } else {
            println!(
                "  {} Cleanup completed with {} error(s). Check the output above and re-run for stragglers.",
                "⚠".style(self.ctx.styles.warning),
                result.total_errors()
            );
        }
        println!();
    }

    /// Render each category with its effective prefix.
    pub fn render_categories(&self, rules: &PrefixRules) {
        println!();
        self.ctx.header("Resource categories (deletion order):");
        println!();
        for category in ResourceCategory::ALL {
            println!(
                "  {:<20} {:<22} {}",
                category.slug(),
                category.label().style(self.ctx.styles.dim),
                format_prefix(rules.prefix(category))
            );
        }
        println!();
    }

    /// Render the current sweeper configuration.
    pub fn render_config(&self, config: &SweepConfig, path: &Path) {
        println!();
        println!(
            "  {}",
            format!("Configuration ({})", path.display()).style(self.ctx.styles.header)
        );
        println!();
        println!(
            "  {:<30} {}",
            "region:",
            config.region.as_deref().unwrap_or("(not set)")
        );
        for category in ResourceCategory::ALL {
            let key = format!("prefix.{}:", category.slug());
            match config.prefixes.get(&category) {
                Some(prefix) => println!("  {key:<30} {}", format_prefix(prefix)),
                None => println!(
                    "  {key:<30} {} {}",
                    format_prefix(category.default_prefix()),
                    "(default)".style(self.ctx.styles.dim)
                ),
            }
        }
        println!();
        println!("  {}", "Environment:".style(self.ctx.styles.bold));
        for var in ["BEDROCK_SWEEP_CONFIG", "AWS_REGION", "AWS_PROFILE", "NO_COLOR"] {
            println!(
                "    {:<22} {}",
                format!("{var}:"),
                std::env::var(var).unwrap_or_else(|_| "(not set)".to_string())
            );
        }
        println!();
    }
}

// ── Display helpers (used by tests and output layer) ─────────────────────────

/// Show a prefix as a glob-like pattern, e.g. `bedrock-knowledge-base-*`.
#[must_use]
pub fn format_prefix(prefix: &str) -> String {
    format!("{prefix}*")
}

fn label_width(categories: impl Iterator<Item = ResourceCategory>) -> usize {
    categories
        .map(|c| c.label().len() + 1)
        .max()
        .unwrap_or(0)
        .max("Errors:".len())
}
