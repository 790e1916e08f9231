//! `TerminalReporter` — Presentation-layer implementation of `ProgressReporter`.
//!
//! Wraps `&OutputContext` and implements the `application::ports::ProgressReporter`
//! trait so application services can emit progress events without depending on
//! any presentation type directly.

use owo_colors::OwoColorize as _;

use crate::application::ports::ProgressReporter;
use crate::output::OutputContext;

/// Terminal progress reporter that wraps an `OutputContext`.
///
/// - `step()` prints `"  → {message}"` (suppressed when quiet)
/// - `success()` prints `"  ✓ {message}"` (suppressed when quiet)
/// - `warn()` prints `"  ⚠ {message}"` (suppressed when quiet)
/// - `failure()` prints `"  ✗ {message}"` to stderr (never suppressed)
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
    quiet: bool,
}

impl<'a> TerminalReporter<'a> {
    /// Create a new `TerminalReporter` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self {
            ctx,
            quiet: ctx.quiet,
        }
    }

    /// Reporter that only prints failures, used when stdout carries JSON.
    #[must_use]
    pub fn failures_only(ctx: &'a OutputContext) -> Self {
        Self { ctx, quiet: true }
    }
}

impl ProgressReporter for TerminalReporter<'_> {
    fn step(&self, message: &str) {
        if !self.quiet {
            println!("  {} {message}", "→".style(self.ctx.styles.step));
        }
    }

    fn success(&self, message: &str) {
        if !self.quiet {
            println!("  {} {message}", "✓".style(self.ctx.styles.success));
        }
    }

    fn warn(&self, message: &str) {
        if !self.quiet {
            println!("  {} {message}", "⚠".style(self.ctx.styles.warning));
        }
    }

    fn failure(&self, message: &str) {
        self.ctx.error(message);
    }
}
