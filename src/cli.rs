use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::changes::{EmptyCommitBehavior, ForcePushStrategy};
use crate::config::ConfigSource;
use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Report format for the validate command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "changed-areas")]
#[command(
    author,
    version,
    about = "Classify changed files into named areas and report which areas changed"
)]
#[command(long_about = "Classify changed files into named areas using glob rules, \
    then decide per area whether it changed.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Unreadable change list or event payload\n  \
    2 - Configuration error")]
pub struct Cli {
    /// Increase log verbosity (-v for info)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Trace every classification step
    #[arg(long, global = true)]
    pub debug: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate the area configuration and report every problem
    Validate(ValidateArgs),

    /// Classify a change list and report which areas changed
    Evaluate(EvaluateArgs),

    /// Print the base and head revisions to diff for a push event
    Range(RangeArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to configuration file [default: .github/changed-areas.yml]
    #[arg(short, long, conflicts_with = "config_inline")]
    pub config: Option<PathBuf>,

    /// Configuration document as inline YAML or JSON (takes precedence over --config)
    #[arg(long)]
    pub config_inline: Option<String>,

    /// Treat validation warnings as errors
    #[arg(long)]
    pub strict: bool,
}

impl ConfigArgs {
    #[must_use]
    pub fn source(&self) -> ConfigSource {
        ConfigSource::resolve(self.config_inline.clone(), self.config.clone())
    }
}

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Parser, Debug)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Change list: JSON array of files or one path per line ("-" for stdin)
    #[arg(long)]
    pub changes: PathBuf,

    /// What to report when the change list is empty
    #[arg(long, value_enum, default_value = "none")]
    pub empty_commit: EmptyCommitBehavior,

    /// Output format [possible values: text, json, markdown, outputs]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout (appends for the outputs format)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct RangeArgs {
    /// Push event payload (JSON with before, after and forced)
    #[arg(long)]
    pub event: PathBuf,

    /// Branch compared against after a force push [default: main]
    #[arg(long)]
    pub default_branch: Option<String>,

    /// How to handle a force push
    #[arg(long, value_enum, default_value = "compare-default-branch")]
    pub force_push_strategy: ForcePushStrategy,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
