mod error_output;
mod json;
mod markdown;
mod outputs;
mod report;
mod text;

pub use error_output::ErrorOutput;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use outputs::{OutputsFormatter, sanitize_name};
pub use report::ReportFormatter;
pub use text::TextFormatter;

use crate::classify::AreaResults;
use crate::config::DEFAULT_AREA;
use crate::error::Result;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorMode {
    fn enabled_for(self, stream_is_terminal: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::env::var_os("NO_COLOR").is_none() && stream_is_terminal,
        }
    }
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Trait for formatting area results into various output formats.
pub trait OutputFormatter {
    /// Format the area results into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, results: &AreaResults) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
    Outputs,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            "outputs" => Ok(Self::Outputs),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Name shown to people for an area; the flat `files` rule-set has no key of its own.
#[must_use]
pub fn display_name(area: &str) -> &str {
    if area == DEFAULT_AREA { "files" } else { area }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
