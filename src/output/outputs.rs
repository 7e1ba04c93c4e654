//! Step outputs in the `key=value` / heredoc format read by CI runners from
//! a `$GITHUB_OUTPUT` style file.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use crate::classify::{AreaResult, AreaResults};
use crate::config::DEFAULT_AREA;
use crate::error::Result;

use super::{JsonFormatter, OutputFormatter, display_name};

static UNSAFE_KEY_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]").expect("Invalid regex"));

const DELIMITER: &str = "CHANGED_AREAS_EOF";

/// Replace every character outside `[A-Za-z0-9_]` with `_`.
#[must_use]
pub fn sanitize_name(name: &str) -> String {
    UNSAFE_KEY_CHARS.replace_all(name, "_").into_owned()
}

pub struct OutputsFormatter;

impl OutputsFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn key(area: &str, suffix: &str) -> String {
        if area == DEFAULT_AREA {
            suffix.to_string()
        } else {
            format!("{}_{suffix}", sanitize_name(area))
        }
    }

    /// A delimiter that does not occur as a line of `files`.
    fn delimiter(files: &[String]) -> String {
        let mut delimiter = DELIMITER.to_string();
        let mut n = 0;
        while files.iter().any(|f| *f == delimiter) {
            n += 1;
            delimiter = format!("{DELIMITER}_{n}");
        }
        delimiter
    }

    fn write_area(output: &mut String, name: &str, result: &AreaResult) {
        writeln!(output, "{}={}", Self::key(name, "changed"), result.changed).ok();

        let delimiter = Self::delimiter(&result.files);
        writeln!(output, "{}<<{delimiter}", Self::key(name, "files")).ok();
        for file in &result.files {
            writeln!(output, "{file}").ok();
        }
        writeln!(output, "{delimiter}").ok();

        writeln!(output, "{}={}", Self::key(name, "count"), result.count).ok();
    }
}

impl Default for OutputsFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for OutputsFormatter {
    fn format(&self, results: &AreaResults) -> Result<String> {
        let mut output = String::new();

        for (name, result) in results {
            Self::write_area(&mut output, name, result);
            tracing::info!(
                "[{}] changed={}, count={}",
                display_name(name),
                result.changed,
                result.count
            );
        }

        let json = JsonFormatter::compact().format(results)?;
        writeln!(output, "areas_json={json}").ok();

        Ok(output)
    }
}

#[cfg(test)]
#[path = "outputs_tests.rs"]
mod tests;
