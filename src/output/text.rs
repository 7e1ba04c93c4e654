use std::io::{IsTerminal, Write};

use crate::classify::{AreaResult, AreaResults};
use crate::error::Result;

use super::{ColorMode, OutputFormatter, ansi, display_name};

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    /// With `verbose >= 1` the matched paths are listed under each changed area.
    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: mode.enabled_for(std::io::stdout().is_terminal()),
            verbose,
        }
    }

    const fn status_icon(result: &AreaResult) -> &'static str {
        if result.changed { "✓" } else { "·" }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_area(&self, name: &str, result: &AreaResult, output: &mut Vec<u8>) {
        let icon = Self::status_icon(result);
        let color = if result.changed { ansi::GREEN } else { ansi::YELLOW };
        let status = self.colorize(&format!("changed={}", result.changed), color);

        writeln!(
            output,
            "{icon} {}: {status}, count={}",
            display_name(name),
            result.count
        )
        .ok();

        if let Some(reason) = &result.reason {
            writeln!(output, "   Reason: {reason}").ok();
        }

        if self.verbose >= 1 {
            for file in &result.files {
                writeln!(output, "   {file}").ok();
            }
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, results: &AreaResults) -> Result<String> {
        let mut output = Vec::new();

        for (name, result) in results {
            self.format_area(name, result, &mut output);
        }

        let changed = results.values().filter(|r| r.changed).count();
        let changed_str = self.colorize(&changed.to_string(), ansi::GREEN);
        writeln!(
            output,
            "\nSummary: {changed_str} of {} area(s) changed",
            results.len()
        )
        .ok();

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
