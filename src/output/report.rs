use std::fmt::Write;
use std::io::IsTerminal;

use crate::config::{Diagnostic, Severity, ValidationReport};

use super::{ColorMode, ansi, display_name};

/// Renders a validation report, one line per finding.
pub struct ReportFormatter {
    use_colors: bool,
}

impl ReportFormatter {
    /// For a report printed on stdout.
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::for_stream(mode, std::io::stdout().is_terminal())
    }

    /// For a report printed on stderr ahead of a command's own output.
    #[must_use]
    pub fn stderr(mode: ColorMode) -> Self {
        Self::for_stream(mode, std::io::stderr().is_terminal())
    }

    /// Colors follow `mode`, with `Auto` deciding by the target stream.
    #[must_use]
    pub fn for_stream(mode: ColorMode, stream_is_terminal: bool) -> Self {
        Self {
            use_colors: mode.enabled_for(stream_is_terminal),
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn write_diagnostic(&self, output: &mut String, diagnostic: &Diagnostic) {
        let (label, color, hint_label) = match diagnostic.severity {
            Severity::Error => ("error", ansi::RED, "Fix"),
            Severity::Warning => ("warning", ansi::YELLOW, "Recommendation"),
        };
        let location = diagnostic
            .area
            .as_deref()
            .map_or_else(|| "[config]".to_string(), |a| format!("[{}]", display_name(a)));

        write!(output, "{}: {location} ", self.paint(label, color)).ok();
        if let Some(field) = &diagnostic.field {
            write!(output, "{field}: ").ok();
        }
        writeln!(output, "{}", diagnostic.message).ok();

        if let Some(hint) = &diagnostic.hint {
            writeln!(output, "  {hint_label}: {hint}").ok();
        }
    }

    #[must_use]
    pub fn format(&self, report: &ValidationReport) -> String {
        let mut output = String::new();

        for diagnostic in report.errors.iter().chain(&report.warnings) {
            self.write_diagnostic(&mut output, diagnostic);
        }

        let errors = report.errors.len();
        let warnings = report.warnings.len();
        let status = if report.is_valid() {
            self.paint("✓ Configuration valid", ansi::GREEN)
        } else {
            self.paint("✗ Configuration invalid", ansi::RED)
        };
        if !output.is_empty() {
            output.push('\n');
        }
        writeln!(output, "{status}: {errors} error(s), {warnings} warning(s)").ok();
        output
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
