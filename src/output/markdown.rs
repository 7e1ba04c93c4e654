use std::fmt::Write;

use crate::classify::AreaResults;
use crate::error::Result;

use super::{OutputFormatter, display_name};

/// Job-summary style report with changed and unchanged tables.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format(&self, results: &AreaResults) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "## 📊 Changed Areas Analysis\n").ok();

        let changed: Vec<_> = results.iter().filter(|(_, r)| r.changed).collect();
        let unchanged: Vec<_> = results.iter().filter(|(_, r)| !r.changed).collect();

        if !changed.is_empty() {
            writeln!(output, "### ✅ Changed Areas\n").ok();
            writeln!(output, "| Area | Files Changed | Status |").ok();
            writeln!(output, "|------|---------------|--------|").ok();
            for (name, result) in &changed {
                writeln!(
                    output,
                    "| {} | {} | ✅ Changed |",
                    display_name(name),
                    result.count
                )
                .ok();
            }
            writeln!(output).ok();
        }

        if !unchanged.is_empty() {
            writeln!(output, "### ⚪ Unchanged Areas\n").ok();
            writeln!(output, "| Area | Status |").ok();
            writeln!(output, "|------|--------|").ok();
            for (name, _) in &unchanged {
                writeln!(output, "| {} | ⚪ No changes |", display_name(name)).ok();
            }
            writeln!(output).ok();
        }

        let total: usize = results.values().map(|r| r.count).sum();
        writeln!(output, "**Total files analyzed:** {total}").ok();

        Ok(output)
    }
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
