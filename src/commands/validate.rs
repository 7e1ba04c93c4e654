use crate::cli::{Cli, ReportFormat, ValidateArgs};
use crate::config::{ConfigLoader, FileConfigLoader, ValidationReport, validate};
use crate::output::{ColorMode, ReportFormatter};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::{color_choice_to_mode, report_failure, write_output};

#[must_use]
pub fn run_validate(args: &ValidateArgs, cli: &Cli) -> i32 {
    let color = color_choice_to_mode(cli.color);

    let report = match run_validate_impl(&FileConfigLoader::new(), args) {
        Ok(report) => report,
        Err(e) => return report_failure(&e, color, EXIT_CONFIG_ERROR),
    };

    let rendered = match render_report(&report, args.format, color) {
        Ok(rendered) => rendered,
        Err(e) => return report_failure(&e, color, EXIT_CONFIG_ERROR),
    };
    if let Err(e) = write_output(None, &rendered, false, cli.quiet) {
        return report_failure(&e, color, EXIT_CONFIG_ERROR);
    }

    match report.ensure_valid(args.config.strict) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_failure(&e, color, EXIT_CONFIG_ERROR),
    }
}

/// Load the configuration and run every validation pass over it.
///
/// # Errors
/// Returns an error if the configuration cannot be read or parsed. Findings
/// are returned in the report, not as errors.
pub fn run_validate_impl<L: ConfigLoader>(
    loader: &L,
    args: &ValidateArgs,
) -> Result<ValidationReport> {
    let document = loader.load(&args.config.source())?;
    let report = validate(&document);
    tracing::info!(
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "Validation finished"
    );
    Ok(report)
}

fn render_report(report: &ValidationReport, format: ReportFormat, color: ColorMode) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(ReportFormatter::new(color).format(report)),
        ReportFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(report)?)),
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
