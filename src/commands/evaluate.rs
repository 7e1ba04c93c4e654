use crate::changes::{ChangedFile, EmptyCommitBehavior, is_empty_commit, read_changed_files};
use crate::classify::{
    AreaResults, TraceSink, TracingSink, classify_all, empty_commit_results, evaluate_all,
};
use crate::cli::{Cli, EvaluateArgs};
use crate::config::{FileConfigLoader, RuleSetCollection};
use crate::output::{
    ColorMode, JsonFormatter, MarkdownFormatter, OutputFormat, OutputFormatter, OutputsFormatter,
    TextFormatter,
};
use crate::{EXIT_CONFIG_ERROR, EXIT_INPUT_ERROR, EXIT_SUCCESS, Result};

use super::context::{
    color_choice_to_mode, load_collection, read_input, report_failure, write_output,
};

#[must_use]
pub fn run_evaluate(args: &EvaluateArgs, cli: &Cli) -> i32 {
    let color = color_choice_to_mode(cli.color);

    let collection = match load_collection(&FileConfigLoader::new(), &args.config, color) {
        Ok(collection) => collection,
        Err(e) => return report_failure(&e, color, EXIT_CONFIG_ERROR),
    };

    match run_evaluate_impl(args, &collection, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_failure(&e, color, EXIT_INPUT_ERROR),
    }
}

pub(crate) fn run_evaluate_impl(
    args: &EvaluateArgs,
    collection: &RuleSetCollection,
    cli: &Cli,
) -> Result<()> {
    let text = read_input(&args.changes)?;
    let files = read_changed_files(&text)?;
    tracing::info!("Found {} changed file(s)", files.len());

    let results = evaluate_changes(&files, collection, args.empty_commit, cli.debug)?;

    let color = color_choice_to_mode(cli.color);
    let output = format_results(args.format, &results, color, cli.verbose)?;
    write_output(
        args.output.as_deref(),
        &output,
        args.format == OutputFormat::Outputs,
        cli.quiet,
    )
}

/// Classify `files` and apply each area's constraints.
///
/// An empty change list skips classification and resolves every area with
/// `empty_commit`. With `trace` set, every classification step is logged
/// at debug level.
///
/// # Errors
/// Returns an error if a pattern in `collection` is not a valid glob.
pub fn evaluate_changes(
    files: &[ChangedFile],
    collection: &RuleSetCollection,
    empty_commit: EmptyCommitBehavior,
    trace: bool,
) -> Result<AreaResults> {
    if is_empty_commit(files) {
        return Ok(empty_commit_results(collection, empty_commit));
    }

    let sink = TracingSink;
    let classified = classify_all(files, collection, trace.then_some(&sink as &dyn TraceSink))?;
    let results = evaluate_all(&classified, collection);

    tracing::info!("Successfully analyzed {} changed file(s)", files.len());
    Ok(results)
}

fn format_results(
    format: OutputFormat,
    results: &AreaResults,
    color: ColorMode,
    verbose: u8,
) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color, verbose).format(results),
        OutputFormat::Json => JsonFormatter::new()
            .format(results)
            .map(|json| format!("{json}\n")),
        OutputFormat::Markdown => MarkdownFormatter::new().format(results),
        OutputFormat::Outputs => OutputsFormatter::new().format(results),
    }
}

#[cfg(test)]
#[path = "evaluate_tests.rs"]
mod tests;
