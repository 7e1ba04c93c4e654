use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::cli::{ColorChoice, ConfigArgs};
use crate::config::{ConfigLoader, RuleSetCollection, validate};
use crate::error::{ChangedAreasError, Result};
use crate::output::{ColorMode, ErrorOutput, ReportFormatter};

#[must_use]
pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Print `err` to stderr and hand back `exit_code`.
pub(crate) fn report_failure(err: &ChangedAreasError, color: ColorMode, exit_code: i32) -> i32 {
    ErrorOutput::new(color).print_failure(err);
    exit_code
}

/// Load, validate and normalise the configuration.
///
/// Findings are written to stderr before the decision so a failing run
/// still shows every problem.
///
/// # Errors
/// Returns an error if the document cannot be loaded, has validation
/// errors, or has warnings while `strict` is set.
pub fn load_collection<L: ConfigLoader>(
    loader: &L,
    args: &ConfigArgs,
    color: ColorMode,
) -> Result<RuleSetCollection> {
    let document = loader.load(&args.source())?;
    let report = validate(&document);

    if !report.is_valid() || report.has_warnings() {
        eprint!("{}", ReportFormatter::stderr(color).format(&report));
    }
    report.ensure_valid(args.strict)?;
    tracing::info!("Configuration valid");

    RuleSetCollection::from_document(&document)
}

/// Read a whole input file, or stdin when `path` is `-`.
///
/// # Errors
/// Returns an error if the input cannot be read.
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        return Ok(std::io::read_to_string(std::io::stdin().lock())?);
    }
    fs::read_to_string(path).map_err(|source| ChangedAreasError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `content` to `output_path`, or to stdout unless `quiet`.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_output(
    output_path: Option<&Path>,
    content: &str,
    append: bool,
    quiet: bool,
) -> Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        if append {
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            file.write_all(content.as_bytes())?;
        } else {
            fs::write(path, content)?;
        }
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
