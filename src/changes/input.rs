//! Reading the change list and push payloads handed over by discovery.

use serde::Deserialize;

use crate::error::{ChangedAreasError, Result};

use super::edge::PushEvent;
use super::types::{ChangedFile, FileStatus};

/// Shape of one entry as produced by hosting APIs or a `git diff` exporter.
#[derive(Debug, Deserialize)]
struct RawChangedFile {
    #[serde(alias = "filename")]
    path: String,
    #[serde(default = "default_status")]
    status: FileStatus,
    #[serde(default, alias = "previous_filename")]
    previous_path: Option<String>,
    #[serde(default)]
    additions: Option<u64>,
    #[serde(default)]
    deletions: Option<u64>,
    #[serde(default)]
    changes: Option<u64>,
}

const fn default_status() -> FileStatus {
    FileStatus::Modified
}

impl From<RawChangedFile> for ChangedFile {
    fn from(raw: RawChangedFile) -> Self {
        let mut file = Self::new(raw.path, raw.status);
        if file.status == FileStatus::Renamed
            && let Some(previous) = raw.previous_path
        {
            file = file.with_previous_path(previous);
        }
        file.additions = raw.additions;
        file.deletions = raw.deletions;
        file.changes = raw.changes;
        file
    }
}

/// A JSON change list opens with `[` followed by an object or the closing
/// bracket. Paths such as `[locale]/index.ts` start with `[` too.
fn looks_like_json_array(text: &str) -> bool {
    text.strip_prefix('[')
        .map(str::trim_start)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(['{', ']']))
}

/// Parse a change list.
///
/// Accepts a JSON array of file objects or a newline-separated list of
/// paths (each treated as modified). Blank lines are skipped.
///
/// # Errors
/// Returns an error if the JSON is malformed or an entry has an empty path.
pub fn read_changed_files(text: &str) -> Result<Vec<ChangedFile>> {
    let trimmed = text.trim_start();
    let files: Vec<ChangedFile> = if looks_like_json_array(trimmed) {
        let raw: Vec<RawChangedFile> = serde_json::from_str(trimmed)?;
        raw.into_iter().map(ChangedFile::from).collect()
    } else {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(ChangedFile::modified)
            .collect()
    };

    if let Some(index) = files.iter().position(|f| f.path.is_empty()) {
        return Err(ChangedAreasError::ChangeList(format!(
            "entry {index} has an empty path"
        )));
    }
    Ok(files)
}

/// Parse a push event payload.
///
/// # Errors
/// Returns an error if the payload is not valid JSON or lacks `before`/`after`.
pub fn read_push_event(text: &str) -> Result<PushEvent> {
    serde_json::from_str(text)
        .map_err(|e| ChangedAreasError::ChangeList(format!("invalid push event: {e}")))
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
