use std::fmt;

use serde::{Deserialize, Serialize};

use crate::matcher::is_binary;

/// How a file was touched by the evaluated change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum FileStatus {
    Added,
    Modified,
    Removed,
    Renamed,
}

impl FileStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Modified => "modified",
            Self::Removed => "removed",
            Self::Renamed => "renamed",
        }
    }
}

/// Hosting APIs report a few extra statuses (`changed`, `copied`, ...);
/// anything that is not an add, removal or rename counts as a modification.
impl From<&str> for FileStatus {
    fn from(status: &str) -> Self {
        match status {
            "added" => Self::Added,
            "removed" => Self::Removed,
            "renamed" => Self::Renamed,
            _ => Self::Modified,
        }
    }
}

impl From<String> for FileStatus {
    fn from(status: String) -> Self {
        Self::from(status.as_str())
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One file touched by the evaluated change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangedFile {
    /// Repository-relative path with forward slashes.
    pub path: String,
    pub status: FileStatus,
    /// Only set for renames.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_path: Option<String>,
    pub binary: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additions: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletions: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<u64>,
}

impl ChangedFile {
    /// Create a file record; the binary flag is derived from the path.
    #[must_use]
    pub fn new(path: impl Into<String>, status: FileStatus) -> Self {
        let path = normalize_path(&path.into());
        let binary = is_binary(&path);
        Self {
            path,
            status,
            previous_path: None,
            binary,
            additions: None,
            deletions: None,
            changes: None,
        }
    }

    #[must_use]
    pub fn modified(path: impl Into<String>) -> Self {
        Self::new(path, FileStatus::Modified)
    }

    #[must_use]
    pub fn renamed(previous_path: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(path, FileStatus::Renamed).with_previous_path(previous_path)
    }

    #[must_use]
    pub fn with_previous_path(mut self, previous_path: impl Into<String>) -> Self {
        self.previous_path = Some(normalize_path(&previous_path.into()));
        self
    }

    #[must_use]
    pub const fn with_line_changes(mut self, additions: u64, deletions: u64) -> Self {
        self.additions = Some(additions);
        self.deletions = Some(deletions);
        self.changes = Some(additions + deletions);
        self
    }

    /// A rename that carries no content change.
    ///
    /// Missing line counts are read as zero.
    #[must_use]
    pub fn is_pure_rename(&self) -> bool {
        self.status == FileStatus::Renamed
            && self.additions.unwrap_or(0) == 0
            && self.deletions.unwrap_or(0) == 0
    }

    /// Extension of the final path segment including the dot, or `""`.
    ///
    /// A dot-file such as `.gitignore` has no extension; `file.` has `"."`.
    #[must_use]
    pub fn extension(&self) -> &str {
        let name = self.path.rsplit('/').next().unwrap_or_default();
        match name.rfind('.') {
            Some(index) if name[..index].chars().any(|c| c != '.') => &name[index..],
            _ => "",
        }
    }
}

fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
