//! Signals derived from version-control history that change how a run
//! behaves: first commits, force pushes and empty commits.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{ChangedAreasError, Result};

use super::types::ChangedFile;

/// The `before` SHA reported for a branch's first push.
pub const ZERO_SHA: &str = "0000000000000000000000000000000000000000";

const DEFAULT_BRANCH: &str = "main";

/// The subset of a push payload the run cares about.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PushEvent {
    pub before: String,
    pub after: String,
    #[serde(default)]
    pub forced: bool,
}

/// What to compare against when history was rewritten.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ForcePushStrategy {
    /// Compare the pushed head with the default branch
    #[default]
    CompareDefaultBranch,
    /// Treat every file in the pushed commit as changed
    AllFiles,
    /// Abort the run
    Fail,
}

/// Outcome for a run with no changed files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyCommitBehavior {
    /// Report every area as unchanged
    #[default]
    None,
    /// Report every area as changed
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonStrategy {
    Normal,
    FirstCommit,
    ForcePushDefaultBranch,
    ForcePushAllFiles,
}

impl fmt::Display for ComparisonStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Normal => "normal",
            Self::FirstCommit => "first-commit",
            Self::ForcePushDefaultBranch => "force-push-default-branch",
            Self::ForcePushAllFiles => "force-push-all-files",
        })
    }
}

/// The revision range discovery should diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub strategy: ComparisonStrategy,
    pub base: String,
    pub head: String,
}

#[must_use]
pub fn is_first_commit(event: &PushEvent) -> bool {
    event.before == ZERO_SHA
}

#[must_use]
pub const fn is_force_push(event: &PushEvent) -> bool {
    event.forced
}

#[must_use]
pub const fn is_empty_commit(files: &[ChangedFile]) -> bool {
    files.is_empty()
}

/// Choose the base and head revisions for a push event.
///
/// A first commit is compared with itself. A force push is resolved with
/// `strategy`; `default_branch` falls back to `main`.
///
/// # Errors
/// Returns [`ChangedAreasError::ForcePushRejected`] for a force push under
/// [`ForcePushStrategy::Fail`].
pub fn plan_push_comparison(
    event: &PushEvent,
    default_branch: Option<&str>,
    strategy: ForcePushStrategy,
) -> Result<Comparison> {
    if is_first_commit(event) {
        tracing::warn!("First commit detected - all files in the commit will be marked as changed");
        return Ok(Comparison {
            strategy: ComparisonStrategy::FirstCommit,
            base: event.after.clone(),
            head: event.after.clone(),
        });
    }

    if !is_force_push(event) {
        return Ok(Comparison {
            strategy: ComparisonStrategy::Normal,
            base: event.before.clone(),
            head: event.after.clone(),
        });
    }

    tracing::warn!(?strategy, "Force push detected");
    match strategy {
        ForcePushStrategy::CompareDefaultBranch => {
            let branch = default_branch
                .filter(|b| !b.is_empty())
                .unwrap_or(DEFAULT_BRANCH);
            Ok(Comparison {
                strategy: ComparisonStrategy::ForcePushDefaultBranch,
                base: format!("refs/heads/{branch}"),
                head: event.after.clone(),
            })
        }
        ForcePushStrategy::AllFiles => Ok(Comparison {
            strategy: ComparisonStrategy::ForcePushAllFiles,
            base: event.after.clone(),
            head: event.after.clone(),
        }),
        ForcePushStrategy::Fail => Err(ChangedAreasError::ForcePushRejected),
    }
}

#[cfg(test)]
#[path = "edge_tests.rs"]
mod tests;
