use indexmap::IndexMap;
use serde::Serialize;

use crate::changes::{ChangedFile, EmptyCommitBehavior};
use crate::config::{AreaRuleSet, RuleSetCollection};

use super::classifier::Classified;

/// Area name to its final result, in configuration order.
pub type AreaResults = IndexMap<String, AreaResult>;

/// Final verdict for one area.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AreaResult {
    pub changed: bool,
    /// Matched paths in input order; empty when a constraint rejected the area.
    pub files: Vec<String>,
    pub count: usize,
    /// Only set when a constraint or run policy decided the outcome.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl AreaResult {
    #[must_use]
    pub fn unchanged() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn triggered(reason: impl Into<String>) -> Self {
        Self {
            changed: true,
            reason: Some(reason.into()),
            ..Self::default()
        }
    }
}

/// Apply an area's constraints to the files it matched.
///
/// Below `min_changed_files` the area is unchanged and reports no files.
#[must_use]
pub fn evaluate(area_name: &str, matched: &[&ChangedFile], rules: &AreaRuleSet) -> AreaResult {
    let count = matched.len();

    if let Some(min) = rules.min_changed_files
        && count < min
    {
        let reason = format!("Only {count} file(s) changed, minimum is {min}");
        tracing::info!("[{area_name}] {reason}");
        return AreaResult {
            changed: false,
            files: Vec::new(),
            count: 0,
            reason: Some(reason),
        };
    }

    AreaResult {
        changed: count > 0,
        files: matched.iter().map(|file| file.path.clone()).collect(),
        count,
        reason: None,
    }
}

/// Evaluate every area of the collection.
///
/// An area missing from `classified` is treated as having no matches.
#[must_use]
pub fn evaluate_all(classified: &Classified<'_>, collection: &RuleSetCollection) -> AreaResults {
    collection
        .iter()
        .map(|(name, rules)| {
            let matched = classified.get(name).map_or(&[][..], Vec::as_slice);
            (name.to_string(), evaluate(name, matched, rules))
        })
        .collect()
}

/// Results for a run without changed files; classification is skipped.
#[must_use]
pub fn empty_commit_results(
    collection: &RuleSetCollection,
    behavior: EmptyCommitBehavior,
) -> AreaResults {
    tracing::info!("Empty commit detected (no files changed)");
    collection
        .names()
        .map(|name| {
            let result = match behavior {
                EmptyCommitBehavior::None => AreaResult::unchanged(),
                EmptyCommitBehavior::All => {
                    AreaResult::triggered("Empty commit configured to trigger all areas")
                }
            };
            (name.to_string(), result)
        })
        .collect()
}

#[cfg(test)]
#[path = "constraint_tests.rs"]
mod tests;
