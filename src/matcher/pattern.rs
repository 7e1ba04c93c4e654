//! Glob matching for area rules.
//!
//! `*` stops at `/`, `**` crosses directories, and a leading dot in a path
//! segment gets no special treatment, so `src/**` also covers `src/.env`.
//! Matching is case-sensitive.

use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};

use crate::error::{ChangedAreasError, Result};

/// Build a glob with the matching options every area rule uses.
///
/// # Errors
/// Returns the underlying glob error when the pattern is malformed.
pub fn build_glob(pattern: &str) -> std::result::Result<Glob, globset::Error> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .backslash_escape(true)
        .build()
}

/// Returns true when `path` satisfies `pattern`.
///
/// A malformed pattern never matches.
#[must_use]
pub fn matches(path: &str, pattern: &str) -> bool {
    build_glob(pattern).is_ok_and(|glob| glob.compile_matcher().is_match(path))
}

/// An ordered list of patterns compiled into one matcher.
///
/// Keeps the source strings so callers can report which pattern fired.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<String>,
    set: GlobSet,
}

impl PatternSet {
    /// Compile the given patterns.
    ///
    /// # Errors
    /// Returns an error if any pattern is not a valid glob.
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = build_glob(pattern).map_err(|e| ChangedAreasError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let set = builder
            .build()
            .map_err(|e| ChangedAreasError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self {
            patterns: patterns.to_vec(),
            set,
        })
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    #[must_use]
    pub fn is_match(&self, path: &str) -> bool {
        self.set.is_match(path)
    }

    /// The first pattern, in declaration order, that matches `path`.
    #[must_use]
    pub fn first_match(&self, path: &str) -> Option<&str> {
        self.set
            .matches(path)
            .into_iter()
            .min()
            .map(|index| self.patterns[index].as_str())
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
