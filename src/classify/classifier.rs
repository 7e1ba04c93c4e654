use std::fmt;

use indexmap::IndexMap;

use crate::changes::{ChangedFile, FileStatus};
use crate::config::{AreaRuleSet, RuleSetCollection};
use crate::error::Result;
use crate::matcher::PatternSet;

use super::trace::TraceSink;

/// Area name to the files it matched, in input order.
pub type Classified<'f> = IndexMap<String, Vec<&'f ChangedFile>>;

/// Why a file was left out of an area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exclusion {
    NoIncludeMatch,
    ExcludePattern(String),
    Extension(String),
    Binary,
    Deleted,
    PureRename,
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoIncludeMatch => f.write_str("no include pattern matched"),
            Self::ExcludePattern(pattern) => write!(f, "matched exclude pattern \"{pattern}\""),
            Self::Extension(ext) if ext.is_empty() => {
                f.write_str("file has no extension and required_extensions is set")
            }
            Self::Extension(ext) => write!(f, "extension \"{ext}\" is not in required_extensions"),
            Self::Binary => f.write_str("binary file excluded"),
            Self::Deleted => f.write_str("deleted file ignored"),
            Self::PureRename => f.write_str("pure rename ignored"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Matched,
    Excluded(Exclusion),
}

impl Classification {
    #[must_use]
    pub const fn is_matched(&self) -> bool {
        matches!(self, Self::Matched)
    }

    #[must_use]
    pub fn reason(&self) -> String {
        match self {
            Self::Matched => "matched".to_string(),
            Self::Excluded(exclusion) => exclusion.to_string(),
        }
    }
}

/// One area's rules with its patterns compiled.
#[derive(Debug, Clone)]
pub struct CompiledArea {
    rules: AreaRuleSet,
    include: PatternSet,
    exclude: PatternSet,
}

impl CompiledArea {
    /// # Errors
    /// Returns an error if an include or exclude pattern is not a valid glob.
    pub fn new(rules: &AreaRuleSet) -> Result<Self> {
        Ok(Self {
            include: PatternSet::new(&rules.include)?,
            exclude: PatternSet::new(&rules.exclude)?,
            rules: rules.clone(),
        })
    }

    #[must_use]
    pub const fn rules(&self) -> &AreaRuleSet {
        &self.rules
    }

    /// Decide whether `file` belongs to this area.
    ///
    /// Steps run in a fixed order and stop at the first exclusion: include,
    /// exclude, extension allow-list, binary, deletion, rename.
    pub fn classify(&self, file: &ChangedFile, tracer: &Tracer<'_>) -> Classification {
        let Some(pattern) = self.include.first_match(&file.path) else {
            tracer.step(file, "include", "no pattern matched");
            return Classification::Excluded(Exclusion::NoIncludeMatch);
        };
        tracer.step(file, "include", &format!("matched \"{pattern}\""));

        if let Some(pattern) = self.exclude.first_match(&file.path) {
            tracer.step(file, "exclude", &format!("matched \"{pattern}\""));
            return Classification::Excluded(Exclusion::ExcludePattern(pattern.to_string()));
        }
        tracer.step(file, "exclude", "no pattern matched");

        if let Some(exclusion) = self
            .check_extension(file, tracer)
            .or_else(|| self.check_policies(file, tracer))
        {
            return Classification::Excluded(exclusion);
        }

        tracer.step(file, "result", "matched");
        Classification::Matched
    }

    fn check_extension(&self, file: &ChangedFile, tracer: &Tracer<'_>) -> Option<Exclusion> {
        if self.rules.required_extensions.is_empty() {
            tracer.step(file, "extension", "skipped, no allow-list");
            return None;
        }
        let ext = file.extension();
        if !self.rules.required_extensions.iter().any(|e| e == ext) {
            tracer.step(file, "extension", &format!("\"{ext}\" not allowed"));
            return Some(Exclusion::Extension(ext.to_string()));
        }
        tracer.step(file, "extension", &format!("\"{ext}\" allowed"));
        None
    }

    /// Binary, deletion and rename policies, in that order.
    fn check_policies(&self, file: &ChangedFile, tracer: &Tracer<'_>) -> Option<Exclusion> {
        if !self.rules.exclude_binary_files {
            tracer.step(file, "binary", "skipped");
        } else if file.binary {
            tracer.step(file, "binary", "excluded");
            return Some(Exclusion::Binary);
        } else {
            tracer.step(file, "binary", "kept, not binary");
        }

        if !self.rules.ignore_deleted_files {
            tracer.step(file, "deleted", "skipped");
        } else if file.status == FileStatus::Removed {
            tracer.step(file, "deleted", "ignored");
            return Some(Exclusion::Deleted);
        } else {
            tracer.step(file, "deleted", "kept, not removed");
        }

        if !self.rules.ignore_renamed_files {
            tracer.step(file, "renamed", "skipped");
        } else if file.status != FileStatus::Renamed {
            tracer.step(file, "renamed", "kept, not renamed");
        } else if file.is_pure_rename() {
            tracer.step(file, "renamed", "pure rename ignored");
            return Some(Exclusion::PureRename);
        } else {
            tracer.step(file, "renamed", "kept, content changed");
        }
        None
    }
}

/// Emits one line per classification step when a sink is attached.
pub struct Tracer<'a> {
    area: &'a str,
    sink: Option<&'a dyn TraceSink>,
}

impl<'a> Tracer<'a> {
    #[must_use]
    pub const fn new(area: &'a str, sink: Option<&'a dyn TraceSink>) -> Self {
        Self { area, sink }
    }

    #[must_use]
    pub const fn silent() -> Self {
        Self {
            area: "",
            sink: None,
        }
    }

    fn step(&self, file: &ChangedFile, step: &str, outcome: &str) {
        if let Some(sink) = self.sink {
            sink.trace(&format!("[{}] {}: {step}: {outcome}", self.area, file.path));
        }
    }
}

/// Classifies files against every area of a collection.
///
/// Areas are independent: a file may land in any number of them.
pub struct AreaClassifier<'t> {
    areas: Vec<(String, CompiledArea)>,
    trace: Option<&'t dyn TraceSink>,
}

impl<'t> AreaClassifier<'t> {
    /// Compile every area of the collection.
    ///
    /// # Errors
    /// Returns an error if any pattern is not a valid glob.
    pub fn new(collection: &RuleSetCollection) -> Result<Self> {
        let areas = collection
            .iter()
            .map(|(name, rules)| Ok((name.to_string(), CompiledArea::new(rules)?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { areas, trace: None })
    }

    #[must_use]
    pub fn with_trace(mut self, sink: &'t dyn TraceSink) -> Self {
        self.trace = Some(sink);
        self
    }

    /// Every area appears in the result, with an empty list if nothing matched.
    #[must_use]
    pub fn classify_all<'f>(&self, files: &'f [ChangedFile]) -> Classified<'f> {
        let mut classified: Classified<'f> = self
            .areas
            .iter()
            .map(|(name, _)| (name.clone(), Vec::new()))
            .collect();

        for file in files {
            for (name, area) in &self.areas {
                let tracer = Tracer::new(name, self.trace);
                if area.classify(file, &tracer).is_matched()
                    && let Some(matched) = classified.get_mut(name)
                {
                    matched.push(file);
                }
            }
        }

        for (name, matched) in &classified {
            if !matched.is_empty() {
                tracing::info!("[{name}] Matched {} file(s)", matched.len());
            }
        }
        classified
    }
}

/// Classify one file against one rule-set.
///
/// # Errors
/// Returns an error if a pattern in `rules` is not a valid glob.
pub fn classify(file: &ChangedFile, rules: &AreaRuleSet) -> Result<Classification> {
    Ok(CompiledArea::new(rules)?.classify(file, &Tracer::silent()))
}

/// Classify every file against every area.
///
/// # Errors
/// Returns an error if any pattern is not a valid glob.
pub fn classify_all<'f>(
    files: &'f [ChangedFile],
    collection: &RuleSetCollection,
    trace: Option<&dyn TraceSink>,
) -> Result<Classified<'f>> {
    let classifier = AreaClassifier::new(collection)?;
    let classifier = match trace {
        Some(sink) => classifier.with_trace(sink),
        None => classifier,
    };
    Ok(classifier.classify_all(files))
}

#[cfg(test)]
#[path = "classifier_tests/mod.rs"]
mod tests;
