//! Static validation of a configuration document.
//!
//! Three independent passes (schema, logic, patterns) walk the same raw
//! document and each collects its own findings. Nothing short-circuits: a
//! single call reports every problem. Errors make the document unusable;
//! warnings are advisory unless the caller runs in strict mode.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{ChangedAreasError, Result};
use crate::matcher::build_glob;

use super::model::{DEFAULT_AREA, MAX_EXACT_FLOAT};

const BOOLEAN_FLAGS: &[&str] = &[
    "exclude_binary_files",
    "ignore_deleted_files",
    "ignore_renamed_files",
];

const KNOWN_FIELDS: &[&str] = &[
    "include",
    "exclude",
    "required_extensions",
    "min_changed_files",
    "exclude_binary_files",
    "ignore_deleted_files",
    "ignore_renamed_files",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// One validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Area key, `None` for document-level findings.
    pub area: Option<String>,
    pub field: Option<String>,
    pub message: String,
    /// Suggested fix for errors, recommendation for warnings.
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Turn the report into a pass/fail decision.
    ///
    /// # Errors
    /// Returns [`ChangedAreasError::Validation`] when there are errors, or
    /// [`ChangedAreasError::StrictValidation`] when `strict` is set and
    /// there are warnings.
    pub fn ensure_valid(&self, strict: bool) -> Result<()> {
        if !self.is_valid() {
            return Err(ChangedAreasError::Validation {
                errors: self.errors.len(),
            });
        }
        if strict && self.has_warnings() {
            return Err(ChangedAreasError::StrictValidation {
                warnings: self.warnings.len(),
            });
        }
        Ok(())
    }

    fn merge(&mut self, pass: Self) {
        self.errors.extend(pass.errors);
        self.warnings.extend(pass.warnings);
    }

    fn error(&mut self, area: Option<&str>, field: Option<&str>, message: String) {
        self.push_error(area, field, message, None);
    }

    fn error_with_fix(
        &mut self,
        area: Option<&str>,
        field: Option<&str>,
        message: String,
        fix: &str,
    ) {
        self.push_error(area, field, message, Some(fix));
    }

    fn push_error(
        &mut self,
        area: Option<&str>,
        field: Option<&str>,
        message: String,
        fix: Option<&str>,
    ) {
        self.errors.push(Diagnostic {
            severity: Severity::Error,
            area: area.map(str::to_string),
            field: field.map(str::to_string),
            message,
            hint: fix.map(str::to_string),
        });
    }

    fn warning(&mut self, area: &str, field: Option<&str>, message: String, recommendation: &str) {
        self.warnings.push(Diagnostic {
            severity: Severity::Warning,
            area: Some(area.to_string()),
            field: field.map(str::to_string),
            message,
            hint: Some(recommendation.to_string()),
        });
    }
}

/// Validate a raw configuration document.
#[must_use]
pub fn validate(document: &Value) -> ValidationReport {
    let areas = area_entries(document);

    let mut report = ValidationReport::default();
    report.merge(schema_pass(document, &areas));
    report.merge(logic_pass(&areas));
    report.merge(pattern_pass(&areas));
    report
}

/// Every rule-set in the document, keyed as it will be in the collection.
fn area_entries(document: &Value) -> Vec<(&str, &Value)> {
    let mut entries = Vec::new();
    if let Some(areas) = document.get("areas").and_then(Value::as_object) {
        entries.extend(areas.iter().map(|(name, value)| (name.as_str(), value)));
    }
    if let Some(files) = document.get("files") {
        entries.push((DEFAULT_AREA, files));
    }
    entries
}

// ---------------------------------------------------------------------------
// Schema pass
// ---------------------------------------------------------------------------

fn schema_pass(document: &Value, areas: &[(&str, &Value)]) -> ValidationReport {
    let mut report = ValidationReport::default();

    let Some(root) = document.as_object() else {
        report.error(
            None,
            None,
            "Configuration must be a mapping with \"areas\" or \"files\"".to_string(),
        );
        return report;
    };

    check_top_level(&mut report, root);

    for &(name, value) in areas {
        check_area(&mut report, name, value);
    }
    report
}

fn check_top_level(report: &mut ValidationReport, root: &Map<String, Value>) {
    let areas = root.get("areas");
    let files = root.get("files");

    if areas.is_none() && files.is_none() {
        report.error(
            None,
            Some("areas"),
            "Configuration must contain at least one of: \"areas\" or \"files\"".to_string(),
        );
        return;
    }

    if let Some(areas) = areas {
        match areas.as_object() {
            None => report.error(None, Some("areas"), "\"areas\" must be a mapping".to_string()),
            Some(map) if map.is_empty() => report.error(
                None,
                Some("areas"),
                "At least one area must be defined".to_string(),
            ),
            Some(map) if map.contains_key(DEFAULT_AREA) => report.error_with_fix(
                Some(DEFAULT_AREA),
                None,
                format!("Area name \"{DEFAULT_AREA}\" is reserved"),
                "Rename the area, or use the top-level \"files\" key for a single rule-set",
            ),
            Some(_) => {}
        }
    }
}

fn check_area(report: &mut ValidationReport, name: &str, value: &Value) {
    let area = Some(name);

    if name.trim().is_empty() {
        report.error(area, None, "Area names cannot be empty".to_string());
    } else if name.chars().any(char::is_whitespace) {
        report.error_with_fix(
            area,
            None,
            "Area names cannot contain spaces".to_string(),
            "Use hyphens or underscores: \"backend-api\" or \"backend_api\"",
        );
    }

    let Some(fields) = value.as_object() else {
        report.error(
            area,
            None,
            "Area configuration must be a mapping of rule fields".to_string(),
        );
        return;
    };

    check_include(report, name, fields.get("include"));
    if let Some(exclude) = fields.get("exclude") {
        check_string_array(report, name, "exclude", exclude);
    }
    if let Some(extensions) = fields.get("required_extensions") {
        check_extensions(report, name, extensions);
    }
    if let Some(min) = fields.get("min_changed_files") {
        check_min_changed_files(report, name, min);
    }
    for flag in BOOLEAN_FLAGS {
        if let Some(value) = fields.get(*flag)
            && !value.is_boolean()
        {
            report.error(area, Some(*flag), format!("\"{flag}\" must be true or false"));
        }
    }
    for key in fields.keys() {
        if !KNOWN_FIELDS.contains(&key.as_str()) {
            report.warning(
                name,
                Some(key.as_str()),
                format!("Unknown field \"{key}\" is ignored"),
                "Check the spelling; valid fields are include, exclude, required_extensions, min_changed_files, exclude_binary_files, ignore_deleted_files, ignore_renamed_files",
            );
        }
    }
}

fn check_include(report: &mut ValidationReport, name: &str, include: Option<&Value>) {
    let area = Some(name);
    match include {
        None | Some(Value::Null) => report.error_with_fix(
            area,
            Some("include"),
            "Missing required \"include\" field".to_string(),
            "Add a pattern like \"src/**\" to define what files belong to this area",
        ),
        Some(Value::Array(patterns)) if patterns.is_empty() => report.error_with_fix(
            area,
            Some("include"),
            "At least one include pattern is required".to_string(),
            "Add a pattern like \"src/**\" to define what files belong to this area",
        ),
        Some(value) => check_string_array(report, name, "include", value),
    }
}

fn check_string_array(report: &mut ValidationReport, name: &str, field: &str, value: &Value) {
    let is_string_array = value
        .as_array()
        .is_some_and(|items| items.iter().all(Value::is_string));
    if !is_string_array {
        report.error(
            Some(name),
            Some(field),
            format!("\"{field}\" must be an array of strings"),
        );
    }
}

fn check_extensions(report: &mut ValidationReport, name: &str, value: &Value) {
    check_string_array(report, name, "required_extensions", value);
    for ext in value.as_array().into_iter().flatten().filter_map(Value::as_str) {
        if !ext.starts_with('.') {
            report.warning(
                name,
                Some("required_extensions"),
                format!("Extension \"{ext}\" should start with a dot (e.g., \".ts\")"),
                &format!("Use \".{ext}\" instead of \"{ext}\""),
            );
        }
    }
}

fn check_min_changed_files(report: &mut ValidationReport, name: &str, value: &Value) {
    let area = Some(name);
    let field = Some("min_changed_files");
    let Value::Number(number) = value else {
        report.error(area, field, "\"min_changed_files\" must be a number".to_string());
        return;
    };

    let message = if let Some(n) = number.as_i64() {
        (n < 1).then_some("\"min_changed_files\" must be >= 1")
    } else if number.as_u64().is_some() {
        None
    } else if number.as_f64().is_some_and(|n| n < 1.0) {
        Some("\"min_changed_files\" must be >= 1")
    } else if number
        .as_f64()
        .is_some_and(|n| n.fract() == 0.0 && n <= MAX_EXACT_FLOAT)
    {
        None
    } else {
        Some("\"min_changed_files\" must be a whole number")
    };
    if let Some(message) = message {
        report.error(area, field, message.to_string());
    }
}

// ---------------------------------------------------------------------------
// Logic pass
// ---------------------------------------------------------------------------

fn logic_pass(areas: &[(&str, &Value)]) -> ValidationReport {
    let mut report = ValidationReport::default();

    for &(name, value) in areas {
        let include = value.get("include").and_then(Value::as_array);
        let include_patterns = string_items(value, "include");
        let exclude_patterns = string_items(value, "exclude");

        if !exclude_patterns.is_empty() && include.is_some_and(Vec::is_empty) {
            report.error_with_fix(
                Some(name),
                None,
                "Area has exclude patterns but no include patterns".to_string(),
                "Add at least one include pattern to define what this area matches",
            );
        }

        let mut reported: Vec<&str> = Vec::new();
        for &pattern in &include_patterns {
            if exclude_patterns.contains(&pattern) && !reported.contains(&pattern) {
                reported.push(pattern);
                report.warning(
                    name,
                    None,
                    format!("Pattern \"{pattern}\" appears in both include and exclude"),
                    "This pattern will never match. Remove it from one of the lists.",
                );
            }
        }
    }
    report
}

// ---------------------------------------------------------------------------
// Pattern pass
// ---------------------------------------------------------------------------

fn pattern_pass(areas: &[(&str, &Value)]) -> ValidationReport {
    let mut report = ValidationReport::default();

    for &(name, value) in areas {
        for field in ["include", "exclude"] {
            for pattern in string_items(value, field) {
                check_pattern(&mut report, name, field, pattern);
            }
        }
    }
    report
}

fn check_pattern(report: &mut ValidationReport, name: &str, field: &str, pattern: &str) {
    if pattern.is_empty() {
        report.error(
            Some(name),
            Some(field),
            "Patterns cannot be empty".to_string(),
        );
        return;
    }

    if pattern.starts_with('/') {
        report.warning(
            name,
            Some(field),
            format!("Pattern \"{pattern}\" is an absolute path"),
            "Use relative paths like \"src/**\" instead",
        );
    }

    if pattern.contains('\\') {
        report.warning(
            name,
            Some(field),
            format!("Pattern \"{pattern}\" contains backslashes"),
            "Use forward slashes for cross-platform compatibility",
        );
    }

    if let Err(e) = build_glob(pattern) {
        report.error(
            Some(name),
            Some(field),
            format!("Invalid glob pattern \"{pattern}\": {}", e.kind()),
        );
    }

    if pattern.contains("//") {
        report.error(
            Some(name),
            Some(field),
            format!("Pattern \"{pattern}\" contains multiple consecutive slashes"),
        );
    }

    if pattern == "*" || pattern == "**" {
        report.warning(
            name,
            Some(field),
            format!("Pattern \"{pattern}\" matches all files"),
            "Consider being more specific to improve performance",
        );
    }
}

/// String entries of an array field; anything else is skipped here and
/// reported by the schema pass.
fn string_items<'a>(area: &'a Value, field: &str) -> Vec<&'a str> {
    area.get(field)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .collect()
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
