use serde_json::json;

use crate::config::{DEFAULT_AREA, validate};

use super::*;

fn render(report: &ValidationReport) -> String {
    ReportFormatter::new(ColorMode::Never).format(report)
}

#[test]
fn valid_report_prints_summary_only() {
    let output = render(&ValidationReport::default());
    assert_eq!(output, "✓ Configuration valid: 0 error(s), 0 warning(s)\n");
}

#[test]
fn errors_carry_location_field_and_fix() {
    let report = ValidationReport {
        errors: vec![Diagnostic {
            severity: Severity::Error,
            area: Some("backend".to_string()),
            field: Some("min_changed_files".to_string()),
            message: "must be at least 1".to_string(),
            hint: Some("Remove the field or set it to 1 or more".to_string()),
        }],
        warnings: Vec::new(),
    };

    let output = render(&report);

    assert!(output.starts_with(
        "error: [backend] min_changed_files: must be at least 1\n  Fix: Remove the field or set it to 1 or more\n"
    ));
    assert!(output.ends_with("✗ Configuration invalid: 1 error(s), 0 warning(s)\n"));
}

#[test]
fn document_level_findings_use_config_location() {
    let report = ValidationReport {
        errors: vec![Diagnostic {
            severity: Severity::Error,
            area: None,
            field: None,
            message: "Configuration must be a mapping".to_string(),
            hint: None,
        }],
        warnings: Vec::new(),
    };

    let output = render(&report);

    assert!(output.starts_with("error: [config] Configuration must be a mapping\n\n"));
    assert!(!output.contains("Fix:"));
}

#[test]
fn warnings_carry_recommendation() {
    let report = validate(&json!({ "areas": { "everything": { "include": ["**"] } } }));

    let output = render(&report);

    assert!(output.contains("warning: [everything] "));
    assert!(output.contains("  Recommendation: "));
    assert!(output.contains("✓ Configuration valid: 0 error(s), 1 warning(s)"));
}

#[test]
fn default_area_shown_as_files() {
    let report = validate(&json!({ "files": { "include": [] , "exclude": ["a/**"] } }));

    let output = render(&report);

    assert!(output.contains("[files]"));
    assert!(!output.contains(DEFAULT_AREA));
}

#[test]
fn errors_listed_before_warnings() {
    let report = validate(&json!({
        "areas": {
            "wide": { "include": ["*"] },
            "broken": { "include": ["src/[a"] }
        }
    }));

    let output = render(&report);

    let error = output.find("error:").unwrap();
    let warning = output.find("warning:").unwrap();
    assert!(error < warning);
}

#[test]
fn auto_colors_follow_target_stream() {
    let report = validate(&json!({"areas": {"a": {"include": []}}}));

    let on_terminal = ReportFormatter::for_stream(ColorMode::Always, false).format(&report);
    assert!(on_terminal.contains("\x1b["));

    let piped = ReportFormatter::for_stream(ColorMode::Auto, false).format(&report);
    assert!(!piped.contains("\x1b["));

    let forced_off = ReportFormatter::for_stream(ColorMode::Never, true).format(&report);
    assert!(!forced_off.contains("\x1b["));
}

#[test]
fn stderr_report_is_plain_when_colors_disabled() {
    let report = validate(&json!({"areas": {"a": {"include": ["**"]}}}));
    let output = ReportFormatter::stderr(ColorMode::Never).format(&report);
    assert!(output.starts_with("warning: [a] include:"));
}
