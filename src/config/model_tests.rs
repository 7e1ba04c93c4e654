use serde_json::json;

use super::*;

#[test]
fn area_defaults_are_permissive() {
    let rules: AreaRuleSet = serde_json::from_value(json!({"include": ["src/**"]})).unwrap();

    assert_eq!(rules.include, vec!["src/**"]);
    assert!(rules.exclude.is_empty());
    assert!(rules.required_extensions.is_empty());
    assert_eq!(rules.min_changed_files, None);
    assert!(!rules.exclude_binary_files);
    assert!(!rules.ignore_deleted_files);
    assert!(!rules.ignore_renamed_files);
}

#[test]
fn new_builds_include_list() {
    let rules = AreaRuleSet::new(["src/**", "lib/**"]);
    assert_eq!(rules.include, vec!["src/**", "lib/**"]);
    assert_eq!(rules, AreaRuleSet {
        include: vec!["src/**".to_string(), "lib/**".to_string()],
        ..AreaRuleSet::default()
    });
}

#[test]
fn from_document_keeps_declaration_order() {
    let document = json!({
        "areas": {
            "zeta": {"include": ["z/**"]},
            "alpha": {"include": ["a/**"]},
            "mid": {"include": ["m/**"]}
        }
    });

    let collection = RuleSetCollection::from_document(&document).unwrap();

    let names: Vec<_> = collection.names().collect();
    assert_eq!(names, ["zeta", "alpha", "mid"]);
}

#[test]
fn from_document_folds_flat_files_form() {
    let document = json!({"files": {"include": ["docs/**"], "min_changed_files": 2}});

    let collection = RuleSetCollection::from_document(&document).unwrap();

    assert_eq!(collection.len(), 1);
    let rules = collection.get(DEFAULT_AREA).unwrap();
    assert_eq!(rules.include, vec!["docs/**"]);
    assert_eq!(rules.min_changed_files, Some(2));
}

#[test]
fn integral_float_threshold_is_whole_number() {
    let document = json!({"areas": {"docs": {"include": ["docs/**"], "min_changed_files": 2.0}}});

    let collection = RuleSetCollection::from_document(&document).unwrap();

    assert_eq!(collection.get("docs").unwrap().min_changed_files, Some(2));
}

#[test]
fn fractional_threshold_is_rejected() {
    let document = json!({"areas": {"docs": {"include": ["docs/**"], "min_changed_files": 2.5}}});
    let err = RuleSetCollection::from_document(&document).unwrap_err();
    assert!(err.to_string().contains("whole number"));
}

#[test]
fn from_document_combines_areas_and_files() {
    let document = json!({
        "areas": {"backend": {"include": ["api/**"]}},
        "files": {"include": ["**"]}
    });

    let collection = RuleSetCollection::from_document(&document).unwrap();

    let names: Vec<_> = collection.names().collect();
    assert_eq!(names, ["backend", DEFAULT_AREA]);
}

#[test]
fn from_document_rejects_reserved_name() {
    let document: Value = serde_json::from_str(&format!(
        r#"{{"areas": {{"{DEFAULT_AREA}": {{"include": ["**"]}}}}}}"#
    ))
    .unwrap();
    let err = RuleSetCollection::from_document(&document).unwrap_err();
    assert!(err.to_string().contains("reserved"));
}

#[test]
fn from_document_requires_rule_sets() {
    let err = RuleSetCollection::from_document(&json!({})).unwrap_err();
    assert!(err.to_string().contains("\"areas\" or \"files\""));

    let err = RuleSetCollection::from_document(&json!({"areas": {}})).unwrap_err();
    assert!(err.to_string().contains("\"areas\" or \"files\""));
}

#[test]
fn from_document_reports_area_shape_errors() {
    let document = json!({"areas": {"backend": {"include": "src/**"}}});
    let err = RuleSetCollection::from_document(&document).unwrap_err();
    assert!(err.to_string().contains("Area \"backend\""));
}

#[test]
fn to_document_round_trips_default_area() {
    let mut collection = RuleSetCollection::new();
    collection.insert("web", AreaRuleSet::new(["web/**"]));
    collection.insert(DEFAULT_AREA, AreaRuleSet::new(["**"]));

    let document = collection.to_document().unwrap();

    assert_eq!(
        document,
        json!({"files": {"include": ["**"]}, "areas": {"web": {"include": ["web/**"]}}})
    );
    assert_eq!(RuleSetCollection::from_document(&document).unwrap(), collection);
}

#[test]
fn typed_collection_validation_flags_zero_threshold() {
    let mut rules = AreaRuleSet::new(["src/**"]);
    rules.min_changed_files = Some(0);
    let collection: RuleSetCollection = [("backend".to_string(), rules)].into_iter().collect();

    let report = collection.validate().unwrap();

    assert!(!report.is_valid());
    assert_eq!(report.errors[0].field.as_deref(), Some("min_changed_files"));
}
