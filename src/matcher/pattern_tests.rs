use super::*;

fn set(patterns: &[&str]) -> PatternSet {
    let patterns: Vec<String> = patterns.iter().map(|p| (*p).to_string()).collect();
    PatternSet::new(&patterns).unwrap()
}

#[test]
fn double_star_matches_nested_paths() {
    assert!(matches("src/backend/api.ts", "src/backend/**"));
    assert!(matches("src/backend/v1/handlers/user.ts", "src/backend/**"));
    assert!(!matches("src/frontend/app.tsx", "src/backend/**"));
}

#[test]
fn single_star_stops_at_separator() {
    assert!(matches("README.md", "*.md"));
    assert!(!matches("docs/guide.md", "*.md"));
    assert!(matches("docs/guide.md", "docs/*.md"));
}

#[test]
fn leading_double_star_matches_any_depth() {
    assert!(matches("src/backend/api.test.ts", "**/*.test.ts"));
    assert!(matches("api.test.ts", "**/*.test.ts"));
    assert!(!matches("src/backend/api.ts", "**/*.test.ts"));
}

#[test]
fn dotfiles_are_matched_by_wildcards() {
    assert!(matches("src/.env", "src/**"));
    assert!(matches(".github/workflows/ci.yml", "**/*.yml"));
    assert!(matches(".eslintrc", "*"));
}

#[test]
fn question_mark_and_classes() {
    assert!(matches("src/a1.ts", "src/a?.ts"));
    assert!(!matches("src/a12.ts", "src/a?.ts"));
    assert!(matches("src/b.ts", "src/[abc].ts"));
    assert!(!matches("src/d.ts", "src/[abc].ts"));
}

#[test]
fn matching_is_case_sensitive() {
    assert!(!matches("SRC/main.rs", "src/**"));
    assert!(!matches("src/Main.RS", "src/*.rs"));
}

#[test]
fn malformed_pattern_never_matches() {
    assert!(!matches("src/[abc", "src/[abc"));
    assert!(build_glob("src/[abc").is_err());
}

#[test]
fn pattern_set_reports_first_declared_match() {
    let patterns = set(&["docs/**", "**/*.md", "*.md"]);

    assert_eq!(patterns.first_match("README.md"), Some("**/*.md"));
    assert_eq!(patterns.first_match("docs/intro.md"), Some("docs/**"));
    assert_eq!(patterns.first_match("src/lib.rs"), None);
}

#[test]
fn pattern_set_rejects_invalid_glob() {
    let err = PatternSet::new(&["src/{a,b".to_string()]).unwrap_err();
    assert!(err.to_string().contains("src/{a,b"));
}

#[test]
fn empty_pattern_set_matches_nothing() {
    let patterns = set(&[]);
    assert!(patterns.is_empty());
    assert!(!patterns.is_match("anything"));
    assert_eq!(patterns.first_match("anything"), None);
}
