use std::collections::HashMap;
use std::io::{Error, ErrorKind};

use serde_json::json;

use super::*;

struct MockFileSystem {
    files: HashMap<PathBuf, String>,
    current_dir: PathBuf,
}

impl MockFileSystem {
    fn new() -> Self {
        Self {
            files: HashMap::new(),
            current_dir: PathBuf::from("/repo"),
        }
    }

    fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.current_dir.clone())
    }
}

const YAML_CONFIG: &str = "\
areas:
  backend:
    include:
      - 'src/backend/**'
    min_changed_files: 2
  docs:
    include: ['docs/**']
";

#[test]
fn resolve_prefers_inline_text() {
    let source = ConfigSource::resolve(
        Some("files: {include: ['**']}".to_string()),
        Some(PathBuf::from("custom.yml")),
    );
    assert!(matches!(source, ConfigSource::Inline(_)));
}

#[test]
fn resolve_ignores_blank_inline_text() {
    let source = ConfigSource::resolve(Some("  \n".to_string()), None);
    assert_eq!(source, ConfigSource::File(PathBuf::from(DEFAULT_CONFIG_PATH)));
}

#[test]
fn resolve_uses_given_path() {
    let source = ConfigSource::resolve(None, Some(PathBuf::from("areas.toml")));
    assert_eq!(source, ConfigSource::File(PathBuf::from("areas.toml")));
}

#[test]
fn format_from_extension() {
    assert_eq!(DocumentFormat::from_path(Path::new("a.yml")), DocumentFormat::Yaml);
    assert_eq!(DocumentFormat::from_path(Path::new("a.YAML")), DocumentFormat::Yaml);
    assert_eq!(DocumentFormat::from_path(Path::new("a.toml")), DocumentFormat::Toml);
    assert_eq!(DocumentFormat::from_path(Path::new("a.json")), DocumentFormat::Json);
    assert_eq!(DocumentFormat::from_path(Path::new("areas")), DocumentFormat::Yaml);
}

#[test]
fn loads_default_yaml_file() {
    let fs = MockFileSystem::new().with_file("/repo/.github/changed-areas.yml", YAML_CONFIG);
    let loader = FileConfigLoader::with_fs(fs);

    let document = loader.load(&ConfigSource::default()).unwrap();

    assert_eq!(document["areas"]["backend"]["min_changed_files"], json!(2));
    let names: Vec<_> = document["areas"].as_object().unwrap().keys().collect();
    assert_eq!(names, ["backend", "docs"]);
}

#[test]
fn loads_toml_file() {
    let fs = MockFileSystem::new().with_file(
        "/repo/areas.toml",
        "[areas.web]\ninclude = [\"web/**\"]\nexclude_binary_files = true\n",
    );
    let loader = FileConfigLoader::with_fs(fs);

    let document = loader
        .load(&ConfigSource::File(PathBuf::from("areas.toml")))
        .unwrap();

    assert_eq!(
        document,
        json!({"areas": {"web": {"include": ["web/**"], "exclude_binary_files": true}}})
    );
}

#[test]
fn loads_json_file_by_absolute_path() {
    let fs = MockFileSystem::new().with_file("/etc/areas.json", r#"{"files": {"include": ["**"]}}"#);
    let loader = FileConfigLoader::with_fs(fs);

    let document = loader
        .load(&ConfigSource::File(PathBuf::from("/etc/areas.json")))
        .unwrap();

    assert_eq!(document, json!({"files": {"include": ["**"]}}));
}

#[test]
fn loads_inline_yaml() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let document = loader
        .load(&ConfigSource::Inline("files:\n  include: ['src/**']\n".to_string()))
        .unwrap();

    assert_eq!(document, json!({"files": {"include": ["src/**"]}}));
}

#[test]
fn inline_json_is_accepted() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let document = loader
        .load(&ConfigSource::Inline(r#"{"areas": {"a": {"include": ["a/**"]}}}"#.to_string()))
        .unwrap();
    assert_eq!(document["areas"]["a"]["include"], json!(["a/**"]));
}

#[test]
fn missing_file_is_not_found_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let err = loader.load(&ConfigSource::default()).unwrap_err();

    assert!(matches!(err, ChangedAreasError::ConfigNotFound(_)));
    assert!(err.to_string().contains(DEFAULT_CONFIG_PATH));
}

#[test]
fn malformed_yaml_is_parse_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let err = loader
        .load(&ConfigSource::Inline("areas: [unclosed".to_string()))
        .unwrap_err();
    assert!(matches!(err, ChangedAreasError::YamlParse(_)));
}

#[test]
fn malformed_toml_is_parse_error() {
    let fs = MockFileSystem::new().with_file("/repo/bad.toml", "invalid [[[ toml");
    let loader = FileConfigLoader::with_fs(fs);
    let err = loader
        .load(&ConfigSource::File(PathBuf::from("bad.toml")))
        .unwrap_err();
    assert!(matches!(err, ChangedAreasError::TomlParse(_)));
}
