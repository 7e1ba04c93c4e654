#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the changed-areas binary.
#[macro_export]
macro_rules! changed_areas {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("changed-areas"))
    };
}

/// Two areas plus a typed area with constraints.
pub const AREAS_CONFIG: &str = r"areas:
  backend:
    include:
      - 'src/backend/**'
    exclude:
      - '**/*.test.ts'
  frontend:
    include:
      - 'src/frontend/**'
    required_extensions:
      - '.ts'
      - '.tsx'
  docs:
    include:
      - 'docs/**'
    min_changed_files: 2
";

/// A single flat rule-set.
pub const FLAT_CONFIG: &str = r"files:
  include:
    - 'src/**'
  exclude_binary_files: true
";

/// Accumulates one error per area plus an overbroad warning.
pub const INVALID_CONFIG: &str = r"areas:
  broken:
    include:
      - 'src/[a'
  empty:
    include: []
    exclude:
      - 'x/**'
  wide:
    include:
      - '**'
";

/// Valid, but with a warning.
pub const WARNING_CONFIG: &str = r"areas:
  everything:
    include:
      - '*'
";

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes the configuration at the default location.
    pub fn create_config(&self, content: &str) {
        self.create_file(".github/changed-areas.yml", content);
    }

    /// Writes a newline-separated change list and returns its path.
    pub fn create_changes(&self, paths: &[&str]) -> PathBuf {
        let mut content = paths.join("\n");
        content.push('\n');
        self.create_file("changes.txt", &content)
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}
