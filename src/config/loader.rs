use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{ChangedAreasError, Result};

/// Configuration file used when neither a path nor inline text is given.
pub const DEFAULT_CONFIG_PATH: &str = ".github/changed-areas.yml";

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Get the current working directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }
}

/// Where the configuration document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Inline(String),
    File(PathBuf),
}

impl ConfigSource {
    /// Inline text wins over a path; with neither, the default path is used.
    #[must_use]
    pub fn resolve(inline: Option<String>, path: Option<PathBuf>) -> Self {
        match inline.filter(|text| !text.trim().is_empty()) {
            Some(text) => Self::Inline(text),
            None => Self::File(path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))),
        }
    }
}

impl Default for ConfigSource {
    fn default() -> Self {
        Self::File(PathBuf::from(DEFAULT_CONFIG_PATH))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Toml,
    Json,
}

impl DocumentFormat {
    /// Pick the format from a file extension; unknown extensions read as YAML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("toml") => Self::Toml,
            Some("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Parse configuration text into an order-preserving document.
///
/// # Errors
/// Returns a parse error for malformed text.
pub fn parse_document(text: &str, format: DocumentFormat) -> Result<Value> {
    let document = match format {
        DocumentFormat::Yaml => serde_yaml::from_str(text)?,
        DocumentFormat::Toml => toml::from_str(text)?,
        DocumentFormat::Json => serde_json::from_str(text)?,
    };
    Ok(document)
}

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load the raw configuration document.
    ///
    /// # Errors
    /// Returns an error if the source cannot be read or parsed.
    fn load(&self, source: &ConfigSource) -> Result<Value>;
}

/// Loads inline text or files through a [`FileSystem`].
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            return path.to_path_buf();
        }
        self.fs
            .current_dir()
            .map_or_else(|_| path.to_path_buf(), |dir| dir.join(path))
    }

    fn load_file(&self, path: &Path) -> Result<Value> {
        let resolved = self.resolve_path(path);
        tracing::info!("Loading configuration from file: {}", path.display());
        if !self.fs.exists(&resolved) {
            return Err(ChangedAreasError::ConfigNotFound(path.to_path_buf()));
        }
        let content =
            self.fs
                .read_to_string(&resolved)
                .map_err(|source| ChangedAreasError::FileRead {
                    path: path.to_path_buf(),
                    source,
                })?;
        parse_document(&content, DocumentFormat::from_path(path))
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self, source: &ConfigSource) -> Result<Value> {
        match source {
            ConfigSource::Inline(text) => {
                tracing::info!("Loading configuration from inline input");
                parse_document(text, DocumentFormat::Yaml)
            }
            ConfigSource::File(path) => self.load_file(path),
        }
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
