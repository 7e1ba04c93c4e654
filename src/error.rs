use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChangedAreasError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration validation failed with {errors} error(s)")]
    Validation { errors: usize },

    #[error("Strict validation failed: {warnings} warning(s) found")]
    StrictValidation { warnings: usize },

    #[error("Invalid change list: {0}")]
    ChangeList(String),

    #[error("Force push detected and force push strategy is set to \"fail\"")]
    ForcePushRejected,
}

impl ChangedAreasError {
    /// Short category name used as the heading of rendered errors.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::ConfigNotFound(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::InvalidPattern { .. } => "InvalidPattern",
            Self::Io(_) => "IO",
            Self::YamlParse(_) | Self::TomlParse(_) | Self::Json(_) => "Parse",
            Self::Validation { .. } | Self::StrictValidation { .. } => "Validation",
            Self::ChangeList(_) => "ChangeList",
            Self::ForcePushRejected => "ForcePush",
        }
    }

    /// The primary message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) | Self::ChangeList(msg) => msg.clone(),
            Self::ConfigNotFound(path) | Self::FileRead { path, .. } => {
                path.display().to_string()
            }
            Self::InvalidPattern { pattern, source } => format!("{pattern}: {source}"),
            Self::Io(e) => e.to_string(),
            Self::YamlParse(e) => e.to_string(),
            Self::TomlParse(e) => e.message().to_string(),
            Self::Json(e) => e.to_string(),
            Self::Validation { .. } | Self::StrictValidation { .. } | Self::ForcePushRejected => {
                self.to_string()
            }
        }
    }

    /// Underlying cause, when there is one.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } => Some(source.to_string()),
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    /// Actionable hint for the user.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::ConfigNotFound(_) => Some(
                "Create the configuration file or provide it inline with --config-inline",
            ),
            Self::InvalidPattern { .. } => {
                Some("Check the glob pattern syntax (unclosed '[' or '{' are common mistakes)")
            }
            Self::StrictValidation { .. } => {
                Some("Fix the reported warnings or run without --strict")
            }
            Self::ForcePushRejected => Some(
                "Use --force-push-strategy compare-default-branch or all-files to handle force pushes",
            ),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ChangedAreasError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
