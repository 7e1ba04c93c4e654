mod loader;
mod model;
mod validation;

pub use loader::{
    ConfigLoader, ConfigSource, DEFAULT_CONFIG_PATH, DocumentFormat, FileConfigLoader, FileSystem,
    RealFileSystem, parse_document,
};
pub use model::{AreaRuleSet, DEFAULT_AREA, RuleSetCollection};
pub use validation::{Diagnostic, Severity, ValidationReport, validate};
