mod binary;
mod pattern;

pub use binary::{BINARY_EXTENSIONS, is_binary};
pub use pattern::{PatternSet, build_glob, matches};
