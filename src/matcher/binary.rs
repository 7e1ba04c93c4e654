/// File-name suffixes treated as binary content.
pub const BINARY_EXTENSIONS: &[&str] = &[
    // Images
    ".png", ".jpg", ".jpeg", ".gif", ".webp", ".svg", ".ico", ".bmp", ".tiff",
    // Documents
    ".pdf", ".doc", ".docx", ".xls", ".xlsx", ".ppt", ".pptx",
    // Archives
    ".zip", ".tar", ".gz", ".bz2", ".7z", ".rar",
    // Executables
    ".exe", ".dll", ".so", ".dylib", ".app",
    // Compiled artifacts
    ".pyc", ".pyo", ".wasm", ".class", ".jar",
    // Fonts
    ".woff", ".woff2", ".ttf", ".eot", ".otf",
    // Media
    ".mp3", ".mp4", ".avi", ".mov", ".wav", ".flac",
    // Embedded databases and data blobs
    ".db", ".sqlite", ".dat",
];

/// Classify a path as binary by its trailing characters.
///
/// The check is case-insensitive and purely suffix based: no content is read,
/// and `archive.tar.gz` is binary because it ends in `.gz`.
#[must_use]
pub fn is_binary(path: &str) -> bool {
    let lower = path.to_lowercase();
    BINARY_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

#[cfg(test)]
#[path = "binary_tests.rs"]
mod tests;
