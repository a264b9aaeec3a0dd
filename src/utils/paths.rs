//! Path normalization

/// Use `/` separators so relative paths match configuration keys and globs.
pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
