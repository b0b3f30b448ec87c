use thiserror::Error;

/// Reasons a path lookup could not even start.
///
/// Only [`resolve_detailed`](super::resolve_detailed) surfaces these; the
/// permissive [`resolve`](super::resolve) folds them into `None`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    #[error("Path expression is empty")]
    EmptyPath,
    #[error("Root value is null")]
    NullRoot,
}

/// Result type for path operations.
pub type Result<T> = std::result::Result<T, PathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_display() {
        assert_eq!(PathError::EmptyPath.to_string(), "Path expression is empty");
    }

    #[test]
    fn test_null_root_display() {
        assert_eq!(PathError::NullRoot.to_string(), "Root value is null");
    }
}
