use thiserror::Error;

/// Errors that can occur while decoding URL components.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UrlError {
    #[error("Invalid URL encoding: {0}")]
    InvalidEncoding(String),
}

/// Result type for URL operations.
pub type Result<T> = std::result::Result<T, UrlError>;
