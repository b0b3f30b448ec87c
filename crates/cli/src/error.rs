//! CLI error types.

use nice_utils_core::path::PathError;
use nice_utils_core::url::UrlError;
use nice_utils_host::HostError;
use thiserror::Error;

/// Result type alias for the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while running a command.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Nothing found at path: {path}")]
    NotFound { path: String },

    #[error("Invalid path: {0}")]
    Path(#[from] PathError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("Host error: {0}")]
    Host(#[from] HostError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
