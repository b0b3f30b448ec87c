//! Host shell errors.

use thiserror::Error;

/// Errors raised while talking to the host environment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("Selector is required")]
    MissingSelector,

    #[error("Polling interval must be positive")]
    InvalidInterval,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to load image {src}: {reason}")]
    ImageLoad { src: String, reason: String },
}

pub type Result<T> = std::result::Result<T, HostError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_selector_display() {
        assert_eq!(HostError::MissingSelector.to_string(), "Selector is required");
    }

    #[test]
    fn test_invalid_url_display() {
        let error = HostError::InvalidUrl("relative URL without a base".to_string());
        assert_eq!(error.to_string(), "Invalid URL: relative URL without a base");
    }

    #[test]
    fn test_image_load_display() {
        let error = HostError::ImageLoad {
            src: "logo.png".to_string(),
            reason: "not found".to_string(),
        };
        assert_eq!(error.to_string(), "Failed to load image logo.png: not found");
    }
}
