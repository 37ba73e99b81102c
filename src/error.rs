//! Domain-specific error types for vision-guide

use thiserror::Error;

use crate::generation::GenerationError;

/// Main error type for everything outside the analysis core.
///
/// The analysis itself is total and never produces one of these; they come
/// from configuration, the session store, and text generation.
#[derive(Error, Debug)]
pub enum VisionGuideError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Text generation error: {message}")]
    Generation { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<anyhow::Error> for VisionGuideError {
    fn from(err: anyhow::Error) -> Self {
        VisionGuideError::Internal {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for VisionGuideError {
    fn from(err: serde_json::Error) -> Self {
        VisionGuideError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for VisionGuideError {
    fn from(err: std::io::Error) -> Self {
        VisionGuideError::Storage {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for VisionGuideError {
    fn from(err: toml::de::Error) -> Self {
        VisionGuideError::Config {
            message: format!("Invalid config file: {}", err),
        }
    }
}

impl From<GenerationError> for VisionGuideError {
    fn from(err: GenerationError) -> Self {
        VisionGuideError::Generation {
            message: err.to_string(),
        }
    }
}

/// Result type alias for vision-guide operations
pub type Result<T> = std::result::Result<T, VisionGuideError>;
