//! Error types for the geo-tools library

use std::io;
use thiserror::Error;

/// Main error type for GEO file operations
#[derive(Debug, Error)]
pub enum GeoError {
    /// IO error occurred during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error parsing GEO text; `line` is the 1-based input line of the violation
    #[error("ERROR in line {line}: {message}")]
    Format { line: usize, message: String },
}

impl GeoError {
    /// Create a format error at the given input line
    pub fn format(line: usize, message: impl Into<String>) -> Self {
        GeoError::Format {
            line,
            message: message.into(),
        }
    }

    /// Input line of a format error, if this is one
    pub fn line(&self) -> Option<usize> {
        match self {
            GeoError::Format { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Result type alias for geo-tools operations
pub type Result<T> = std::result::Result<T, GeoError>;
