//! Error types for kinfolk operations
//!
//! Every variant is a data-authoring mistake, unrecoverable at the point
//! of occurrence. Errors propagate straight to the caller; nothing is
//! retried or swallowed.

use thiserror::Error;

/// Main error type for kinfolk operations
#[derive(Error, Debug)]
pub enum KinfolkError {
    /// Malformed input document
    #[error("Parse error: {message}")]
    ParseError {
        /// What was wrong with the document
        message: String,
    },

    /// Ambiguous or missing constructor input
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// A required property was absent at render time
    #[error("Missing field: {field}")]
    MissingFieldError {
        /// Name of the absent property
        field: String,
    },

    /// The body template could not be resolved against the property map
    #[error("Template resolution error: {message}")]
    TemplateResolutionError {
        /// What failed to resolve
        message: String,
    },

    /// I/O failure while loading, exporting, or launching
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for kinfolk operations
pub type Result<T> = std::result::Result<T, KinfolkError>;
