//! Error types for Folio

use thiserror::Error;

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// The typewriter was given no phrases to cycle through
    #[error("Role list is empty")]
    EmptyRoleList,

    /// A contact form field was left blank
    #[error("Please complete all fields.")]
    IncompleteForm,

    /// Site configuration could not be parsed
    #[error("Config error: {0}")]
    Config(String),

    /// Preference storage rejected a read or write
    #[error("Storage error: {0}")]
    Storage(String),

    /// No project details exist for the requested id
    #[error("Unknown project: {0}")]
    UnknownProject(String),
}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        FolioError::Config(err.to_string())
    }
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;
