//! Error types for the request boundary

use thiserror::Error;

use super::types::ErrorResponse;
use crate::import::ImportError;
use crate::validation::ValidationError;

/// Explanation returned when no strategy recognizes a table
pub const NO_TABLES_DETAIL: &str = "Could not parse any CREATE TABLE statements from the SQL file. Make sure the file contains valid MySQL or PostgreSQL table definitions.";

/// Broad failure class, for mapping onto a transport status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadRequest,
    PayloadTooLarge,
    ValidationFailed,
    Internal,
}

impl ErrorKind {
    /// Conventional HTTP status for this class
    pub fn status_code(self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::PayloadTooLarge => 413,
            ErrorKind::ValidationFailed => 422,
            ErrorKind::Internal => 500,
        }
    }
}

/// Errors returned by the boundary operations
///
/// The `Display` text is the short title placed in `ErrorResponse::error`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Invalid JSON")]
    InvalidJson(String),

    #[error("Empty file")]
    EmptyFile,

    #[error("File too large")]
    FileTooLarge { size: usize, max: usize },

    #[error("No tables found")]
    NoTablesFound,

    #[error("Missing table name")]
    MissingTableName,

    #[error("Missing mapping")]
    MissingMapping,

    #[error("Missing data")]
    MissingData,

    #[error("Data validation failed")]
    ValidationFailed(Vec<ValidationError>),

    #[error("Failed to generate SQL")]
    GenerationFailed,
}

/// Result type for boundary operations
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::FileTooLarge { .. } => ErrorKind::PayloadTooLarge,
            ApiError::ValidationFailed(_) => ErrorKind::ValidationFailed,
            ApiError::GenerationFailed => ErrorKind::Internal,
            _ => ErrorKind::BadRequest,
        }
    }

    /// Longer explanation for the `detail` field
    pub fn detail(&self) -> Option<String> {
        match self {
            ApiError::InvalidJson(reason) => Some(reason.clone()),
            ApiError::EmptyFile => Some("The uploaded file is empty".to_string()),
            ApiError::FileTooLarge { size, max } => Some(format!(
                "The uploaded file is {} bytes; the maximum is {} bytes",
                size, max
            )),
            ApiError::NoTablesFound => Some(NO_TABLES_DETAIL.to_string()),
            ApiError::MissingTableName => Some("The 'table' field is required".to_string()),
            ApiError::MissingMapping => {
                Some("At least one column mapping is required".to_string())
            }
            ApiError::MissingData => Some("At least one data row is required".to_string()),
            ApiError::ValidationFailed(_) => {
                Some("Some data does not match field constraints".to_string())
            }
            ApiError::GenerationFailed => None,
        }
    }

    /// Render as the wire error payload
    pub fn to_response(&self) -> ErrorResponse {
        let errors = match self {
            ApiError::ValidationFailed(errors) => errors.iter().map(ToString::to_string).collect(),
            _ => Vec::new(),
        };
        ErrorResponse {
            error: self.to_string(),
            detail: self.detail().unwrap_or_default(),
            errors,
        }
    }
}

impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::EmptyInput => ApiError::EmptyFile,
            ImportError::InputTooLarge { size, max } => ApiError::FileTooLarge { size, max },
            ImportError::NoTablesFound => ApiError::NoTablesFound,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InvalidJson(err.to_string())
    }
}
