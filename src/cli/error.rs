//! CLI error types

use std::path::PathBuf;
use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read {0}: {1}")]
    FileReadError(PathBuf, String),

    #[error("Failed to write {0}: {1}")]
    FileWriteError(PathBuf, String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("{0}")]
    ApiError(#[from] ApiError),

    #[error("{0} row constraint violation(s)")]
    InvalidData(usize),
}
