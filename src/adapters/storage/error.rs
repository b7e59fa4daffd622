//! Storage adapter errors.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised by the file-backed adapters.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("failed to serialize {path}: {message}")]
    SerializationFailed { path: PathBuf, message: String },

    #[error("failed to parse {path}: {message}")]
    DeserializationFailed { path: PathBuf, message: String },
}

impl StorageError {
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        StorageError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    pub fn serialization(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        StorageError::SerializationFailed {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub fn deserialization(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        StorageError::DeserializationFailed {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Path of the file the error refers to.
    pub fn path(&self) -> &PathBuf {
        match self {
            StorageError::Io { path, .. }
            | StorageError::SerializationFailed { path, .. }
            | StorageError::DeserializationFailed { path, .. } => path,
        }
    }
}

impl From<StorageError> for DomainError {
    fn from(err: StorageError) -> Self {
        let code = match &err {
            StorageError::Io { .. } => ErrorCode::StorageError,
            StorageError::SerializationFailed { .. } | StorageError::DeserializationFailed { .. } => {
                ErrorCode::SerializationError
            }
        };
        let path = err.path().display().to_string();
        DomainError::new(code, err.to_string()).with_detail("path", path)
    }
}
