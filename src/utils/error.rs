//! Error types for the logo optimizer.
//!
//! Provides a hierarchy of error types using `thiserror` for ergonomic error handling.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Validation errors for input tasks and settings.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Path-related validation error
    #[error("Path error: {0}")]
    Path(#[from] PathError),
    /// Invalid settings error
    #[error("Settings error: {0}")]
    Settings(String),
}

/// File path errors.
#[derive(Error, Debug)]
pub enum PathError {
    /// File does not exist
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    /// Path exists but is not a file
    #[error("Not a file: {0}")]
    NotFile(PathBuf),
    /// Path does not carry a .png extension
    #[error("Not a PNG file: {0}")]
    NotPng(PathBuf),
    /// IO error accessing the path
    #[error("IO error: {0}")]
    IO(String),
}

/// Main error type for the optimizer.
///
/// All errors in the application are converted to this type before being
/// reported at the binary's top level.
#[derive(Error, Debug)]
pub enum OptimizerError {
    /// Task or input validation failed
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Source could not be decoded as a raster image
    #[error("Decode error: {0}")]
    Decode(String),

    /// Image processing failed
    #[error("Processing error: {0}")]
    Processing(String),

    /// File IO error
    #[error("IO error: {0}")]
    IO(String),
}

/// Convenience result type for optimizer operations.
pub type OptimizerResult<T> = Result<T, OptimizerError>;

// Helper methods for error creation
impl OptimizerError {
    pub fn decode<T: Into<String>>(msg: T) -> Self {
        Self::Decode(msg.into())
    }

    pub fn processing<T: Into<String>>(msg: T) -> Self {
        Self::Processing(msg.into())
    }

    pub fn io<T: Into<String>>(msg: T) -> Self {
        Self::IO(msg.into())
    }
}

// Helper methods for validation error creation
impl ValidationError {
    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::NotFound(path.into()))
    }

    pub fn not_a_file(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::NotFile(path.into()))
    }

    pub fn not_png(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::NotPng(path.into()))
    }

    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }
}

// Convert std::io::Error to OptimizerError
impl From<io::Error> for OptimizerError {
    fn from(err: io::Error) -> Self {
        Self::IO(err.to_string())
    }
}

// Convert io::Error to PathError
impl From<io::Error> for PathError {
    fn from(err: io::Error) -> Self {
        Self::IO(err.to_string())
    }
}

// Convert PathError to OptimizerError
impl From<PathError> for OptimizerError {
    fn from(err: PathError) -> Self {
        Self::Validation(ValidationError::Path(err))
    }
}
