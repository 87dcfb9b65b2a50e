//! Registry file errors

use super::BundlemapError;

/// Creates a registry file not found error
pub fn not_found(path: impl Into<String>) -> BundlemapError {
    BundlemapError::ConfigNotFound { path: path.into() }
}

/// Creates a registry file parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> BundlemapError {
    BundlemapError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a registry file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> BundlemapError {
    BundlemapError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
