//! Bundle-related errors

use super::BundlemapError;

/// Creates an unknown bundle error
pub fn unknown(name: impl Into<String>) -> BundlemapError {
    BundlemapError::UnknownBundle { name: name.into() }
}

/// Creates an invalid bundle spec error
pub fn invalid_spec(name: impl Into<String>, message: impl Into<String>) -> BundlemapError {
    BundlemapError::InvalidBundleSpec {
        name: name.into(),
        message: message.into(),
    }
}
