//! File system and output errors

use super::BundlemapError;

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> BundlemapError {
    BundlemapError::IoError {
        message: message.into(),
    }
}

/// Creates an output failed error
pub fn output_failed(reason: impl Into<String>) -> BundlemapError {
    BundlemapError::OutputFailed {
        reason: reason.into(),
    }
}
