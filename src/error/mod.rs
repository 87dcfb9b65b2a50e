//! Error types and handling for bundlemap
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`bundle`]: Bundle lookup and validation errors
//! - [`config`]: Registry file errors
//! - [`fs`]: File system and output errors

pub mod bundle;
pub mod config;
pub mod fs;


pub use bundle::{invalid_spec as invalid_bundle_spec, unknown as unknown_bundle};
pub use config::{
    not_found as config_not_found, parse_failed as config_parse_failed,
    read_failed as config_read_failed,
};
pub use fs::{io_error, output_failed};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for bundlemap operations
#[derive(Error, Diagnostic, Debug)]
pub enum BundlemapError {
    // Bundle errors
    #[error("Could not find bundle: {name}")]
    #[diagnostic(
        code(bundlemap::bundle::unknown),
        help("Run 'bundlemap list' to see the registered bundle names")
    )]
    UnknownBundle { name: String },

    #[error("Invalid bundle '{name}': {message}")]
    #[diagnostic(
        code(bundlemap::bundle::invalid_spec),
        help("Every bundle needs a non-empty 'src' and 'dest'")
    )]
    InvalidBundleSpec { name: String, message: String },

    // Configuration errors
    #[error("Registry file not found: {path}")]
    #[diagnostic(
        code(bundlemap::config::not_found),
        help("Check the --registry flag or the BUNDLEMAP_REGISTRY environment variable")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to read registry file: {path}: {reason}")]
    #[diagnostic(code(bundlemap::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse registry file: {path}: {reason}")]
    #[diagnostic(code(bundlemap::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(bundlemap::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(bundlemap::fs::io_error))]
    IoError { message: String },

    #[error("Failed to write output: {reason}")]
    #[diagnostic(code(bundlemap::fs::output_failed))]
    OutputFailed { reason: String },
}

impl From<std::io::Error> for BundlemapError {
    fn from(err: std::io::Error) -> Self {
        BundlemapError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for BundlemapError {
    fn from(err: serde_yaml::Error) -> Self {
        BundlemapError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for BundlemapError {
    fn from(err: serde_json::Error) -> Self {
        BundlemapError::OutputFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, BundlemapError>;
