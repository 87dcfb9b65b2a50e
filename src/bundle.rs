//! Bundle specification type
//!
//! A [`BundleSpec`] tells the build pipeline where a third-party asset lives
//! inside the dependency tree, which files to take from there, and where to
//! stage them in the application's vendor area.

use serde::{Deserialize, Serialize};

use crate::error::{Result, invalid_bundle_spec};

/// One logical asset bundle
///
/// Serialized with the short field names the build pipeline reads:
/// `src`, `include` and `dest`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BundleSpec {
    /// Directory inside the dependency tree holding the asset
    #[serde(rename = "src")]
    pub source_directory: String,

    /// Files to take from the source directory; `None` means everything
    #[serde(rename = "include", default, skip_serializing_if = "Option::is_none")]
    pub included_files: Option<Vec<String>>,

    /// Directory within the vendor/output area to stage the asset into
    #[serde(rename = "dest")]
    pub destination_directory: String,
}

impl BundleSpec {
    /// Create a spec that includes everything found at `source_directory`
    pub fn new(
        source_directory: impl Into<String>,
        destination_directory: impl Into<String>,
    ) -> Self {
        Self {
            source_directory: source_directory.into(),
            included_files: None,
            destination_directory: destination_directory.into(),
        }
    }

    /// Restrict the spec to the given files, in order
    #[must_use]
    pub fn with_include<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.included_files = Some(files.into_iter().map(Into::into).collect());
        self
    }

    /// Files to stage, empty when the whole directory is taken
    pub fn included(&self) -> &[String] {
        self.included_files.as_deref().unwrap_or(&[])
    }

    /// Check the non-empty source and destination invariant
    pub fn validate(&self, name: &str) -> Result<()> {
        if self.source_directory.trim().is_empty() {
            return Err(invalid_bundle_spec(name, "'src' must not be empty"));
        }
        if self.destination_directory.trim().is_empty() {
            return Err(invalid_bundle_spec(name, "'dest' must not be empty"));
        }
        if let Some(files) = &self.included_files {
            if files.iter().any(|f| f.trim().is_empty()) {
                return Err(invalid_bundle_spec(
                    name,
                    "'include' must not contain empty file names",
                ));
            }
        }
        Ok(())
    }
}
