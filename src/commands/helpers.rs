//! Command helper utilities

use std::path::PathBuf;

use crate::error::{Result, io_error};
use crate::registry::{BundleRegistry, RegistryLoader};

/// Load the registry the commands work against
///
/// Built-in bundles, with the registry file (explicit or `./bundlemap.yaml`)
/// layered over them.
pub fn load_registry(registry_file: Option<PathBuf>) -> Result<BundleRegistry> {
    let current_dir = std::env::current_dir()
        .map_err(|e| io_error(format!("Failed to get current directory: {e}")))?;
    RegistryLoader::new(registry_file, current_dir).load()
}
