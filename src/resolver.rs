//! Bundle name resolution
//!
//! Maps requested bundle names to their specifications, in request order.
//! Resolution is pure: no I/O and no mutation of the registry.

use log::debug;

use crate::bundle::BundleSpec;
use crate::error::{Result, unknown_bundle};
use crate::registry::{BUILTIN, BundleRegistry};

/// Resolve requested names against `registry`
///
/// Returns one spec per requested name, in the same order. Duplicate names
/// yield the same shared spec at each of their positions. The first name
/// missing from the registry aborts resolution with
/// [`BundlemapError::UnknownBundle`](crate::error::BundlemapError::UnknownBundle);
/// names after it are not looked at.
pub fn resolve<'r, I, S>(registry: &'r BundleRegistry, names: I) -> Result<Vec<&'r BundleSpec>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| -> Result<&'r BundleSpec> {
            let name = name.as_ref();
            let spec = registry.get(name).ok_or_else(|| unknown_bundle(name))?;
            debug!("Resolved bundle '{}' -> {}", name, spec.source_directory);
            Ok(spec)
        })
        .collect()
}

/// Resolve requested names against the built-in registry
pub fn resolve_builtin<I, S>(names: I) -> Result<Vec<&'static BundleSpec>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    resolve(&BUILTIN, names)
}
