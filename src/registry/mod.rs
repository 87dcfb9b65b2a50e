//! Bundle registry
//!
//! This module provides:
//! - Bundle registration and lookup (via [`BundleRegistry`])
//! - The built-in bundle table (via [`builtin`])
//! - Registry files layered over the built-ins (via [`loader`])

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::bundle::BundleSpec;
use crate::error::Result;

pub mod builtin;
pub mod loader;

pub use builtin::default_bundles;
pub use loader::RegistryLoader;

/// Process-wide built-in registry, constructed on first use and never mutated
pub static BUILTIN: LazyLock<BundleRegistry> = LazyLock::new(BundleRegistry::builtin);

/// Registry of named bundle specifications
///
/// Entries keep registration order for listing; lookups go through a hash
/// index so each one is constant time.
#[derive(Debug, Clone, Default)]
pub struct BundleRegistry {
    bundles: Vec<(String, BundleSpec)>,
    by_name: HashMap<String, usize>,
}

impl BundleRegistry {
    /// Create a new registry with the given bundles
    ///
    /// A name registered twice keeps its first position and its last spec.
    pub fn new(bundles: impl IntoIterator<Item = (String, BundleSpec)>) -> Self {
        let mut registry = Self::default();
        for (name, spec) in bundles {
            registry.insert(name, spec);
        }
        registry
    }

    /// Create a registry with the built-in bundles
    pub fn builtin() -> Self {
        Self::new(default_bundles())
    }

    fn insert(&mut self, name: String, spec: BundleSpec) {
        if let Some(&idx) = self.by_name.get(&name) {
            if let Some(slot) = self.bundles.get_mut(idx) {
                slot.1 = spec;
            }
            return;
        }
        self.by_name.insert(name.clone(), self.bundles.len());
        self.bundles.push((name, spec));
    }

    /// Get a bundle by its exact name
    pub fn get(&self, name: &str) -> Option<&BundleSpec> {
        self.by_name
            .get(name)
            .and_then(|&idx| self.bundles.get(idx))
            .map(|(_, spec)| spec)
    }

    /// Check whether a bundle name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Bundle names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bundles.iter().map(|(name, _)| name.as_str())
    }

    /// All bundles in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BundleSpec)> {
        self.bundles.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    /// Merge another registry into this one
    ///
    /// Bundles from `other` replace same-named bundles in place.
    /// New bundles are appended.
    #[must_use]
    pub fn merge(mut self, other: BundleRegistry) -> Self {
        for (name, spec) in other.bundles {
            self.insert(name, spec);
        }
        self
    }

    /// Check that every entry has a non-empty source and destination
    pub fn validate(&self) -> Result<()> {
        for (name, spec) in &self.bundles {
            spec.validate(name)?;
        }
        Ok(())
    }

    /// Resolve requested names against this registry
    ///
    /// See [`crate::resolver::resolve`].
    pub fn resolve<I, S>(&self, names: I) -> Result<Vec<&BundleSpec>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        crate::resolver::resolve(self, names)
    }
}

impl<'a> IntoIterator for &'a BundleRegistry {
    type Item = (&'a str, &'a BundleSpec);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a BundleSpec)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
