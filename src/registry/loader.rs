//! Registry file loading and merging
//!
//! This module handles loading bundle definitions from a `bundlemap.yaml`
//! file and merging them with the built-in table.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Deserialize;

use super::BundleRegistry;
use crate::bundle::BundleSpec;
use crate::error::{Result, config_not_found, config_parse_failed, config_read_failed};

/// Registry file picked up from the working directory when no path is given
pub const DEFAULT_REGISTRY_FILE: &str = "bundlemap.yaml";

/// On-disk layout of a registry file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RegistryFile {
    #[serde(default)]
    bundles: serde_yaml::Mapping,
}

/// Registry loader
pub struct RegistryLoader {
    /// Explicit registry file (from `--registry` or `BUNDLEMAP_REGISTRY`)
    path: Option<PathBuf>,

    /// Directory searched for `bundlemap.yaml` when no explicit path is set
    working_dir: PathBuf,
}

impl RegistryLoader {
    /// Create a new registry loader rooted at `working_dir`
    pub fn new(path: Option<PathBuf>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            path,
            working_dir: working_dir.into(),
        }
    }

    /// Load the registry
    ///
    /// Priority order (later sources override earlier ones):
    /// 1. Built-in bundles
    /// 2. The explicit registry file, or `bundlemap.yaml` in the working directory
    pub fn load(&self) -> Result<BundleRegistry> {
        let registry = BundleRegistry::builtin();

        match self.registry_file()? {
            Some(path) => {
                let overrides = Self::load_file(&path)?;
                info!(
                    "Loaded {} bundle(s) from {}",
                    overrides.len(),
                    path.display()
                );
                Ok(registry.merge(overrides))
            }
            None => {
                debug!("No registry file, using {} built-in bundles", registry.len());
                Ok(registry)
            }
        }
    }

    /// Pick the registry file to layer over the built-ins
    fn registry_file(&self) -> Result<Option<PathBuf>> {
        if let Some(path) = &self.path {
            let path = if path.is_absolute() {
                path.clone()
            } else {
                self.working_dir.join(path)
            };
            if !path.exists() {
                return Err(config_not_found(path.display().to_string()));
            }
            return Ok(Some(path));
        }

        let default_path = self.working_dir.join(DEFAULT_REGISTRY_FILE);
        Ok(default_path.exists().then_some(default_path))
    }

    /// Read and parse a registry file
    pub fn load_file(path: &Path) -> Result<BundleRegistry> {
        let content = fs::read_to_string(path)
            .map_err(|e| config_read_failed(path.display().to_string(), e.to_string()))?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Parse registry file content
    ///
    /// The document needs a top-level `bundles` mapping of name to spec.
    /// Mapping order is kept. JSON documents parse too. An empty document
    /// registers nothing.
    pub fn parse(content: &str, path: &str) -> Result<BundleRegistry> {
        if content.trim().is_empty() {
            debug!("Registry file {path} is empty");
            return Ok(BundleRegistry::default());
        }

        let file: RegistryFile =
            serde_yaml::from_str(content).map_err(|e| config_parse_failed(path, e.to_string()))?;

        let mut bundles = Vec::with_capacity(file.bundles.len());
        for (key, value) in file.bundles {
            let name = match key {
                serde_yaml::Value::String(name) => name,
                other => {
                    return Err(config_parse_failed(
                        path,
                        format!("bundle names must be strings, got {other:?}"),
                    ));
                }
            };
            let spec: BundleSpec = serde_yaml::from_value(value)
                .map_err(|e| config_parse_failed(path, format!("bundle '{name}': {e}")))?;
            spec.validate(&name)?;
            bundles.push((name, spec));
        }

        Ok(BundleRegistry::new(bundles))
    }
}
