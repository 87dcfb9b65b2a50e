//! bundlemap - vendor bundle resolver
//!
//! Maps logical bundle names (`jquery`, `mocha`, `@cliqz/adblocker`, ...) to
//! [`BundleSpec`]s: where the asset lives in the dependency tree, which files
//! to take, and which vendor directory to stage them into. A build pipeline
//! consumes the specs and does the copying.
//!
//! ```
//! let specs = bundlemap::resolve_builtin(["jquery"]).unwrap();
//! assert_eq!(specs[0].source_directory, "node_modules/jquery/dist");
//! assert_eq!(specs[0].destination_directory, "vendor");
//!
//! assert!(bundlemap::resolve_builtin(["jquery", "not-a-real-bundle"]).is_err());
//! ```

pub mod bundle;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod registry;
pub mod resolver;
pub mod ui;

pub use bundle::BundleSpec;
pub use error::{BundlemapError, Result};
pub use registry::{BUILTIN, BundleRegistry, RegistryLoader};
pub use resolver::{resolve, resolve_builtin};
