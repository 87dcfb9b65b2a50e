//! Logger setup for the binary
//!
//! The library only emits through the `log` facade; the binary installs
//! `env_logger` writing to stderr so stdout stays machine-readable.

use env_logger::{Builder, Env, Target};

/// Environment variable holding the log filter (e.g. `bundlemap=debug`)
pub const LOG_ENV: &str = "BUNDLEMAP_LOG";

/// Default filter for the given verbosity
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Install the global logger
///
/// `BUNDLEMAP_LOG` wins over the verbosity default when set.
pub fn init(verbose: bool) {
    let env = Env::new().filter_or(LOG_ENV, default_filter(verbose));
    let _ = Builder::from_env(env)
        .target(Target::Stderr)
        .format_timestamp(None)
        .try_init();
}
