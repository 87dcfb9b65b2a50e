//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - resolve: Resolve command arguments
//! - list: List command arguments
//! - show: Show command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub mod completions;
pub mod list;
pub mod resolve;
pub mod show;

pub use completions::CompletionsArgs;
pub use list::ListArgs;
pub use resolve::ResolveArgs;
pub use show::ShowArgs;

/// bundlemap - vendor bundle resolver
///
/// Resolve bundle names into the copy specifications a build pipeline stages
/// into the application's vendor directory.
#[derive(Parser, Debug)]
#[command(
    name = "bundlemap",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Resolve vendor bundle names into copy specifications",
    long_about = "bundlemap maps logical bundle names (jquery, mocha, @cliqz/adblocker, ...) to \
                  the directory they live in under node_modules, the files to take from there, \
                  and the vendor directory to stage them into.",
    after_help = "Examples:\n   \
                  bundlemap resolve jquery mocha            # Print specs as JSON\n   \
                  bundlemap resolve jquery --format yaml    # Print specs as YAML\n   \
                  bundlemap list                            # List registered bundles\n   \
                  bundlemap show @cliqz/adblocker           # Show one bundle\n   \
                  bundlemap -r bundles.yaml resolve lodash  # Use an extra registry file\n"
)]
pub struct Cli {
    /// Registry file layered over the built-in bundles
    /// (defaults to ./bundlemap.yaml when present)
    #[arg(long, short = 'r', global = true, env = "BUNDLEMAP_REGISTRY")]
    pub registry: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve bundle names into specifications
    Resolve(ResolveArgs),

    /// List registered bundles
    List(ListArgs),

    /// Show one bundle specification
    Show(ShowArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Output format for resolved specifications
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON array, one object per requested name
    #[default]
    Json,
    /// YAML sequence
    Yaml,
    /// Human-readable listing
    Text,
}
