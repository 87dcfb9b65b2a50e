use clap::Parser;

use super::OutputFormat;

/// Arguments for the resolve command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Resolve bundles as JSON:\n    bundlemap resolve jquery mocha\n\n\
                  Resolve a scoped bundle as YAML:\n    bundlemap resolve @cliqz/adblocker --format yaml\n\n\
                  Human-readable output:\n    bundlemap resolve jquery --format text")]
pub struct ResolveArgs {
    /// Bundle names, in the order their specs should be printed
    pub names: Vec<String>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}
