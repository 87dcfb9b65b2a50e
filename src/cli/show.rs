use clap::Parser;

use super::OutputFormat;

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show bundle information:\n    bundlemap show jquery\n\n\
                  Show a scoped bundle as JSON:\n    bundlemap show @cliqz-oss/dexie --format json")]
pub struct ShowArgs {
    /// Bundle name
    pub name: String,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}
