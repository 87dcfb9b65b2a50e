//! Show command implementation

use crate::cli::{OutputFormat, ShowArgs};
use crate::commands::helpers::load_registry;
use crate::commands::resolve::render;
use crate::error::Result;

pub fn run(registry_file: Option<std::path::PathBuf>, args: ShowArgs) -> Result<()> {
    let registry = load_registry(registry_file)?;
    let names = [args.name];
    let specs = registry.resolve(&names)?;

    let output = match (args.format, specs.first()) {
        // A single object rather than a one-element list
        (OutputFormat::Json, Some(spec)) => {
            let mut json = serde_json::to_string_pretty(spec)?;
            json.push('\n');
            json
        }
        _ => render(&names, &specs, args.format)?,
    };
    print!("{output}");
    Ok(())
}
