//! Resolve command implementation
//!
//! Prints the specs for the requested bundle names, in request order, so a
//! build pipeline can consume them from stdout.

use log::debug;

use crate::bundle::BundleSpec;
use crate::cli::{OutputFormat, ResolveArgs};
use crate::commands::helpers::load_registry;
use crate::error::{Result, output_failed};
use crate::ui::display::format_bundles;

/// Run resolve command
pub fn run(registry_file: Option<std::path::PathBuf>, args: ResolveArgs) -> Result<()> {
    let registry = load_registry(registry_file)?;
    let specs = registry.resolve(&args.names)?;
    debug!("Resolved {} bundle(s)", specs.len());

    let output = render(&args.names, &specs, args.format)?;
    print!("{output}");
    Ok(())
}

/// Render resolved specs in the requested format
pub fn render(names: &[String], specs: &[&BundleSpec], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(specs).map_err(|e| output_failed(e.to_string()))?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(specs).map_err(|e| output_failed(e.to_string()))
        }
        OutputFormat::Text => Ok(format_bundles(
            names.iter().map(String::as_str).zip(specs.iter().copied()),
        )),
    }
}
