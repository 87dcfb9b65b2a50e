//! List command implementation
//!
//! This command lists all registered bundles in registration order.

use console::Style;

use crate::cli::ListArgs;
use crate::commands::helpers::load_registry;
use crate::error::Result;
use crate::registry::BundleRegistry;
use crate::ui::display::format_bundles;

/// Run list command
pub fn run(registry_file: Option<std::path::PathBuf>, args: ListArgs) -> Result<()> {
    let registry = load_registry(registry_file)?;
    print!("{}", list_bundles(&registry, args.detailed));
    Ok(())
}

/// Format the registry listing
fn list_bundles(registry: &BundleRegistry, detailed: bool) -> String {
    if registry.is_empty() {
        return "No bundles registered.\n".to_string();
    }

    let mut out = format!("Registered bundles ({}):\n\n", registry.len());
    if detailed {
        out.push_str(&format_bundles(registry.iter()));
    } else {
        for name in registry.names() {
            out.push_str(&format!("  {}\n", Style::new().bold().yellow().apply_to(name)));
        }
    }
    out
}
