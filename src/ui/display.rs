//! Display functions for bundle specifications

use std::fmt::Write;

use console::Style;

use crate::bundle::BundleSpec;

/// Format a sequence of named bundles, one block per bundle
pub fn format_bundles<'a>(bundles: impl IntoIterator<Item = (&'a str, &'a BundleSpec)>) -> String {
    let mut out = String::new();
    for (name, spec) in bundles {
        out.push_str(&format_bundle(name, spec));
        out.push('\n');
    }
    out
}

/// Format one bundle with its source, files and destination
pub fn format_bundle(name: &str, spec: &BundleSpec) -> String {
    let label = Style::new().bold();
    let mut out = String::new();

    let _ = writeln!(out, "  {}", Style::new().bold().yellow().apply_to(name));
    let _ = writeln!(
        out,
        "    {} {}",
        label.apply_to("Source:"),
        spec.source_directory
    );
    match &spec.included_files {
        Some(files) => {
            let _ = writeln!(out, "    {}", label.apply_to("Files:"));
            for file in files {
                let _ = writeln!(out, "      - {file}");
            }
        }
        None => {
            let _ = writeln!(
                out,
                "    {} {}",
                label.apply_to("Files:"),
                Style::new().dim().apply_to("(entire directory)")
            );
        }
    }
    let _ = writeln!(
        out,
        "    {} {}",
        label.apply_to("Destination:"),
        Style::new().green().apply_to(&spec.destination_directory)
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bundle_with_files() {
        let spec =
            BundleSpec::new("node_modules/mocha", "vendor").with_include(["mocha.css", "mocha.js"]);
        let output = format_bundle("mocha", &spec);
        assert!(output.contains("mocha"));
        assert!(output.contains("node_modules/mocha"));
        let css = output.find("mocha.css").unwrap();
        let js = output.find("mocha.js").unwrap();
        assert!(css < js);
        assert!(output.contains("vendor"));
    }

    #[test]
    fn test_format_bundle_whole_directory() {
        let spec = BundleSpec::new("node_modules/cliqz-history/dist", "cliqz-history");
        let output = format_bundle("cliqz-history", &spec);
        assert!(output.contains("entire directory"));
    }

    #[test]
    fn test_format_bundles_keeps_order() {
        let a = BundleSpec::new("node_modules/a", "vendor");
        let b = BundleSpec::new("node_modules/b", "vendor");
        let output = format_bundles([("second", &b), ("first", &a)]);
        assert!(output.find("second").unwrap() < output.find("first").unwrap());
    }
}
