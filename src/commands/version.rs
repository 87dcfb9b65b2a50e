//! Version command implementation

use std::fmt::Write;

use crate::error::Result;
use crate::registry::BUILTIN;

/// Run version command
pub fn run() -> Result<()> {
    print!("{}", version_report());
    Ok(())
}

/// Version banner plus build details
fn version_report() -> String {
    let profile = if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    };

    let mut out = format!("bundlemap {}\n\nBuild info:\n", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(
        out,
        "  Minimum Rust version: {}",
        env!("CARGO_PKG_RUST_VERSION")
    );
    let _ = writeln!(out, "  Profile: {profile}");
    let _ = writeln!(out, "  Built-in bundles: {}", BUILTIN.len());
    out
}
