//! Command implementations for bundlemap CLI

pub mod completions;
pub mod helpers;
pub mod list;
pub mod resolve;
pub mod show;
pub mod version;
