//! Terminal presentation layer
//!
//! Human-readable rendering of bundle specifications for the `list`, `show`
//! and `resolve --format text` commands.

pub mod display;
