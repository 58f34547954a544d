//! Console presentation layer
//!
//! This module handles:
//! - Package tables for `package-list`
//! - Package details for `package-show`
//! - Import summaries for `package-import` and `bundle-import`

pub mod display;

pub use display::{display_import_report, display_package, display_package_table};
