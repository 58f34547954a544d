//! Command implementations for the Murano CLI

pub mod bundle_import;
pub mod completions;
pub mod helpers;
pub mod package_create;
pub mod package_delete;
pub mod package_import;
pub mod package_list;
pub mod package_show;
pub mod version;
