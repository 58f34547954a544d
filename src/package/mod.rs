//! Murano application packages
//!
//! This module handles:
//! - Reading package archives and their manifests
//! - Locating packages by path, URL or repository name
//! - Building new packages from a Heat template or MuranoPL classes
//!
//! ## Module Organization
//!
//! - `manifest.rs`: manifest.yaml model and parsing
//! - `archive.rs`: zip archive reader
//! - `locator.rs`: multi-source package lookup
//! - `create.rs`: package-create archive builder

pub mod archive;
pub mod create;
pub mod locator;
pub mod manifest;

use std::fmt;

pub use archive::PackageArchive;
pub use locator::PackageLocator;
pub use manifest::PackageManifest;

/// A request for a package by name, path or URL, with an optional version
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageReference {
    pub name: String,
    pub version: Option<String>,
}

impl PackageReference {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
        }
    }

    pub fn with_version(name: impl Into<String>, version: Option<String>) -> Self {
        Self {
            name: name.into(),
            version: version.filter(|v| !v.is_empty()),
        }
    }
}

impl fmt::Display for PackageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{} ({})", self.name, version),
            None => write!(f, "{}", self.name),
        }
    }
}
