//! Dependency resolution for package imports
//!
//! This module handles:
//! - Walking `Require` entries of package manifests recursively
//! - Deduplicating packages by reference name and full name
//! - Recording references that could not be resolved without stopping
//!
//! Packages come out in depth-first pre-order: a package precedes the
//! packages it requires, and the first occurrence of a full name wins.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::MuranoError;
use crate::package::{PackageArchive, PackageLocator, PackageReference};

/// A reference that could not be turned into a package
#[derive(Debug)]
pub struct ResolutionFailure {
    pub reference: PackageReference,
    pub error: MuranoError,
}

/// Packages to upload, in order, plus what failed along the way
#[derive(Debug, Default)]
pub struct Resolution {
    pub packages: Vec<PackageArchive>,
    pub failures: Vec<ResolutionFailure>,
}

/// Resolves root references and their transitive requirements
pub struct Resolver<'a> {
    locator: &'a PackageLocator<'a>,
    /// Names already handled, shared across resolutions of one invocation
    visited: &'a mut HashSet<String>,
    resolution: Resolution,
}

impl<'a> Resolver<'a> {
    pub fn new(locator: &'a PackageLocator<'a>, visited: &'a mut HashSet<String>) -> Self {
        Self {
            locator,
            visited,
            resolution: Resolution::default(),
        }
    }

    pub fn resolve(mut self, roots: &[PackageReference]) -> Resolution {
        for root in roots {
            self.visit(root);
        }
        self.resolution
    }

    fn visit(&mut self, reference: &PackageReference) {
        if !self.visited.insert(reference.name.clone()) {
            debug!(package = %reference, "already resolved");
            return;
        }

        let archive = match self.locator.locate(reference) {
            Ok(archive) => archive,
            Err(error) => {
                if error.is_not_found() {
                    warn!(package = %reference, "package not found, skipping");
                } else {
                    warn!(package = %reference, error = %error, "cannot resolve package");
                }
                self.resolution.failures.push(ResolutionFailure {
                    reference: reference.clone(),
                    error,
                });
                return;
            }
        };

        let full_name = archive.full_name().to_string();
        if full_name != reference.name && !self.visited.insert(full_name.clone()) {
            debug!(package = %reference, full_name = %full_name, "full name already resolved");
            return;
        }

        let requires = archive.manifest().requires.clone();
        debug!(package = %full_name, dependencies = requires.len(), "resolved package");
        self.resolution.packages.push(archive);

        for dependency in &requires {
            self.visit(dependency);
        }
    }
}
