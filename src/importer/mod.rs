//! Package and bundle import
//!
//! The importer is the only component that writes to the catalog. It takes
//! what the resolver produced and uploads it in order:
//!
//! 1. Create the package
//! 2. On a name conflict, look up the existing package and ask the
//!    [`ConflictPolicy`] what to do
//! 3. Skip, abort the whole run, or delete the existing package and create
//!    once more
//!
//! Failures of individual packages are collected into an [`ImportReport`];
//! only an abort stops the run. An aborted run still returns its report, with
//! the abort recorded in [`ImportReport::aborted`].

pub mod policy;

use std::collections::HashSet;
use std::path::PathBuf;

use tracing::{debug, error, info, warn};

use crate::bundle::BundleLocator;
use crate::catalog::{CatalogPackage, ImportMetadata, PackageCatalog, PackageFilter};
use crate::error::{MuranoError, Result, package};
use crate::fetch::Fetcher;
use crate::package::{PackageArchive, PackageLocator, PackageReference};
use crate::progress::ProgressDisplay;
use crate::resolver::{Resolution, Resolver};

pub use policy::{ConflictDecision, ConflictPolicy, ConflictPrompter, ExistsAction};

/// Settings shared by every upload of one run
#[derive(Debug, Clone)]
pub struct ImportOptions {
    pub repo_url: String,
    pub metadata: ImportMetadata,
}

/// Result of importing one package
#[derive(Debug)]
pub enum ImportOutcome {
    Created(CatalogPackage),
    Replaced(CatalogPackage),
    Skipped,
}

/// What one import run did
#[derive(Debug, Default)]
pub struct ImportReport {
    pub created: Vec<String>,
    pub replaced: Vec<String>,
    pub skipped: Vec<String>,
    /// Reference or full name, with the reason it was not imported
    pub failed: Vec<(String, MuranoError)>,
    /// Set when a conflict decision stopped the run
    pub aborted: Option<MuranoError>,
}

impl ImportReport {
    pub fn merge(&mut self, other: ImportReport) {
        self.created.extend(other.created);
        self.replaced.extend(other.replaced);
        self.skipped.extend(other.skipped);
        self.failed.extend(other.failed);
        if self.aborted.is_none() {
            self.aborted = other.aborted;
        }
    }

    pub fn imported(&self) -> usize {
        self.created.len() + self.replaced.len()
    }
}

pub struct Importer<'a> {
    catalog: &'a dyn PackageCatalog,
    fetcher: &'a dyn Fetcher,
    policy: ConflictPolicy,
    options: ImportOptions,
    /// Names resolved so far in this run
    visited: HashSet<String>,
    show_progress: bool,
    progress: Option<ProgressDisplay>,
}

impl<'a> Importer<'a> {
    pub fn new(
        catalog: &'a dyn PackageCatalog,
        fetcher: &'a dyn Fetcher,
        policy: ConflictPolicy,
        options: ImportOptions,
    ) -> Self {
        Self {
            catalog,
            fetcher,
            policy,
            options,
            visited: HashSet::new(),
            show_progress: false,
            progress: None,
        }
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Import packages given by name, path or URL, with their dependencies
    pub fn import_packages(
        &mut self,
        identifiers: &[String],
        version: Option<&str>,
    ) -> Result<ImportReport> {
        let roots: Vec<PackageReference> = identifiers
            .iter()
            .map(|id| PackageReference::with_version(id.clone(), version.map(String::from)))
            .collect();
        let resolution = self.resolve(&roots, None);
        self.upload(resolution)
    }

    /// Import bundles in order, stopping after an aborted one
    pub fn import_bundles(&mut self, identifiers: &[String]) -> Result<ImportReport> {
        let mut report = ImportReport::default();
        for identifier in identifiers {
            report.merge(self.import_bundle(identifier)?);
            if report.aborted.is_some() {
                break;
            }
        }
        Ok(report)
    }

    /// Import every package of a bundle, with their dependencies
    ///
    /// A bundle that does not exist is reported as a failure, not an error.
    pub fn import_bundle(&mut self, identifier: &str) -> Result<ImportReport> {
        let locator = BundleLocator::new(self.fetcher, self.options.repo_url.clone());
        let located = match locator.locate(identifier) {
            Ok(located) => located,
            Err(err @ MuranoError::BundleNotFound { .. }) => {
                error!(bundle = identifier, "bundle not found");
                let mut report = ImportReport::default();
                report.failed.push((identifier.to_string(), err));
                return Ok(report);
            }
            Err(err) => return Err(err),
        };

        info!(
            bundle = identifier,
            packages = located.bundle.packages.len(),
            "importing bundle"
        );
        let resolution = self.resolve(&located.bundle.packages, located.search_dir);
        self.upload(resolution)
    }

    /// Upload one package, consulting the conflict policy if it exists
    pub fn import_package(&mut self, archive: &PackageArchive) -> Result<ImportOutcome> {
        debug!(package = archive.full_name(), origin = archive.origin(), "uploading package");
        match self.catalog.create(&self.options.metadata, archive) {
            Ok(created) => Ok(ImportOutcome::Created(created)),
            Err(MuranoError::PackageConflict { .. }) => self.handle_conflict(archive),
            Err(err) => Err(err),
        }
    }

    fn handle_conflict(&mut self, archive: &PackageArchive) -> Result<ImportOutcome> {
        let full_name = archive.full_name();
        match self.decide(full_name)? {
            ConflictDecision::Skip => {
                self.log(|| info!(package = full_name, "package exists, skipping"));
                Ok(ImportOutcome::Skipped)
            }
            ConflictDecision::Abort => Err(package::import_aborted(full_name)),
            ConflictDecision::Update => {
                let existing = self
                    .catalog
                    .filter(&PackageFilter::by_fqn(full_name))?
                    .into_iter()
                    .find(|p| p.fully_qualified_name == full_name);
                match existing {
                    Some(existing) => {
                        self.log(|| {
                            info!(package = full_name, id = %existing.id, "replacing existing package");
                        });
                        self.catalog.delete(&existing.id)?;
                    }
                    None => self.log(|| {
                        warn!(package = full_name, "existing package not listed, retrying create");
                    }),
                }
                let created = self.catalog.create(&self.options.metadata, archive)?;
                Ok(ImportOutcome::Replaced(created))
            }
        }
    }

    fn decide(&mut self, full_name: &str) -> Result<ConflictDecision> {
        match (&self.progress, self.policy.is_interactive()) {
            (Some(progress), true) => progress.suspend(|| self.policy.decide(full_name)),
            _ => self.policy.decide(full_name),
        }
    }

    /// Emit log lines without tearing the progress bar
    fn log(&self, emit: impl FnOnce()) {
        match &self.progress {
            Some(progress) => progress.suspend(emit),
            None => emit(),
        }
    }

    fn resolve(&mut self, roots: &[PackageReference], search_dir: Option<PathBuf>) -> Resolution {
        let locator = PackageLocator::new(self.fetcher, self.options.repo_url.clone())
            .with_search_dir(search_dir);
        Resolver::new(&locator, &mut self.visited).resolve(roots)
    }

    fn upload(&mut self, resolution: Resolution) -> Result<ImportReport> {
        let mut report = ImportReport::default();
        for failure in resolution.failures {
            report
                .failed
                .push((failure.reference.to_string(), failure.error));
        }

        if self.show_progress && !resolution.packages.is_empty() {
            self.progress = Some(ProgressDisplay::new(resolution.packages.len() as u64));
        }

        for archive in &resolution.packages {
            let full_name = archive.full_name().to_string();
            if let Some(progress) = &self.progress {
                progress.update_package(&full_name);
            }

            match self.import_package(archive) {
                Ok(ImportOutcome::Created(created)) => {
                    self.log(|| info!(package = %full_name, id = %created.id, "package created"));
                    report.created.push(full_name);
                }
                Ok(ImportOutcome::Replaced(created)) => {
                    self.log(|| info!(package = %full_name, id = %created.id, "package updated"));
                    report.replaced.push(full_name);
                }
                Ok(ImportOutcome::Skipped) => report.skipped.push(full_name),
                Err(err @ MuranoError::ImportAborted { .. }) => {
                    if let Some(progress) = self.progress.take() {
                        progress.abandon();
                    }
                    warn!(package = %full_name, "import aborted");
                    report.aborted = Some(err);
                    return Ok(report);
                }
                Err(err) => {
                    self.log(|| {
                        error!(package = %full_name, error = %err, "failed to import package");
                    });
                    report.failed.push((full_name, err));
                }
            }

            if let Some(progress) = &self.progress {
                progress.inc_package();
            }
        }

        if let Some(progress) = self.progress.take() {
            progress.finish();
        }
        Ok(report)
    }
}
