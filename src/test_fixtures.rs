//! Test fixtures and in-memory fakes shared by unit tests.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{MapFetcher, RecordingCatalog, make_package};
//!
//! #[test]
//! fn my_test() {
//!     let fetcher = MapFetcher::new().with(
//!         "http://127.0.0.1/apps/first_app.zip",
//!         make_package("first_app", &[("second_app", None)]),
//!     );
//!     let catalog = RecordingCatalog::new().with_existing("second_app", "id-2");
//! }
//! ```
//!
//! The fakes record every call so tests can assert on how often the remote
//! service was contacted.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::io::{Cursor, Write};
use std::rc::Rc;

use tempfile::TempDir;
use zip::ZipWriter;
use zip::write::FileOptions;

use crate::catalog::{CatalogPackage, ImportMetadata, PackageCatalog, PackageFilter};
use crate::error::{Result, http, package};
use crate::fetch::Fetcher;
use crate::importer::policy::{ConflictDecision, ConflictPrompter};
use crate::package::PackageArchive;

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Create test files in a directory.
///
/// Takes a list of (path, content) tuples and creates those files.
/// Paths are relative to the provided base directory.
///
/// # Panics
///
/// Panics if any file cannot be created.
pub fn create_test_files(temp: &TempDir, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = temp.path().join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&full_path, content).expect("Failed to write test file");
    }
}

/// Build an in-memory zip archive from (entry name, content) pairs.
///
/// # Panics
///
/// Panics if the archive cannot be written.
#[must_use]
pub fn make_zip(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in entries {
        writer
            .start_file(*name, FileOptions::default())
            .expect("Failed to start zip entry");
        writer
            .write_all(content.as_bytes())
            .expect("Failed to write zip entry");
    }
    writer
        .finish()
        .expect("Failed to finish zip archive")
        .into_inner()
}

/// Build a package archive whose manifest requires `deps` in order.
#[must_use]
pub fn make_package(full_name: &str, deps: &[(&str, Option<&str>)]) -> Vec<u8> {
    let mut manifest = format!("Format: 1.0\nType: Application\nFullName: {full_name}\n");
    if !deps.is_empty() {
        manifest.push_str("Require:\n");
        for (name, version) in deps {
            match version {
                Some(version) => manifest.push_str(&format!("  {name}: '{version}'\n")),
                None => manifest.push_str(&format!("  {name}:\n")),
            }
        }
    }
    make_zip(&[("manifest.yaml", &manifest)])
}

/// [`Fetcher`] serving canned responses; unknown URLs are 404
#[derive(Default)]
pub struct MapFetcher {
    responses: HashMap<String, std::result::Result<Vec<u8>, u16>>,
    requested: RefCell<Vec<String>>,
}

impl MapFetcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, url: &str, bytes: Vec<u8>) -> Self {
        self.responses.insert(url.to_string(), Ok(bytes));
        self
    }

    /// Answer `url` with an HTTP error status
    #[must_use]
    pub fn failing(mut self, url: &str, status: u16) -> Self {
        self.responses.insert(url.to_string(), Err(status));
        self
    }

    /// URLs fetched so far, in order
    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl Fetcher for MapFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        self.requested.borrow_mut().push(url.to_string());
        match self.responses.get(url) {
            Some(Ok(bytes)) => Ok(bytes.clone()),
            Some(Err(status)) => Err(http::status(url, *status, "scripted failure")),
            None => Err(http::not_found(url)),
        }
    }
}

/// In-memory [`PackageCatalog`] that records calls
#[derive(Default)]
pub struct RecordingCatalog {
    /// full name -> id
    existing: RefCell<HashMap<String, String>>,
    /// Names whose delete succeeds but which keep conflicting
    sticky: Vec<String>,
    next_id: RefCell<usize>,
    creates: RefCell<Vec<String>>,
    deletes: RefCell<Vec<String>>,
    filters: RefCell<Vec<PackageFilter>>,
    metadata: RefCell<Vec<ImportMetadata>>,
    /// `filter` answers with a 503
    filter_unavailable: bool,
}

impl RecordingCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretend `full_name` is already in the catalog with `id`
    #[must_use]
    pub fn with_existing(self, full_name: &str, id: &str) -> Self {
        self.existing
            .borrow_mut()
            .insert(full_name.to_string(), id.to_string());
        self
    }

    /// Keep reporting a conflict for `full_name` even after it is deleted
    #[must_use]
    pub fn with_sticky(mut self, full_name: &str, id: &str) -> Self {
        self.sticky.push(full_name.to_string());
        self.with_existing(full_name, id)
    }

    /// Make every `filter` call fail as if the service were unavailable
    #[must_use]
    pub fn with_unavailable_filter(mut self) -> Self {
        self.filter_unavailable = true;
        self
    }

    /// Full names passed to `create`, including failed attempts
    pub fn creates(&self) -> Vec<String> {
        self.creates.borrow().clone()
    }

    pub fn deletes(&self) -> Vec<String> {
        self.deletes.borrow().clone()
    }

    pub fn filters(&self) -> Vec<PackageFilter> {
        self.filters.borrow().clone()
    }

    pub fn metadata(&self) -> Vec<ImportMetadata> {
        self.metadata.borrow().clone()
    }

    fn package(full_name: &str, id: &str) -> CatalogPackage {
        CatalogPackage {
            id: id.to_string(),
            name: full_name.to_string(),
            fully_qualified_name: full_name.to_string(),
            enabled: true,
            ..CatalogPackage::default()
        }
    }
}

impl PackageCatalog for RecordingCatalog {
    fn create(
        &self,
        metadata: &ImportMetadata,
        archive: &PackageArchive,
    ) -> Result<CatalogPackage> {
        let full_name = archive.full_name();
        self.creates.borrow_mut().push(full_name.to_string());
        self.metadata.borrow_mut().push(metadata.clone());

        let sticky = self.sticky.iter().any(|name| name == full_name);
        if sticky || self.existing.borrow().contains_key(full_name) {
            return Err(package::conflict(full_name));
        }

        let mut next_id = self.next_id.borrow_mut();
        *next_id += 1;
        let id = format!("new-{next_id}");
        self.existing
            .borrow_mut()
            .insert(full_name.to_string(), id.clone());
        Ok(Self::package(full_name, &id))
    }

    fn delete(&self, id: &str) -> Result<()> {
        self.deletes.borrow_mut().push(id.to_string());
        let mut existing = self.existing.borrow_mut();
        let before = existing.len();
        existing.retain(|_, existing_id| existing_id != id);
        if existing.len() == before {
            return Err(http::not_found(format!("http://catalog/packages/{id}")));
        }
        Ok(())
    }

    fn filter(&self, filter: &PackageFilter) -> Result<Vec<CatalogPackage>> {
        self.filters.borrow_mut().push(filter.clone());
        if self.filter_unavailable {
            return Err(http::status(
                "http://catalog/packages",
                503,
                "Service Unavailable",
            ));
        }
        let mut packages: Vec<CatalogPackage> = self
            .existing
            .borrow()
            .iter()
            .filter(|(name, _)| filter.fqn.as_deref().is_none_or(|fqn| fqn == name.as_str()))
            .map(|(name, id)| Self::package(name, id))
            .collect();
        packages.sort_by(|a, b| a.fully_qualified_name.cmp(&b.fully_qualified_name));
        if let Some(limit) = filter.limit {
            packages.truncate(limit);
        }
        Ok(packages)
    }

    fn get(&self, id: &str) -> Result<CatalogPackage> {
        self.existing
            .borrow()
            .iter()
            .find(|(_, existing_id)| existing_id.as_str() == id)
            .map(|(name, id)| Self::package(name, id))
            .ok_or_else(|| http::not_found(format!("http://catalog/packages/{id}")))
    }
}

/// [`ConflictPrompter`] replaying scripted answers; runs out as skip
pub struct ScriptedPrompter {
    answers: VecDeque<ConflictDecision>,
    asked: Rc<RefCell<Vec<String>>>,
}

impl ScriptedPrompter {
    #[must_use]
    pub fn new(answers: &[ConflictDecision]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            asked: Rc::default(),
        }
    }

    /// Handle to the names asked about, usable after the prompter is boxed
    pub fn asked(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.asked)
    }
}

impl ConflictPrompter for ScriptedPrompter {
    fn ask(&mut self, full_name: &str) -> Result<ConflictDecision> {
        self.asked.borrow_mut().push(full_name.to_string());
        Ok(self.answers.pop_front().unwrap_or(ConflictDecision::Skip))
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_temp_dir() {
        let temp = create_temp_dir();
        assert!(temp.path().exists());
    }

    #[test]
    fn test_create_test_files() {
        let temp = create_temp_dir();
        create_test_files(&temp, &[("Classes/app.yaml", "Name: App")]);

        let content = std::fs::read_to_string(temp.path().join("Classes/app.yaml"))
            .expect("Failed to read");
        assert_eq!(content, "Name: App");
    }

    #[test]
    fn test_make_package_opens() {
        let bytes = make_package("first_app", &[("second_app", Some("1.0")), ("third_app", None)]);
        let archive = PackageArchive::from_bytes("first_app", bytes).expect("valid package");
        assert_eq!(archive.full_name(), "first_app");
        assert_eq!(archive.manifest().requires.len(), 2);
    }

    #[test]
    fn test_recording_catalog_conflicts() {
        let catalog = RecordingCatalog::new().with_existing("first_app", "id-1");
        let archive =
            PackageArchive::from_bytes("first_app", make_package("first_app", &[])).expect("valid");

        let err = catalog
            .create(&ImportMetadata::default(), &archive)
            .unwrap_err();
        assert!(matches!(err, crate::error::MuranoError::PackageConflict { .. }));

        catalog.delete("id-1").expect("delete existing");
        catalog
            .create(&ImportMetadata::default(), &archive)
            .expect("create after delete");
        assert_eq!(catalog.creates().len(), 2);
    }
}
