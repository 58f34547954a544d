//! Package lookup across local files, URLs and a package repository
//!
//! Lookup order, first hit wins:
//! 1. `name` is an existing file
//! 2. `<search_dir>/<name>` exists (packages stored next to a local bundle)
//! 3. `name` is an http(s) URL
//! 4. `<repo_url>/apps/<name>[.<version>].zip`
//!
//! Once a source is chosen its failure is final; a URL that fails is never
//! retried as a repository name.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::{PackageArchive, PackageReference};
use crate::error::{Result, package};
use crate::fetch::{self, Fetcher};

/// Resolves package references to archives
pub struct PackageLocator<'a> {
    fetcher: &'a dyn Fetcher,
    repo_url: String,
    search_dir: Option<PathBuf>,
}

impl<'a> PackageLocator<'a> {
    pub fn new(fetcher: &'a dyn Fetcher, repo_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            repo_url: repo_url.into(),
            search_dir: None,
        }
    }

    /// Also look for packages named by full name inside `dir`
    pub fn with_search_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.search_dir = dir;
        self
    }

    /// Repository URL for a bare package name
    pub fn repository_url(&self, reference: &PackageReference) -> String {
        let file_name = match &reference.version {
            Some(version) => format!("{}.{}.zip", reference.name, version),
            None => format!("{}.zip", reference.name),
        };
        fetch::join_url(&self.repo_url, &format!("apps/{file_name}"))
    }

    /// Locate and open the archive for `reference`
    pub fn locate(&self, reference: &PackageReference) -> Result<PackageArchive> {
        let path = Path::new(&reference.name);
        if path.is_file() {
            debug!(package = %reference, path = %path.display(), "using local file");
            return PackageArchive::from_path(path);
        }

        if let Some(candidate) = self.sibling_file(&reference.name) {
            debug!(package = %reference, path = %candidate.display(), "using file next to bundle");
            return PackageArchive::from_path(&candidate);
        }

        if fetch::is_url(&reference.name) {
            debug!(package = %reference, "fetching by URL");
            return self.download(&reference.name, &reference.name);
        }

        let url = self.repository_url(reference);
        debug!(package = %reference, url = %url, "fetching from repository");
        self.download(&url, &reference.name)
    }

    fn sibling_file(&self, name: &str) -> Option<PathBuf> {
        let dir = self.search_dir.as_ref()?;
        let candidate = dir.join(name);
        candidate.is_file().then_some(candidate)
    }

    fn download(&self, url: &str, name: &str) -> Result<PackageArchive> {
        let bytes = self
            .fetcher
            .fetch(url)
            .map_err(|e| fetch::map_not_found(e, || package::not_found(name)))?;
        PackageArchive::from_bytes(url, bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MuranoError;
    use crate::test_fixtures::{MapFetcher, create_temp_dir, make_package};

    const REPO: &str = "http://127.0.0.1";

    #[test]
    fn test_repository_url() {
        let fetcher = MapFetcher::new();
        let locator = PackageLocator::new(&fetcher, "http://127.0.0.1/");

        assert_eq!(
            locator.repository_url(&PackageReference::new("first_app")),
            "http://127.0.0.1/apps/first_app.zip"
        );
        assert_eq!(
            locator.repository_url(&PackageReference::with_version(
                "second_app",
                Some("1.0".to_string())
            )),
            "http://127.0.0.1/apps/second_app.1.0.zip"
        );
    }

    #[test]
    fn test_locate_local_file() {
        let temp = create_temp_dir();
        let path = temp.path().join("app.zip");
        std::fs::write(&path, make_package("io.test.App", &[])).unwrap();

        let fetcher = MapFetcher::new();
        let locator = PackageLocator::new(&fetcher, REPO);
        let archive = locator
            .locate(&PackageReference::new(path.display().to_string()))
            .unwrap();

        assert_eq!(archive.full_name(), "io.test.App");
        assert!(fetcher.requested().is_empty());
    }

    #[test]
    fn test_locate_by_url() {
        let url = "http://127.0.0.1/test_package.zip";
        let fetcher = MapFetcher::new().with(url, make_package("test_package", &[]));
        let locator = PackageLocator::new(&fetcher, REPO);

        let archive = locator.locate(&PackageReference::new(url)).unwrap();
        assert_eq!(archive.full_name(), "test_package");
        assert_eq!(fetcher.requested(), vec![url.to_string()]);
    }

    #[test]
    fn test_locate_by_name() {
        let fetcher = MapFetcher::new().with(
            "http://127.0.0.1/apps/io.test.apps.test_application.zip",
            make_package("io.test.apps.test_application", &[]),
        );
        let locator = PackageLocator::new(&fetcher, REPO);

        let archive = locator
            .locate(&PackageReference::new("io.test.apps.test_application"))
            .unwrap();
        assert_eq!(archive.full_name(), "io.test.apps.test_application");
    }

    #[test]
    fn test_locate_by_name_and_version() {
        let fetcher = MapFetcher::new().with(
            "http://127.0.0.1/apps/second_app.1.0.zip",
            make_package("second_app", &[]),
        );
        let locator = PackageLocator::new(&fetcher, REPO);

        let reference = PackageReference::with_version("second_app", Some("1.0".to_string()));
        assert_eq!(locator.locate(&reference).unwrap().full_name(), "second_app");
    }

    #[test]
    fn test_missing_url_is_not_found() {
        let fetcher = MapFetcher::new();
        let locator = PackageLocator::new(&fetcher, REPO);

        let err = locator
            .locate(&PackageReference::new("http://127.0.0.2/missing.zip"))
            .unwrap_err();
        assert!(matches!(err, MuranoError::PackageNotFound { .. }));
        // A failed URL is not retried against the repository
        assert_eq!(fetcher.requested().len(), 1);
    }

    #[test]
    fn test_missing_name_is_not_found() {
        let fetcher = MapFetcher::new();
        let locator = PackageLocator::new(&fetcher, REPO);

        let err = locator.locate(&PackageReference::new("ghost")).unwrap_err();
        assert!(matches!(err, MuranoError::PackageNotFound { ref name } if name == "ghost"));
    }

    #[test]
    fn test_server_error_is_not_masked() {
        let fetcher = MapFetcher::new().failing("http://127.0.0.1/apps/flaky.zip", 503);
        let locator = PackageLocator::new(&fetcher, REPO);

        let err = locator.locate(&PackageReference::new("flaky")).unwrap_err();
        assert!(matches!(err, MuranoError::HttpStatus { status: 503, .. }));
    }

    #[test]
    fn test_search_dir_wins_over_repository() {
        let temp = create_temp_dir();
        std::fs::write(temp.path().join("first_app"), make_package("first_app", &[])).unwrap();

        let fetcher = MapFetcher::new().with(
            "http://127.0.0.1/apps/first_app.zip",
            make_package("remote_first_app", &[]),
        );
        let locator =
            PackageLocator::new(&fetcher, REPO).with_search_dir(Some(temp.path().to_path_buf()));

        let archive = locator.locate(&PackageReference::new("first_app")).unwrap();
        assert_eq!(archive.full_name(), "first_app");
        assert!(fetcher.requested().is_empty());
    }

    #[test]
    fn test_search_dir_ignores_zip_suffix() {
        let temp = create_temp_dir();
        std::fs::write(
            temp.path().join("first_app.zip"),
            make_package("first_app", &[]),
        )
        .unwrap();

        let fetcher = MapFetcher::new();
        let locator =
            PackageLocator::new(&fetcher, REPO).with_search_dir(Some(temp.path().to_path_buf()));

        let err = locator.locate(&PackageReference::new("first_app")).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(
            fetcher.requested(),
            vec!["http://127.0.0.1/apps/first_app.zip".to_string()]
        );
    }

    #[test]
    fn test_invalid_download_is_format_error() {
        let fetcher =
            MapFetcher::new().with("http://127.0.0.1/apps/junk.zip", b"<html>".to_vec());
        let locator = PackageLocator::new(&fetcher, REPO);

        let err = locator.locate(&PackageReference::new("junk")).unwrap_err();
        assert!(matches!(err, MuranoError::InvalidPackage { .. }));
    }
}
