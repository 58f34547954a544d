//! Bundle lookup: local file, then URL, then `<repo>/bundles/<name>.bundle`

use std::path::{Path, PathBuf};

use tracing::debug;

use super::Bundle;
use crate::error::{Result, bundle, fs};
use crate::fetch::{self, Fetcher};

/// A bundle and, for local files, the directory it was read from
#[derive(Debug, Clone)]
pub struct LocatedBundle {
    pub bundle: Bundle,
    /// Packages stored next to a local bundle are looked up here first
    pub search_dir: Option<PathBuf>,
}

pub struct BundleLocator<'a> {
    fetcher: &'a dyn Fetcher,
    repo_url: String,
}

impl<'a> BundleLocator<'a> {
    pub fn new(fetcher: &'a dyn Fetcher, repo_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            repo_url: repo_url.into(),
        }
    }

    pub fn repository_url(&self, name: &str) -> String {
        fetch::join_url(&self.repo_url, &format!("bundles/{name}.bundle"))
    }

    pub fn locate(&self, identifier: &str) -> Result<LocatedBundle> {
        let path = Path::new(identifier);
        if path.is_file() {
            debug!(bundle = identifier, "using local bundle file");
            let bytes = std::fs::read(path)
                .map_err(|e| fs::read_failed(path.display().to_string(), e.to_string()))?;
            let search_dir = path
                .parent()
                .map(|dir| {
                    if dir.as_os_str().is_empty() {
                        PathBuf::from(".")
                    } else {
                        dir.to_path_buf()
                    }
                });
            return Ok(LocatedBundle {
                bundle: Bundle::from_json(identifier, &bytes)?,
                search_dir,
            });
        }

        let url = if fetch::is_url(identifier) {
            identifier.to_string()
        } else {
            self.repository_url(identifier)
        };
        debug!(bundle = identifier, url = %url, "fetching bundle");

        let bytes = self
            .fetcher
            .fetch(&url)
            .map_err(|e| fetch::map_not_found(e, || bundle::not_found(identifier)))?;
        Ok(LocatedBundle {
            bundle: Bundle::from_json(identifier, &bytes)?,
            search_dir: None,
        })
    }
}
