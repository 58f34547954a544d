//! Package archive reader
//!
//! A package is a zip container with `manifest.yaml` at its root. The archive
//! keeps its raw bytes so they can be uploaded unchanged.

use std::io::{Cursor, Read};
use std::path::Path;

use zip::ZipArchive;
use zip::result::ZipError;

use super::manifest::{MANIFEST_FILE, PackageManifest};
use crate::error::{Result, fs, package};

/// A package archive together with its parsed manifest
#[derive(Debug, Clone)]
pub struct PackageArchive {
    manifest: PackageManifest,
    bytes: Vec<u8>,
    origin: String,
}

impl PackageArchive {
    /// Open an archive from memory; `origin` names it in errors and logs
    pub fn from_bytes(origin: impl Into<String>, bytes: Vec<u8>) -> Result<Self> {
        let origin = origin.into();
        let manifest = read_manifest(&origin, &bytes)?;
        Ok(Self {
            manifest,
            bytes,
            origin,
        })
    }

    /// Open an archive stored on disk
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .map_err(|e| fs::read_failed(path.display().to_string(), e.to_string()))?;
        Self::from_bytes(path.display().to_string(), bytes)
    }

    pub fn manifest(&self) -> &PackageManifest {
        &self.manifest
    }

    pub fn full_name(&self) -> &str {
        &self.manifest.full_name
    }

    /// Where the archive was read from (path or URL)
    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

fn read_manifest(origin: &str, bytes: &[u8]) -> Result<PackageManifest> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| package::invalid(origin, format!("not a zip archive: {e}")))?;

    let mut entry = archive.by_name(MANIFEST_FILE).map_err(|e| match e {
        ZipError::FileNotFound => package::invalid(origin, format!("{MANIFEST_FILE} is missing")),
        other => package::invalid(origin, other.to_string()),
    })?;

    let mut yaml = String::new();
    entry
        .read_to_string(&mut yaml)
        .map_err(|e| package::invalid(origin, format!("unreadable {MANIFEST_FILE}: {e}")))?;

    PackageManifest::from_yaml(origin, &yaml)
}
