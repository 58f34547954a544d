//! Error types and handling for the Murano client
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`package`]: Package lookup, format and conflict errors
//! - [`bundle`]: Bundle lookup and format errors
//! - [`http`]: Remote service and repository errors
//! - [`config`]: Configuration and command errors
//! - [`fs`]: File system errors

pub mod bundle;
pub mod config;
pub mod fs;
pub mod http;
pub mod package;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Murano client operations
#[derive(Error, Diagnostic, Debug)]
pub enum MuranoError {
    // Package errors
    #[error("Package '{name}' not found")]
    #[diagnostic(
        code(murano::package::not_found),
        help("Check the package name, path or URL and the --murano-repo-url setting")
    )]
    PackageNotFound { name: String },

    #[error("Invalid package '{name}': {reason}")]
    #[diagnostic(
        code(murano::package::invalid),
        help("A package must be a zip archive with a manifest.yaml declaring FullName")
    )]
    InvalidPackage { name: String, reason: String },

    #[error("Package with name '{name}' already exists")]
    #[diagnostic(
        code(murano::package::conflict),
        help("Use --exists-action to skip, update or abort on existing packages")
    )]
    PackageConflict { name: String },

    #[error("Import aborted on existing package '{name}'")]
    #[diagnostic(code(murano::package::import_aborted))]
    ImportAborted { name: String },

    // Bundle errors
    #[error("Bundle '{name}' not found")]
    #[diagnostic(
        code(murano::bundle::not_found),
        help("Check the bundle name, path or URL and the --murano-repo-url setting")
    )]
    BundleNotFound { name: String },

    #[error("Invalid bundle '{name}': {reason}")]
    #[diagnostic(
        code(murano::bundle::invalid),
        help("A bundle is a JSON document with a 'Packages' list of {{Name, Version}} entries")
    )]
    InvalidBundle { name: String, reason: String },

    // HTTP errors
    #[error("Request to {url} failed with status {status}: {reason}")]
    #[diagnostic(code(murano::http::status))]
    HttpStatus {
        url: String,
        status: u16,
        reason: String,
    },

    #[error("Resource not found: {url}")]
    #[diagnostic(code(murano::http::not_found))]
    ResourceNotFound { url: String },

    #[error("Failed to reach {url}: {reason}")]
    #[diagnostic(
        code(murano::http::transport),
        help("Check that the URL is correct and the service is reachable")
    )]
    Transport { url: String, reason: String },

    // Configuration errors
    #[error("{message}")]
    #[diagnostic(code(murano::command::error))]
    CommandError { message: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(murano::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(murano::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(murano::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(murano::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(murano::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Archive operation failed: {reason}")]
    #[diagnostic(code(murano::fs::archive_failed))]
    ArchiveFailed { reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(murano::fs::io_error))]
    IoError { message: String },
}

impl MuranoError {
    /// True for the "not found" family, which a batch import logs and skips
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            MuranoError::PackageNotFound { .. }
                | MuranoError::BundleNotFound { .. }
                | MuranoError::ResourceNotFound { .. }
                | MuranoError::FileNotFound { .. }
        )
    }
}

impl From<std::io::Error> for MuranoError {
    fn from(err: std::io::Error) -> Self {
        MuranoError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for MuranoError {
    fn from(err: serde_yaml::Error) -> Self {
        MuranoError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for MuranoError {
    fn from(err: serde_json::Error) -> Self {
        MuranoError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for MuranoError {
    fn from(err: reqwest::Error) -> Self {
        MuranoError::Transport {
            url: err.url().map(ToString::to_string).unwrap_or_default(),
            reason: err.to_string(),
        }
    }
}

impl From<zip::result::ZipError> for MuranoError {
    fn from(err: zip::result::ZipError) -> Self {
        MuranoError::ArchiveFailed {
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for MuranoError {
    fn from(err: inquire::InquireError) -> Self {
        MuranoError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, MuranoError>;
