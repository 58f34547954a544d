//! Package-related errors

use super::MuranoError;

/// Creates a package not found error
pub fn not_found(name: impl Into<String>) -> MuranoError {
    MuranoError::PackageNotFound { name: name.into() }
}

/// Creates an invalid package error
pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> MuranoError {
    MuranoError::InvalidPackage {
        name: name.into(),
        reason: reason.into(),
    }
}

/// Creates a package conflict error
pub fn conflict(name: impl Into<String>) -> MuranoError {
    MuranoError::PackageConflict { name: name.into() }
}

/// Creates an import aborted error
pub fn import_aborted(name: impl Into<String>) -> MuranoError {
    MuranoError::ImportAborted { name: name.into() }
}
