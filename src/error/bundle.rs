//! Bundle-related errors

use super::MuranoError;

/// Creates a bundle not found error
pub fn not_found(name: impl Into<String>) -> MuranoError {
    MuranoError::BundleNotFound { name: name.into() }
}

/// Creates an invalid bundle error
pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> MuranoError {
    MuranoError::InvalidBundle {
        name: name.into(),
        reason: reason.into(),
    }
}
