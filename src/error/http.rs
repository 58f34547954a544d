//! HTTP errors

use super::MuranoError;

/// Creates an unexpected status error
pub fn status(url: impl Into<String>, status: u16, reason: impl Into<String>) -> MuranoError {
    MuranoError::HttpStatus {
        url: url.into(),
        status,
        reason: reason.into(),
    }
}

/// Creates a remote resource not found error
pub fn not_found(url: impl Into<String>) -> MuranoError {
    MuranoError::ResourceNotFound { url: url.into() }
}

/// Creates a transport error
pub fn transport(url: impl Into<String>, reason: impl Into<String>) -> MuranoError {
    MuranoError::Transport {
        url: url.into(),
        reason: reason.into(),
    }
}
