//! Configuration and command errors

use super::MuranoError;

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> MuranoError {
    MuranoError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> MuranoError {
    MuranoError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a command error
pub fn command(message: impl Into<String>) -> MuranoError {
    MuranoError::CommandError {
        message: message.into(),
    }
}
