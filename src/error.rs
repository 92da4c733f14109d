//! Centralized error handling for boardcheck

use std::fmt;
use std::io;

/// Error type shared by the probe collectors and the config loader
#[derive(Debug)]
pub enum BoardcheckError {
    /// I/O errors (file reading, command execution)
    Io(io::Error),
    /// Parsing errors (unexpected data format)
    Parse(String),
    /// Configuration errors
    Config(String),
    /// Probe errors (command failed or information missing)
    Detection(String),
}

impl fmt::Display for BoardcheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardcheckError::Io(err) => write!(f, "I/O error: {}", err),
            BoardcheckError::Parse(msg) => write!(f, "Parse error: {}", msg),
            BoardcheckError::Config(msg) => write!(f, "Config error: {}", msg),
            BoardcheckError::Detection(msg) => write!(f, "Detection error: {}", msg),
        }
    }
}

impl std::error::Error for BoardcheckError {}

impl From<io::Error> for BoardcheckError {
    fn from(error: io::Error) -> Self {
        BoardcheckError::Io(error)
    }
}

/// Type alias for Results in boardcheck
pub type Result<T> = std::result::Result<T, BoardcheckError>;
