//! Error types for geoframe

use std::fmt;
use std::io;

/// Result type for geoframe operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building or using a local frame
#[derive(Debug)]
pub enum Error {
    /// A reference origin that cannot anchor a frame (non-finite coordinates)
    InvalidArgument(String),

    /// Failure reported by the projection engine
    Projection(String),

    /// I/O error
    Io(io::Error),

    /// Malformed configuration
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::Projection(msg) => write!(f, "Projection error: {}", msg),
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Config(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::Io(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Config(error.to_string())
    }
}
