use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the core services layer.
///
/// Only persistence writes surface errors; every read path in this crate
/// degrades to empty or sentinel values instead.
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),
    /// JSON encoding failed
    Serialize(serde_json::Error),
    /// Configuration/path resolution failed
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Serialize(err) => write!(f, "serialization error: {}", err),
            Error::Config(msg) => write!(f, "config error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Serialize(err) => Some(err),
            Error::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialize(err)
    }
}
