//! Error type shared by the copier and the mock responder

use crate::document::FieldPath;
use std::fmt;
use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Which side of a copy a document plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document {
    Source,
    Destination,
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Document::Source => f.write_str("source"),
            Document::Destination => f.write_str("destination"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File could not be opened or read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// File is not valid JSON or does not have the requested shape
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{document} document has no field at {path}")]
    MissingField { document: Document, path: FieldPath },

    #[error("failed to serialize document: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to bind port {port}: {source}")]
    Bind {
        port: u16,
        #[source]
        source: io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}

impl Error {
    /// Whether the error was caused by a file that does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::Read { source, .. } if source.kind() == io::ErrorKind::NotFound
        )
    }
}
