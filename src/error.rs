//! Error types for rs-feedpost.
//!
//! Extraction itself never fails: unresolved content degrades to `None` or to
//! an empty field. Errors only arise at the edges, when a snapshot is built or
//! a report is serialized.

/// Error type for snapshot construction and report output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document location handed in by the driver is not an absolute URL.
    #[error("Invalid document location {location:?}: {source}")]
    InvalidLocation {
        location: String,
        #[source]
        source: url::ParseError,
    },

    /// A report or profile could not be serialized.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for fallible operations.
pub type Result<T> = std::result::Result<T, Error>;
