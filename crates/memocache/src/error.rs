//! Error types for memocache

use std::fmt;
use std::io;

/// Result type alias for memocache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cache operations
#[derive(Debug)]
pub enum Error {
    /// The backing source failed to produce a value. The underlying error
    /// is carried unchanged; nothing is cached for the failing key.
    Source(Box<dyn std::error::Error + Send + Sync>),

    /// A recency-queue operation received a handle that does not refer to a
    /// live node. This indicates a bookkeeping defect in the caller; the
    /// cache's own handle management never produces it.
    InvalidHandle,
}

impl Error {
    /// Wrap a source failure. Accepts anything convertible into a boxed
    /// error, including plain strings in tests.
    pub fn fetch(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Error::Source(err.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Source(e) => write!(f, "source fetch failed: {}", e),
            Error::InvalidHandle => write!(f, "handle does not refer to a live queue node"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Source(e) => Some(e.as_ref()),
            Error::InvalidHandle => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Source(Box::new(err))
    }
}
