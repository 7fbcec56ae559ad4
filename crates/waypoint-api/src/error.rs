use thiserror::Error;

/// Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, SyncError>;

/// Failure taxonomy of the synchronization core.
///
/// `Http` keeps the transport status and a truncated response body instead of
/// collapsing every transport failure to a generic sentence; the generic
/// fallbacks only apply at the presentation boundary (see `FetchError`).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SyncError {
    /// A catalog or user-list read failed.
    #[error("{message}")]
    Load { message: String },

    /// A save of the selection list failed.
    #[error("{message}")]
    Persist { message: String },

    /// Transport-level non-success response.
    #[error("HTTP {status} error from {url}: {body}")]
    Http {
        status: u16,
        url: String,
        body: String,
    },

    /// The one-shot position lookup never resolved (denied or timed out).
    /// Not a hard error: distance ordering stays pending.
    #[error("current position is unavailable")]
    LocationUnavailable,

    /// Local store I/O or serialization failure.
    #[error("storage error: {message}")]
    Storage { message: String },
}

impl SyncError {
    pub fn load(message: impl Into<String>) -> Self {
        SyncError::Load {
            message: message.into(),
        }
    }

    pub fn persist(message: impl Into<String>) -> Self {
        SyncError::Persist {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        SyncError::Storage {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for SyncError {
    fn from(err: std::io::Error) -> Self {
        SyncError::storage(err.to_string())
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        SyncError::storage(err.to_string())
    }
}
