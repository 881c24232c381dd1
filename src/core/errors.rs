//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

use super::{ContributorId, GiveId};

/// Main error type for givebank operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// The input was valid JSON but not a record listing
    #[error("Invalid input shape: {0}")]
    InvalidShape(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The viewer may not see the requested contact details
    #[error("Viewer {viewer} may not reveal contact details of give {give}")]
    Forbidden {
        viewer: ContributorDisplay,
        give: GiveId,
    },

    /// The give does not exist or is not active
    #[error("Give {0} not found")]
    NotFound(GiveId),

    /// An operation required a signed-in session
    #[error("No authenticated session")]
    NotAuthenticated,

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a file system error with path context
    pub fn file_system(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }

    pub fn forbidden(viewer: Option<ContributorId>, give: GiveId) -> Self {
        Self::Forbidden {
            viewer: ContributorDisplay(viewer),
            give,
        }
    }
}

/// Renders an optional viewer id for error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContributorDisplay(pub Option<ContributorId>);

impl std::fmt::Display for ContributorDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(id) => write!(f, "{id}"),
            None => write!(f, "<anonymous>"),
        }
    }
}

/// Result type alias for givebank operations
pub type Result<T> = std::result::Result<T, Error>;
