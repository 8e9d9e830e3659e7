//! Error types for catalogue loading.

use std::path::PathBuf;

use pyq_model::ValidationError;
use thiserror::Error;

/// Errors that can occur while reading or validating a catalogue.
#[derive(Debug, Error)]
pub enum CatalogueError {
    /// Failed to read the catalogue file.
    #[error("failed to read catalogue {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a JSON array of chapters.
    #[error("invalid catalogue JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A record failed validation; nothing was loaded.
    #[error("invalid catalogue: {0}")]
    Validation(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, CatalogueError>;
