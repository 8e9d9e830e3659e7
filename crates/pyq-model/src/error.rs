use thiserror::Error;

/// A catalogue record that cannot be accepted at load time.
///
/// A load that produces any of these is rejected wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The year table has no entry for a year in the fixed range.
    #[error("chapter '{chapter}' has no question count for {year}")]
    MissingYear { chapter: String, year: u16 },

    /// The year table has a key that is not a year in the fixed range.
    #[error("chapter '{chapter}' has an unexpected year key '{key}'")]
    UnknownYear { chapter: String, key: String },

    /// Two keys of the year table name the same year (e.g. `"2025"` and
    /// `" 2025"`).
    #[error("chapter '{chapter}' has more than one question count for {year}")]
    DuplicateYear { chapter: String, year: u16 },

    /// Two records share an id.
    #[error("duplicate chapter id '{id}'")]
    DuplicateId { id: String },

    /// A record has a blank id.
    #[error("chapter at position {index} has an empty id")]
    EmptyId { index: usize },
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid chapter JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, ModelError>;
