//! Error types for the reading engine.

/// Errors that can occur while drawing a reading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReadingError {
    /// The requested spread key is not in the spread catalog.
    #[error("unknown spread: {0}")]
    UnknownSpread(String),

    /// A reading config could not be parsed or failed validation.
    #[error("invalid reading config: {0}")]
    InvalidConfig(String),
}

/// Convenience result type for reading operations.
pub type ReadingResult<T> = Result<T, ReadingError>;
