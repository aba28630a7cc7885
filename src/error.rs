use thiserror::Error;

/// Top-level error type for the fieldgen scenario generator.
#[derive(Debug, Error)]
pub enum Error {
    /// A supplied polygon cannot be used as a shape template or field
    /// polygon. Raised at construction time, never from SAT math.
    #[error("invalid polygon: {0}")]
    InvalidPolygon(String),

    /// The rejection sampler hit its attempt cap without finding a
    /// valid pose for `label`.
    #[error("no valid pose found for {label} after {attempts} attempts")]
    PlacementExhausted { label: String, attempts: u32 },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for results using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
