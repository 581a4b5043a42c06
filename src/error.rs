use thiserror::Error;

/// Errors surfaced by the toolkit components.
///
/// The demo scripts never failed on their own; these variants cover the
/// edge cases they left undefined.
#[derive(Debug, Error)]
pub enum RoboError {
    /// An extremal query ran over a catalog with zero records.
    #[error("cannot compute `{query}` over an empty catalog")]
    EmptyCatalog { query: &'static str },

    /// A category/difficulty/cost string outside its closed set.
    #[error("invalid {field}: `{value}`")]
    InvalidEnum { field: &'static str, value: String },

    /// Lengths and speeds must be strictly positive and finite.
    #[error("{field} must be positive, got {value}")]
    NonPositiveConfig { field: &'static str, value: f64 },

    /// The runner spawns its drain on the ambient tokio runtime.
    #[error("task runner requires a tokio runtime")]
    NoRuntime,

    #[error("config io error: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RoboError>;

/// Rejects zero, negative and non-finite values.
pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(RoboError::NonPositiveConfig { field, value })
    }
}
