/// Errors returned by the metric and normalization entry points.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MetricsError {
    /// The input could not be interpreted as Unicode text.
    #[error("input is not valid text: {0}")]
    InvalidText(String),

    /// The reference has no tokens (after normalization, when enabled), so the
    /// error rate has no denominator.
    #[error("reference text is empty after normalization")]
    EmptyReference,

    #[error("invalid metric options: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, MetricsError>;
