use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown saved-content type: `{0}`")]
    UnknownContentType(String),
    #[error("domain invariant violation: {0}")]
    InvariantViolation(String),
}

/// Failure while turning raw forecast payloads into display-ready points.
///
/// A wholly absent series is *not* an error (the adapter returns an empty
/// sequence); these variants cover entries that are present but malformed,
/// which fail the whole computation rather than leak NaN into scoring.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ForecastError {
    #[error("forecast entry {index} has an unparseable timestamp `{raw}`")]
    BadTimestamp { index: usize, raw: String },
    #[error("forecast entry {index} is missing its weather condition")]
    MissingCondition { index: usize },
}
