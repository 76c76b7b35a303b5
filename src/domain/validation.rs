use thiserror::Error;

/// Rejection of a [`PlantConfig`](super::PlantConfig) field.
///
/// The message names the offending wire (camelCase) field so the caller can
/// correct the payload.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("field `{0}` must not be blank")]
    EmptyField(&'static str),

    #[error("field `wateringFrequencyDays` must be positive, got {0}")]
    NonPositiveWateringFrequency(i32),
}
