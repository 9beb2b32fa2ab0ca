//! Error types raised while evaluating a scorer.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors returned by [`Scorer::evaluate`](crate::Scorer::evaluate).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScoreError {
    /// A required input was not supplied, so no score can be computed.
    #[error("{scorer} requires an {input} value")]
    MissingRequiredInput {
        /// Name of the scorer that rejected the call.
        scorer: String,
        /// Name of the absent input.
        input: &'static str,
    },
}

impl ScoreError {
    /// Build a [`ScoreError::MissingRequiredInput`] for the expected value.
    #[must_use]
    pub fn missing_expected(scorer: impl Into<String>) -> Self {
        Self::MissingRequiredInput {
            scorer: scorer.into(),
            input: crate::EXPECTED_INPUT,
        }
    }
}
