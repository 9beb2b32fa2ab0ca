//! The record produced by a scorer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of evaluating one scorer against one input pair.
///
/// Scores conventionally fall in `0.0..=1.0`, but scorers are free to report
/// values outside that range; use [`Score::is_normalised`] to check.
///
/// # Examples
///
/// ```
/// use scorekit_core::Score;
///
/// let score = Score::new("NumericDiff", 0.5);
/// assert_eq!(score.name, "NumericDiff");
/// assert!(score.is_normalised());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    /// Name of the scorer that produced the value.
    pub name: String,
    /// The computed score.
    pub score: f64,
    /// Free-form annotations attached by the scorer.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, Value>,
}

impl Score {
    /// Construct a score without metadata.
    #[must_use]
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score,
            metadata: BTreeMap::new(),
        }
    }

    /// Attach a metadata entry while consuming `self`.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Report whether the value is finite and within `0.0..=1.0`.
    #[must_use]
    pub fn is_normalised(&self) -> bool {
        self.score.is_finite() && (0.0..=1.0).contains(&self.score)
    }

    /// Render the score as a JSON string.
    ///
    /// # Errors
    /// Returns [`serde_json::Error`] when encoding fails. Non-finite scores
    /// encode as `null`.
    pub fn as_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
