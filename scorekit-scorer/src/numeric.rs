//! Relative-difference scoring for numeric values.
//!
//! The score is `1 - |expected - output| / max(|expected|, |output|)`, with
//! two zeros treated as an exact match. Inputs of opposite sign can push the
//! value below zero; the result is reported as computed and never clamped.

#![forbid(unsafe_code)]

use std::borrow::Cow;

use scorekit_core::{EvalOptions, Score, ScoreError, Scorer};

const DEFAULT_NAME: &str = "NumericDiff";

/// Scorer that compares numbers by their relative difference.
///
/// The scorer is stateless apart from its display name and can be shared
/// freely across threads.
///
/// # Examples
///
/// ```
/// use scorekit_core::{ScoreError, Scorer};
/// use scorekit_scorer::NumericDiff;
///
/// let scorer = NumericDiff::with_name("latency");
/// let score = scorer.evaluate(&0.0, Some(&0.0)).expect("expected is present");
/// assert_eq!(score.name, "latency");
/// assert_eq!(score.score, 1.0);
///
/// let err = scorer.evaluate(&3.0, None).expect_err("expected is missing");
/// assert!(matches!(err, ScoreError::MissingRequiredInput { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericDiff {
    name: Cow<'static, str>,
}

impl NumericDiff {
    /// Construct a scorer labelled `NumericDiff`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            name: Cow::Borrowed(DEFAULT_NAME),
        }
    }

    /// Construct a scorer with a custom display name.
    #[must_use]
    pub fn with_name(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for NumericDiff {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer for NumericDiff {
    type Value = f64;

    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate_with(
        &self,
        output: &f64,
        expected: Option<&f64>,
        _options: &EvalOptions,
    ) -> Result<Score, ScoreError> {
        let Some(&reference) = expected else {
            return Err(ScoreError::missing_expected(self.name()));
        };
        let value = numeric_diff(*output, reference);
        log::debug!("{} scored {value} (output {output}, expected {reference})", self.name);
        Ok(Score::new(self.name(), value))
    }
}

/// Compute the relative-difference score of `output` against `expected`.
///
/// Returns `1.0` when both values are zero, including signed zeros.
/// Non-finite inputs follow IEEE arithmetic, so a `NaN` operand yields `NaN`.
///
/// # Examples
///
/// ```
/// use scorekit_scorer::numeric_diff;
///
/// assert_eq!(numeric_diff(10.0, 5.0), 0.5);
/// assert_eq!(numeric_diff(0.0, 5.0), 0.0);
/// assert_eq!(numeric_diff(-5.0, 5.0), -1.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the score is a ratio of absolute differences"
)]
pub const fn numeric_diff(output: f64, expected: f64) -> f64 {
    if expected == 0.0 && output == 0.0 {
        return 1.0;
    }
    1.0 - (expected - output).abs() / expected.abs().max(output.abs())
}
