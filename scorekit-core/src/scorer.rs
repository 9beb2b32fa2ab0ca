//! Compare a produced value against a reference value.
//!
//! The `Scorer` trait is the single seam between a scorer implementation and
//! whatever harness dispatches evaluations to it.

use crate::{EvalOptions, Score, ScoreError};

/// Evaluate a produced value against an expected one.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so one scorer can
/// serve evaluations running across threads. They must not clamp or coerce
/// missing inputs: a required value that is absent is reported as a
/// [`ScoreError`] instead of a low score.
///
/// # Examples
///
/// ```rust
/// use scorekit_core::{EvalOptions, Score, ScoreError, Scorer};
///
/// struct ExactMatch;
///
/// impl Scorer for ExactMatch {
///     type Value = str;
///
///     fn name(&self) -> &str {
///         "ExactMatch"
///     }
///
///     fn evaluate_with(
///         &self,
///         output: &str,
///         expected: Option<&str>,
///         _options: &EvalOptions,
///     ) -> Result<Score, ScoreError> {
///         let expected = expected.ok_or_else(|| ScoreError::missing_expected(self.name()))?;
///         let value = if output == expected { 1.0 } else { 0.0 };
///         Ok(Score::new(self.name(), value))
///     }
/// }
///
/// let score = ExactMatch.evaluate("a", Some("a")).expect("expected is present");
/// assert_eq!(score.score, 1.0);
/// assert!(ExactMatch.evaluate("a", None).is_err());
/// ```
pub trait Scorer: Send + Sync {
    /// Type of the values being compared.
    type Value: ?Sized;

    /// Name used to label the scores this scorer produces.
    fn name(&self) -> &str;

    /// Score `output` against `expected`, honouring any `options` the
    /// scorer understands.
    ///
    /// # Errors
    /// Returns [`ScoreError::MissingRequiredInput`] when `expected` is
    /// required but absent.
    fn evaluate_with(
        &self,
        output: &Self::Value,
        expected: Option<&Self::Value>,
        options: &EvalOptions,
    ) -> Result<Score, ScoreError>;

    /// Score `output` against `expected` with no extra options.
    ///
    /// # Errors
    /// Propagates errors from [`Scorer::evaluate_with`].
    fn evaluate(
        &self,
        output: &Self::Value,
        expected: Option<&Self::Value>,
    ) -> Result<Score, ScoreError> {
        self.evaluate_with(output, expected, &EvalOptions::new())
    }
}
