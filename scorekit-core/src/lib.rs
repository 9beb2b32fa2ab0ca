//! Core types shared by every scorekit scorer.
//!
//! A scorer compares a produced value with a reference value and reports a
//! [`Score`]. Scorers implement the [`Scorer`] trait; callers thread extra
//! keyword-style configuration through [`EvalOptions`]. Missing required
//! inputs surface as [`ScoreError`] rather than a degenerate score.

#![forbid(unsafe_code)]

mod error;
mod options;
mod score;
mod scorer;

pub use error::ScoreError;
pub use options::EvalOptions;
pub use score::Score;
pub use scorer::Scorer;

/// Name of the reference input every comparison scorer requires.
pub const EXPECTED_INPUT: &str = "expected";
