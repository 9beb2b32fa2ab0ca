//! Facade crate for scorekit.
//!
//! This crate re-exports the core scoring types and exposes scorer
//! implementations behind feature flags.

#![forbid(unsafe_code)]

pub use scorekit_core::{EXPECTED_INPUT, EvalOptions, Score, ScoreError, Scorer};

#[cfg(feature = "numeric")]
pub use scorekit_scorer::{NumericDiff, numeric_diff};
