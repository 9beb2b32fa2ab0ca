//! Scorer implementations for scorekit.
//!
//! [`NumericDiff`] compares two numbers by the percentage difference of the
//! smaller magnitude from the larger one. It implements the
//! [`Scorer`](scorekit_core::Scorer) trait so callers can dispatch it alongside
//! other scorers.
//!
//! # Examples
//!
//! ```
//! use scorekit_core::Scorer;
//! use scorekit_scorer::NumericDiff;
//!
//! let score = NumericDiff::new()
//!     .evaluate(&10.0, Some(&5.0))
//!     .expect("expected value is present");
//! assert_eq!(score.name, "NumericDiff");
//! assert_eq!(score.score, 0.5);
//! ```

#![forbid(unsafe_code)]

mod numeric;

pub use numeric::{NumericDiff, numeric_diff};
