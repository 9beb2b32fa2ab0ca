#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for numeric difference scoring.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use scorekit_core::{Score, ScoreError, Scorer};
use scorekit_scorer::NumericDiff;

/// Aggregate fixtures shared across the BDD scenarios.
pub struct TestContext {
    scorer: RefCell<Option<NumericDiff>>,
    outcome: RefCell<Option<Result<Score, ScoreError>>>,
}

#[fixture]
/// Build a fresh `TestContext` for each scenario run.
pub fn context() -> TestContext {
    TestContext {
        scorer: RefCell::new(None),
        outcome: RefCell::new(None),
    }
}

#[given("a numeric difference scorer")]
fn default_scorer(context: &TestContext) {
    *context.scorer.borrow_mut() = Some(NumericDiff::new());
}

#[given("a numeric difference scorer named \"latency\"")]
fn latency_scorer(context: &TestContext) {
    *context.scorer.borrow_mut() = Some(NumericDiff::with_name("latency"));
}

#[when("I score an output of 10 against an expected value of 5")]
fn score_ten_against_five(context: &TestContext) {
    evaluate(context, 10.0, Some(5.0));
}

#[when("I score an output of 0 against an expected value of 0")]
fn score_zero_against_zero(context: &TestContext) {
    evaluate(context, 0.0, Some(0.0));
}

#[when("I score an output of 0 against an expected value of 5")]
fn score_zero_against_five(context: &TestContext) {
    evaluate(context, 0.0, Some(5.0));
}

#[when("I score an output of -5 against an expected value of 5")]
fn score_negative_against_positive(context: &TestContext) {
    evaluate(context, -5.0, Some(5.0));
}

#[when("I score an output of 3 without an expected value")]
fn score_without_expected(context: &TestContext) {
    evaluate(context, 3.0, None);
}

#[then("the score is 0.5")]
fn assert_half(context: &TestContext) {
    assert_score(context, 0.5);
}

#[then("the score is 1")]
fn assert_one(context: &TestContext) {
    assert_score(context, 1.0);
}

#[then("the score is 0")]
fn assert_zero(context: &TestContext) {
    assert_score(context, 0.0);
}

#[then("the score is -1")]
fn assert_minus_one(context: &TestContext) {
    assert_score(context, -1.0);
}

#[then("the score is flagged as outside the unit range")]
fn assert_not_normalised(context: &TestContext) {
    let outcome = context.outcome.borrow();
    let score = outcome
        .as_ref()
        .expect("scoring should have run")
        .as_ref()
        .expect("scoring should succeed");
    assert!(!score.is_normalised());
}

#[then("scoring fails because \"latency\" requires an expected value")]
fn assert_missing_expected(context: &TestContext) {
    let outcome = context.outcome.borrow();
    let err = outcome
        .as_ref()
        .expect("scoring should have run")
        .as_ref()
        .expect_err("scoring should fail");
    assert_eq!(err, &ScoreError::missing_expected("latency"));
}

fn evaluate(context: &TestContext, output: f64, expected: Option<f64>) {
    let guard = context.scorer.borrow();
    let scorer = guard.as_ref().expect("scorer must be initialised");
    let outcome = scorer.evaluate(&output, expected.as_ref());
    *context.outcome.borrow_mut() = Some(outcome);
}

fn assert_score(context: &TestContext, want: f64) {
    let outcome = context.outcome.borrow();
    let score = outcome
        .as_ref()
        .expect("scoring should have run")
        .as_ref()
        .expect("scoring should succeed");
    assert_eq!(score.score, want, "unexpected score for {}", score.name);
}

#[scenario(path = "tests/features/numeric_diff.feature", index = 0)]
fn half_difference_scores_half(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/numeric_diff.feature", index = 1)]
fn zeros_match_exactly(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/numeric_diff.feature", index = 2)]
fn zero_against_nonzero_scores_nothing(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/numeric_diff.feature", index = 3)]
fn opposite_signs_go_negative(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/numeric_diff.feature", index = 4)]
fn missing_expected_is_rejected(context: TestContext) {
    let _ = context;
}
