#![cfg(feature = "control")]
//! Unit tests for LeftProjection and RightProjection.
//!
//! A projection is a one-sided monadic view of an `Either`:
//!
//! - `bind`, `map` and `each` act only when the projected side is active
//! - `all` is vacuously true on the other side, `any` is false
//! - `select` answers with `Optional<Either<L, R>>`

use kleisli::control::{Either, LeftProjection, NoSuchElementError, Optional, RightProjection};
use kleisli::typeclass::{Monad, MonadEmpty};
use rstest::rstest;

type Outcome = Either<&'static str, i32>;

const ERROR: Outcome = Either::Left("error");
const ANSWER: Outcome = Either::Right(42);

// =============================================================================
// flat_map
// =============================================================================

#[rstest]
fn flat_map_for_left_and_right_projections_returns_eithers() {
    let right: Either<String, i32> = Either::Right(42);
    let left: Either<String, i32> = Either::Left("error".to_string());

    assert_eq!(
        right
            .clone()
            .right()
            .flat_map(|n| Either::<String, i32>::Left(n.to_string()).right())
            .into_either(),
        Either::<String, i32>::Left("42".to_string())
    );
    assert_eq!(
        right
            .clone()
            .left()
            .flat_map(|s| Either::<String, i32>::Left(s.to_uppercase()).left())
            .into_either(),
        right
    );
    assert_eq!(
        left.clone()
            .left()
            .flat_map(|s| Either::<String, i32>::Right(i32::try_from(s.len()).unwrap_or(0)).left())
            .into_either(),
        Either::<String, i32>::Right(5)
    );
    assert_eq!(
        left.clone()
            .right()
            .flat_map(|n| Either::<String, i32>::Right(n + 1).right())
            .into_either(),
        left
    );
}

// =============================================================================
// any / all
// =============================================================================

#[rstest]
fn any_is_true_only_for_matching_side_and_predicate() {
    assert!(ERROR.left().any(|s| *s == "error"));
    assert!(!ERROR.left().any(|s| *s != "error"));
    assert!(!ERROR.right().any(|_| true));

    assert!(ANSWER.right().any(|n| *n == 42));
    assert!(!ANSWER.right().any(|n| *n != 42));
    assert!(!ANSWER.left().any(|_| true));
}

#[rstest]
fn all_is_vacuously_true_on_other_side() {
    assert!(ERROR.left().all(|s| *s == "error"));
    assert!(!ERROR.left().all(|s| *s != "error"));
    assert!(ERROR.right().all(|_| false));

    assert!(ANSWER.right().all(|n| *n == 42));
    assert!(!ANSWER.right().all(|n| *n != 42));
    assert!(ANSWER.left().all(|_| false));
}

// =============================================================================
// select
// =============================================================================

#[rstest]
#[case(ERROR.left().select(|s| *s == "error"), Optional::Present(ERROR))]
#[case(ERROR.left().select(|s| *s != "error"), Optional::Empty)]
#[case(ERROR.right().select(|_| true), Optional::Empty)]
#[case(ANSWER.right().select(|n| *n == 42), Optional::Present(ANSWER))]
#[case(ANSWER.right().select(|n| *n != 42), Optional::Empty)]
#[case(ANSWER.left().select(|_| true), Optional::Empty)]
fn select_escapes_to_optional_of_either(
    #[case] actual: Optional<Outcome>,
    #[case] expected: Optional<Outcome>,
) {
    assert_eq!(actual, expected);
}

// =============================================================================
// each
// =============================================================================

fn side_effect_occurred_on_each<P>(projection: P) -> bool
where
    P: Monad,
{
    let mut side_effect_occurred = false;
    projection.each(|_| side_effect_occurred = true);
    side_effect_occurred
}

#[rstest]
fn each_runs_only_for_matching_side() {
    assert!(side_effect_occurred_on_each(ERROR.left()));
    assert!(!side_effect_occurred_on_each(ERROR.right()));

    assert!(side_effect_occurred_on_each(ANSWER.right()));
    assert!(!side_effect_occurred_on_each(ANSWER.left()));
}

// =============================================================================
// unit / empty
// =============================================================================

#[rstest]
fn unit_for_left_and_right_projections() {
    assert_eq!(<LeftProjection<(), i32>>::unit("error"), ERROR.left());
    assert_eq!(<RightProjection<&str, ()>>::unit(42), ANSWER.right());
}

#[rstest]
fn empty_for_left_and_right_projections() {
    let left_empty: LeftProjection<&str, Option<i32>> = <LeftProjection<(), Option<i32>>>::empty();
    assert_eq!(left_empty, Either::<&str, Option<i32>>::Right(None).left());

    let right_empty: RightProjection<Option<&str>, i32> =
        <RightProjection<Option<&str>, ()>>::empty();
    assert_eq!(right_empty, Either::<Option<&str>, i32>::Left(None).right());
}

// =============================================================================
// get
// =============================================================================

#[rstest]
fn get_returns_value_for_matching_side_or_fails() {
    assert_eq!(ERROR.left().get(), Ok("error"));
    assert_eq!(
        ERROR.right().get(),
        Err(NoSuchElementError::new("RightProjection", "Right", "Left"))
    );
    assert_eq!(ANSWER.right().get(), Ok(42));
    assert_eq!(
        ANSWER.left().get(),
        Err(NoSuchElementError::new("LeftProjection", "Left", "Right"))
    );
}

#[rstest]
fn no_such_element_is_matchable() {
    let recovered = match ANSWER.left().get() {
        Ok(message) => message.len(),
        Err(NoSuchElementError { container, .. }) => container.len(),
    };
    assert_eq!(recovered, "LeftProjection".len());
}
