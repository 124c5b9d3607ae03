//! Aggregate combinators over collections of [`Outcome`]s.
//!
//! Two disciplines live here. [`sequence`] answers "did everything succeed,
//! stop at the first problem" (fail-fast, left-to-right). [`traverse`]
//! answers "check everything, report every problem" (fail-collect). Both
//! preserve input order in their output lists.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{sequence, traverse, Outcome};
//!
//! let outcomes = vec![
//!     Outcome::<i32, &str>::success(1),
//!     Outcome::failure("a"),
//!     Outcome::failure("b"),
//! ];
//!
//! assert_eq!(sequence(outcomes.clone()), Outcome::failure("a"));
//!
//! let collected = traverse(outcomes);
//! assert_eq!(collected.into_error().unwrap().as_slice(), ["a", "b"]);
//! ```

use smallvec::SmallVec;

use crate::alloc_type::Vec;
use crate::outcome::Outcome;

/// SmallVec-backed list used for accumulated failures.
///
/// Uses inline storage for one element so the common single-error case
/// stays off the heap.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

/// Combines three outcomes into a triple, keeping the first failure.
///
/// Right-associated [`Outcome::zip`] composition; failures win
/// left-to-right.
///
/// # Examples
///
/// ```
/// use outcome_rail::{zip3, Outcome};
///
/// let triple = zip3(
///     Outcome::<_, &str>::success(1),
///     Outcome::success("two"),
///     Outcome::success(3.0),
/// );
/// assert_eq!(triple, Outcome::success((1, "two", 3.0)));
///
/// let failed = zip3(
///     Outcome::<i32, _>::failure("first"),
///     Outcome::<i32, _>::success(2),
///     Outcome::<i32, _>::failure("third"),
/// );
/// assert_eq!(failed, Outcome::failure("first"));
/// ```
#[must_use]
#[inline]
pub fn zip3<A, B, C, E>(
    a: Outcome<A, E>,
    b: Outcome<B, E>,
    c: Outcome<C, E>,
) -> Outcome<(A, B, C), E> {
    a.zip(b.zip(c)).map(|(a, (b, c))| (a, b, c))
}

/// Reduces a list of outcomes fail-fast: first failure wins.
///
/// Iterates in order and returns the first `Failure` encountered,
/// abandoning the rest; if every input is a `Success`, returns the values
/// in input order.
///
/// # Arguments
///
/// * `outcomes` - The outcomes to reduce, checked left to right
///
/// # Examples
///
/// ```
/// use outcome_rail::{sequence, Outcome};
///
/// let all: Outcome<Vec<i32>, &str> =
///     sequence(vec![Outcome::success(1), Outcome::success(2)]);
/// assert_eq!(all, Outcome::success(vec![1, 2]));
/// ```
#[must_use]
pub fn sequence<T, E, I>(outcomes: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    outcomes.into_iter().collect()
}

/// Reduces a list of outcomes fail-collect: every failure is reported.
///
/// Never fail-fast. Partitions the input into successes and failures; if
/// any failure exists, returns all of them in input order, otherwise all
/// values in input order.
///
/// # Arguments
///
/// * `outcomes` - The outcomes to partition, in order
///
/// # Examples
///
/// ```
/// use outcome_rail::{traverse, Outcome};
///
/// let report = traverse(vec![
///     Outcome::<i32, &str>::success(1),
///     Outcome::failure("a"),
///     Outcome::failure("b"),
///     Outcome::success(2),
/// ]);
/// assert_eq!(report.into_error().unwrap().as_slice(), ["a", "b"]);
/// ```
#[must_use]
pub fn traverse<T, E, I>(outcomes: I) -> Outcome<Vec<T>, ErrorVec<E>>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    let mut values = Vec::new();
    let mut errors = ErrorVec::new();
    for outcome in outcomes {
        match outcome {
            Outcome::Success(value) => values.push(value),
            Outcome::Failure(error) => errors.push(error),
        }
    }
    if errors.is_empty() {
        Outcome::Success(values)
    } else {
        Outcome::Failure(errors)
    }
}

/// Applies a fallible function to every item, then reduces fail-fast.
///
/// Convenience over map-then-[`sequence`]; the first item `f` rejects
/// decides the failure.
///
/// # Arguments
///
/// * `items` - The inputs to check
/// * `f` - The fallible check applied to each item
///
/// # Examples
///
/// ```
/// use outcome_rail::{traverse_with, Outcome};
///
/// fn positive(x: i32) -> Outcome<i32, String> {
///     if x > 0 {
///         Outcome::success(x)
///     } else {
///         Outcome::failure(format!("{x} is not positive"))
///     }
/// }
///
/// assert_eq!(traverse_with(vec![1, 2], positive), Outcome::success(vec![1, 2]));
/// assert!(traverse_with(vec![1, -2, -3], positive).is_failure());
/// ```
#[must_use]
pub fn traverse_with<T, U, E, I, F>(items: I, f: F) -> Outcome<Vec<U>, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Outcome<U, E>,
{
    sequence(items.into_iter().map(f))
}
