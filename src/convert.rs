//! Conversion helpers between `Result`, `Option`, and [`Outcome`].
//!
//! These adapters make it straightforward to adopt `outcome-rail`
//! incrementally: wrap the `Result`s that fallible std and third-party
//! calls already produce, and flatten back out at the edges where plain
//! `Result` is expected.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::{option_to_outcome, result_to_outcome};
//! use outcome_rail::Outcome;
//!
//! let o = result_to_outcome("5".parse::<i32>());
//! assert!(o.is_success());
//!
//! let o = option_to_outcome(None::<i32>, "missing");
//! assert_eq!(o, Outcome::failure("missing"));
//! ```

use crate::outcome::Outcome;

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Outcome::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

/// Converts a `Result` into an [`Outcome`].
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
/// use outcome_rail::Outcome;
///
/// assert_eq!(result_to_outcome(Ok::<_, &str>(1)), Outcome::success(1));
/// assert_eq!(result_to_outcome(Err::<i32, _>("e")), Outcome::failure("e"));
/// ```
#[must_use]
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T, E> {
    Outcome::from_result(result)
}

/// Converts an [`Outcome`] back into a `Result`.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_result;
/// use outcome_rail::Outcome;
///
/// assert_eq!(outcome_to_result(Outcome::<_, &str>::success(1)), Ok(1));
/// ```
#[inline]
pub fn outcome_to_result<T, E>(outcome: Outcome<T, E>) -> Result<T, E> {
    outcome.into_result()
}

/// Converts an `Option` into an [`Outcome`], supplying the failure for
/// `None`.
///
/// # Arguments
///
/// * `option` - The optional value
/// * `error` - The failure used when `option` is `None`
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::option_to_outcome;
/// use outcome_rail::Outcome;
///
/// let found = option_to_outcome(Some(3), "missing");
/// assert_eq!(found, Outcome::success(3));
/// ```
#[must_use]
#[inline]
pub fn option_to_outcome<T, E>(option: Option<T>, error: E) -> Outcome<T, E> {
    match option {
        Some(value) => Outcome::Success(value),
        None => Outcome::Failure(error),
    }
}

impl<T, E> Outcome<T, E> {
    /// Converts an `Option` into an `Outcome` with a lazily-built failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::from_option(None::<i32>, || "empty".to_string());
    /// assert!(o.is_failure());
    /// ```
    #[must_use]
    #[inline]
    pub fn from_option<F>(option: Option<T>, error: F) -> Self
    where
        F: FnOnce() -> E,
    {
        match option {
            Some(value) => Outcome::Success(value),
            None => Outcome::Failure(error()),
        }
    }
}
