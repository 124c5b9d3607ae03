//! The two-variant `Outcome` container and its primitive operations.

pub mod iter;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Railway-oriented result container that either succeeded or failed.
///
/// `Outcome<T, E>` holds exactly one value: a success of type `T` or a
/// failure of type `E`. It is immutable once constructed; every operation
/// consumes the receiver and returns a new `Outcome`. Functions supplied to
/// an operation are never invoked on the variant the operation skips, which
/// is what lets a chain of fallible steps short-circuit on the first
/// failure without nested conditionals.
///
/// # Serde Support
///
/// `Outcome` implements `Serialize` and `Deserialize` when `T` and `E` do
/// (requires the `serde` feature).
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The failure value type
///
/// # Variants
///
/// * `Success(T)` - Contains the successful value
/// * `Failure(E)` - Contains the failure value
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// fn parse_port(raw: &str) -> Outcome<u16, String> {
///     Outcome::from_fallible(|| raw.parse::<u16>(), |e| e.to_string())
/// }
///
/// let port = parse_port("8080")
///     .map(|p| p + 1)
///     .and_then(|p| {
///         if p > 1024 {
///             Outcome::success(p)
///         } else {
///             Outcome::failure("reserved port".to_string())
///         }
///     });
/// assert_eq!(port, Outcome::success(8081));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

use Outcome::{Failure, Success};

impl<T, E> Outcome<T, E> {
    /// Creates a successful outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(42);
    /// assert!(o.is_success());
    /// ```
    #[must_use]
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::failure("boom");
    /// assert!(o.is_failure());
    /// ```
    #[must_use]
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Runs a fallible call and captures its result as an `Outcome`.
    ///
    /// This is the single sanctioned point where `Result`-based code enters
    /// the `Outcome` algebra: a normal return becomes `Success`, an `Err` is
    /// mapped through `error_mapper` into `Failure`. Panics are programming
    /// errors and propagate unchanged.
    ///
    /// # Arguments
    ///
    /// * `f` - The fallible call to run
    /// * `error_mapper` - Converts the call's error into `E`
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o: Outcome<i32, String> =
    ///     Outcome::from_fallible(|| "12".parse::<i32>(), |e| e.to_string());
    /// assert_eq!(o, Outcome::success(12));
    ///
    /// let o: Outcome<i32, String> =
    ///     Outcome::from_fallible(|| "nope".parse::<i32>(), |e| e.to_string());
    /// assert!(o.is_failure());
    /// ```
    #[inline]
    pub fn from_fallible<X, F, M>(f: F, error_mapper: M) -> Self
    where
        F: FnOnce() -> Result<T, X>,
        M: FnOnce(X) -> E,
    {
        match f() {
            Ok(value) => Success(value),
            Err(error) => Failure(error_mapper(error)),
        }
    }

    /// Returns `true` if the outcome is a `Success`.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Success(_))
    }

    /// Returns `true` if the outcome is a `Failure`.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(error),
        }
    }

    /// Converts from `&mut Outcome<T, E>` to `Outcome<&mut T, &mut E>`.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(error),
        }
    }

    /// Transforms the success value, leaving a failure untouched.
    ///
    /// `f` must be total; if the transformation itself can fail, use
    /// [`and_then`](Self::and_then) instead. `f` is never invoked on a
    /// `Failure`.
    ///
    /// # Arguments
    ///
    /// * `f` - A function from the success value to the new success value
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(21);
    /// assert_eq!(o.map(|x| x * 2), Outcome::success(42));
    ///
    /// let o = Outcome::<i32, &str>::failure("boom");
    /// assert_eq!(o.map(|x| x * 2), Outcome::failure("boom"));
    /// ```
    #[must_use]
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Success(value) => Success(f(value)),
            Failure(error) => Failure(error),
        }
    }

    /// Chains another fallible step, short-circuiting on failure.
    ///
    /// On `Success`, calls `f` and returns its outcome directly (no double
    /// wrapping); on `Failure`, returns the same failure without invoking
    /// `f`. This is the core chaining primitive and is associative:
    /// `o.and_then(f).and_then(g)` behaves like
    /// `o.and_then(|x| f(x).and_then(g))`.
    ///
    /// # Arguments
    ///
    /// * `f` - Function producing the next step's outcome
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn half(x: i32) -> Outcome<i32, &'static str> {
    ///     if x % 2 == 0 {
    ///         Outcome::success(x / 2)
    ///     } else {
    ///         Outcome::failure("odd")
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::<_, &str>::success(8).and_then(half), Outcome::success(4));
    /// assert_eq!(Outcome::<_, &str>::success(3).and_then(half), Outcome::failure("odd"));
    /// ```
    #[must_use]
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Success(value) => f(value),
            Failure(error) => Failure(error),
        }
    }

    /// Transforms the failure value, leaving a success untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, i32>::failure(404);
    /// assert_eq!(o.map_err(|code| format!("status {code}")),
    ///            Outcome::failure("status 404".to_string()));
    /// ```
    #[must_use]
    #[inline]
    pub fn map_err<F2, F>(self, f: F) -> Outcome<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(f(error)),
        }
    }

    /// Runs a side effect on the success value, returning the outcome
    /// unchanged.
    ///
    /// Intended for observability (logging, metrics) in the middle of a
    /// chain; the closure borrows the value and cannot alter it.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut seen = None;
    /// let o = Outcome::<i32, &str>::success(7).inspect(|v| seen = Some(*v));
    /// assert_eq!(seen, Some(7));
    /// assert_eq!(o, Outcome::success(7));
    /// ```
    #[must_use]
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Success(value) = &self {
            f(value);
        }
        self
    }

    /// Runs a side effect on the failure value, returning the outcome
    /// unchanged. The failure-side mirror of [`inspect`](Self::inspect).
    #[must_use]
    #[inline]
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Failure(error) = &self {
            f(error);
        }
        self
    }

    /// Total elimination: exactly one branch runs, both returning `R`.
    ///
    /// This is the sanctioned way to leave the `Outcome` world for a plain
    /// value when both variants need handling.
    ///
    /// # Arguments
    ///
    /// * `on_success` - Handler for the success value
    /// * `on_failure` - Handler for the failure value
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let body = Outcome::<i32, &str>::failure("down")
    ///     .fold(|v| format!("ok: {v}"), |e| format!("error: {e}"));
    /// assert_eq!(body, "error: down");
    /// ```
    #[inline]
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Success(value) => on_success(value),
            Failure(error) => on_failure(error),
        }
    }

    /// Converts a failure back into a success by computing a fallback.
    ///
    /// Identity on `Success`; `f` is never invoked there.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::failure("miss").recover(|_| 0);
    /// assert_eq!(o, Outcome::success(0));
    /// ```
    #[must_use]
    #[inline]
    pub fn recover<F>(self, f: F) -> Self
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Success(value) => Success(value),
            Failure(error) => Success(f(error)),
        }
    }

    /// Tries an alternate strategy when the outcome is a failure.
    ///
    /// Like [`recover`](Self::recover) except the fallback itself may fail.
    /// Identity on `Success`.
    ///
    /// # Arguments
    ///
    /// * `f` - Fallback producing a fresh outcome from the failure
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn read_backup() -> Outcome<&'static str, &'static str> {
    ///     Outcome::success("backup data")
    /// }
    ///
    /// let o = Outcome::<&str, &str>::failure("primary missing").or_else(|_| read_backup());
    /// assert_eq!(o, Outcome::success("backup data"));
    /// ```
    #[must_use]
    #[inline]
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce(E) -> Self,
    {
        match self {
            Success(value) => Success(value),
            Failure(error) => f(error),
        }
    }

    /// Pairs two outcomes, keeping the first failure encountered.
    ///
    /// Success only if both inputs are; otherwise the left failure wins
    /// over the right. Branches on variants only, runs no side effects.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let a = Outcome::<i32, &str>::success(1);
    /// let b = Outcome::<&str, &str>::success("x");
    /// assert_eq!(a.zip(b), Outcome::success((1, "x")));
    ///
    /// let a = Outcome::<i32, &str>::failure("first");
    /// let b = Outcome::<&str, &str>::failure("second");
    /// assert_eq!(a.zip(b), Outcome::failure("first"));
    /// ```
    #[must_use]
    #[inline]
    pub fn zip<U>(self, other: Outcome<U, E>) -> Outcome<(T, U), E> {
        match (self, other) {
            (Success(a), Success(b)) => Success((a, b)),
            (Failure(e), _) => Failure(e),
            (_, Failure(e)) => Failure(e),
        }
    }

    /// Extracts the success value or returns the provided default.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::failure("x").unwrap_or(0), 0);
    /// assert_eq!(Outcome::<i32, &str>::success(5).unwrap_or(0), 5);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Success(value) => value,
            Failure(_) => default,
        }
    }

    /// Extracts the success value or computes one from the failure.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Success(value) => value,
            Failure(error) => f(error),
        }
    }

    /// Extracts the success value, panicking on failure.
    ///
    /// The terminal raise boundary, matching [`Result::unwrap`]'s contract.
    /// Prefer [`into_result`](Self::into_result) and `?` at system edges
    /// that propagate instead of aborting.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a `Failure`, with the failure's `Debug`
    /// rendering.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: core::fmt::Debug,
    {
        match self {
            Success(value) => value,
            Failure(error) => panic!("called `Outcome::unwrap()` on a `Failure` value: {error:?}"),
        }
    }

    /// Extracts the success value, panicking with `msg` on failure.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a `Failure`.
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T
    where
        E: core::fmt::Debug,
    {
        match self {
            Success(value) => value,
            Failure(error) => panic!("{msg}: {error:?}"),
        }
    }

    /// Borrows the success value, if any.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Success(value) => Some(value),
            Failure(_) => None,
        }
    }

    /// Borrows the failure value, if any.
    #[must_use]
    #[inline]
    pub fn error(&self) -> Option<&E> {
        match self {
            Success(_) => None,
            Failure(error) => Some(error),
        }
    }

    /// Extracts the success value, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(42);
    /// assert_eq!(o.into_value(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Success(value) => Some(value),
            Failure(_) => None,
        }
    }

    /// Extracts the failure value, if any.
    #[must_use]
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Success(_) => None,
            Failure(error) => Some(error),
        }
    }

    /// Converts into a plain [`Result`], re-entering `?`-based propagation.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn handler() -> Result<i32, String> {
    ///     let v = Outcome::<i32, String>::success(1).into_result()?;
    ///     Ok(v + 1)
    /// }
    ///
    /// assert_eq!(handler(), Ok(2));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Success(value) => Ok(value),
            Failure(error) => Err(error),
        }
    }

    /// Wraps a plain [`Result`] into an `Outcome`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::from_result("7".parse::<i32>());
    /// assert!(o.is_success());
    /// ```
    #[must_use]
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Success(value),
            Err(error) => Failure(error),
        }
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let nested: Outcome<Outcome<i32, &str>, &str> =
    ///     Outcome::success(Outcome::success(3));
    /// assert_eq!(nested.flatten(), Outcome::success(3));
    /// ```
    #[must_use]
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        self.and_then(|inner| inner)
    }
}
