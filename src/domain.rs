//! Domain specialization: [`Outcome`] fixed to a structured error taxonomy.
//!
//! This layer adds no runtime behavior of its own. [`DomainError`] is a
//! three-kind error (validation / not-found / service) with named
//! constructors, and the `ensure_*` helpers are sugar over
//! [`Outcome::and_then`].
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{DomainError, DomainOutcome, Outcome};
//!
//! fn check_email(email: &str) -> DomainOutcome<&str> {
//!     Outcome::success(email)
//!         .ensure_valid(|e| e.contains('@'), "email", "must contain @")
//! }
//!
//! let err = check_email("bad").into_error().unwrap();
//! assert_eq!(err.field(), Some("email"));
//! ```

use crate::alloc_type::String;
use crate::outcome::Outcome;

#[cfg(not(feature = "std"))]
use alloc::format;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome narrowed to the structured [`DomainError`].
pub type DomainOutcome<T> = Outcome<T, DomainError>;

/// The three failure categories the domain layer distinguishes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum DomainErrorKind {
    /// Input failed a validation rule.
    Validation,
    /// A referenced entity does not exist.
    NotFound,
    /// An underlying service or infrastructure call failed.
    Service,
}

/// Structured domain error: a kind, a message, and optional context fields.
///
/// Value-semantic on purpose: cloneable, comparable, and (with the `serde`
/// feature) serializable, so it can travel through response bodies and
/// logs without ceremony. A `cause` is stored as its rendered text rather
/// than a boxed source for the same reason.
///
/// # Examples
///
/// ```
/// use outcome_rail::{DomainError, DomainErrorKind};
///
/// let err = DomainError::not_found("user", 42);
/// assert_eq!(err.kind(), DomainErrorKind::NotFound);
/// assert_eq!(err.entity(), Some("user"));
/// assert_eq!(err.to_string(), "user 42 not found");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct DomainError {
    kind: DomainErrorKind,
    message: String,
    field: Option<String>,
    entity: Option<String>,
    cause: Option<String>,
}

impl DomainError {
    /// Creates a validation error for a named field.
    ///
    /// # Arguments
    ///
    /// * `field` - The field that failed validation
    /// * `message` - What the field violated
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::DomainError;
    ///
    /// let err = DomainError::invalid("email", "must contain @");
    /// assert_eq!(err.field(), Some("email"));
    /// assert_eq!(err.to_string(), "email: must contain @");
    /// ```
    #[must_use]
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: DomainErrorKind::Validation,
            message: message.into(),
            field: Some(field.into()),
            entity: None,
            cause: None,
        }
    }

    /// Creates a not-found error for an entity identified by `id`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::DomainError;
    ///
    /// let err = DomainError::not_found("order", "ord-7");
    /// assert_eq!(err.to_string(), "order ord-7 not found");
    /// ```
    #[must_use]
    pub fn not_found(entity: impl Into<String>, id: impl core::fmt::Display) -> Self {
        let entity = entity.into();
        Self {
            kind: DomainErrorKind::NotFound,
            message: format!("{entity} {id} not found"),
            field: None,
            entity: Some(entity),
            cause: None,
        }
    }

    /// Creates a service error carrying the rendered underlying cause.
    ///
    /// # Arguments
    ///
    /// * `message` - What the failing operation was doing
    /// * `cause` - The underlying error, kept as its `Display` text
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::DomainError;
    ///
    /// let io = std::io::Error::other("disk full");
    /// let err = DomainError::from_error("saving report", io);
    /// assert_eq!(err.cause(), Some("disk full"));
    /// ```
    #[must_use]
    pub fn from_error(message: impl Into<String>, cause: impl core::fmt::Display) -> Self {
        Self {
            kind: DomainErrorKind::Service,
            message: message.into(),
            field: None,
            entity: None,
            cause: Some(format!("{cause}")),
        }
    }

    /// Creates a service error with no recorded cause.
    #[must_use]
    pub fn service(message: impl Into<String>) -> Self {
        Self {
            kind: DomainErrorKind::Service,
            message: message.into(),
            field: None,
            entity: None,
            cause: None,
        }
    }

    /// The failure category.
    #[must_use]
    #[inline]
    pub fn kind(&self) -> DomainErrorKind {
        self.kind
    }

    /// The human-readable message.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The offending field, for validation errors.
    #[must_use]
    #[inline]
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// The missing entity type, for not-found errors.
    #[must_use]
    #[inline]
    pub fn entity(&self) -> Option<&str> {
        self.entity.as_deref()
    }

    /// The rendered underlying cause, for service errors.
    #[must_use]
    #[inline]
    pub fn cause(&self) -> Option<&str> {
        self.cause.as_deref()
    }
}

impl core::fmt::Display for DomainError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match (&self.field, &self.cause) {
            (Some(field), _) => write!(f, "{field}: {}", self.message),
            (None, Some(cause)) => write!(f, "{}: {cause}", self.message),
            (None, None) => write!(f, "{}", self.message),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DomainError {}

impl<T> Outcome<T, DomainError> {
    /// Fails with a validation error when `predicate` rejects the value.
    ///
    /// A `Success` whose value fails `predicate` becomes a
    /// [`DomainError::invalid`] failure; anything else passes through
    /// untouched. Pure sugar over [`and_then`](Outcome::and_then).
    ///
    /// # Arguments
    ///
    /// * `predicate` - Accepts or rejects the success value
    /// * `field` - The field being validated
    /// * `message` - The violation message on rejection
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{DomainOutcome, Outcome};
    ///
    /// let short: DomainOutcome<&str> = Outcome::success("pw")
    ///     .ensure_valid(|p| p.len() >= 8, "password", "too short");
    /// assert!(short.is_failure());
    /// ```
    #[must_use]
    pub fn ensure_valid<P>(
        self,
        predicate: P,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.and_then(|value| {
            if predicate(&value) {
                Outcome::Success(value)
            } else {
                Outcome::Failure(DomainError::invalid(field, message))
            }
        })
    }

    /// Fails with a not-found error when `predicate` rejects the value.
    ///
    /// Same shape as [`ensure_valid`](Self::ensure_valid), producing
    /// [`DomainError::not_found`] instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{DomainOutcome, Outcome};
    ///
    /// let rows: DomainOutcome<Vec<u64>> = Outcome::success(vec![]);
    /// let missing = rows.ensure_exists(|r| !r.is_empty(), "user", 42);
    /// assert!(missing.is_failure());
    /// ```
    #[must_use]
    pub fn ensure_exists<P>(
        self,
        predicate: P,
        entity: impl Into<String>,
        id: impl core::fmt::Display,
    ) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.and_then(|value| {
            if predicate(&value) {
                Outcome::Success(value)
            } else {
                Outcome::Failure(DomainError::not_found(entity, id))
            }
        })
    }
}
