//! Constructor macros for the domain layer.

/// Builds a failed [`Outcome`](crate::Outcome) carrying a validation error.
///
/// The first argument is the field name; the rest is a `format!` message.
///
/// # Examples
///
/// ```
/// use outcome_rail::{invalid, DomainOutcome};
///
/// let min = 8;
/// let o: DomainOutcome<()> = invalid!("password", "must be at least {min} characters");
/// assert_eq!(o.into_error().unwrap().field(), Some("password"));
/// ```
#[macro_export]
macro_rules! invalid {
    ($field:expr, $($arg:tt)*) => {
        $crate::Outcome::failure($crate::DomainError::invalid($field, format!($($arg)*)))
    };
}

/// Builds a failed [`Outcome`](crate::Outcome) carrying a not-found error.
///
/// # Examples
///
/// ```
/// use outcome_rail::{not_found, DomainOutcome};
///
/// let o: DomainOutcome<()> = not_found!("user", 42);
/// assert_eq!(o.into_error().unwrap().to_string(), "user 42 not found");
/// ```
#[macro_export]
macro_rules! not_found {
    ($entity:expr, $id:expr) => {
        $crate::Outcome::failure($crate::DomainError::not_found($entity, $id))
    };
}

/// Builds a failed [`Outcome`](crate::Outcome) carrying a service error.
///
/// # Examples
///
/// ```
/// use outcome_rail::{service_failure, DomainOutcome};
///
/// let o: DomainOutcome<()> = service_failure!("payment gateway timed out after {}ms", 3000);
/// assert!(o.is_failure());
/// ```
#[macro_export]
macro_rules! service_failure {
    ($($arg:tt)*) => {
        $crate::Outcome::failure($crate::DomainError::service(format!($($arg)*)))
    };
}
