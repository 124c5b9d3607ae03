//! Railway-oriented error propagation built on a two-variant [`Outcome`]
//! container: chain fallible steps, short-circuit on the first failure, and
//! aggregate independent checks, without nested conditionals.
//!
//! # Examples
//!
//! ## Chaining fallible steps
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! fn parse(raw: &str) -> Outcome<i32, String> {
//!     Outcome::from_fallible(|| raw.parse::<i32>(), |e| e.to_string())
//! }
//!
//! let result = parse("20")
//!     .and_then(|n| {
//!         if n > 0 {
//!             Outcome::success(n)
//!         } else {
//!             Outcome::failure("not positive".to_string())
//!         }
//!     })
//!     .map(|n| n * 2);
//! assert_eq!(result, Outcome::success(40));
//! ```
//!
//! ## Fail-fast vs fail-collect aggregation
//!
//! ```
//! use outcome_rail::{sequence, traverse, Outcome};
//!
//! let checks = vec![
//!     Outcome::<i32, &str>::success(1),
//!     Outcome::failure("a"),
//!     Outcome::failure("b"),
//! ];
//!
//! // First failure wins.
//! assert_eq!(sequence(checks.clone()), Outcome::failure("a"));
//!
//! // Every failure is reported, in input order.
//! let report = traverse(checks);
//! assert_eq!(report.into_error().unwrap().as_slice(), ["a", "b"]);
//! ```
//!
//! ## Domain assertions
//!
//! ```
//! use outcome_rail::{DomainOutcome, Outcome};
//!
//! fn register(email: &str) -> DomainOutcome<&str> {
//!     Outcome::success(email)
//!         .ensure_valid(|e| e.contains('@'), "email", "must contain @")
//! }
//!
//! assert!(register("user@example.com").is_success());
//! assert!(register("nope").is_failure());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Alias types bridging `std` and `alloc`
mod alloc_type;

/// Aggregate combinators over collections of outcomes
pub mod combine;
/// Conversions between `Result`, `Option`, and `Outcome`
pub mod convert;
/// Domain specialization with a structured error taxonomy
pub mod domain;
/// Constructor macros for the domain layer
pub mod macros;
/// The `Outcome` container and its primitive operations
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;

/// Async bridge for outcome-producing futures (requires the `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - sync prelude plus the async bridge (requires the `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

pub use combine::{sequence, traverse, traverse_with, zip3, ErrorVec};
pub use convert::*;
pub use domain::{DomainError, DomainErrorKind, DomainOutcome};
pub use outcome::Outcome;
