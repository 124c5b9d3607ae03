//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`invalid!`], [`not_found!`], [`service_failure!`]
//! - **Types**: [`Outcome`], [`DomainError`], [`DomainErrorKind`],
//!   [`DomainOutcome`], [`ErrorVec`]
//! - **Combinators**: [`sequence`], [`traverse`], [`traverse_with`],
//!   [`zip3`]
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn positive(n: i32) -> DomainOutcome<i32> {
//!     Outcome::success(n).ensure_valid(|n| *n > 0, "n", "must be positive")
//! }
//!
//! let checked = sequence(vec![positive(1), positive(2)]);
//! assert_eq!(checked, Outcome::success(vec![1, 2]));
//! ```

// Macros
pub use crate::{invalid, not_found, service_failure};

// Core type
pub use crate::outcome::Outcome;

// Combinators
pub use crate::combine::{sequence, traverse, traverse_with, zip3, ErrorVec};

// Conversions
pub use crate::convert::{option_to_outcome, outcome_to_result, result_to_outcome};

// Domain layer
pub use crate::domain::{DomainError, DomainErrorKind, DomainOutcome};
