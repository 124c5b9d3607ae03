//! Async prelude - all async utilities in one import.
//!
//! Re-exports everything from the sync [`prelude`](crate::prelude) plus the
//! async bridge.
//!
//! # Usage
//!
//! ```ignore
//! use outcome_rail::prelude_async::*;
//!
//! async fn fetch_user(id: u64) -> Outcome<User, ApiError> {
//!     query_db(id)
//!         .into_outcome(ApiError::from)
//!         .await
//! }
//! ```

pub use crate::prelude::*;

pub use crate::async_ext::{
    and_then_async, from_future, map_async, sequence_async, FutureOutcomeExt, OutcomeFuture,
};
