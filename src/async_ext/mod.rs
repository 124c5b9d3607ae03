//! Async bridge for outcome-rail.
//!
//! Lifts the [`Outcome`](crate::Outcome) algebra over futures while keeping
//! its contracts: conversion happens exactly once at the bridge, the
//! failure path never suspends, and no raw error escapes a bridge function.
//!
//! # Feature Flag
//!
//! Requires the `async` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
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

mod ops;
mod outcome_future;

pub use ops::{and_then_async, map_async, sequence_async};
pub use outcome_future::{from_future, FutureOutcomeExt, OutcomeFuture};
