//! Core operations lifted across an async boundary.
//!
//! Same algebra, same short-circuit contract: on a `Failure` the supplied
//! function is never called and no sub-future is created, so the failure
//! path never suspends.

use core::future::Future;

use futures_util::future::join_all;

use crate::alloc_type::Vec;
use crate::combine;
use crate::outcome::Outcome;

/// Transforms the success value through an async function.
///
/// On `Success`, awaits `f(value)` and wraps the output; on `Failure`,
/// returns the failure immediately without scheduling any work.
///
/// # Arguments
///
/// * `outcome` - The outcome to transform
/// * `f` - Async transformation of the success value; must be total, use
///   [`and_then_async`] when the step itself can fail
///
/// # Examples
///
/// ```
/// use outcome_rail::async_ext::map_async;
/// use outcome_rail::Outcome;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let o = map_async(Outcome::<_, &str>::success(20), |n| async move { n * 2 }).await;
/// assert_eq!(o, Outcome::success(40));
/// # }
/// ```
pub async fn map_async<T, U, E, F, Fut>(outcome: Outcome<T, E>, f: F) -> Outcome<U, E>
where
    F: FnOnce(T) -> Fut,
    Fut: Future<Output = U>,
{
    match outcome {
        Outcome::Success(value) => Outcome::Success(f(value).await),
        Outcome::Failure(error) => Outcome::Failure(error),
    }
}

/// Chains an async fallible step, short-circuiting on failure.
///
/// Same scheduling contract as [`map_async`], but `f` returns an
/// [`Outcome`] itself, so no re-wrapping happens on the success path.
///
/// # Examples
///
/// ```
/// use outcome_rail::async_ext::and_then_async;
/// use outcome_rail::Outcome;
///
/// async fn lookup(id: u32) -> Outcome<&'static str, &'static str> {
///     if id == 1 {
///         Outcome::success("alice")
///     } else {
///         Outcome::failure("unknown id")
///     }
/// }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let name = and_then_async(Outcome::<_, &str>::success(1), lookup).await;
/// assert_eq!(name, Outcome::success("alice"));
/// # }
/// ```
pub async fn and_then_async<T, U, E, F, Fut>(outcome: Outcome<T, E>, f: F) -> Outcome<U, E>
where
    F: FnOnce(T) -> Fut,
    Fut: Future<Output = Outcome<U, E>>,
{
    match outcome {
        Outcome::Success(value) => f(value).await,
        Outcome::Failure(error) => Outcome::Failure(error),
    }
}

/// Awaits all outcome-producing futures concurrently, then reduces
/// fail-fast.
///
/// The one fan-out operation: all inputs are driven at once
/// (parallel-wait), then the settled outcomes are reduced with the
/// synchronous [`sequence`](crate::sequence). The aggregated list is
/// ordered by input position regardless of completion order, and the
/// first failure in input order wins.
///
/// # Examples
///
/// ```
/// use outcome_rail::async_ext::sequence_async;
/// use outcome_rail::Outcome;
/// # use std::future::Future;
/// # use std::pin::Pin;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let o = sequence_async(vec![
///     Box::pin(async { Outcome::<_, &str>::success(1) })
///         as Pin<Box<dyn Future<Output = _>>>,
///     Box::pin(async { Outcome::success(2) }),
/// ])
/// .await;
/// assert_eq!(o, Outcome::success(vec![1, 2]));
/// # }
/// ```
pub async fn sequence_async<T, E, I, Fut>(futures: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = Outcome<T, E>>,
{
    combine::sequence(join_all(futures).await)
}
