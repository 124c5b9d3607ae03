//! Future adapter that resolves a `Result`-producing future into an
//! [`Outcome`], mapping the error side lazily.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::outcome::Outcome;

pin_project! {
    /// A future wrapper that converts `Result<T, X>` output into
    /// `Outcome<T, E>` through an error mapper.
    ///
    /// Suspension happens only at the inner future's own await points; the
    /// mapper runs synchronously when (and only when) the inner future
    /// resolves to an error. A cancellation or timeout surfaced as the
    /// inner future's `Err` (for example `tokio::time::error::Elapsed`)
    /// goes through the same mapper, so no raw cancellation signal leaves
    /// the bridge.
    ///
    /// # Cancel Safety
    ///
    /// `OutcomeFuture` is cancel-safe if the inner future is cancel-safe.
    /// The mapper is only consumed when `poll` returns
    /// `Poll::Ready(Err(_))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_rail::prelude_async::*;
    ///
    /// async fn example() -> Outcome<i32, String> {
    ///     async { "12".parse::<i32>() }
    ///         .into_outcome(|e| e.to_string())
    ///         .await
    /// }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct OutcomeFuture<Fut, M> {
        #[pin]
        future: Fut,
        mapper: Option<M>,
    }
}

impl<Fut, M> OutcomeFuture<Fut, M> {
    /// Creates a new `OutcomeFuture` from a future and an error mapper.
    #[inline]
    pub fn new(future: Fut, mapper: M) -> Self {
        Self {
            future,
            mapper: Some(mapper),
        }
    }
}

impl<Fut, M, T, X, E> Future for OutcomeFuture<Fut, M>
where
    Fut: Future<Output = Result<T, X>>,
    M: FnOnce(X) -> E,
{
    type Output = Outcome<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|result| match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => {
                let mapper = this
                    .mapper
                    .take()
                    .expect("OutcomeFuture polled after completion; this is a bug");
                Outcome::Failure(mapper(error))
            }
        })
    }
}

impl<Fut, M, T, X, E> FusedFuture for OutcomeFuture<Fut, M>
where
    Fut: FusedFuture<Output = Result<T, X>>,
    M: FnOnce(X) -> E,
{
    fn is_terminated(&self) -> bool {
        // Also check the mapper since it's taken on error completion
        self.mapper.is_none() || self.future.is_terminated()
    }
}

/// Extension trait bringing `Result`-producing futures into the `Outcome`
/// algebra.
///
/// The async counterpart of [`Outcome::from_fallible`]: the single point
/// where a deferred fallible computation is converted, with the mapper
/// evaluated only on the error path.
///
/// # Examples
///
/// ```rust,no_run
/// use outcome_rail::prelude_async::*;
///
/// #[derive(Debug)]
/// struct User;
///
/// #[derive(Debug)]
/// struct DbError;
///
/// async fn query(_id: u64) -> Result<User, DbError> {
///     Err(DbError)
/// }
///
/// async fn fetch_user(id: u64) -> Outcome<User, String> {
///     query(id)
///         .into_outcome(|e| format!("db error: {e:?}"))
///         .await
/// }
/// ```
pub trait FutureOutcomeExt<T, X>: Future<Output = Result<T, X>> + Sized {
    /// Adapts this future to resolve to an [`Outcome`], mapping any error
    /// through `mapper`.
    fn into_outcome<M, E>(self, mapper: M) -> OutcomeFuture<Self, M>
    where
        M: FnOnce(X) -> E;
}

impl<Fut, T, X> FutureOutcomeExt<T, X> for Fut
where
    Fut: Future<Output = Result<T, X>>,
{
    #[inline]
    fn into_outcome<M, E>(self, mapper: M) -> OutcomeFuture<Self, M>
    where
        M: FnOnce(X) -> E,
    {
        OutcomeFuture::new(self, mapper)
    }
}

/// Awaits a fallible future and captures its result as an [`Outcome`].
///
/// Free-function form of [`FutureOutcomeExt::into_outcome`]. On normal
/// completion the value becomes `Success`; an error (including a surfaced
/// timeout or cancellation) is mapped through `error_mapper` into
/// `Failure` and never escapes raw.
///
/// # Arguments
///
/// * `future` - The deferred fallible computation
/// * `error_mapper` - Converts the future's error into `E`
///
/// # Examples
///
/// ```rust
/// use outcome_rail::async_ext::from_future;
/// use outcome_rail::Outcome;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let o: Outcome<i32, String> =
///     from_future(async { "7".parse::<i32>() }, |e| e.to_string()).await;
/// assert_eq!(o, Outcome::success(7));
/// # }
/// ```
pub async fn from_future<T, X, E, Fut, M>(future: Fut, error_mapper: M) -> Outcome<T, E>
where
    Fut: Future<Output = Result<T, X>>,
    M: FnOnce(X) -> E,
{
    OutcomeFuture::new(future, error_mapper).await
}
