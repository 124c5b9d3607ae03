//! Tests for `OutcomeFuture`, `FutureOutcomeExt`, and `from_future`.

use outcome_rail::prelude_async::*;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

#[test]
fn outcome_future_is_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    assert_send::<OutcomeFuture<std::future::Ready<Result<(), ()>>, fn(()) -> &'static str>>();
    assert_sync::<OutcomeFuture<std::future::Ready<Result<(), ()>>, fn(()) -> &'static str>>();
}

#[tokio::test]
async fn into_outcome_wraps_normal_completion() {
    let o: Outcome<i32, String> = async { Ok::<_, String>(42) }
        .into_outcome(|e| e)
        .await;
    assert_eq!(o, Outcome::success(42));
}

#[tokio::test]
async fn into_outcome_maps_error_instead_of_propagating() {
    let o: Outcome<i32, String> = async { Err::<i32, _>("raw") }
        .into_outcome(|e| format!("mapped: {e}"))
        .await;
    assert_eq!(o, Outcome::failure("mapped: raw".to_string()));
}

#[tokio::test]
async fn mapper_not_evaluated_on_success() {
    let calls = AtomicU32::new(0);

    let o: Outcome<i32, &str> = async { Ok::<_, &str>(1) }
        .into_outcome(|e| {
            calls.fetch_add(1, Ordering::SeqCst);
            e
        })
        .await;

    assert!(o.is_success());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn mapper_evaluated_exactly_once_on_error() {
    let calls = AtomicU32::new(0);

    let o: Outcome<i32, &str> = async { Err::<i32, _>("failed") }
        .into_outcome(|e| {
            calls.fetch_add(1, Ordering::SeqCst);
            e
        })
        .await;

    assert!(o.is_failure());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn from_future_free_function() {
    let o: Outcome<i32, String> =
        from_future(async { "7".parse::<i32>() }, |e| e.to_string()).await;
    assert_eq!(o, Outcome::success(7));
}

#[tokio::test]
async fn timeout_is_captured_as_failure() {
    let never = std::future::pending::<i32>();
    let timed = async {
        tokio::time::timeout(Duration::from_millis(5), never)
            .await
            .map_err(|elapsed| elapsed.to_string())
    };

    let o: Outcome<i32, String> = from_future(timed, |e| format!("timed out: {e}")).await;
    let err = o.into_error().unwrap();
    assert!(err.starts_with("timed out: "));
}
