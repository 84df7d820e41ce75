//! Tests for FutureRecoverExt trait.

use fault_rail::prelude_async::*;
use std::time::Duration;

#[tokio::test]
async fn recover_with_passes_values_through() {
    let value = async { 5 }.recover_with(|_| unreachable!()).await;

    assert_eq!(value, Some(5));
}

#[tokio::test]
async fn recover_with_intercepts_abort_after_await() {
    let mut seen = None;

    let value = async {
        tokio::time::sleep(Duration::from_millis(1)).await;
        Outcome::new(1, Some(ChainedError::new("late failure"))).check()
    }
    .recover_with(|err| seen = Some(err))
    .await;

    assert_eq!(value, None);
    assert_eq!(seen, Some(ChainedError::new("late failure")));
}

#[tokio::test]
async fn spawned_tasks_recover_independently() {
    let failing = tokio::spawn(
        async {
            abort(ChainedError::new("task failed"));
        }
        .recover_with(|_| ()),
    );
    let healthy = tokio::spawn(async { "done" }.recover_with(|_| ()));

    assert_eq!(failing.await.ok(), Some(None));
    assert_eq!(healthy.await.ok(), Some(Some("done")));
}

#[tokio::test]
async fn non_error_panics_escape_the_task() {
    let task = tokio::spawn(
        async {
            panic!("plain panic");
        }
        .recover_with(|_| ()),
    );

    let joined = task.await;
    assert!(joined.is_err_and(|e| e.is_panic()));
}
