//! Future wrapper that acts as a recovery point for one task.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::panic::{self, AssertUnwindSafe};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::recovery::point::ActiveGuard;
use crate::recovery::RecoveryPoint;
use crate::types::ChainedError;

pin_project! {
    /// A Future wrapper that intercepts aborts raised while polling.
    ///
    /// Every poll of the inner future runs under the same rules as
    /// [`RecoveryPoint::protect`]: an abort hands its error to the handler
    /// and completes this future with `None`, any other panic keeps
    /// unwinding. Aborts never cross from one task into another, so each
    /// spawned task that may abort should be wrapped on its own.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fault_rail::prelude_async::*;
    ///
    /// async fn example() {
    ///     let mut seen = None;
    ///     let value = async { Outcome::new(1, Some(std::fmt::Error)).check() }
    ///         .recover_with(|err| seen = Some(err))
    ///         .await;
    ///     assert!(value.is_none());
    ///     assert!(seen.is_some());
    /// }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct RecoverFuture<Fut, H> {
        #[pin]
        future: Fut,
        handler: Option<H>,
    }
}

impl<Fut, H> RecoverFuture<Fut, H> {
    /// Creates a new `RecoverFuture` reporting intercepted errors to `handler`.
    #[inline]
    pub fn new(future: Fut, handler: H) -> Self {
        Self { future, handler: Some(handler) }
    }
}

impl<Fut, H> Future for RecoverFuture<Fut, H>
where
    Fut: Future,
    H: FnOnce(ChainedError),
{
    type Output = Option<Fut::Output>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let future = this.future;

        let polled = {
            let _guard = ActiveGuard::enter();
            panic::catch_unwind(AssertUnwindSafe(|| future.poll(cx)))
        };

        match polled {
            Ok(Poll::Ready(value)) => {
                this.handler.take();
                Poll::Ready(Some(value))
            },
            Ok(Poll::Pending) => Poll::Pending,
            Err(payload) => match this.handler.take() {
                Some(handler) => {
                    RecoveryPoint::new(handler).intercept(payload);
                    Poll::Ready(None)
                },
                None => panic::resume_unwind(payload),
            },
        }
    }
}

impl<Fut, H> FusedFuture for RecoverFuture<Fut, H>
where
    Fut: Future,
    H: FnOnce(ChainedError),
{
    fn is_terminated(&self) -> bool {
        self.handler.is_none()
    }
}
