//! Future wrapper that wraps errors into a [`ChainedError`] lazily.

use core::error::Error;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::types::alloc_type::Cow;
use crate::types::ChainedError;

pin_project! {
    /// A Future wrapper that wraps its error under a message.
    ///
    /// The message is only built when the inner future resolves to an error,
    /// keeping the success path free of formatting.
    ///
    /// # Cancel Safety
    ///
    /// `ChainedFuture` is cancel-safe if the inner future is cancel-safe.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fault_rail::prelude_async::*;
    ///
    /// async fn example() -> ChainedResult<i32> {
    ///     async { Err::<i32, _>(std::fmt::Error) }
    ///         .chained("rendering response")
    ///         .await
    /// }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct ChainedFuture<Fut, F> {
        #[pin]
        future: Fut,
        message_fn: Option<F>,
    }
}

impl<Fut, F> ChainedFuture<Fut, F> {
    /// Creates a new `ChainedFuture` with the given future and message generator.
    #[inline]
    pub fn new(future: Fut, message_fn: F) -> Self {
        Self { future, message_fn: Some(message_fn) }
    }
}

impl<Fut, F, M, T, E> Future for ChainedFuture<Fut, F>
where
    Fut: Future<Output = Result<T, E>>,
    F: FnOnce() -> M,
    M: Into<Cow<'static, str>>,
    E: Error + Send + Sync + 'static,
{
    type Output = Result<T, ChainedError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|res| {
            res.map_err(|err| match this.message_fn.take() {
                Some(message_fn) => ChainedError::wrap(err, message_fn()),
                None => ChainedError::coerce_or_wrap(err),
            })
        })
    }
}

impl<Fut, F, M, T, E> FusedFuture for ChainedFuture<Fut, F>
where
    Fut: FusedFuture<Output = Result<T, E>>,
    F: FnOnce() -> M,
    M: Into<Cow<'static, str>>,
    E: Error + Send + Sync + 'static,
{
    fn is_terminated(&self) -> bool {
        self.message_fn.is_none() || self.future.is_terminated()
    }
}
