//! Extension traits for futures.
//!
//! Provides `.chained()` / `.chained_with()` for futures of `Result`,
//! mirroring the sync [`ResultExt`](crate::traits::ResultExt) trait, and
//! `.recover_with()` for any future.

use core::error::Error;
use core::future::Future;

use crate::types::alloc_type::Cow;
use crate::types::ChainedError;

use super::chained_future::ChainedFuture;
use super::recover_future::RecoverFuture;

/// Extension trait for wrapping the errors of `Result`-returning futures.
///
/// # Examples
///
/// ```rust,no_run
/// use fault_rail::prelude_async::*;
///
/// #[derive(Debug)]
/// struct User;
///
/// async fn fetch_from_db(_id: u64) -> Result<User, std::io::Error> {
///     Err(std::io::Error::new(std::io::ErrorKind::Other, "connection reset"))
/// }
///
/// async fn fetch_user(id: u64) -> ChainedResult<User> {
///     fetch_from_db(id)
///         .chained_with(|| format!("fetching user {}", id))
///         .await
/// }
/// ```
pub trait FutureResultExt<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Wraps the future's error under a fixed message.
    fn chained<M>(self, message: M) -> ChainedFuture<Self, impl FnOnce() -> M>
    where
        M: Into<Cow<'static, str>>,
        E: Error + Send + Sync + 'static,
    {
        self.chained_with(move || message)
    }

    /// Wraps the future's error under a lazily built message.
    ///
    /// The closure is only called when the future resolves to an error.
    fn chained_with<F, M>(self, f: F) -> ChainedFuture<Self, F>
    where
        F: FnOnce() -> M,
        M: Into<Cow<'static, str>>,
        E: Error + Send + Sync + 'static;
}

impl<Fut, T, E> FutureResultExt<T, E> for Fut
where
    Fut: Future<Output = Result<T, E>>,
{
    #[inline]
    fn chained_with<F, M>(self, f: F) -> ChainedFuture<Self, F>
    where
        F: FnOnce() -> M,
        M: Into<Cow<'static, str>>,
        E: Error + Send + Sync + 'static,
    {
        ChainedFuture::new(self, f)
    }
}

/// Extension trait that installs a recovery point around a future.
pub trait FutureRecoverExt: Future + Sized {
    /// Intercepts aborts raised while polling, handing them to `handler`.
    ///
    /// Resolves to `Some(output)` on normal completion and `None` after an
    /// abort was handled.
    fn recover_with<H>(self, handler: H) -> RecoverFuture<Self, H>
    where
        H: FnOnce(ChainedError),
    {
        RecoverFuture::new(self, handler)
    }
}

impl<Fut> FutureRecoverExt for Fut where Fut: Future {}
