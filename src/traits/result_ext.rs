//! Extension trait that brings fail-fast and fail-through to `Result`.
//!
//! This module provides [`ResultExt`], which lets a `Result` returned by any
//! API be used directly with the [`Outcome`] accessors, or have its error
//! wrapped into a [`ChainedError`] without a `.map_err()` closure.
//!
//! # Examples
//!
//! ```
//! use fault_rail::traits::ResultExt;
//! use fault_rail::ChainedResult;
//!
//! fn load_config() -> ChainedResult<String> {
//!     std::fs::read_to_string("config.toml").chained("loading configuration file")
//! }
//!
//! assert!(load_config().is_err());
//! ```

use core::error::Error;

use crate::types::alloc_type::Cow;
use crate::types::{ChainedError, Outcome};

/// Extension trait for using `Result` values at fail-fast and fail-through call sites.
///
/// `cast` and `handle` need a value even when the operation failed, so they
/// require `T: Default`; the default stands in for the missing value.
///
/// # Examples
///
/// ## Fail through
///
/// ```
/// use fault_rail::traits::ResultExt;
///
/// let mut failures = 0;
/// let port: u16 = "eighty".parse::<u16>().handle(|_| failures += 1);
///
/// assert_eq!(port, 0);
/// assert_eq!(failures, 1);
/// ```
///
/// ## Fail fast
///
/// ```
/// use fault_rail::recovery::recovery_point;
/// use fault_rail::traits::ResultExt;
///
/// let mut seen = None;
/// let finished = recovery_point(
///     |err| seen = Some(err),
///     || {
///         let port: u16 = "eighty".parse::<u16>().check();
///         port + 1
///     },
/// );
///
/// assert!(finished.is_none());
/// assert!(seen.is_some());
/// ```
pub trait ResultExt<T, E> {
    /// Converts the result into an [`Outcome`].
    fn cast(self) -> Outcome<T>
    where
        T: Default;

    /// Returns the value, or aborts with the coerced error.
    ///
    /// See [`Outcome::check`].
    #[cfg(feature = "std")]
    fn check(self) -> T;

    /// Returns the value, calling `handler` first if there was an error.
    ///
    /// See [`Outcome::handle`].
    fn handle<F>(self, handler: F) -> T
    where
        T: Default,
        F: FnOnce(ChainedError);

    /// Wraps the error in a [`ChainedError`] carrying `message`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fault_rail::traits::ResultExt;
    ///
    /// let result: Result<(), std::fmt::Error> = Err(std::fmt::Error);
    /// let err = result.chained("rendering template").unwrap_err();
    /// assert_eq!(err.message(), "rendering template");
    /// assert_eq!(err.count(), 1);
    /// ```
    fn chained<M>(self, message: M) -> Result<T, ChainedError>
    where
        M: Into<Cow<'static, str>>;

    /// Like [`chained`](ResultExt::chained), building the message only on error.
    fn chained_with<F, M>(self, f: F) -> Result<T, ChainedError>
    where
        F: FnOnce() -> M,
        M: Into<Cow<'static, str>>;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn cast(self) -> Outcome<T>
    where
        T: Default,
    {
        Outcome::from(self)
    }

    #[cfg(feature = "std")]
    #[track_caller]
    fn check(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => crate::recovery::abort(ChainedError::coerce_or_wrap(error)),
        }
    }

    #[inline]
    fn handle<F>(self, handler: F) -> T
    where
        T: Default,
        F: FnOnce(ChainedError),
    {
        self.cast().handle(handler)
    }

    #[inline]
    fn chained<M>(self, message: M) -> Result<T, ChainedError>
    where
        M: Into<Cow<'static, str>>,
    {
        self.map_err(|e| ChainedError::wrap(e, message))
    }

    #[inline]
    fn chained_with<F, M>(self, f: F) -> Result<T, ChainedError>
    where
        F: FnOnce() -> M,
        M: Into<Cow<'static, str>>,
    {
        self.map_err(|e| ChainedError::wrap(e, f()))
    }
}
