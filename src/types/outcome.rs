//! Value/error pair with fail-fast and fail-through accessors.
//!
//! An [`Outcome`] always carries a value, even when the operation that
//! produced it failed. The caller then chooses, per call site, between
//! aborting ([`Outcome::check`]) and recording the error while carrying on
//! with the value ([`Outcome::handle`]).

use core::error::Error;

use crate::types::alloc_type::Box;
use crate::types::{BoxError, ChainedError};

/// The result of a fallible operation, consumed by exactly one accessor.
///
/// # Examples
///
/// ```
/// use fault_rail::Outcome;
///
/// let ok = Outcome::ok(3);
/// assert_eq!(ok.handle(|_| unreachable!()), 3);
///
/// let mut seen = Vec::new();
/// let failed = Outcome::new(0, Some(std::fmt::Error));
/// assert_eq!(failed.handle(|err| seen.push(err)), 0);
/// assert_eq!(seen.len(), 1);
/// ```
#[must_use = "an outcome must be checked or handled"]
#[derive(Debug)]
pub struct Outcome<T> {
    value: T,
    error: Option<BoxError>,
}

impl<T> Outcome<T> {
    /// Pairs `value` with an error that may be absent.
    #[inline]
    pub fn new<E>(value: T, error: Option<E>) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self { value, error: error.map(|e| Box::new(e) as BoxError) }
    }

    /// Pairs `value` with an already boxed error that may be absent.
    #[inline]
    pub fn from_boxed(value: T, error: Option<BoxError>) -> Self {
        Self { value, error }
    }

    /// A successful outcome.
    #[inline]
    pub fn ok(value: T) -> Self {
        Self { value, error: None }
    }

    /// Returns true when no error is set.
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Returns true when an error is set.
    #[inline]
    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }

    /// Returns the value, which is meaningful only if no error is set.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the error, if any.
    #[inline]
    pub fn error(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.error.as_deref()
    }

    /// Returns the value, or aborts with the coerced error.
    ///
    /// This is the fail-fast accessor: when an error is set it never returns
    /// and control passes to the nearest enclosing
    /// [`RecoveryPoint`](crate::recovery::RecoveryPoint).
    ///
    /// # Examples
    ///
    /// ```
    /// use fault_rail::recovery::recovery_point;
    /// use fault_rail::{ChainedError, Outcome};
    ///
    /// let mut handled = Vec::new();
    /// let finished = recovery_point(
    ///     |err| handled.push(err),
    ///     || Outcome::new(1, Some(ChainedError::new("refused"))).check() + 1,
    /// );
    ///
    /// assert_eq!(finished, None);
    /// assert_eq!(handled[0].message(), "refused");
    /// ```
    #[cfg(feature = "std")]
    #[track_caller]
    pub fn check(self) -> T {
        match self.error {
            Some(error) => crate::recovery::abort(ChainedError::from_boxed(error)),
            None => self.value,
        }
    }

    /// Returns the value, calling `handler` first if an error is set.
    ///
    /// This is the fail-through accessor: it never aborts. The handler runs
    /// synchronously, at most once, with the coerced error.
    pub fn handle<F>(self, handler: F) -> T
    where
        F: FnOnce(ChainedError),
    {
        if let Some(error) = self.error {
            let error = ChainedError::from_boxed(error);
            #[cfg(feature = "tracing")]
            tracing::trace!(head = error.message(), depth = error.count(), "handling error");
            handler(error);
        }
        self.value
    }

    /// Converts into a `Result`, coercing the error.
    ///
    /// This is fail-fast by early return: use it with `?` when the caller
    /// propagates errors as values.
    ///
    /// # Examples
    ///
    /// ```
    /// use fault_rail::{ChainedResult, Outcome};
    ///
    /// fn doubled(outcome: Outcome<i32>) -> ChainedResult<i32> {
    ///     Ok(outcome.into_result()? * 2)
    /// }
    ///
    /// assert_eq!(doubled(Outcome::ok(4)).unwrap(), 8);
    /// assert!(doubled(Outcome::new(4, Some(std::fmt::Error))).is_err());
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, ChainedError> {
        match self.error {
            Some(error) => Err(ChainedError::from_boxed(error)),
            None => Ok(self.value),
        }
    }

    /// Splits the outcome into its value and error.
    #[inline]
    pub fn into_parts(self) -> (T, Option<BoxError>) {
        (self.value, self.error)
    }

    /// Maps the value, keeping the error.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        Outcome { value: f(self.value), error: self.error }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    T: Default,
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(error) => Self::new(T::default(), Some(error)),
        }
    }
}
