use core::error::Error;
use std::any::Any;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};

use crate::types::alloc_type::Box;
use crate::types::ChainedError;

thread_local! {
    static ACTIVE: Cell<usize> = const { Cell::new(0) };
}

/// Returns true while a recovery point is protecting a body on this thread.
pub(crate) fn is_active() -> bool {
    ACTIVE.with(|active| active.get() > 0)
}

/// Marks the current thread as protected for as long as it lives.
pub(crate) struct ActiveGuard;

impl ActiveGuard {
    pub(crate) fn enter() -> Self {
        super::install_panic_hook();
        ACTIVE.with(|active| active.set(active.get() + 1));
        Self
    }
}

impl Drop for ActiveGuard {
    fn drop(&mut self) {
        ACTIVE.with(|active| active.set(active.get().saturating_sub(1)));
    }
}

/// Interception boundary for aborts.
///
/// A recovery point protects exactly one body. When the body completes, its
/// value is returned. When it aborts, the handler receives the error and
/// execution resumes after the recovery point. Panics that do not carry an
/// error keep unwinding.
///
/// The handler runs outside the protected body, so an abort raised by the
/// handler itself goes to the next enclosing recovery point.
///
/// # Examples
///
/// ```
/// use fault_rail::recovery::{abort, RecoveryPoint};
/// use fault_rail::ChainedError;
///
/// let mut log = Vec::new();
/// let value = RecoveryPoint::new(|err: ChainedError| log.push(err.message().to_owned()))
///     .protect(|| -> i32 { abort(ChainedError::new("stopped")) });
///
/// assert_eq!(value, None);
/// assert_eq!(log, ["stopped"]);
/// ```
#[must_use = "a recovery point does nothing until it protects a body"]
pub struct RecoveryPoint<H> {
    handler: H,
}

impl<H> RecoveryPoint<H>
where
    H: FnOnce(ChainedError),
{
    /// Creates a recovery point that reports intercepted errors to `handler`.
    #[inline]
    pub fn new(handler: H) -> Self {
        Self { handler }
    }

    /// Runs `body`, intercepting any abort it raises.
    ///
    /// Returns `Some` with the body's value on normal completion and `None`
    /// once an abort was handed to the handler.
    pub fn protect<R, B>(self, body: B) -> Option<R>
    where
        B: FnOnce() -> R,
    {
        let outcome = {
            let _guard = ActiveGuard::enter();
            panic::catch_unwind(AssertUnwindSafe(body))
        };

        match outcome {
            Ok(value) => Some(value),
            Err(payload) => {
                self.intercept(payload);
                None
            },
        }
    }

    /// Runs a fallible `body`, treating a returned error like an abort.
    ///
    /// # Examples
    ///
    /// ```
    /// use fault_rail::recovery::RecoveryPoint;
    /// use fault_rail::ChainedError;
    ///
    /// let mut handled = 0;
    /// let value = RecoveryPoint::new(|_| handled += 1).protect_result(|| {
    ///     let n: i32 = "12".parse()?;
    ///     let m: i32 = "x".parse()?;
    ///     Ok::<_, std::num::ParseIntError>(n + m)
    /// });
    ///
    /// assert_eq!(value, None);
    /// assert_eq!(handled, 1);
    /// ```
    pub fn protect_result<R, E, B>(self, body: B) -> Option<R>
    where
        B: FnOnce() -> Result<R, E>,
        E: Error + Send + Sync + 'static,
    {
        let outcome = {
            let _guard = ActiveGuard::enter();
            panic::catch_unwind(AssertUnwindSafe(body))
        };

        match outcome {
            Ok(Ok(value)) => Some(value),
            Ok(Err(error)) => {
                self.dispatch(ChainedError::coerce_or_wrap(error));
                None
            },
            Err(payload) => {
                self.intercept(payload);
                None
            },
        }
    }

    /// Hands an error-like payload to the handler, re-raising anything else.
    pub(crate) fn intercept(self, payload: Box<dyn Any + Send>) {
        match super::into_chained(payload) {
            Ok(error) => self.dispatch(error),
            Err(payload) => {
                #[cfg(feature = "tracing")]
                tracing::trace!("re-raising panic without an error payload");
                panic::resume_unwind(payload)
            },
        }
    }

    fn dispatch(self, error: ChainedError) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            head = error.message(),
            depth = error.count(),
            "recovery point intercepted error"
        );
        (self.handler)(error)
    }
}

impl<H> core::fmt::Debug for RecoveryPoint<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RecoveryPoint").finish_non_exhaustive()
    }
}

/// Runs `body` under a [`RecoveryPoint`] reporting to `handler`.
///
/// # Examples
///
/// ```
/// use fault_rail::recovery::recovery_point;
///
/// assert_eq!(recovery_point(|_| unreachable!(), || 7), Some(7));
/// ```
#[inline]
pub fn recovery_point<H, R, B>(handler: H, body: B) -> Option<R>
where
    H: FnOnce(ChainedError),
    B: FnOnce() -> R,
{
    RecoveryPoint::new(handler).protect(body)
}
