//! Call-site helpers between plain values, `Result`, and [`Outcome`].
//!
//! These adapters let code that deals in `(value, error)` pairs or plain
//! `Result`s use fail-fast and fail-through without first building an
//! [`Outcome`] by hand.
//!
//! # Examples
//!
//! ```
//! use fault_rail::convert::*;
//!
//! // Fail through: the handler sees the error, the caller keeps the value.
//! let mut failures = 0;
//! let size = cast(0u64, Some(std::fmt::Error)).handle(|_| failures += 1);
//! assert_eq!((size, failures), (0, 1));
//!
//! // Back and forth with Result.
//! let outcome = result_to_outcome::<u8, std::fmt::Error>(Ok(3));
//! assert_eq!(outcome_to_result(outcome).unwrap(), 3);
//! ```

use core::error::Error;

use crate::types::alloc_type::Cow;
use crate::types::{ChainedError, Outcome};
#[cfg(feature = "std")]
use crate::traits::Nullable;

/// Pairs `value` with an error that may be absent.
///
/// The returned outcome can be chained into `.check()` or `.handle(..)`.
#[inline]
pub fn cast<T, E>(value: T, error: Option<E>) -> Outcome<T>
where
    E: Error + Send + Sync + 'static,
{
    Outcome::new(value, error)
}

/// Returns `value`, or aborts with the coerced `error` if there is one.
///
/// # Examples
///
/// ```
/// use fault_rail::convert::check_value;
/// use fault_rail::ChainedError;
///
/// assert_eq!(check_value(5, None::<ChainedError>), 5);
/// ```
#[cfg(feature = "std")]
#[track_caller]
pub fn check_value<T, E>(value: T, error: Option<E>) -> T
where
    E: Error + Send + Sync + 'static,
{
    cast(value, error).check()
}

/// Aborts with the coerced `error` if there is one.
///
/// For operations that only report an error and produce no value.
#[cfg(feature = "std")]
#[track_caller]
pub fn check_error<E>(error: Option<E>)
where
    E: Error + Send + Sync + 'static,
{
    if let Some(error) = error {
        crate::recovery::abort(ChainedError::coerce_or_wrap(error));
    }
}

/// Returns the referent of `value`, or aborts with `message` if it is null.
///
/// Only [`Nullable`] types are accepted, so values that can never be null do
/// not compile here.
///
/// # Examples
///
/// ```
/// use fault_rail::convert::check_not_null;
/// use fault_rail::recovery::recovery_point;
///
/// let name = Some("primary");
/// assert_eq!(check_not_null(name, "name is missing"), "primary");
///
/// let mut message = String::new();
/// let missing: Option<&str> = None;
/// let result = recovery_point(
///     |err| message = err.message().to_owned(),
///     || check_not_null(missing, "name is missing"),
/// );
///
/// assert!(result.is_none());
/// assert_eq!(message, "name is missing");
/// ```
#[cfg(feature = "std")]
#[track_caller]
pub fn check_not_null<P>(value: P, message: impl Into<Cow<'static, str>>) -> P::Target
where
    P: Nullable,
{
    match value.into_non_null() {
        Some(target) => target,
        None => crate::recovery::abort(ChainedError::new(message)),
    }
}

/// Converts a `Result` into an [`Outcome`], defaulting the value on error.
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T>
where
    T: Default,
    E: Error + Send + Sync + 'static,
{
    Outcome::from(result)
}

/// Converts an [`Outcome`] into a `Result`, coercing its error.
#[inline]
pub fn outcome_to_result<T>(outcome: Outcome<T>) -> Result<T, ChainedError> {
    outcome.into_result()
}

/// Wraps the error of a `Result` in a [`ChainedError`] carrying `message`.
#[inline]
pub fn wrap_result<T, E>(result: Result<T, E>, message: impl Into<Cow<'static, str>>) -> Result<T, ChainedError>
where
    E: Error + Send + Sync + 'static,
{
    result.map_err(|error| ChainedError::wrap(error, message))
}
