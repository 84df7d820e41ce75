//! Formatting shorthands for building [`ChainedError`](crate::ChainedError)s.
//!
//! - [`macro@crate::chained`] - a leaf error with a formatted message.
//! - [`macro@crate::wrap`] - wraps an error under a formatted message.
//! - [`macro@crate::ensure`] - aborts with a formatted error when a condition fails.
//!
//! # Examples
//!
//! ```
//! use fault_rail::{chained, wrap};
//!
//! let id = 42;
//! let leaf = chained!("user {} not found", id);
//! assert_eq!(leaf.message(), "user 42 not found");
//!
//! let outer = wrap!(leaf, "loading profile for {}", id);
//! assert_eq!(outer.message(), "loading profile for 42");
//! assert_eq!(outer.count(), 1);
//! ```

/// Creates a leaf [`ChainedError`](crate::ChainedError) from a format string.
///
/// # Examples
///
/// ```
/// use fault_rail::chained;
///
/// let err = chained!("shard {} unavailable", 3);
/// assert_eq!(err.count(), 0);
/// ```
#[macro_export]
macro_rules! chained {
    ($($arg:tt)*) => {
        $crate::ChainedError::new($crate::__private::format!($($arg)*))
    };
}

/// Wraps an error in a [`ChainedError`](crate::ChainedError) with a formatted message.
///
/// # Examples
///
/// ```
/// use fault_rail::wrap;
/// use std::io;
///
/// let path = "/etc/app.toml";
/// let err = wrap!(io::Error::new(io::ErrorKind::NotFound, "missing"), "reading {}", path);
/// assert_eq!(err.message(), "reading /etc/app.toml");
/// ```
#[macro_export]
macro_rules! wrap {
    ($err:expr, $($arg:tt)*) => {
        $crate::ChainedError::wrap($err, $crate::__private::format!($($arg)*))
    };
}

/// Aborts with a formatted [`ChainedError`](crate::ChainedError) unless the condition holds.
///
/// Requires the `std` feature.
///
/// # Examples
///
/// ```
/// use fault_rail::ensure;
/// use fault_rail::recovery::recovery_point;
///
/// let mut reason = String::new();
/// let done = recovery_point(
///     |err| reason = err.message().to_owned(),
///     || {
///         let retries = 5;
///         ensure!(retries < 3, "too many retries: {}", retries);
///     },
/// );
///
/// assert!(done.is_none());
/// assert_eq!(reason, "too many retries: 5");
/// ```
#[cfg(feature = "std")]
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {
        if !$cond {
            $crate::recovery::abort($crate::chained!($($arg)*));
        }
    };
}
