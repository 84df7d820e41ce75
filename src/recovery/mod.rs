//! Fail-fast aborts and the recovery points that intercept them.
//!
//! An abort is an unwinding panic whose payload is a [`ChainedError`]. It is
//! raised by [`abort`] (and so by every `check` accessor) and travels up the
//! current call stack until a [`RecoveryPoint`] converts it back into an
//! ordinary error value for its handler.
//!
//! A recovery point only intercepts error-like payloads. A panic raised for
//! any other reason, such as `panic!("...")` or an `unwrap` on `None`, is
//! re-raised untouched.
//!
//! Aborts never cross threads or tasks on their own: every spawned thread or
//! task that may abort needs its own recovery point.
//!
//! # Examples
//!
//! ```
//! use fault_rail::recovery::{abort, RecoveryPoint};
//! use fault_rail::traits::ResultExt;
//! use fault_rail::ChainedError;
//!
//! fn parse_port(raw: &str) -> u16 {
//!     let port: u16 = raw.parse::<u16>().check();
//!     if port == 0 {
//!         abort(ChainedError::new("port must be non-zero"));
//!     }
//!     port
//! }
//!
//! let mut failure = None;
//! let port = RecoveryPoint::new(|err| failure = Some(err)).protect(|| parse_port("0"));
//!
//! assert_eq!(port, None);
//! assert_eq!(failure.unwrap().message(), "port must be non-zero");
//! ```

mod hook;
pub(crate) mod point;

pub use hook::install_panic_hook;
pub use point::{recovery_point, RecoveryPoint};

use std::any::Any;
use std::panic;

use crate::types::alloc_type::Box;
use crate::types::{BoxError, ChainedError};

/// Aborts the current operation with `error`.
///
/// Control passes to the nearest enclosing [`RecoveryPoint`] on this thread.
/// If there is none the thread unwinds to its end (or the process aborts,
/// when built with `panic = "abort"`) and the chain is printed by the hook
/// from [`install_panic_hook`].
#[track_caller]
pub fn abort(error: ChainedError) -> ! {
    install_panic_hook();
    #[cfg(feature = "tracing")]
    tracing::debug!(
        head = error.message(),
        depth = error.count(),
        location = %panic::Location::caller(),
        "aborting with chained error"
    );
    panic::panic_any(error)
}

/// Extracts an error-like abort payload, handing back anything else.
pub(crate) fn into_chained(payload: Box<dyn Any + Send>) -> Result<ChainedError, Box<dyn Any + Send>> {
    payload
        .downcast::<ChainedError>()
        .map(|error| *error)
        .or_else(|payload| payload.downcast::<BoxError>().map(|error| ChainedError::from_boxed(*error)))
}
