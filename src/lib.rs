//! Chained errors with fail-fast aborts and recovery points.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `fault_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Building a Chain
//!
//! ```
//! use fault_rail::{chain, ChainedError};
//! use std::io;
//!
//! let denied = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
//! let err = ChainedError::wrap(denied, "opening journal");
//! assert_eq!(chain::find::<io::Error>(&err).map(io::Error::kind), Some(io::ErrorKind::PermissionDenied));
//!
//! // Attached errors are visited before (and in place of) the root cause.
//! let err = err.with_cause(ChainedError::new("flush skipped"));
//! assert!(chain::is(&err, &ChainedError::new("flush skipped")));
//! assert!(chain::find::<io::Error>(&err).is_none());
//! assert!(err.root_cause().is_some());
//! ```
//!
//! ## Fail Fast and Fail Through
//!
//! ```
//! use fault_rail::recovery::recovery_point;
//! use fault_rail::{ChainedError, Outcome, CAST_MESSAGE};
//!
//! // Fail through: record and carry on with the value.
//! let mut warnings = Vec::new();
//! let retries = Outcome::new(3, Some(std::fmt::Error)).handle(|err| warnings.push(err));
//! assert_eq!(retries, 3);
//! assert_eq!(warnings[0].message(), CAST_MESSAGE);
//!
//! // Fail fast: abort to the nearest recovery point.
//! let mut aborted = None;
//! let total = recovery_point(
//!     |err| aborted = Some(err),
//!     || Outcome::new(1, Some(ChainedError::new("quota exceeded"))).check() + 1,
//! );
//! assert_eq!(total, None);
//! assert_eq!(aborted.map(|e| e.to_string()), Some("quota exceeded (cause count 0)".to_string()));
//! ```
//!
//! ## Propagating as Values
//!
//! ```
//! use fault_rail::{ChainFormatConfig, ChainedResult, Outcome};
//!
//! fn load(outcome: Outcome<u32>) -> ChainedResult<u32> {
//!     outcome.into_result()
//! }
//!
//! let err = load(Outcome::new(0, Some(std::fmt::Error))).unwrap_err();
//! let rendered = err.error_chain_with(ChainFormatConfig::compact());
//! assert_eq!(rendered, "cast to chained error | root cause: an error occurred when formatting an argument");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Traversal of error chains: unwrap, is, as
pub mod chain;
/// Call-site helpers between values, Result, and Outcome
pub mod convert;
/// Formatting macros for building chained errors
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits for chain matching and call-site ergonomics
pub mod traits;
/// ChainedError, Outcome, and chain formatting
pub mod types;

/// Fail-fast aborts and recovery points (requires `std` feature)
#[cfg(feature = "std")]
pub mod recovery;

/// Async extensions for error handling (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// Tracing integration - span links and chain events (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

#[doc(hidden)]
pub mod __private {
    pub use alloc::format;
}

// Re-export common types that might be needed at root,
// but encourage using the prelude modules.
pub use traits::*;
pub use types::{
    error_formatter::{ChainFormatConfig, ChainFormatter},
    BoxError, ChainedError, ChainedResult, ErrorVec, Links, Outcome, SharedError, CAST_MESSAGE,
};
