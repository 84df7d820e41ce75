//! Error types and utilities.
//!
//! This module provides the chained error value, the value/error pair used at
//! call sites, and the formatting machinery that renders a chain.
//!
//! # Examples
//!
//! ```
//! use fault_rail::{ChainedError, Outcome};
//!
//! let err = ChainedError::new("connection refused")
//!     .with_cause(ChainedError::new("pool exhausted"));
//! assert_eq!(err.count(), 1);
//!
//! let port = Outcome::new(8080, None::<ChainedError>).handle(|_| unreachable!());
//! assert_eq!(port, 8080);
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod chained_error;
pub mod error_formatter;
pub mod outcome;

pub use chained_error::*;
pub use outcome::*;

/// SmallVec-backed collection used when walking or rendering a chain.
///
/// Uses inline storage for up to 4 elements; most chains are shallow.
pub type ErrorVec<E> = SmallVec<[E; 4]>;

/// Owned, type-erased error as produced by most fallible APIs.
pub type BoxError = alloc_type::Box<dyn core::error::Error + Send + Sync + 'static>;

/// Shared, type-erased error stored as the root cause of a [`ChainedError`].
pub type SharedError = alloc_type::Arc<dyn core::error::Error + Send + Sync + 'static>;

/// Result alias that fails with a [`ChainedError`].
///
/// # Type Parameters
///
/// * `T` - The success value type
pub type ChainedResult<T> = Result<T, ChainedError>;
