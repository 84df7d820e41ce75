//! Core traits for chain matching and call-site ergonomics.
//!
//! - [`ChainTarget`]: what a chain node is compared against in [`chain::is`](crate::chain::is)
//! - [`ChainSlot`]: where a matching node is copied by [`chain::as_into`](crate::chain::as_into)
//! - [`MaybeChained`]: augmentation on a possibly absent error
//! - [`Nullable`]: values that [`check_not_null`](crate::convert::check_not_null) can test
//! - [`ResultExt`]: `Result` adapters into [`Outcome`](crate::Outcome) and [`ChainedError`](crate::ChainedError)
//!
//! # Examples
//!
//! ```
//! use fault_rail::traits::{MaybeChained, ResultExt};
//! use fault_rail::ChainedError;
//!
//! let mut record: Option<ChainedError> = None;
//!
//! let parsed: i32 = "x1".parse::<i32>().handle(|err| {
//!     record.push_cause(err);
//! });
//!
//! assert_eq!(parsed, 0);
//! assert!(record.is_some());
//! ```

pub mod chain_match;
pub mod maybe_chained;
pub mod nullable;
pub mod result_ext;

pub use chain_match::{ChainSlot, ChainTarget};
pub use maybe_chained::MaybeChained;
pub use nullable::Nullable;
pub use result_ext::ResultExt;
