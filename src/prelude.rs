//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use fault_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`chained!`], [`wrap!`], [`ensure!`]
//! - **Types**: [`ChainedError`], [`Outcome`], [`ChainedResult`]
//! - **Traits**: [`ResultExt`], [`MaybeChained`], [`ChainTarget`], [`ChainSlot`], [`Nullable`]
//! - **Functions**: [`cast`], [`check_value`], [`check_error`], [`check_not_null`]
//! - **Recovery**: [`RecoveryPoint`], [`recovery_point`], [`abort`]
//!
//! # Examples
//!
//! ```
//! use fault_rail::prelude::*;
//!
//! fn read_limit(raw: &str) -> u32 {
//!     raw.trim().parse::<u32>().chained("reading limit").cast().check()
//! }
//!
//! let mut failure = None;
//! let limit = recovery_point(|err| failure = Some(err), || read_limit("ten"));
//!
//! assert_eq!(limit, None);
//! assert_eq!(failure.unwrap().message(), "reading limit");
//! ```

// Macros
pub use crate::{chained, wrap};

#[cfg(feature = "std")]
pub use crate::ensure;

// Core types
pub use crate::types::{ChainedError, ChainedResult, Outcome};

// Traits
pub use crate::traits::{ChainSlot, ChainTarget, MaybeChained, Nullable, ResultExt};

// Chain traversal
pub use crate::chain;

// Call-site helpers
pub use crate::convert::cast;

#[cfg(feature = "std")]
pub use crate::convert::{check_error, check_not_null, check_value};

// Recovery
#[cfg(feature = "std")]
pub use crate::recovery::{abort, recovery_point, RecoveryPoint};
