//! Async prelude - all async utilities in one import.
//!
//! This module re-exports everything from the sync [`prelude`](crate::prelude)
//! plus async-specific items.
//!
//! # Usage
//!
//! ```ignore
//! use fault_rail::prelude_async::*;
//!
//! async fn fetch_user(id: u64) -> ChainedResult<User> {
//!     fetch_from_db(id)
//!         .chained("fetching user from database")
//!         .await
//! }
//! ```
//!
//! # What's Included
//!
//! ## Async-Specific
//!
//! - **Traits**: [`FutureResultExt`](crate::async_ext::FutureResultExt) - `.chained()` and `.chained_with()` for futures
//! - **Traits**: [`FutureRecoverExt`](crate::async_ext::FutureRecoverExt) - `.recover_with()` for any future
//! - **Types**: [`ChainedFuture`](crate::async_ext::ChainedFuture), [`RecoverFuture`](crate::async_ext::RecoverFuture)

// Re-export everything from sync prelude
pub use crate::prelude::*;

// Async-specific exports
pub use crate::async_ext::{ChainedFuture, FutureRecoverExt, FutureResultExt, RecoverFuture};
