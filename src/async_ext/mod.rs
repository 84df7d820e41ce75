//! Async extensions for fault-rail.
//!
//! Aborts are bound to the call stack that raised them. In async code that
//! call stack is a single poll of a task, so each task that may abort needs a
//! recovery point of its own: [`FutureRecoverExt::recover_with`] installs one
//! around every poll of a future.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! fault-rail = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use fault_rail::prelude_async::*;
//!
//! tokio::spawn(
//!     async move { fetch_user(id).await.cast().check() }
//!         .recover_with(|err| tracing::warn!(%err, "fetch aborted")),
//! );
//! ```

mod chained_future;
mod future_ext;
mod recover_future;

pub use chained_future::ChainedFuture;
pub use future_ext::{FutureRecoverExt, FutureResultExt};
pub use recover_future::RecoverFuture;
