//! Heap types used across the crate.
//!
//! `alloc` is linked in every build, so these resolve to the same types as the
//! `std` prelude when `std` is enabled and keep `no_std` builds compiling.

pub use alloc::borrow::Cow;
pub use alloc::boxed::Box;
pub use alloc::string::String;
pub use alloc::sync::Arc;
pub use alloc::vec::Vec;
