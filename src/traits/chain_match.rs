//! Matching capabilities used by chain traversal.
//!
//! [`chain::is`](crate::chain::is) and [`chain::as_into`](crate::chain::as_into)
//! never inspect nodes themselves; they ask a [`ChainTarget`] or a
//! [`ChainSlot`] at each step. Both traits have blanket implementations that
//! cover the usual case (equality and downcasting) and can be implemented for
//! local types to provide custom matching.

use core::error::Error;

use crate::chain::dereference;

/// Something a chain node can be compared against.
///
/// Every `T: Error + PartialEq` is a target: a node matches when it is a `T`
/// (directly or behind one `Box`/`Arc`) equal to the target.
///
/// # Examples
///
/// A custom target that matches on `io::ErrorKind` instead of identity:
///
/// ```
/// use fault_rail::traits::ChainTarget;
/// use fault_rail::{chain, ChainedError};
/// use std::io;
///
/// struct Kind(io::ErrorKind);
///
/// impl ChainTarget for Kind {
///     fn matches(&self, node: &(dyn std::error::Error + 'static)) -> bool {
///         chain::dereference::<io::Error>(node).is_some_and(|e| e.kind() == self.0)
///     }
/// }
///
/// let err = ChainedError::wrap(io::Error::new(io::ErrorKind::TimedOut, "slow"), "fetch");
/// assert!(chain::is(&err, &Kind(io::ErrorKind::TimedOut)));
/// assert!(!chain::is(&err, &Kind(io::ErrorKind::NotFound)));
/// ```
pub trait ChainTarget {
    /// Returns true when `node` is the error this target stands for.
    fn matches(&self, node: &(dyn Error + 'static)) -> bool;
}

impl<T> ChainTarget for T
where
    T: Error + PartialEq + 'static,
{
    #[inline]
    fn matches(&self, node: &(dyn Error + 'static)) -> bool {
        dereference::<T>(node).is_some_and(|candidate| candidate == self)
    }
}

/// An output location that can be filled from a chain node.
///
/// `Option<T>` is a slot for any `T: Error + Clone`: it accepts the first node
/// that is a `T`, directly or behind one `Box`/`Arc`.
///
/// Because the slot type is checked by the compiler, handing traversal an
/// invalid slot is a build error rather than a runtime failure.
pub trait ChainSlot {
    /// Tries to fill the slot from `node`; returns whether it was filled.
    ///
    /// Implementations must leave the slot untouched when returning `false`.
    fn fill(&mut self, node: &(dyn Error + 'static)) -> bool;
}

impl<T> ChainSlot for Option<T>
where
    T: Error + Clone + 'static,
{
    fn fill(&mut self, node: &(dyn Error + 'static)) -> bool {
        match dereference::<T>(node) {
            Some(value) => {
                *self = Some(value.clone());
                true
            },
            None => false,
        }
    }
}
