//! Traversal of error chains.
//!
//! A chain is the sequence of errors reachable from a starting error by
//! repeatedly calling [`unwrap`] (that is, [`Error::source`]). The functions
//! here work on any `dyn Error`, not only on [`ChainedError`], so a foreign
//! error that wraps one of ours can still be searched.
//!
//! # Examples
//!
//! ```
//! use fault_rail::{chain, ChainedError};
//!
//! let root = ChainedError::new("disk full");
//! let err = ChainedError::wrap(ChainedError::wrap(root.clone(), "flush"), "commit");
//!
//! assert!(chain::is(&err, &root));
//!
//! let mut slot: Option<ChainedError> = None;
//! assert!(chain::as_into(&err, &mut slot));
//! assert_eq!(slot.unwrap().message(), "commit");
//! ```

use core::error::Error;
use core::iter::FusedIterator;

use crate::traits::{ChainSlot, ChainTarget};
use crate::types::alloc_type::{Arc, Box};
#[cfg(doc)]
use crate::types::ChainedError;

/// Returns the next error in the chain, if the error exposes one.
///
/// This is a one-level probe: errors that do not override
/// [`Error::source`] simply end the chain.
///
/// # Examples
///
/// ```
/// use fault_rail::{chain, ChainedError};
///
/// let leaf = ChainedError::new("leaf");
/// assert!(chain::unwrap(&leaf).is_none());
///
/// let wrapped = ChainedError::wrap(leaf, "outer");
/// assert!(chain::unwrap(&wrapped).is_some());
/// ```
#[inline]
pub fn unwrap<'a>(error: &'a (dyn Error + 'static)) -> Option<&'a (dyn Error + 'static)> {
    error.source()
}

/// Returns an iterator over `error` and every error reachable from it.
#[inline]
pub fn iter<'a>(error: &'a (dyn Error + 'static)) -> Chain<'a> {
    Chain { next: Some(error) }
}

/// Reports whether any node of the chain matches `target`.
///
/// Each node is offered to [`ChainTarget::matches`], starting with `error`
/// itself. For ordinary error values that means value equality after one
/// level of `Box`/`Arc` has been stripped, so two distinct instances with the
/// same representation are considered the same error.
///
/// # Examples
///
/// ```
/// use fault_rail::{chain, ChainedError};
///
/// let first = ChainedError::new("timeout");
/// let second = ChainedError::new("timeout");
/// assert!(chain::is(&first, &second));
///
/// let wrapped = ChainedError::wrap(first, "request");
/// assert!(chain::is(&wrapped, &second));
/// assert!(!chain::is(&wrapped, &ChainedError::new("refused")));
/// ```
pub fn is<T>(error: &(dyn Error + 'static), target: &T) -> bool
where
    T: ChainTarget + ?Sized,
{
    iter(error).any(|node| target.matches(node))
}

/// Optional form of [`is`].
///
/// Two absent values are the same; an absent value never matches a present one.
#[inline]
pub fn is_opt<T>(error: Option<&(dyn Error + 'static)>, target: Option<&T>) -> bool
where
    T: ChainTarget + ?Sized,
{
    match (error, target) {
        (None, None) => true,
        (Some(error), Some(target)) => is(error, target),
        _ => false,
    }
}

/// Fills `slot` from the first node of the chain it accepts.
///
/// Returns `false` and leaves the slot untouched when no node is accepted.
///
/// # Examples
///
/// ```
/// use fault_rail::{chain, ChainedError};
/// use std::io;
///
/// let err = ChainedError::wrap(io::Error::new(io::ErrorKind::Other, "eof"), "read");
///
/// let mut slot: Option<ChainedError> = None;
/// assert!(chain::as_into(&err, &mut slot));
///
/// let mut missing: Option<std::fmt::Error> = None;
/// assert!(!chain::as_into(&err, &mut missing));
/// assert!(missing.is_none());
/// ```
pub fn as_into<S>(error: &(dyn Error + 'static), slot: &mut S) -> bool
where
    S: ChainSlot + ?Sized,
{
    iter(error).any(|node| slot.fill(node))
}

/// Returns a reference to the first node of the chain whose concrete type is `T`.
///
/// Like [`as_into`] this looks through one level of `Box`/`Arc`, but it
/// borrows instead of cloning, so `T` need not be `Clone`.
///
/// # Examples
///
/// ```
/// use fault_rail::{chain, ChainedError};
/// use std::io;
///
/// let err = ChainedError::wrap(io::Error::new(io::ErrorKind::NotFound, "gone"), "open");
/// let io_err = chain::find::<io::Error>(&err).unwrap();
/// assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
/// ```
pub fn find<'a, T>(error: &'a (dyn Error + 'static)) -> Option<&'a T>
where
    T: Error + 'static,
{
    iter(error).find_map(dereference::<T>)
}

/// Downcasts `error` to `T`, looking through one level of `Box` or `Arc`.
#[inline]
pub fn dereference<'a, T>(error: &'a (dyn Error + 'static)) -> Option<&'a T>
where
    T: Error + 'static,
{
    if let Some(value) = error.downcast_ref::<T>() {
        return Some(value);
    }
    if let Some(boxed) = error.downcast_ref::<Box<T>>() {
        return Some(&**boxed);
    }
    error.downcast_ref::<Arc<T>>().map(|shared| &**shared)
}

/// Iterator over the nodes of an error chain.
///
/// Created by [`iter`].
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = unwrap(current);
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}

impl core::fmt::Debug for Chain<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
