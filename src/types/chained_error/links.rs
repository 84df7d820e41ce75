use core::iter::FusedIterator;

use super::ChainedError;

/// Iterator over the links of a [`ChainedError`], head first.
///
/// Only attached errors are visited; root causes are not links.
///
/// # Examples
///
/// ```
/// use fault_rail::ChainedError;
///
/// let err = ChainedError::new("a")
///     .with_cause(ChainedError::new("b"))
///     .with_cause(ChainedError::new("c"));
///
/// let messages: Vec<_> = err.links().map(ChainedError::message).collect();
/// assert_eq!(messages, ["a", "b", "c"]);
/// ```
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Links<'a> {
    next: Option<&'a ChainedError>,
}

impl<'a> Links<'a> {
    #[inline]
    pub(crate) fn new(head: &'a ChainedError) -> Self {
        Self { next: Some(head) }
    }
}

impl<'a> Iterator for Links<'a> {
    type Item = &'a ChainedError;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.next();
        Some(current)
    }
}

impl FusedIterator for Links<'_> {}
