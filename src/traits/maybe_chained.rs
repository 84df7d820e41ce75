use core::error::Error;

use crate::types::ChainedError;

/// Augmentation for an error that may not exist yet.
///
/// Fail-through code usually starts with no error at all and records
/// failures as they happen. Implemented for `Option<ChainedError>`, this trait
/// makes the first recorded error the head of the chain and appends every
/// later one to it.
///
/// # Examples
///
/// ```
/// use fault_rail::traits::MaybeChained;
/// use fault_rail::ChainedError;
/// use std::io;
///
/// let mut record: Option<ChainedError> = None;
/// record.push_cause(io::Error::new(io::ErrorKind::Other, "first"));
/// record.push_cause(io::Error::new(io::ErrorKind::Other, "second"));
/// record.push_cause(io::Error::new(io::ErrorKind::Other, "third"));
///
/// assert_eq!(record.map(|err| err.count()), Some(3));
/// ```
pub trait MaybeChained {
    /// Attaches `error`, returning the resulting head.
    ///
    /// On an absent receiver this is [`ChainedError::coerce_or_wrap`].
    fn with_cause<E>(self, error: E) -> ChainedError
    where
        E: Error + Send + Sync + 'static;

    /// Attaches `error` in place, returning the head.
    fn push_cause<E>(&mut self, error: E) -> &mut ChainedError
    where
        E: Error + Send + Sync + 'static;

    /// Attaches `error` in place, if there is one.
    fn push_maybe_cause<E>(&mut self, error: Option<E>)
    where
        E: Error + Send + Sync + 'static;
}

impl MaybeChained for Option<ChainedError> {
    #[inline]
    fn with_cause<E>(self, error: E) -> ChainedError
    where
        E: Error + Send + Sync + 'static,
    {
        match self {
            Some(head) => head.with_cause(error),
            None => ChainedError::coerce_or_wrap(error),
        }
    }

    #[inline]
    fn push_cause<E>(&mut self, error: E) -> &mut ChainedError
    where
        E: Error + Send + Sync + 'static,
    {
        let head = self.take().with_cause(error);
        self.insert(head)
    }

    #[inline]
    fn push_maybe_cause<E>(&mut self, error: Option<E>)
    where
        E: Error + Send + Sync + 'static,
    {
        if let Some(error) = error {
            self.push_cause(error);
        }
    }
}
