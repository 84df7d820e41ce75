use core::error::Error;
use core::fmt::Display;

use super::ChainedError;
use crate::chain;
use crate::types::alloc_type::{Arc, String};
use crate::types::error_formatter::ChainFormatConfig;
use crate::types::{BoxError, SharedError};

impl Display for ChainedError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if !f.alternate() {
            return f.write_str(&self.error_chain());
        }
        f.write_str(&self.error_chain_with(ChainFormatConfig::cascaded()))
    }
}

impl Error for ChainedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self.next.as_deref() {
            Some(next) => Some(next),
            None => self.cause(),
        }
    }
}

impl PartialEq for ChainedError {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
            && self.depth == other.depth
            && self.next == other.next
            && same_cause(self.cause.as_ref(), other.cause.as_ref())
    }
}

impl Eq for ChainedError {}

/// Causes are equal when they are the same allocation or [`same_error`] holds.
fn same_cause(left: Option<&SharedError>, right: Option<&SharedError>) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(left), Some(right)) => Arc::ptr_eq(left, right) || same_error(&**left, &**right),
        _ => false,
    }
}

/// Chained errors compare structurally; any other pair of errors is equal
/// when neither can be told apart from the other by its rendering.
pub(crate) fn same_error(left: &(dyn Error + 'static), right: &(dyn Error + 'static)) -> bool {
    match (
        chain::dereference::<ChainedError>(left),
        chain::dereference::<ChainedError>(right),
    ) {
        (Some(left), Some(right)) => left == right,
        (None, None) => {
            alloc::format!("{left:?}") == alloc::format!("{right:?}")
                && alloc::format!("{left}") == alloc::format!("{right}")
        },
        _ => false,
    }
}

impl From<BoxError> for ChainedError {
    #[inline]
    fn from(error: BoxError) -> Self {
        Self::from_boxed(error)
    }
}

impl From<&'static str> for ChainedError {
    #[inline]
    fn from(message: &'static str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ChainedError {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
