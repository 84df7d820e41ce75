//! Chained error value with cause linkage and depth counting.
//!
//! This module provides [`ChainedError`], an error that carries:
//! - A human-readable message
//! - An optional root cause, which may be any foreign error
//! - An optional owned list of additional errors attached by augmentation
//! - A depth counter tracking how many links have been attached

use core::error::Error;

use crate::chain;
use crate::types::alloc_type::{Arc, Box, Cow, String};
use crate::types::error_formatter::{ChainFormatConfig, ChainFormatter};
use crate::types::{BoxError, ErrorVec, SharedError};

mod links;
mod traits;

pub use links::Links;

/// Message given to the wrapper created when a foreign error is coerced.
pub const CAST_MESSAGE: &str = "cast to chained error";

/// Error value that wraps a root cause and accumulates further errors.
///
/// Unwrapping (via [`Error::source`]) yields the next attached error when
/// there is one and the root cause otherwise, so augmentation is always seen
/// before causation.
///
/// # Examples
///
/// ```
/// use fault_rail::ChainedError;
/// use std::io;
///
/// let err = ChainedError::wrap(io::Error::new(io::ErrorKind::NotFound, "no such file"), "open")
///     .with_cause(ChainedError::new("retry budget spent"));
///
/// assert_eq!(err.message(), "open");
/// assert_eq!(err.count(), 1);
/// assert_eq!(err.next().map(ChainedError::message), Some("retry budget spent"));
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct ChainedError {
    pub(crate) message: Cow<'static, str>,
    pub(crate) cause: Option<SharedError>,
    pub(crate) next: Option<Box<ChainedError>>,
    pub(crate) depth: usize,
}

impl ChainedError {
    /// Creates a leaf error with no cause.
    #[inline]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self { message: message.into(), cause: None, next: None, depth: 0 }
    }

    /// Wraps `error` as the root cause under `message`.
    #[inline]
    pub fn wrap<E>(error: E, message: impl Into<Cow<'static, str>>) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::wrap_shared(Arc::new(error), message)
    }

    /// Wraps an already boxed error as the root cause under `message`.
    #[inline]
    pub fn wrap_boxed(error: BoxError, message: impl Into<Cow<'static, str>>) -> Self {
        Self::wrap_shared(Arc::from(error), message)
    }

    /// Wraps a shared error as the root cause under `message`.
    ///
    /// Errors wrapped from the same `Arc` compare equal by identity.
    #[inline]
    pub fn wrap_shared(error: SharedError, message: impl Into<Cow<'static, str>>) -> Self {
        Self { message: message.into(), cause: Some(error), next: None, depth: 1 }
    }

    /// Wraps an error that may be absent.
    ///
    /// Wrapping nothing still succeeds and produces a depth-1 error without a cause.
    pub fn wrap_opt<E>(error: Option<E>, message: impl Into<Cow<'static, str>>) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        match error {
            Some(error) => Self::wrap(error, message),
            None => Self { message: message.into(), cause: None, next: None, depth: 1 },
        }
    }

    /// Returns `error` itself if it is a `ChainedError`, otherwise wraps it.
    ///
    /// One level of `Box` or `Arc` is looked through. Foreign errors are
    /// wrapped under [`CAST_MESSAGE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fault_rail::{ChainedError, CAST_MESSAGE};
    ///
    /// let own = ChainedError::new("own");
    /// assert_eq!(ChainedError::coerce_or_wrap(Box::new(own.clone())), own);
    ///
    /// let foreign = ChainedError::coerce_or_wrap(std::fmt::Error);
    /// assert_eq!(foreign.message(), CAST_MESSAGE);
    /// assert_eq!(foreign.count(), 1);
    /// ```
    #[inline]
    pub fn coerce_or_wrap<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::from_boxed(Box::new(error))
    }

    /// Boxed form of [`coerce_or_wrap`](ChainedError::coerce_or_wrap).
    pub fn from_boxed(error: BoxError) -> Self {
        match error.downcast::<ChainedError>() {
            Ok(chained) => *chained,
            Err(error) => match chain::dereference::<ChainedError>(&*error) {
                Some(chained) => chained.clone(),
                None => Self::wrap_boxed(error, CAST_MESSAGE),
            },
        }
    }

    /// Returns the message given at construction.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the wrapped root cause, if any.
    #[inline]
    pub fn cause(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }

    /// Returns the next attached error, if any.
    #[inline]
    pub fn next(&self) -> Option<&ChainedError> {
        self.next.as_deref()
    }

    /// Returns the depth counter.
    #[inline]
    pub fn count(&self) -> usize {
        self.depth
    }

    /// Returns an iterator over this error and every attached error, head first.
    #[inline]
    pub fn links(&self) -> Links<'_> {
        Links::new(self)
    }

    /// Returns the deepest error reachable from this link's own cause.
    ///
    /// # Examples
    ///
    /// ```
    /// use fault_rail::ChainedError;
    ///
    /// let err = ChainedError::wrap(ChainedError::wrap(std::fmt::Error, "format"), "render");
    /// assert_eq!(err.root_cause().unwrap().to_string(), std::fmt::Error.to_string());
    ///
    /// assert!(ChainedError::new("leaf").root_cause().is_none());
    /// ```
    pub fn root_cause(&self) -> Option<&(dyn Error + 'static)> {
        self.cause().and_then(|cause| chain::iter(cause).last())
    }

    /// Attaches `error` to the chain and returns the head.
    ///
    /// If `error` is already part of the chain (see [`chain::is`]) nothing
    /// changes. Otherwise it is coerced with
    /// [`coerce_or_wrap`](ChainedError::coerce_or_wrap) and appended after the
    /// last attached error; each link on the way gets `depth = next.depth + 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fault_rail::ChainedError;
    ///
    /// let first = ChainedError::new("first");
    /// let err = ChainedError::new("head").with_cause(first.clone());
    /// assert_eq!(err.count(), 1);
    ///
    /// // Attaching an error already in the chain is a no-op.
    /// let err = err.with_cause(first);
    /// assert_eq!(err.count(), 1);
    /// ```
    #[inline]
    pub fn with_cause<E>(mut self, error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.push_cause(error);
        self
    }

    /// Attaches `error` if there is one.
    #[inline]
    pub fn with_maybe_cause<E>(self, error: Option<E>) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        match error {
            Some(error) => self.with_cause(error),
            None => self,
        }
    }

    /// In-place form of [`with_cause`](ChainedError::with_cause).
    ///
    /// `error` is compared against every node of the chain before it is
    /// coerced, so a foreign error that is already a root cause is not
    /// attached a second time.
    pub fn push_cause<E>(&mut self, error: E) -> &mut Self
    where
        E: Error + Send + Sync + 'static,
    {
        let present = chain::iter(&*self).any(|node| traits::same_error(node, &error));
        if !present {
            self.push_link(Self::coerce_or_wrap(error));
        }
        self
    }

    /// Attaches an already coerced link unless it is part of the chain.
    pub fn push_link(&mut self, link: ChainedError) -> &mut Self {
        if !chain::is(&*self, &link) {
            self.attach(link);
        }
        self
    }

    fn attach(&mut self, link: ChainedError) {
        let next = match self.next.take() {
            Some(mut next) => {
                next.attach(link);
                next
            },
            None => Box::new(link),
        };
        self.depth = next.depth + 1;
        self.next = Some(next);
    }

    /// Renders the chain with the default single-line layout.
    #[must_use]
    pub fn error_chain(&self) -> String {
        self.error_chain_with(ChainFormatConfig::default())
    }

    /// Renders the chain with a custom formatter.
    ///
    /// Each link renders before the links attached to it, and a link's root
    /// cause renders after them.
    #[must_use]
    pub fn error_chain_with<F>(&self, formatter: F) -> String
    where
        F: ChainFormatter,
    {
        let mut items = ErrorVec::new();
        self.render_into(&formatter, false, &mut items);
        formatter.format_chain(items.into_iter())
    }

    fn render_into<F>(&self, formatter: &F, as_cause: bool, items: &mut ErrorVec<String>)
    where
        F: ChainFormatter,
    {
        let link = formatter.format_link(&self.message, self.depth);
        items.push(if as_cause { formatter.format_cause(&link) } else { link });

        if let Some(next) = self.next.as_deref() {
            next.render_into(formatter, false, items);
        }

        if let Some(cause) = &self.cause {
            match chain::dereference::<ChainedError>(&**cause) {
                Some(inner) => inner.render_into(formatter, true, items),
                None => items.push(formatter.format_cause(cause)),
            }
        }
    }
}
