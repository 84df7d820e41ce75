//! Tracing integration for fault-rail.
//!
//! Links the active `tracing` span into an error chain and records whole
//! chains as structured events.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! fault-rail = { version = "0.1", features = ["tracing"] }
//! ```

use core::error::Error;

use tracing::Span;

use crate::types::alloc_type::String;
use crate::types::ChainedError;

/// Extension trait for `Result` types to link span names into the chain.
///
/// # Examples
///
/// ```rust
/// use fault_rail::tracing_ext::ResultSpanExt;
///
/// let span = tracing::info_span!("load_config");
/// let res: Result<(), std::fmt::Error> = Err(std::fmt::Error);
/// let err = res.with_span(&span).unwrap_err();
///
/// assert_eq!(err.count(), 1);
/// ```
pub trait ResultSpanExt<T> {
    /// Wraps an error under the name of the current span.
    fn with_current_span(self) -> Result<T, ChainedError>;

    /// Wraps an error under the name of `span`.
    fn with_span(self, span: &Span) -> Result<T, ChainedError>;
}

impl<T, E> ResultSpanExt<T> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn with_current_span(self) -> Result<T, ChainedError> {
        self.with_span(&Span::current())
    }

    fn with_span(self, span: &Span) -> Result<T, ChainedError> {
        self.map_err(|error| ChainedError::wrap(error, span_message(span)))
    }
}

/// Builds the link message for `span`.
///
/// Spans without metadata, such as `Span::none()`, are reported as `unknown`.
fn span_message(span: &Span) -> String {
    let name = span.metadata().map(|m| m.name()).unwrap_or("unknown");
    alloc::format!("in span '{}'", name)
}

/// Emits one `error` event describing the whole chain.
///
/// # Examples
///
/// ```rust
/// use fault_rail::tracing_ext::record_chain;
/// use fault_rail::ChainedError;
///
/// let err = ChainedError::wrap(std::fmt::Error, "rendering page");
/// record_chain(&err);
/// ```
pub fn record_chain(error: &ChainedError) {
    tracing::error!(
        head = error.message(),
        depth = error.count(),
        chain = %error.error_chain(),
        "error chain"
    );
}
