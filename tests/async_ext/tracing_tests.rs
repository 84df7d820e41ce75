//! Tests for the tracing integration.

use fault_rail::tracing_ext::{record_chain, ResultSpanExt};
use fault_rail::ChainedError;
use std::io;

#[test]
fn with_span_names_the_span_in_the_link() {
    let span = tracing::info_span!("load_config");
    let err = Err::<(), _>(io::Error::new(io::ErrorKind::Other, "eof")).with_span(&span).unwrap_err();

    // The span name is only known when the span carries metadata.
    assert!(err.message().starts_with("in span '"));
    assert_eq!(err.count(), 1);
}

#[test]
fn with_current_span_keeps_ok_values() {
    assert_eq!(Ok::<_, io::Error>(3).with_current_span().unwrap(), 3);
}

#[test]
fn record_chain_accepts_any_chain() {
    let err = ChainedError::wrap(io::Error::new(io::ErrorKind::Other, "eof"), "read").with_cause(ChainedError::new("retry"));
    record_chain(&err);
}
