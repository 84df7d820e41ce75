use fault_rail::convert::*;
use fault_rail::recovery::recovery_point;
use fault_rail::{ChainedError, CAST_MESSAGE};
use std::io;

#[test]
fn cast_then_handle_fails_through() {
    let mut seen = Vec::new();
    let value = cast(5, Some(io::Error::new(io::ErrorKind::Other, "late"))).handle(|err| seen.push(err));

    assert_eq!(value, 5);
    assert_eq!(seen.len(), 1);
}

#[test]
fn check_value_returns_value_without_error() {
    assert_eq!(check_value("ok", None::<io::Error>), "ok");
}

#[test]
fn check_value_aborts_with_error() {
    let mut seen = None;
    let result = recovery_point(|err| seen = Some(err), || check_value(1, Some(ChainedError::new("bad"))));

    assert_eq!(result, None);
    assert_eq!(seen, Some(ChainedError::new("bad")));
}

#[test]
fn check_error_only_aborts_when_present() {
    let mut calls = 0;
    let done = recovery_point(|_| calls += 1, || check_error(None::<io::Error>));
    assert_eq!(done, Some(()));
    assert_eq!(calls, 0);

    let mut seen = None;
    let done = recovery_point(
        |err| seen = Some(err),
        || check_error(Some(io::Error::new(io::ErrorKind::Other, "write failed"))),
    );
    assert_eq!(done, None);
    assert_eq!(seen.map(|e| e.message().to_owned()), Some(CAST_MESSAGE.to_owned()));
}

#[test]
fn check_not_null_returns_present_values() {
    assert_eq!(check_not_null(Some(3), "missing"), 3);

    let value = 11u32;
    let ptr: *const u32 = &value;
    assert_eq!(check_not_null(ptr, "null pointer"), ptr);
}

#[test]
fn check_not_null_aborts_on_null() {
    let mut seen = None;
    let result = recovery_point(|err| seen = Some(err), || check_not_null(std::ptr::null_mut::<u8>(), "buffer is null"));

    assert!(result.is_none());
    let err = seen.expect("abort was intercepted");
    assert_eq!(err.message(), "buffer is null");
    assert_eq!(err.count(), 0);
}

#[test]
fn result_and_outcome_convert_both_ways() {
    let outcome = result_to_outcome::<u8, io::Error>(Ok(4));
    assert_eq!(outcome_to_result(outcome).unwrap(), 4);

    let outcome = result_to_outcome::<u8, _>(Err(io::Error::new(io::ErrorKind::Other, "x")));
    assert_eq!(*outcome.value(), 0);
    assert_eq!(outcome_to_result(outcome).unwrap_err().message(), CAST_MESSAGE);
}

#[test]
fn wrap_result_wraps_only_errors() {
    assert_eq!(wrap_result(Ok::<_, io::Error>(1), "unused").unwrap(), 1);

    let err = wrap_result(Err::<(), _>(io::Error::new(io::ErrorKind::Other, "x")), "context").unwrap_err();
    assert_eq!(err.message(), "context");
    assert_eq!(err.count(), 1);
}
