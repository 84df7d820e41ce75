use fault_rail::recovery::{abort, install_panic_hook, recovery_point, RecoveryPoint};
use fault_rail::{ChainedError, Outcome};
use std::cell::Cell;
use std::io;
use std::panic::{self, AssertUnwindSafe};

#[test]
fn protect_returns_body_value_without_calling_handler() {
    let calls = Cell::new(0);
    let value = RecoveryPoint::new(|_| calls.set(calls.get() + 1)).protect(|| 40 + 2);

    assert_eq!(value, Some(42));
    assert_eq!(calls.get(), 0);
}

#[test]
#[allow(unreachable_code)]
fn handler_runs_exactly_once_and_abort_does_not_propagate() {
    let calls = Cell::new(0);
    let after = Cell::new(false);

    let value = RecoveryPoint::new(|_| calls.set(calls.get() + 1)).protect(|| {
        abort(ChainedError::new("first"));
        after.set(true);
    });

    assert_eq!(value, None);
    assert_eq!(calls.get(), 1);
    assert!(!after.get());
}

#[test]
fn non_error_panics_are_re_raised() {
    let calls = Cell::new(0);

    let outer = panic::catch_unwind(AssertUnwindSafe(|| {
        RecoveryPoint::new(|_| calls.set(calls.get() + 1)).protect(|| -> u8 { panic!("not an error") })
    }));

    let payload = outer.expect_err("the panic must escape the recovery point");
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"not an error"));
    assert_eq!(calls.get(), 0);
}

#[test]
fn boxed_error_payloads_are_intercepted() {
    let mut seen = None;
    let done = recovery_point(
        |err| seen = Some(err),
        || {
            let payload: fault_rail::BoxError = Box::new(io::Error::new(io::ErrorKind::Other, "raw"));
            panic::panic_any(payload)
        },
    );

    assert!(done.is_none());
    assert_eq!(seen.map(|e| e.message().to_owned()), Some(fault_rail::CAST_MESSAGE.to_owned()));
}

#[test]
fn nested_points_intercept_innermost_first() {
    let inner_seen = Cell::new(false);
    let outer_seen = Cell::new(false);

    let outer = recovery_point(
        |_| outer_seen.set(true),
        || {
            let inner = recovery_point(|_| inner_seen.set(true), || abort(ChainedError::new("inner")));
            assert!(inner.is_none());
            "outer finished"
        },
    );

    assert_eq!(outer, Some("outer finished"));
    assert!(inner_seen.get());
    assert!(!outer_seen.get());
}

#[test]
fn abort_from_handler_reaches_enclosing_point() {
    let mut seen = None;

    recovery_point(
        |err| seen = Some(err),
        || {
            recovery_point(
                |err| abort(ChainedError::wrap(err, "handler escalated")),
                || abort(ChainedError::new("original")),
            )
        },
    );

    let err = seen.expect("escalated abort was intercepted");
    assert_eq!(err.message(), "handler escalated");
    assert_eq!(err.cause().map(|c| c.to_string()), Some("original (cause count 0)".to_owned()));
}

#[test]
fn protect_result_handles_returned_errors() {
    let mut seen = None;
    let value = RecoveryPoint::new(|err| seen = Some(err)).protect_result(|| {
        Err::<u8, _>(ChainedError::new("returned"))
    });

    assert_eq!(value, None);
    assert_eq!(seen, Some(ChainedError::new("returned")));
}

#[test]
fn protect_result_handles_aborts_too() {
    let mut seen = None;
    let value = RecoveryPoint::new(|err| seen = Some(err))
        .protect_result(|| Ok::<u8, io::Error>(Outcome::new(1, Some(ChainedError::new("aborted"))).check()));

    assert_eq!(value, None);
    assert_eq!(seen, Some(ChainedError::new("aborted")));
}

#[test]
fn recovery_points_are_per_thread() {
    let handle = std::thread::spawn(|| {
        recovery_point(|_| (), || abort(ChainedError::new("in thread")))
    });

    assert_eq!(handle.join().ok(), Some(None));
}

#[test]
fn panic_hook_stays_quiet_inside_recovery_points() {
    install_panic_hook();

    let mut seen = None;
    let done = recovery_point(|err| seen = Some(err), || abort(ChainedError::new("quiet")));

    assert!(done.is_none());
    assert!(seen.is_some());
}
