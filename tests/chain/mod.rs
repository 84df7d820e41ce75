use fault_rail::{chain, ChainedError};
use std::error::Error;
use std::fmt;
use std::io;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
struct Timeout(u32);

impl fmt::Display for Timeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timed out after {}s", self.0)
    }
}

impl Error for Timeout {}

#[test]
fn is_is_reflexive() {
    let err = ChainedError::new("boom");
    assert!(chain::is(&err, &err));

    let timeout = Timeout(5);
    assert!(chain::is(&timeout, &timeout));
}

#[test]
fn is_matches_equal_but_distinct_instances() {
    let first = ChainedError::new("disk full");
    let second = ChainedError::new("disk full");

    assert!(chain::is(&first, &second));
    assert!(!chain::is(&first, &ChainedError::new("disk empty")));
}

#[test]
fn is_sees_through_wrapping_depth() {
    let err = ChainedError::wrap(ChainedError::wrap(Timeout(30), "connecting"), "loading profile");

    assert!(chain::is(&err, &Timeout(30)));
    assert!(!chain::is(&err, &Timeout(31)));
    assert!(chain::is(&err, &ChainedError::wrap(Timeout(30), "connecting")));
}

#[test]
fn is_sees_attached_errors() {
    let err = ChainedError::new("request failed")
        .with_cause(ChainedError::new("retry 1"))
        .with_cause(ChainedError::new("retry 2"));

    assert!(chain::is(&err, &ChainedError::new("retry 2")));
}

#[test]
fn is_opt_treats_absence_as_a_value() {
    let err = ChainedError::new("x");
    let node: &(dyn Error + 'static) = &err;

    assert!(chain::is_opt::<ChainedError>(None, None));
    assert!(!chain::is_opt::<ChainedError>(Some(node), None));
    assert!(!chain::is_opt(None, Some(&err)));
    assert!(chain::is_opt(Some(node), Some(&ChainedError::new("x"))));
}

#[test]
fn as_into_fills_slot_from_first_match() {
    let err = ChainedError::wrap(Timeout(7), "calling upstream");

    let mut slot: Option<Timeout> = None;
    assert!(chain::as_into(&err, &mut slot));
    assert_eq!(slot, Some(Timeout(7)));

    let mut head: Option<ChainedError> = None;
    assert!(chain::as_into(&err, &mut head));
    assert_eq!(head.map(|e| e.message().to_owned()), Some("calling upstream".to_owned()));
}

#[test]
fn as_into_leaves_slot_untouched_without_match() {
    let err = ChainedError::new("plain");

    let mut empty: Option<Timeout> = None;
    assert!(!chain::as_into(&err, &mut empty));
    assert!(empty.is_none());

    // A slot that already holds a value keeps it.
    let mut slot = Some(Timeout(99));
    assert!(!chain::as_into(&err, &mut slot));
    assert_eq!(slot, Some(Timeout(99)));
}

#[test]
fn dereference_looks_through_one_box_or_arc() {
    let boxed: Box<Timeout> = Box::new(Timeout(1));
    let node: &(dyn Error + 'static) = &boxed;
    assert_eq!(chain::dereference::<Timeout>(node), Some(&Timeout(1)));

    let shared: Arc<Timeout> = Arc::new(Timeout(2));
    let node: &(dyn Error + 'static) = &shared;
    assert_eq!(chain::dereference::<Timeout>(node), Some(&Timeout(2)));
}

#[test]
fn find_borrows_foreign_errors() {
    let err = ChainedError::wrap(io::Error::new(io::ErrorKind::TimedOut, "slow"), "fetch");

    let found = chain::find::<io::Error>(&err).map(io::Error::kind);
    assert_eq!(found, Some(io::ErrorKind::TimedOut));
    assert!(chain::find::<Timeout>(&err).is_none());
}

#[test]
fn iter_prefers_attached_errors_over_the_cause() {
    let err = ChainedError::wrap(Timeout(3), "outer").with_cause(ChainedError::new("attached"));

    let rendered: Vec<String> = chain::iter(&err)
        .map(|node| match chain::dereference::<ChainedError>(node) {
            Some(link) => link.message().to_owned(),
            None => node.to_string(),
        })
        .collect();

    assert_eq!(rendered, ["outer", "attached"]);
    assert_eq!(err.root_cause().map(|c| c.to_string()), Some("timed out after 3s".to_owned()));
}

#[test]
fn unwrap_ends_at_leaf() {
    let leaf = ChainedError::new("leaf");
    assert!(chain::unwrap(&leaf).is_none());
    assert_eq!(chain::iter(&leaf).count(), 1);
}
