use fault_rail::traits::{ChainSlot, ChainTarget};
use fault_rail::{chain, ChainedError};
use std::error::Error;
use std::io;

/// Matches any node whose message starts with a prefix.
struct Prefix(&'static str);

impl ChainTarget for Prefix {
    fn matches(&self, node: &(dyn Error + 'static)) -> bool {
        chain::dereference::<ChainedError>(node).is_some_and(|link| link.message().starts_with(self.0))
    }
}

/// Collects every message it is offered and never reports a fill.
#[derive(Default)]
struct Messages(Vec<String>);

impl ChainSlot for Messages {
    fn fill(&mut self, node: &(dyn Error + 'static)) -> bool {
        self.0.push(node.to_string());
        false
    }
}

#[test]
fn custom_target_is_consulted_at_each_node() {
    let err = ChainedError::wrap(ChainedError::new("db: pool exhausted"), "handling request");

    assert!(chain::is(&err, &Prefix("db:")));
    assert!(!chain::is(&err, &Prefix("cache:")));
}

#[test]
fn custom_slot_sees_the_whole_chain() {
    let err = ChainedError::wrap(io::Error::new(io::ErrorKind::Other, "eof"), "read");
    let mut slot = Messages::default();

    assert!(!chain::as_into(&err, &mut slot));
    assert_eq!(slot.0.len(), 2);
    assert_eq!(slot.0[1], "eof");
}

#[test]
fn option_slot_fills_from_boxed_node() {
    let boxed: Box<ChainedError> = Box::new(ChainedError::new("inner"));
    let mut slot: Option<ChainedError> = None;

    assert!(chain::as_into(&boxed, &mut slot));
    assert_eq!(slot, Some(ChainedError::new("inner")));
}
