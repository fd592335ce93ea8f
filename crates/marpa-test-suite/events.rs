//! Event-ordering property: whenever a single recognizer operation
//! produces more than one user-visible event, the batch delivered to
//! the event callback is sorted by event weight
//! (completed < nulled < predicted/expected) unless `unsorted_events`
//! is set.
use std::cell::RefCell;
use std::rc::Rc;

use crate::harness::unwrap;
use marpa_core::{EventKind, EventKindSet, Grammar, GrammarOptions, Recognizer, RecognizerOptions, RuleOptions, SymbolOptions};

fn weight(kind: EventKind) -> i8 {
  match kind {
    EventKind::Completed => -1,
    EventKind::Nulled => 0,
    EventKind::Predicted => 1,
  }
}

#[test]
fn mixed_event_batches_are_delivered_in_non_decreasing_weight_order() {
  // `Top ::= A B C`, with `A` a terminal (subscribed to completion),
  // `B` a nullable nonterminal (subscribed to nulled), and `C` a
  // terminal (subscribed to prediction) -- precomputing and then
  // reading `A` drives a completion for `A`, a nulled event for the
  // nullable `B`, and a prediction for `C` within the same earleme.
  let mut grammar = unwrap(Grammar::create(GrammarOptions::new()));
  let top = unwrap(grammar.add_symbol(SymbolOptions::new().start(true)));
  let a = unwrap(grammar.add_symbol(SymbolOptions::new().terminal(true).event_subscriptions(EventKindSet::Completed)));
  let b = unwrap(grammar.add_symbol(SymbolOptions::new().event_subscriptions(EventKindSet::Nulled)));
  let c = unwrap(grammar.add_symbol(SymbolOptions::new().terminal(true).event_subscriptions(EventKindSet::Predicted)));

  unwrap(grammar.add_rule(top, RuleOptions::ordinary(vec![a, b, c])));
  unwrap(grammar.add_rule(b, RuleOptions::ordinary(vec![]))); // B is nullable

  unwrap(grammar.precompute());

  let batches: Rc<RefCell<Vec<Vec<EventKind>>>> = Rc::new(RefCell::new(Vec::new()));
  {
    let batches = Rc::clone(&batches);
    grammar.set_event_callback(Some(Box::new(move |events| {
      batches.borrow_mut().push(events.iter().map(|e| e.kind).collect());
      true
    })));
  }

  let recognizer = unwrap(Recognizer::create(&grammar, RecognizerOptions::default()));
  unwrap(recognizer.read(a, 0, 1));

  let batches = batches.borrow();
  assert!(!batches.is_empty(), "expected at least one event batch across precompute/create/complete");
  for batch in batches.iter() {
    let weights: Vec<i8> = batch.iter().map(|k| weight(*k)).collect();
    let mut sorted = weights.clone();
    sorted.sort();
    assert_eq!(weights, sorted, "event batch {batch:?} was not delivered in non-decreasing weight order");
  }
}
