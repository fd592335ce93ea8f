//! A grammar triggering a counted-nullable event at precompute must
//! fail precompute with a grammar-fatal-event error, and a grammar may
//! not be mutated after precomputation.
use marpa_core::{Grammar, GrammarOptions, MarpaError, RuleOptions, SymbolOptions};

#[test]
fn duplicate_nullable_rhs_symbol_fails_precompute_as_a_fatal_event() {
  let mut grammar = Grammar::create(GrammarOptions::new()).expect("grammar creation should not fail");
  let top = grammar.add_symbol(SymbolOptions::new().start(true)).unwrap();
  let a = grammar.add_symbol(SymbolOptions::new()).unwrap();

  // `A` is nullable (its only rule has an empty RHS) and appears twice
  // in `Top`'s RHS -- libmarpa flags this as a counted-nullable symbol,
  // since it cannot determine how many times a null `A` should count.
  grammar.add_rule(top, RuleOptions::ordinary(vec![a, a])).unwrap();
  grammar.add_rule(a, RuleOptions::ordinary(vec![])).unwrap();

  let result = grammar.precompute();
  match result {
    Err(MarpaError::GrammarFatalEvent { events }) => {
      assert!(!events.is_empty(), "a fatal-event failure should carry at least one event record");
    }
    other => panic!("expected GrammarFatalEvent, got {other:?}"),
  }
}

#[test]
fn add_symbol_and_add_rule_fail_after_precompute() {
  let mut grammar = Grammar::create(GrammarOptions::new()).expect("grammar creation should not fail");
  let top = grammar.add_symbol(SymbolOptions::new().start(true)).unwrap();
  grammar.add_rule(top, RuleOptions::ordinary(vec![])).unwrap();
  grammar.precompute().expect("this grammar has no fatal precompute events");

  assert!(matches!(grammar.add_symbol(SymbolOptions::new()), Err(MarpaError::ContractViolation { .. })));
  assert!(matches!(grammar.add_rule(top, RuleOptions::ordinary(vec![])), Err(MarpaError::ContractViolation { .. })));
}
