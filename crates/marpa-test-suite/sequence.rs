//! Sequence-rule scenario: `L ::= item* separator=","` over
//! `item, comma, item` must produce a list value of length 2.
use crate::harness::unwrap;
use marpa_core::{Evaluator, EvaluatorOptions, Grammar, GrammarOptions, Recognizer, RecognizerOptions, ResultAction, RuleOptions, SymbolOptions};

#[derive(Clone, Debug)]
enum Value {
  Item(i64),
  List(Vec<i64>),
}

#[test]
fn sequence_rule_with_separator_builds_a_two_element_list() {
  let mut grammar = unwrap(Grammar::create(GrammarOptions::new()));
  let list = unwrap(grammar.add_symbol(SymbolOptions::new().start(true)));
  let item = unwrap(grammar.add_symbol(SymbolOptions::new().terminal(true)));
  let comma = unwrap(grammar.add_symbol(SymbolOptions::new().terminal(true)));

  // Proper separation, minimum 0: a comma may never trail the last item.
  unwrap(grammar.add_rule(list, RuleOptions::sequence(item, Some(comma), true, 0)));
  unwrap(grammar.precompute());

  let recognizer = unwrap(Recognizer::create(&grammar, RecognizerOptions::default()));
  unwrap(recognizer.read(item, 10, 1));
  unwrap(recognizer.read(comma, 0, 1));
  unwrap(recognizer.read(item, 20, 1));

  let mut produced_list: Option<Vec<i64>> = None;
  {
    let value_rule: marpa_core::value::ValueRuleCallback<Value> = Box::new(|_rule, operands| {
      let items: Vec<i64> = operands
        .iter()
        .filter_map(|slot| match slot {
          Some(Value::Item(n)) => Some(*n),
          _ => None,
        })
        .collect();
      Ok(Some(Value::List(items)))
    });

    let value_symbol: marpa_core::value::ValueSymbolCallback<Value> = Box::new(move |symbol, token_value| {
      if symbol == item {
        Ok(Some(Value::Item(token_value as i64)))
      } else if symbol == comma {
        // The separator itself carries no list-relevant value.
        Ok(None)
      } else {
        Err(marpa_core::MarpaError::contract("unexpected terminal symbol"))
      }
    });

    let value_nulling: marpa_core::value::ValueNullingCallback<Value> = Box::new(|_symbol| Ok(None));

    let produced_ref = &mut produced_list;
    let value_result: marpa_core::value::ValueResultCallback<Value> = Box::new(move |top| {
      if let Some(Value::List(items)) = top {
        *produced_ref = Some(items.clone());
      }
      ResultAction::Stop
    });

    let mut evaluator =
      Evaluator::new(&recognizer, EvaluatorOptions::new(), value_rule, value_symbol, value_nulling, value_result);
    unwrap(evaluator.run());
  }

  let items = produced_list.expect("evaluator never reached a result with a populated list");
  assert_eq!(items.len(), 2);
  assert_eq!(items, vec![10, 20]);
}
