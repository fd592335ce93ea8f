//! The seed end-to-end scenario: the ambiguous arithmetic grammar
//! `S ::= E`, `E ::= E op E`, `E ::= number`, plus the adjacent
//! single-token-parse scenario.
use std::collections::HashMap;

use crate::harness::unwrap;
use marpa_core::{
  Evaluator, EvaluatorOptions, Grammar, GrammarOptions, Recognizer, RecognizerOptions, ResultAction, RuleOptions,
  SymbolId, SymbolOptions,
};

#[derive(Clone, Debug)]
enum Value {
  Leaf { text: String, number: i64 },
  OpChar(char),
}

struct ArithGrammar {
  grammar: Grammar,
  op: SymbolId,
  number: SymbolId,
}

fn build() -> ArithGrammar {
  let mut grammar = unwrap(Grammar::create(GrammarOptions::new()));
  let s = unwrap(grammar.add_symbol(SymbolOptions::new().start(true)));
  let e = unwrap(grammar.add_symbol(SymbolOptions::new()));
  let op = unwrap(grammar.add_symbol(SymbolOptions::new().terminal(true)));
  let number = unwrap(grammar.add_symbol(SymbolOptions::new().terminal(true)));

  unwrap(grammar.add_rule(s, RuleOptions::ordinary(vec![e])));
  unwrap(grammar.add_rule(e, RuleOptions::ordinary(vec![e, op, e])));
  unwrap(grammar.add_rule(e, RuleOptions::ordinary(vec![number])));

  unwrap(grammar.precompute());
  ArithGrammar { grammar, op, number }
}

/// Feeds `(is_number, value_index)` tokens directly through
/// `alternative`/`complete` (no lexing driver involved -- this scenario
/// hands the recognizer pre-classified tokens with `length = 1`).
fn feed(recognizer: &Recognizer<'_>, op: SymbolId, number: SymbolId, tokens: &[(bool, i32)]) {
  for &(is_number, value_index) in tokens {
    let symbol = if is_number { number } else { op };
    unwrap(recognizer.read(symbol, value_index, 1));
  }
}

/// Runs the evaluator over every ordered parse tree, collecting each
/// tree's `(parenthesized text, integer value)` pair. `numbers`/`ops`
/// map a token's `value_index` to its literal, keyed by `SymbolId` so
/// the callback never has to guess a token's kind from its value.
fn collect_results(recognizer: &Recognizer<'_>, number: SymbolId, op: SymbolId, numbers: HashMap<i32, i64>, ops: HashMap<i32, char>) -> Vec<(String, i64)> {
  let mut results = Vec::new();
  {
    let value_rule: marpa_core::value::ValueRuleCallback<Value> = Box::new(move |_rule, operands| {
      if operands.len() == 1 {
        return Ok(operands[0].clone());
      }
      let (Some(Value::Leaf { text: lt, number: lv }), Some(Value::OpChar(c)), Some(Value::Leaf { text: rt, number: rv })) =
        (operands[0].clone(), operands[1].clone(), operands[2].clone())
      else {
        return Ok(None);
      };
      let value = match c {
        '+' => lv + rv,
        '-' => lv - rv,
        '*' => lv * rv,
        _ => return Ok(None),
      };
      Ok(Some(Value::Leaf { text: format!("({lt}{c}{rt})"), number: value }))
    });

    let value_symbol: marpa_core::value::ValueSymbolCallback<Value> = Box::new(move |symbol, token_value| {
      if symbol == number {
        let n = *numbers.get(&token_value).expect("number value_index not registered");
        Ok(Some(Value::Leaf { text: n.to_string(), number: n }))
      } else if symbol == op {
        let c = *ops.get(&token_value).expect("op value_index not registered");
        Ok(Some(Value::OpChar(c)))
      } else {
        Err(marpa_core::MarpaError::contract("unexpected terminal symbol"))
      }
    });

    let value_nulling: marpa_core::value::ValueNullingCallback<Value> = Box::new(|_symbol| Ok(None));

    let results_ref = &mut results;
    let value_result: marpa_core::value::ValueResultCallback<Value> = Box::new(move |top| {
      if let Some(Value::Leaf { text, number }) = top {
        results_ref.push((text.clone(), *number));
      }
      ResultAction::Continue
    });

    let mut evaluator =
      Evaluator::new(recognizer, EvaluatorOptions::new(), value_rule, value_symbol, value_nulling, value_result);
    unwrap(evaluator.run());
  }
  results
}

#[test]
fn ambiguous_arithmetic_scenario_yields_a_valid_parenthesization() {
  let ArithGrammar { grammar, op, number } = build();
  let recognizer = unwrap(Recognizer::create(&grammar, RecognizerOptions::default()));

  // value_index 2 -> "2", 5 -> "-", 4 -> "0", 7 -> "*", 3 -> "3",
  // 6 -> "+", 1 -> "1".
  let tokens = [
    (true, 2),  // "2"
    (false, 5), // "-"
    (true, 4),  // "0"
    (false, 7), // "*"
    (true, 3),  // "3"
    (false, 6), // "+"
    (true, 1),  // "1"
  ];
  feed(&recognizer, op, number, &tokens);

  let numbers = HashMap::from([(2, 2), (4, 0), (3, 3), (1, 1)]);
  let ops = HashMap::from([(5, '-'), (7, '*'), (6, '+')]);
  let results = collect_results(&recognizer, number, op, numbers, ops);

  assert!(!results.is_empty(), "expected at least one accepted parenthesization");
  let valid = results
    .iter()
    .any(|(text, value)| (text == "((2-0)*(3+1))" && *value == 8) || (text == "(2-(0*(3+1)))" && *value == 2));
  assert!(valid, "no result matched an expected parenthesization: {results:?}");
}

#[test]
fn single_token_parse_yields_the_number_itself() {
  let ArithGrammar { grammar, number, op } = build();
  let recognizer = unwrap(Recognizer::create(&grammar, RecognizerOptions::default()));
  unwrap(recognizer.read(number, 7, 1));

  let numbers = HashMap::from([(7, 7)]);
  let results = collect_results(&recognizer, number, op, numbers, HashMap::new());

  assert_eq!(results.len(), 1);
  assert_eq!(results[0], ("7".to_string(), 7));
}
