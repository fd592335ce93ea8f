//! Manual smoke-test binary for `marpa_core`.
//!
//! Builds an ambiguous arithmetic grammar (`S ::= E`, `E ::= E op E`,
//! `E ::= number`) and drives it end to end: tokenize a `+ - *`
//! expression from the command line, recognize it, and print every
//! accepted parenthesization the evaluator produces.
use std::cell::Cell;
use std::rc::Rc;

use clap::Parser;
use marpa_core::grammar::SymbolId;
use marpa_core::lexer::{IsLexemeCallback, LexemeValueCallback, ReaderCallback};
use marpa_core::value::{ValueNullingCallback, ValueResultCallback, ValueRuleCallback, ValueSymbolCallback};
use marpa_core::{
  Evaluator, EvaluatorOptions, Grammar, GrammarOptions, LexerDriver, LexerOptions, Recognizer, RecognizerOptions,
  ResultAction, RuleOptions, SymbolOptions,
};

#[derive(Parser)]
#[command(name = "marpa")]
#[command(about = "Drive the Marpa grammar/recognize/evaluate engine over a toy arithmetic grammar", long_about = None)]
struct Cli {
  /// Whitespace-separated tokens, e.g. "2 - 0 * 3 + 1"
  expression: Vec<String>,
}

#[derive(Clone, Copy)]
enum Token {
  Number(i64),
  Op(char),
}

#[derive(Clone)]
enum Value {
  Leaf { text: String, number: i64 },
  OpChar(char),
}

fn main() {
  let cli = Cli::parse();
  let tokens = tokenize(&cli.expression.join(" "));
  if tokens.is_empty() {
    eprintln!("usage: marpa <number> <op> <number> ...");
    std::process::exit(2);
  }
  if let Err(err) = run(tokens) {
    eprintln!("error: {err}");
    std::process::exit(1);
  }
}

fn tokenize(input: &str) -> Vec<Token> {
  input
    .split_whitespace()
    .filter_map(|word| {
      if let Ok(n) = word.parse::<i64>() {
        Some(Token::Number(n))
      } else if word.len() == 1 && "+-*".contains(word) {
        Some(Token::Op(word.chars().next().unwrap()))
      } else {
        None
      }
    })
    .collect()
}

fn run(tokens: Vec<Token>) -> marpa_core::MarpaResult<()> {
  let mut grammar = Grammar::create(GrammarOptions::new())?;

  let s = grammar.add_symbol(SymbolOptions::new().start(true))?;
  let e = grammar.add_symbol(SymbolOptions::new())?;
  let op = grammar.add_symbol(SymbolOptions::new().terminal(true))?;
  let number = grammar.add_symbol(SymbolOptions::new().terminal(true))?;

  grammar.add_rule(s, RuleOptions::ordinary(vec![e]))?;
  grammar.add_rule(e, RuleOptions::ordinary(vec![e, op, e]))?;
  grammar.add_rule(e, RuleOptions::ordinary(vec![number]))?;

  grammar.precompute()?;

  let mut recognizer = Recognizer::create(&grammar, RecognizerOptions::default())?;

  // `cursor` names the earleme currently being classified; it advances
  // once per loop iteration (once per token), in `reader`, and is only
  // ever read (never mutated) by the classify callbacks -- a classifier
  // callback must leave the input cursor unchanged.
  let cursor = Rc::new(Cell::new(0usize));
  let total = tokens.len();

  let reader: ReaderCallback = Box::new({
    let cursor = Rc::clone(&cursor);
    move |end_of_input: &mut bool| {
      *end_of_input = cursor.get() >= total;
      cursor.get() < total
    }
  });

  let is_lexeme: IsLexemeCallback = Box::new({
    let cursor = Rc::clone(&cursor);
    let tokens = tokens.clone();
    move |symbol: SymbolId| match tokens[cursor.get()] {
      Token::Number(_) if symbol == number => (true, 1),
      Token::Op(_) if symbol == op => (true, 1),
      _ => (false, 0),
    }
  });

  let lexeme_value: LexemeValueCallback = Box::new({
    let cursor = Rc::clone(&cursor);
    move |_symbol: SymbolId| {
      let index = cursor.get() as i32;
      cursor.set(cursor.get() + 1);
      (index, 1)
    }
  });

  let mut driver = LexerDriver::new(reader, is_lexeme, lexeme_value, LexerOptions::default());
  driver.run(&mut recognizer)?;

  let tokens_for_values = tokens.clone();
  let value_rule: ValueRuleCallback<Value> = Box::new(move |_rule, operands| {
    if operands.len() == 1 {
      return Ok(operands[0].clone());
    }
    let (Some(Value::Leaf { text: lt, number: lv }), Some(Value::OpChar(op_char)), Some(Value::Leaf { text: rt, number: rv })) =
      (operands[0].clone(), operands[1].clone(), operands[2].clone())
    else {
      return Ok(None);
    };
    let value = match op_char {
      '+' => lv + rv,
      '-' => lv - rv,
      '*' => lv * rv,
      _ => return Ok(None),
    };
    Ok(Some(Value::Leaf { text: format!("({lt}{op_char}{rt})"), number: value }))
  });

  let value_symbol: ValueSymbolCallback<Value> = Box::new(move |symbol, token_value| {
    Ok(Some(match tokens_for_values[token_value as usize] {
      Token::Number(n) if symbol == number => Value::Leaf { text: n.to_string(), number: n },
      Token::Op(c) if symbol == op => Value::OpChar(c),
      _ => return Err(marpa_core::MarpaError::contract("token/symbol mismatch")),
    }))
  });

  let value_nulling: ValueNullingCallback<Value> = Box::new(|_symbol| Ok(None));

  let value_result: ValueResultCallback<Value> = Box::new(|top| {
    match top {
      Some(Value::Leaf { text, number }) => println!("{text} == {number}"),
      _ => println!("(no value)"),
    }
    ResultAction::Continue
  });

  let mut evaluator = Evaluator::new(&recognizer, EvaluatorOptions::new(), value_rule, value_symbol, value_nulling, value_result);
  evaluator.run()
}
