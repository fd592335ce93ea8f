//! LATM boundary scenario: two expected terminals with declared sizes
//! 5 and 3 where both classify as lexemes (of lengths 5 and 3
//! respectively) -- only the length-5 alternative is pushed.
use std::cell::Cell;
use std::rc::Rc;

use crate::harness::unwrap;
use marpa_core::lexer::{IsLexemeCallback, LexemeValueCallback, ReaderCallback};
use marpa_core::{Grammar, GrammarOptions, LexerDriver, LexerOptions, Recognizer, RecognizerOptions, RuleOptions, SymbolOptions};

#[test]
fn longest_declared_size_wins_and_shorter_candidate_is_never_classified() {
  let mut grammar = unwrap(Grammar::create(GrammarOptions::new()));
  let start = unwrap(grammar.add_symbol(SymbolOptions::new().start(true)));
  // Two mutually exclusive productions so both terminals are expected
  // at earleme 0: `Start ::= Long | Start ::= Short`.
  let long = unwrap(grammar.add_symbol(SymbolOptions::new().terminal(true).declared_size(5)));
  let short = unwrap(grammar.add_symbol(SymbolOptions::new().terminal(true).declared_size(3)));
  unwrap(grammar.add_rule(start, RuleOptions::ordinary(vec![long])));
  unwrap(grammar.add_rule(start, RuleOptions::ordinary(vec![short])));
  unwrap(grammar.precompute());

  let mut recognizer = unwrap(Recognizer::create(&grammar, RecognizerOptions::default()));

  let long_classify_calls = Rc::new(Cell::new(0u32));
  let short_classify_calls = Rc::new(Cell::new(0u32));
  let pushed = Rc::new(Cell::new(Vec::<&'static str>::new()));

  let mut fed = false;
  let reader: ReaderCallback = Box::new(move |end_of_input: &mut bool| {
    *end_of_input = fed;
    let more = !fed;
    fed = true;
    more
  });

  let is_lexeme: IsLexemeCallback = Box::new({
    let long_calls = Rc::clone(&long_classify_calls);
    let short_calls = Rc::clone(&short_classify_calls);
    move |symbol| {
      if symbol == long {
        long_calls.set(long_calls.get() + 1);
        (true, 5)
      } else if symbol == short {
        short_calls.set(short_calls.get() + 1);
        (true, 3)
      } else {
        (false, 0)
      }
    }
  });

  let lexeme_value: LexemeValueCallback = Box::new({
    let pushed = Rc::clone(&pushed);
    move |symbol| {
      let mut log = pushed.take();
      log.push(if symbol == long { "long" } else { "short" });
      pushed.set(log);
      (0, if symbol == long { 5 } else { 3 })
    }
  });

  let mut driver = LexerDriver::new(
    reader,
    is_lexeme,
    lexeme_value,
    LexerOptions::new().longest_acceptable_token_match(true),
  );
  unwrap(driver.run(&mut recognizer));

  assert_eq!(long_classify_calls.get(), 1, "the longer declared-size candidate must be classified");
  assert_eq!(short_classify_calls.get(), 0, "a candidate that can no longer beat the running max must be skipped");
  assert_eq!(pushed.take(), vec!["long"], "only the longest-matching candidate may be pushed as an alternative");
}
