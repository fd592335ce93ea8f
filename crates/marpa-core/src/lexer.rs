//! The LATM lexing driver: reader -> expected -> classify -> select ->
//! push -> complete.
use crate::config::LexerOptions;
use crate::error::{MarpaError, MarpaResult};
use crate::grammar::SymbolId;
use crate::recognizer::Recognizer;

/// Reports whether more input remains (`true`) or the reader has
/// stopped (`false`), and whether the stop represents true
/// end-of-input. Mirrors the C callback's `(user, &end_of_input) ->
/// bool` shape without a raw userdata pointer, since closures already
/// capture their own state in Rust.
pub type ReaderCallback = Box<dyn FnMut(&mut bool) -> bool>;
/// `(terminal) -> (is_lexeme, length)`. Must leave the caller's input
/// cursor unchanged.
pub type IsLexemeCallback = Box<dyn FnMut(SymbolId) -> (bool, i32)>;
/// `(terminal) -> (value_index, length)`.
pub type LexemeValueCallback = Box<dyn FnMut(SymbolId) -> (i32, i32)>;

pub struct LexerDriver {
  reader: ReaderCallback,
  is_lexeme: IsLexemeCallback,
  lexeme_value: LexemeValueCallback,
  options: LexerOptions,
}

/// Per-terminal scratch used while classifying a single earleme's
/// candidates.
struct Candidate {
  symbol: SymbolId,
  declared_size: u32,
  declared_first_char: i32,
  length: i32,
}

/// Sort key for the `-1` ("unknown") first-character sentinel: treated
/// as larger than any real byte value, so unknown-length tokens sort
/// *before* same-declared-size known-first-character tokens under a
/// descending sort. Kept exactly as specified -- see this crate's Open
/// Question decision in DESIGN.md: flagged as surprising, not "fixed".
fn first_char_sort_key(first_char: i32) -> i32 {
  if first_char == -1 {
    i32::MAX
  } else {
    first_char
  }
}

impl LexerDriver {
  pub fn new(reader: ReaderCallback, is_lexeme: IsLexemeCallback, lexeme_value: LexemeValueCallback, options: LexerOptions) -> Self {
    Self { reader, is_lexeme, lexeme_value, options }
  }

  /// Runs the reader/expected/classify/select/push/complete loop to
  /// exhaustion.
  pub fn run(&mut self, recognizer: &mut Recognizer<'_>) -> MarpaResult<()> {
    loop {
      let mut end_of_input = false;
      let keep_going = (self.reader)(&mut end_of_input);
      if !keep_going {
        if !end_of_input && !self.options.remaining_data_is_ok {
          return Err(MarpaError::RecognizerNotDone);
        }
        return Ok(());
      }

      let expected = recognizer.expected_terminals()?;
      let mut candidates: Vec<Candidate> = expected
        .into_iter()
        .map(|symbol| {
          let record = recognizer.grammar().symbol_record(symbol);
          Candidate { symbol, declared_size: record.declared_size, declared_first_char: record.declared_first_char, length: 0 }
        })
        .collect();

      if self.options.longest_acceptable_token_match {
        candidates.sort_by(|a, b| {
          b.declared_size
            .cmp(&a.declared_size)
            .then_with(|| first_char_sort_key(b.declared_first_char).cmp(&first_char_sort_key(a.declared_first_char)))
        });
      }

      let mut max_len = 0i32;
      for candidate in candidates.iter_mut() {
        if self.options.longest_acceptable_token_match && candidate.declared_size > 0 && (candidate.declared_size as i32) < max_len {
          candidate.length = 0;
          continue;
        }
        let (is_lexeme, len) = (self.is_lexeme)(candidate.symbol);
        candidate.length = if is_lexeme { len } else { 0 };
        if is_lexeme {
          max_len = max_len.max(len);
        }
      }

      if max_len > 0 {
        let mut resolved: Option<(i32, i32)> = None;
        for candidate in &candidates {
          let wins = if self.options.longest_acceptable_token_match {
            candidate.length == max_len
          } else {
            candidate.length > 0
          };
          if !wins {
            continue;
          }
          let value_length = if self.options.longest_tokens_share_value_and_length && resolved.is_some() {
            resolved.unwrap()
          } else {
            let pair = (self.lexeme_value)(candidate.symbol);
            resolved = Some(pair);
            pair
          };
          recognizer.alternative(candidate.symbol, value_length.0, value_length.1)?;
        }
      }

      recognizer.complete()?;
    }
  }
}
