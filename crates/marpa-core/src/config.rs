//! Fluent, `Default`-able option records for every construction site in
//! this crate: plain public fields, a `Default` impl carrying the
//! documented defaults, and self-consuming `fn foo(mut self, ..) -> Self`
//! setters for everything optional. Fields that must always be supplied
//! by the caller (rule shape, lexer/evaluator callbacks, stack element
//! size) are constructor parameters on the owning type instead, never
//! builder fields here, so they can't be silently left at a useless
//! default.
use crate::event::EventKindSet;
use crate::logger::Logger;

/// Options for `Grammar::create`.
pub struct GrammarOptions {
  /// Kernel version triple to verify against, if the caller wants a
  /// hard compatibility check before anything else happens.
  pub version_triple: Option<(u8, u8, u8)>,
  pub logger: Option<Logger>,
  /// Advisory kernel events (`earley-item-threshold`, `loop-rules`) are
  /// escalated to a fatal error when set.
  pub warning_as_error: bool,
  /// Suppresses even the informational log entry for advisory events.
  pub ignore_warnings: bool,
  /// Skip the event-weight sort in event sync and deliver events in raw
  /// kernel order instead.
  pub unsorted_events: bool,
}

impl Default for GrammarOptions {
  fn default() -> Self {
    Self { version_triple: None, logger: None, warning_as_error: false, ignore_warnings: false, unsorted_events: false }
  }
}

impl GrammarOptions {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn version_triple(mut self, triple: (u8, u8, u8)) -> Self {
    self.version_triple = Some(triple);
    self
  }

  pub fn logger(mut self, logger: Logger) -> Self {
    self.logger = Some(logger);
    self
  }

  pub fn warning_as_error(mut self, value: bool) -> Self {
    self.warning_as_error = value;
    self
  }

  pub fn ignore_warnings(mut self, value: bool) -> Self {
    self.ignore_warnings = value;
    self
  }

  pub fn unsorted_events(mut self, value: bool) -> Self {
    self.unsorted_events = value;
    self
  }
}

/// Options for `Grammar::add_symbol`. `declared_size` of `0` means
/// "unknown" and `declared_first_char` of `-1` means "no hint" (kept as
/// sentinel values rather than translated into an `Option`, because the
/// LATM comparator in `lexer.rs` relies on them sorting a particular way).
#[derive(Clone, Copy)]
pub struct SymbolOptions {
  pub terminal: bool,
  pub start: bool,
  pub event_subscriptions: EventKindSet,
  pub declared_size: u32,
  pub declared_first_char: i32,
}

impl Default for SymbolOptions {
  fn default() -> Self {
    Self { terminal: false, start: false, event_subscriptions: EventKindSet::none(), declared_size: 0, declared_first_char: -1 }
  }
}

impl SymbolOptions {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn terminal(mut self, value: bool) -> Self {
    self.terminal = value;
    self
  }

  pub fn start(mut self, value: bool) -> Self {
    self.start = value;
    self
  }

  pub fn event_subscriptions(mut self, kinds: EventKindSet) -> Self {
    self.event_subscriptions = kinds;
    self
  }

  pub fn declared_size(mut self, size: u32) -> Self {
    self.declared_size = size;
    self
  }

  pub fn declared_first_char(mut self, first_char: i32) -> Self {
    self.declared_first_char = first_char;
    self
  }
}

/// Options for `Grammar::add_rule`. The LHS symbol and RHS shape are
/// constructor parameters since both must always be supplied by the
/// caller.
#[derive(Clone)]
pub struct RuleOptions {
  pub(crate) kind: RuleKind,
  pub rank: i32,
  pub null_high: bool,
}

#[derive(Clone)]
pub(crate) enum RuleKind {
  Ordinary { rhs: Vec<crate::grammar::SymbolId> },
  Sequence { rhs: crate::grammar::SymbolId, separator: Option<crate::grammar::SymbolId>, proper: bool, minimum: u8 },
}

impl RuleOptions {
  /// An ordinary rule with an arbitrary (possibly empty) RHS sequence.
  pub fn ordinary(rhs: Vec<crate::grammar::SymbolId>) -> Self {
    Self { kind: RuleKind::Ordinary { rhs }, rank: 0, null_high: false }
  }

  /// A sequence rule: exactly one RHS symbol, `minimum` in {0, 1}, an
  /// optional separator, and a proper/improper separation flag.
  pub fn sequence(rhs: crate::grammar::SymbolId, separator: Option<crate::grammar::SymbolId>, proper: bool, minimum: u8) -> Self {
    Self { kind: RuleKind::Sequence { rhs, separator, proper, minimum }, rank: 0, null_high: false }
  }

  pub fn rank(mut self, rank: i32) -> Self {
    self.rank = rank;
    self
  }

  pub fn null_high(mut self, value: bool) -> Self {
    self.null_high = value;
    self
  }
}

/// Options for `Recognizer` construction. Recognizer creation takes no
/// parameters beyond the precomputed grammar itself;
/// this record is kept empty and `Default`-able for API symmetry with
/// the other three phases' option records, and as a home for any future
/// per-recognizer override.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecognizerOptions {}

/// Flags for the LATM lexing driver. The reader, is-lexeme, and
/// lexeme-value callbacks are constructor parameters on
/// `LexerDriver::new`, not fields here, since all three must always be
/// supplied by the caller.
#[derive(Debug, Clone, Copy)]
pub struct LexerOptions {
  pub remaining_data_is_ok: bool,
  pub longest_acceptable_token_match: bool,
  pub longest_tokens_share_value_and_length: bool,
}

impl Default for LexerOptions {
  fn default() -> Self {
    Self { remaining_data_is_ok: false, longest_acceptable_token_match: true, longest_tokens_share_value_and_length: false }
  }
}

impl LexerOptions {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn remaining_data_is_ok(mut self, value: bool) -> Self {
    self.remaining_data_is_ok = value;
    self
  }

  pub fn longest_acceptable_token_match(mut self, value: bool) -> Self {
    self.longest_acceptable_token_match = value;
    self
  }

  pub fn longest_tokens_share_value_and_length(mut self, value: bool) -> Self {
    self.longest_tokens_share_value_and_length = value;
    self
  }
}

/// Options for the evaluator. The value-rule,
/// value-symbol, value-nulling, and value-result callbacks are
/// constructor parameters on `Evaluator::new`.
#[derive(Debug, Clone, Copy)]
pub struct EvaluatorOptions {
  pub allow_ambiguous: bool,
  pub allow_null: bool,
  pub high_rank_only: bool,
  pub order_by_rank: bool,
}

impl Default for EvaluatorOptions {
  fn default() -> Self {
    Self { allow_ambiguous: true, allow_null: true, high_rank_only: false, order_by_rank: false }
  }
}

impl EvaluatorOptions {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn allow_ambiguous(mut self, value: bool) -> Self {
    self.allow_ambiguous = value;
    self
  }

  pub fn allow_null(mut self, value: bool) -> Self {
    self.allow_null = value;
    self
  }

  pub fn high_rank_only(mut self, value: bool) -> Self {
    self.high_rank_only = value;
    self
  }

  pub fn order_by_rank(mut self, value: bool) -> Self {
    self.order_by_rank = value;
    self
  }
}
