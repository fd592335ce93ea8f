//! The recognizer driver: token feeding, earleme completion,
//! expected-terminal reporting, and the event-sync protocol.
use crate::buffer::GrowBuffer;
use crate::config::RecognizerOptions;
use crate::error::{MarpaError, MarpaResult};
use crate::event::{sync_events, EventKindSet};
use crate::grammar::{Grammar, SymbolId};
use crate::kernel::KernelRecognizer;
use crate::logger::log_debug;
use crate::progress::{progress_report, ProgressItem};

pub struct Recognizer<'g> {
  grammar: &'g Grammar,
  kernel: KernelRecognizer,
  expected_scratch: GrowBuffer<i32>,
}

impl<'g> Recognizer<'g> {
  /// Binds a recognizer to a precomputed grammar, sizing the
  /// expected-terminals scratch buffer to `(max_symbol_id + 1)`. Input is
  /// started immediately and an initial event sync runs.
  pub fn create(grammar: &'g Grammar, _options: RecognizerOptions) -> MarpaResult<Self> {
    if !grammar.is_precomputed() {
      return Err(MarpaError::contract("recognizer creation requires a precomputed grammar"));
    }
    let kernel = KernelRecognizer::new(&grammar.kernel)?;
    let highest = grammar.highest_symbol_id()?;
    let mut expected_scratch = GrowBuffer::new();
    expected_scratch.grow_to_at_least(highest.get() as usize + 1)?;
    sync_events(grammar)?;
    log_debug!(grammar.logger, "recognizer created");
    Ok(Self { grammar, kernel, expected_scratch })
  }

  /// Offers a token at the current earleme. `length` is measured in
  /// earleme steps, not bytes, and must be >= 1.
  pub fn alternative(&self, symbol: SymbolId, value: i32, length: i32) -> MarpaResult<()> {
    if length < 1 {
      return Err(MarpaError::contract("alternative length must be >= 1"));
    }
    if !self.grammar.symbol_record(symbol).terminal {
      return Err(MarpaError::contract("alternative requires a terminal symbol"));
    }
    self.kernel.alternative(symbol.get() as i32, value, length)
  }

  /// Advances one earleme, then runs event sync. A kernel-reported
  /// exhaustion is surfaced as an informational log entry inside event
  /// sync, not an error.
  pub fn complete(&self) -> MarpaResult<()> {
    self.kernel.earleme_complete()?;
    sync_events(self.grammar)
  }

  /// Shorthand for `alternative` then `complete`.
  pub fn read(&self, symbol: SymbolId, value: i32, length: i32) -> MarpaResult<()> {
    self.alternative(symbol, value, length)?;
    self.complete()
  }

  /// Fills the preallocated scratch buffer with the symbols the kernel
  /// currently expects. The kernel's own API aliases the scratch buffer
  /// directly; this crate instead copies out into owned `SymbolId`s,
  /// trading that one aliasing optimization for keeping every module
  /// above `kernel.rs` free of `unsafe`. The result is still only valid
  /// as of this call -- the next mutation may expect a different set.
  pub fn expected_terminals(&mut self) -> MarpaResult<Vec<SymbolId>> {
    let capacity = self.expected_scratch.capacity();
    self.expected_scratch.set_used(capacity)?;
    let raw = self.expected_scratch.as_mut_slice();
    let n = self.kernel.terminals_expected(raw)?;
    let symbols = raw[..n].iter().map(|&id| SymbolId::from_raw(id as u32)).collect();
    self.expected_scratch.set_used(n)?;
    Ok(symbols)
  }

  pub fn is_expected(&self, symbol: SymbolId) -> bool {
    self.kernel.terminal_is_expected(symbol.get() as i32)
  }

  /// Enables or disables a subset of `symbol`'s subscribed event kinds.
  /// Per this crate's Open Question decision (DESIGN.md), activation is
  /// rejected with a contract violation for any kind the symbol was
  /// never subscribed to at grammar-build time, rather than silently
  /// accepting a no-op request the way the kernel's own boolean-result
  /// check would. The kernel also reports back the resulting activation
  /// state on every call; this is checked against the requested value so
  /// a kernel that silently disagrees does not go unnoticed.
  pub fn event_activate(&self, symbol: SymbolId, kinds: EventKindSet, on: bool) -> MarpaResult<()> {
    let subscribed = self.grammar.symbol_record(symbol).event_subscriptions;
    if !subscribed.contains(kinds) {
      return Err(MarpaError::contract("event_activate requested a kind the symbol never subscribed to"));
    }
    if kinds.contains(EventKindSet::Completed) {
      let activated = self.kernel.completion_symbol_activate(symbol.get() as i32, on)?;
      if activated != on {
        return Err(MarpaError::contract("kernel activation state disagreed with the requested completion state"));
      }
    }
    if kinds.contains(EventKindSet::Nulled) {
      let activated = self.kernel.nulled_symbol_activate(symbol.get() as i32, on)?;
      if activated != on {
        return Err(MarpaError::contract("kernel activation state disagreed with the requested nulled state"));
      }
    }
    if kinds.contains(EventKindSet::Predicted) {
      let activated = self.kernel.prediction_symbol_activate(symbol.get() as i32, on)?;
      if activated != on {
        return Err(MarpaError::contract("kernel activation state disagreed with the requested prediction state"));
      }
    }
    Ok(())
  }

  pub fn latest_earley_set(&self) -> i32 {
    self.kernel.latest_earley_set()
  }

  /// Enumerates Earley items across `(start, end)`, sorted by (rule id,
  /// dot position).
  pub fn progress(&self, start: i32, end: i32) -> MarpaResult<Vec<ProgressItem>> {
    progress_report(&self.kernel, start, end)
  }

  pub(crate) fn kernel(&self) -> &KernelRecognizer {
    &self.kernel
  }

  pub(crate) fn grammar(&self) -> &Grammar {
    self.grammar
  }
}
