//! Event kinds and the recognizer's event-sync ordering.
use bitmask_enum::bitmask;

use crate::grammar::SymbolId;

#[bitmask(u8)]
pub enum EventKindSet {
  Completed = 0b001,
  Nulled = 0b010,
  Predicted = 0b100,
}

impl Default for EventKindSet {
  fn default() -> Self {
    EventKindSet::none()
  }
}

/// A single event kind, as carried by an `EventRecord`. Distinct from
/// `EventKindSet`, which is the subscription bitmask a symbol carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
  Completed,
  Nulled,
  /// Covers both `symbol-predicted` and `symbol-expected` kernel events --
  /// both carry the same sort weight, so this crate does not need to
  /// distinguish them any further downstream of the sort.
  Predicted,
}

impl EventKind {
  /// The sort weight: completed (-1) < nulled (0) < predicted/expected (1).
  fn weight(self) -> i8 {
    match self {
      EventKind::Completed => -1,
      EventKind::Nulled => 0,
      EventKind::Predicted => 1,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventRecord {
  pub kind: EventKind,
  pub symbol: SymbolId,
}

/// Sorts `events` into ascending event weight, ties preserving kernel
/// (insertion) order. `sort_by_key` is a stable sort, so ties are
/// preserved automatically.
pub fn sort_events(events: &mut [EventRecord]) {
  events.sort_by_key(|e| e.kind.weight());
}

/// The event-sync protocol, run after precompute, after recognizer
/// creation, and after every `complete()`. Classifies
/// every raw kernel event into fatal / warning / informational /
/// user-visible, sorts the user-visible batch unless `unsorted_events`
/// is set, and invokes the installed event callback with it.
pub(crate) fn sync_events(grammar: &crate::grammar::Grammar) -> crate::error::MarpaResult<()> {
  use crate::logger::{log_error, log_info, log_warning};
  use marpa_runtime_sys as sys;

  let count = grammar.kernel.event_count()?;
  let mut fatal: Vec<EventRecord> = Vec::new();
  let mut warnings: Vec<EventRecord> = Vec::new();
  let mut user_events: Vec<EventRecord> = Vec::new();

  for ix in 0..count {
    let (event_type, value) = grammar.kernel.event(ix)?;
    // Fatal and warning kernel events (counted-nullable, nulling-terminal,
    // earley-item-threshold, loop-rules) carry no symbol of their own in
    // this crate's `EventKind` vocabulary; `Nulled` is reused here purely
    // as a diagnostic placeholder so these can share `EventRecord`'s shape
    // for logging.
    match event_type {
      sys::MARPA_EVENT_COUNTED_NULLABLE | sys::MARPA_EVENT_NULLING_TERMINAL => {
        fatal.push(EventRecord { kind: EventKind::Nulled, symbol: SymbolId::from_raw(value.max(0) as u32) });
      }
      sys::MARPA_EVENT_EARLEY_ITEM_THRESHOLD | sys::MARPA_EVENT_LOOP_RULES => {
        warnings.push(EventRecord { kind: EventKind::Nulled, symbol: SymbolId::from_raw(value.max(0) as u32) });
      }
      sys::MARPA_EVENT_EXHAUSTED => {
        log_info!(grammar.logger, "recognizer exhausted");
      }
      sys::MARPA_EVENT_SYMBOL_COMPLETED => {
        user_events.push(EventRecord { kind: EventKind::Completed, symbol: SymbolId::from_raw(value.max(0) as u32) });
      }
      sys::MARPA_EVENT_SYMBOL_NULLED => {
        user_events.push(EventRecord { kind: EventKind::Nulled, symbol: SymbolId::from_raw(value.max(0) as u32) });
      }
      sys::MARPA_EVENT_SYMBOL_PREDICTED | sys::MARPA_EVENT_SYMBOL_EXPECTED => {
        user_events.push(EventRecord { kind: EventKind::Predicted, symbol: SymbolId::from_raw(value.max(0) as u32) });
      }
      _ => {}
    }
  }

  if !fatal.is_empty() {
    log_error!(grammar.logger, "{} fatal grammar event(s)", fatal.len());
    return Err(crate::error::MarpaError::GrammarFatalEvent { events: fatal });
  }

  if !warnings.is_empty() {
    if grammar.warning_as_error {
      return Err(crate::error::MarpaError::GrammarWarningEscalated { events: warnings });
    }
    if !grammar.ignore_warnings {
      log_warning!(grammar.logger, "{} advisory grammar event(s)", warnings.len());
    }
  }

  if !grammar.unsorted_events && user_events.len() >= 2 {
    sort_events(&mut user_events);
  }

  if !user_events.is_empty() {
    if let Some(callback) = grammar.event_callback.borrow_mut().as_mut() {
      if !callback(&user_events) {
        log_error!(grammar.logger, "event callback returned failure");
      }
    }
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn rec(kind: EventKind, id: u32) -> EventRecord {
    EventRecord { kind, symbol: SymbolId::from_raw(id) }
  }

  #[test]
  fn sorts_completed_before_nulled_before_predicted() {
    let mut events = vec![rec(EventKind::Predicted, 2), rec(EventKind::Completed, 0), rec(EventKind::Nulled, 1)];
    sort_events(&mut events);
    assert_eq!(events[0].kind, EventKind::Completed);
    assert_eq!(events[1].kind, EventKind::Nulled);
    assert_eq!(events[2].kind, EventKind::Predicted);
  }

  #[test]
  fn sort_is_stable_among_equal_weight_ties() {
    // Two predicted events: kernel order must be preserved.
    let mut events =
      vec![rec(EventKind::Completed, 10), rec(EventKind::Predicted, 1), rec(EventKind::Predicted, 2)];
    sort_events(&mut events);
    assert_eq!(events[1].symbol, SymbolId::from_raw(1));
    assert_eq!(events[2].symbol, SymbolId::from_raw(2));
  }

  #[test]
  fn event_kind_set_tracks_subscriptions() {
    let set = EventKindSet::Completed | EventKindSet::Predicted;
    assert!(set.contains(EventKindSet::Completed));
    assert!(!set.contains(EventKindSet::Nulled));
    assert!(set.contains(EventKindSet::Predicted));
  }
}
