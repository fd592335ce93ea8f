use std::fmt::{self, Display};

use crate::event::EventRecord;

/// Every error kind a `marpa_core` operation can produce.
#[derive(Clone, Debug)]
pub enum MarpaError {
  /// Any allocation failed. `marpa_core` itself never allocates in a way
  /// that can fail short of the process running out of memory; this
  /// variant exists for parity with the kernel, which can report it.
  OutOfMemory,

  /// The kernel returned a negative sentinel. `code` is the kernel's last
  /// error code (see `marpa_runtime_sys::Marpa_Error_Code`); `context`
  /// names the operation that triggered it.
  Kernel { code: i32, context: &'static str },

  /// Caller passed null where a value is required, an out-of-range index,
  /// or called an operation from the wrong phase (e.g. `add_rule` after
  /// `precompute`).
  ContractViolation { detail: String },

  /// An advisory kernel event (`earley-item-threshold`, `loop-rules`) was
  /// escalated to failure because `warning_as_error` was set.
  GrammarWarningEscalated { events: Vec<EventRecord> },

  /// A fatal kernel event (`counted-nullable`, `nulling-terminal`)
  /// occurred during event sync.
  GrammarFatalEvent { events: Vec<EventRecord> },

  /// A user callback returned `false` (or the `Fail` variant, for the
  /// evaluator's result callback).
  CallbackFailure { phase: &'static str },

  /// The lexing driver's reader stopped with `end_of_input == false` and
  /// `remaining_data_is_ok` was false.
  RecognizerNotDone,

  /// The evaluator rejected the parse: ambiguous with ambiguity
  /// disallowed, or null with null disallowed.
  EvaluatorRejected { reason: EvaluatorRejection },
}

#[derive(Clone, Debug)]
pub enum EvaluatorRejection {
  Ambiguous { ambiguity_metric: i32 },
  Null,
}

pub type MarpaResult<T> = Result<T, MarpaError>;

use MarpaError::*;

impl Display for MarpaError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      OutOfMemory => f.write_str("out of memory"),
      Kernel { code, context } => write!(f, "kernel rejected [{context}]: error code {code}"),
      ContractViolation { detail } => write!(f, "contract violation: {detail}"),
      GrammarWarningEscalated { events } => {
        write!(f, "{} advisory grammar event(s) escalated to error under warning-as-error", events.len())
      }
      GrammarFatalEvent { events } => {
        write!(f, "{} fatal grammar event(s) during event sync", events.len())
      }
      CallbackFailure { phase } => write!(f, "user callback in phase [{phase}] returned failure"),
      RecognizerNotDone => write!(f, "input remained after the reader stopped and remaining data was not permitted"),
      EvaluatorRejected { reason } => match reason {
        EvaluatorRejection::Ambiguous { ambiguity_metric } => {
          write!(f, "parse is ambiguous (metric {ambiguity_metric}) and ambiguity was disallowed")
        }
        EvaluatorRejection::Null => write!(f, "parse is null and null parses were disallowed"),
      },
    }
  }
}

impl std::error::Error for MarpaError {}

impl MarpaError {
  pub fn contract(detail: impl Into<String>) -> Self {
    ContractViolation { detail: detail.into() }
  }

  pub fn kernel(code: i32, context: &'static str) -> Self {
    Kernel { code, context }
  }

  pub fn is_fatal(&self) -> bool {
    !matches!(self, GrammarWarningEscalated { .. })
  }
}
