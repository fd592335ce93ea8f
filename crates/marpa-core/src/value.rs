//! The evaluator: bocage -> order -> tree -> value stepper over a typed
//! semantic stack.
use marpa_runtime_sys as sys;

use crate::config::EvaluatorOptions;
use crate::error::{EvaluatorRejection, MarpaError, MarpaResult};
use crate::grammar::{RuleId, SymbolId};
use crate::kernel::{KernelBocage, KernelOrder, KernelTree, KernelValue};
use crate::recognizer::Recognizer;
use crate::stack::{StackOptions, TypedStack};

/// A single step the kernel's value stepper emits while walking a parse
/// tree, modeled as a tagged variant rather than exposing the raw
/// step-type integer.
#[derive(Debug, Clone, Copy)]
pub enum ValueStep {
  Rule { rule: RuleId, arg_first: i32, arg_last: i32, result_index: i32 },
  Token { symbol: SymbolId, token_value: i32, result_index: i32 },
  Nulling { symbol: SymbolId, result_index: i32 },
  Inactive,
  /// The stepper's initial state, before the first real step; a no-op
  /// for callers.
  Initial,
}

/// The three-arm signal the value-result callback carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultAction {
  Continue,
  Stop,
  Fail,
}

/// Every evaluator callback reports success/failure through `MarpaResult`
/// rather than through the produced value itself -- a callback that
/// succeeds with no value to store (e.g. a nulling action for a
/// genuinely empty subtree) returns `Ok(None)`, which is a distinct
/// outcome from `Err(..)`.
pub type ValueRuleCallback<V> = Box<dyn FnMut(RuleId, &[Option<V>]) -> MarpaResult<Option<V>>>;
pub type ValueSymbolCallback<V> = Box<dyn FnMut(SymbolId, i32) -> MarpaResult<Option<V>>>;
pub type ValueNullingCallback<V> = Box<dyn FnMut(SymbolId) -> MarpaResult<Option<V>>>;
pub type ValueResultCallback<V> = Box<dyn FnMut(Option<&V>) -> ResultAction>;

pub struct Evaluator<'r, V: Clone> {
  recognizer: &'r Recognizer<'r>,
  options: EvaluatorOptions,
  value_rule: ValueRuleCallback<V>,
  value_symbol: ValueSymbolCallback<V>,
  value_nulling: ValueNullingCallback<V>,
  value_result: ValueResultCallback<V>,
}

fn classify_step(raw: sys::Marpa_Step_Type, value: &KernelValue) -> ValueStep {
  match raw {
    sys::MARPA_STEP_RULE => ValueStep::Rule {
      rule: RuleId::from_raw(value.rule() as u32),
      arg_first: value.arg_0(),
      arg_last: value.arg_n(),
      result_index: value.result(),
    },
    sys::MARPA_STEP_TOKEN => ValueStep::Token {
      symbol: SymbolId::from_raw(value.symbol() as u32),
      token_value: value.token_value(),
      result_index: value.result(),
    },
    sys::MARPA_STEP_NULLING_SYMBOL => {
      ValueStep::Nulling { symbol: SymbolId::from_raw(value.symbol() as u32), result_index: value.result() }
    }
    sys::MARPA_STEP_INACTIVE => ValueStep::Inactive,
    _ => ValueStep::Initial,
  }
}

impl<'r, V: Clone> Evaluator<'r, V> {
  pub fn new(
    recognizer: &'r Recognizer<'r>,
    options: EvaluatorOptions,
    value_rule: ValueRuleCallback<V>,
    value_symbol: ValueSymbolCallback<V>,
    value_nulling: ValueNullingCallback<V>,
    value_result: ValueResultCallback<V>,
  ) -> Self {
    Self { recognizer, options, value_rule, value_symbol, value_nulling, value_result }
  }

  /// Walks every ordered parse tree of the recognizer's latest Earley
  /// set. Any callback failure aborts evaluation and releases every
  /// kernel handle (bocage/order/tree/value) and the per-tree stack in
  /// reverse construction order, via ordinary Rust `Drop` -- no explicit
  /// teardown path is needed.
  pub fn run(&mut self) -> MarpaResult<()> {
    let latest = self.recognizer.latest_earley_set();
    let bocage = KernelBocage::new(self.recognizer.kernel(), latest)?;
    let order = KernelOrder::new(&bocage)?;
    order.high_rank_only_set(self.options.high_rank_only)?;
    if self.options.order_by_rank {
      order.rank()?;
    }
    if !self.options.allow_ambiguous && order.ambiguity_metric() > 1 {
      return Err(MarpaError::EvaluatorRejected {
        reason: EvaluatorRejection::Ambiguous { ambiguity_metric: order.ambiguity_metric() },
      });
    }
    if !self.options.allow_null && order.is_null() {
      return Err(MarpaError::EvaluatorRejected { reason: EvaluatorRejection::Null });
    }

    let tree = KernelTree::new(&order)?;
    while tree.next() {
      let value = KernelValue::new(&tree)?;
      let mut stack: TypedStack<V> = TypedStack::new(StackOptions { grow_on_get: true, grow_on_set: true });

      loop {
        let step = classify_step(value.step(), &value);
        match step {
          ValueStep::Rule { rule, arg_first, arg_last, result_index } => {
            let operands: Vec<Option<V>> = (arg_first..=arg_last)
              .map(|i| stack.get(i as usize).cloned().unwrap_or(None))
              .collect();
            let produced = (self.value_rule)(rule, &operands).map_err(|_| MarpaError::CallbackFailure { phase: "value_rule" })?;
            stack.set(result_index as usize, produced).map_err(|_| MarpaError::contract("rule result index out of bounds"))?;
          }
          ValueStep::Token { symbol, token_value, result_index } => {
            let produced =
              (self.value_symbol)(symbol, token_value).map_err(|_| MarpaError::CallbackFailure { phase: "value_symbol" })?;
            stack.set(result_index as usize, produced).map_err(|_| MarpaError::contract("token result index out of bounds"))?;
          }
          ValueStep::Nulling { symbol, result_index } => {
            let produced = (self.value_nulling)(symbol).map_err(|_| MarpaError::CallbackFailure { phase: "value_nulling" })?;
            stack.set(result_index as usize, produced).map_err(|_| MarpaError::contract("nulling result index out of bounds"))?;
          }
          ValueStep::Inactive => break,
          ValueStep::Initial => continue,
        }
      }

      let top = stack.get(0).and_then(|slot| slot.as_ref());
      match (self.value_result)(top) {
        ResultAction::Fail => return Err(MarpaError::CallbackFailure { phase: "value_result" }),
        ResultAction::Stop => return Ok(()),
        ResultAction::Continue => continue,
      }
    }

    Ok(())
  }
}
