//! The only module in this crate allowed to call into `marpa_runtime_sys`.
//!
//! Every kernel handle gets a thin RAII wrapper here: construction wraps
//! the raw pointer, `Drop` calls the matching `marpa_*_unref`, and every
//! fallible kernel call is translated into a `MarpaResult` at the point
//! of the call rather than left as a raw `c_int` for callers to forget
//! to check. Everything above this module is 100% safe Rust.
use std::os::raw::c_int;
use std::ptr::NonNull;

use marpa_runtime_sys as sys;

use crate::error::{MarpaError, MarpaResult};

/// On a kernel failure sentinel, recovers the kernel's *last error code*
/// via `marpa_g_error` rather than reporting the sentinel (`-1`/`-2`)
/// itself -- the sentinel only says "something failed", `marpa_g_error`
/// says what.
fn check(grammar: *mut sys::Marpa_Grammar, rc: c_int, context: &'static str) -> MarpaResult<c_int> {
  if sys::is_kernel_failure(rc) {
    let code = unsafe { sys::marpa_g_error(grammar, std::ptr::null_mut()) };
    Err(MarpaError::kernel(code, context))
  } else {
    Ok(rc)
  }
}

pub struct KernelGrammar(NonNull<sys::Marpa_Grammar>);

impl KernelGrammar {
  pub fn new() -> MarpaResult<Self> {
    let raw = unsafe { sys::marpa_g_new(std::ptr::null()) };
    let ptr = NonNull::new(raw).ok_or(MarpaError::OutOfMemory)?;
    let rc = unsafe { sys::marpa_g_force_valued(ptr.as_ptr()) };
    check(ptr.as_ptr(), rc, "marpa_g_force_valued")?;
    Ok(Self(ptr))
  }

  pub fn as_ptr(&self) -> *mut sys::Marpa_Grammar {
    self.0.as_ptr()
  }

  pub fn symbol_new(&self) -> MarpaResult<sys::Marpa_Symbol_ID> {
    let id = unsafe { sys::marpa_g_symbol_new(self.as_ptr()) };
    check(self.as_ptr(), id, "marpa_g_symbol_new")
  }

  pub fn symbol_is_terminal_set(&self, sym: sys::Marpa_Symbol_ID, value: bool) -> MarpaResult<()> {
    let rc = unsafe { sys::marpa_g_symbol_is_terminal_set(self.as_ptr(), sym, value as c_int) };
    check(self.as_ptr(), rc, "marpa_g_symbol_is_terminal_set").map(|_| ())
  }

  pub fn start_symbol_set(&self, sym: sys::Marpa_Symbol_ID) -> MarpaResult<()> {
    let rc = unsafe { sys::marpa_g_start_symbol_set(self.as_ptr(), sym) };
    check(self.as_ptr(), rc, "marpa_g_start_symbol_set").map(|_| ())
  }

  pub fn symbol_is_completion_event_set(&self, sym: sys::Marpa_Symbol_ID, value: bool) -> MarpaResult<()> {
    let rc = unsafe { sys::marpa_g_symbol_is_completion_event_set(self.as_ptr(), sym, value as c_int) };
    check(self.as_ptr(), rc, "marpa_g_symbol_is_completion_event_set").map(|_| ())
  }

  pub fn symbol_is_nulled_event_set(&self, sym: sys::Marpa_Symbol_ID, value: bool) -> MarpaResult<()> {
    let rc = unsafe { sys::marpa_g_symbol_is_nulled_event_set(self.as_ptr(), sym, value as c_int) };
    check(self.as_ptr(), rc, "marpa_g_symbol_is_nulled_event_set").map(|_| ())
  }

  pub fn symbol_is_prediction_event_set(&self, sym: sys::Marpa_Symbol_ID, value: bool) -> MarpaResult<()> {
    let rc = unsafe { sys::marpa_g_symbol_is_prediction_event_set(self.as_ptr(), sym, value as c_int) };
    check(self.as_ptr(), rc, "marpa_g_symbol_is_prediction_event_set").map(|_| ())
  }

  pub fn rule_new(
    &self,
    lhs: sys::Marpa_Symbol_ID,
    rhs: &[sys::Marpa_Symbol_ID],
  ) -> MarpaResult<sys::Marpa_Rule_ID> {
    let id = unsafe { sys::marpa_g_rule_new(self.as_ptr(), lhs, rhs.as_ptr(), rhs.len() as c_int) };
    check(self.as_ptr(), id, "marpa_g_rule_new")
  }

  pub fn sequence_new(
    &self,
    lhs: sys::Marpa_Symbol_ID,
    rhs: sys::Marpa_Symbol_ID,
    separator: sys::Marpa_Symbol_ID,
    minimum: c_int,
    proper: bool,
  ) -> MarpaResult<sys::Marpa_Rule_ID> {
    let flags = if proper { sys::MARPA_PROPER_SEPARATION } else { 0 };
    let id = unsafe { sys::marpa_g_sequence_new(self.as_ptr(), lhs, rhs, separator, minimum, flags) };
    check(self.as_ptr(), id, "marpa_g_sequence_new")
  }

  pub fn rule_rank_set(&self, rule: sys::Marpa_Rule_ID, rank: c_int) -> MarpaResult<()> {
    let rc = unsafe { sys::marpa_g_rule_rank_set(self.as_ptr(), rule, rank) };
    check(self.as_ptr(), rc, "marpa_g_rule_rank_set").map(|_| ())
  }

  pub fn rule_null_high_set(&self, rule: sys::Marpa_Rule_ID, flag: bool) -> MarpaResult<()> {
    let rc = unsafe { sys::marpa_g_rule_null_high_set(self.as_ptr(), rule, flag as c_int) };
    check(self.as_ptr(), rc, "marpa_g_rule_null_high_set").map(|_| ())
  }

  pub fn precompute(&self) -> MarpaResult<()> {
    let rc = unsafe { sys::marpa_g_precompute(self.as_ptr()) };
    check(self.as_ptr(), rc, "marpa_g_precompute").map(|_| ())
  }

  pub fn highest_symbol_id(&self) -> MarpaResult<sys::Marpa_Symbol_ID> {
    let id = unsafe { sys::marpa_g_highest_symbol_id(self.as_ptr()) };
    check(self.as_ptr(), id, "marpa_g_highest_symbol_id")
  }

  pub fn event_count(&self) -> MarpaResult<c_int> {
    let n = unsafe { sys::marpa_g_event_count(self.as_ptr()) };
    check(self.as_ptr(), n, "marpa_g_event_count")
  }

  /// Returns `(event_type, value)` for the event at index `ix`. `value`
  /// is the kernel's associated payload for the event -- a symbol id for
  /// the `symbol-*` event kinds, unused for the rest.
  pub fn event(&self, ix: c_int) -> MarpaResult<(sys::Marpa_Event_Type, c_int)> {
    let mut event_type: sys::Marpa_Event_Type = 0;
    let rc = unsafe { sys::marpa_g_event(self.as_ptr(), &mut event_type, ix) };
    check(self.as_ptr(), rc, "marpa_g_event").map(|value| (event_type, value))
  }
}

impl Drop for KernelGrammar {
  fn drop(&mut self) {
    unsafe { sys::marpa_g_unref(self.as_ptr()) };
  }
}

pub struct KernelRecognizer {
  ptr: NonNull<sys::Marpa_Recognizer>,
  grammar: *mut sys::Marpa_Grammar,
}

impl KernelRecognizer {
  pub fn new(grammar: &KernelGrammar) -> MarpaResult<Self> {
    let raw = unsafe { sys::marpa_r_new(grammar.as_ptr()) };
    let ptr = NonNull::new(raw).ok_or(MarpaError::OutOfMemory)?;
    let rc = unsafe { sys::marpa_r_start_input(ptr.as_ptr()) };
    check(grammar.as_ptr(), rc, "marpa_r_start_input")?;
    Ok(Self { ptr, grammar: grammar.as_ptr() })
  }

  pub fn as_ptr(&self) -> *mut sys::Marpa_Recognizer {
    self.ptr.as_ptr()
  }

  pub fn alternative(&self, sym: sys::Marpa_Symbol_ID, value: c_int, length: c_int) -> MarpaResult<()> {
    let rc = unsafe { sys::marpa_r_alternative(self.as_ptr(), sym, value, length) };
    check(self.grammar, rc, "marpa_r_alternative").map(|_| ())
  }

  pub fn earleme_complete(&self) -> MarpaResult<c_int> {
    let rc = unsafe { sys::marpa_r_earleme_complete(self.as_ptr()) };
    check(self.grammar, rc, "marpa_r_earleme_complete")
  }

  pub fn terminals_expected(&self, buffer: &mut [sys::Marpa_Symbol_ID]) -> MarpaResult<usize> {
    let n = unsafe { sys::marpa_r_terminals_expected(self.as_ptr(), buffer.as_mut_ptr()) };
    check(self.grammar, n, "marpa_r_terminals_expected").map(|n| n as usize)
  }

  pub fn terminal_is_expected(&self, sym: sys::Marpa_Symbol_ID) -> bool {
    unsafe { sys::marpa_r_terminal_is_expected(self.as_ptr(), sym) != 0 }
  }

  pub fn completion_symbol_activate(&self, sym: sys::Marpa_Symbol_ID, on: bool) -> MarpaResult<bool> {
    let rc = unsafe { sys::marpa_r_completion_symbol_activate(self.as_ptr(), sym, on as c_int) };
    check(self.grammar, rc, "marpa_r_completion_symbol_activate").map(|rc| rc != 0)
  }

  pub fn nulled_symbol_activate(&self, sym: sys::Marpa_Symbol_ID, on: bool) -> MarpaResult<bool> {
    let rc = unsafe { sys::marpa_r_nulled_symbol_activate(self.as_ptr(), sym, on as c_int) };
    check(self.grammar, rc, "marpa_r_nulled_symbol_activate").map(|rc| rc != 0)
  }

  pub fn prediction_symbol_activate(&self, sym: sys::Marpa_Symbol_ID, on: bool) -> MarpaResult<bool> {
    let rc = unsafe { sys::marpa_r_prediction_symbol_activate(self.as_ptr(), sym, on as c_int) };
    check(self.grammar, rc, "marpa_r_prediction_symbol_activate").map(|rc| rc != 0)
  }

  pub fn latest_earley_set(&self) -> sys::Marpa_Earley_Set_ID {
    unsafe { sys::marpa_r_latest_earley_set(self.as_ptr()) }
  }

  pub fn earleme(&self, set: sys::Marpa_Earley_Set_ID) -> MarpaResult<sys::Marpa_Earleme> {
    let e = unsafe { sys::marpa_r_earleme(self.as_ptr(), set) };
    check(self.grammar, e, "marpa_r_earleme")
  }

  pub fn progress_report_start(&self, set: sys::Marpa_Earley_Set_ID) -> MarpaResult<()> {
    let rc = unsafe { sys::marpa_r_progress_report_start(self.as_ptr(), set) };
    check(self.grammar, rc, "marpa_r_progress_report_start").map(|_| ())
  }

  /// Returns `None` once the kernel has no more progress items to report
  /// at the current set (a negative rule id with no kernel error pending
  /// signals end-of-report in libmarpa's convention).
  pub fn progress_item(&self) -> MarpaResult<Option<(sys::Marpa_Rule_ID, c_int, sys::Marpa_Earley_Set_ID)>> {
    let mut position: c_int = 0;
    let mut origin: sys::Marpa_Earley_Set_ID = 0;
    let rule = unsafe { sys::marpa_r_progress_item(self.as_ptr(), &mut position, &mut origin) };
    if rule == -1 {
      return Ok(None);
    }
    let rule = check(self.grammar, rule, "marpa_r_progress_item")?;
    Ok(Some((rule, position, origin)))
  }

  pub fn progress_report_finish(&self) -> MarpaResult<()> {
    let rc = unsafe { sys::marpa_r_progress_report_finish(self.as_ptr()) };
    check(self.grammar, rc, "marpa_r_progress_report_finish").map(|_| ())
  }
}

impl Drop for KernelRecognizer {
  fn drop(&mut self) {
    unsafe { sys::marpa_r_unref(self.as_ptr()) };
  }
}

pub struct KernelBocage {
  ptr: NonNull<sys::Marpa_Bocage>,
  grammar: *mut sys::Marpa_Grammar,
}

impl KernelBocage {
  pub fn new(recognizer: &KernelRecognizer, set: sys::Marpa_Earley_Set_ID) -> MarpaResult<Self> {
    let raw = unsafe { sys::marpa_b_new(recognizer.as_ptr(), set) };
    let ptr = NonNull::new(raw).ok_or_else(|| {
      let code = unsafe { sys::marpa_g_error(recognizer.grammar, std::ptr::null_mut()) };
      MarpaError::kernel(code, "marpa_b_new")
    })?;
    Ok(Self { ptr, grammar: recognizer.grammar })
  }

  pub fn as_ptr(&self) -> *mut sys::Marpa_Bocage {
    self.ptr.as_ptr()
  }
}

impl Drop for KernelBocage {
  fn drop(&mut self) {
    unsafe { sys::marpa_b_unref(self.as_ptr()) };
  }
}

pub struct KernelOrder {
  ptr: NonNull<sys::Marpa_Order>,
  grammar: *mut sys::Marpa_Grammar,
}

impl KernelOrder {
  pub fn new(bocage: &KernelBocage) -> MarpaResult<Self> {
    let raw = unsafe { sys::marpa_o_new(bocage.as_ptr()) };
    let ptr = NonNull::new(raw).ok_or_else(|| {
      let code = unsafe { sys::marpa_g_error(bocage.grammar, std::ptr::null_mut()) };
      MarpaError::kernel(code, "marpa_o_new")
    })?;
    Ok(Self { ptr, grammar: bocage.grammar })
  }

  pub fn as_ptr(&self) -> *mut sys::Marpa_Order {
    self.ptr.as_ptr()
  }

  pub fn high_rank_only_set(&self, flag: bool) -> MarpaResult<()> {
    let rc = unsafe { sys::marpa_o_high_rank_only_set(self.as_ptr(), flag as c_int) };
    check(self.grammar, rc, "marpa_o_high_rank_only_set").map(|_| ())
  }

  pub fn rank(&self) -> MarpaResult<c_int> {
    let rc = unsafe { sys::marpa_o_rank(self.as_ptr()) };
    check(self.grammar, rc, "marpa_o_rank")
  }

  pub fn ambiguity_metric(&self) -> c_int {
    unsafe { sys::marpa_o_ambiguity_metric(self.as_ptr()) }
  }

  pub fn is_null(&self) -> bool {
    unsafe { sys::marpa_o_is_null(self.as_ptr()) != 0 }
  }
}

impl Drop for KernelOrder {
  fn drop(&mut self) {
    unsafe { sys::marpa_o_unref(self.as_ptr()) };
  }
}

pub struct KernelTree {
  ptr: NonNull<sys::Marpa_Tree>,
  grammar: *mut sys::Marpa_Grammar,
}

impl KernelTree {
  pub fn new(order: &KernelOrder) -> MarpaResult<Self> {
    let raw = unsafe { sys::marpa_t_new(order.as_ptr()) };
    let ptr = NonNull::new(raw).ok_or_else(|| {
      let code = unsafe { sys::marpa_g_error(order.grammar, std::ptr::null_mut()) };
      MarpaError::kernel(code, "marpa_t_new")
    })?;
    Ok(Self { ptr, grammar: order.grammar })
  }

  pub fn as_ptr(&self) -> *mut sys::Marpa_Tree {
    self.ptr.as_ptr()
  }

  /// `true` while another parse tree remains to be stepped through.
  pub fn next(&self) -> bool {
    unsafe { sys::marpa_t_next(self.as_ptr()) >= 0 }
  }
}

impl Drop for KernelTree {
  fn drop(&mut self) {
    unsafe { sys::marpa_t_unref(self.as_ptr()) };
  }
}

pub struct KernelValue {
  ptr: NonNull<sys::Marpa_Value>,
}

impl KernelValue {
  pub fn new(tree: &KernelTree) -> MarpaResult<Self> {
    let raw = unsafe { sys::marpa_v_new(tree.as_ptr()) };
    let ptr = NonNull::new(raw).ok_or(MarpaError::OutOfMemory)?;
    let rc = unsafe { sys::marpa_v_valued_force(ptr.as_ptr()) };
    check(tree.grammar, rc, "marpa_v_valued_force")?;
    Ok(Self { ptr })
  }

  pub fn as_ptr(&self) -> *mut sys::Marpa_Value {
    self.ptr.as_ptr()
  }

  pub fn step(&self) -> sys::Marpa_Step_Type {
    unsafe { sys::marpa_v_step(self.as_ptr()) }
  }

  pub fn rule(&self) -> sys::Marpa_Rule_ID {
    unsafe { sys::marpa_v_rule(self.as_ptr()) }
  }

  pub fn token(&self) -> sys::Marpa_Symbol_ID {
    unsafe { sys::marpa_v_token(self.as_ptr()) }
  }

  pub fn token_value(&self) -> c_int {
    unsafe { sys::marpa_v_token_value(self.as_ptr()) }
  }

  pub fn symbol(&self) -> sys::Marpa_Symbol_ID {
    unsafe { sys::marpa_v_symbol(self.as_ptr()) }
  }

  pub fn arg_0(&self) -> c_int {
    unsafe { sys::marpa_v_arg_0(self.as_ptr()) }
  }

  pub fn arg_n(&self) -> c_int {
    unsafe { sys::marpa_v_arg_n(self.as_ptr()) }
  }

  pub fn result(&self) -> c_int {
    unsafe { sys::marpa_v_result(self.as_ptr()) }
  }
}

impl Drop for KernelValue {
  fn drop(&mut self) {
    unsafe { sys::marpa_v_unref(self.as_ptr()) };
  }
}
