//! Raw `extern "C"` bindings to libmarpa, the Earley-parsing kernel that
//! `marpa_core` wraps.
//!
//! This crate is deliberately inert: it declares the kernel's public
//! surface (opaque handle types, function signatures, error codes) and
//! nothing else. The kernel's internal algorithms are treated as a
//! black-box API whose operations are enumerated here and nowhere
//! implemented.
//!
//! Every function here is `unsafe` and every handle is a raw pointer.
//! `marpa_core::kernel` is the only module permitted to call into this
//! crate; nothing above that boundary touches these symbols directly.
#![allow(non_camel_case_types)]

use std::os::raw::{c_char, c_int, c_void};

/// `Marpa_Symbol_ID`, `Marpa_Rule_ID`, and earley-set ids are plain `c_int`s
/// in libmarpa; negative values are always kernel error sentinels.
pub type Marpa_Symbol_ID = c_int;
pub type Marpa_Rule_ID = c_int;
pub type Marpa_Earley_Set_ID = c_int;
pub type Marpa_Earleme = c_int;
pub type Marpa_Event_Type = c_int;
pub type Marpa_Step_Type = c_int;

pub const MARPA_STEP_INITIAL: Marpa_Step_Type = 0;
pub const MARPA_STEP_RULE: Marpa_Step_Type = 1;
pub const MARPA_STEP_TOKEN: Marpa_Step_Type = 2;
pub const MARPA_STEP_NULLING_SYMBOL: Marpa_Step_Type = 3;
pub const MARPA_STEP_INACTIVE: Marpa_Step_Type = 4;

pub const MARPA_EVENT_COUNTED_NULLABLE: Marpa_Event_Type = 1;
pub const MARPA_EVENT_EARLEY_ITEM_THRESHOLD: Marpa_Event_Type = 2;
pub const MARPA_EVENT_EXHAUSTED: Marpa_Event_Type = 3;
pub const MARPA_EVENT_LOOP_RULES: Marpa_Event_Type = 4;
pub const MARPA_EVENT_NULLING_TERMINAL: Marpa_Event_Type = 5;
pub const MARPA_EVENT_SYMBOL_COMPLETED: Marpa_Event_Type = 6;
pub const MARPA_EVENT_SYMBOL_EXPECTED: Marpa_Event_Type = 7;
pub const MARPA_EVENT_SYMBOL_NULLED: Marpa_Event_Type = 8;
pub const MARPA_EVENT_SYMBOL_PREDICTED: Marpa_Event_Type = 9;

/// Mirrors libmarpa's documented `Marpa_Error_Code` enumeration. Only the
/// variants `marpa_core::error` actually discriminates on are named beyond
/// `NONE`; everything else round-trips through the raw `c_int`.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marpa_Error_Code {
  MARPA_ERR_NONE = 0,
  MARPA_ERR_COUNTED_NULLABLE = 29,
  MARPA_ERR_DUPLICATE_RULE = 32,
  MARPA_ERR_GRAMMAR_HAS_CYCLE = 46,
  MARPA_ERR_NO_PARSE = 89,
  MARPA_ERR_NULLING_TERMINAL = 92,
  MARPA_ERR_PRECOMPUTED = 96,
  MARPA_ERR_NOT_PRECOMPUTED = 144,
  MARPA_ERR_SEQUENCE_LHS_NOT_UNIQUE = 111,
  MARPA_ERR_UNKNOWN = 127,
  /// Catch-all for any kernel code not enumerated above.
  MARPA_ERR_OTHER = -1,
}

/// Opaque kernel grammar handle.
#[repr(C)]
pub struct Marpa_Grammar {
  _private: [u8; 0],
}
/// Opaque kernel recognizer handle.
#[repr(C)]
pub struct Marpa_Recognizer {
  _private: [u8; 0],
}
/// Opaque kernel bocage handle.
#[repr(C)]
pub struct Marpa_Bocage {
  _private: [u8; 0],
}
/// Opaque kernel order handle.
#[repr(C)]
pub struct Marpa_Order {
  _private: [u8; 0],
}
/// Opaque kernel tree handle.
#[repr(C)]
pub struct Marpa_Tree {
  _private: [u8; 0],
}
/// Opaque kernel value-stepper handle.
#[repr(C)]
pub struct Marpa_Value {
  _private: [u8; 0],
}

extern "C" {
  // --- grammar ---
  pub fn marpa_g_new(config: *const c_void) -> *mut Marpa_Grammar;
  pub fn marpa_g_force_valued(g: *mut Marpa_Grammar) -> c_int;
  pub fn marpa_g_symbol_new(g: *mut Marpa_Grammar) -> Marpa_Symbol_ID;
  pub fn marpa_g_symbol_is_terminal_set(g: *mut Marpa_Grammar, sym: Marpa_Symbol_ID, value: c_int) -> c_int;
  pub fn marpa_g_start_symbol_set(g: *mut Marpa_Grammar, sym: Marpa_Symbol_ID) -> Marpa_Symbol_ID;
  pub fn marpa_g_symbol_is_completion_event_set(g: *mut Marpa_Grammar, sym: Marpa_Symbol_ID, value: c_int) -> c_int;
  pub fn marpa_g_symbol_is_nulled_event_set(g: *mut Marpa_Grammar, sym: Marpa_Symbol_ID, value: c_int) -> c_int;
  pub fn marpa_g_symbol_is_prediction_event_set(g: *mut Marpa_Grammar, sym: Marpa_Symbol_ID, value: c_int) -> c_int;
  pub fn marpa_g_rule_new(
    g: *mut Marpa_Grammar,
    lhs: Marpa_Symbol_ID,
    rhs: *const Marpa_Symbol_ID,
    len: c_int,
  ) -> Marpa_Rule_ID;
  pub fn marpa_g_sequence_new(
    g: *mut Marpa_Grammar,
    lhs: Marpa_Symbol_ID,
    rhs: Marpa_Symbol_ID,
    separator: Marpa_Symbol_ID,
    min: c_int,
    flags: c_int,
  ) -> Marpa_Rule_ID;
  pub fn marpa_g_rule_rank_set(g: *mut Marpa_Grammar, rule: Marpa_Rule_ID, rank: c_int) -> c_int;
  pub fn marpa_g_rule_null_high_set(g: *mut Marpa_Grammar, rule: Marpa_Rule_ID, flag: c_int) -> c_int;
  pub fn marpa_g_precompute(g: *mut Marpa_Grammar) -> c_int;
  pub fn marpa_g_highest_symbol_id(g: *mut Marpa_Grammar) -> Marpa_Symbol_ID;
  pub fn marpa_g_event_count(g: *mut Marpa_Grammar) -> c_int;
  pub fn marpa_g_event(g: *mut Marpa_Grammar, event_type: *mut Marpa_Event_Type, ix: c_int) -> c_int;
  pub fn marpa_g_error(g: *mut Marpa_Grammar, message: *mut *const c_char) -> c_int;
  pub fn marpa_g_unref(g: *mut Marpa_Grammar);

  // --- recognizer ---
  pub fn marpa_r_new(g: *mut Marpa_Grammar) -> *mut Marpa_Recognizer;
  pub fn marpa_r_start_input(r: *mut Marpa_Recognizer) -> c_int;
  pub fn marpa_r_alternative(
    r: *mut Marpa_Recognizer,
    sym: Marpa_Symbol_ID,
    value: c_int,
    length: c_int,
  ) -> c_int;
  pub fn marpa_r_earleme_complete(r: *mut Marpa_Recognizer) -> c_int;
  pub fn marpa_r_terminals_expected(r: *mut Marpa_Recognizer, buffer: *mut Marpa_Symbol_ID) -> c_int;
  pub fn marpa_r_terminal_is_expected(r: *mut Marpa_Recognizer, sym: Marpa_Symbol_ID) -> c_int;
  pub fn marpa_r_completion_symbol_activate(r: *mut Marpa_Recognizer, sym: Marpa_Symbol_ID, on: c_int) -> c_int;
  pub fn marpa_r_nulled_symbol_activate(r: *mut Marpa_Recognizer, sym: Marpa_Symbol_ID, on: c_int) -> c_int;
  pub fn marpa_r_prediction_symbol_activate(r: *mut Marpa_Recognizer, sym: Marpa_Symbol_ID, on: c_int) -> c_int;
  pub fn marpa_r_latest_earley_set(r: *mut Marpa_Recognizer) -> Marpa_Earley_Set_ID;
  pub fn marpa_r_earleme(r: *mut Marpa_Recognizer, set: Marpa_Earley_Set_ID) -> Marpa_Earleme;
  pub fn marpa_r_progress_report_start(r: *mut Marpa_Recognizer, set: Marpa_Earley_Set_ID) -> c_int;
  pub fn marpa_r_progress_item(
    r: *mut Marpa_Recognizer,
    position: *mut c_int,
    origin: *mut Marpa_Earley_Set_ID,
  ) -> Marpa_Rule_ID;
  pub fn marpa_r_progress_report_finish(r: *mut Marpa_Recognizer) -> c_int;
  pub fn marpa_r_unref(r: *mut Marpa_Recognizer);

  // --- bocage / order / tree / value ---
  pub fn marpa_b_new(r: *mut Marpa_Recognizer, set: Marpa_Earley_Set_ID) -> *mut Marpa_Bocage;
  pub fn marpa_b_unref(b: *mut Marpa_Bocage);
  pub fn marpa_o_new(b: *mut Marpa_Bocage) -> *mut Marpa_Order;
  pub fn marpa_o_high_rank_only_set(o: *mut Marpa_Order, flag: c_int) -> c_int;
  pub fn marpa_o_rank(o: *mut Marpa_Order) -> c_int;
  pub fn marpa_o_ambiguity_metric(o: *mut Marpa_Order) -> c_int;
  pub fn marpa_o_is_null(o: *mut Marpa_Order) -> c_int;
  pub fn marpa_o_unref(o: *mut Marpa_Order);
  pub fn marpa_t_new(o: *mut Marpa_Order) -> *mut Marpa_Tree;
  pub fn marpa_t_next(t: *mut Marpa_Tree) -> c_int;
  pub fn marpa_t_unref(t: *mut Marpa_Tree);
  pub fn marpa_v_new(t: *mut Marpa_Tree) -> *mut Marpa_Value;
  pub fn marpa_v_valued_force(v: *mut Marpa_Value) -> c_int;
  pub fn marpa_v_step(v: *mut Marpa_Value) -> Marpa_Step_Type;
  pub fn marpa_v_rule(v: *mut Marpa_Value) -> Marpa_Rule_ID;
  pub fn marpa_v_token(v: *mut Marpa_Value) -> Marpa_Symbol_ID;
  pub fn marpa_v_token_value(v: *mut Marpa_Value) -> c_int;
  pub fn marpa_v_symbol(v: *mut Marpa_Value) -> Marpa_Symbol_ID;
  pub fn marpa_v_arg_0(v: *mut Marpa_Value) -> c_int;
  pub fn marpa_v_arg_n(v: *mut Marpa_Value) -> c_int;
  pub fn marpa_v_result(v: *mut Marpa_Value) -> c_int;
  pub fn marpa_v_unref(v: *mut Marpa_Value);
}

/// Sequence-rule flag bits for `marpa_g_sequence_new`'s `flags` argument.
pub const MARPA_PROPER_SEPARATION: c_int = 0x1;

/// Negative return values from the kernel are always error sentinels;
/// this mirrors the convention documented throughout libmarpa's headers.
#[inline]
pub fn is_kernel_failure(rc: c_int) -> bool {
  rc < 0
}
