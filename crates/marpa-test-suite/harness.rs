//! Small shared helpers for the scenario tests in this crate. Kept
//! deliberately thin -- each scenario builds its own grammar, since the
//! point of these tests is exercising the whole build/precompute/
//! recognize/evaluate pipeline, not sharing fixtures across them.
#![cfg(test)]

/// Unwraps a `MarpaResult`, panicking with the engine's own `Display`
/// message on failure instead of the default `Debug` dump.
pub fn unwrap<T>(result: marpa_core::MarpaResult<T>) -> T {
  match result {
    Ok(value) => value,
    Err(err) => panic!("marpa_core operation failed: {err}"),
  }
}
