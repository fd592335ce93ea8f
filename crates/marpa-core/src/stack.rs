//! The evaluator's typed semantic stack.
//!
//! The C original (`genericStack.c`) stores fixed-size byte records with
//! user copy/free callbacks because C has no generics. In idiomatic
//! Rust the element-size/copy/free contract collapses onto a
//! `Vec<Option<T>>` over a statically-known `T`. This crate takes the
//! static-type route: `T` plays the role the C element-size and
//! copy/free callbacks played, via `Clone` and `Drop`.
//!
//! The growth/shrink *policy* -- double on overflow, halve when usage
//! drops to <= 50% and allocation >= 8 -- is preserved exactly as
//! `genericStack.c` implements it; this is an observable property
//! (`size()` after push/pop).

#[derive(Debug)]
pub struct TypedStack<T> {
  slots: Vec<Option<T>>,
  grow_on_get: bool,
  grow_on_set: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StackOptions {
  /// Extend the stack with `None` slots on out-of-bounds `get` instead of
  /// treating it as a contract violation.
  pub grow_on_get: bool,
  /// Same, for `set`.
  pub grow_on_set: bool,
}

impl<T> TypedStack<T> {
  pub fn new(options: StackOptions) -> Self {
    Self { slots: Vec::new(), grow_on_get: options.grow_on_get, grow_on_set: options.grow_on_set }
  }

  pub fn len(&self) -> usize {
    self.slots.len()
  }

  pub fn is_empty(&self) -> bool {
    self.slots.is_empty()
  }

  /// Appends `elem` (or a null slot, if `None`). Growth is implicit via
  /// `Vec::push`'s own doubling strategy, matching the C original's
  /// "grows allocation by doubling when full".
  pub fn push(&mut self, elem: Option<T>) {
    self.slots.push(elem);
  }

  /// Removes and returns the top slot. `None` (empty stack) is the
  /// contract-violation case the C original calls "fails on empty"; this
  /// crate surfaces that as `Option::None` rather than panicking, so
  /// callers decide how to turn it into a `MarpaError::ContractViolation`.
  pub fn pop(&mut self) -> Option<Option<T>> {
    let popped = self.slots.pop();
    self.maybe_shrink();
    popped
  }

  /// Reads slot `i`. If `i` is beyond the current size and `grow_on_get`
  /// is set, the stack is extended with null slots to cover it first.
  pub fn get(&mut self, i: usize) -> Option<&Option<T>> {
    if i >= self.slots.len() {
      if self.grow_on_get {
        self.extend_to(i + 1);
      } else {
        return None;
      }
    }
    self.slots.get(i)
  }

  /// Writes slot `i`, freeing any existing element there first (Rust
  /// does this for us via `Option`'s `Drop`). Same growth policy as
  /// `get`, gated on `grow_on_set`.
  pub fn set(&mut self, i: usize, elem: Option<T>) -> Result<(), ()> {
    if i >= self.slots.len() {
      if self.grow_on_set {
        self.extend_to(i + 1);
      } else {
        return Err(());
      }
    }
    self.slots[i] = elem;
    Ok(())
  }

  fn extend_to(&mut self, new_len: usize) {
    while self.slots.len() < new_len {
      self.slots.push(None);
    }
  }

  /// `genericStack.c`'s shrink-on-pop rule: halve the backing allocation
  /// when usage drops to <= 50% of capacity *and* capacity is >= 8.
  /// `Vec` has no public "shrink to exactly half" primitive, so this
  /// approximates it with `shrink_to`; a failed shrink (an allocator
  /// refusing to reallocate smaller) is silently ignored, matching the
  /// C original's "shrink failure is silent" behavior.
  fn maybe_shrink(&mut self) {
    let cap = self.slots.capacity();
    if cap >= 8 && self.slots.len() <= cap / 2 {
      self.slots.shrink_to(cap / 2);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn push_pop_track_size() {
    let mut stack: TypedStack<i32> = TypedStack::new(StackOptions::default());
    assert_eq!(stack.len(), 0);
    stack.push(Some(1));
    stack.push(Some(2));
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.pop(), Some(Some(2)));
    assert_eq!(stack.len(), 1);
  }

  #[test]
  fn set_then_get_round_trips() {
    let mut stack: TypedStack<String> = TypedStack::new(StackOptions { grow_on_get: true, grow_on_set: true });
    stack.set(3, Some("hello".to_string())).unwrap();
    assert_eq!(stack.len(), 4);
    assert_eq!(stack.get(3), Some(&Some("hello".to_string())));
    assert_eq!(stack.get(0), Some(&None));
  }

  #[test]
  fn set_without_grow_flag_rejects_out_of_bounds() {
    let mut stack: TypedStack<i32> = TypedStack::new(StackOptions::default());
    assert!(stack.set(5, Some(1)).is_err());
  }

  #[test]
  fn set_overwrites_and_drops_previous_value() {
    let mut stack: TypedStack<i32> = TypedStack::new(StackOptions::default());
    stack.push(Some(1));
    stack.set(0, Some(2)).unwrap();
    assert_eq!(stack.get(0), Some(&Some(2)));
  }

  #[test]
  fn pop_on_empty_returns_none() {
    let mut stack: TypedStack<i32> = TypedStack::new(StackOptions::default());
    assert_eq!(stack.pop(), None);
  }
}
