//! Grow-by-doubling owned buffer.
//!
//! Backs the recognizer's expected-terminals scratch space and the
//! progress reporter's item accumulator. `manageBuf.c`'s C contract
//! is: grow to at least `n` elements, jumping to an initial 100 then
//! doubling, detecting overflow on doubling, zero-initializing the new
//! tail. In Rust, `Vec<T>`'s own growth already gives us doubling; this
//! type exists to pin down that specific policy (the initial jump to
//! 100, and overflow detection as an explicit error rather than an
//! abort) rather than relying on `Vec`'s unspecified growth factor.
use crate::error::{MarpaError, MarpaResult};

#[derive(Debug, Default)]
pub struct GrowBuffer<T: Default + Clone> {
  data: Vec<T>,
  used: usize,
}

impl<T: Default + Clone> GrowBuffer<T> {
  pub fn new() -> Self {
    Self { data: Vec::new(), used: 0 }
  }

  pub fn used(&self) -> usize {
    self.used
  }

  pub fn capacity(&self) -> usize {
    self.data.len()
  }

  pub fn as_slice(&self) -> &[T] {
    &self.data[..self.used]
  }

  pub fn as_mut_slice(&mut self) -> &mut [T] {
    &mut self.data[..self.used]
  }

  /// Ensures capacity >= `n`, growing via an initial jump to 100
  /// elements then doubling. New tail slots are default-initialized
  /// ("zero-initialized" in the C original).
  pub fn grow_to_at_least(&mut self, n: usize) -> MarpaResult<()> {
    if self.data.len() >= n {
      return Ok(());
    }
    let mut new_cap = if self.data.is_empty() { 100 } else { self.data.len() };
    while new_cap < n {
      let previous = new_cap;
      new_cap = new_cap.checked_mul(2).ok_or_else(|| MarpaError::contract("buffer growth overflowed"))?;
      if new_cap < previous {
        return Err(MarpaError::contract("buffer growth overflowed"));
      }
    }
    self.data.resize(new_cap, T::default());
    Ok(())
  }

  /// Sets the logical used-length, growing backing storage first if
  /// needed.
  pub fn set_used(&mut self, n: usize) -> MarpaResult<()> {
    self.grow_to_at_least(n)?;
    self.used = n;
    Ok(())
  }

  /// Releases all slots and resets the used count to zero, mirroring
  /// `free_all`'s contract in the C original.
  pub fn free_all(&mut self) {
    self.data.clear();
    self.used = 0;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn grows_to_at_least_n_with_initial_jump_to_100() {
    let mut buf: GrowBuffer<i32> = GrowBuffer::new();
    buf.grow_to_at_least(1).unwrap();
    assert_eq!(buf.capacity(), 100);
  }

  #[test]
  fn grows_by_doubling_past_the_initial_jump() {
    let mut buf: GrowBuffer<i32> = GrowBuffer::new();
    buf.grow_to_at_least(150).unwrap();
    assert_eq!(buf.capacity(), 200);
  }

  #[test]
  fn does_not_shrink_when_already_large_enough() {
    let mut buf: GrowBuffer<i32> = GrowBuffer::new();
    buf.grow_to_at_least(500).unwrap();
    let cap_before = buf.capacity();
    buf.grow_to_at_least(10).unwrap();
    assert_eq!(buf.capacity(), cap_before);
  }

  #[test]
  fn free_all_resets_used_and_clears_storage() {
    let mut buf: GrowBuffer<i32> = GrowBuffer::new();
    buf.set_used(50).unwrap();
    buf.free_all();
    assert_eq!(buf.used(), 0);
    assert_eq!(buf.capacity(), 0);
  }
}
