//! The progress reporter: Earley items across a range of sets, sorted
//! by (rule id, dot position).
use crate::error::{MarpaError, MarpaResult};
use crate::grammar::RuleId;
use crate::kernel::KernelRecognizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressItem {
  pub set_id: i32,
  pub origin_set_id: i32,
  pub rule: RuleId,
  pub dot_position: i32,
}

/// Resolves `(start, end)` relative to the latest Earley set (negative
/// values mean `x += latest + 1`), validates both lie in `[0, latest]`
/// with `start <= end`, and enumerates every item in range. Results are
/// sorted ascending by `(rule id, dot position)`. `start=-1, end=-1`
/// resolves to `(latest, latest)`.
pub fn progress_report(kernel: &KernelRecognizer, start: i32, end: i32) -> MarpaResult<Vec<ProgressItem>> {
  let latest = kernel.latest_earley_set();
  let resolve = |x: i32| if x < 0 { x + latest + 1 } else { x };
  let (start, end) = (resolve(start), resolve(end));

  if start < 0 || end > latest || start > end {
    return Err(MarpaError::contract("progress range out of bounds"));
  }

  let mut items = Vec::new();
  for set in start..=end {
    kernel.progress_report_start(set)?;
    while let Some((rule, position, origin)) = kernel.progress_item()? {
      items.push(ProgressItem {
        set_id: set,
        origin_set_id: origin,
        rule: RuleId::from_raw(rule as u32),
        dot_position: position,
      });
    }
    kernel.progress_report_finish()?;
  }

  items.sort_by_key(|item| (item.rule.get(), item.dot_position));
  Ok(items)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn negative_range_resolves_relative_to_latest() {
    // start=-1, end=-1 with latest=4 resolves to (4, 4).
    let latest = 4;
    let resolve = |x: i32| if x < 0 { x + latest + 1 } else { x };
    assert_eq!((resolve(-1), resolve(-1)), (4, 4));
  }

  #[test]
  fn sorts_by_rule_then_dot_position() {
    let mut items = vec![
      ProgressItem { set_id: 0, origin_set_id: 0, rule: RuleId::from_raw(2), dot_position: 1 },
      ProgressItem { set_id: 0, origin_set_id: 0, rule: RuleId::from_raw(1), dot_position: 2 },
      ProgressItem { set_id: 0, origin_set_id: 0, rule: RuleId::from_raw(1), dot_position: 0 },
    ];
    items.sort_by_key(|item| (item.rule.get(), item.dot_position));
    assert_eq!(items[0].rule, RuleId::from_raw(1));
    assert_eq!(items[0].dot_position, 0);
    assert_eq!(items[1].rule, RuleId::from_raw(1));
    assert_eq!(items[1].dot_position, 2);
    assert_eq!(items[2].rule, RuleId::from_raw(2));
  }
}
