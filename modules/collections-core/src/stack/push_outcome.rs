/// Outcome produced by a successful stack push.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PushOutcome {
  /// The element was stored without touching the buffer.
  Pushed,
  /// The buffer was reallocated before the element was stored.
  GrewTo {
    /// New capacity after the storage has grown.
    capacity: usize,
  },
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn push_outcome_pushed_variant() {
    let outcome = PushOutcome::Pushed;
    assert_ne!(outcome, PushOutcome::GrewTo { capacity: 0 });
  }

  #[test]
  fn push_outcome_grew_to_variant() {
    let outcome = PushOutcome::GrewTo { capacity: 20 };
    let PushOutcome::GrewTo { capacity } = outcome else {
      panic!("Expected GrewTo variant");
    };
    assert_eq!(capacity, 20);
  }

  #[test]
  fn push_outcome_debug_format() {
    let debug_str = format!("{:?}", PushOutcome::GrewTo { capacity: 40 });
    assert!(debug_str.contains("GrewTo"));
    assert!(debug_str.contains("40"));
  }
}
