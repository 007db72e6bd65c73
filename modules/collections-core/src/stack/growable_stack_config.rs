use crate::stack::{DEFAULT_CAPACITY, StackError};

/// Configuration object passed into [`GrowableStack::with_config`](crate::stack::GrowableStack::with_config).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowableStackConfig {
  initial_capacity: usize,
}

impl GrowableStackConfig {
  /// Creates a configuration with an explicit initial capacity.
  ///
  /// # Errors
  ///
  /// Returns `StackError::InvalidCapacity` when `initial_capacity` is zero, because doubling a
  /// zero-sized buffer would never make room.
  pub const fn new(initial_capacity: usize) -> Result<Self, StackError> {
    if initial_capacity == 0 {
      return Err(StackError::InvalidCapacity);
    }
    Ok(Self { initial_capacity })
  }

  /// Returns the configured initial capacity.
  #[must_use]
  pub const fn initial_capacity(&self) -> usize {
    self.initial_capacity
  }
}

impl Default for GrowableStackConfig {
  fn default() -> Self {
    Self { initial_capacity: DEFAULT_CAPACITY }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_uses_default_capacity() {
    let config = GrowableStackConfig::default();
    assert_eq!(config.initial_capacity(), DEFAULT_CAPACITY);
    assert_eq!(config.initial_capacity(), 10);
  }

  #[test]
  fn new_accepts_positive_capacity() {
    let config = GrowableStackConfig::new(3).unwrap();
    assert_eq!(config.initial_capacity(), 3);
  }

  #[test]
  fn new_rejects_zero_capacity() {
    assert_eq!(GrowableStackConfig::new(0), Err(StackError::InvalidCapacity));
  }
}
