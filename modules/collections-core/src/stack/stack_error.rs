use core::fmt;

/// Errors that may arise while operating on a stack backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackError {
  /// The stack contains no elements.
  Empty,
  /// The stack cannot accept new elements.
  Full,
  /// Allocator-related failure occurred while resizing the storage.
  AllocError,
  /// A stack was configured with a capacity of zero.
  InvalidCapacity,
}

impl fmt::Display for StackError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | StackError::Empty => write!(f, "stack underflow: no element to pop"),
      | StackError::Full => write!(f, "stack is full"),
      | StackError::AllocError => write!(f, "failed to allocate stack storage"),
      | StackError::InvalidCapacity => write!(f, "stack capacity must be greater than zero"),
    }
  }
}

impl core::error::Error for StackError {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn stack_error_is_copy() {
    let err1 = StackError::Full;
    let err2 = err1;
    assert_eq!(err1, err2);
  }

  #[test]
  fn stack_error_partial_eq() {
    assert_eq!(StackError::Empty, StackError::Empty);
    assert_ne!(StackError::Empty, StackError::Full);
    assert_ne!(StackError::AllocError, StackError::InvalidCapacity);
  }

  #[test]
  fn stack_error_debug() {
    let debug_str = format!("{:?}", StackError::Empty);
    assert!(debug_str.contains("Empty"));
  }

  #[test]
  fn stack_error_display_empty() {
    assert_eq!(format!("{}", StackError::Empty), "stack underflow: no element to pop");
  }

  #[test]
  fn stack_error_display_full() {
    assert_eq!(format!("{}", StackError::Full), "stack is full");
  }

  #[test]
  fn stack_error_display_alloc_error() {
    assert_eq!(format!("{}", StackError::AllocError), "failed to allocate stack storage");
  }

  #[test]
  fn stack_error_display_invalid_capacity() {
    assert_eq!(format!("{}", StackError::InvalidCapacity), "stack capacity must be greater than zero");
  }

  #[test]
  fn stack_error_is_core_error() {
    let err: &dyn core::error::Error = &StackError::Full;
    assert!(err.source().is_none());
  }
}
