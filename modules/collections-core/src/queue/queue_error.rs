use core::fmt;

/// Errors that occur during queue operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueueError {
  /// The queue has no elements to consume.
  Empty,
}

impl fmt::Display for QueueError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | QueueError::Empty => write!(f, "queue underflow: no element to dequeue"),
    }
  }
}

impl core::error::Error for QueueError {}
