use crate::queue::QueueError;

/// Contract shared by FIFO queue implementations.
pub trait QueueBackend<T> {
  /// Appends an element at the back of the queue.
  fn enqueue(&mut self, value: T);

  /// Removes and returns the element at the front of the queue.
  ///
  /// # Errors
  ///
  /// Returns `QueueError::Empty` when the queue holds no elements.
  fn dequeue(&mut self) -> Result<T, QueueError>;

  /// Returns a reference to the front element without removing it.
  fn peek(&self) -> Option<&T>;

  /// Returns the number of stored elements.
  fn len(&self) -> usize;

  /// Indicates whether the queue is empty.
  fn is_empty(&self) -> bool {
    self.len() == 0
  }
}
