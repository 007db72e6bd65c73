use crate::stack::{PushOutcome, StackBackend, StackError, VecStackStorage};


/// Bounds-checked LIFO stack whose buffer is allocated once and never resized.
#[derive(Debug)]
pub struct FixedStack<T> {
  storage: VecStackStorage<T>,
}

impl<T> FixedStack<T> {
  /// Creates an empty stack able to hold exactly `capacity` elements.
  ///
  /// # Errors
  ///
  /// Returns `StackError::InvalidCapacity` when `capacity` is zero and `StackError::AllocError`
  /// when the buffer cannot be allocated.
  pub fn with_capacity(capacity: usize) -> Result<Self, StackError> {
    if capacity == 0 {
      return Err(StackError::InvalidCapacity);
    }
    let storage = VecStackStorage::try_with_capacity(capacity).map_err(|_| StackError::AllocError)?;
    Ok(Self { storage })
  }
}

impl<T> StackBackend<T> for FixedStack<T> {
  fn push(&mut self, item: T) -> Result<PushOutcome, StackError> {
    if self.storage.is_full() {
      return Err(StackError::Full);
    }
    self.storage.push(item);
    Ok(PushOutcome::Pushed)
  }

  fn pop(&mut self) -> Result<T, StackError> {
    self.storage.pop().ok_or(StackError::Empty)
  }

  fn peek(&self) -> Option<&T> {
    self.storage.peek()
  }

  fn len(&self) -> usize {
    self.storage.len()
  }

  fn capacity(&self) -> usize {
    self.storage.capacity()
  }
}
