use crate::stack::{PushOutcome, StackError};

/// Contract shared by every LIFO strategy.
///
/// Client code can stay generic over this trait (or hold a
/// [`StackHandle`](crate::stack::StackHandle)) and never name the concrete strategy.
pub trait StackBackend<T> {
  /// Pushes an element onto the stack.
  ///
  /// # Errors
  ///
  /// Returns a `StackError` when the backend cannot store the element. The stack is left unchanged
  /// in that case.
  fn push(&mut self, item: T) -> Result<PushOutcome, StackError>;

  /// Pushes every element of `items` in iteration order.
  ///
  /// Behaves like repeated [`push`](Self::push) calls, so growth happens incrementally. If any
  /// push fails, the elements stored by this call are removed again before the error is returned.
  ///
  /// The default implementation rolls back through [`pop`](Self::pop), which restores the
  /// contents. Strategies whose capacity moves on `pop` override it so the capacity seen before
  /// the call is restored as well.
  ///
  /// # Errors
  ///
  /// Returns the first `StackError` reported by `push`.
  fn push_all<I>(&mut self, items: I) -> Result<(), StackError>
  where
    I: IntoIterator<Item = T>,
    Self: Sized, {
    let start = self.len();
    for item in items {
      if let Err(err) = self.push(item) {
        while self.len() > start {
          let _ = self.pop();
        }
        return Err(err);
      }
    }
    Ok(())
  }

  /// Pops the most recently pushed element.
  ///
  /// # Errors
  ///
  /// Returns `StackError::Empty` when there is nothing to pop.
  fn pop(&mut self) -> Result<T, StackError>;

  /// Returns a reference to the element at the top of the stack without removing it.
  fn peek(&self) -> Option<&T>;

  /// Returns the number of elements currently stored.
  fn len(&self) -> usize;

  /// Returns the number of elements the current buffer can hold.
  fn capacity(&self) -> usize;

  /// Indicates whether the stack is empty.
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Indicates whether the current buffer is full.
  fn is_full(&self) -> bool {
    self.len() == self.capacity()
  }
}
