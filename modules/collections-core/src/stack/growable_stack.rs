use tracing::{debug, warn};

use crate::stack::{
  DEFAULT_CAPACITY, GrowableStackConfig, PushOutcome, StackBackend, StackError, TRACE_TARGET, VecStackStorage,
};


/// LIFO stack over a contiguous buffer that doubles when full and halves when only a quarter full.
///
/// Shrinking at one quarter rather than one half keeps alternating push/pop near a boundary from
/// reallocating on every call, so both operations stay amortized O(1).
#[derive(Debug)]
pub struct GrowableStack<T> {
  storage: VecStackStorage<T>,
  resizes: usize,
}

impl<T> GrowableStack<T> {
  /// Creates an empty stack with [`DEFAULT_CAPACITY`](crate::stack::DEFAULT_CAPACITY) slots.
  #[must_use]
  pub fn new() -> Self {
    Self { storage: VecStackStorage::with_capacity(DEFAULT_CAPACITY), resizes: 0 }
  }

  /// Creates an empty stack using the provided configuration.
  ///
  /// # Errors
  ///
  /// Returns `StackError::AllocError` when the initial buffer cannot be allocated.
  pub fn with_config(config: GrowableStackConfig) -> Result<Self, StackError> {
    let capacity = config.initial_capacity();
    match VecStackStorage::try_with_capacity(capacity) {
      | Ok(storage) => Ok(Self { storage, resizes: 0 }),
      | Err(_) => {
        warn!(target: TRACE_TARGET, capacity, "stack buffer allocation failed");
        Err(StackError::AllocError)
      },
    }
  }

  /// Returns how many times the buffer has been reallocated since construction.
  #[must_use]
  pub const fn resize_count(&self) -> usize {
    self.resizes
  }

  fn resize(&mut self, new_capacity: usize) -> Result<(), StackError> {
    let from = self.storage.capacity();
    match self.storage.try_reallocate(new_capacity) {
      | Ok(()) => {
        self.resizes += 1;
        debug!(target: TRACE_TARGET, from, to = new_capacity, len = self.storage.len(), "reallocated stack buffer");
        Ok(())
      },
      | Err(_) => {
        warn!(target: TRACE_TARGET, from, to = new_capacity, "stack buffer reallocation failed");
        Err(StackError::AllocError)
      },
    }
  }

  /// Puts the stack back to `len` elements in a buffer of `capacity` slots.
  fn rollback(&mut self, len: usize, capacity: usize) {
    self.storage.truncate(len);
    if self.storage.capacity() != capacity {
      // a refused reallocation is already logged and keeps a buffer that still holds `len`
      let _ = self.resize(capacity);
    }
  }
}

impl<T> Default for GrowableStack<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> StackBackend<T> for GrowableStack<T> {
  fn push(&mut self, item: T) -> Result<PushOutcome, StackError> {
    let outcome = if self.storage.is_full() {
      let grown = self.storage.capacity().checked_mul(2).ok_or(StackError::AllocError)?.max(1);
      self.resize(grown)?;
      PushOutcome::GrewTo { capacity: grown }
    } else {
      PushOutcome::Pushed
    };
    self.storage.push(item);
    Ok(outcome)
  }

  fn push_all<I>(&mut self, items: I) -> Result<(), StackError>
  where
    I: IntoIterator<Item = T>,
    Self: Sized, {
    let start_len = self.storage.len();
    let start_capacity = self.storage.capacity();
    for item in items {
      if let Err(err) = self.push(item) {
        self.rollback(start_len, start_capacity);
        return Err(err);
      }
    }
    Ok(())
  }

  fn pop(&mut self) -> Result<T, StackError> {
    let item = self.storage.pop().ok_or(StackError::Empty)?;
    let len = self.storage.len();
    let capacity = self.storage.capacity();
    if len > 0 && len <= capacity / 4 {
      // the element is already out; a failed shrink keeps the larger buffer
      let _ = self.resize(capacity / 2);
    }
    Ok(item)
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
