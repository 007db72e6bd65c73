use alloc::{collections::TryReserveError, vec::Vec};

#[cfg(test)]
mod tests;

/// Contiguous stack storage backed by `alloc::vec::Vec` with an explicit capacity limit.
///
/// The limit is the logical capacity seen by stack backends. It only changes through
/// [`VecStackStorage::try_reallocate`], which swaps in a freshly allocated buffer of exactly the
/// requested size.
#[derive(Debug)]
pub struct VecStackStorage<T> {
  data:  Vec<T>,
  limit: usize,
}

impl<T> VecStackStorage<T> {
  /// Creates a storage buffer with the provided capacity limit.
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    Self { data: Vec::with_capacity(capacity), limit: capacity }
  }

  /// Creates a storage buffer with the provided capacity limit, reporting allocation failure.
  ///
  /// # Errors
  ///
  /// Returns the allocator's `TryReserveError` when the buffer cannot be allocated.
  pub fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
    let mut data = Vec::new();
    data.try_reserve_exact(capacity)?;
    Ok(Self { data, limit: capacity })
  }

  /// Returns the number of initialized elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.data.len()
  }

  /// Returns whether the storage currently holds no elements.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.data.is_empty()
  }

  /// Returns the configured capacity limit.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.limit
  }

  /// Indicates whether the storage reached its capacity limit.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.data.len() >= self.limit
  }

  /// Pushes an element onto the end of the storage without additional checks.
  pub fn push(&mut self, value: T) {
    debug_assert!(self.len() < self.limit);
    self.data.push(value);
  }

  /// Pops the last element from storage.
  pub fn pop(&mut self) -> Option<T> {
    self.data.pop()
  }

  /// Drops every element above `len`, keeping the buffer and its limit.
  pub fn truncate(&mut self, len: usize) {
    self.data.truncate(len);
  }

  /// Returns a reference to the last element if it exists.
  #[must_use]
  pub fn peek(&self) -> Option<&T> {
    self.data.last()
  }

  /// Moves every element into a new buffer of exactly `new_capacity` slots and releases the old
  /// one.
  ///
  /// On failure the current buffer is left untouched.
  ///
  /// # Errors
  ///
  /// Returns the allocator's `TryReserveError` when the new buffer cannot be allocated.
  pub fn try_reallocate(&mut self, new_capacity: usize) -> Result<(), TryReserveError> {
    debug_assert!(new_capacity >= self.len());
    let mut replacement = Vec::new();
    replacement.try_reserve_exact(new_capacity)?;
    replacement.append(&mut self.data);
    // the drained buffer is released here
    self.data = replacement;
    self.limit = new_capacity;
    Ok(())
  }
}
