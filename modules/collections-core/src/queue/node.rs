use alloc::boxed::Box;

/// Cell of a singly linked chain.
///
/// Each node exclusively owns its successor through `next`.
pub(crate) struct Node<T> {
  value: T,
  next:  Option<Box<Node<T>>>,
}

impl<T> Node<T> {
  /// Creates a detached node.
  pub(crate) const fn new(value: T) -> Self {
    Self { value, next: None }
  }

  pub(crate) const fn value(&self) -> &T {
    &self.value
  }

  pub(crate) fn next(&self) -> Option<&Node<T>> {
    self.next.as_deref()
  }

  /// Returns the empty slot a successor is linked into.
  pub(crate) fn next_slot_mut(&mut self) -> &mut Option<Box<Node<T>>> {
    debug_assert!(self.next.is_none());
    &mut self.next
  }

  /// Detaches the successor, handing its ownership to the caller.
  pub(crate) fn take_next(&mut self) -> Option<Box<Node<T>>> {
    self.next.take()
  }

  pub(crate) fn into_value(self) -> T {
    debug_assert!(self.next.is_none());
    self.value
  }
}
