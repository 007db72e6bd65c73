use alloc::boxed::Box;
use core::{fmt, ptr::NonNull};

use super::node::Node;
use crate::queue::{QueueBackend, QueueError};


/// FIFO queue over a singly linked chain of nodes.
///
/// The queue owns the head node, every node owns its successor, and `tail` is a non-owning
/// shortcut to the last node so that both [`enqueue`](QueueBackend::enqueue) and
/// [`dequeue`](QueueBackend::dequeue) run in O(1).
///
/// Invariants:
/// - `len == 0` exactly when `head` and `tail` are both `None`;
/// - otherwise `tail` is reached from `head` through `len - 1` links and has no successor.
pub struct LinkedQueue<T> {
  head: Option<Box<Node<T>>>,
  tail: Option<NonNull<Node<T>>>,
  len:  usize,
}

// SAFETY: `tail` only aliases a node owned through `head`, and it is followed only through
// `&mut self`.
unsafe impl<T: Send> Send for LinkedQueue<T> {}
// SAFETY: `&LinkedQueue<T>` never follows `tail` and only exposes `&T`.
unsafe impl<T: Sync> Sync for LinkedQueue<T> {}

impl<T> LinkedQueue<T> {
  /// Creates an empty queue.
  #[must_use]
  pub const fn new() -> Self {
    Self { head: None, tail: None, len: 0 }
  }

  /// Drops every stored element, front to back.
  pub fn clear(&mut self) {
    while self.dequeue().is_ok() {}
  }

  /// Returns the empty link the next node is stored into.
  fn back_slot(&mut self) -> &mut Option<Box<Node<T>>> {
    match self.tail {
      // SAFETY: with more than one node the tail lives inside its predecessor's box, which has not
      // moved since `tail` was taken, and `&mut self` rules out any other reference into the chain.
      | Some(mut tail) if self.len > 1 => unsafe { tail.as_mut() }.next_slot_mut(),
      | _ => match self.head {
        | Some(ref mut head) => head.next_slot_mut(),
        | None => &mut self.head,
      },
    }
  }

  #[cfg(test)]
  pub(crate) fn assert_invariants(&self) {
    if self.len == 0 {
      assert!(self.head.is_none(), "empty queue must not keep a head");
      assert!(self.tail.is_none(), "empty queue must not keep a tail");
      return;
    }

    let mut cursor = self.head.as_deref().expect("non-empty queue must have a head");
    for _ in 1..self.len {
      cursor = cursor.next().expect("chain shorter than len");
    }
    assert_eq!(Some(NonNull::from(cursor)), self.tail, "tail must be the len-th node");
    assert!(cursor.next().is_none(), "tail must not have a successor");
  }
}

impl<T> QueueBackend<T> for LinkedQueue<T> {
  fn enqueue(&mut self, value: T) {
    let node = self.back_slot().insert(Box::new(Node::new(value)));
    self.tail = Some(NonNull::from(&mut **node));
    self.len += 1;
  }

  fn dequeue(&mut self) -> Result<T, QueueError> {
    let mut head = self.head.take().ok_or(QueueError::Empty)?;
    self.head = head.take_next();
    self.len -= 1;
    match self.len {
      | 0 => self.tail = None,
      // the last node just moved into `head`
      | 1 => self.tail = self.head.as_deref_mut().map(NonNull::from),
      | _ => {},
    }
    Ok(head.into_value())
  }

  fn peek(&self) -> Option<&T> {
    self.head.as_deref().map(Node::value)
  }

  fn len(&self) -> usize {
    self.len
  }
}

impl<T> Default for LinkedQueue<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Drop for LinkedQueue<T> {
  fn drop(&mut self) {
    self.clear();
  }
}

impl<T: fmt::Debug> fmt::Debug for LinkedQueue<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("LinkedQueue").field("len", &self.len).field("front", &self.peek()).finish_non_exhaustive()
  }
}
