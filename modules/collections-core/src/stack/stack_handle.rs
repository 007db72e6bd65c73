use crate::stack::{FixedStack, GrowableStack, PushOutcome, StackBackend, StackError};

/// Stack whose strategy is chosen at construction time.
///
/// Use [`StackHandle::make_fixed`] or [`StackHandle::make_resizable`] and program against
/// [`StackBackend`].
#[derive(Debug)]
pub enum StackHandle<T> {
  /// Bounded stack that rejects pushes once full.
  Fixed(FixedStack<T>),
  /// Stack that grows and shrinks its buffer on demand.
  Growable(GrowableStack<T>),
}

impl<T> StackHandle<T> {
  /// Creates a fixed-capacity stack.
  ///
  /// # Errors
  ///
  /// Returns `StackError::InvalidCapacity` when `capacity` is zero and `StackError::AllocError`
  /// when the buffer cannot be allocated.
  pub fn make_fixed(capacity: usize) -> Result<Self, StackError> {
    FixedStack::with_capacity(capacity).map(Self::Fixed)
  }

  /// Creates a resizable stack with the default initial capacity.
  #[must_use]
  pub fn make_resizable() -> Self {
    Self::Growable(GrowableStack::new())
  }
}

impl<T> From<FixedStack<T>> for StackHandle<T> {
  fn from(stack: FixedStack<T>) -> Self {
    Self::Fixed(stack)
  }
}

impl<T> From<GrowableStack<T>> for StackHandle<T> {
  fn from(stack: GrowableStack<T>) -> Self {
    Self::Growable(stack)
  }
}

impl<T> StackBackend<T> for StackHandle<T> {
  fn push(&mut self, item: T) -> Result<PushOutcome, StackError> {
    match self {
      | Self::Fixed(stack) => stack.push(item),
      | Self::Growable(stack) => stack.push(item),
    }
  }

  fn push_all<I>(&mut self, items: I) -> Result<(), StackError>
  where
    I: IntoIterator<Item = T>,
    Self: Sized, {
    match self {
      | Self::Fixed(stack) => stack.push_all(items),
      | Self::Growable(stack) => stack.push_all(items),
    }
  }

  fn pop(&mut self) -> Result<T, StackError> {
    match self {
      | Self::Fixed(stack) => stack.pop(),
      | Self::Growable(stack) => stack.pop(),
    }
  }

  fn peek(&self) -> Option<&T> {
    match self {
      | Self::Fixed(stack) => stack.peek(),
      | Self::Growable(stack) => stack.peek(),
    }
  }

  fn len(&self) -> usize {
    match self {
      | Self::Fixed(stack) => stack.len(),
      | Self::Growable(stack) => stack.len(),
    }
  }

  fn capacity(&self) -> usize {
    match self {
      | Self::Fixed(stack) => stack.capacity(),
      | Self::Growable(stack) => stack.capacity(),
    }
  }
}
