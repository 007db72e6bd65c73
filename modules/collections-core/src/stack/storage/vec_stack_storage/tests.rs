use super::*;

#[test]
fn with_capacity_creates_empty_storage() {
  let storage: VecStackStorage<i32> = VecStackStorage::with_capacity(10);
  assert_eq!(storage.len(), 0);
  assert_eq!(storage.capacity(), 10);
  assert!(storage.is_empty());
  assert!(!storage.is_full());
}

#[test]
fn try_with_capacity_reports_capacity_overflow() {
  let result: Result<VecStackStorage<u64>, _> = VecStackStorage::try_with_capacity(usize::MAX / 4);
  assert!(result.is_err());

  let storage: VecStackStorage<u64> = VecStackStorage::try_with_capacity(4).unwrap();
  assert_eq!(storage.capacity(), 4);
  assert!(storage.is_empty());
}

#[test]
fn truncate_keeps_limit() {
  let mut storage = VecStackStorage::with_capacity(4);
  storage.push(1);
  storage.push(2);
  storage.push(3);

  storage.truncate(1);
  assert_eq!(storage.len(), 1);
  assert_eq!(storage.capacity(), 4);
  assert_eq!(storage.peek(), Some(&1));
}

#[test]
fn push_and_pop_operations() {
  let mut storage = VecStackStorage::with_capacity(3);

  storage.push(1);
  storage.push(2);
  storage.push(3);

  assert_eq!(storage.len(), 3);
  assert!(storage.is_full());

  assert_eq!(storage.pop(), Some(3));
  assert_eq!(storage.pop(), Some(2));
  assert_eq!(storage.pop(), Some(1));
  assert_eq!(storage.pop(), None);
  assert!(storage.is_empty());
}

#[test]
fn peek_returns_last_element() {
  let mut storage = VecStackStorage::with_capacity(5);

  assert_eq!(storage.peek(), None);

  storage.push(10);
  assert_eq!(storage.peek(), Some(&10));

  storage.push(20);
  assert_eq!(storage.peek(), Some(&20));

  storage.pop();
  assert_eq!(storage.peek(), Some(&10));
}

#[test]
fn try_reallocate_grows_and_preserves_order() {
  let mut storage = VecStackStorage::with_capacity(2);
  storage.push(1);
  storage.push(2);
  assert!(storage.is_full());

  storage.try_reallocate(4).unwrap();
  assert_eq!(storage.capacity(), 4);
  assert!(!storage.is_full());

  storage.push(3);
  assert_eq!(storage.pop(), Some(3));
  assert_eq!(storage.pop(), Some(2));
  assert_eq!(storage.pop(), Some(1));
}

#[test]
fn try_reallocate_shrinks_limit() {
  let mut storage = VecStackStorage::with_capacity(8);
  storage.push("a");
  storage.push("b");

  storage.try_reallocate(4).unwrap();
  assert_eq!(storage.capacity(), 4);
  assert_eq!(storage.len(), 2);
  assert_eq!(storage.peek(), Some(&"b"));
}

#[test]
fn try_reallocate_reports_capacity_overflow() {
  let mut storage: VecStackStorage<u64> = VecStackStorage::with_capacity(1);
  storage.push(7);

  assert!(storage.try_reallocate(usize::MAX).is_err());
  assert_eq!(storage.capacity(), 1);
  assert_eq!(storage.pop(), Some(7));
}
