//! The contract shared by every indexed priority queue backend
//!
//! [`IndexedQueue`] is the single capability set implemented by
//! [`HeapBackend`](crate::lazy_heap::HeapBackend),
//! [`OrderedSetBackend`](crate::ordered_set::OrderedSetBackend) and
//! [`ScanBackend`](crate::scan::ScanBackend). The three implementations
//! trade complexity bounds against each other but must be observably
//! identical: same top entry, same tie-breaks, same pop sequence.
//!
//! Unlike a plain heap, an indexed queue knows which entry belongs to which
//! key, so it can overwrite, erase and look up entries by key.

use thiserror::Error;

/// Error type for queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum QueueError {
    /// `top` was called on an empty queue
    #[error("queue is empty")]
    EmptyContainer,
    /// `peek` was called with a key that is not in the queue
    #[error("key not found in queue")]
    KeyNotFound,
}

/// An indexed max-priority queue of unique keys
///
/// The top entry is the maximum under the pair order of
/// [`order::pair_cmp`](crate::order::pair_cmp): greatest value under the
/// backend's ordering policy, ties broken by the greatest key.
///
/// # Example
///
/// ```rust
/// use rust_indexed_heaps::{IndexedQueue, QueueError};
/// use rust_indexed_heaps::lazy_heap::HeapBackend;
///
/// let mut queue: HeapBackend<&str, i32> =
///     HeapBackend::from_pairs([("a", 1), ("b", 3), ("c", 2)]);
/// queue.insert_or_update("a", 5);
/// queue.erase(&"c");
///
/// assert_eq!(queue.pop(), Some(("a", 5)));
/// assert_eq!(queue.pop(), Some(("b", 3)));
/// assert!(queue.is_empty());
/// assert_eq!(queue.top(), Err(QueueError::EmptyContainer));
/// ```
pub trait IndexedQueue<K, V>: Sized {
    /// Creates a new empty queue
    fn new() -> Self;

    /// Creates a queue holding one entry per distinct key in `pairs`
    ///
    /// Duplicate keys resolve last-wins, exactly as if every pair had been
    /// passed to [`insert_or_update`](IndexedQueue::insert_or_update) in
    /// order. Backends override this when they can load faster.
    fn from_pairs<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        let mut queue = Self::new();
        for (key, value) in pairs {
            queue.insert_or_update(key, value);
        }
        queue
    }

    /// Returns true if the queue holds no entries
    fn is_empty(&self) -> bool;

    /// Returns the number of live entries
    fn len(&self) -> usize;

    /// Returns the current maximum entry
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyContainer`] if the queue is empty.
    fn top(&self) -> Result<(&K, &V), QueueError>;

    /// Removes the current maximum entry and returns it
    ///
    /// Popping an empty queue is a no-op and returns `None`.
    fn pop(&mut self) -> Option<(K, V)>;

    /// Inserts `key` with `value`, or overwrites the value of an existing key
    ///
    /// Returns the previous value if the key was present.
    fn insert_or_update(&mut self, key: K, value: V) -> Option<V>;

    /// Removes `key` from the queue, returning its value
    ///
    /// Erasing an absent key is a no-op and returns `None`.
    fn erase(&mut self, key: &K) -> Option<V>;

    /// Returns true if `key` is in the queue
    fn contains(&self, key: &K) -> bool;

    /// Returns the current value of `key`
    ///
    /// # Errors
    /// Returns [`QueueError::KeyNotFound`] if the key is absent.
    fn peek(&self, key: &K) -> Result<&V, QueueError>;
}
