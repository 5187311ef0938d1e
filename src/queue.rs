//! Backend-agnostic facade
//!
//! [`PriorityQueue`] owns exactly one backend for its whole lifetime and
//! forwards every call to it unchanged, so callers can name a single type
//! and pick the backend with a type parameter.
//!
//! # Example
//!
//! ```rust
//! use rust_indexed_heaps::{PriorityQueue, QueueError};
//! use rust_indexed_heaps::ordered_set::OrderedSetBackend;
//!
//! // Defaults to the lazy heap backend
//! let mut queue: PriorityQueue<&str, i32> = [("a", 1), ("b", 3)].into_iter().collect();
//! queue.insert_or_update("c", 2);
//! assert_eq!(queue.top(), Ok((&"b", &3)));
//!
//! // Same API over a different backend
//! let mut set: PriorityQueue<&str, i32, OrderedSetBackend<&str, i32>> = PriorityQueue::new();
//! set.insert_or_update("x", 7);
//! assert_eq!(set.peek(&"y"), Err(QueueError::KeyNotFound));
//! ```

use crate::lazy_heap::HeapBackend;
use crate::traits::{IndexedQueue, QueueError};
use std::fmt;
use std::marker::PhantomData;

/// An indexed priority queue over a chosen backend
///
/// # Type Parameters
/// - `K`: The key type
/// - `V`: The value type
/// - `B`: The backend (defaults to [`HeapBackend`])
pub struct PriorityQueue<K, V, B = HeapBackend<K, V>>
where
    B: IndexedQueue<K, V>,
{
    backend: B,
    _phantom: PhantomData<(K, V)>,
}

impl<K, V, B: IndexedQueue<K, V>> PriorityQueue<K, V, B> {
    /// Creates a new empty queue
    pub fn new() -> Self {
        Self::with_backend(B::new())
    }

    /// Wraps an existing backend
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            _phantom: PhantomData,
        }
    }

    /// Creates a queue from `(key, value)` pairs, later duplicates winning
    pub fn from_pairs<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        Self::with_backend(B::from_pairs(pairs))
    }

    /// Returns the owned backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Returns the owned backend mutably
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Consumes the queue, returning its backend
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Returns true if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.backend.is_empty()
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.backend.len()
    }

    /// Returns the current maximum entry
    pub fn top(&self) -> Result<(&K, &V), QueueError> {
        self.backend.top()
    }

    /// Removes and returns the current maximum entry, if any
    pub fn pop(&mut self) -> Option<(K, V)> {
        self.backend.pop()
    }

    /// Inserts a new key or overwrites an existing one's value
    pub fn insert_or_update(&mut self, key: K, value: V) -> Option<V> {
        self.backend.insert_or_update(key, value)
    }

    /// Removes a key if present
    pub fn erase(&mut self, key: &K) -> Option<V> {
        self.backend.erase(key)
    }

    /// Returns true if the key is present
    pub fn contains(&self, key: &K) -> bool {
        self.backend.contains(key)
    }

    /// Returns the current value of a key
    pub fn peek(&self, key: &K) -> Result<&V, QueueError> {
        self.backend.peek(key)
    }
}

impl<K, V, B: IndexedQueue<K, V>> IndexedQueue<K, V> for PriorityQueue<K, V, B> {
    fn new() -> Self {
        PriorityQueue::new()
    }

    fn from_pairs<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        PriorityQueue::from_pairs(pairs)
    }

    fn is_empty(&self) -> bool {
        PriorityQueue::is_empty(self)
    }

    fn len(&self) -> usize {
        PriorityQueue::len(self)
    }

    fn top(&self) -> Result<(&K, &V), QueueError> {
        PriorityQueue::top(self)
    }

    fn pop(&mut self) -> Option<(K, V)> {
        PriorityQueue::pop(self)
    }

    fn insert_or_update(&mut self, key: K, value: V) -> Option<V> {
        PriorityQueue::insert_or_update(self, key, value)
    }

    fn erase(&mut self, key: &K) -> Option<V> {
        PriorityQueue::erase(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        PriorityQueue::contains(self, key)
    }

    fn peek(&self, key: &K) -> Result<&V, QueueError> {
        PriorityQueue::peek(self, key)
    }
}

impl<K, V, B: IndexedQueue<K, V>> Default for PriorityQueue<K, V, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, B: IndexedQueue<K, V>> FromIterator<(K, V)> for PriorityQueue<K, V, B> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl<K, V, B: IndexedQueue<K, V>> Extend<(K, V)> for PriorityQueue<K, V, B> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.backend.insert_or_update(key, value);
        }
    }
}

impl<K, V, B: IndexedQueue<K, V> + Clone> Clone for PriorityQueue<K, V, B> {
    fn clone(&self) -> Self {
        Self::with_backend(self.backend.clone())
    }
}

impl<K, V, B: IndexedQueue<K, V> + fmt::Debug> fmt::Debug for PriorityQueue<K, V, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("backend", &self.backend)
            .finish()
    }
}
