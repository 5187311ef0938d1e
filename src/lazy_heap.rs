//! Lazy-deletion binary heap backend
//!
//! A max-heap of `(key, value)` entries paired with an index map holding
//! each live key's current value. The map is authoritative; the heap is a
//! hint that may lag behind it.
//!
//! Updates never search the heap. [`insert_or_update`](IndexedQueue::insert_or_update)
//! pushes a fresh entry and leaves the superseded one in place, and
//! [`erase`](IndexedQueue::erase) only touches the map. Entries whose key is
//! gone, or whose value no longer matches the map, are *stale*. After every
//! mutation the heap drops stale entries from its root until the root is
//! current again, so [`top`](IndexedQueue::top) only ever sees live data.
//!
//! # Time Complexity
//!
//! | Operation          | Complexity         |
//! |--------------------|--------------------|
//! | `top`              | O(1)               |
//! | `pop`              | O(log n) amortized |
//! | `insert_or_update` | O(log n) amortized |
//! | `erase`            | O(1) amortized     |
//! | `contains`/`peek`  | O(1) expected      |
//! | `from_pairs`       | O(n)               |
//!
//! Discarding a stale root is paid for by the push that created it.
//!
//! # Memory
//!
//! Stale entries below the root are only reclaimed when they surface, so
//! heap size is bounded by the total number of mutations, not by
//! [`len`](IndexedQueue::len). Repeatedly updating keys that never reach
//! the top grows the heap; call [`HeapBackend::compact`] to rebuild it
//! from the live entries.
//!
//! # Example
//!
//! ```rust
//! use rust_indexed_heaps::IndexedQueue;
//! use rust_indexed_heaps::lazy_heap::HeapBackend;
//!
//! let mut queue: HeapBackend<&str, u32> = HeapBackend::new();
//! queue.insert_or_update("low", 1);
//! queue.insert_or_update("high", 9);
//! queue.insert_or_update("low", 3);
//!
//! // The superseded ("low", 1) is still physically in the heap
//! assert_eq!(queue.len(), 2);
//! assert_eq!(queue.heap_len(), 3);
//!
//! queue.compact();
//! assert_eq!(queue.heap_len(), 2);
//! assert_eq!(queue.top(), Ok((&"high", &9)));
//! ```

use crate::order::{Entry, NaturalOrder, OrderingPolicy};
use crate::traits::{IndexedQueue, QueueError};
use log::{debug, trace};
use rustc_hash::FxHashMap;
use std::collections::BinaryHeap;
use std::hash::Hash;

/// An indexed priority queue built on a lazily-cleaned binary heap
///
/// # Type Parameters
///
/// - `K`: The key type, unique per entry
/// - `V`: The value type the queue is ordered by
/// - `C`: The ordering policy over values (defaults to [`NaturalOrder`])
#[derive(Debug, Clone)]
pub struct HeapBackend<K, V, C = NaturalOrder> {
    /// May hold stale entries; the root never is one
    heap: BinaryHeap<Entry<K, V, C>>,
    /// Current value of every live key
    valid: FxHashMap<K, V>,
}

impl<K, V, C> HeapBackend<K, V, C>
where
    K: Ord + Hash + Clone,
    V: Clone,
    C: OrderingPolicy<V>,
{
    /// Creates an empty queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        let mut valid = FxHashMap::default();
        valid.reserve(capacity);
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            valid,
        }
    }

    /// Returns the number of physical heap entries, stale ones included
    pub fn heap_len(&self) -> usize {
        self.heap.len()
    }

    /// Returns the number of stale entries still held by the heap
    pub fn stale_len(&self) -> usize {
        self.heap.len().saturating_sub(self.valid.len())
    }

    /// Rebuilds the heap from the live entries, dropping every stale one
    ///
    /// Has no observable effect on queue contents or order.
    ///
    /// # Time Complexity
    /// O(n) in the number of live entries.
    pub fn compact(&mut self) {
        let stale = self.stale_len();
        self.heap = Self::heapify(&self.valid);
        debug!(
            "compacted lazy heap: dropped {stale} stale entries, {} live",
            self.valid.len()
        );
    }

    fn heapify(valid: &FxHashMap<K, V>) -> BinaryHeap<Entry<K, V, C>> {
        valid
            .iter()
            .map(|(key, value)| Entry::new(key.clone(), value.clone()))
            .collect()
    }

    /// Drops stale roots until the root is current or the heap is empty
    ///
    /// Must run after every mutation that could expose a stale root.
    fn pop_till_valid(&mut self) {
        let mut discarded = 0usize;
        while let Some(root) = self.heap.peek() {
            let current = self
                .valid
                .get(&root.key)
                .is_some_and(|value| C::equal(value, &root.value));
            if current {
                break;
            }
            self.heap.pop();
            discarded += 1;
        }
        if discarded > 0 {
            trace!(
                "discarded {discarded} stale roots, {} entries remain in heap",
                self.heap.len()
            );
        }
    }
}

impl<K, V, C> IndexedQueue<K, V> for HeapBackend<K, V, C>
where
    K: Ord + Hash + Clone,
    V: Clone,
    C: OrderingPolicy<V>,
{
    fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            valid: FxHashMap::default(),
        }
    }

    fn from_pairs<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        // Resolve duplicates first so the heap starts with no stale entries
        let mut valid = FxHashMap::default();
        for (key, value) in pairs {
            valid.insert(key, value);
        }
        let heap = Self::heapify(&valid);
        debug!("bulk loaded {} entries into lazy heap", valid.len());
        Self { heap, valid }
    }

    fn is_empty(&self) -> bool {
        self.valid.is_empty()
    }

    fn len(&self) -> usize {
        self.valid.len()
    }

    fn top(&self) -> Result<(&K, &V), QueueError> {
        let root = self.heap.peek().ok_or(QueueError::EmptyContainer)?;
        // Report the map's value: the root may hold a policy-equal but
        // distinct older value for the same key.
        self.valid
            .get_key_value(&root.key)
            .ok_or(QueueError::EmptyContainer)
    }

    fn pop(&mut self) -> Option<(K, V)> {
        let root = self.heap.pop()?;
        let popped = self.valid.remove_entry(&root.key);
        self.pop_till_valid();
        popped
    }

    fn insert_or_update(&mut self, key: K, value: V) -> Option<V> {
        let previous = self.valid.insert(key.clone(), value.clone());
        self.heap.push(Entry::new(key, value));
        self.pop_till_valid();
        previous
    }

    fn erase(&mut self, key: &K) -> Option<V> {
        let removed = self.valid.remove(key)?;
        self.pop_till_valid();
        Some(removed)
    }

    fn contains(&self, key: &K) -> bool {
        self.valid.contains_key(key)
    }

    fn peek(&self, key: &K) -> Result<&V, QueueError> {
        self.valid.get(key).ok_or(QueueError::KeyNotFound)
    }
}

impl<K, V, C> Default for HeapBackend<K, V, C>
where
    K: Ord + Hash + Clone,
    V: Clone,
    C: OrderingPolicy<V>,
{
    fn default() -> Self {
        Self::new()
    }
}
