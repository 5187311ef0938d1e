//! Ordered-set backend
//!
//! Keeps every live entry in a [`BTreeSet`] ordered by the pair order, plus
//! an index map from key to current value. The two structures always hold
//! exactly the same entries, so there is nothing stale to clean up.
//!
//! The map is what makes updates possible: the set is ordered by value, so
//! removing a key's entry means rebuilding the exact `(key, old value)`
//! entry from the map and looking that up.
//!
//! # Time Complexity
//!
//! | Operation          | Complexity   |
//! |--------------------|--------------|
//! | `top`              | O(log n)     |
//! | `pop`              | O(log n)     |
//! | `insert_or_update` | O(log n)     |
//! | `erase`            | O(log n)     |
//! | `contains`/`peek`  | O(1) expected|
//!
//! # Trade-offs
//!
//! Compared to [`HeapBackend`](crate::lazy_heap::HeapBackend):
//! - Worst-case instead of amortized bounds
//! - Memory tracks the live entry count exactly
//! - Every update pays for an extra tree removal
//!
//! # Example
//!
//! ```rust
//! use rust_indexed_heaps::IndexedQueue;
//! use rust_indexed_heaps::ordered_set::OrderedSetBackend;
//!
//! let mut queue: OrderedSetBackend<&str, i32> =
//!     OrderedSetBackend::from_pairs([("a", 1), ("b", 3), ("c", 2)]);
//! queue.insert_or_update("a", 5);
//!
//! let order: Vec<_> = queue.iter().map(|(k, _)| *k).collect();
//! assert_eq!(order, vec!["a", "b", "c"]);
//! ```

use crate::order::{Entry, NaturalOrder, OrderingPolicy};
use crate::traits::{IndexedQueue, QueueError};
use log::debug;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use std::hash::Hash;

/// An indexed priority queue built on a balanced ordered set
///
/// # Type Parameters
///
/// - `K`: The key type, unique per entry
/// - `V`: The value type the queue is ordered by
/// - `C`: The ordering policy over values (defaults to [`NaturalOrder`])
#[derive(Debug, Clone)]
pub struct OrderedSetBackend<K, V, C = NaturalOrder> {
    set: BTreeSet<Entry<K, V, C>>,
    index: FxHashMap<K, V>,
}

impl<K, V, C> OrderedSetBackend<K, V, C>
where
    K: Ord + Hash + Clone,
    V: Clone,
    C: OrderingPolicy<V>,
{
    /// Iterates over live entries from the top down
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&K, &V)> + '_ {
        self.set.iter().rev().map(Entry::as_pair)
    }
}

impl<K, V, C> IndexedQueue<K, V> for OrderedSetBackend<K, V, C>
where
    K: Ord + Hash + Clone,
    V: Clone,
    C: OrderingPolicy<V>,
{
    fn new() -> Self {
        Self {
            set: BTreeSet::new(),
            index: FxHashMap::default(),
        }
    }

    fn from_pairs<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        let mut index = FxHashMap::default();
        for (key, value) in pairs {
            index.insert(key, value);
        }
        let set: BTreeSet<_> = index
            .iter()
            .map(|(key, value)| Entry::new(key.clone(), value.clone()))
            .collect();
        debug!("bulk loaded {} entries into ordered set", set.len());
        Self { set, index }
    }

    fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    fn len(&self) -> usize {
        self.set.len()
    }

    fn top(&self) -> Result<(&K, &V), QueueError> {
        self.set
            .last()
            .map(Entry::as_pair)
            .ok_or(QueueError::EmptyContainer)
    }

    fn pop(&mut self) -> Option<(K, V)> {
        let (key, value) = self.set.pop_last()?.into_pair();
        self.index.remove(&key);
        Some((key, value))
    }

    fn insert_or_update(&mut self, key: K, value: V) -> Option<V> {
        let previous = self.index.remove_entry(&key).map(|(old_key, old_value)| {
            let stale = Entry::new(old_key, old_value);
            self.set.remove(&stale);
            stale.into_pair().1
        });
        self.index.insert(key.clone(), value.clone());
        self.set.insert(Entry::new(key, value));
        previous
    }

    fn erase(&mut self, key: &K) -> Option<V> {
        let (key, value) = self.index.remove_entry(key)?;
        let entry = Entry::new(key, value);
        self.set.remove(&entry);
        Some(entry.into_pair().1)
    }

    fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    fn peek(&self, key: &K) -> Result<&V, QueueError> {
        self.index.get(key).ok_or(QueueError::KeyNotFound)
    }
}

impl<K, V, C> Default for OrderedSetBackend<K, V, C>
where
    K: Ord + Hash + Clone,
    V: Clone,
    C: OrderingPolicy<V>,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let mut queue: OrderedSetBackend<&str, i32> = OrderedSetBackend::new();

        assert!(queue.is_empty());
        assert_eq!(queue.top(), Err(QueueError::EmptyContainer));
        assert_eq!(queue.pop(), None);

        queue.insert_or_update("three", 3);
        queue.insert_or_update("one", 1);
        queue.insert_or_update("two", 2);

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.top(), Ok((&"three", &3)));
        assert_eq!(queue.pop(), Some(("three", 3)));
        assert_eq!(queue.pop(), Some(("two", 2)));
        assert_eq!(queue.pop(), Some(("one", 1)));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_update_moves_entry() {
        let mut queue: OrderedSetBackend<u32, u32> =
            OrderedSetBackend::from_pairs([(1, 10), (2, 20), (3, 30)]);

        assert_eq!(queue.insert_or_update(1, 99), Some(10));
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.top(), Ok((&1, &99)));

        assert_eq!(queue.insert_or_update(1, 0), Some(99));
        let order: Vec<_> = queue.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(order, vec![(3, 30), (2, 20), (1, 0)]);
    }

    #[test]
    fn test_update_with_same_value_keeps_single_entry() {
        let mut queue: OrderedSetBackend<u32, u32> = OrderedSetBackend::new();
        queue.insert_or_update(4, 4);
        queue.insert_or_update(4, 4);

        assert_eq!(queue.len(), 1);
        assert_eq!(queue.pop(), Some((4, 4)));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_erase() {
        let mut queue: OrderedSetBackend<&str, i32> =
            OrderedSetBackend::from_pairs([("a", 1), ("b", 3), ("c", 2)]);

        assert_eq!(queue.erase(&"b"), Some(3));
        assert_eq!(queue.erase(&"b"), None);
        assert_eq!(queue.erase(&"zzz"), None);
        assert_eq!(queue.len(), 2);
        assert!(!queue.contains(&"b"));
        assert_eq!(queue.peek(&"b"), Err(QueueError::KeyNotFound));
        assert_eq!(queue.top(), Ok((&"c", &2)));
    }

    #[test]
    fn test_ties_break_on_larger_key() {
        let queue: OrderedSetBackend<&str, i32> =
            OrderedSetBackend::from_pairs([("apple", 1), ("pear", 1), ("fig", 1)]);

        let order: Vec<_> = queue.iter().map(|(k, _)| *k).collect();
        assert_eq!(order, vec!["pear", "fig", "apple"]);
    }
}
