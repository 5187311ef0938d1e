//! Linear-scan backend
//!
//! Nothing but a hash map from key to value. The top entry is found by
//! scanning every entry under the pair order, so reads of the maximum are
//! O(n) while keyed operations are plain map operations.
//!
//! The implementation is simple enough to be obviously correct, which makes
//! it the oracle the other backends are checked against.
//!
//! # Time Complexity
//!
//! | Operation          | Complexity    |
//! |--------------------|---------------|
//! | `top`              | O(n)          |
//! | `pop`              | O(n)          |
//! | `insert_or_update` | O(1) expected |
//! | `erase`            | O(1) expected |
//! | `contains`/`peek`  | O(1) expected |

use crate::order::{pair_cmp, NaturalOrder, OrderingPolicy};
use crate::traits::{IndexedQueue, QueueError};
use rustc_hash::FxHashMap;
use std::hash::Hash;
use std::marker::PhantomData;

/// An indexed priority queue that scans for its maximum
///
/// # Type Parameters
///
/// - `K`: The key type, unique per entry
/// - `V`: The value type the queue is ordered by
/// - `C`: The ordering policy over values (defaults to [`NaturalOrder`])
#[derive(Debug, Clone)]
pub struct ScanBackend<K, V, C = NaturalOrder> {
    map: FxHashMap<K, V>,
    _policy: PhantomData<C>,
}

impl<K, V, C> IndexedQueue<K, V> for ScanBackend<K, V, C>
where
    K: Ord + Hash + Clone,
    C: OrderingPolicy<V>,
{
    fn new() -> Self {
        Self {
            map: FxHashMap::default(),
            _policy: PhantomData,
        }
    }

    fn from_pairs<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        Self {
            map: pairs.into_iter().collect(),
            _policy: PhantomData,
        }
    }

    fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    fn len(&self) -> usize {
        self.map.len()
    }

    fn top(&self) -> Result<(&K, &V), QueueError> {
        self.map
            .iter()
            .max_by(|a, b| pair_cmp::<K, V, C>(*a, *b))
            .ok_or(QueueError::EmptyContainer)
    }

    fn pop(&mut self) -> Option<(K, V)> {
        let key = self.top().ok()?.0.clone();
        self.map.remove_entry(&key)
    }

    fn insert_or_update(&mut self, key: K, value: V) -> Option<V> {
        self.map.insert(key, value)
    }

    fn erase(&mut self, key: &K) -> Option<V> {
        self.map.remove(key)
    }

    fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    fn peek(&self, key: &K) -> Result<&V, QueueError> {
        self.map.get(key).ok_or(QueueError::KeyNotFound)
    }
}

impl<K, V, C> Default for ScanBackend<K, V, C>
where
    K: Ord + Hash + Clone,
    C: OrderingPolicy<V>,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::ReverseOrder;

    #[test]
    fn test_basic_operations() {
        let mut queue: ScanBackend<&str, i32> = ScanBackend::new();

        assert_eq!(queue.top(), Err(QueueError::EmptyContainer));
        assert_eq!(queue.pop(), None);

        queue.insert_or_update("three", 3);
        queue.insert_or_update("one", 1);
        queue.insert_or_update("two", 2);

        assert_eq!(queue.top(), Ok((&"three", &3)));
        assert_eq!(queue.pop(), Some(("three", 3)));
        assert_eq!(queue.pop(), Some(("two", 2)));
        assert_eq!(queue.pop(), Some(("one", 1)));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_bulk_load_last_wins() {
        let queue: ScanBackend<char, u8> = ScanBackend::from_pairs([('x', 1), ('y', 2), ('x', 3)]);

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.peek(&'x'), Ok(&3));
        assert_eq!(queue.top(), Ok((&'x', &3)));
    }

    #[test]
    fn test_ties_and_reverse_policy() {
        let mut queue: ScanBackend<u32, u32, ReverseOrder> =
            ScanBackend::from_pairs([(1, 5), (2, 5), (3, 9)]);

        // Smallest value first, equal values by larger key
        assert_eq!(queue.pop(), Some((2, 5)));
        assert_eq!(queue.pop(), Some((1, 5)));
        assert_eq!(queue.pop(), Some((3, 9)));
    }
}
