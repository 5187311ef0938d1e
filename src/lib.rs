//! Indexed Priority Queues for Rust
//!
//! This crate provides max-priority queues of unique keys that, unlike
//! `std::collections::BinaryHeap`, can update, erase and look up an entry by
//! its key. Three backends implement the same [`IndexedQueue`] contract with
//! different cost profiles and identical observable behavior.
//!
//! # Backends
//!
//! - **Lazy heap** ([`lazy_heap::HeapBackend`]): binary heap with lazy deletion; O(1) top,
//!   O(log n) amortized updates and pops. Fastest for insert/pop heavy workloads.
//! - **Ordered set** ([`ordered_set::OrderedSetBackend`]): balanced tree; O(log n) worst-case
//!   for every mutation and no stale-entry bookkeeping.
//! - **Scan** ([`scan::ScanBackend`]): hash map only; O(1) keyed operations and O(n) top/pop.
//!   Useful when reads of the maximum are rare, and as a reference implementation.
//!
//! Entries are ordered by value under an [`order::OrderingPolicy`] (natural order by
//! default), with equal values broken by the larger key.
//!
//! # Example
//!
//! ```rust
//! use rust_indexed_heaps::{PriorityQueue, QueueError};
//!
//! let mut queue: PriorityQueue<&str, i32> =
//!     PriorityQueue::from_pairs([("a", 1), ("b", 3), ("c", 2)]);
//! queue.insert_or_update("a", 5);
//! queue.erase(&"c");
//!
//! assert_eq!(queue.pop(), Some(("a", 5)));
//! assert_eq!(queue.pop(), Some(("b", 3)));
//! assert!(queue.is_empty());
//! assert_eq!(queue.top(), Err(QueueError::EmptyContainer));
//! ```

pub mod lazy_heap;
pub mod order;
pub mod ordered_set;
pub mod queue;
pub mod scan;
pub mod traits;
pub mod workload;

// Re-export the main types for convenience
pub use queue::PriorityQueue;
pub use traits::{IndexedQueue, QueueError};
