//! Stress tests that push the backends through large operation counts
//!
//! These tests perform many operations in adversarial patterns to catch
//! edge cases and check behavior under load, including the lazy heap's
//! stale-entry growth.

use rust_indexed_heaps::lazy_heap::HeapBackend;
use rust_indexed_heaps::ordered_set::OrderedSetBackend;
use rust_indexed_heaps::scan::ScanBackend;
use rust_indexed_heaps::workload::drain;
use rust_indexed_heaps::IndexedQueue;

/// Test massive numbers of inserts and pops
fn test_massive_operations<Q: IndexedQueue<u32, u32>>() {
    let mut queue = Q::new();

    for i in 0..2_000 {
        queue.insert_or_update(i, i);
    }
    assert_eq!(queue.len(), 2_000);

    for i in (0..2_000).rev() {
        assert_eq!(queue.pop(), Some((i, i)));
    }
    assert!(queue.is_empty());
}

/// Test repeatedly updating every key
fn test_many_updates<Q: IndexedQueue<u32, u32>>() {
    let mut queue = Q::new();

    for round in 0..20u32 {
        for key in 0..200u32 {
            // Each round reshuffles relative order
            queue.insert_or_update(key, (key * 7 + round * 13) % 101);
        }
    }
    assert_eq!(queue.len(), 200);

    for key in 0..200u32 {
        assert_eq!(queue.peek(&key), Ok(&((key * 7 + 19 * 13) % 101)));
    }

    let drained = drain(&mut queue);
    assert_eq!(drained.len(), 200);
    for pair in drained.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.1 > b.1 || (a.1 == b.1 && a.0 > b.0));
    }
}

/// Test alternating insert and pop
fn test_alternating_ops<Q: IndexedQueue<u32, u32>>() {
    let mut queue = Q::new();

    for i in 0..500 {
        queue.insert_or_update(i * 2, i);
        queue.insert_or_update(i * 2 + 1, i + 1_000);
        assert!(queue.pop().is_some());
    }
    assert_eq!(queue.len(), 500);
    assert_eq!(drain(&mut queue).len(), 500);
}

/// Test erasing and re-inserting the same keys
fn test_erase_reinsert_churn<Q: IndexedQueue<u32, u32>>() {
    let mut queue = Q::new();
    for key in 0..100 {
        queue.insert_or_update(key, key);
    }

    for round in 0..50 {
        for key in (round % 3..100).step_by(3) {
            queue.erase(&key);
        }
        for key in (round % 3..100).step_by(3) {
            queue.insert_or_update(key, key);
        }
    }

    let drained = drain(&mut queue);
    let expected: Vec<_> = (0..100).rev().map(|k| (k, k)).collect();
    assert_eq!(drained, expected);
}

#[test]
fn test_heap_massive_operations() {
    test_massive_operations::<HeapBackend<u32, u32>>();
}

#[test]
fn test_ordered_set_massive_operations() {
    test_massive_operations::<OrderedSetBackend<u32, u32>>();
}

#[test]
fn test_scan_massive_operations() {
    test_massive_operations::<ScanBackend<u32, u32>>();
}

#[test]
fn test_heap_many_updates() {
    test_many_updates::<HeapBackend<u32, u32>>();
}

#[test]
fn test_ordered_set_many_updates() {
    test_many_updates::<OrderedSetBackend<u32, u32>>();
}

#[test]
fn test_scan_many_updates() {
    test_many_updates::<ScanBackend<u32, u32>>();
}

#[test]
fn test_heap_alternating_ops() {
    test_alternating_ops::<HeapBackend<u32, u32>>();
}

#[test]
fn test_ordered_set_alternating_ops() {
    test_alternating_ops::<OrderedSetBackend<u32, u32>>();
}

#[test]
fn test_scan_alternating_ops() {
    test_alternating_ops::<ScanBackend<u32, u32>>();
}

#[test]
fn test_heap_erase_reinsert_churn() {
    test_erase_reinsert_churn::<HeapBackend<u32, u32>>();
}

#[test]
fn test_ordered_set_erase_reinsert_churn() {
    test_erase_reinsert_churn::<OrderedSetBackend<u32, u32>>();
}

#[test]
fn test_scan_erase_reinsert_churn() {
    test_erase_reinsert_churn::<ScanBackend<u32, u32>>();
}

/// Updates to keys below the top never surface, so the heap keeps growing
#[test]
fn test_heap_bloat_is_bounded_by_mutations() {
    let mut queue: HeapBackend<u32, u32> = HeapBackend::new();
    queue.insert_or_update(u32::MAX, u32::MAX);

    let mutations = 10_000;
    for i in 0..mutations {
        queue.insert_or_update(i % 10, i);
    }

    assert_eq!(queue.len(), 11);
    assert!(queue.heap_len() <= mutations as usize + 1);
    assert_eq!(queue.stale_len(), queue.heap_len() - 11);
    assert!(queue.stale_len() > 9_000);

    queue.compact();
    assert_eq!(queue.heap_len(), 11);

    assert_eq!(queue.pop(), Some((u32::MAX, u32::MAX)));
    let drained = drain(&mut queue);
    let expected: Vec<_> = (0..10).rev().map(|k| (k, mutations - 10 + k)).collect();
    assert_eq!(drained, expected);
}

/// Popping drains stale entries as they surface
#[test]
fn test_heap_stale_entries_reclaimed_by_draining() {
    let mut queue: HeapBackend<u32, u32> = HeapBackend::new();
    for round in 0..100 {
        for key in 0..50 {
            queue.insert_or_update(key, (key + round) % 50);
        }
    }
    assert!(queue.stale_len() > 0);

    assert_eq!(drain(&mut queue).len(), 50);
    assert_eq!(queue.heap_len(), 0);
    assert_eq!(queue.stale_len(), 0);
}
