//! Reproducible operation sequences for driving queues
//!
//! A [`Workload`] is a seeded random mix of inserts/updates, erases, top
//! reads, pops and keyed peeks over a fixed key space. [`replay`] applies
//! one to any [`IndexedQueue`] and records what each operation made
//! visible, so two backends can be compared observation by observation.
//!
//! # Example
//!
//! ```rust
//! use rust_indexed_heaps::IndexedQueue;
//! use rust_indexed_heaps::lazy_heap::HeapBackend;
//! use rust_indexed_heaps::scan::ScanBackend;
//! use rust_indexed_heaps::workload::{replay, Workload, WorkloadConfig};
//!
//! let workload = Workload::generate(&WorkloadConfig { num_ops: 500, ..Default::default() });
//!
//! let mut heap: HeapBackend<u32, u32> = HeapBackend::new();
//! let mut scan: ScanBackend<u32, u32> = ScanBackend::new();
//! assert_eq!(replay(&mut heap, &workload.ops), replay(&mut scan, &workload.ops));
//! ```

use crate::traits::IndexedQueue;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A single queue operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation<K, V> {
    /// Insert a key or overwrite its value
    InsertOrUpdate(K, V),
    /// Erase a key
    Erase(K),
    /// Read the top entry
    Top,
    /// Remove the top entry
    Pop,
    /// Read one key's value
    Peek(K),
}

/// What an operation made visible to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observation<K, V> {
    /// The top entry, or `None` if the queue was empty
    Top(Option<(K, V)>),
    /// The popped entry, or `None` if the queue was empty
    Popped(Option<(K, V)>),
    /// The peeked value, or `None` if the key was absent
    Peeked(Option<V>),
    /// A mutation and the queue length after it
    Mutated(usize),
}

/// Parameters for [`Workload::generate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkloadConfig {
    /// Number of operations to generate
    pub num_ops: usize,
    /// Keys are drawn from `0..num_keys`
    pub num_keys: u32,
    /// Values are drawn from `0..=max_value`
    pub max_value: u32,
    /// Seed for the random number generator
    pub seed: u64,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            num_ops: 10_000,
            num_keys: 1_000,
            max_value: 100_000,
            seed: 42,
        }
    }
}

/// A generated operation sequence
#[derive(Debug, Clone)]
pub struct Workload {
    /// The configuration this workload was generated from
    pub config: WorkloadConfig,
    /// The operations, in replay order
    pub ops: Vec<Operation<u32, u32>>,
}

impl Workload {
    /// Generates a workload with a uniform mix of operation kinds
    ///
    /// The same config always yields the same operations.
    pub fn generate(config: &WorkloadConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let num_keys = config.num_keys.max(1);
        let ops = (0..config.num_ops)
            .map(|_| {
                let key = rng.gen_range(0..num_keys);
                match rng.gen_range(0..5u8) {
                    0 => Operation::InsertOrUpdate(key, rng.gen_range(0..=config.max_value)),
                    1 => Operation::Erase(key),
                    2 => Operation::Top,
                    3 => Operation::Pop,
                    _ => Operation::Peek(key),
                }
            })
            .collect();
        Self {
            config: *config,
            ops,
        }
    }

    /// Generates `(key, value)` pairs suitable for bulk loading
    ///
    /// Keys may repeat; bulk loading keeps the last value for each.
    pub fn initial_pairs(config: &WorkloadConfig, count: usize) -> Vec<(u32, u32)> {
        let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(1));
        let num_keys = config.num_keys.max(1);
        (0..count)
            .map(|_| {
                (
                    rng.gen_range(0..num_keys),
                    rng.gen_range(0..=config.max_value),
                )
            })
            .collect()
    }
}

/// Applies `ops` to `queue` in order, recording one observation per operation
pub fn replay<K, V, Q>(queue: &mut Q, ops: &[Operation<K, V>]) -> Vec<Observation<K, V>>
where
    K: Clone,
    V: Clone,
    Q: IndexedQueue<K, V>,
{
    ops.iter()
        .map(|op| match op {
            Operation::InsertOrUpdate(key, value) => {
                queue.insert_or_update(key.clone(), value.clone());
                Observation::Mutated(queue.len())
            }
            Operation::Erase(key) => {
                queue.erase(key);
                Observation::Mutated(queue.len())
            }
            Operation::Top => Observation::Top(
                queue
                    .top()
                    .ok()
                    .map(|(key, value)| (key.clone(), value.clone())),
            ),
            Operation::Pop => Observation::Popped(queue.pop()),
            Operation::Peek(key) => Observation::Peeked(queue.peek(key).ok().cloned()),
        })
        .collect()
}

/// Pops every entry, returning them in pop order
pub fn drain<K, V, Q: IndexedQueue<K, V>>(queue: &mut Q) -> Vec<(K, V)> {
    let mut drained = Vec::with_capacity(queue.len());
    while let Some(pair) = queue.pop() {
        drained.push(pair);
    }
    drained
}
