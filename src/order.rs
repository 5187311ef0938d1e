//! Ordering policies and the pair order shared by every backend
//!
//! All backends must agree on which entry is "the top", including how ties
//! are broken, so the comparison logic lives here and nowhere else.
//!
//! - [`OrderingPolicy`]: a three-way comparison over values. Policies are
//!   stateless zero-sized types passed as type parameters, which lets the
//!   heap and set backends give their entries a plain [`Ord`] impl.
//! - [`pair_cmp`]: the total order over `(key, value)` pairs. Values are
//!   compared under the policy first; equal values fall back to the key's
//!   natural order. The greater pair is the top.
//!
//! # Example
//!
//! ```rust
//! use rust_indexed_heaps::order::{pair_cmp, NaturalOrder, ReverseOrder};
//! use std::cmp::Ordering;
//!
//! // Higher value wins
//! assert_eq!(pair_cmp::<_, _, NaturalOrder>((&"a", &5), (&"b", &3)), Ordering::Greater);
//! // Equal values: the larger key wins
//! assert_eq!(pair_cmp::<_, _, NaturalOrder>((&"a", &5), (&"b", &5)), Ordering::Less);
//! // ReverseOrder flips values only, keys still break ties the same way
//! assert_eq!(pair_cmp::<_, _, ReverseOrder>((&"a", &5), (&"b", &3)), Ordering::Less);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

/// A comparison capability over values
///
/// Only [`compare`](OrderingPolicy::compare) must be provided; the boolean
/// helpers are derived from it. Implementations must be a total order and
/// deterministic, otherwise backends may disagree about the top entry.
///
/// # Example
///
/// ```rust
/// use rust_indexed_heaps::order::OrderingPolicy;
/// use std::cmp::Ordering;
///
/// // A value type with no natural order
/// struct Job { weight: u32 }
///
/// struct ByWeight;
///
/// impl OrderingPolicy<Job> for ByWeight {
///     fn compare(a: &Job, b: &Job) -> Ordering {
///         a.weight.cmp(&b.weight)
///     }
/// }
///
/// assert!(ByWeight::less(&Job { weight: 1 }, &Job { weight: 2 }));
/// assert!(ByWeight::equal(&Job { weight: 7 }, &Job { weight: 7 }));
/// ```
pub trait OrderingPolicy<V> {
    /// Three-way comparison of two values
    fn compare(a: &V, b: &V) -> Ordering;

    /// Returns true if `a` orders strictly before `b`
    fn less(a: &V, b: &V) -> bool {
        Self::compare(a, b) == Ordering::Less
    }

    /// Returns true if `a` orders strictly after `b`
    fn greater(a: &V, b: &V) -> bool {
        Self::compare(a, b) == Ordering::Greater
    }

    /// Returns true if neither value orders before the other
    fn equal(a: &V, b: &V) -> bool {
        Self::compare(a, b) == Ordering::Equal
    }
}

/// The value's own [`Ord`] implementation; larger values come out first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<V: Ord> OrderingPolicy<V> for NaturalOrder {
    #[inline]
    fn compare(a: &V, b: &V) -> Ordering {
        a.cmp(b)
    }
}

/// Reversed [`Ord`]; smaller values come out first
///
/// Only values are reversed. Ties between equal values are still broken
/// by the larger key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ReverseOrder;

impl<V: Ord> OrderingPolicy<V> for ReverseOrder {
    #[inline]
    fn compare(a: &V, b: &V) -> Ordering {
        b.cmp(a)
    }
}

/// Compares two `(key, value)` pairs: value under `C`, then key
#[inline]
pub fn pair_cmp<K: Ord, V, C: OrderingPolicy<V>>(a: (&K, &V), b: (&K, &V)) -> Ordering {
    match C::compare(a.1, b.1) {
        Ordering::Equal => a.0.cmp(b.0),
        ordering => ordering,
    }
}

/// An owned `(key, value)` record ordered by [`pair_cmp`]
///
/// Stored by the heap and set backends. Two entries are equal when their
/// keys are equal and their values are equal under the policy.
pub struct Entry<K, V, C> {
    pub(crate) key: K,
    pub(crate) value: V,
    _policy: PhantomData<C>,
}

impl<K, V, C> Entry<K, V, C> {
    /// Creates a new entry
    pub fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            _policy: PhantomData,
        }
    }

    /// The entry's key
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The entry's value
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Borrows both halves
    pub fn as_pair(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    /// Splits the entry into its key and value
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: Clone, V: Clone, C> Clone for Entry<K, V, C> {
    fn clone(&self) -> Self {
        Self::new(self.key.clone(), self.value.clone())
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for Entry<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Entry")
            .field(&self.key)
            .field(&self.value)
            .finish()
    }
}

impl<K: Ord, V, C: OrderingPolicy<V>> PartialEq for Entry<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: Ord, V, C: OrderingPolicy<V>> Eq for Entry<K, V, C> {}

impl<K: Ord, V, C: OrderingPolicy<V>> PartialOrd for Entry<K, V, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, V, C: OrderingPolicy<V>> Ord for Entry<K, V, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        pair_cmp::<K, V, C>(self.as_pair(), other.as_pair())
    }
}
