//! One function per kind of container.
//!
//! Sorted and navigable kinds map onto the same `BTreeSet` / `BTreeMap`,
//! which already support ordered traversal and range queries.

use crate::{CanonicalEmpty, OrEmpty};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Provides an empty list if the input is `None`, but otherwise returns the provided input.
#[inline]
pub fn safe_list<E>(list: Option<&Vec<E>>) -> &Vec<E>
where
    Vec<E>: CanonicalEmpty,
{
    list.or_empty()
}

/// Provides an empty slice if the input is `None`, but otherwise returns the provided input.
///
/// Unlike the other functions, this places no bounds on the element type.
#[inline]
pub fn safe_slice<E>(slice: Option<&[E]>) -> &[E] {
    slice.unwrap_or(&[])
}

/// Provides an empty set if the input is `None`, but otherwise returns the provided input.
#[inline]
pub fn safe_set<E, S>(set: Option<&HashSet<E, S>>) -> &HashSet<E, S>
where
    HashSet<E, S>: CanonicalEmpty,
{
    set.or_empty()
}

/// Provides an empty sorted set if the input is `None`, but otherwise returns the provided input.
#[inline]
pub fn safe_sorted_set<E: Ord>(set: Option<&BTreeSet<E>>) -> &BTreeSet<E>
where
    BTreeSet<E>: CanonicalEmpty,
{
    set.or_empty()
}

/// Provides an empty navigable set if the input is `None`, but otherwise returns the provided input.
///
/// Shares its canonical instance with `safe_sorted_set`.
#[inline]
pub fn safe_navigable_set<E: Ord>(set: Option<&BTreeSet<E>>) -> &BTreeSet<E>
where
    BTreeSet<E>: CanonicalEmpty,
{
    safe_sorted_set(set)
}

/// Provides an empty map if the input is `None`, but otherwise returns the provided input.
#[inline]
pub fn safe_map<K, V, S>(map: Option<&HashMap<K, V, S>>) -> &HashMap<K, V, S>
where
    HashMap<K, V, S>: CanonicalEmpty,
{
    map.or_empty()
}

/// Provides an empty sorted map if the input is `None`, but otherwise returns the provided input.
#[inline]
pub fn safe_sorted_map<K: Ord, V>(map: Option<&BTreeMap<K, V>>) -> &BTreeMap<K, V>
where
    BTreeMap<K, V>: CanonicalEmpty,
{
    map.or_empty()
}

/// Provides an empty navigable map if the input is `None`, but otherwise returns the provided input.
///
/// Shares its canonical instance with `safe_sorted_map`.
#[inline]
pub fn safe_navigable_map<K: Ord, V>(map: Option<&BTreeMap<K, V>>) -> &BTreeMap<K, V>
where
    BTreeMap<K, V>: CanonicalEmpty,
{
    safe_sorted_map(map)
}

/// Provides an empty iterator if the input is `None`,
/// but otherwise iterates over the provided input.
///
/// The input is consumed rather than handed back:
/// with `Some(iter)` the result is an adapter yielding exactly `iter`'s items in order.
/// Lazy, and never allocates.
#[inline]
pub fn safe_enumeration<I: IntoIterator>(enumeration: Option<I>) -> impl Iterator<Item = I::Item> {
    enumeration.into_iter().flatten()
}
