//! Materializers: terminal operations that drain the pipeline into a
//! concrete container.
//!
//! All of them require a bounded stream and pull to exhaustion, moving
//! each element into the destination. The associative sinks take a
//! [`DuplicatePolicy`], decided once per call and applied on every
//! insertion attempt.

use std::collections::btree_map::Entry as BTreeEntry;
use std::collections::hash_map::Entry as HashEntry;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::Hash;

use super::core::{Stage, Stream};
use crate::error::{StreamError, StreamResult};

/// What an associative materializer does when two elements map to equal
/// keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Fail the whole materialization with
    /// [`StreamError::DuplicateKey`](crate::error::StreamError::DuplicateKey).
    #[default]
    Fail,
    /// Keep the first-seen value and ignore later ones.
    KeepFirst,
}

impl<S: Stage> Stream<S> {
    /// Drain the stream into a `Vec`.
    pub fn to_vec(self) -> StreamResult<Vec<S::Item>> {
        self.require_bounded("to_vec")?;
        log::trace!("materializing stream into Vec");
        Ok(self.into_iter().collect())
    }

    /// Drain the stream into a `VecDeque`.
    pub fn to_deque(self) -> StreamResult<VecDeque<S::Item>> {
        self.require_bounded("to_deque")?;
        Ok(self.into_iter().collect())
    }

    /// Drain the stream into a `LinkedList`.
    pub fn to_list(self) -> StreamResult<LinkedList<S::Item>> {
        self.require_bounded("to_list")?;
        Ok(self.into_iter().collect())
    }

    /// Drain the stream into a max-`BinaryHeap`.
    pub fn to_heap(self) -> StreamResult<BinaryHeap<S::Item>>
    where
        S::Item: Ord,
    {
        self.require_bounded("to_heap")?;
        Ok(self.into_iter().collect())
    }

    /// Drain the stream into an ordered set.
    pub fn to_set(mut self, policy: DuplicatePolicy) -> StreamResult<BTreeSet<S::Item>>
    where
        S::Item: Ord,
    {
        self.require_bounded("to_set")?;
        let mut out = BTreeSet::new();
        while let Some(item) = self.stage.pull() {
            if !out.insert(item) && policy == DuplicatePolicy::Fail {
                return Err(StreamError::DuplicateKey { container: "set" });
            }
        }
        Ok(out)
    }

    /// Drain the stream into a hash set.
    pub fn to_hash_set(mut self, policy: DuplicatePolicy) -> StreamResult<HashSet<S::Item>>
    where
        S::Item: Eq + Hash,
    {
        self.require_bounded("to_hash_set")?;
        let mut out = HashSet::new();
        while let Some(item) = self.stage.pull() {
            if !out.insert(item) && policy == DuplicatePolicy::Fail {
                return Err(StreamError::DuplicateKey { container: "set" });
            }
        }
        Ok(out)
    }

    /// Drain the stream into an ordered multiset, represented as a map
    /// from element to occurrence count.
    pub fn to_multiset(mut self) -> StreamResult<BTreeMap<S::Item, usize>>
    where
        S::Item: Ord,
    {
        self.require_bounded("to_multiset")?;
        let mut out = BTreeMap::new();
        while let Some(item) = self.stage.pull() {
            *out.entry(item).or_insert(0) += 1;
        }
        Ok(out)
    }

    /// Drain the stream into an ordered map keyed by `key`, with the
    /// elements themselves as values.
    ///
    /// # Examples
    /// ```
    /// use rivulet::{from_iter, DuplicatePolicy};
    ///
    /// let by_len = from_iter(["hey", "hello", "hola", "hi"])
    ///     .to_map(|s| s.len(), DuplicatePolicy::Fail)
    ///     .unwrap();
    /// assert_eq!(by_len[&2], "hi");
    /// assert_eq!(by_len[&5], "hello");
    /// ```
    pub fn to_map<K, KF>(
        self,
        key: KF,
        policy: DuplicatePolicy,
    ) -> StreamResult<BTreeMap<K, S::Item>>
    where
        K: Ord,
        KF: FnMut(&S::Item) -> K,
    {
        self.to_map_with(key, |value| value, policy)
    }

    /// Drain the stream into an ordered map, extracting the key and the
    /// stored value separately.
    pub fn to_map_with<K, V, KF, VF>(
        mut self,
        mut key: KF,
        mut value: VF,
        policy: DuplicatePolicy,
    ) -> StreamResult<BTreeMap<K, V>>
    where
        K: Ord,
        KF: FnMut(&S::Item) -> K,
        VF: FnMut(S::Item) -> V,
    {
        self.require_bounded("to_map")?;
        log::trace!("materializing stream into BTreeMap");
        let mut out = BTreeMap::new();
        while let Some(item) = self.stage.pull() {
            match out.entry(key(&item)) {
                BTreeEntry::Vacant(slot) => {
                    slot.insert(value(item));
                }
                BTreeEntry::Occupied(_) => {
                    if policy == DuplicatePolicy::Fail {
                        return Err(StreamError::DuplicateKey { container: "map" });
                    }
                }
            }
        }
        Ok(out)
    }

    /// Drain the stream into a hash map keyed by `key`.
    pub fn to_hash_map<K, KF>(
        self,
        key: KF,
        policy: DuplicatePolicy,
    ) -> StreamResult<HashMap<K, S::Item>>
    where
        K: Eq + Hash,
        KF: FnMut(&S::Item) -> K,
    {
        self.to_hash_map_with(key, |value| value, policy)
    }

    /// Drain the stream into a hash map, extracting the key and the
    /// stored value separately.
    pub fn to_hash_map_with<K, V, KF, VF>(
        mut self,
        mut key: KF,
        mut value: VF,
        policy: DuplicatePolicy,
    ) -> StreamResult<HashMap<K, V>>
    where
        K: Eq + Hash,
        KF: FnMut(&S::Item) -> K,
        VF: FnMut(S::Item) -> V,
    {
        self.require_bounded("to_hash_map")?;
        let mut out = HashMap::new();
        while let Some(item) = self.stage.pull() {
            match out.entry(key(&item)) {
                HashEntry::Vacant(slot) => {
                    slot.insert(value(item));
                }
                HashEntry::Occupied(_) => {
                    if policy == DuplicatePolicy::Fail {
                        return Err(StreamError::DuplicateKey { container: "map" });
                    }
                }
            }
        }
        Ok(out)
    }

    /// Group the elements by `key` into an ordered map of vectors, each
    /// vector in encounter order.
    pub fn group_by<K, KF>(self, key: KF) -> StreamResult<BTreeMap<K, Vec<S::Item>>>
    where
        K: Ord,
        KF: FnMut(&S::Item) -> K,
    {
        self.group_by_with(key, |value| value)
    }

    /// [`group_by`] with a separate value extraction.
    ///
    /// [`group_by`]: Stream::group_by
    pub fn group_by_with<K, V, KF, VF>(
        mut self,
        mut key: KF,
        mut value: VF,
    ) -> StreamResult<BTreeMap<K, Vec<V>>>
    where
        K: Ord,
        KF: FnMut(&S::Item) -> K,
        VF: FnMut(S::Item) -> V,
    {
        self.require_bounded("group_by")?;
        log::trace!("materializing stream into grouping map");
        let mut out: BTreeMap<K, Vec<V>> = BTreeMap::new();
        while let Some(item) = self.stage.pull() {
            out.entry(key(&item)).or_default().push(value(item));
        }
        Ok(out)
    }
}
