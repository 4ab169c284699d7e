//! Utility helpers layered over both map variants.

use crate::slot_hash::{ChainHash, ProbeHash, SlotHash};
use crate::{ChainMap, ProbeMap};

/// Extension trait adding bulk accessors shared by both map variants.
///
/// Duplicate physical entries are reported as-is: a key inserted twice
/// appears twice in [`keys`](Self::keys).
pub trait MapExtensions<K, V> {
    /// Returns every live key, in iteration order
    fn keys(&self) -> Vec<K>;

    /// Returns every live value, in iteration order
    fn values(&self) -> Vec<V>;

    /// Returns true when at least one live entry has the given key
    fn contains_key(&self, key: &K) -> bool;
}

impl<K, V, H> MapExtensions<K, V> for ProbeMap<K, V, H>
where
    K: PartialEq + Clone,
    V: Clone,
    H: SlotHash<K>,
{
    fn keys(&self) -> Vec<K> {
        self.iter().map(|(key, _)| key.clone()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, value)| value.clone()).collect()
    }

    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }
}

impl<K, V, H> MapExtensions<K, V> for ChainMap<K, V, H>
where
    K: PartialEq + Clone,
    V: Clone,
    H: SlotHash<K>,
{
    fn keys(&self) -> Vec<K> {
        self.iter().map(|(key, _)| key.clone()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, value)| value.clone()).collect()
    }

    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }
}

/// Collects key-value pairs into a [`ProbeMap`] with `capacity` slots.
///
/// Pairs that find no free slot once the table saturates are dropped.
#[allow(dead_code)]
pub fn probe_from_pairs<K, V, I>(capacity: usize, pairs: I) -> ProbeMap<K, V>
where
    K: PartialEq,
    I: IntoIterator<Item = (K, V)>,
    ProbeHash: SlotHash<K>,
{
    let mut map = ProbeMap::with_capacity(capacity);
    for (key, value) in pairs {
        map.insert(key, value);
    }
    map
}

/// Collects key-value pairs into a [`ChainMap`] with `capacity` buckets.
#[allow(dead_code)]
pub fn chain_from_pairs<K, V, I>(capacity: usize, pairs: I) -> ChainMap<K, V>
where
    K: PartialEq,
    I: IntoIterator<Item = (K, V)>,
    ChainHash: SlotHash<K>,
{
    let mut map = ChainMap::with_capacity(capacity);
    for (key, value) in pairs {
        map.insert(key, value);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_from_pairs_round_trips() {
        let map = probe_from_pairs(19, vec![("a".to_string(), 1), ("b".to_string(), 2)]);
        assert_eq!(map.get("a"), Some(&1));
        assert_eq!(map.get("b"), Some(&2));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn chain_from_pairs_round_trips() {
        let map = chain_from_pairs(19, vec![("a".to_string(), 1), ("b".to_string(), 2)]);
        assert_eq!(map.get("a"), Some(&1));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn keys_and_values_cover_both_variants() {
        let probe = probe_from_pairs(19, vec![(3, 30), (5, 50), (7, 70)]);
        let mut keys = probe.keys();
        keys.sort_unstable();
        assert_eq!(keys, vec![3, 5, 7]);

        let chain = chain_from_pairs(19, vec![(3, 30), (5, 50), (7, 70)]);
        let mut values = chain.values();
        values.sort_unstable();
        assert_eq!(values, vec![30, 50, 70]);
    }

    #[test]
    fn keys_report_duplicates() {
        let probe = probe_from_pairs(19, vec![(24, 17), (24, 19)]);
        assert_eq!(probe.keys(), vec![24, 24]);
    }

    #[test]
    fn contains_key_on_both_variants() {
        let probe = probe_from_pairs(19, vec![(1, 10)]);
        assert!(probe.contains_key(&1));
        assert!(!probe.contains_key(&2));

        let chain = chain_from_pairs(19, vec![(1, 10)]);
        assert!(chain.contains_key(&1));
        assert!(!chain.contains_key(&2));
    }
}
