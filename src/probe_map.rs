use std::borrow::Borrow;
use std::fmt::Debug;
use std::io::{self, Write};

use crate::slot_hash::{ProbeHash, SlotHash};

/// Slot count used by [`ProbeMap::new`], the first entry of [`PRIME_LIST`]
const DEFAULT_CAPACITY: usize = 53;

/// Fixed ascending table of primes consulted by [`ProbeMap::next_prime`].
const PRIME_LIST: [usize; 28] = [
    53,
    97,
    193,
    389,
    769,
    1543,
    3079,
    6151,
    12_289,
    24_593,
    49_157,
    98_317,
    196_613,
    393_241,
    786_433,
    1_572_869,
    3_145_739,
    6_291_469,
    12_582_917,
    24_165_843,
    50_331_653,
    100_663_319,
    201_326_611,
    402_653_189,
    805_306_457,
    1_610_612_741,
    3_221_225_473,
    4_294_967_291,
];

/// One live key-value pair stored in a slot
#[derive(Debug, Clone)]
struct Entry<K, V> {
    /// The key of the pair
    key: K,
    /// The value associated with the key
    value: V,
}

/// Allocates `capacity` empty slots
fn empty_slots<K, V>(capacity: usize) -> Vec<Option<Entry<K, V>>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || None);
    slots
}

/// Advances a probe index one slot, wrapping at the table end
fn probe_next(index: usize, capacity: usize) -> usize {
    let next = index.wrapping_add(1);
    if next >= capacity { 0 } else { next }
}

/// A fixed-capacity hash map resolving collisions by linear probing.
///
/// The map owns a flat slot array sized at construction; each slot holds at
/// most one entry and deletion resets a slot straight back to empty. The
/// capacity never changes behind the caller's back: when the array
/// saturates, [`insert`](Self::insert) refuses new entries until something
/// is removed or the map is rebuilt via [`resize`](Self::resize).
///
/// Insertion performs no key-uniqueness check. Re-inserting a key that is
/// already present stores a second physical entry in the next free probe
/// slot; lookups then resolve to the entry closest to the home slot. This
/// mirrors the chained variant's duplicate semantics, see the crate docs.
///
/// ```rust
/// use keyslot::ProbeMap;
///
/// let mut map = ProbeMap::with_capacity(19);
/// assert!(map.insert(24, 17));
/// assert_eq!(map.get(&24), Some(&17));
/// assert_eq!(map.remove(&24), Some(17));
/// assert_eq!(map.get(&24), None);
/// ```
#[derive(Debug, Clone)]
pub struct ProbeMap<K, V, H = ProbeHash> {
    /// The slot array; `None` marks an empty slot
    slots: Vec<Option<Entry<K, V>>>,
    /// Current number of live entries
    len: usize,
    /// The slot-addressing strategy
    hash: H,
}

impl<K, V> Default for ProbeMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> ProbeMap<K, V> {
    /// Creates a map with the default capacity and default hash strategy
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a map with `capacity` slots (clamped to at least 1)
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_hasher(capacity, ProbeHash::default())
    }
}

impl<K, V, H> ProbeMap<K, V, H> {
    /// Creates a map with `capacity` slots and a caller-supplied strategy
    #[must_use]
    pub fn with_hasher(capacity: usize, hash: H) -> Self {
        Self { slots: empty_slots(capacity.max(1)), len: 0, hash }
    }

    /// Returns the number of live entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the map holds no live entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the backing array
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns an iterator over the live entries, in slot order
    #[must_use]
    #[allow(clippy::iter_without_into_iter)]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { slots: &self.slots }
    }

    /// Returns the smallest prime from a fixed table strictly greater than
    /// the current number of live entries.
    ///
    /// A sizing hint for callers who want to rebuild into a roomier table
    /// via [`resize`](Self::resize); nothing in the map consults it
    /// automatically.
    #[must_use]
    pub fn next_prime(&self) -> usize {
        PRIME_LIST
            .iter()
            .copied()
            .find(|&prime| prime > self.len)
            .unwrap_or(4_294_967_291)
    }

    /// Writes every physical slot to `out`, one line per slot.
    ///
    /// A debugging aid, not a stable format.
    ///
    /// # Errors
    ///
    /// Propagates any I/O failure from the sink.
    pub fn dump<W: Write>(&self, out: &mut W) -> io::Result<()>
    where
        K: Debug,
        V: Debug,
    {
        for (index, slot) in self.slots.iter().enumerate() {
            match slot {
                Some(entry) => writeln!(out, "{index}: {:?} => {:?}", entry.key, entry.value)?,
                None => writeln!(out, "{index}:")?,
            }
        }
        Ok(())
    }
}

impl<K: PartialEq, V, H: SlotHash<K>> ProbeMap<K, V, H> {
    /// Returns the slot index holding an entry with the given key.
    ///
    /// Probes forward from the key's home slot, wrapping at the table end,
    /// and stops when a matching occupied slot is found or the probe returns
    /// to where it started. The scan does not stop early at empty slots, so
    /// a miss costs a full cycle in the worst case.
    #[must_use]
    pub fn find<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
        H: SlotHash<Q>,
    {
        let capacity = self.slots.len();
        let origin = self.hash.slot(key, capacity);
        let mut index = origin;
        loop {
            match self.slots.get(index) {
                Some(Some(entry)) if entry.key.borrow() == key => return Some(index),
                Some(_) => {}
                None => return None,
            }
            index = probe_next(index, capacity);
            if index == origin {
                return None;
            }
        }
    }

    /// Returns a reference to the value stored for `key`
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
        H: SlotHash<Q>,
    {
        let index = self.find(key)?;
        self.slots.get(index)?.as_ref().map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value stored for `key`
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
        H: SlotHash<Q>,
    {
        let index = self.find(key)?;
        self.slots.get_mut(index)?.as_mut().map(|entry| &mut entry.value)
    }

    /// Inserts a key-value pair into the first free slot on the key's probe
    /// sequence.
    ///
    /// The probe skips every occupied slot regardless of its key, so a key
    /// that is already present is not updated; the pair becomes a second
    /// physical entry. Returns `false` without storing anything when the
    /// probe completes a full cycle finding no empty slot.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let capacity = self.slots.len();
        let origin = self.hash.slot(&key, capacity);
        let mut index = origin;
        loop {
            match self.slots.get_mut(index) {
                None => return false,
                Some(slot) => {
                    if slot.is_none() {
                        *slot = Some(Entry { key, value });
                        self.len = self.len.saturating_add(1);
                        return true;
                    }
                }
            }
            index = probe_next(index, capacity);
            if index == origin {
                return false;
            }
        }
    }

    /// Removes the entry closest to the home slot for `key`, returning its
    /// value.
    ///
    /// The slot is reset straight back to empty; no tombstone is kept. If
    /// the key has duplicate physical entries only the first on the probe
    /// sequence is removed.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
        H: SlotHash<Q>,
    {
        let index = self.find(key)?;
        let entry = self.slots.get_mut(index)?.take()?;
        self.len = self.len.saturating_sub(1);
        Some(entry.value)
    }

    /// Rebuilds the map with `new_capacity` slots (clamped to at least 1),
    /// re-probing every live entry into the fresh array.
    ///
    /// This is a manual facility; no operation triggers it. Duplicate
    /// physical entries survive the rebuild. Entries that find no free slot
    /// in a smaller target table are dropped.
    pub fn resize(&mut self, new_capacity: usize) {
        let drained = std::mem::replace(&mut self.slots, empty_slots(new_capacity.max(1)));
        self.len = 0;
        for entry in drained.into_iter().flatten() {
            self.insert(entry.key, entry.value);
        }
    }
}

impl<K: PartialEq, V, H: SlotHash<K>> Extend<(K, V)> for ProbeMap<K, V, H> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// Iterator over the live entries of a [`ProbeMap`], in slot order.
///
/// Skips empty slots in both directions; exhaustion is the end sentinel.
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    /// Window of the slot array not yet visited
    slots: &'a [Option<Entry<K, V>>],
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((slot, rest)) = self.slots.split_first() {
            self.slots = rest;
            if let Some(entry) = slot {
                return Some((&entry.key, &entry.value));
            }
        }
        None
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        while let Some((slot, rest)) = self.slots.split_last() {
            self.slots = rest;
            if let Some(entry) = slot {
                return Some((&entry.key, &entry.value));
            }
        }
        None
    }
}
