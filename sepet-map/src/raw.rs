//! The open-addressing engine shared by every hash container in this crate.
//!
//! `RawTable` is deliberately hasher-free: callers pass precomputed 64-bit
//! hashes, and each entry stores its own hash so the table can rehash
//! without recomputing anything. [`HashMap`](crate::HashMap),
//! [`HashSet`](crate::HashSet) and the ordered variants all sit on top of
//! this one implementation.

use std::mem;

/// Load factor threshold for growing (75%).
const GROW_THRESHOLD: f64 = 0.75;

/// One occupied slot. Fields are ordered hash, key, value so the hash check
/// during probing touches the front of the entry.
struct Entry<K, V> {
    hash: u64,
    key: K,
    value: V,
}

/// Outcome of a probe walk: either the key's slot or the empty slot that
/// terminated the walk.
enum Probe {
    Found(usize),
    Vacant(usize),
}

/// A linear-probing hash table with backward-shift deletion.
///
/// The table never holds tombstones: removal shifts subsequent entries of
/// the probe chain backward into the freed slot, so a forward probe for any
/// remaining key still terminates correctly at the first empty slot.
///
/// Invariant: `len < capacity` at all times. Growth happens before an
/// insertion would cross the load-factor threshold, which keeps at least one
/// slot empty and makes every probe walk terminate.
pub struct RawTable<K, V> {
    slots: Box<[Option<Entry<K, V>>]>,
    len: usize,
    mask: usize,
}

impl<K: Eq, V> RawTable<K, V> {
    /// Creates a table able to hold roughly `cap` entries before growing.
    ///
    /// The slot count is the power of two above `cap`, minimum one; a
    /// requested capacity of zero is normalized, not rejected.
    pub fn with_capacity(cap: usize) -> Self {
        let capacity = if cap < 1 { 1 } else { cap.next_power_of_two() };
        RawTable {
            slots: alloc_slots(capacity),
            len: 0,
            mask: capacity - 1,
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current slot count.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn home(&self, hash: u64) -> usize {
        (hash as usize) & self.mask
    }

    /// Walks the probe chain for `hash`. Stops at the matching entry or at
    /// the first empty slot; the `len < capacity` invariant guarantees one
    /// exists.
    fn probe<F: Fn(&K) -> bool>(&self, hash: u64, eq: F) -> Probe {
        let mask = self.mask;
        let mut idx = self.home(hash);
        loop {
            match self.slots[idx] {
                None => return Probe::Vacant(idx),
                Some(ref e) if e.hash == hash && eq(&e.key) => return Probe::Found(idx),
                Some(_) => idx = (idx + 1) & mask,
            }
        }
    }

    /// Inserts or overwrites, returning the previous value for the key.
    ///
    /// Growth is triggered before the new entry lands, the moment it would
    /// push the table past the load-factor threshold.
    pub fn insert(&mut self, hash: u64, key: K, value: V) -> Option<V> {
        match self.probe(hash, |k| *k == key) {
            Probe::Found(idx) => match self.slots[idx] {
                Some(ref mut entry) => Some(mem::replace(&mut entry.value, value)),
                None => unreachable!("probe answered Found for an empty slot"),
            },
            Probe::Vacant(mut idx) => {
                if (self.len + 1) as f64 > self.slots.len() as f64 * GROW_THRESHOLD {
                    self.grow_for(self.len + 1);
                    idx = self.find_vacant(hash);
                }
                self.slots[idx] = Some(Entry { hash, key, value });
                self.len += 1;
                None
            }
        }
    }

    /// Returns a mutable reference to the value for `key`, inserting the
    /// result of `default` first if the key is absent.
    pub fn get_or_insert_with<F: FnOnce() -> V>(&mut self, hash: u64, key: K, default: F) -> &mut V {
        let idx = match self.probe(hash, |k| *k == key) {
            Probe::Found(idx) => idx,
            Probe::Vacant(mut idx) => {
                if (self.len + 1) as f64 > self.slots.len() as f64 * GROW_THRESHOLD {
                    self.grow_for(self.len + 1);
                    idx = self.find_vacant(hash);
                }
                self.slots[idx] = Some(Entry {
                    hash,
                    key,
                    value: default(),
                });
                self.len += 1;
                idx
            }
        };
        match self.slots[idx] {
            Some(ref mut entry) => &mut entry.value,
            None => unreachable!("slot was just occupied"),
        }
    }

    /// Looks up the entry for `hash` whose key satisfies `eq`.
    pub fn find<F: Fn(&K) -> bool>(&self, hash: u64, eq: F) -> Option<(&K, &V)> {
        match self.probe(hash, eq) {
            Probe::Found(idx) => match self.slots[idx] {
                Some(ref entry) => Some((&entry.key, &entry.value)),
                None => unreachable!("probe answered Found for an empty slot"),
            },
            Probe::Vacant(_) => None,
        }
    }

    /// Mutable lookup.
    pub fn find_mut<F: Fn(&K) -> bool>(&mut self, hash: u64, eq: F) -> Option<&mut V> {
        match self.probe(hash, eq) {
            Probe::Found(idx) => match self.slots[idx] {
                Some(ref mut entry) => Some(&mut entry.value),
                None => unreachable!("probe answered Found for an empty slot"),
            },
            Probe::Vacant(_) => None,
        }
    }

    /// Removes the entry for `hash` whose key satisfies `eq`, then repairs
    /// the probe chain. Absent keys answer `None`, never an error.
    pub fn remove<F: Fn(&K) -> bool>(&mut self, hash: u64, eq: F) -> Option<(K, V)> {
        match self.probe(hash, eq) {
            Probe::Found(idx) => {
                let entry = match self.slots[idx].take() {
                    Some(entry) => entry,
                    None => unreachable!("probe answered Found for an empty slot"),
                };
                self.len -= 1;
                self.backward_shift(idx);
                Some((entry.key, entry.value))
            }
            Probe::Vacant(_) => None,
        }
    }

    /// Repairs the probe chain after the slot at `free` was vacated.
    ///
    /// Every subsequent occupied slot is inspected in probe order: an entry
    /// whose home position lies at or before the freed slot (cyclically) is
    /// shifted backward into it, and the free slot moves forward to the
    /// entry's old position. The walk stops at the first empty slot. This is
    /// what keeps the table tombstone-free.
    fn backward_shift(&mut self, mut free: usize) {
        let mask = self.mask;
        let mut cur = (free + 1) & mask;
        loop {
            let home = match self.slots[cur] {
                None => break,
                Some(ref e) => self.home(e.hash),
            };
            // The entry may move iff the freed slot lies on its probe path,
            // i.e. the cyclic distance home -> cur covers free -> cur.
            if (cur.wrapping_sub(home) & mask) >= (cur.wrapping_sub(free) & mask) {
                self.slots[free] = self.slots[cur].take();
                free = cur;
            }
            cur = (cur + 1) & mask;
        }
    }

    /// Keeps only entries for which `f` answers `true`.
    ///
    /// Visits slots in slot order. After a removal the vacated slot is
    /// re-examined rather than skipped, because the backward shift can move
    /// a not-yet-visited entry into it; an entry relocated by such a shift
    /// may consequently be offered to `f` a second time.
    pub fn retain<F: FnMut(&K, &mut V) -> bool>(&mut self, mut f: F) {
        let cap = self.slots.len();
        let mut idx = 0;
        while idx < cap {
            let remove = match self.slots[idx] {
                Some(ref mut e) => !f(&e.key, &mut e.value),
                None => false,
            };
            if remove {
                self.slots[idx] = None;
                self.len -= 1;
                self.backward_shift(idx);
            } else {
                idx += 1;
            }
        }
    }

    /// Drops every entry. Capacity is retained.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.len = 0;
    }

    /// Shrinks to the smallest capacity that keeps the current entries under
    /// the load-factor threshold. Shrinking never happens automatically.
    pub fn shrink_to_fit(&mut self) {
        let needed = (self.len as f64 / GROW_THRESHOLD).ceil() as usize;
        let target = needed.next_power_of_two().max(1);
        if target < self.slots.len() {
            self.rehash(target);
        }
    }

    /// Returns an iterator over the entries in slot order.
    ///
    /// Slot order is an implementation detail; the ordered containers are
    /// the place to go for insertion order.
    pub fn iter(&self) -> RawIter<'_, K, V> {
        RawIter {
            slots: self.slots.iter(),
            remaining: self.len,
        }
    }

    /// Mutable-value counterpart of [`iter`](RawTable::iter).
    pub fn iter_mut(&mut self) -> RawIterMut<'_, K, V> {
        RawIterMut {
            slots: self.slots.iter_mut(),
            remaining: self.len,
        }
    }

    /// Consumes the table, yielding every entry in slot order.
    pub fn into_entries(self) -> RawIntoIter<K, V> {
        RawIntoIter {
            remaining: self.len,
            slots: self.slots.into_vec().into_iter(),
        }
    }

    /// Grows so that `target_len` entries stay under the load factor. The
    /// new capacity never shrinks below the current one.
    fn grow_for(&mut self, target_len: usize) {
        let needed = (target_len as f64 / GROW_THRESHOLD).ceil() as usize;
        let new_cap = needed.next_power_of_two().max(self.slots.len());
        self.rehash(new_cap);
    }

    /// Reinserts every live entry into a fresh slot array. Capacity was
    /// sized to fit beforehand, so placement never cascades into another
    /// growth.
    fn rehash(&mut self, new_cap: usize) {
        let old = mem::replace(&mut self.slots, alloc_slots(new_cap));
        self.mask = new_cap - 1;
        for slot in old.into_vec() {
            if let Some(entry) = slot {
                let idx = self.find_vacant(entry.hash);
                self.slots[idx] = Some(entry);
            }
        }
    }

    /// First empty slot on the probe chain for `hash`.
    fn find_vacant(&self, hash: u64) -> usize {
        let mask = self.mask;
        let mut idx = self.home(hash);
        while self.slots[idx].is_some() {
            idx = (idx + 1) & mask;
        }
        idx
    }
}

fn alloc_slots<K, V>(cap: usize) -> Box<[Option<Entry<K, V>>]> {
    let mut slots = Vec::with_capacity(cap);
    slots.resize_with(cap, || None);
    slots.into_boxed_slice()
}

/// Borrowing slot-order iterator.
pub struct RawIter<'a, K, V> {
    slots: std::slice::Iter<'a, Option<Entry<K, V>>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for RawIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        for slot in self.slots.by_ref() {
            if let Some(entry) = slot {
                self.remaining -= 1;
                return Some((&entry.key, &entry.value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for RawIter<'_, K, V> {}

/// Mutable-value slot-order iterator.
pub struct RawIterMut<'a, K, V> {
    slots: std::slice::IterMut<'a, Option<Entry<K, V>>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for RawIterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<(&'a K, &'a mut V)> {
        for slot in self.slots.by_ref() {
            if let Some(entry) = slot {
                self.remaining -= 1;
                return Some((&entry.key, &mut entry.value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for RawIterMut<'_, K, V> {}

/// Owning slot-order iterator.
pub struct RawIntoIter<K, V> {
    slots: std::vec::IntoIter<Option<Entry<K, V>>>,
    remaining: usize,
}

impl<K, V> Iterator for RawIntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        for slot in self.slots.by_ref() {
            if let Some(entry) = slot {
                self.remaining -= 1;
                return Some((entry.key, entry.value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for RawIntoIter<K, V> {}
