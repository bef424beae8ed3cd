//! Hash map over the raw open-addressing table.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::ops::Index;

use foldhash::fast::FixedState;

use crate::raw::{RawIntoIter, RawIter, RawIterMut, RawTable};

/// Default capacity for `HashMap::new`.
const DEFAULT_CAPACITY: usize = 16;

/// A hash map with linear probing and backward-shift deletion.
///
/// Lookups for absent keys are never errors: `get`, `remove` and
/// `contains_key` answer the absent indicator. Iteration yields entries in
/// slot order, which is unspecified; use
/// [`OrderedMap`](crate::OrderedMap) when insertion order matters.
pub struct HashMap<K, V, S = FixedState> {
    table: RawTable<K, V>,
    hasher: S,
}

impl<K, V> HashMap<K, V, FixedState>
where
    K: Hash + Eq,
{
    /// Creates an empty map with the default hasher.
    pub fn new() -> Self {
        Self::with_hasher(FixedState::default())
    }

    /// Creates an empty map able to hold roughly `cap` entries before
    /// growing.
    pub fn with_capacity(cap: usize) -> Self {
        Self::with_capacity_and_hasher(cap, FixedState::default())
    }
}

impl<K, V, S> HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Creates an empty map with the given hasher.
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(DEFAULT_CAPACITY, hasher)
    }

    /// Creates an empty map with the given capacity and hasher.
    pub fn with_capacity_and_hasher(cap: usize, hasher: S) -> Self {
        HashMap {
            table: RawTable::with_capacity(cap),
            hasher,
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the current slot count.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    fn hash_of<Q>(&self, key: &Q) -> u64
    where
        Q: Hash + ?Sized,
    {
        self.hasher.hash_one(key)
    }

    /// Inserts a key-value pair, returning the previous value if the key
    /// was already present.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let hash = self.hash_of(&key);
        self.table.insert(hash, key, value)
    }

    /// Returns a reference to the value for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hash_of(key);
        self.table.find(hash, |k| k.borrow() == key).map(|(_, v)| v)
    }

    /// Returns the stored key and value for `key`.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hash_of(key);
        self.table.find(hash, |k| k.borrow() == key)
    }

    /// Returns a mutable reference to the value for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hash_of(key);
        self.table.find_mut(hash, |k| k.borrow() == key)
    }

    /// Returns a mutable reference to the value for `key`, inserting the
    /// result of `default` first if the key is absent.
    pub fn get_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let hash = self.hash_of(&key);
        self.table.get_or_insert_with(hash, key, default)
    }

    /// Returns `true` if the map holds an entry for `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Removes the entry for `key`, returning its value. Absent keys answer
    /// `None`.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes the entry for `key`, returning the stored key and value.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hash_of(key);
        self.table.remove(hash, |k| k.borrow() == key)
    }

    /// Keeps only the entries for which `f` answers `true`.
    pub fn retain<F: FnMut(&K, &mut V) -> bool>(&mut self, f: F) {
        self.table.retain(f);
    }

    /// Drops every entry, keeping capacity.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Shrinks the table as far as the load factor allows.
    pub fn shrink_to_fit(&mut self) {
        self.table.shrink_to_fit();
    }

    /// Iterates over entries in slot order.
    pub fn iter(&self) -> RawIter<'_, K, V> {
        self.table.iter()
    }

    /// Iterates over entries with mutable values, in slot order.
    pub fn iter_mut(&mut self) -> RawIterMut<'_, K, V> {
        self.table.iter_mut()
    }

    /// Iterates over the keys in slot order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(k, _)| k)
    }

    /// Iterates over the values in slot order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }

    /// Iterates over mutable values in slot order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.iter_mut().map(|(_, v)| v)
    }
}

impl<K, V> Default for HashMap<K, V, FixedState>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> fmt::Debug for HashMap<K, V, S>
where
    K: Hash + Eq + fmt::Debug,
    V: fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S> PartialEq for HashMap<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<K, V, S> Eq for HashMap<K, V, S>
where
    K: Hash + Eq,
    V: Eq,
    S: BuildHasher,
{
}

impl<K, V, S> Extend<(K, V)> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for HashMap<K, V, FixedState>
where
    K: Hash + Eq,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = HashMap::with_capacity(iter.size_hint().0);
        map.extend(iter);
        map
    }
}

impl<K, Q, V, S> Index<&Q> for HashMap<K, V, S>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Output = V;

    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K, V, S> IntoIterator for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Item = (K, V);
    type IntoIter = RawIntoIter<K, V>;

    fn into_iter(self) -> RawIntoIter<K, V> {
        self.table.into_entries()
    }
}

impl<'a, K, V, S> IntoIterator for &'a HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Item = (&'a K, &'a V);
    type IntoIter = RawIter<'a, K, V>;

    fn into_iter(self) -> RawIter<'a, K, V> {
        self.iter()
    }
}
