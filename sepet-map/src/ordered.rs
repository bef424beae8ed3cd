//! Insertion-ordered map and set.
//!
//! Both types layer a dense, gap-free order array over a hash container.
//! The order array is the single source of truth for iteration order; the
//! hash side answers membership and value lookups. Every public mutator
//! updates both halves or neither, so `order.len()` always equals the hash
//! container's length once a call returns.
//!
//! Keys live in both halves, which is why `K: Clone` is required. Removal
//! by key costs O(n) for the order scan; removal by order index skips the
//! scan but still shifts the order array.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use foldhash::fast::FixedState;

use crate::map::HashMap;
use crate::set::HashSet;

/// A hash map that iterates in insertion order.
pub struct OrderedMap<K, V, S = FixedState> {
    order: Vec<K>,
    map: HashMap<K, V, S>,
}

impl<K, V> OrderedMap<K, V, FixedState>
where
    K: Hash + Eq + Clone,
{
    /// Creates an empty map with the default hasher.
    pub fn new() -> Self {
        OrderedMap {
            order: Vec::new(),
            map: HashMap::new(),
        }
    }

    /// Creates an empty map able to hold roughly `cap` entries before
    /// growing.
    pub fn with_capacity(cap: usize) -> Self {
        OrderedMap {
            order: Vec::with_capacity(cap),
            map: HashMap::with_capacity(cap),
        }
    }
}

impl<K, V, S> OrderedMap<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    /// Creates an empty map with the given hasher.
    pub fn with_hasher(hasher: S) -> Self {
        OrderedMap {
            order: Vec::new(),
            map: HashMap::with_hasher(hasher),
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.order.len(), self.map.len());
        self.order.len()
    }

    /// Returns `true` if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Inserts a key-value pair, returning the previous value if the key
    /// was already present. New keys append to the iteration order;
    /// existing keys keep their position.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let old = self.map.insert(key.clone(), value);
        if old.is_none() {
            self.order.push(key);
        }
        old
    }

    /// Inserts a key-value pair at a specific position in the iteration
    /// order (clamped to the current length). If the key was already
    /// present, its existing order entry is moved to `index`. O(n).
    pub fn insert_at(&mut self, index: usize, key: K, value: V) -> Option<V> {
        let old = self.map.insert(key.clone(), value);
        if old.is_none() {
            let index = index.min(self.order.len());
            self.order.insert(index, key);
        } else if let Some(cur) = self.position(&key) {
            self.order.remove(cur);
            let index = index.min(self.order.len());
            self.order.insert(index, key);
        }
        old
    }

    /// Returns a reference to the value for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(key)
    }

    /// Returns a mutable reference to the value for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get_mut(key)
    }

    /// Returns `true` if the map holds an entry for `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Returns the entry at position `index` in the iteration order.
    pub fn get_index(&self, index: usize) -> Option<(&K, &V)> {
        let key = self.order.get(index)?;
        match self.map.get_key_value(key) {
            Some(pair) => Some(pair),
            None => unreachable!("order array and hash table out of sync"),
        }
    }

    /// Returns the order position of `key`. O(n).
    pub fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.order.iter().position(|k| k.borrow() == key)
    }

    /// Returns the first entry in iteration order.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.get_index(0)
    }

    /// Returns the last entry in iteration order.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.len().checked_sub(1).and_then(|i| self.get_index(i))
    }

    /// Removes the entry for `key`, returning its value. O(n) for the
    /// order scan even though the hash side is O(1) on average.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let value = self.map.remove(key)?;
        match self.order.iter().position(|k| k.borrow() == key) {
            Some(idx) => {
                self.order.remove(idx);
            }
            None => unreachable!("order array and hash table out of sync"),
        }
        Some(value)
    }

    /// Removes the entry at position `index` in the iteration order,
    /// returning the key and value.
    pub fn remove_at(&mut self, index: usize) -> Option<(K, V)> {
        if index >= self.order.len() {
            return None;
        }
        let key = self.order.remove(index);
        match self.map.remove_entry(&key) {
            Some(pair) => Some(pair),
            None => unreachable!("order array and hash table out of sync"),
        }
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.order.clear();
        self.map.clear();
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> OrderedIter<'_, K, V, S> {
        OrderedIter {
            keys: self.order.iter(),
            map: &self.map,
        }
    }

    /// Iterates over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }

    /// Iterates over the values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }
}

impl<K, V> Default for OrderedMap<K, V, FixedState>
where
    K: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> fmt::Debug for OrderedMap<K, V, S>
where
    K: Hash + Eq + Clone + fmt::Debug,
    V: fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S> Extend<(K, V)> for OrderedMap<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for OrderedMap<K, V, FixedState>
where
    K: Hash + Eq + Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = OrderedMap::new();
        map.extend(iter);
        map
    }
}

/// Insertion-order iterator over an [`OrderedMap`].
pub struct OrderedIter<'a, K, V, S> {
    keys: std::slice::Iter<'a, K>,
    map: &'a HashMap<K, V, S>,
}

impl<'a, K, V, S> Iterator for OrderedIter<'a, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        let key = self.keys.next()?;
        match self.map.get(key) {
            Some(value) => Some((key, value)),
            None => unreachable!("order array and hash table out of sync"),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<K, V, S> ExactSizeIterator for OrderedIter<'_, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
}

/// A hash set that iterates in insertion order.
pub struct OrderedSet<T, S = FixedState> {
    order: Vec<T>,
    set: HashSet<T, S>,
}

impl<T> OrderedSet<T, FixedState>
where
    T: Hash + Eq + Clone,
{
    /// Creates an empty set with the default hasher.
    pub fn new() -> Self {
        OrderedSet {
            order: Vec::new(),
            set: HashSet::new(),
        }
    }

    /// Creates an empty set able to hold roughly `cap` elements before
    /// growing.
    pub fn with_capacity(cap: usize) -> Self {
        OrderedSet {
            order: Vec::with_capacity(cap),
            set: HashSet::with_capacity(cap),
        }
    }
}

impl<T, S> OrderedSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher,
{
    /// Creates an empty set with the given hasher.
    pub fn with_hasher(hasher: S) -> Self {
        OrderedSet {
            order: Vec::new(),
            set: HashSet::with_hasher(hasher),
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.order.len(), self.set.len());
        self.order.len()
    }

    /// Returns `true` if the set holds no elements.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Adds an element at the end of the iteration order, answering `true`
    /// if it was not already present.
    pub fn insert(&mut self, value: T) -> bool {
        if self.set.insert(value.clone()) {
            self.order.push(value);
            true
        } else {
            false
        }
    }

    /// Adds an element at a specific position in the iteration order
    /// (clamped). An already-present element is moved to `index`. Answers
    /// `true` if the element was newly added. O(n).
    pub fn insert_at(&mut self, index: usize, value: T) -> bool {
        let added = self.set.insert(value.clone());
        if !added {
            if let Some(cur) = self.order.iter().position(|v| *v == value) {
                self.order.remove(cur);
            }
        }
        let index = index.min(self.order.len());
        self.order.insert(index, value);
        added
    }

    /// Returns `true` if the set holds `value`.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.set.contains(value)
    }

    /// Returns the element at position `index` in the iteration order.
    pub fn get_index(&self, index: usize) -> Option<&T> {
        self.order.get(index)
    }

    /// Returns the order position of `value`. O(n).
    pub fn position<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.order.iter().position(|v| v.borrow() == value)
    }

    /// Removes `value`, answering `true` if it was present. O(n).
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if !self.set.remove(value) {
            return false;
        }
        match self.order.iter().position(|v| v.borrow() == value) {
            Some(idx) => {
                self.order.remove(idx);
            }
            None => unreachable!("order array and hash set out of sync"),
        }
        true
    }

    /// Removes and returns the element at position `index` in the
    /// iteration order.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.order.len() {
            return None;
        }
        let value = self.order.remove(index);
        if !self.set.remove(&value) {
            unreachable!("order array and hash set out of sync");
        }
        Some(value)
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        self.order.clear();
        self.set.clear();
    }

    /// Iterates over the elements in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.order.iter()
    }
}

impl<T> Default for OrderedSet<T, FixedState>
where
    T: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> fmt::Debug for OrderedSet<T, S>
where
    T: Hash + Eq + Clone + fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, S> Extend<T> for OrderedSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for OrderedSet<T, FixedState>
where
    T: Hash + Eq + Clone,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = OrderedSet::new();
        set.extend(iter);
        set
    }
}

impl<'a, T, S> IntoIterator for &'a OrderedSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher,
{
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> std::slice::Iter<'a, T> {
        self.iter()
    }
}
