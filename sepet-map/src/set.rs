//! Hash set over the raw open-addressing table.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use foldhash::fast::FixedState;

use crate::raw::{RawIntoIter, RawIter, RawTable};

/// Default capacity for `HashSet::new`.
const DEFAULT_CAPACITY: usize = 16;

/// A hash set sharing the map's probing and backward-shift deletion.
///
/// Iteration yields elements in slot order; use
/// [`OrderedSet`](crate::OrderedSet) when insertion order matters.
pub struct HashSet<T, S = FixedState> {
    table: RawTable<T, ()>,
    hasher: S,
}

impl<T> HashSet<T, FixedState>
where
    T: Hash + Eq,
{
    /// Creates an empty set with the default hasher.
    pub fn new() -> Self {
        Self::with_hasher(FixedState::default())
    }

    /// Creates an empty set able to hold roughly `cap` elements before
    /// growing.
    pub fn with_capacity(cap: usize) -> Self {
        Self::with_capacity_and_hasher(cap, FixedState::default())
    }
}

impl<T, S> HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    /// Creates an empty set with the given hasher.
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(DEFAULT_CAPACITY, hasher)
    }

    /// Creates an empty set with the given capacity and hasher.
    pub fn with_capacity_and_hasher(cap: usize, hasher: S) -> Self {
        HashSet {
            table: RawTable::with_capacity(cap),
            hasher,
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the set holds no elements.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the current slot count.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Adds an element, answering `true` if it was not already present.
    pub fn insert(&mut self, value: T) -> bool {
        let hash = self.hasher.hash_one(&value);
        self.table.insert(hash, value, ()).is_none()
    }

    /// Returns `true` if the set holds `value`.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hasher.hash_one(value);
        self.table.find(hash, |k| k.borrow() == value).is_some()
    }

    /// Returns the stored element equal to `value`.
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hasher.hash_one(value);
        self.table.find(hash, |k| k.borrow() == value).map(|(k, _)| k)
    }

    /// Removes `value`, answering `true` if it was present.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hasher.hash_one(value);
        self.table.remove(hash, |k| k.borrow() == value).is_some()
    }

    /// Removes and returns the stored element equal to `value`.
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hasher.hash_one(value);
        self.table.remove(hash, |k| k.borrow() == value).map(|(k, _)| k)
    }

    /// Keeps only the elements for which `f` answers `true`.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        self.table.retain(|k, _| f(k));
    }

    /// Drops every element, keeping capacity.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Shrinks the table as far as the load factor allows.
    pub fn shrink_to_fit(&mut self) {
        self.table.shrink_to_fit();
    }

    /// Iterates over the elements in slot order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.table.iter(),
        }
    }

    /// Iterates over elements present in `self` but not in `other`.
    pub fn difference<'a>(&'a self, other: &'a HashSet<T, S>) -> impl Iterator<Item = &'a T> {
        self.iter().filter(move |v| !other.contains(*v))
    }

    /// Iterates over elements present in both sets.
    pub fn intersection<'a>(&'a self, other: &'a HashSet<T, S>) -> impl Iterator<Item = &'a T> {
        self.iter().filter(move |v| other.contains(*v))
    }

    /// Iterates over elements present in either set.
    pub fn union<'a>(&'a self, other: &'a HashSet<T, S>) -> impl Iterator<Item = &'a T> {
        self.iter().chain(other.difference(self))
    }

    /// Returns `true` if the sets share no element.
    pub fn is_disjoint(&self, other: &HashSet<T, S>) -> bool {
        self.intersection(other).next().is_none()
    }

    /// Returns `true` if every element of `self` is in `other`.
    pub fn is_subset(&self, other: &HashSet<T, S>) -> bool {
        self.iter().all(|v| other.contains(v))
    }
}

impl<T> Default for HashSet<T, FixedState>
where
    T: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> fmt::Debug for HashSet<T, S>
where
    T: Hash + Eq + fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, S> PartialEq for HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T, S> Eq for HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
}

impl<T, S> Extend<T> for HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for HashSet<T, FixedState>
where
    T: Hash + Eq,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut set = HashSet::with_capacity(iter.size_hint().0);
        set.extend(iter);
        set
    }
}

/// Borrowing slot-order iterator over a set.
pub struct Iter<'a, T> {
    inner: RawIter<'a, T, ()>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning iterator over a set.
pub struct IntoIter<T> {
    inner: RawIntoIter<T, ()>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T, S> IntoIterator for HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.table.into_entries(),
        }
    }
}

impl<'a, T, S> IntoIterator for &'a HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
