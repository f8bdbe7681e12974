//! Byte-keyed map backed by a radix tree.
//!
//! This module provides [`RadixMap`], a mutable associative container
//! whose operations cost O(k) in the key length k.
//!
//! # Overview
//!
//! `RadixMap` stores values under byte-string keys in a compressed-prefix
//! trie. Because no hashing is involved, lookup cost never depends on how
//! keys collide, which makes the structure immune to hash-flooding
//! algorithmic-complexity attacks while keeping a hash-map-compatible
//! surface.
//!
//! - O(k) get / insert / remove for a key of k bytes
//! - O(1) len and `is_empty`
//! - Pre-order iteration, children in creation order
//!
//! # Examples
//!
//! ```rust
//! use radixmap::radix::RadixMap;
//!
//! let mut map = RadixMap::new();
//! map.insert("aa", 1);
//! map.insert("ab", 2);
//! map.insert("a", 3);
//!
//! assert_eq!(map.get("a"), Some(&3));
//! assert_eq!(map.len(), 3);
//!
//! let keys: Vec<&[u8]> = map.keys().collect();
//! assert_eq!(keys, vec![&b"a"[..], b"aa", b"ab"]);
//! ```

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use super::ReferenceCounter;
use super::error::KeyNotFound;
use super::node::Node;
use super::strict::StrictEq;

// =============================================================================
// Default Policy
// =============================================================================

/// What a lookup miss resolves to: nothing, one fixed value, or a fresh
/// value per miss. One tagged choice, so a map can never carry both a
/// fixed default and a generator.
enum DefaultPolicy<V> {
    None,
    Fixed(V),
    Generator(ReferenceCounter<dyn Fn() -> V>),
}

impl<V: Clone> Clone for DefaultPolicy<V> {
    fn clone(&self) -> Self {
        match self {
            Self::None => Self::None,
            Self::Fixed(value) => Self::Fixed(value.clone()),
            Self::Generator(generate) => Self::Generator(ReferenceCounter::clone(generate)),
        }
    }
}

// =============================================================================
// RadixMap Definition
// =============================================================================

/// A byte-keyed map backed by a radix tree (compressed-prefix trie).
///
/// Keys are raw byte sequences compared byte-wise; any `AsRef<[u8]>` value
/// (string slices included) is accepted wherever a key is expected. The
/// cost of every operation is bounded by the key's length, not by the
/// number or the shape of the other stored keys.
///
/// Iteration visits entries pre-order (a node's own value before its
/// descendants) with siblings in creation order, so the first entry of a
/// non-empty map is the first-created key on the left-most valued path.
///
/// A map is single-threaded and exclusively owns its tree; [`Clone`]
/// produces a structurally independent deep copy.
///
/// # Time Complexity
///
/// | Operation      | Complexity |
/// |----------------|------------|
/// | `new`          | O(1)       |
/// | `get`          | O(k)       |
/// | `insert`       | O(k)       |
/// | `remove`       | O(k)       |
/// | `contains_key` | O(k)       |
/// | `len`          | O(1)       |
/// | `iter`         | O(n)       |
///
/// # Examples
///
/// ```rust
/// use radixmap::radix::RadixMap;
///
/// let mut map = RadixMap::new();
/// map.insert("abcd", 1);
/// map.insert("abce", 2);
///
/// assert_eq!(map.get("abcd"), Some(&1));
/// assert_eq!(map.get("abc"), None);
///
/// assert_eq!(map.remove("abcd"), Some(1));
/// assert_eq!(map.len(), 1);
/// ```
#[derive(Clone)]
pub struct RadixMap<V> {
    /// Root node, carrying the zero-length label; never removed, only
    /// replaced wholesale by `clear`.
    root: Node<V>,
    /// Number of stored entries.
    length: usize,
    /// Miss resolution for `get_or_default` and `values_at`.
    default: DefaultPolicy<V>,
}

impl<V> RadixMap<V> {
    /// Creates an empty map with no default; lookups on missing keys
    /// resolve to `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixmap::radix::RadixMap;
    ///
    /// let map: RadixMap<i32> = RadixMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: Node::empty_root(),
            length: 0,
            default: DefaultPolicy::None,
        }
    }

    /// Creates an empty map that resolves every miss to the same fixed
    /// value.
    ///
    /// The value is stored once; [`RadixMap::get_or_default`] borrows it,
    /// so every miss observes the identical value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixmap::radix::RadixMap;
    ///
    /// let map: RadixMap<i32> = RadixMap::with_default(42);
    /// assert_eq!(map.get_or_default("missing").as_deref(), Some(&42));
    /// ```
    #[must_use]
    pub fn with_default(value: V) -> Self {
        Self {
            root: Node::empty_root(),
            length: 0,
            default: DefaultPolicy::Fixed(value),
        }
    }

    /// Creates an empty map that resolves each miss by invoking the
    /// generator afresh, so misses observe independent values.
    ///
    /// A fixed default and a generator are mutually exclusive by
    /// construction: a map is built with one of the three constructors and
    /// the choice cannot be combined.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixmap::radix::RadixMap;
    ///
    /// let map: RadixMap<Vec<i32>> = RadixMap::with_default_fn(|| vec![1, 2]);
    /// assert_eq!(map.get_or_default("missing").as_deref(), Some(&vec![1, 2]));
    /// ```
    #[must_use]
    pub fn with_default_fn(generate: impl Fn() -> V + 'static) -> Self {
        Self {
            root: Node::empty_root(),
            length: 0,
            default: DefaultPolicy::Generator(ReferenceCounter::new(generate)),
        }
    }

    /// Returns the number of stored entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixmap::radix::RadixMap;
    ///
    /// let mut map = RadixMap::new();
    /// map.insert("a", 1);
    /// map.insert("b", 2);
    /// assert_eq!(map.len(), 2);
    /// ```
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the map contains no entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixmap::radix::RadixMap;
    ///
    /// let mut map = RadixMap::new();
    /// assert!(map.is_empty());
    /// map.insert("a", 1);
    /// assert!(!map.is_empty());
    /// ```
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Inserts `value` under `key`, returning the previous value when the
    /// key was already present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixmap::radix::RadixMap;
    ///
    /// let mut map = RadixMap::new();
    /// assert_eq!(map.insert("abc", 1), None);
    /// assert_eq!(map.insert("abc", 2), Some(1));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: impl AsRef<[u8]>, value: V) -> Option<V> {
        let key = ReferenceCounter::<[u8]>::from(key.as_ref());
        let previous = self.root.store(&key, 0, value);
        if previous.is_none() {
            self.length += 1;
        }
        previous
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// This is the raw lookup: a miss is `None` regardless of any default
    /// configured at construction. Use [`RadixMap::get_or_default`] for
    /// default-resolving lookups.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixmap::radix::RadixMap;
    ///
    /// let mut map = RadixMap::new();
    /// map.insert("abc", 1);
    /// assert_eq!(map.get("abc"), Some(&1));
    /// assert_eq!(map.get("def"), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&V> {
        self.root.retrieve(key.as_ref(), 0)
    }

    /// Looks up `key`, resolving a miss through the map's default policy.
    ///
    /// A stored value and a fixed default are borrowed (the fixed default
    /// is therefore identity-stable across misses); a generator produces a
    /// fresh owned value per miss. `None` is returned only when the key is
    /// absent and no default was configured.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixmap::radix::RadixMap;
    ///
    /// let mut map = RadixMap::with_default(0);
    /// map.insert("aa", 1);
    ///
    /// assert_eq!(map.get_or_default("aa").as_deref(), Some(&1));
    /// assert_eq!(map.get_or_default("zz").as_deref(), Some(&0));
    ///
    /// let plain: RadixMap<i32> = RadixMap::new();
    /// assert!(plain.get_or_default("zz").is_none());
    /// ```
    #[must_use]
    pub fn get_or_default(&self, key: impl AsRef<[u8]>) -> Option<Cow<'_, V>>
    where
        V: Clone,
    {
        match self.root.retrieve(key.as_ref(), 0) {
            Some(value) => Some(Cow::Borrowed(value)),
            None => match &self.default {
                DefaultPolicy::None => None,
                DefaultPolicy::Fixed(value) => Some(Cow::Borrowed(value)),
                DefaultPolicy::Generator(generate) => Some(Cow::Owned(generate())),
            },
        }
    }

    /// Returns `true` if a value is stored under `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixmap::radix::RadixMap;
    ///
    /// let mut map = RadixMap::new();
    /// map.insert("abc", 1);
    /// assert!(map.contains_key("abc"));
    /// assert!(!map.contains_key("ab"));
    /// ```
    #[must_use]
    pub fn contains_key(&self, key: impl AsRef<[u8]>) -> bool {
        self.get(key).is_some()
    }

    /// Removes the value stored under `key` and returns it.
    ///
    /// Returns `None` when no value was stored, whether the key never
    /// existed or only survives as a valueless branch point. Removal
    /// compacts the tree so that no valueless node keeps fewer than two
    /// children.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixmap::radix::RadixMap;
    ///
    /// let mut map = RadixMap::new();
    /// map.insert("abc", 1);
    /// assert_eq!(map.remove("abc"), Some(1));
    /// assert_eq!(map.remove("abc"), None);
    /// ```
    pub fn remove(&mut self, key: impl AsRef<[u8]>) -> Option<V> {
        let removed = self.root.remove(key.as_ref(), 0);
        if removed.is_some() {
            self.length -= 1;
        }
        removed
    }

    /// Removes every entry, keeping the default policy.
    ///
    /// Copies previously taken via [`Clone`] are unaffected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixmap::radix::RadixMap;
    ///
    /// let mut map = RadixMap::new();
    /// map.insert("a", 1);
    /// map.clear();
    /// assert!(map.is_empty());
    /// assert_eq!(map.get("a"), None);
    /// ```
    pub fn clear(&mut self) {
        self.root = Node::empty_root();
        self.length = 0;
    }

    /// Returns the value stored under `key`, or [`KeyNotFound`] carrying
    /// the key.
    ///
    /// Unlike [`RadixMap::get_or_default`], `fetch` never consults the
    /// map's default policy; a failed fetch leaves the map unmodified.
    ///
    /// # Errors
    ///
    /// [`KeyNotFound`] when no value is stored under `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixmap::radix::RadixMap;
    ///
    /// let mut map = RadixMap::new();
    /// map.insert("aa", 1);
    ///
    /// assert_eq!(map.fetch("aa"), Ok(&1));
    /// assert!(map.fetch("aac").is_err());
    /// ```
    pub fn fetch(&self, key: impl AsRef<[u8]>) -> Result<&V, KeyNotFound> {
        let key = key.as_ref();
        self.root
            .retrieve(key, 0)
            .ok_or_else(|| KeyNotFound::new(key))
    }

    /// Returns the value stored under `key`, or the supplied fallback.
    ///
    /// A stored value is borrowed; the fallback is returned owned. A
    /// fallback value and a fallback function cannot be combined: this
    /// method and [`RadixMap::fetch_or_else`] are separate entry points.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixmap::radix::RadixMap;
    ///
    /// let mut map = RadixMap::new();
    /// map.insert("aa", 1);
    ///
    /// assert_eq!(*map.fetch_or("aa", 9), 1);
    /// assert_eq!(*map.fetch_or("zz", 9), 9);
    /// ```
    pub fn fetch_or(&self, key: impl AsRef<[u8]>, fallback: V) -> Cow<'_, V>
    where
        V: Clone,
    {
        match self.root.retrieve(key.as_ref(), 0) {
            Some(value) => Cow::Borrowed(value),
            None => Cow::Owned(fallback),
        }
    }

    /// Returns the value stored under `key`, or the result of invoking the
    /// fallback function with the missed key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixmap::radix::RadixMap;
    ///
    /// let map: RadixMap<usize> = RadixMap::new();
    /// assert_eq!(*map.fetch_or_else("abc", |key| key.len()), 3);
    /// ```
    pub fn fetch_or_else(
        &self,
        key: impl AsRef<[u8]>,
        fallback: impl FnOnce(&[u8]) -> V,
    ) -> Cow<'_, V>
    where
        V: Clone,
    {
        let key = key.as_ref();
        match self.root.retrieve(key, 0) {
            Some(value) => Cow::Borrowed(value),
            None => Cow::Owned(fallback(key)),
        }
    }

    /// Looks up each key in order, resolving misses through the default
    /// policy exactly like [`RadixMap::get_or_default`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixmap::radix::RadixMap;
    ///
    /// let mut map = RadixMap::new();
    /// map.insert("aa", 1);
    /// map.insert("bc", 4);
    ///
    /// let values = map.values_at(["bc", "aa", "zz"]);
    /// assert_eq!(values[0].as_deref(), Some(&4));
    /// assert_eq!(values[1].as_deref(), Some(&1));
    /// assert!(values[2].is_none());
    /// ```
    pub fn values_at<K, I>(&self, keys: I) -> Vec<Option<Cow<'_, V>>>
    where
        V: Clone,
        K: AsRef<[u8]>,
        I: IntoIterator<Item = K>,
    {
        keys.into_iter()
            .map(|key| self.get_or_default(key))
            .collect()
    }

    /// Removes every entry for which the predicate returns `true`,
    /// returning the number of removed entries.
    ///
    /// The matching keys are collected from one traversal snapshot before
    /// any removal happens, so the predicate never observes a partially
    /// mutated tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixmap::radix::RadixMap;
    ///
    /// let mut map: RadixMap<i32> =
    ///     [("aa", 1), ("ab", 2), ("bb", 3)].into_iter().collect();
    /// assert_eq!(map.delete_if(|_, value| *value > 1), 2);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn delete_if<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&[u8], &V) -> bool,
    {
        let mut doomed = Vec::new();
        for (key, value) in self.iter() {
            if predicate(key, value) {
                doomed.push(key.to_vec());
            }
        }
        for key in &doomed {
            self.remove(key);
        }
        doomed.len()
    }

    /// Keeps only the entries for which the predicate returns `true`.
    ///
    /// The complement of [`RadixMap::delete_if`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixmap::radix::RadixMap;
    ///
    /// let mut map: RadixMap<i32> =
    ///     [("aa", 1), ("ab", 2), ("bb", 3)].into_iter().collect();
    /// map.retain(|_, value| *value > 1);
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&[u8], &V) -> bool,
    {
        self.delete_if(|key, value| !predicate(key, value));
    }

    /// Returns a copy with every entry matching the predicate removed,
    /// leaving the receiver unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixmap::radix::RadixMap;
    ///
    /// let map: RadixMap<i32> = [("aa", 1), ("bb", 3)].into_iter().collect();
    /// let filtered = map.reject(|_, value| *value > 1);
    ///
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(filtered.len(), 1);
    /// assert_eq!(filtered.get("aa"), Some(&1));
    /// ```
    #[must_use]
    pub fn reject<F>(&self, predicate: F) -> Self
    where
        V: Clone,
        F: FnMut(&[u8], &V) -> bool,
    {
        let mut filtered = self.clone();
        filtered.delete_if(predicate);
        filtered
    }

    /// Removes every entry matching the predicate, reporting whether
    /// anything was removed; `false` signals a no-op filter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixmap::radix::RadixMap;
    ///
    /// let mut map: RadixMap<i32> = [("aa", 1), ("bb", 3)].into_iter().collect();
    /// assert!(map.reject_in_place(|_, value| *value > 1));
    /// assert!(!map.reject_in_place(|_, value| *value > 1));
    /// ```
    pub fn reject_in_place<F>(&mut self, predicate: F) -> bool
    where
        F: FnMut(&[u8], &V) -> bool,
    {
        self.delete_if(predicate) > 0
    }

    /// Replaces the contents with `other`'s entries, inserted in `other`'s
    /// iteration order. The receiver's default policy is kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixmap::radix::RadixMap;
    ///
    /// let mut map: RadixMap<i32> = [("aa", 1)].into_iter().collect();
    /// let other: RadixMap<i32> = [("bz", 3), ("kk", 4)].into_iter().collect();
    ///
    /// map.replace(&other);
    /// assert_eq!(map.get("aa"), None);
    /// assert_eq!(map.get("bz"), Some(&3));
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn replace(&mut self, other: &Self)
    where
        V: Clone,
    {
        self.clear();
        for (key, value) in other.iter() {
            self.insert(key, value.clone());
        }
    }

    /// Returns the first key, in iteration order, whose value compares
    /// equal to `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixmap::radix::RadixMap;
    ///
    /// let map: RadixMap<i32> = [("aa", 1), ("bb", 3)].into_iter().collect();
    /// assert_eq!(map.key_of(&3), Some(&b"bb"[..]));
    /// assert_eq!(map.key_of(&7), None);
    /// ```
    #[must_use]
    pub fn key_of(&self, value: &V) -> Option<&[u8]>
    where
        V: PartialEq,
    {
        self.iter()
            .find(|(_, candidate)| *candidate == value)
            .map(|(key, _)| key)
    }

    /// Removes and returns the first entry in iteration order, or `None`
    /// on an empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixmap::radix::RadixMap;
    ///
    /// let mut map: RadixMap<i32> = [("b", 2), ("a", 1)].into_iter().collect();
    /// // "b" was created first, so pre-order yields it first.
    /// assert_eq!(map.pop_first(), Some((b"b".to_vec(), 2)));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn pop_first(&mut self) -> Option<(Vec<u8>, V)> {
        let key = self.iter().next().map(|(key, _)| key.to_vec())?;
        let value = self.remove(&key)?;
        Some((key, value))
    }

    /// Returns `true` if any stored value compares equal to `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixmap::radix::RadixMap;
    ///
    /// let map: RadixMap<i32> = [("aa", 1), ("bb", 3)].into_iter().collect();
    /// assert!(map.contains_value(&3));
    /// assert!(!map.contains_value(&7));
    /// ```
    #[must_use]
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values().any(|candidate| candidate == value)
    }

    /// Compares two maps under [`StrictEq`]: same number of entries and,
    /// for every key, strictly equal values.
    ///
    /// `==` is the loose comparison; this one additionally distinguishes
    /// representations (for floats, `0.0` from `-0.0`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixmap::radix::RadixMap;
    ///
    /// let positive: RadixMap<f64> = [("a", 0.0)].into_iter().collect();
    /// let negative: RadixMap<f64> = [("a", -0.0)].into_iter().collect();
    ///
    /// assert!(positive == negative);
    /// assert!(!positive.strict_equals(&negative));
    /// ```
    #[must_use]
    pub fn strict_equals(&self, other: &Self) -> bool
    where
        V: StrictEq,
    {
        if self.length != other.length {
            return false;
        }
        self.iter().all(|(key, value)| {
            other
                .get(key)
                .is_some_and(|other_value| value.strict_eq(other_value))
        })
    }

    /// Returns an iterator over `(key, value)` entries in pre-order, with
    /// siblings in creation order.
    ///
    /// The iterator snapshots the entries, so it stays valid and finite
    /// regardless of later mutation, and calling `iter` again restarts
    /// from the beginning.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixmap::radix::RadixMap;
    ///
    /// let map: RadixMap<i32> = [("aa", 1), ("ab", 2), ("a", 5)].into_iter().collect();
    /// let entries: Vec<(&[u8], &i32)> = map.iter().collect();
    /// assert_eq!(entries, vec![(&b"a"[..], &5), (b"aa", &1), (b"ab", &2)]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> RadixMapIterator<'_, V> {
        let mut entries = Vec::with_capacity(self.length);
        self.root.collect_entries(&mut entries);
        RadixMapIterator {
            entries,
            current_index: 0,
        }
    }

    /// Returns an iterator over keys in iteration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixmap::radix::RadixMap;
    ///
    /// let map: RadixMap<i32> = [("aa", 1), ("ab", 2)].into_iter().collect();
    /// let keys: Vec<&[u8]> = map.keys().collect();
    /// assert_eq!(keys, vec![&b"aa"[..], b"ab"]);
    /// ```
    pub fn keys(&self) -> impl Iterator<Item = &[u8]> {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over values in iteration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixmap::radix::RadixMap;
    ///
    /// let map: RadixMap<i32> = [("aa", 1), ("ab", 2)].into_iter().collect();
    /// let sum: i32 = map.values().sum();
    /// assert_eq!(sum, 3);
    /// ```
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    /// Collects the entries into a `HashMap`, cloning keys and values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixmap::radix::RadixMap;
    ///
    /// let map: RadixMap<i32> = [("aa", 1)].into_iter().collect();
    /// let hash_map = map.to_hash_map();
    /// assert_eq!(hash_map.get(&b"aa".to_vec()), Some(&1));
    /// ```
    #[must_use]
    pub fn to_hash_map(&self) -> HashMap<Vec<u8>, V>
    where
        V: Clone,
    {
        self.iter()
            .map(|(key, value)| (key.to_vec(), value.clone()))
            .collect()
    }

    /// Renders the tree structure as text: one line per node, two-space
    /// indent per depth, the node's accumulated label, and its value when
    /// present.
    ///
    /// Intended for asserting tree shape in tests, for example that an
    /// insert-delete-reinsert cycle reproduces the original structure.
    /// Not a stable serialization format.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixmap::radix::RadixMap;
    ///
    /// let map: RadixMap<i32> = [("aa", 1), ("ab", 2)].into_iter().collect();
    /// // Root, the valueless "a" branch, and the two leaves.
    /// assert_eq!(map.dump_tree().lines().count(), 4);
    /// ```
    #[must_use]
    pub fn dump_tree(&self) -> String
    where
        V: fmt::Debug,
    {
        let mut rendered = String::new();
        self.root.dump(&mut rendered, 0);
        rendered
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over `(key, value)` entries of a [`RadixMap`].
pub struct RadixMapIterator<'a, V> {
    entries: Vec<(&'a [u8], &'a V)>,
    current_index: usize,
}

impl<'a, V> Iterator for RadixMapIterator<'a, V> {
    type Item = (&'a [u8], &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_index >= self.entries.len() {
            None
        } else {
            let entry = self.entries[self.current_index];
            self.current_index += 1;
            Some(entry)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.entries.len().saturating_sub(self.current_index);
        (remaining, Some(remaining))
    }
}

impl<V> ExactSizeIterator for RadixMapIterator<'_, V> {
    fn len(&self) -> usize {
        self.entries.len().saturating_sub(self.current_index)
    }
}

/// An owning iterator over `(key, value)` entries of a [`RadixMap`].
pub struct RadixMapIntoIterator<V> {
    entries: std::vec::IntoIter<(Vec<u8>, V)>,
}

impl<V> Iterator for RadixMapIntoIterator<V> {
    type Item = (Vec<u8>, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<V> ExactSizeIterator for RadixMapIntoIterator<V> {
    fn len(&self) -> usize {
        self.entries.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<V> Default for RadixMap<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: AsRef<[u8]>, V> FromIterator<(K, V)> for RadixMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: AsRef<[u8]>, V> Extend<(K, V)> for RadixMap<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<V> IntoIterator for RadixMap<V> {
    type Item = (Vec<u8>, V);
    type IntoIter = RadixMapIntoIterator<V>;

    fn into_iter(self) -> Self::IntoIter {
        let mut entries = Vec::with_capacity(self.length);
        self.root.collect_owned_entries(&mut entries);
        RadixMapIntoIterator {
            entries: entries.into_iter(),
        }
    }
}

impl<'a, V> IntoIterator for &'a RadixMap<V> {
    type Item = (&'a [u8], &'a V);
    type IntoIter = RadixMapIterator<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: PartialEq> PartialEq for RadixMap<V> {
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length {
            return false;
        }
        self.iter()
            .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<V: Eq> Eq for RadixMap<V> {}

impl<V: fmt::Debug> fmt::Debug for RadixMap<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_map()
            .entries(
                self.iter()
                    .map(|(key, value)| (key.escape_ascii().to_string(), value)),
            )
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
