//! Recursive tree engine behind [`RadixMap`](super::RadixMap).
//!
//! Every node stores the full key that established its label together with
//! the label length, so the label is the slice `key[..index]` and a split
//! shares the refcounted key buffer instead of copying a substring. The
//! compression invariant is that a valueless node (other than the root)
//! always has at least two children; [`Node::store`] preserves it by
//! splitting mid-label and [`Node::remove`] restores it by reaping.

use smallvec::SmallVec;
use std::fmt;
use std::fmt::Write as _;

use super::ReferenceCounter;

/// A self-similar radix tree node: a label, an optional stored value, and
/// children in creation order, located by their first diverging byte.
#[derive(Clone)]
pub(crate) struct Node<V> {
    /// Full byte-string that established this node's label; shared with
    /// descendants created by splits.
    key: ReferenceCounter<[u8]>,
    /// Label length. The accumulated label from the root down to this node
    /// is exactly `key[..index]`.
    index: usize,
    /// Tagged Present/Absent state, distinct from any stored value.
    value: Option<V>,
    /// Children in creation order. Empty means "no children"; a valueless
    /// non-root node never holds fewer than two entries here.
    children: SmallVec<[Box<Node<V>>; 4]>,
}

impl<V> Node<V> {
    /// Creates the root node, which carries the zero-length label.
    pub(crate) fn empty_root() -> Self {
        Self {
            key: ReferenceCounter::from(&b""[..]),
            index: 0,
            value: None,
            children: SmallVec::new(),
        }
    }

    /// Creates a leaf whose label is the whole key.
    fn leaf(key: ReferenceCounter<[u8]>, value: V) -> Self {
        Self {
            index: key.len(),
            key,
            value: Some(value),
            children: SmallVec::new(),
        }
    }

    fn label(&self) -> &[u8] {
        &self.key[..self.index]
    }

    /// `true` when `key` equals this node's label byte-for-byte. The first
    /// `head` bytes were already verified by the ancestors and are skipped.
    fn matches_label(&self, key: &[u8], head: usize) -> bool {
        key.len() == self.index && key[head..] == self.key[head..self.index]
    }

    /// First offset at or after `head` where `key` diverges from the
    /// stored key, capped at the label length.
    fn divergence(&self, key: &[u8], head: usize) -> usize {
        let limit = self.index.min(key.len());
        let mut position = head;
        while position < limit && key[position] == self.key[position] {
            position += 1;
        }
        position
    }

    /// Position of the child whose label continues with `byte` at this
    /// node's label boundary.
    fn child_position(&self, byte: u8) -> Option<usize> {
        self.children
            .iter()
            .position(|child| child.key[self.index] == byte)
    }

    /// Inserts `value` under `key`, returning the previous value on
    /// overwrite.
    ///
    /// `head` counts the leading bytes of `key` already verified equal by
    /// this node's ancestors (0 at the root), so no byte is ever compared
    /// twice along one descent.
    pub(crate) fn store(&mut self, key: &ReferenceCounter<[u8]>, head: usize, value: V) -> Option<V> {
        if self.matches_label(key, head) {
            return self.value.replace(value);
        }
        let position = self.divergence(key, head);
        debug_assert!(
            position < self.index || key.len() > self.index,
            "divergence scan found neither a mismatch nor a longer key"
        );
        if position == self.index {
            // Label fully matched; descend or attach the remaining suffix.
            match self.child_position(key[self.index]) {
                Some(child) => self.children[child].store(key, self.index, value),
                None => {
                    self.children
                        .push(Box::new(Self::leaf(ReferenceCounter::clone(key), value)));
                    None
                }
            }
        } else {
            self.split(position);
            self.store(key, position, value)
        }
    }

    /// Splits this node at `position` inside its own label: the split-off
    /// child takes over the current label, value, and children unchanged,
    /// and this node shrinks to the shared prefix.
    fn split(&mut self, position: usize) {
        let lower = Self {
            key: ReferenceCounter::clone(&self.key),
            index: self.index,
            value: self.value.take(),
            children: std::mem::take(&mut self.children),
        };
        self.index = position;
        self.children.push(Box::new(lower));
    }

    /// Looks up the value stored under `key`, if any.
    pub(crate) fn retrieve(&self, key: &[u8], head: usize) -> Option<&V> {
        if self.matches_label(key, head) {
            return self.value.as_ref();
        }
        if self.children.is_empty() {
            return None;
        }
        if self.divergence(key, head) < self.index {
            return None;
        }
        self.child_position(key[self.index])
            .and_then(|child| self.children[child].retrieve(key, self.index))
    }

    /// Removes the value stored under `key`.
    ///
    /// Returns `None` both when the key was never present and when the
    /// matching node is already valueless. Reaping only runs after a real
    /// value came out, so a failed removal never restructures the tree.
    pub(crate) fn remove(&mut self, key: &[u8], head: usize) -> Option<V> {
        if self.matches_label(key, head) {
            return self.value.take();
        }
        if self.children.is_empty() {
            return None;
        }
        if self.divergence(key, head) < self.index {
            return None;
        }
        let position = self.child_position(key[self.index])?;
        let removed = self.children[position].remove(key, self.index);
        if removed.is_some() && self.children[position].value.is_none() {
            self.reap(position);
        }
        removed
    }

    /// Restores the compression invariant for the now-valueless child at
    /// `position`: unlink it when childless, splice it out when it has a
    /// single child. The grandchild already carries its full accumulated
    /// label, so promotion is a pointer move.
    fn reap(&mut self, position: usize) {
        match self.children[position].children.len() {
            0 => {
                self.children.remove(position);
            }
            1 => {
                if let Some(grandchild) = self.children[position].children.pop() {
                    self.children[position] = grandchild;
                }
            }
            _ => {}
        }
    }

    /// Collects `(key, value)` entries pre-order: a node's own value before
    /// its children, children in creation order.
    pub(crate) fn collect_entries<'a>(&'a self, entries: &mut Vec<(&'a [u8], &'a V)>) {
        if let Some(value) = &self.value {
            entries.push((self.label(), value));
        }
        for child in &self.children {
            child.collect_entries(entries);
        }
    }

    /// Consuming counterpart of [`Node::collect_entries`], yielding owned
    /// keys and moving values out.
    pub(crate) fn collect_owned_entries(self, entries: &mut Vec<(Vec<u8>, V)>) {
        let Self {
            key,
            index,
            value,
            children,
        } = self;
        if let Some(value) = value {
            entries.push((key[..index].to_vec(), value));
        }
        for child in children {
            child.collect_owned_entries(entries);
        }
    }

    /// Renders one line per node: two-space indent per depth, the quoted
    /// label, and ` => value` when a value is present. Intended for shape
    /// assertions in tests, not as a stable format.
    pub(crate) fn dump(&self, out: &mut String, depth: usize)
    where
        V: fmt::Debug,
    {
        for _ in 0..depth {
            out.push_str("  ");
        }
        let _ = write!(out, "\"{}\"", self.label().escape_ascii());
        if let Some(value) = &self.value {
            let _ = write!(out, " => {value:?}");
        }
        out.push('\n');
        for child in &self.children {
            child.dump(out, depth + 1);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
