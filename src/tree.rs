use std::{borrow::Borrow, cmp::Ordering::*, fmt::Debug};

use crate::{Arena, Color, Node, Tree};

impl<K, V> Tree<K, V> {
    pub fn new() -> Self {
        Tree {
            nodes: Arena::new(),
            root: None,
            len: 0,
        }
    }

    /// Number of stored entries, maintained incrementally.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every node at once; no per-node unlinking is needed because the
    /// arena owns all of them.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q> + Ord,
        Q: Ord + ?Sized,
    {
        self.get_key_value(key).is_some()
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q> + Ord,
        Q: Ord + ?Sized,
    {
        self.get_key_value(key).map(|(_, v)| v)
    }

    /// The stored value for `key`, or `default` when the key is absent.
    /// Looking up a missing key is not an error.
    pub fn get_or<'a, Q>(&'a self, key: &Q, default: &'a V) -> &'a V
    where
        K: Borrow<Q> + Ord,
        Q: Ord + ?Sized,
    {
        self.get(key).unwrap_or(default)
    }

    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q> + Ord,
        Q: Ord + ?Sized,
    {
        let mut cursor = self.root;
        while let Some(current) = cursor {
            let candidate = self.node(current);
            match key.cmp(candidate.key.borrow()) {
                Equal => return Some((&candidate.key, &candidate.value)),
                Less => cursor = candidate.left,
                Greater => cursor = candidate.right,
            }
        }
        None
    }

    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        let mut current = self.root?;
        while let Some(left) = self.node(current).left {
            current = left;
        }
        let first = self.node(current);
        Some((&first.key, &first.value))
    }

    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        let mut current = self.root?;
        while let Some(right) = self.node(current).right {
            current = right;
        }
        let last = self.node(current);
        Some((&last.key, &last.value))
    }
}

impl<K: Ord, V> Tree<K, V> {
    /// Inserts `key`, or revisits it when it is already present.
    ///
    /// Returns whether the stored value changed (or appeared), together with
    /// a reference to the value now stored under `key`:
    /// - new key: attaches a red leaf, rebalances, returns `(true, &value)`;
    /// - existing key, `overwrite`: replaces the value in place, no
    ///   structural change, returns `(true, &value)`;
    /// - existing key, `!overwrite`: leaves the value untouched and returns
    ///   `(false, &old_value)`. This is the designed "already there" signal,
    ///   not an error.
    pub fn insert(&mut self, key: K, value: V, overwrite: bool) -> (bool, &V) {
        let mut cursor = self.root;
        let mut parent = None;
        let mut left_of_parent = false;
        while let Some(current) = cursor {
            match key.cmp(&self.node(current).key) {
                Equal => {
                    if overwrite {
                        self.node_mut(current).value = value;
                    }
                    return (overwrite, &self.node(current).value);
                }
                Less => {
                    parent = Some(current);
                    left_of_parent = true;
                    cursor = self.node(current).left;
                }
                Greater => {
                    parent = Some(current);
                    left_of_parent = false;
                    cursor = self.node(current).right;
                }
            }
        }

        let node = self.nodes.alloc(Node::new(key, value, parent));
        match parent {
            None => {
                // The first node is the root: black, nothing to fix up.
                self.node_mut(node).color = Color::Black;
                self.root = Some(node);
            }
            Some(parent) => {
                if left_of_parent {
                    self.node_mut(parent).left = Some(node);
                } else {
                    self.node_mut(parent).right = Some(node);
                }
                self.insert_fixup(node);
            }
        }
        self.len += 1;
        (true, &self.node(node).value)
    }
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Tree::new()
    }
}

impl<K: Debug, V: Debug> Debug for Tree<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
