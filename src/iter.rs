use std::{borrow::Borrow, iter::FusedIterator, ops::Index};

use crate::{Arena, Node, NodeId, Tree};

impl<K, V> Tree<K, V> {
    /// Gets an iterator over the entries of the map, sorted by key.
    ///
    /// Each call starts a fresh traversal from the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use griotte::Tree;
    ///
    /// let mut a = Tree::new();
    /// a.insert(2, "b", true);
    /// a.insert(1, "a", true);
    ///
    /// let entries: Vec<_> = a.iter().collect();
    /// assert_eq!(entries, [(&1, &"a"), (&2, &"b")]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        let mut stack = Vec::new();
        push_left_spine(&self.nodes, &mut stack, self.root);
        Iter {
            tree: self,
            stack,
            remaining: self.len,
        }
    }

    /// Gets an iterator over the keys of the map, in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use griotte::Tree;
    ///
    /// let mut a = Tree::new();
    /// a.insert(2, "b", true);
    /// a.insert(1, "a", true);
    ///
    /// let keys: Vec<_> = a.keys().cloned().collect();
    /// assert_eq!(keys, [1, 2]);
    /// ```
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the values of the map, in order by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use griotte::Tree;
    ///
    /// let mut a = Tree::new();
    /// a.insert(1, "hello", true);
    /// a.insert(2, "goodbye", true);
    ///
    /// let values: Vec<&str> = a.values().cloned().collect();
    /// assert_eq!(values, ["hello", "goodbye"]);
    /// ```
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }
}

/// Pushes `node` and the chain of its left descendants; the top of the
/// stack is then the least key not yet yielded.
fn push_left_spine<K, V>(
    nodes: &Arena<Node<K, V>>,
    stack: &mut Vec<NodeId>,
    node: Option<NodeId>,
) {
    let mut cursor = node;
    while let Some(id) = cursor {
        stack.push(id);
        cursor = nodes.get(id).left;
    }
}

/// In-order iterator over `(&K, &V)`, driven by an explicit stack of the
/// pending left spine.
pub struct Iter<'a, K, V> {
    tree: &'a Tree<K, V>,
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let tree: &'a Tree<K, V> = self.tree;
        let node = tree.node(id);
        push_left_spine(&tree.nodes, &mut self.stack, node.right);
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            tree: self.tree,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> IntoIterator for &'a Tree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

/// Owning in-order iterator. Moves nodes out of the arena one by one; it
/// does not pop-and-rebalance, the tree is gone already.
pub struct IntoIter<K, V> {
    nodes: Arena<Node<K, V>>,
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<K, V> IntoIterator for Tree<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Gets an owning iterator over the entries of the map, sorted by key.
    fn into_iter(self) -> IntoIter<K, V> {
        let Tree { nodes, root, len } = self;
        let mut stack = Vec::new();
        push_left_spine(&nodes, &mut stack, root);
        IntoIter {
            nodes,
            stack,
            remaining: len,
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        let id = self.stack.pop()?;
        // Queue the successor spine before the node leaves its slot.
        let right = self.nodes.get(id).right;
        push_left_spine(&self.nodes, &mut self.stack, right);
        let node = self.nodes.take(id);
        self.remaining -= 1;
        Some((node.key, node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}
impl<K, V> FusedIterator for Keys<'_, K, V> {}

pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<K: Ord, V> FromIterator<(K, V)> for Tree<K, V> {
    /// Constructs a `Tree<K, V>` from an iterator of key-value pairs.
    ///
    /// If the iterator produces any pairs with equal keys,
    /// all but one of the corresponding values will be dropped.
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Tree<K, V> {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, V> Extend<(K, V)> for Tree<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v, true);
        }
    }
}

impl<K, Q: ?Sized, V> Index<&Q> for Tree<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord,
{
    type Output = V;

    /// Returns a reference to the value corresponding to the supplied key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the `Tree`.
    #[inline]
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}
