use std::fmt::Debug;

use crate::{Color, NodeId};

/// One stored key/value pair and its position in the tree.
///
/// `parent` is plain upward navigation for the insert fix-up, never an
/// ownership relation; ownership is "reachable from the root" through
/// `left`/`right`.
pub(crate) struct Node<K, V> {
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) color: Color,
    pub(crate) key: K,
    pub(crate) value: V,
}

impl<K, V> Node<K, V> {
    /// A fresh leaf, red by default; the root insert path repaints it.
    pub(crate) fn new(key: K, value: V, parent: Option<NodeId>) -> Self {
        Node {
            parent,
            left: None,
            right: None,
            color: Color::Red,
            key,
            value,
        }
    }

    #[inline]
    pub(crate) fn is_black(&self) -> bool {
        self.color == Color::Black
    }

    #[inline]
    pub(crate) fn is_red(&self) -> bool {
        self.color == Color::Red
    }
}

impl<K, V> Debug for Node<K, V>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{:?}::({:?},{:?})",
            self.color, self.key, self.value
        ))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_node_is_a_red_leaf() {
        let node = Node::new(42, "forty two", None);
        assert!(node.is_red());
        assert!(!node.is_black());
        assert_eq!(None, node.parent);
        assert_eq!(None, node.left);
        assert_eq!(None, node.right);
    }

    #[test]
    fn debug_format() {
        let node = Node::new(1, "one", None);
        assert_eq!("Red::(1,\"one\")", format!("{node:?}"));
    }
}
