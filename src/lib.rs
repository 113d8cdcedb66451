//! An ordered map and set backed by a red-black tree whose nodes live in an
//! arena and point at each other through plain indices.
//!
//! The balancing algorithm is the insertion half of the linux kernel's
//! red-black tree, restated over arena handles instead of tagged pointers.
//! The container is insert/lookup/iterate only: there is no erase, so the
//! arena never frees individual slots and a handle stays valid for the life
//! of the tree.

mod arena;
mod balance;
mod iter;
mod node;
mod set;
mod tree;

#[cfg(test)]
pub(crate) mod check;

pub use iter::{IntoIter, Iter, Keys, Values};
pub use set::SetIter;

pub(crate) use arena::{Arena, NodeId};
pub(crate) use node::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// An ordered map keyed by `K` under its `Ord`.
///
/// The five red-black invariants bound the height at `2 * log2(len + 1)`, so
/// [`Tree::insert`] and [`Tree::get`] are O(log n) worst case. Nodes are only
/// ever added; dropping or [`Tree::clear`]-ing the map frees the whole arena
/// in one go.
pub struct Tree<K, V> {
    nodes: Arena<Node<K, V>>,
    root: Option<NodeId>,
    len: usize,
}

/// An ordered set; a [`Tree`] with unit values.
pub struct Set<T> {
    tree: Tree<T, ()>,
}
