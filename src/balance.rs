use crate::{Color, Node, NodeId, Tree};

// Insert fix-up, after the linux kernel's rb_insert_color. The cases keep
// the kernel's numbering; each rotation is spelled out as: capture the old
// links, rewire the child links, move the lifted node's external parent
// link, then fix the parent back-references.

impl<K, V> Tree<K, V> {
    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node<K, V> {
        self.nodes.get(id)
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        self.nodes.get_mut(id)
    }

    /// Restores the red-black invariants after `node` was attached as a red
    /// leaf. Ascends two levels per recoloring round and stops after at most
    /// one rotation pair, so it runs in O(log n).
    pub(crate) fn insert_fixup(&mut self, mut node: NodeId) {
        loop {
            /*
             * Loop invariant: node is red.
             */
            let Some(parent) = self.node(node).parent else {
                /*
                 * The inserted node is root. Either this is the
                 * first node, or we recursed at Case 1 below and
                 * are no longer violating 4).
                 */
                self.node_mut(node).color = Color::Black;
                break;
            };

            /*
             * If there is a black parent, we are done.
             * Otherwise, take some corrective action as,
             * per 4), we don't want a red root or two
             * consecutive red nodes.
             */
            if self.node(parent).is_black() {
                break;
            }

            // A red parent is never the root, per 2).
            let gparent = self
                .node(parent)
                .parent
                .expect("a red parent cannot be the root");

            if Some(parent) == self.node(gparent).left {
                let uncle = self.node(gparent).right;
                if let Some(uncle) = uncle.filter(|&u| self.node(u).is_red()) {
                    /*
                     * Case 1 - node's uncle is red (color flips).
                     *
                     *       G            g
                     *      / \          / \
                     *     p   u  -->   P   U
                     *    /            /
                     *   n            n
                     *
                     * However, since g's parent might be red, and
                     * 4) does not allow this, we need to recurse
                     * at g.
                     */
                    self.node_mut(uncle).color = Color::Black;
                    self.node_mut(parent).color = Color::Black;
                    self.node_mut(gparent).color = Color::Red;
                    node = gparent;
                    continue;
                }

                let parent = if Some(node) == self.node(parent).right {
                    /*
                     * Case 2 - node's uncle is black and node is
                     * the parent's right child (left rotate at parent).
                     *
                     *      G             G
                     *     / \           / \
                     *    p   U  -->    n   U
                     *     \           /
                     *      n         p
                     *
                     * This still leaves us in violation of 4), the
                     * continuation into Case 3 will fix that.
                     */
                    let inner = self.node(node).left;
                    self.node_mut(parent).right = inner;
                    self.node_mut(node).left = Some(parent);
                    self.node_mut(node).parent = Some(gparent);
                    self.node_mut(parent).parent = Some(node);
                    if let Some(inner) = inner {
                        self.node_mut(inner).parent = Some(parent);
                    }
                    node
                } else {
                    parent
                };

                /*
                 * Case 3 - node's uncle is black and node is
                 * the parent's left child (right rotate at gparent).
                 *
                 *        G           P
                 *       / \         / \
                 *      p   U  -->  n   g
                 *     /                 \
                 *    n                   U
                 */
                let inner = self.node(parent).right;
                self.node_mut(gparent).left = inner;
                self.node_mut(parent).right = Some(gparent);
                if let Some(inner) = inner {
                    self.node_mut(inner).parent = Some(gparent);
                }
                self.rotate_set_parents(gparent, parent, Color::Red);
                break;
            } else {
                let uncle = self.node(gparent).left;
                if let Some(uncle) = uncle.filter(|&u| self.node(u).is_red()) {
                    /* Case 1 - color flips */
                    self.node_mut(uncle).color = Color::Black;
                    self.node_mut(parent).color = Color::Black;
                    self.node_mut(gparent).color = Color::Red;
                    node = gparent;
                    continue;
                }

                let parent = if Some(node) == self.node(parent).left {
                    /* Case 2 - right rotate at parent */
                    let inner = self.node(node).right;
                    self.node_mut(parent).left = inner;
                    self.node_mut(node).right = Some(parent);
                    self.node_mut(node).parent = Some(gparent);
                    self.node_mut(parent).parent = Some(node);
                    if let Some(inner) = inner {
                        self.node_mut(inner).parent = Some(parent);
                    }
                    node
                } else {
                    parent
                };

                /* Case 3 - left rotate at gparent */
                let inner = self.node(parent).left;
                self.node_mut(gparent).right = inner;
                self.node_mut(parent).left = Some(gparent);
                if let Some(inner) = inner {
                    self.node_mut(inner).parent = Some(gparent);
                }
                self.rotate_set_parents(gparent, parent, Color::Red);
                break;
            }
        }
    }

    /// Helper function for rotations:
    /// - old's parent and color get assigned to new
    /// - old gets assigned new as a parent and 'color' as a color.
    #[inline]
    fn rotate_set_parents(&mut self, old: NodeId, new: NodeId, color: Color) {
        let old_parent = self.node(old).parent;
        let old_color = self.node(old).color;
        {
            let new = self.node_mut(new);
            new.parent = old_parent;
            new.color = old_color;
        }
        {
            let old = self.node_mut(old);
            old.parent = Some(new);
            old.color = color;
        }
        self.change_child(old, new, old_parent);
    }

    /// Points `parent`'s child link at `new` where it pointed at `old`, or
    /// replaces the tree root when there is no parent.
    fn change_child(&mut self, old: NodeId, new: NodeId, parent: Option<NodeId>) {
        match parent {
            Some(parent) => {
                let parent = self.node_mut(parent);
                if parent.left == Some(old) {
                    parent.left = Some(new);
                } else {
                    parent.right = Some(new);
                }
            }
            None => self.root = Some(new),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::check;
    use crate::{Color, Tree};

    use pretty_assertions::assert_eq;

    fn tree_of(keys: &[i32]) -> Tree<i32, ()> {
        let mut tree = Tree::new();
        for &k in keys {
            tree.insert(k, (), true);
            check::assert_valid(&tree);
        }
        tree
    }

    #[test]
    fn ascending_insert_right_right_rotation() {
        // Classic right-right case: 20 must end up as the black root.
        let tree = tree_of(&[10, 20, 30]);
        let root = tree.root.expect("tree is not empty");
        assert_eq!(20, tree.node(root).key);
        assert_eq!(Color::Black, tree.node(root).color);

        let left = tree.node(root).left.expect("10 hangs left of the root");
        let right = tree.node(root).right.expect("30 hangs right of the root");
        assert_eq!(10, tree.node(left).key);
        assert_eq!(30, tree.node(right).key);
        assert_eq!(Color::Red, tree.node(left).color);
        assert_eq!(Color::Red, tree.node(right).color);

        let collected: Vec<i32> = tree.iter().map(|(&k, _)| k).collect();
        assert_eq!(vec![10, 20, 30], collected);
    }

    #[test]
    fn descending_insert_left_left_rotation() {
        let tree = tree_of(&[30, 20, 10]);
        let root = tree.root.expect("tree is not empty");
        assert_eq!(20, tree.node(root).key);
        assert_eq!(Color::Black, tree.node(root).color);
    }

    #[test]
    fn zig_zag_converges_to_the_straight_shape() {
        // Inserting 20 last forces the Case 2 rotation; the result must
        // match the shape the straight [10, 20, 30] sequence produces.
        let straight = tree_of(&[10, 20, 30]);
        let bent_left = tree_of(&[30, 10, 20]);
        let bent_right = tree_of(&[10, 30, 20]);
        assert_eq!(check::fingerprint(&straight), check::fingerprint(&bent_left));
        assert_eq!(check::fingerprint(&straight), check::fingerprint(&bent_right));
    }

    #[test]
    fn red_uncle_recolors_without_rotation() {
        // 10/30 are the red children of 20; inserting 5 recolors them black
        // and leaves every node in place.
        let tree = tree_of(&[10, 20, 30, 5]);
        let root = tree.root.expect("tree is not empty");
        assert_eq!(20, tree.node(root).key);

        let left = tree.node(root).left.expect("left subtree");
        let right = tree.node(root).right.expect("right subtree");
        assert_eq!(Color::Black, tree.node(left).color);
        assert_eq!(Color::Black, tree.node(right).color);
        let five = tree.node(left).left.expect("5 hangs left of 10");
        assert_eq!(5, tree.node(five).key);
        assert_eq!(Color::Red, tree.node(five).color);
    }

    #[test]
    fn recoloring_ascends_to_the_root() {
        // Enough inserts to push a Case 1 violation all the way up; the
        // validator inside tree_of checks every step.
        let tree = tree_of(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        assert_eq!(10, tree.len());
    }

    #[test]
    fn every_permutation_of_four_keys_stays_valid() {
        let keys = [1, 2, 3, 4];
        // All 24 insertion orders of four keys.
        for a in 0..4 {
            for b in 0..4 {
                for c in 0..4 {
                    for d in 0..4 {
                        let order = [a, b, c, d];
                        let mut seen = [false; 4];
                        order.iter().for_each(|&i| seen[i] = true);
                        if seen != [true; 4] {
                            continue;
                        }
                        let tree = tree_of(&order.map(|i| keys[i]));
                        let collected: Vec<i32> = tree.iter().map(|(&k, _)| k).collect();
                        assert_eq!(vec![1, 2, 3, 4], collected);
                    }
                }
            }
        }
    }
}
