//! Day-Stout-Warren rebalancing.
//!
//! The tree is first flattened into a vine, a sorted singly linked list threaded
//! through the nodes' right links, and the vine is then folded back into a tree of
//! minimal height. Both phases reuse the existing nodes; nothing is allocated or
//! freed.

use super::handle::Handle;
use super::raw_ostree::RawOSTree;
use super::size::Size;

impl<K> RawOSTree<K> {
    /// Rebuilds the tree with minimal height.
    ///
    /// The resulting shape depends only on the number of keys, so balancing an
    /// already balanced tree leaves it as it is.
    pub(crate) fn balance(&mut self) {
        let (mut vine, count) = self.linearize();
        self.root = self.arborize(&mut vine, count);
        debug_assert!(vine.is_none(), "balance: vine not fully consumed");
        log::debug!("balanced {count} nodes");
    }

    /// Flattens the tree into an ascending vine and returns its head and length.
    ///
    /// Works by right rotations: while the current node has a left child the child
    /// is rotated above it, otherwise the node is final and appended to the vine.
    /// Only a constant number of handles is held at any time. The length is counted
    /// one node at a time, stored sizes are stale afterwards.
    pub(crate) fn linearize(&mut self) -> (Option<Handle>, usize) {
        let mut head = None;
        let mut tail: Option<Handle> = None;
        let mut count = 0;
        let mut rest = self.root.take();

        while let Some(current) = rest {
            if let Some(left) = self.nodes.get(current).left() {
                let inner = self.nodes.get(left).right();
                self.nodes.get_mut(current).set_left(inner);
                self.nodes.get_mut(left).set_right(Some(current));
                rest = Some(left);
            } else {
                match tail {
                    Some(tail) => self.nodes.get_mut(tail).set_right(Some(current)),
                    None => head = Some(current),
                }
                tail = Some(current);
                rest = self.nodes.get(current).right();
                count += 1;
            }
        }

        (head, count)
    }

    /// Folds the first `count` nodes of `vine` into a balanced subtree and returns
    /// its root. `vine` is advanced past the consumed nodes.
    ///
    /// The left subtree takes `(count - 1) / 2` nodes and the right subtree the
    /// rest, so the height is `ceil(log2(count + 1))` and the recursion depth is
    /// the same.
    pub(crate) fn arborize(&mut self, vine: &mut Option<Handle>, count: usize) -> Option<Handle> {
        if count == 0 {
            return None;
        }

        let left_count = (count - 1) / 2;
        let left = self.arborize(vine, left_count);

        let root = vine.take()?;
        let node = self.nodes.get_mut(root);
        *vine = node.right();
        node.set_left(left);
        node.set_size(Size::from_usize(count));

        let right = self.arborize(vine, count - 1 - left_count);
        self.nodes.get_mut(root).set_right(right);
        Some(root)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::super::raw_ostree::tests::{EXAMPLE_KEYS, keys_in_order, shape, tree_of};
    use super::*;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    /// Walks a vine and returns its keys, checking that no left links remain.
    fn vine_keys(tree: &RawOSTree<i32>, mut vine: Option<Handle>) -> Vec<i32> {
        let mut keys = Vec::new();
        while let Some(handle) = vine {
            let node = tree.node(handle);
            assert_eq!(node.left(), None, "vine node {} still has a left link", node.key());
            keys.push(*node.key());
            vine = node.right();
        }
        keys
    }

    fn minimal_height(len: usize) -> usize {
        (usize::BITS - len.leading_zeros()) as usize
    }

    #[test]
    fn linearize_produces_sorted_vine() {
        let mut tree = tree_of(&EXAMPLE_KEYS);
        let (vine, count) = tree.linearize();
        assert_eq!(count, 12);
        assert_eq!(tree.root(), None);
        assert_eq!(vine_keys(&tree, vine), [2, 4, 5, 6, 7, 10, 11, 12, 13, 14, 15, 16]);
    }

    #[test]
    fn linearize_empty_tree() {
        let mut tree: RawOSTree<i32> = RawOSTree::new();
        assert_eq!(tree.linearize(), (None, 0));
    }

    #[test]
    fn arborize_consumes_only_count_nodes() {
        let mut tree = tree_of(&[1, 2, 3, 4, 5, 6, 7]);
        let (mut vine, _) = tree.linearize();

        let first = tree.arborize(&mut vine, 3);
        assert_eq!(tree.node(first.unwrap()).key(), &2);
        assert_eq!(tree.node(first.unwrap()).size().to_usize(), 3);
        assert_eq!(vine_keys(&tree, vine), [4, 5, 6, 7]);

        let second = tree.arborize(&mut vine, 4);
        assert_eq!(vine, None);
        assert_eq!(tree.node(second.unwrap()).key(), &5);
        assert_eq!(tree.node(second.unwrap()).size().to_usize(), 4);
    }

    #[test]
    fn balance_ascending_insertions() {
        let keys: Vec<i32> = (1..=1000).collect();
        let mut tree = tree_of(&keys);
        assert_eq!(tree.height(), 1000);

        tree.balance();
        tree.validate_invariants();
        assert_eq!(tree.height(), minimal_height(1000));
        assert_eq!(keys_in_order(&tree), keys);
    }

    #[test]
    fn balance_example_shape() {
        let mut tree = tree_of(&EXAMPLE_KEYS);
        tree.balance();
        tree.validate_invariants();
        let top: [Vec<Option<(i32, usize)>>; 2] = [vec![Some((10, 12))], vec![Some((5, 5)), Some((13, 6))]];
        assert_eq!(shape(&tree)[..2], top);
    }

    #[test]
    fn balance_is_idempotent() {
        let mut tree = tree_of(&EXAMPLE_KEYS);
        tree.balance();
        let once = shape(&tree);
        tree.balance();
        assert_eq!(shape(&tree), once);
    }

    #[test]
    fn balance_empty_and_single() {
        let mut tree: RawOSTree<i32> = RawOSTree::new();
        tree.balance();
        assert!(tree.is_empty());

        tree.insert(9);
        tree.balance();
        tree.validate_invariants();
        let single: [Vec<Option<(i32, usize)>>; 1] = [vec![Some((9, 1))]];
        assert_eq!(shape(&tree), single);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn balance_preserves_keys_and_bounds_height(keys in prop::collection::vec(-5000i32..5000, 0..600)) {
            let mut tree = tree_of(&keys);
            let before = keys_in_order(&tree);

            tree.balance();
            tree.validate_invariants();
            prop_assert_eq!(&keys_in_order(&tree), &before);
            prop_assert_eq!(tree.height(), minimal_height(tree.len()));

            // The shape depends on the key count alone, not on insertion order.
            let mut sorted = tree_of(&before);
            sorted.balance();
            prop_assert_eq!(shape(&sorted), shape(&tree));
        }
    }
}
