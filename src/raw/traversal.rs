use alloc::vec::Vec;
use core::iter::FusedIterator;

use smallvec::SmallVec;

use super::handle::Handle;
use super::raw_ostree::RawOSTree;

/// Pending nodes of an iterative traversal. Grows with the tree height only.
type Stack<T> = SmallVec<[T; 32]>;

impl<K> RawOSTree<K> {
    /// Calls `visitor` on every key, each node before its subtrees.
    pub(crate) fn visit_pre<F: FnMut(&K)>(&self, mut visitor: F) {
        let mut stack: Stack<Handle> = self.root.into_iter().collect();
        while let Some(handle) = stack.pop() {
            let node = self.nodes.get(handle);
            visitor(node.key());
            stack.extend(node.right());
            stack.extend(node.left());
        }
    }

    /// Calls `visitor` on every key in ascending order.
    pub(crate) fn visit_in_order<F: FnMut(&K)>(&self, visitor: F) {
        self.iter().for_each(visitor);
    }

    /// Calls `visitor` on every key, each node after its subtrees.
    pub(crate) fn visit_post<F: FnMut(&K)>(&self, mut visitor: F) {
        // The flag is set once a node's children have been scheduled.
        let mut stack: Stack<(Handle, bool)> = self.root.map(|root| (root, false)).into_iter().collect();
        while let Some((handle, expanded)) = stack.pop() {
            let node = self.nodes.get(handle);
            if expanded {
                visitor(node.key());
            } else {
                stack.push((handle, true));
                stack.extend(node.right().map(|right| (right, false)));
                stack.extend(node.left().map(|left| (left, false)));
            }
        }
    }

    pub(crate) fn iter(&self) -> InOrder<'_, K> {
        InOrder::new(self)
    }

    /// Consumes the tree, yielding owned keys in ascending order.
    pub(crate) fn into_in_order(mut self) -> IntoInOrder<K> {
        let (vine, remaining) = self.linearize();
        IntoInOrder {
            tree: self,
            vine,
            remaining,
        }
    }

    /// Number of nodes on the longest root-to-leaf path; zero when empty.
    pub(crate) fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<Handle> = self.root.into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .flat_map(|&handle| {
                    let node = self.nodes.get(handle);
                    [node.left(), node.right()]
                })
                .flatten()
                .collect();
        }
        height
    }

    /// Breadth-first dump of `(key, size)` pairs.
    ///
    /// Level `d` holds one slot per child link of the nodes at level `d - 1`, with
    /// `None` for empty links, so two trees have the same shape exactly when their
    /// dumps match slot for slot.
    pub(crate) fn levels(&self) -> Vec<Vec<Option<(&K, usize)>>> {
        let mut levels = Vec::new();
        let mut links = alloc::vec![self.root];

        while links.iter().any(Option::is_some) {
            let mut below = Vec::with_capacity(links.len() * 2);
            let level = links
                .iter()
                .map(|link| {
                    link.map(|handle| {
                        let node = self.nodes.get(handle);
                        below.push(node.left());
                        below.push(node.right());
                        (node.key(), node.size().to_usize())
                    })
                })
                .collect();
            levels.push(level);
            links = below;
        }

        levels
    }
}

/// Ascending iterator over the keys of a `RawOSTree`.
pub(crate) struct InOrder<'a, K> {
    tree: &'a RawOSTree<K>,
    // Nodes whose left subtree is done but which are not yet yielded.
    stack: Stack<Handle>,
    remaining: usize,
}

impl<'a, K> InOrder<'a, K> {
    fn new(tree: &'a RawOSTree<K>) -> Self {
        let mut iter = Self {
            tree,
            stack: SmallVec::new(),
            remaining: tree.len(),
        };
        iter.push_left_spine(tree.root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<Handle>) {
        while let Some(handle) = link {
            self.stack.push(handle);
            link = self.tree.nodes.get(handle).left();
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let tree = self.tree;
        let node = tree.nodes.get(self.stack.pop()?);
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(node.key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for InOrder<'_, K> {}

impl<K> FusedIterator for InOrder<'_, K> {}

impl<K> Clone for InOrder<'_, K> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

/// Owning ascending iterator. The tree is flattened into a vine up front, so each
/// step only unlinks the head.
pub(crate) struct IntoInOrder<K> {
    tree: RawOSTree<K>,
    vine: Option<Handle>,
    remaining: usize,
}

impl<K> Iterator for IntoInOrder<K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        let node = self.tree.nodes.take(self.vine?);
        self.vine = node.right();
        self.remaining -= 1;
        Some(node.into_key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for IntoInOrder<K> {}

impl<K> FusedIterator for IntoInOrder<K> {}
