use core::borrow::Borrow;
use core::cmp::Ordering::{Equal, Greater, Less};

use smallvec::SmallVec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Node, Side};
use super::size::Size;

/// The binary search tree engine backing `OSTreeSet`.
#[derive(Clone)]
pub(crate) struct RawOSTree<K> {
    /// Arena owning every node. A node is reachable from exactly one link.
    pub(super) nodes: Arena<Node<K>>,
    /// Handle to the root node, if the tree is non-empty.
    pub(super) root: Option<Handle>,
}

/// Path element for tracking a descent during mutations.
#[derive(Clone, Copy)]
struct PathElement {
    /// Handle to the node at this level.
    node: Handle,
    /// The child link we descended through.
    side: Side,
}

/// Ancestors visited on the way down, root first.
type Path = SmallVec<[PathElement; 32]>;

impl<K> RawOSTree<K> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    /// Returns the number of keys in the tree, read from the root's size.
    pub(crate) fn len(&self) -> usize {
        self.size_of(self.root)
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Drops every node at once.
    pub(crate) fn clear(&mut self) {
        log::debug!("clearing tree of {} nodes", self.nodes.len());
        self.nodes.clear();
        self.root = None;
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> Option<Handle> {
        self.root
    }

    #[cfg(test)]
    pub(crate) fn node(&self, handle: Handle) -> &Node<K> {
        self.nodes.get(handle)
    }

    /// Size of the subtree behind `link`; an empty link holds nothing.
    #[inline]
    pub(crate) fn size_of(&self, link: Option<Handle>) -> usize {
        link.map_or(0, |handle| self.nodes.get(handle).size().to_usize())
    }

    /// Rewrites the link a path element points through, or the root link when
    /// there is no parent.
    fn relink(&mut self, parent: Option<PathElement>, child: Option<Handle>) {
        match parent {
            Some(PathElement { node, side }) => self.nodes.get_mut(node).set_child(side, child),
            None => self.root = child,
        }
    }

    /// Releases a node that is no longer reachable and hands back its key.
    fn release(&mut self, handle: Handle) -> K {
        self.nodes.take(handle).into_key()
    }

    /// Returns the leftmost key.
    pub(crate) fn min(&self) -> Option<&K> {
        let mut current = self.root?;
        while let Some(left) = self.nodes.get(current).left() {
            current = left;
        }
        Some(self.nodes.get(current).key())
    }

    /// Unlinks the minimum of the subtree rooted at `subtree`.
    ///
    /// Every node passed on the way down loses one member. The minimum's right
    /// child takes its place. Returns the remaining subtree root and the detached
    /// node, whose own links are left untouched.
    fn detach_min(&mut self, subtree: Handle) -> (Option<Handle>, Handle) {
        let mut parent = None;
        let mut current = subtree;
        while let Some(left) = self.nodes.get(current).left() {
            self.nodes.get_mut(current).decrement_size();
            parent = Some(current);
            current = left;
        }

        let orphan = self.nodes.get(current).right();
        match parent {
            Some(parent) => {
                self.nodes.get_mut(parent).set_left(orphan);
                (Some(subtree), current)
            }
            None => (orphan, current),
        }
    }

    /// Removes the smallest key and returns it.
    pub(crate) fn pop_min(&mut self) -> Option<K> {
        let root = self.root?;
        let (rest, min) = self.detach_min(root);
        self.root = rest;
        Some(self.release(min))
    }

    /// Returns the key at position `rank` in ascending order.
    pub(crate) fn get_by_rank(&self, rank: usize) -> Option<&K> {
        if rank >= self.len() {
            return None;
        }

        let mut current = self.root;
        let mut remaining = rank;

        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            let left_size = self.size_of(node.left());
            match remaining.cmp(&left_size) {
                Equal => return Some(node.key()),
                Less => current = node.left(),
                Greater => {
                    remaining -= left_size + 1;
                    current = node.right();
                }
            }
        }

        debug_assert!(false, "get_by_rank: size invariant violated - rank {rank} not reached");
        None
    }
}

impl<K: Ord> RawOSTree<K> {
    /// Searches for a key and returns the handle of the node holding it.
    pub(crate) fn search<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            match key.cmp(node.key().borrow()) {
                Less => current = node.left(),
                Greater => current = node.right(),
                Equal => return Some(handle),
            }
        }
        None
    }

    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).is_some()
    }

    /// Inserts `key` as a new leaf. Returns `false`, leaving the tree untouched,
    /// if an equal key is already present.
    pub(crate) fn insert(&mut self, key: K) -> bool {
        // Sizes are bumped on the way down, so the key must be known to be new first.
        if self.contains(&key) {
            return false;
        }

        let mut parent = None;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get_mut(handle);
            node.increment_size();
            let side = if key < *node.key() { Side::Left } else { Side::Right };
            current = node.child(side);
            parent = Some(PathElement { node: handle, side });
        }

        let leaf = self.nodes.alloc(Node::new(key));
        self.relink(parent, Some(leaf));
        true
    }

    /// Removes the node holding `key` using Hibbard deletion and returns its key.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut path: Path = SmallVec::new();
        let mut current = self.root;
        let target = loop {
            let handle = current?;
            let node = self.nodes.get(handle);
            let side = match key.cmp(node.key().borrow()) {
                Less => Side::Left,
                Greater => Side::Right,
                Equal => break handle,
            };
            path.push(PathElement { node: handle, side });
            current = node.child(side);
        };

        // The key is present: every ancestor loses exactly one member.
        for element in &path {
            self.nodes.get_mut(element.node).decrement_size();
        }

        let replacement = self.unlink(target);
        self.relink(path.last().copied(), replacement);
        Some(self.release(target))
    }

    /// Detaches `target` from its children and returns the subtree root that
    /// should take its place.
    fn unlink(&mut self, target: Handle) -> Option<Handle> {
        let node = self.nodes.get(target);
        let (left, right, size) = (node.left(), node.right(), node.size());

        match (left, right) {
            (_, None) => left,
            (None, Some(_)) => right,
            (Some(left), Some(right)) => {
                // Promote the in-order successor.
                let (rest, successor) = self.detach_min(right);
                let node = self.nodes.get_mut(successor);
                node.set_left(Some(left));
                node.set_right(rest);
                node.set_size(Size::from_usize(size.to_usize() - 1));
                Some(successor)
            }
        }
    }

    /// Returns the number of keys strictly smaller than `key`, or `None` if `key`
    /// is not present.
    pub(crate) fn rank_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        let mut rank = 0;

        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            match key.cmp(node.key().borrow()) {
                Less => current = node.left(),
                Greater => {
                    rank += self.size_of(node.left()) + 1;
                    current = node.right();
                }
                Equal => return Some(rank + self.size_of(node.left())),
            }
        }

        None
    }
}
