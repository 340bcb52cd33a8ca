use super::handle::Handle;
use super::size::Size;

/// A binary tree node.
///
/// In tree form `left` holds smaller keys and `right` larger ones. While the tree
/// is being rebalanced the same node doubles as a vine cell: `right` is the link to
/// the next larger key and `left` is always `None`.
#[derive(Clone)]
pub(crate) struct Node<K> {
    key: K,
    // Keys in the subtree rooted here, this node included.
    size: Size,
    left: Option<Handle>,
    right: Option<Handle>,
}

/// Which child link of a parent a descent followed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl<K> Node<K> {
    /// Creates a detached leaf.
    pub(crate) const fn new(key: K) -> Self {
        Self {
            key,
            size: Size::ONE,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    pub(crate) fn into_key(self) -> K {
        self.key
    }

    #[inline]
    pub(crate) fn size(&self) -> Size {
        self.size
    }

    pub(crate) fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub(crate) fn increment_size(&mut self) {
        self.size.increment();
    }

    pub(crate) fn decrement_size(&mut self) {
        self.size.decrement();
    }

    #[inline]
    pub(crate) fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) fn right(&self) -> Option<Handle> {
        self.right
    }

    #[inline]
    pub(crate) fn child(&self, side: Side) -> Option<Handle> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn set_left(&mut self, left: Option<Handle>) {
        self.left = left;
    }

    pub(crate) fn set_right(&mut self, right: Option<Handle>) {
        self.right = right;
    }

    pub(crate) fn set_child(&mut self, side: Side, child: Option<Handle>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }
}
