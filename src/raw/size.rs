use core::num::NonZero;

use super::handle::Handle;

/// Number of keys in the subtree rooted at a node.
///
/// A node always counts itself, so the count is never zero and an empty link
/// simply contributes nothing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Size(NonZero<usize>);

impl Size {
    /// A tree can never hold more nodes than there are handles.
    pub(crate) const MAX: usize = Handle::MAX + 1;
    pub(crate) const ONE: Self = Self(NonZero::<usize>::MIN);

    #[inline]
    pub(crate) const fn from_usize(size: usize) -> Self {
        assert!(size <= Self::MAX, "`Size::from_usize()` - `size` > `Size::MAX`!");
        match NonZero::new(size) {
            Some(size) => Self(size),
            None => panic!("`Size::from_usize()` - a subtree holds at least its root!"),
        }
    }

    #[inline]
    pub(crate) const fn to_usize(self) -> usize {
        self.0.get()
    }

    /// The subtree gained one key below this node.
    #[inline]
    pub(crate) fn increment(&mut self) {
        *self = Self::from_usize(self.to_usize() + 1);
    }

    /// The subtree lost one key below this node. The node itself is still counted.
    #[inline]
    pub(crate) fn decrement(&mut self) {
        debug_assert!(self.to_usize() > 1, "`Size::decrement()` - node would stop counting itself");
        *self = Self::from_usize(self.to_usize() - 1);
    }
}
