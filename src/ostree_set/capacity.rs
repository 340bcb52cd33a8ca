use super::OSTreeSet;
use crate::raw::RawOSTree;

impl<K> OSTreeSet<K> {
    /// Creates an empty set with room for at least `capacity` keys before the
    /// node storage has to grow.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsw_tree::OSTreeSet;
    ///
    /// let tree: OSTreeSet<i32> = OSTreeSet::with_capacity(16);
    /// assert!(tree.is_empty());
    /// assert!(tree.capacity() >= 16);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        OSTreeSet {
            raw: RawOSTree::with_capacity(capacity),
        }
    }

    /// Returns how many keys the set can hold without growing its node storage.
    ///
    /// Slots freed by removals are reused, so the capacity never shrinks until
    /// the set is dropped.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
