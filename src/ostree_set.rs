use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;

use crate::TreeError;
use crate::raw::{InOrder, IntoInOrder, RawOSTree};

mod capacity;
mod order_statistic;

/// An ordered set based on a binary search tree whose nodes know the size of
/// their subtree.
///
/// The subtree sizes make rank queries ([`rank_of`], [`nth_element`]) cost one
/// root-to-node walk. The tree does not rebalance itself while it is modified;
/// call [`balance`] after a burst of insertions to bring the height back to
/// `ceil(log2(len + 1))`. Balancing is linear in the number of keys and needs no
/// extra memory.
///
/// Keys are unique: inserting a key that compares equal to one already present
/// leaves the set unchanged.
///
/// It is a logic error for a key to be modified in such a way that its ordering
/// relative to any other key, as determined by the [`Ord`] trait, changes while
/// it is in the set.
///
/// [`rank_of`]: OSTreeSet::rank_of
/// [`nth_element`]: OSTreeSet::nth_element
/// [`balance`]: OSTreeSet::balance
///
/// # Examples
///
/// ```
/// use dsw_tree::OSTreeSet;
///
/// let mut tree = OSTreeSet::new();
/// for key in 1..=100 {
///     tree.insert(key);
/// }
/// // Ascending insertions leave a list-shaped tree.
/// assert_eq!(tree.height(), 100);
///
/// tree.balance();
/// assert_eq!(tree.height(), 7);
///
/// assert_eq!(tree.nth_element(49), Ok(&50));
/// assert_eq!(tree.rank_of(&50), Some(49));
/// ```
pub struct OSTreeSet<K> {
    raw: RawOSTree<K>,
}

/// An iterator over the keys of an `OSTreeSet` in ascending order.
///
/// This `struct` is created by the [`iter`] method on [`OSTreeSet`].
///
/// [`iter`]: OSTreeSet::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K: 'a> {
    inner: InOrder<'a, K>,
}

/// An owning iterator over the keys of an `OSTreeSet` in ascending order.
///
/// This `struct` is created by the `into_iter` method on [`OSTreeSet`]
/// (provided by the [`IntoIterator`] trait).
pub struct IntoIter<K> {
    inner: IntoInOrder<K>,
}

impl<K> OSTreeSet<K> {
    /// Makes a new, empty `OSTreeSet`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsw_tree::OSTreeSet;
    ///
    /// let tree: OSTreeSet<i32> = OSTreeSet::new();
    /// assert!(tree.is_empty());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        OSTreeSet { raw: RawOSTree::new() }
    }

    /// Returns the number of keys in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsw_tree::OSTreeSet;
    ///
    /// let mut tree = OSTreeSet::new();
    /// assert_eq!(tree.len(), 0);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1), read from the root's subtree size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the set contains no keys.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Removes every key.
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns a reference to the smallest key.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Empty`] if the set holds no keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsw_tree::{OSTreeSet, TreeError};
    ///
    /// let mut tree = OSTreeSet::new();
    /// assert_eq!(tree.min(), Err(TreeError::Empty));
    /// tree.insert(3);
    /// tree.insert(1);
    /// assert_eq!(tree.min(), Ok(&1));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn min(&self) -> Result<&K, TreeError> {
        self.raw.min().ok_or(TreeError::Empty)
    }

    /// Returns a reference to the smallest key, or `None` if the set is empty.
    #[must_use]
    pub fn first(&self) -> Option<&K> {
        self.raw.min()
    }

    /// Removes the smallest key.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Empty`], leaving the set untouched, if there is
    /// nothing to remove.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsw_tree::OSTreeSet;
    ///
    /// let mut tree = OSTreeSet::from([2, 1, 3]);
    /// tree.delete_min().unwrap();
    /// assert_eq!(tree.min(), Ok(&2));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn delete_min(&mut self) -> Result<(), TreeError> {
        self.raw.pop_min().map(drop).ok_or(TreeError::Empty)
    }

    /// Removes the smallest key and returns it, or `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsw_tree::OSTreeSet;
    ///
    /// let mut tree = OSTreeSet::from([2, 1]);
    /// assert_eq!(tree.pop_min(), Some(1));
    /// assert_eq!(tree.pop_min(), Some(2));
    /// assert_eq!(tree.pop_min(), None);
    /// ```
    pub fn pop_min(&mut self) -> Option<K> {
        self.raw.pop_min()
    }

    /// Rebuilds the tree with minimal height, `ceil(log2(len + 1))`.
    ///
    /// The shape after balancing depends only on the number of keys, so calling
    /// this twice in a row leaves the tree as the first call did.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsw_tree::OSTreeSet;
    ///
    /// let mut tree: OSTreeSet<u32> = (0..1000).collect();
    /// assert_eq!(tree.height(), 1000);
    /// tree.balance();
    /// assert_eq!(tree.height(), 10);
    /// assert!(tree.iter().copied().eq(0..1000));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n) time, O(1) extra memory.
    pub fn balance(&mut self) {
        self.raw.balance();
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn height(&self) -> usize {
        self.raw.height()
    }

    /// Calls `visitor` on every key, each node before its subtrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsw_tree::OSTreeSet;
    ///
    /// let tree = OSTreeSet::from([2, 1, 3]);
    /// let mut keys = Vec::new();
    /// tree.visit_pre(|key| keys.push(*key));
    /// assert_eq!(keys, [2, 1, 3]);
    /// ```
    pub fn visit_pre<F: FnMut(&K)>(&self, visitor: F) {
        self.raw.visit_pre(visitor);
    }

    /// Calls `visitor` on every key in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsw_tree::OSTreeSet;
    ///
    /// let tree = OSTreeSet::from([2, 1, 3]);
    /// let mut keys = Vec::new();
    /// tree.visit_in_order(|key| keys.push(*key));
    /// assert_eq!(keys, [1, 2, 3]);
    /// ```
    pub fn visit_in_order<F: FnMut(&K)>(&self, visitor: F) {
        self.raw.visit_in_order(visitor);
    }

    /// Calls `visitor` on every key, each node after its subtrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsw_tree::OSTreeSet;
    ///
    /// let tree = OSTreeSet::from([2, 1, 3]);
    /// let mut keys = Vec::new();
    /// tree.visit_post(|key| keys.push(*key));
    /// assert_eq!(keys, [1, 3, 2]);
    /// ```
    pub fn visit_post<F: FnMut(&K)>(&self, visitor: F) {
        self.raw.visit_post(visitor);
    }

    /// Gets an iterator that visits the keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsw_tree::OSTreeSet;
    ///
    /// let tree = OSTreeSet::from([3, 1, 2]);
    /// let mut iter = tree.iter();
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), Some(&3));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        Iter { inner: self.raw.iter() }
    }

    /// Returns the tree level by level as `(key, subtree size)` pairs.
    ///
    /// Each level lists the two child links of every node on the level above,
    /// `None` standing for an empty link. Two sets have the same shape exactly when
    /// their levels are equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsw_tree::OSTreeSet;
    ///
    /// let tree = OSTreeSet::from([2, 1, 3, 4]);
    /// let levels = tree.levels();
    /// assert_eq!(levels[0], [Some((&2, 4))]);
    /// assert_eq!(levels[1], [Some((&1, 1)), Some((&3, 2))]);
    /// assert_eq!(levels[2], [None, None, None, Some((&4, 1))]);
    /// ```
    #[must_use]
    pub fn levels(&self) -> Vec<Vec<Option<(&K, usize)>>> {
        self.raw.levels()
    }
}

impl<K: Ord> OSTreeSet<K> {
    /// Returns `true` if the set contains `key`.
    ///
    /// The key may be any borrowed form of the set's key type, but the ordering
    /// on the borrowed form *must* match the ordering on the key type.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsw_tree::OSTreeSet;
    ///
    /// let tree = OSTreeSet::from([1, 2, 3]);
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&4));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.contains(key)
    }

    /// Adds a key to the set.
    ///
    /// Returns whether the key was newly inserted. If an equal key is already
    /// present, `false` is returned, the set is not modified and `key` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsw_tree::OSTreeSet;
    ///
    /// let mut tree = OSTreeSet::new();
    /// assert!(tree.insert(2));
    /// assert!(!tree.insert(2));
    /// assert_eq!(tree.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn insert(&mut self, key: K) -> bool {
        self.raw.insert(key)
    }

    /// Removes `key` from the set. Returns whether it was present.
    ///
    /// A node with two children is replaced by its in-order successor.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsw_tree::OSTreeSet;
    ///
    /// let mut tree = OSTreeSet::from([5, 3, 8]);
    /// assert!(tree.remove(&5));
    /// assert!(!tree.remove(&5));
    /// assert_eq!(tree.len(), 2);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove(key).is_some()
    }

    /// Removes `key` from the set and returns the stored key, if present.
    pub fn take<Q>(&mut self, key: &Q) -> Option<K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove(key)
    }
}

impl<K: Hash> Hash for OSTreeSet<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for key in self {
            key.hash(state);
        }
    }
}

/// Sets are equal when they hold the same keys, whatever their shapes.
impl<K: PartialEq> PartialEq for OSTreeSet<K> {
    fn eq(&self, other: &OSTreeSet<K>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq> Eq for OSTreeSet<K> {}

/// Copies every node, keeping the shape.
impl<K: Clone> Clone for OSTreeSet<K> {
    fn clone(&self) -> Self {
        OSTreeSet { raw: self.raw.clone() }
    }
}

impl<K: fmt::Debug> fmt::Debug for OSTreeSet<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K> Default for OSTreeSet<K> {
    fn default() -> Self {
        OSTreeSet::new()
    }
}

impl<K: Ord> FromIterator<K> for OSTreeSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = OSTreeSet::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for OSTreeSet<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K: 'a + Ord + Copy> Extend<&'a K> for OSTreeSet<K> {
    fn extend<I: IntoIterator<Item = &'a K>>(&mut self, iter: I) {
        for &key in iter {
            self.insert(key);
        }
    }
}

/// Inserts the keys in array order; the tree is not balanced afterwards.
impl<K: Ord, const N: usize> From<[K; N]> for OSTreeSet<K> {
    fn from(keys: [K; N]) -> Self {
        keys.into_iter().collect()
    }
}

impl<K> IntoIterator for OSTreeSet<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    /// Gets an iterator for moving out the set's keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsw_tree::OSTreeSet;
    ///
    /// let tree = OSTreeSet::from([3, 1, 4, 2]);
    /// let keys: Vec<_> = tree.into_iter().collect();
    /// assert_eq!(keys, [1, 2, 3, 4]);
    /// ```
    fn into_iter(self) -> IntoIter<K> {
        IntoIter {
            inner: self.raw.into_in_order(),
        }
    }
}

impl<'a, K> IntoIterator for &'a OSTreeSet<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K> FusedIterator for Iter<'_, K> {}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for Iter<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> ExactSizeIterator for IntoIter<K> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K> FusedIterator for IntoIter<K> {}

impl<K> fmt::Debug for IntoIter<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("remaining", &self.len()).finish()
    }
}
