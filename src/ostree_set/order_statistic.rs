use core::borrow::Borrow;
use core::ops::Index;

use super::OSTreeSet;
use crate::{Rank, TreeError};

impl<K> OSTreeSet<K> {
    /// Returns the key at position `n` in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::OutOfRange`] if `n >= self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsw_tree::{OSTreeSet, TreeError};
    ///
    /// let tree = OSTreeSet::from([10, 20, 30]);
    /// assert_eq!(tree.nth_element(1), Ok(&20));
    /// assert_eq!(tree.nth_element(3), Err(TreeError::OutOfRange { rank: 3, len: 3 }));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn nth_element(&self, n: usize) -> Result<&K, TreeError> {
        self.raw.get_by_rank(n).ok_or(TreeError::OutOfRange { rank: n, len: self.len() })
    }

    /// Returns the key at position `rank` in ascending order, or `None` if
    /// `rank` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsw_tree::OSTreeSet;
    ///
    /// let tree = OSTreeSet::from([10, 20, 30]);
    /// assert_eq!(tree.get_by_rank(2), Some(&30));
    /// assert!(tree.get_by_rank(3).is_none());
    /// ```
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<&K> {
        self.raw.get_by_rank(rank)
    }
}

impl<K: Ord> OSTreeSet<K> {
    /// Returns the number of keys smaller than `key`, or `None` if `key` is not
    /// in the set.
    ///
    /// `rank_of` and [`nth_element`](OSTreeSet::nth_element) are inverses.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsw_tree::OSTreeSet;
    ///
    /// let tree = OSTreeSet::from([10, 20]);
    ///
    /// assert_eq!(tree.rank_of(&20), Some(1));
    /// assert_eq!(tree.rank_of(&15), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    #[must_use]
    pub fn rank_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.rank_of(key)
    }
}

/// Indexes into the set by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use dsw_tree::{OSTreeSet, Rank};
///
/// let tree = OSTreeSet::from([10, 20, 30]);
/// assert_eq!(tree[Rank(1)], 20);
/// ```
impl<K> Index<Rank> for OSTreeSet<K> {
    type Output = K;

    fn index(&self, rank: Rank) -> &Self::Output {
        match self.nth_element(rank.0) {
            Ok(key) => key,
            Err(error) => panic!("{error}"),
        }
    }
}
