/// A zero-based position in the ascending order of a tree's keys.
///
/// Wrapping the position keeps `tree[Rank(n)]` from being mistaken for a key
/// lookup.
///
/// # Examples
///
/// ```
/// use dsw_tree::{OSTreeSet, Rank};
///
/// let tree = OSTreeSet::from(["b", "a", "c"]);
///
/// assert_eq!(tree[Rank(0)], "a");
/// assert_eq!(tree[Rank(2)], "c");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
