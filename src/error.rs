use thiserror::Error;

/// Errors returned by [`OSTreeSet`](crate::OSTreeSet) queries that need a key to
/// exist.
///
/// A missing key is not an error: lookups that may legitimately miss return
/// `bool` or `Option` instead.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum TreeError {
    /// The tree holds no keys.
    #[error("the tree is empty")]
    Empty,
    /// A rank at or past the number of keys was requested.
    #[error("rank {rank} is out of range for a tree of {len} keys")]
    OutOfRange { rank: usize, len: usize },
}
