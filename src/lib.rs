//! Order-statistic binary search tree with on-demand rebalancing.
//!
//! This crate provides [`OSTreeSet`], an ordered set of unique keys stored in a
//! plain binary search tree whose nodes also record the size of their subtree.
//! On top of the usual set operations it answers order-statistic queries:
//!
//! - [`nth_element`](OSTreeSet::nth_element) - Get the key at a given sorted position
//! - [`rank_of`](OSTreeSet::rank_of) - Get the sorted position of a key
//! - Indexing by [`Rank`] - e.g., `tree[Rank(0)]` for the smallest key
//!
//! # Example
//!
//! ```
//! use dsw_tree::{OSTreeSet, Rank, TreeError};
//!
//! let mut tree = OSTreeSet::new();
//! for key in [10, 12, 16, 15, 7, 5, 11, 4, 2, 6, 13, 14] {
//!     tree.insert(key);
//! }
//!
//! assert_eq!(tree.len(), 12);
//! assert_eq!(tree.min(), Ok(&2));
//! assert_eq!(tree.nth_element(11), Ok(&16));
//! assert_eq!(tree.rank_of(&12), Some(7));
//! assert_eq!(tree[Rank(0)], 2);
//!
//! tree.delete_min()?;
//! assert!(tree.remove(&12));
//! assert_eq!(tree.len(), 10);
//!
//! tree.balance();
//! assert_eq!(tree.height(), 4);
//! # Ok::<(), TreeError>(())
//! ```
//!
//! # Balancing
//!
//! Mutations never restructure the tree beyond the nodes they touch, so an
//! unlucky insertion order degrades the tree into a list. [`OSTreeSet::balance`]
//! repairs that with the Day-Stout-Warren algorithm: the tree is flattened into a
//! sorted vine and folded back into a tree of minimal height, in linear time and
//! without allocating.
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`
//! - **Stack-safe** - Every operation is iterative or recurses only `O(log n)` deep,
//!   so even a degenerate tree can be traversed, searched and balanced
//! - **Observable** - Node allocation and release are reported through [`log`] at
//!   `trace` level

#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod order_statistic;
mod raw;

pub mod ostree_set;

pub use error::TreeError;
pub use order_statistic::Rank;
pub use ostree_set::OSTreeSet;
