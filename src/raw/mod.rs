mod arena;
mod handle;
mod node;
mod raw_ostree;
mod rebalance;
mod size;
mod traversal;

pub(crate) use raw_ostree::RawOSTree;
pub(crate) use traversal::{InOrder, IntoInOrder};
