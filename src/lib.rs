//! This crate exposes [`AvlSet`], an ordered set of unique values backed by a self-balancing
//! Binary Search Tree that can also answer order-statistics queries.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! ## AVL trees
//!
//! Searching takes `O(height)`, so [`AvlSet`] keeps the height at `O(lg N)` by
//! maintaining one more invariant after every insertion and removal:
//!
//! 3. For every `Node`, the heights of its two subtrees differ by at most one.
//!
//! Whenever a change breaks this, the tree is restructured locally by "rotations"
//! that keep the sorted order intact.
//!
//! ## Order statistics
//!
//! Each `Node` also counts the elements in its left and right subtrees. With
//! those counts the set can tell how many elements precede a value
//! ([`AvlSet::rank`]), fetch the `k`-th smallest element ([`AvlSet::select`]),
//! and count the steps between two elements ([`AvlSet::distance`]), all in
//! `O(lg N)`.
//!
//! ```
//! use avl_set::AvlSet;
//!
//! let set = AvlSet::from([10, 5, 15, 3, 7]);
//!
//! assert_eq!(set.iter().copied().collect::<Vec<_>>(), [3, 5, 7, 10, 15]);
//! assert_eq!(set.distance(&3, &15), 4);
//! assert_eq!(set.select(1), Some(&5));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod cursor;
mod error;
mod node;
mod set;
mod util;

pub use cursor::{Cursor, IntoIter, Iter, RevCursor};
pub use error::CursorError;
pub use set::AvlSet;

#[cfg(test)]
mod test {
    pub(crate) mod quick;
}
