//! Walking an [`AvlSet`] in order.
//!
//! Nodes don't know their parents, so stepping to the in-order successor or predecessor of a node
//! without a suitable child searches down from the root instead. Each step costs `O(lg N)`.
//!
//! A [`Cursor`] can sit on an element or on one of two sentinels: before the first element or
//! past the last one. Stepping beyond a sentinel, or reading the element at one, is a programming
//! error; the `try_*` methods report it as a [`CursorError`] and the others panic. A
//! [`RevCursor`] walks the same positions in descending order.
//!
//! Cursors and iterators borrow the set, so it cannot be mutated while any of them is alive.
//!
//! # Examples
//!
//! ```
//! use avl_set::AvlSet;
//!
//! let set = AvlSet::from([2, 1, 3]);
//!
//! let mut cursor = set.begin();
//! let mut ascending = Vec::new();
//! while cursor != set.end() {
//!     ascending.push(*cursor.get());
//!     cursor.move_next();
//! }
//! assert_eq!(ascending, [1, 2, 3]);
//!
//! let descending: Vec<_> = set.iter().rev().copied().collect();
//! assert_eq!(descending, [3, 2, 1]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::ptr;

use crate::node::{Link, Node};
use crate::{AvlSet, CursorError};

/// Where a cursor points.
pub(crate) enum Position<'a, T> {
    /// One before the smallest element.
    BeforeFirst,
    At(&'a Node<T>),
    /// One past the largest element.
    End,
}

impl<T> Clone for Position<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Position<'_, T> {}

impl<T> PartialEq for Position<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::BeforeFirst, Self::BeforeFirst) | (Self::End, Self::End) => true,
            (Self::At(a), Self::At(b)) => ptr::eq(*a, *b),
            _ => false,
        }
    }
}

/// The node holding the next larger element, searching from `root` when `node` has no right
/// subtree.
fn successor<'a, T: Ord>(root: Option<&'a Node<T>>, node: &'a Node<T>) -> Option<&'a Node<T>> {
    if let Some(right) = node.right() {
        return Some(right.min());
    }

    // The nearest ancestor whose left subtree holds `node`.
    let mut successor = None;
    let mut link = root;
    while let Some(ancestor) = link {
        match node.data.cmp(&ancestor.data) {
            Ordering::Less => {
                successor = Some(ancestor);
                link = ancestor.left();
            }
            Ordering::Equal => break,
            Ordering::Greater => link = ancestor.right(),
        }
    }
    successor
}

/// Mirror image of [`successor`].
fn predecessor<'a, T: Ord>(root: Option<&'a Node<T>>, node: &'a Node<T>) -> Option<&'a Node<T>> {
    if let Some(left) = node.left() {
        return Some(left.max());
    }

    let mut predecessor = None;
    let mut link = root;
    while let Some(ancestor) = link {
        match node.data.cmp(&ancestor.data) {
            Ordering::Less => link = ancestor.left(),
            Ordering::Equal => break,
            Ordering::Greater => {
                predecessor = Some(ancestor);
                link = ancestor.right();
            }
        }
    }
    predecessor
}

/// A bidirectional cursor over an [`AvlSet`] in ascending order.
pub struct Cursor<'a, T> {
    set: &'a AvlSet<T>,
    position: Position<'a, T>,
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Cursor<'_, T> {}

/// Cursors are equal when they sit on the same node or the same sentinel.
///
/// ## Panics
///
/// When the cursors belong to different sets.
impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        assert!(
            ptr::eq(self.set, other.set),
            "Cannot compare cursors of different sets."
        );
        self.position == other.position
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Position::BeforeFirst => f.write_str("Cursor(BeforeFirst)"),
            Position::At(node) => f.debug_tuple("Cursor").field(&node.data).finish(),
            Position::End => f.write_str("Cursor(End)"),
        }
    }
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(set: &'a AvlSet<T>, position: Position<'a, T>) -> Self {
        Self { set, position }
    }

    /// The element under the cursor, or `None` at a sentinel.
    pub fn peek(&self) -> Option<&'a T> {
        match self.position {
            Position::At(node) => Some(&node.data),
            Position::BeforeFirst | Position::End => None,
        }
    }

    /// The element under the cursor.
    pub fn try_get(&self) -> Result<&'a T, CursorError> {
        self.peek().ok_or(CursorError::Sentinel)
    }

    /// The element under the cursor.
    ///
    /// ## Panics
    ///
    /// When the cursor is at a sentinel.
    pub fn get(&self) -> &'a T {
        self.try_get().unwrap_or_else(|e| panic!("{e}"))
    }

    /// Whether the cursor is one past the largest element.
    pub fn is_end(&self) -> bool {
        matches!(self.position, Position::End)
    }

    /// Whether the cursor is one before the smallest element.
    pub fn is_before_first(&self) -> bool {
        matches!(self.position, Position::BeforeFirst)
    }
}

impl<'a, T: Ord> Cursor<'a, T> {
    /// Steps to the next larger element, or to the end sentinel from the largest element.
    /// Stepping from the before-first sentinel lands on the smallest element.
    pub fn try_move_next(&mut self) -> Result<(), CursorError> {
        let set = self.set;
        let root = set.root();
        self.position = match self.position {
            Position::BeforeFirst => root.map_or(Position::End, |root| Position::At(root.min())),
            Position::At(node) => successor(root, node).map_or(Position::End, Position::At),
            Position::End => return Err(CursorError::PastEnd),
        };
        Ok(())
    }

    /// Steps to the next smaller element, or to the before-first sentinel from the smallest
    /// element. Stepping from the end sentinel lands on the largest element.
    pub fn try_move_prev(&mut self) -> Result<(), CursorError> {
        let set = self.set;
        let root = set.root();
        self.position = match self.position {
            Position::BeforeFirst => return Err(CursorError::BeforeFirst),
            Position::At(node) => {
                predecessor(root, node).map_or(Position::BeforeFirst, Position::At)
            }
            Position::End => root.map_or(Position::BeforeFirst, |root| Position::At(root.max())),
        };
        Ok(())
    }

    /// See [`try_move_next`][Self::try_move_next].
    ///
    /// ## Panics
    ///
    /// When the cursor is at the end sentinel.
    pub fn move_next(&mut self) {
        if let Err(e) = self.try_move_next() {
            panic!("{e}");
        }
    }

    /// See [`try_move_prev`][Self::try_move_prev].
    ///
    /// ## Panics
    ///
    /// When the cursor is at the before-first sentinel.
    pub fn move_prev(&mut self) {
        if let Err(e) = self.try_move_prev() {
            panic!("{e}");
        }
    }
}

/// A bidirectional cursor over an [`AvlSet`] in descending order. Its "end" is the before-first
/// sentinel of the ascending order.
pub struct RevCursor<'a, T> {
    inner: Cursor<'a, T>,
}

impl<T> PartialEq for RevCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Eq for RevCursor<'_, T> {}

impl<T> Clone for RevCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for RevCursor<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for RevCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RevCursor").field(&self.inner).finish()
    }
}

impl<'a, T> RevCursor<'a, T> {
    pub(crate) fn new(inner: Cursor<'a, T>) -> Self {
        Self { inner }
    }

    /// The element under the cursor, or `None` at a sentinel.
    pub fn peek(&self) -> Option<&'a T> {
        self.inner.peek()
    }

    /// The element under the cursor.
    pub fn try_get(&self) -> Result<&'a T, CursorError> {
        self.inner.try_get()
    }

    /// The element under the cursor.
    ///
    /// ## Panics
    ///
    /// When the cursor is at a sentinel.
    pub fn get(&self) -> &'a T {
        self.inner.get()
    }
}

impl<'a, T: Ord> RevCursor<'a, T> {
    /// Steps to the next smaller element, or to the reverse end past the smallest element.
    pub fn try_move_next(&mut self) -> Result<(), CursorError> {
        self.inner.try_move_prev().map_err(|_| CursorError::PastEnd)
    }

    /// Steps to the next larger element, or to a sentinel before the largest element.
    pub fn try_move_prev(&mut self) -> Result<(), CursorError> {
        self.inner.try_move_next().map_err(|_| CursorError::BeforeFirst)
    }

    /// See [`try_move_next`][Self::try_move_next].
    ///
    /// ## Panics
    ///
    /// When the cursor is at the reverse end.
    pub fn move_next(&mut self) {
        if let Err(e) = self.try_move_next() {
            panic!("{e}");
        }
    }

    /// See [`try_move_prev`][Self::try_move_prev].
    ///
    /// ## Panics
    ///
    /// When the cursor is before the largest element.
    pub fn move_prev(&mut self) {
        if let Err(e) = self.try_move_prev() {
            panic!("{e}");
        }
    }

    /// The ascending cursor one step ahead of this one, so `rbegin().base() == end()` and
    /// `rend().base() == begin()`. A reverse cursor stepped back before the largest element maps
    /// to the end sentinel as well.
    pub fn base(&self) -> Cursor<'a, T> {
        let mut base = self.inner;
        match base.position {
            Position::End => {}
            Position::BeforeFirst | Position::At(_) => base.move_next(),
        }
        base
    }
}

/// An iterator over the elements of an [`AvlSet`] in ascending order. Iterate it backwards with
/// `.rev()` for descending order.
pub struct Iter<'a, T> {
    root: Option<&'a Node<T>>,
    front: Option<&'a Node<T>>,
    back: Option<&'a Node<T>>,
    remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            root: self.root,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(set: &'a AvlSet<T>) -> Self {
        let root = set.root();
        Self {
            root,
            front: root.map(Node::min),
            back: root.map(Node::max),
            remaining: set.len(),
        }
    }
}

impl<'a, T: Ord> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.front?;
        self.remaining -= 1;
        self.front = successor(self.root, node);
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Ord> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.back?;
        self.remaining -= 1;
        self.back = predecessor(self.root, node);
        Some(&node.data)
    }
}

impl<T: Ord> ExactSizeIterator for Iter<'_, T> {}
impl<T: Ord> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the elements of an [`AvlSet`] in ascending order.
pub struct IntoIter<T> {
    /// Nodes whose element hasn't been yielded yet, each still owning its right subtree.
    stack: Vec<Box<Node<T>>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Link<T>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Link<T>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let Node { data, right, .. } = *node;
        self.push_left_spine(right);
        self.remaining -= 1;
        Some(data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
