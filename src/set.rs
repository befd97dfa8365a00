//! An ordered set backed by an AVL tree whose nodes also count the elements in their subtrees.
//!
//! # Examples
//!
//! ```
//! use avl_set::AvlSet;
//!
//! let mut set = AvlSet::new();
//!
//! // Nothing in here yet.
//! assert_eq!(set.find(&1), None);
//!
//! assert!(set.insert(1));
//! assert_eq!(set.find(&1), Some(&1));
//!
//! // Inserting the same value again is rejected and leaves the set alone.
//! assert!(!set.insert(1));
//! assert_eq!(set.len(), 1);
//!
//! // Erasing reports whether the value was there.
//! assert!(set.erase(&1));
//! assert!(!set.erase(&1));
//! assert!(set.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::cursor::{Cursor, IntoIter, Iter, Position, RevCursor};
use crate::node::{self, balance, Link, Node};
use crate::util::Edit;

/// A self-balancing Binary Search Tree (specifically, an AVL tree) storing unique, totally ordered
/// values. Besides insertion, lookup, and removal it answers order-statistics queries (rank,
/// selection, and distance between two elements) in `O(lg N)`.
#[derive(Clone)]
pub struct AvlSet<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for AvlSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AvlSet<T> {
    /// Generate a new, empty `AvlSet`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Generate a set holding exactly `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::AvlSet;
    ///
    /// let set = AvlSet::from_value("only");
    /// assert_eq!(set.len(), 1);
    /// assert_eq!(set.first(), Some(&"only"));
    /// ```
    pub fn from_value(value: T) -> Self {
        Self {
            root: Some(Node::new_boxed(value)),
            len: 1,
        }
    }

    /// Number of elements in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Alias of [`len`][Self::len].
    pub fn size(&self) -> usize {
        self.len
    }

    /// Whether the set holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the underlying tree. An empty set has a height of 0 and a single element a
    /// height of 1.
    pub fn height(&self) -> usize {
        usize::from(node::height(&self.root))
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
        log::trace!("clear: set emptied");
    }

    /// Exchanges the contents of two sets in `O(1)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::AvlSet;
    ///
    /// let mut small = AvlSet::from([1, 2]);
    /// let mut large = AvlSet::from([10, 20, 30]);
    /// small.swap(&mut large);
    ///
    /// assert_eq!(small.len(), 3);
    /// assert_eq!(large.iter().copied().collect::<Vec<_>>(), [1, 2]);
    /// ```
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Moves the contents out of this set, leaving it empty.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// The smallest element, if any.
    pub fn first(&self) -> Option<&T> {
        self.root().map(|root| &root.min().data)
    }

    /// The largest element, if any.
    pub fn last(&self) -> Option<&T> {
        self.root().map(|root| &root.max().data)
    }

    /// Element with `k` smaller elements in the set, i.e. the `k`-th smallest counting from 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::AvlSet;
    ///
    /// let set = AvlSet::from([30, 10, 20]);
    /// assert_eq!(set.select(0), Some(&10));
    /// assert_eq!(set.select(2), Some(&30));
    /// assert_eq!(set.select(3), None);
    /// ```
    pub fn select(&self, mut k: usize) -> Option<&T> {
        let mut node = self.root()?;
        loop {
            node = match k.cmp(&node.size_left) {
                Ordering::Less => node.left()?,
                Ordering::Equal => return Some(&node.data),
                Ordering::Greater => {
                    k -= node.size_left + 1;
                    node.right()?
                }
            };
        }
    }

    /// An iterator visiting the elements in ascending order. Call `.rev()` on it for descending
    /// order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Cursor at the smallest element, or at the end sentinel if the set is empty.
    pub fn begin(&self) -> Cursor<'_, T> {
        match self.root() {
            Some(root) => Cursor::new(self, Position::At(root.min())),
            None => self.end(),
        }
    }

    /// Cursor at the end sentinel, one past the largest element.
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self, Position::End)
    }

    /// Cursor at the before-first sentinel, one before the smallest element.
    pub fn before_first(&self) -> Cursor<'_, T> {
        Cursor::new(self, Position::BeforeFirst)
    }

    /// Reverse cursor at the largest element, or at the reverse end if the set is empty.
    pub fn rbegin(&self) -> RevCursor<'_, T> {
        match self.root() {
            Some(root) => RevCursor::new(Cursor::new(self, Position::At(root.max()))),
            None => self.rend(),
        }
    }

    /// Reverse cursor one past the smallest element in descending order.
    pub fn rend(&self) -> RevCursor<'_, T> {
        RevCursor::new(self.before_first())
    }

    pub(crate) fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

impl<T: Ord> AvlSet<T> {
    /// Inserts `value` unless an equal element is already present. Returns whether the set
    /// changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    ///
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let (root, inserted) = insert(self.root.take(), value).into_parts();
        self.root = Some(root);
        if inserted {
            self.len += 1;
        }
        log::trace!(
            "insert: {}, {} elements",
            if inserted { "added" } else { "duplicate" },
            self.len
        );
        inserted
    }

    /// Removes the element equal to `value`. Returns whether it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::AvlSet;
    ///
    /// let mut set = AvlSet::from([10, 20, 5]);
    ///
    /// assert!(set.erase(&10));
    /// assert!(!set.erase(&42));
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn erase(&mut self, value: &T) -> bool {
        let (root, erased) = erase(self.root.take(), value).into_parts();
        self.root = root;
        if erased {
            self.len -= 1;
        }
        log::trace!(
            "erase: {}, {} elements",
            if erased { "removed" } else { "absent" },
            self.len
        );
        erased
    }

    /// Potentially finds the stored element equal to `value`. If no element matches, `None` is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::AvlSet;
    ///
    /// let set = AvlSet::from([(1, 'a'), (2, 'b')]);
    ///
    /// assert_eq!(set.find(&(2, 'b')).map(|pair| pair.1), Some('b'));
    /// assert_eq!(set.find(&(2, 'c')), None);
    /// ```
    pub fn find(&self, value: &T) -> Option<&T> {
        self.root()?.find(value).map(|n| &n.data)
    }

    /// Whether an element equal to `value` is stored.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Number of elements smaller than `value`, provided `value` itself is stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::AvlSet;
    ///
    /// let set = AvlSet::from([10, 5, 15, 3, 7]);
    /// assert_eq!(set.rank(&3), Some(0));
    /// assert_eq!(set.rank(&10), Some(3));
    /// assert_eq!(set.rank(&4), None);
    /// ```
    pub fn rank(&self, value: &T) -> Option<usize> {
        count_less(self.root(), value)
    }

    /// The element stored at the deepest node whose subtree contains the positions of both `a`
    /// and `b`. `None` if the descent runs off the tree before the two paths split.
    pub fn lowest_common_ancestor(&self, a: &T, b: &T) -> Option<&T> {
        self.lca(a, b).map(|n| &n.data)
    }

    /// Number of steps from `a` to `b` in ascending order, i.e. `rank(b) - rank(a)`.
    ///
    /// An absent endpoint, or `b` ordered before `a`, yields 0, which is indistinguishable from
    /// `distance(a, a)`. Use [`try_distance`][Self::try_distance] to tell these apart.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::AvlSet;
    ///
    /// let set = AvlSet::from([10, 5, 15, 3, 7]);
    /// assert_eq!(set.distance(&3, &7), 2);
    /// assert_eq!(set.distance(&3, &15), 4);
    /// assert_eq!(set.distance(&5, &5), 0);
    /// assert_eq!(set.distance(&3, &4), 0);
    /// ```
    pub fn distance(&self, a: &T, b: &T) -> usize {
        self.try_distance(a, b).unwrap_or_else(|| {
            log::debug!("distance: endpoint absent or out of order, reporting 0");
            0
        })
    }

    /// Like [`distance`][Self::distance] but `None` when either endpoint is absent or `b` is
    /// ordered before `a`.
    pub fn try_distance(&self, a: &T, b: &T) -> Option<usize> {
        if b < a {
            return None;
        }
        let lca = self.lca(a, b)?;

        // Hops from `a` up to the ancestor: everything in its left subtree above `a`, plus itself.
        let to_lca = match a.cmp(&lca.data) {
            Ordering::Equal => 0,
            _ => count_greater(lca.left(), a)? + 1,
        };
        let from_lca = match b.cmp(&lca.data) {
            Ordering::Equal => 0,
            _ => count_less(lca.right(), b)? + 1,
        };
        Some(to_lca + from_lca)
    }

    fn lca(&self, a: &T, b: &T) -> Option<&Node<T>> {
        let mut node = self.root()?;
        loop {
            node = if a < &node.data && b < &node.data {
                node.left()?
            } else if a > &node.data && b > &node.data {
                node.right()?
            } else {
                return Some(node);
            };
        }
    }
}

/// Inserts `value` into the subtree and hands back its root, rebalanced if it grew.
fn insert<T: Ord>(link: Link<T>, value: T) -> Edit<Box<Node<T>>> {
    let Some(mut node) = link else {
        return Edit::Changed(Node::new_boxed(value));
    };

    let inserted = match value.cmp(&node.data) {
        Ordering::Less => {
            let (left, inserted) = insert(node.left.take(), value).into_parts();
            node.left = Some(left);
            inserted
        }
        Ordering::Equal => false,
        Ordering::Greater => {
            let (right, inserted) = insert(node.right.take(), value).into_parts();
            node.right = Some(right);
            inserted
        }
    };

    if cfg!(debug_assertions) {
        if let Some(left) = node.left() {
            assert!(node.data > left.data);
        }
        if let Some(right) = node.right() {
            assert!(node.data < right.data);
        }
    }

    if inserted {
        Edit::Changed(balance(node))
    } else {
        Edit::Unchanged(node)
    }
}

/// Removes the element equal to `key` from the subtree and hands back what remains of it.
fn erase<T: Ord>(link: Link<T>, key: &T) -> Edit<Link<T>> {
    let Some(mut node) = link else {
        return Edit::Unchanged(None);
    };

    let edit = match key.cmp(&node.data) {
        Ordering::Less => erase(node.left.take(), key).map(|left| node.left = left),
        Ordering::Equal => return Edit::Changed(remove_root(node)),
        Ordering::Greater => erase(node.right.take(), key).map(|right| node.right = right),
    };

    match edit {
        Edit::Unchanged(()) => Edit::Unchanged(Some(node)),
        Edit::Changed(()) => Edit::Changed(Some(balance(node))),
    }
}

/// Removes `node` itself from its subtree, promoting its in-order successor when it has a right
/// child, and returns the rebalanced remainder.
fn remove_root<T>(mut node: Box<Node<T>>) -> Link<T> {
    let Some(mut right) = node.right.take() else {
        return node.left.take().map(balance);
    };

    if right.left.is_none() {
        // The successor is the right child itself: it simply takes `node`'s place.
        right.left = node.left.take();
        return Some(balance(right));
    }

    let (successor, rest) = remove_min(right);
    node.data = successor;
    node.right = rest;
    Some(balance(node))
}

/// Detaches the smallest element of the subtree, returning it and the rebalanced remainder.
fn remove_min<T>(mut node: Box<Node<T>>) -> (T, Link<T>) {
    match node.left.take() {
        None => {
            let Node { data, right, .. } = *node;
            (data, right)
        }
        Some(left) => {
            let (min, rest) = remove_min(left);
            node.left = rest;
            (min, Some(balance(node)))
        }
    }
}

/// Number of elements in the subtree smaller than `key`, if `key` is in the subtree.
fn count_less<T: Ord>(mut link: Option<&Node<T>>, key: &T) -> Option<usize> {
    let mut count = 0;
    while let Some(node) = link {
        match key.cmp(&node.data) {
            Ordering::Less => link = node.left(),
            Ordering::Equal => return Some(count + node.size_left),
            Ordering::Greater => {
                count += node.size_left + 1;
                link = node.right();
            }
        }
    }
    None
}

/// Number of elements in the subtree larger than `key`, if `key` is in the subtree.
fn count_greater<T: Ord>(mut link: Option<&Node<T>>, key: &T) -> Option<usize> {
    let mut count = 0;
    while let Some(node) = link {
        match key.cmp(&node.data) {
            Ordering::Less => {
                count += node.size_right + 1;
                link = node.left();
            }
            Ordering::Equal => return Some(count + node.size_right),
            Ordering::Greater => link = node.right(),
        }
    }
    None
}

/// Two sets are equal when they hold the same number of elements laid out in the same tree
/// shape. Sets built by different insertion orders may hold the same elements yet differ in
/// shape; compare [`iter`][AvlSet::iter] outputs to test for equal contents.
impl<T: PartialEq> PartialEq for AvlSet<T> {
    fn eq(&self, other: &Self) -> bool {
        fn same_shape<T: PartialEq>(a: Option<&Node<T>>, b: Option<&Node<T>>) -> bool {
            match (a, b) {
                (None, None) => true,
                (Some(a), Some(b)) => {
                    a.data == b.data
                        && same_shape(a.left(), b.left())
                        && same_shape(a.right(), b.right())
                }
                _ => false,
            }
        }

        self.len == other.len && same_shape(self.root(), other.root())
    }
}

impl<T: Eq> Eq for AvlSet<T> {}

impl<T> fmt::Debug for AvlSet<T>
where
    T: Ord + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Ord> FromIterator<T> for AvlSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for AvlSet<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Ord> Extend<T> for AvlSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: Ord> IntoIterator for &'a AvlSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for AvlSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.root, self.len)
    }
}
