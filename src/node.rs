//! The node store and the balancing engine shared by every mutating operation of
//! [`AvlSet`][crate::AvlSet].
//!
//! Each [`Node`] exclusively owns its children through a [`Link`], so the whole
//! structure is a true tree and dropping the root drops everything beneath it.
//! Besides the AVL height, every node keeps the number of elements in its left
//! and right subtrees. That augmentation is what lets the set answer rank and
//! distance queries in `O(lg N)`.

use std::cmp::Ordering;

/// An owning, possibly empty, reference to a subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// One stored element together with the bookkeeping for the subtree rooted here.
#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) data: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub(crate) height: u8,
    /// Number of elements in the left subtree.
    pub(crate) size_left: usize,
    /// Number of elements in the right subtree.
    pub(crate) size_right: usize,
}

/// Height of a possibly empty subtree. An empty subtree has a height of 0.
pub(crate) fn height<T>(link: &Link<T>) -> u8 {
    link.as_ref().map_or(0, |n| n.height)
}

/// Number of elements in a possibly empty subtree.
pub(crate) fn size<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |n| n.size())
}

impl<T> Node<T> {
    /// Construct a new leaf `Node` holding `data`.
    pub(crate) fn new_boxed(data: T) -> Box<Self> {
        Box::new(Node {
            data,
            left: None,
            right: None,
            height: 1,
            size_left: 0,
            size_right: 0,
        })
    }

    /// Number of elements in the subtree rooted at this node, itself included.
    pub(crate) fn size(&self) -> usize {
        self.size_left + self.size_right + 1
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// The smallest node of this subtree.
    pub(crate) fn min(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    /// The largest node of this subtree.
    pub(crate) fn max(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        node
    }

    /// Recomputes the height and both subtree sizes from the children, which must already be
    /// correct. Called after any change to this node's children.
    pub(crate) fn update(&mut self) {
        // An AVL tree of height 255 needs more nodes than fit in memory.
        self.height = height(&self.left).max(height(&self.right)) + 1;
        self.size_left = size(&self.left);
        self.size_right = size(&self.right);
    }

    /// The difference in height between the left and right subtrees. See [the Wikipedia
    /// page][wiki] for more details. Positive means left-heavy.
    ///
    /// [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Balance_factor
    pub(crate) fn balance_factor(&self) -> i16 {
        i16::from(height(&self.left)) - i16::from(height(&self.right))
    }

    /// Finds the node holding `key` in this subtree.
    pub(crate) fn find(&self, key: &T) -> Option<&Self>
    where
        T: Ord,
    {
        let mut node = self;
        loop {
            node = match key.cmp(&node.data) {
                Ordering::Less => node.left()?,
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right()?,
            };
        }
    }
}

/// Balances a subtree using the heights of the children and returns its (possibly new) root.
///
/// The children of `root` must already be AVL trees whose heights differ by at most 2, which is
/// always the case after a single insertion or removal below `root`.
pub(crate) fn balance<T>(mut root: Box<Node<T>>) -> Box<Node<T>> {
    // See https://en.wikipedia.org/wiki/AVL_tree#Rebalancing for terminology.
    let balanced = match root.balance_factor() {
        -2 => {
            let right = root.right.as_ref().expect("Right-heavy => right child");
            if right.balance_factor() <= 0 {
                rotate_left(root)
            } else {
                rotate_right_left(root)
            }
        }
        2 => {
            let left = root.left.as_ref().expect("Left-heavy => left child");
            if left.balance_factor() >= 0 {
                rotate_right(root)
            } else {
                rotate_left_right(root)
            }
        }
        _ => {
            root.update();
            root
        }
    };

    if cfg!(debug_assertions) {
        let left_height = height(&balanced.left);
        let right_height = height(&balanced.right);
        assert_eq!(balanced.height, left_height.max(right_height) + 1);
        assert!(left_height.abs_diff(right_height) <= 1);
        assert_eq!(balanced.size_left, size(&balanced.left));
        assert_eq!(balanced.size_right, size(&balanced.right));
    }
    balanced
}

/// Rotate `old_root` to the right. This moves the left child up vertically and `old_root` down
/// vertically. Used to rebalance the tree when the left child is too tall. As such, it must only
/// be called when there _is_ a left child.
///
/// ## Panics
///
/// When called on a node without a left child.
///
/// # Diagram
///
/// ```text
///      old_root              new_root
///       /     \              /     \
///   new_root   z   rotate ->  x    old_root
///    /  \                           /  \
///   x    y                         y    z
/// ```
fn rotate_right<T>(mut old_root: Box<Node<T>>) -> Box<Node<T>> {
    let mut new_root = old_root.left.take().expect("Rotate right => left child");

    old_root.left = new_root.right.take();
    old_root.update();

    new_root.right = Some(old_root);
    new_root.update();
    new_root
}

/// Mirror image of [`rotate_right`]: the right child moves up and `old_root` becomes its left
/// child, inheriting the right child's old left subtree.
///
/// ## Panics
///
/// When called on a node without a right child.
fn rotate_left<T>(mut old_root: Box<Node<T>>) -> Box<Node<T>> {
    let mut new_root = old_root.right.take().expect("Rotate left => right child");

    old_root.right = new_root.left.take();
    old_root.update();

    new_root.left = Some(old_root);
    new_root.update();
    new_root
}

fn rotate_right_left<T>(mut root: Box<Node<T>>) -> Box<Node<T>> {
    let right = root.right.take().expect("Rotate right-left => right child");
    root.right = Some(rotate_right(right));
    rotate_left(root)
}

fn rotate_left_right<T>(mut root: Box<Node<T>>) -> Box<Node<T>> {
    let left = root.left.take().expect("Rotate left-right => left child");
    root.left = Some(rotate_left(left));
    rotate_right(root)
}
