//! An unbalanced, recursive BST. Operations that may replace the root take the tree by value and
//! hand back the new subtree root, so callers rebind it.
//!
//! # Examples
//!
//! ```
//! use search_tree::Tree;
//!
//! let tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&1));
//!
//! // `insert` hands back the (possibly new) root.
//! let tree = tree.insert(1);
//! assert!(tree.search(&1));
//!
//! // Inserting a value that's already present changes nothing.
//! let tree = tree.insert(1);
//! assert_eq!(tree.len(), 1);
//!
//! let tree = tree.delete(&1);
//! assert!(tree.is_empty());
//! ```

mod iter;

pub use iter::Iter;

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::mem;
use std::ptr;

use log::{debug, trace};

use crate::error::{Error, Result};
use iter::Levels;

/// A Binary Search Tree of distinct values. Every child of a [`Node`] is itself a `Tree`, so a
/// `Tree` is both "the whole tree" and "a subtree root".
#[derive(Clone)]
pub struct Tree<T> {
    root: Option<Box<Node<T>>>,
}

/// A `Node` holds a value and owns its two subtrees, either of which may be empty.
#[derive(Clone, Debug)]
pub struct Node<T> {
    value: T,
    left: Tree<T>,
    right: Tree<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    // Children are detached onto a heap stack so a list-shaped tree doesn't recurse once per
    // level when dropped.
    fn drop(&mut self) {
        let mut stack: Vec<_> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.root.take());
            stack.extend(node.right.root.take());
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns a tree that contains `value`. If an equal value is already present the tree is
    /// returned unchanged and `value` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree = tree.insert(2);
    /// tree = tree.insert(1);
    /// tree = tree.insert(2);
    ///
    /// assert_eq!(tree.inorder().collect::<Vec<_>>(), [&1, &2]);
    /// ```
    pub fn insert(mut self, value: T) -> Self
    where
        T: Ord,
    {
        infallible(self.insert_by(value, &mut total));
        self
    }

    /// Returns whether a value equal to `key` is in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::Tree;
    ///
    /// let tree = Tree::new().insert(1);
    ///
    /// assert!(tree.search(&1));
    /// assert!(!tree.search(&42));
    /// ```
    pub fn search(&self, key: &T) -> bool
    where
        T: Ord,
    {
        infallible(self.search_by(key, &mut total))
    }

    /// Lazily walks the values in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::Tree;
    ///
    /// let tree: Tree<_> = [3, 1, 2].into_iter().collect();
    ///
    /// assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [1, 2, 3]);
    /// // Traversal only reads the tree so it can be repeated.
    /// assert_eq!(tree.inorder().count(), 3);
    /// ```
    pub fn inorder(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns a tree without the value equal to `key`. A node with two children takes the value
    /// of its in-order successor (the smallest value of its right subtree), which is then removed
    /// from that subtree. Deleting a missing value returns the tree unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// let tree = tree.delete(&2);
    ///
    /// assert!(!tree.search(&2));
    /// // The successor of 2 is now the root.
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(3));
    /// ```
    pub fn delete(mut self, key: &T) -> Self
    where
        T: Ord,
    {
        infallible(self.delete_by(key, &mut total));
        self
    }

    /// Inserts `value` into a tree of partially ordered values. Returns whether it was inserted
    /// (`false` if an equal value was already present).
    ///
    /// # Errors
    ///
    /// [`Error::Incomparable`] if `value` can't be ordered against itself or against a value on
    /// its path. The tree is left as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.try_insert(1.5), Ok(true));
    /// assert_eq!(tree.try_insert(f64::NAN), Err(Error::Incomparable));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn try_insert(&mut self, value: T) -> Result<bool>
    where
        T: PartialOrd,
    {
        if value.partial_cmp(&value).is_none() {
            debug!("refusing to insert a value that isn't ordered against itself");
            return Err(Error::Incomparable);
        }
        self.insert_by(value, &mut partial).inspect_err(|e| debug!("insert abandoned: {e}"))
    }

    /// Searches a tree of partially ordered values.
    ///
    /// # Errors
    ///
    /// [`Error::Incomparable`] if `key` can't be ordered against a value on its path.
    pub fn try_search(&self, key: &T) -> Result<bool>
    where
        T: PartialOrd,
    {
        self.search_by(key, &mut partial).inspect_err(|e| debug!("search abandoned: {e}"))
    }

    /// Deletes `key` from a tree of partially ordered values. Returns whether a value was
    /// removed.
    ///
    /// # Errors
    ///
    /// [`Error::Incomparable`] if `key` can't be ordered against a value on its path. The tree
    /// is left as it was.
    pub fn try_delete(&mut self, key: &T) -> Result<bool>
    where
        T: PartialOrd,
    {
        self.delete_by(key, &mut partial).inspect_err(|e| debug!("delete abandoned: {e}"))
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the values in the tree. This walks every node.
    pub fn len(&self) -> usize {
        self.inorder().count()
    }

    /// Number of levels in the tree. An empty tree has a height of 0 and a lone root a height
    /// of 1.
    pub fn height(&self) -> usize {
        self.levels().count()
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        self.root().map(Node::min_value)
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(right) = node.right.root() {
            node = right;
        }
        Some(&node.value)
    }

    /// Returns whether `x` and `y` are cousins: on the same level of the tree but with different
    /// parents. The root has no parent so it has no cousins.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::Tree;
    ///
    /// //      50
    /// //    /    \
    /// //   30    70
    /// //  /        \
    /// // 20        80
    /// let tree: Tree<_> = [50, 30, 70, 20, 80].into_iter().collect();
    ///
    /// assert!(tree.are_cousins(&20, &80));
    /// // Siblings share a parent.
    /// assert!(!tree.are_cousins(&30, &70));
    /// ```
    pub fn are_cousins(&self, x: &T, y: &T) -> bool
    where
        T: PartialEq,
    {
        if x == y {
            return false;
        }
        for level in self.levels() {
            let parent_of = |key: &T| {
                level
                    .iter()
                    .find(|visit| visit.node.value == *key)
                    .map(|visit| visit.parent)
            };
            match (parent_of(x), parent_of(y)) {
                (None, None) => continue,
                (Some(Some(px)), Some(Some(py))) => return !ptr::eq(px, py),
                // Found only one of them, or one of them is the root.
                _ => return false,
            }
        }
        false
    }

    fn levels(&self) -> Levels<'_, T> {
        Levels::new(self)
    }

    fn insert_by<E>(
        &mut self,
        value: T,
        cmp: &mut impl FnMut(&T, &T) -> Result<Ordering, E>,
    ) -> Result<bool, E> {
        let Some(node) = self.root.as_mut() else {
            trace!("inserting new node");
            self.root = Some(Box::new(Node::new(value)));
            return Ok(true);
        };
        match cmp(&value, &node.value)? {
            Ordering::Less => node.left.insert_by(value, cmp),
            Ordering::Equal => {
                trace!("value already present, ignoring insert");
                Ok(false)
            }
            Ordering::Greater => node.right.insert_by(value, cmp),
        }
    }

    fn search_by<E>(
        &self,
        key: &T,
        cmp: &mut impl FnMut(&T, &T) -> Result<Ordering, E>,
    ) -> Result<bool, E> {
        let mut current = self.root();
        while let Some(node) = current {
            current = match cmp(key, &node.value)? {
                Ordering::Less => node.left.root(),
                Ordering::Equal => return Ok(true),
                Ordering::Greater => node.right.root(),
            };
        }
        Ok(false)
    }

    fn delete_by<E>(
        &mut self,
        key: &T,
        cmp: &mut impl FnMut(&T, &T) -> Result<Ordering, E>,
    ) -> Result<bool, E> {
        let Some(node) = self.root.as_mut() else {
            trace!("value to delete not found");
            return Ok(false);
        };
        match cmp(key, &node.value)? {
            Ordering::Less => node.left.delete_by(key, cmp),
            Ordering::Greater => node.right.delete_by(key, cmp),
            Ordering::Equal => {
                self.unlink_root();
                Ok(true)
            }
        }
    }

    /// Removes the root node, rebinding `self` to whatever replaces it.
    fn unlink_root(&mut self) {
        let Some(mut node) = self.root.take() else {
            return;
        };
        *self = if node.left.is_empty() {
            trace!("deleting node without a left child");
            mem::take(&mut node.right)
        } else {
            match node.right.pop_min() {
                None => {
                    trace!("deleting node without a right child");
                    mem::take(&mut node.left)
                }
                Some(successor) => {
                    trace!("deleting node with two children, promoting its successor");
                    node.value = successor;
                    Self { root: Some(node) }
                }
            }
        };
    }

    /// Removes the smallest node of this subtree and returns its value. That node has no left
    /// child so its right subtree takes its place.
    fn pop_min(&mut self) -> Option<T> {
        let node = self.root.as_mut()?;
        if node.left.is_empty() {
            let mut min = self.root.take()?;
            *self = mem::take(&mut min.right);
            Some(min.value)
        } else {
            node.left.pop_min()
        }
    }
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: Tree::new(),
            right: Tree::new(),
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The subtree of values smaller than this node's.
    pub fn left(&self) -> &Tree<T> {
        &self.left
    }

    /// The subtree of values larger than this node's.
    pub fn right(&self) -> &Tree<T> {
        &self.right
    }

    /// The smallest value in the subtree rooted at this node, found by following left children.
    pub fn min_value(&self) -> &T {
        let mut node = self;
        while let Some(left) = node.left.root() {
            node = left;
        }
        &node.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root()).finish()
    }
}

/// Writes the values in ascending order, separated by spaces.
impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.inorder().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::insert)
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            infallible(self.insert_by(value, &mut total));
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder()
    }
}

fn total<T: Ord>(a: &T, b: &T) -> Result<Ordering, Infallible> {
    Ok(a.cmp(b))
}

fn partial<T: PartialOrd>(a: &T, b: &T) -> Result<Ordering> {
    a.partial_cmp(b).ok_or(Error::Incomparable)
}

fn infallible<R>(result: Result<R, Infallible>) -> R {
    match result {
        Ok(r) => r,
        Err(never) => match never {},
    }
}
