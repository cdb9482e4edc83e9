//! An unbalanced Binary Search Tree (BST) of ordered values, mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! has two child subtrees, either of which may be empty. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is the
//! longest path from the root `Node` to a leaf `Node`). This tree does not
//! rebalance itself so inserting values in sorted order yields a tree whose
//! height is the number of values. BSTs also naturally support sorted
//! iteration by visiting the left subtree, then the subtree root, then the
//! right subtree.
//!
//! # Examples
//!
//! ```
//! use search_tree::Tree;
//!
//! let mut tree = Tree::new();
//! for value in [50, 30, 20, 40, 70, 60, 80] {
//!     tree = tree.insert(value);
//! }
//! assert_eq!(tree.to_string(), "20 30 40 50 60 70 80");
//!
//! assert!(tree.search(&40));
//! assert!(!tree.search(&90));
//!
//! tree = tree.delete(&20);
//! assert_eq!(tree.to_string(), "30 40 50 60 70 80");
//! tree = tree.delete(&30);
//! assert_eq!(tree.to_string(), "40 50 60 70 80");
//!
//! // 50 has two children so its successor, 60, takes its place.
//! tree = tree.delete(&50);
//! assert_eq!(tree.to_string(), "40 60 70 80");
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod tree;


pub use error::{Error, Result};
pub use tree::{Iter, Node, Tree};
