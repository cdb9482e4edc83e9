use std::iter::FusedIterator;
use std::mem;

use super::{Node, Tree};

/// A lazy, ascending walk over the values of a [`Tree`]. Created by [`Tree::inorder`].
///
/// Holds the path of nodes whose values haven't been yielded yet instead of recursing, so walking
/// a list-shaped tree uses heap memory rather than call stack.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(tree: &'a Tree<T>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(tree);
        iter
    }

    fn push_left_spine(&mut self, mut tree: &'a Tree<T>) {
        while let Some(node) = tree.root() {
            self.stack.push(node);
            tree = &node.left;
        }
    }
}

/// Manual implementation of `Clone` so `T` doesn't need to be `Clone`.
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(&node.value)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// A node seen during a level-order walk, along with the node it hangs off of.
pub(super) struct Visit<'a, T> {
    pub(super) node: &'a Node<T>,
    pub(super) parent: Option<&'a Node<T>>,
}

/// Yields a tree one level at a time, starting with the root.
pub(super) struct Levels<'a, T> {
    level: Vec<Visit<'a, T>>,
}

impl<'a, T> Levels<'a, T> {
    pub(super) fn new(tree: &'a Tree<T>) -> Self {
        let level = tree
            .root()
            .map(|node| Visit { node, parent: None })
            .into_iter()
            .collect();
        Self { level }
    }
}

impl<'a, T> Iterator for Levels<'a, T> {
    type Item = Vec<Visit<'a, T>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.level.is_empty() {
            return None;
        }
        let next = self
            .level
            .iter()
            .flat_map(|visit| {
                let parent = visit.node;
                [parent.left.root(), parent.right.root()]
                    .into_iter()
                    .flatten()
                    .map(move |node| Visit {
                        node,
                        parent: Some(parent),
                    })
            })
            .collect();
        Some(mem::replace(&mut self.level, next))
    }
}
