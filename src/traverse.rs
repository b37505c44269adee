//! Lazy walks over the keys of a [`Tree`][crate::Tree]. Each walk keeps its own explicit stack or
//! queue of pending nodes so even a degenerate, chain shaped tree is walked without recursion.
//!
//! # Examples
//!
//! ```
//! use owned_bst::Tree;
//!
//! let tree: Tree<_> = vec![2, 1, 3].into_iter().collect();
//!
//! assert_eq!(tree.inorder().collect::<Vec<_>>(), [&1, &2, &3]);
//! assert_eq!(tree.preorder().collect::<Vec<_>>(), [&2, &1, &3]);
//! assert_eq!(tree.postorder().collect::<Vec<_>>(), [&1, &3, &2]);
//! assert_eq!(tree.level_order().collect::<Vec<_>>(), [&2, &1, &3]);
//! ```

use std::collections::VecDeque;

use crate::tree::Node;

/// Yields keys in ascending order. Created by [`Tree::inorder`][crate::Tree::inorder].
pub struct InOrder<'a, K> {
    /// Nodes whose left subtree has been pushed but which haven't been yielded yet. The top of
    /// the stack is always the smallest key not yet yielded.
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> InOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<&'a Node<K>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.key)
    }
}

/// Yields each key before the keys of its left subtree, then its right subtree. Created by
/// [`Tree::preorder`][crate::Tree::preorder].
pub struct PreOrder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> PreOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for PreOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so that the left subtree comes off first.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(&node.key)
    }
}

/// Yields the keys of a node's left subtree, then its right subtree, then the node's own key.
/// Created by [`Tree::postorder`][crate::Tree::postorder].
pub struct PostOrder<'a, K> {
    /// Pending nodes, each flagged with whether its children are already on the stack above it.
    stack: Vec<(&'a Node<K>, bool)>,
}

impl<'a, K> PostOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.map(|node| (node, false)).into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for PostOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(&node.key);
            }

            self.stack.push((node, true));
            self.stack
                .extend(node.right.as_deref().map(|right| (right, false)));
            self.stack
                .extend(node.left.as_deref().map(|left| (left, false)));
        }
    }
}

/// Yields keys breadth first, level by level from the root, each level from left to right.
/// Created by [`Tree::level_order`][crate::Tree::level_order].
pub struct LevelOrder<'a, K> {
    queue: VecDeque<&'a Node<K>>,
}

impl<'a, K> LevelOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for LevelOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left.as_deref());
        self.queue.extend(node.right.as_deref());
        Some(&node.key)
    }
}
