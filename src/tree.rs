//! An owned, unbalanced BST. Every node exclusively owns its two children so the tree is a plain
//! `Option<Box<Node>>` structure with no parent pointers, no reference counting and no `unsafe`.
//!
//! # Examples
//!
//! ```
//! use owned_bst::{Error, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&1), None);
//!
//! assert!(tree.insert(1));
//! assert_eq!(tree.search(&1), Some(&1));
//!
//! // Inserting an existing key does nothing.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Deleting a key hands it back, deleting it again fails.
//! assert_eq!(tree.delete(&1), Ok(1));
//! assert_eq!(tree.delete(&1), Err(Error::NotFound));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::mem;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::pretty::Pretty;
use crate::traverse::{InOrder, LevelOrder, PostOrder, PreOrder};

/// An owning link to a subtree. `None` marks the empty slot below a leaf.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }

    /// Unlinks the smallest node of the subtree rooted at `self`. Returns its key and whatever
    /// should now sit where `self` was.
    ///
    /// The left spine can be as long as the subtree is large, so it's unhooked onto a heap stack
    /// and hooked back up without the smallest node instead of being walked recursively.
    fn pop_min(self: Box<Self>) -> (K, Link<K>) {
        let mut spine = Vec::new();
        let mut node = self;
        while let Some(left) = node.left.take() {
            spine.push(node);
            node = left;
        }

        let Node { key, right, .. } = *node;
        let rest = spine.into_iter().rev().fold(right, |below, mut parent| {
            parent.left = below;
            Some(parent)
        });
        (key, rest)
    }
}

/// Walks down from `link` following `key` and returns the link that either holds `key` or is the
/// empty slot where `key` belongs, together with how many levels below `link` it sits.
fn slot_for<'a, K>(mut link: &'a mut Link<K>, key: &K) -> (&'a mut Link<K>, usize)
where
    K: Ord,
{
    let mut depth = 0;
    loop {
        let ordering = match link.as_deref() {
            Some(node) => key.cmp(&node.key),
            None => return (link, depth),
        };
        link = match (ordering, link) {
            (Ordering::Less, Some(node)) => &mut node.left,
            (Ordering::Greater, Some(node)) => &mut node.right,
            (_, slot) => return (slot, depth),
        };
        depth += 1;
    }
}

/// A Binary Search Tree of unique keys. It can be used for inserting, searching, deleting and
/// walking keys in several orders.
///
/// No rebalancing is performed: the shape depends only on insertion order, so inserting keys in
/// ascending order degrades the tree into a chain with `O(n)` operations.
///
/// Every mutation takes `&mut self`. Sharing one tree between threads therefore needs a single
/// exclusive lock (e.g. a `Mutex<Tree<K>>`) around the whole structure.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    // Dropping `Box<Node>`s recursively would blow the stack on a long chain so unlink them onto
    // a heap stack first.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// Copies node by node, so the clone has the exact same shape.
impl<K> Clone for Tree<K>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        let mut root = None;
        {
            // Source nodes paired with the empty link their copy belongs in.
            let mut pending: Vec<(&Node<K>, &mut Link<K>)> = Vec::new();
            if let Some(node) = self.root.as_deref() {
                pending.push((node, &mut root));
            }
            while let Some((source, slot)) = pending.pop() {
                let copy = slot.insert(Node::new_boxed(source.key.clone()));
                if let Some(left) = source.left.as_deref() {
                    pending.push((left, &mut copy.left));
                }
                if let Some(right) = source.right.as_deref() {
                    pending.push((right, &mut copy.right));
                }
            }
        }

        Self {
            root,
            len: self.len,
        }
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Two trees are equal when they hold the same keys, whatever their shapes.
impl<K> PartialEq for Tree<K>
where
    K: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<K> Eq for Tree<K> where K: Eq {}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = InOrder<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of keys in the tree. This is tracked as keys come and go so it's `O(1)`, unlike
    /// [`count_nodes`][Tree::count_nodes].
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `key` as a new leaf. Returns `false`, leaving the tree untouched, if an equal key
    /// is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use owned_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(2));
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(2));
    ///
    /// assert_eq!(tree.inorder().collect::<Vec<_>>(), [&1, &2]);
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let (slot, depth) = slot_for(&mut self.root, &key);
        if slot.is_some() {
            trace!("insert: ignoring duplicate key at depth {}", depth);
            return false;
        }

        *slot = Some(Node::new_boxed(key));
        self.len += 1;
        trace!("insert: new leaf at depth {}", depth);
        true
    }

    /// Potentially finds the stored key equal to `key`. If no node has the corresponding key,
    /// `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use owned_bst::Tree;
    ///
    /// let tree: Tree<_> = vec![2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.search(&3), Some(&3));
    /// assert_eq!(tree.search(&42), None);
    /// ```
    pub fn search(&self, key: &K) -> Option<&K>
    where
        K: Ord,
    {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Some(&node.key),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Whether the tree holds a key equal to `key`.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.search(key).is_some()
    }

    /// Deletes the node holding `key` and returns the stored key. A node with two children takes
    /// the key of its in-order successor (the smallest key of its right subtree) and the
    /// successor's node is unlinked instead.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no node holds `key`. The tree is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use owned_bst::{Error, Tree};
    ///
    /// let mut tree: Tree<_> = vec![50, 30, 70, 20, 40].into_iter().collect();
    ///
    /// assert_eq!(tree.delete(&30), Ok(30));
    /// assert_eq!(tree.preorder().collect::<Vec<_>>(), [&50, &40, &20, &70]);
    ///
    /// assert_eq!(tree.delete(&30), Err(Error::NotFound));
    /// ```
    pub fn delete(&mut self, key: &K) -> Result<K>
    where
        K: Ord,
    {
        let (slot, depth) = slot_for(&mut self.root, key);
        let mut node = match slot.take() {
            Some(node) => node,
            None => {
                debug!("delete: key not found after descending {} levels", depth);
                return Err(Error::NotFound);
            }
        };

        let removed = match (node.left.take(), node.right.take()) {
            (None, None) => {
                trace!("delete: detaching leaf at depth {}", depth);
                node.key
            }
            (Some(child), None) | (None, Some(child)) => {
                trace!("delete: splicing only child up to depth {}", depth);
                *slot = Some(child);
                node.key
            }
            (Some(left), Some(right)) => {
                trace!("delete: promoting in-order successor to depth {}", depth);
                let (successor, right) = right.pop_min();
                node.left = Some(left);
                node.right = right;
                let removed = mem::replace(&mut node.key, successor);

                if cfg!(debug_assertions) {
                    if let Some(left) = node.left.as_deref() {
                        assert!(left.key < node.key);
                    }
                    if let Some(right) = node.right.as_deref() {
                        assert!(node.key < right.key);
                    }
                }

                *slot = Some(node);
                removed
            }
        };

        self.len -= 1;
        Ok(removed)
    }

    /// The smallest key in the tree, or `None` if it's empty.
    pub fn find_min(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.key)
    }

    /// The largest key in the tree, or `None` if it's empty.
    pub fn find_max(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.key)
    }

    /// Walks the keys in sorted order (left subtree, node, right subtree).
    pub fn inorder(&self) -> InOrder<'_, K> {
        InOrder::new(self.root.as_deref())
    }

    /// Walks the keys node first, then the left subtree, then the right subtree. Inserting keys
    /// in this order into an empty tree rebuilds the same shape.
    pub fn preorder(&self) -> PreOrder<'_, K> {
        PreOrder::new(self.root.as_deref())
    }

    /// Walks the keys left subtree first, then the right subtree, then the node. Every key comes
    /// after all of its descendants.
    pub fn postorder(&self) -> PostOrder<'_, K> {
        PostOrder::new(self.root.as_deref())
    }

    /// Walks the keys breadth first: the root, then each level from left to right.
    pub fn level_order(&self) -> LevelOrder<'_, K> {
        LevelOrder::new(self.root.as_deref())
    }

    /// Same as [`inorder`][Tree::inorder].
    pub fn iter(&self) -> InOrder<'_, K> {
        self.inorder()
    }

    /// The number of edges on the longest path from the root to a leaf. A single node has a height
    /// of 0 and the empty tree a height of -1.
    ///
    /// # Examples
    ///
    /// ```
    /// use owned_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// // Without rebalancing, ascending keys build a chain.
    /// tree.extend(vec![10, 20, 30]);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> isize {
        let mut height: isize = -1;
        let mut stack: Vec<(&Node<K>, isize)> =
            self.root.as_deref().map(|n| (n, 0)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        height
    }

    /// Counts the nodes by walking the whole tree. Always agrees with [`len`][Tree::len].
    pub fn count_nodes(&self) -> usize {
        self.preorder().count()
    }

    /// Checks the BST property: every key lies strictly between the bounds set by its ancestors
    /// (below every ancestor it is left of, above every ancestor it is right of). Stops at the
    /// first violation.
    pub fn is_valid_bst(&self) -> bool
    where
        K: Ord,
    {
        let mut stack: Vec<(&Node<K>, Option<&K>, Option<&K>)> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, None, None));
        }

        while let Some((node, lower, upper)) = stack.pop() {
            let above_lower = lower.map_or(true, |lower| *lower < node.key);
            let below_upper = upper.map_or(true, |upper| node.key < *upper);
            if !(above_lower && below_upper) {
                return false;
            }

            if let Some(left) = node.left.as_deref() {
                stack.push((left, lower, Some(&node.key)));
            }
            if let Some(right) = node.right.as_deref() {
                stack.push((right, Some(&node.key), upper));
            }
        }
        true
    }

    /// Renders the shape of the tree, one node per line, for humans. See [`Pretty`].
    pub fn pretty(&self) -> Pretty<'_, K> {
        Pretty::new(self.root.as_deref())
    }
}
