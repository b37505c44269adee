//! A set of ordered keys kept in a plain, unbalanced Binary Search Tree.
//!
//! Each key lives in its own heap node, and each node owns at most two children: the one on
//! the left holds only smaller keys and the one on the right only larger ones. That ordering
//! is all the structure there is. Lookups, inserts and deletes follow a single path from the
//! root, so they cost as much as the tree is tall, and walking the nodes left-to-right visits
//! the keys in sorted order.
//!
//! Nothing here rebalances. The shape of a [`Tree`] comes only from the order keys arrive in.
//! Shuffled keys give a bushy tree with height near `lg n`, while sorted keys give a chain
//! as tall as the tree is large:
//!
//! ```
//! use owned_bst::Tree;
//!
//! let bushy: Tree<_> = vec![4, 2, 6, 1, 3, 5, 7].into_iter().collect();
//! let chain: Tree<_> = (1..=7).collect();
//!
//! assert_eq!(bushy.height(), 2);
//! assert_eq!(chain.height(), 6);
//!
//! // Same keys, so the two sets compare equal despite their shapes.
//! assert_eq!(bushy, chain);
//! ```
//!
//! Chains are legal trees. Every operation, including dropping and cloning, therefore walks
//! with its own heap stack or queue rather than the call stack.
//!
//! Keys are unique: inserting one that is already present changes nothing. Deleting a key
//! that isn't present is the only failure, reported as [`Error::NotFound`].
//!
//! ## Logging
//!
//! Where a leaf lands, which deletion case applies and delete misses are reported through the
//! [`log`] facade at `trace` and `debug` level. Install any logger to see them.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod pretty;
pub mod traverse;
mod tree;


pub use crate::error::{Error, Result};
pub use crate::tree::Tree;
