//! Errors returned by [`Tree`][crate::Tree] operations.

use thiserror::Error;

/// The ways an operation on a [`Tree`][crate::Tree] can fail. Only deletion can fail; every other
/// operation is total.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The key passed to [`Tree::delete`][crate::Tree::delete] is not in the tree. The tree is
    /// left exactly as it was.
    #[error("key not found in tree")]
    NotFound,
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
