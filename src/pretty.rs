//! A sideways drawing of a [`Tree`][crate::Tree] for eyeballing its shape.
//!
//! ```
//! use owned_bst::Tree;
//!
//! let tree: Tree<_> = vec![50, 30, 70, 20, 60, 80].into_iter().collect();
//!
//! assert_eq!(
//!     tree.pretty().to_string(),
//!     "\
//! Root: 50
//!     L--- 30
//!         L--- 20
//!         R--- None
//!     R--- 70
//!         L--- 60
//!         R--- 80
//! "
//! );
//! ```

use std::fmt;

use crate::tree::Node;

/// Spaces added per level of depth.
const INDENT: usize = 4;

/// Draws one node per line, each child indented under its parent and tagged `L---` or `R---`. A
/// node with a single child draws `None` in place of the missing one; leaves draw no children.
/// The empty tree draws nothing. Created by [`Tree::pretty`][crate::Tree::pretty].
pub struct Pretty<'a, K> {
    root: Option<&'a Node<K>>,
}

impl<'a, K> Pretty<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self { root }
    }
}

impl<K> fmt::Display for Pretty<'_, K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = Vec::new();
        if let Some(root) = self.root {
            stack.push((Some(root), 0, "Root: "));
        }

        while let Some((link, level, prefix)) = stack.pop() {
            let indent = level * INDENT;
            match link {
                Some(node) => {
                    writeln!(f, "{:indent$}{}{}", "", prefix, node.key, indent = indent)?;
                    if node.left.is_some() || node.right.is_some() {
                        stack.push((node.right.as_deref(), level + 1, "R--- "));
                        stack.push((node.left.as_deref(), level + 1, "L--- "));
                    }
                }
                None => writeln!(f, "{:indent$}{}None", "", prefix, indent = indent)?,
            }
        }
        Ok(())
    }
}
