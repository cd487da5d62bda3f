//! Tree-based navigation for unist documents.
//!
//! This module provides the `UnistTree` type, which owns a root node and
//! resolves index paths (a sequence of child indices from the root) to the
//! nodes they point at. Paths are how the command line selects the parent
//! whose siblings are searched.
//!
//! # Example
//!
//! ```
//! use unist_find_all_after::document::node::Node;
//! use unist_find_all_after::document::tree::UnistTree;
//!
//! let tree = UnistTree::new(Node::parent(
//!     "root",
//!     vec![Node::parent("paragraph", vec![Node::literal("text", "hi")])],
//! ));
//!
//! let text = tree.get_node(&[0, 0]).unwrap();
//! assert_eq!(text.value_str(), Some("hi"));
//! assert!(tree.get_node(&[0, 5]).is_none());
//! ```

use super::node::Node;
use crate::query::FindError;
use anyhow::{Context, Result};

/// A complete unist document tree.
///
/// `UnistTree` represents a loaded document and owns its root node.
#[derive(Debug, Clone, PartialEq)]
pub struct UnistTree {
    root: Node,
}

impl UnistTree {
    /// Creates a new tree with the given root node.
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    /// Returns a reference to the root node of the tree.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Gets a reference to the node at the specified path.
    ///
    /// Each index selects the nth child of the current node. An empty path
    /// selects the root.
    ///
    /// Returns `None` if:
    /// - The path is out of bounds at any level
    /// - The path attempts to descend into a node without children
    pub fn get_node(&self, path: &[usize]) -> Option<&Node> {
        let mut current = &self.root;

        for &index in path {
            current = current.children()?.get(index)?;
        }

        Some(current)
    }

    /// Resolves a dot-separated path (see [`parse_path`]) to a node that can
    /// act as a parent.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is malformed, points past the tree, or
    /// lands on a node that is not a parent (`FindError::InvalidParent`).
    pub fn parent_at(&self, path: &str) -> Result<&Node> {
        let indices = parse_path(path)?;
        let node = self
            .get_node(&indices)
            .with_context(|| format!("No node at path '{}'", path))?;
        if !node.is_parent() {
            return Err(FindError::InvalidParent)
                .with_context(|| format!("Node at path '{}' is a '{}'", path, node.kind()));
        }
        Ok(node)
    }
}

/// Parses a dot-separated index path such as `0.2.1`.
///
/// An empty string is the root path.
///
/// # Errors
///
/// Returns an error if any segment is not a non-negative integer.
pub fn parse_path(text: &str) -> Result<Vec<usize>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }

    text.split('.')
        .map(|segment| {
            segment
                .trim()
                .parse::<usize>()
                .with_context(|| format!("Invalid path segment '{}' in '{}'", segment, text))
        })
        .collect()
}
