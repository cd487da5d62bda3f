//! Forward sibling search.
//!
//! [`find_all_after`] returns every child of a parent that comes after a
//! starting child (or index) and passes a test, in document order.
//!
//! # Examples
//!
//! ```
//! use unist_find_all_after::document::node::Node;
//! use unist_find_all_after::query::find_all_after;
//!
//! let paragraph = Node::parent(
//!     "paragraph",
//!     vec![
//!         Node::literal("text", "Some "),
//!         Node::parent("strong", vec![Node::literal("text", "bold")]),
//!         Node::literal("text", "."),
//!     ],
//! );
//!
//! let found = find_all_after(&paragraph, 0usize, "strong").unwrap();
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].kind(), "strong");
//! ```

use super::error::FindError;
use super::matcher::{convert, Test};
use super::position::Position;
use crate::document::node::Node;
use log::debug;
use serde_json::Value;

/// Finds the children of `parent` after `position` that pass `test`.
///
/// The starting child is never included. An index at or past the last child
/// yields an empty result.
///
/// # Errors
///
/// - `InvalidParent` if `parent` has no `type` or no children list
/// - `NodeNotFound` if `position` is a node that `parent` does not own
pub fn find_all_after<'a, 'p, 't>(
    parent: &'a Node,
    position: impl Into<Position<'p>>,
    test: impl Into<Test<'t>>,
) -> Result<Vec<&'a Node>, FindError> {
    let children = match parent.children() {
        Some(children) if parent.is_parent() => children,
        _ => return Err(FindError::InvalidParent),
    };

    let index = position.into().resolve(parent)?;
    let matcher = convert(test.into());

    let results: Vec<&'a Node> = children
        .iter()
        .enumerate()
        .skip(index.saturating_add(1))
        .filter(|(i, child)| matcher(child, *i, parent))
        .map(|(_, child)| child)
        .collect();

    debug!(
        "find_all_after: parent={} start={} siblings={} matches={}",
        parent.kind(),
        index,
        children.len(),
        results.len()
    );

    Ok(results)
}

/// Like [`find_all_after`], with the position and test given as JSON.
///
/// Inputs are checked in order: parent, then position, then test.
///
/// # Errors
///
/// Everything [`find_all_after`] reports, plus the failures of
/// [`Position::from_value`] and [`Test::from_value`].
pub fn find_all_after_value<'a>(
    parent: &'a Node,
    position: &Value,
    test: &Value,
) -> Result<Vec<&'a Node>, FindError> {
    if !parent.is_parent() {
        return Err(FindError::InvalidParent);
    }
    let position = Position::from_value(position)?;
    let test = Test::from_value(test)?;
    find_all_after(parent, position, test)
}
