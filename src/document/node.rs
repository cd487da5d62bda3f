//! unist node representation.
//!
//! This module provides the core data structure for representing unist syntax
//! trees. A `Node` carries its `type` discriminant, optional children, optional
//! positional information, and every other field (`value`, `depth`, `url`,
//! `data`, ...) as an ordered map of JSON values, so trees produced by any
//! unist-compatible parser can be loaded without losing information.
//!
//! # Example
//!
//! ```
//! use unist_find_all_after::document::node::Node;
//!
//! let paragraph = Node::parent(
//!     "paragraph",
//!     vec![
//!         Node::literal("text", "Some "),
//!         Node::parent("emphasis", vec![Node::literal("text", "emphasis")]),
//!     ],
//! );
//!
//! assert!(paragraph.is_parent());
//! assert_eq!(paragraph.children().map(|c| c.len()), Some(2));
//! assert_eq!(paragraph.children().unwrap()[0].value_str(), Some("Some "));
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;

/// A single place in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    /// 1-indexed line
    pub line: usize,
    /// 1-indexed column
    pub column: usize,
    /// 0-indexed byte offset, when the producer tracks it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
}

impl Point {
    pub fn new(line: usize, column: usize, offset: Option<usize>) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

/// The location of a node in its source file (unist `position`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    /// Place of the first character of the node
    pub start: Point,
    /// Place of the first character after the node
    pub end: Point,
    /// Producer-specific keys, such as the `indent` list older mdast emits
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Span {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            extra: IndexMap::new(),
        }
    }
}

/// A unist node.
///
/// `Node` is the primary type of the crate. Its serialized form is the plain
/// unist shape: `type` first, then the remaining fields, with `children` and
/// `position` left out when absent.
///
/// Nodes are compared structurally by `PartialEq`, but queries locate a node
/// among its siblings by address. Two equal nodes in the same children list
/// are still different children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(flatten)]
    fields: IndexMap<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    children: Option<Vec<Node>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    position: Option<Span>,
}

impl Node {
    /// Creates a leaf node of the given type with no other fields.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            fields: IndexMap::new(),
            children: None,
            position: None,
        }
    }

    /// Creates a parent node owning `children`.
    pub fn parent(kind: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            children: Some(children),
            ..Self::new(kind)
        }
    }

    /// Creates a literal node (a leaf with a string `value`), such as mdast `text`.
    pub fn literal(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(kind).with_field("value", Value::String(value.into()))
    }

    /// Sets a field, replacing any previous value under the same key.
    ///
    /// The reserved keys `type`, `children` and `position` have dedicated
    /// setters and are ignored here.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if !is_reserved(&key) {
            self.fields.insert(key, value.into());
        }
        self
    }

    /// Attaches positional information.
    pub fn with_position(mut self, span: Span) -> Self {
        self.position = Some(span);
        self
    }

    /// Replaces the children list. Passing `None` turns the node into a leaf.
    pub fn with_children(mut self, children: Option<Vec<Node>>) -> Self {
        self.children = children;
        self
    }

    /// Returns the node's `type` discriminant.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the children, or `None` when the node is not a parent.
    pub fn children(&self) -> Option<&[Node]> {
        self.children.as_deref()
    }

    pub fn position(&self) -> Option<&Span> {
        self.position.as_ref()
    }

    /// Returns the non-reserved fields in insertion order.
    pub fn fields(&self) -> &IndexMap<String, Value> {
        &self.fields
    }

    /// Returns a non-reserved field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns the `value` field when it is a string.
    pub fn value_str(&self) -> Option<&str> {
        self.get("value").and_then(Value::as_str)
    }

    /// Returns true if this node can act as a parent: it has a non-empty
    /// `type` and a children list (which may be empty).
    pub fn is_parent(&self) -> bool {
        !self.kind.is_empty() && self.children.is_some()
    }

    /// Looks up any field by its serialized name, including `type`,
    /// `children` and `position`.
    ///
    /// Reserved fields are rendered to JSON on demand, so this borrows for
    /// ordinary fields and allocates only for the reserved ones.
    pub fn field(&self, key: &str) -> Option<Cow<'_, Value>> {
        match key {
            "type" => Some(Cow::Owned(Value::String(self.kind.clone()))),
            "children" => self
                .children
                .as_ref()
                .and_then(|children| serde_json::to_value(children).ok())
                .map(Cow::Owned),
            "position" => self
                .position
                .as_ref()
                .and_then(|span| serde_json::to_value(span).ok())
                .map(Cow::Owned),
            _ => self.fields.get(key).map(Cow::Borrowed),
        }
    }

    /// Finds `child` among this node's children by address.
    ///
    /// A structurally equal node that lives elsewhere is not found.
    pub fn index_of(&self, child: &Node) -> Option<usize> {
        self.children()?
            .iter()
            .position(|candidate| std::ptr::eq(candidate, child))
    }
}

fn is_reserved(key: &str) -> bool {
    matches!(key, "type" | "children" | "position")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_literal_sets_value() {
        let node = Node::literal("text", "hi");
        assert_eq!(node.kind(), "text");
        assert_eq!(node.value_str(), Some("hi"));
        assert!(!node.is_parent());
    }

    #[test]
    fn test_with_field_ignores_reserved_keys() {
        let node = Node::new("heading")
            .with_field("depth", 2)
            .with_field("type", "paragraph")
            .with_field("children", json!([]));
        assert_eq!(node.kind(), "heading");
        assert!(node.children().is_none());
        assert_eq!(node.fields().len(), 1);
    }

    #[test]
    fn test_parent_requires_kind() {
        assert!(Node::parent("root", vec![]).is_parent());
        assert!(!Node::parent("", vec![]).is_parent());
    }

    #[test]
    fn test_field_addresses_reserved_keys() {
        let node = Node::parent("emphasis", vec![Node::literal("text", "a")]).with_position(
            Span::new(Point::new(1, 1, Some(0)), Point::new(1, 4, Some(3))),
        );

        assert_eq!(*node.field("type").unwrap(), json!("emphasis"));
        assert_eq!(
            *node.field("children").unwrap(),
            json!([{"type": "text", "value": "a"}])
        );
        assert_eq!(
            *node.field("position").unwrap(),
            json!({
                "start": {"line": 1, "column": 1, "offset": 0},
                "end": {"line": 1, "column": 4, "offset": 3}
            })
        );
        assert!(node.field("value").is_none());
    }

    #[test]
    fn test_index_of_uses_identity() {
        let parent = Node::parent(
            "paragraph",
            vec![Node::literal("text", "x"), Node::literal("text", "x")],
        );
        let children = parent.children().unwrap();

        assert_eq!(parent.index_of(&children[0]), Some(0));
        assert_eq!(parent.index_of(&children[1]), Some(1));

        let detached = Node::literal("text", "x");
        assert_eq!(detached, children[0]);
        assert_eq!(parent.index_of(&detached), None);
    }

    #[test]
    fn test_position_keeps_unknown_keys() {
        let input = json!({
            "type": "paragraph",
            "children": [],
            "position": {
                "start": {"line": 1, "column": 1, "offset": 0},
                "end": {"line": 2, "column": 5, "offset": 12},
                "indent": [1]
            }
        });
        let node: Node = serde_json::from_value(input.clone()).unwrap();
        let span = node.position().unwrap();
        assert_eq!(span.end.line, 2);
        assert_eq!(span.extra.get("indent"), Some(&json!([1])));
        assert_eq!(serde_json::to_value(&node).unwrap(), input);
    }

    #[test]
    fn test_serializes_unist_shape() {
        let node = Node::parent("heading", vec![Node::literal("text", "Title")])
            .with_field("depth", 1);
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "heading",
                "depth": 1,
                "children": [{"type": "text", "value": "Title"}]
            })
        );
    }
}
