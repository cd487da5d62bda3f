//! Test specifications and the matchers built from them.
//!
//! A [`Test`] describes which nodes a query keeps. It is one of:
//!
//! - `Any` - every node
//! - `Type` - nodes with the given `type`
//! - `Attributes` - nodes whose fields equal every given field (shallow)
//! - `Node` - a node taken as the test itself
//! - `Predicate` - a closure over `(node, index, parent)`
//! - `AnyOf` - nodes passing at least one of several tests
//!
//! [`convert`] resolves a test once into a [`Matcher`], a single closure that
//! the scan calls for every candidate.
//!
//! # Examples
//!
//! ```
//! use unist_find_all_after::document::node::Node;
//! use unist_find_all_after::query::matcher::{convert, Test};
//!
//! let parent = Node::parent("paragraph", vec![Node::literal("text", "a"), Node::new("break")]);
//! let children = parent.children().unwrap();
//!
//! let is_text = convert(Test::from("text"));
//! assert!(is_text(&children[0], 0, &parent));
//! assert!(!is_text(&children[1], 1, &parent));
//!
//! let late = convert(Test::predicate(|_, index, _| index > 0));
//! assert!(late(&children[1], 1, &parent));
//! ```

use super::error::FindError;
use crate::document::node::Node;
use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;

/// A predicate over `(node, index, parent)`.
pub type Matcher<'t> = Box<dyn Fn(&Node, usize, &Node) -> bool + 't>;

/// A test specification.
pub enum Test<'t> {
    /// Matches every node.
    Any,
    /// Matches nodes whose `type` equals the name.
    Type(String),
    /// Matches nodes where every listed field is present and equal.
    Attributes(IndexMap<String, Value>),
    /// Matches nodes for which the closure returns true.
    Predicate(Matcher<'t>),
    /// Matches the node itself, or another node with the same `type` and
    /// equal scalar fields.
    ///
    /// `children`, `position` and object or array fields only ever equal
    /// themselves, so a node carrying any of them matches nothing but itself.
    Node(&'t Node),
    /// Matches nodes passing any member. Empty matches nothing.
    AnyOf(Vec<Test<'t>>),
}

impl<'t> Test<'t> {
    /// Wraps a closure as a test.
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&Node, usize, &Node) -> bool + 't,
    {
        Test::Predicate(Box::new(f))
    }
}

impl Test<'static> {
    /// Builds a test from a JSON specification.
    ///
    /// - `null` is `Any`
    /// - a string is `Type`
    /// - an object is `Attributes`
    /// - an array is `AnyOf` its converted members
    ///
    /// # Errors
    ///
    /// Returns `InvalidTest` for booleans and numbers, at any depth.
    pub fn from_value(value: &Value) -> Result<Self, FindError> {
        match value {
            Value::Null => Ok(Test::Any),
            Value::String(kind) => Ok(Test::Type(kind.clone())),
            Value::Object(map) => Ok(Test::Attributes(
                map.iter()
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect(),
            )),
            Value::Array(items) => items
                .iter()
                .map(Test::from_value)
                .collect::<Result<Vec<_>, _>>()
                .map(Test::AnyOf),
            Value::Bool(_) => Err(FindError::InvalidTest { found: "boolean" }),
            Value::Number(_) => Err(FindError::InvalidTest { found: "number" }),
        }
    }

    /// Builds a test from command-line text.
    ///
    /// Text that parses as JSON goes through [`Test::from_value`]; anything
    /// else is a type name, so `strong` and `"strong"` are the same test.
    pub fn parse(text: &str) -> Result<Self, FindError> {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => Test::from_value(&value),
            Err(_) => Ok(Test::Type(text.to_string())),
        }
    }

    /// Builds one test from several textual tests, as given by repeated
    /// command-line flags.
    ///
    /// No tests is `Any`, a single test is itself, and several are `AnyOf`.
    pub fn parse_all<S: AsRef<str>>(texts: &[S]) -> Result<Self, FindError> {
        let mut tests = texts
            .iter()
            .map(|text| Test::parse(text.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(match tests.len() {
            0 => Test::Any,
            1 => tests.remove(0),
            _ => Test::AnyOf(tests),
        })
    }
}

impl fmt::Debug for Test<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Test::Any => write!(f, "Any"),
            Test::Type(kind) => f.debug_tuple("Type").field(kind).finish(),
            Test::Attributes(attributes) => f.debug_tuple("Attributes").field(attributes).finish(),
            Test::Predicate(_) => write!(f, "Predicate(..)"),
            Test::Node(node) => f.debug_tuple("Node").field(&node.kind()).finish(),
            Test::AnyOf(tests) => f.debug_tuple("AnyOf").field(tests).finish(),
        }
    }
}

impl Default for Test<'_> {
    fn default() -> Self {
        Test::Any
    }
}

impl From<&str> for Test<'_> {
    fn from(kind: &str) -> Self {
        Test::Type(kind.to_string())
    }
}

impl From<String> for Test<'_> {
    fn from(kind: String) -> Self {
        Test::Type(kind)
    }
}

impl<'t> From<&'t Node> for Test<'t> {
    fn from(node: &'t Node) -> Self {
        Test::Node(node)
    }
}

impl From<IndexMap<String, Value>> for Test<'_> {
    fn from(attributes: IndexMap<String, Value>) -> Self {
        Test::Attributes(attributes)
    }
}

impl<'t> From<Vec<Test<'t>>> for Test<'t> {
    fn from(tests: Vec<Test<'t>>) -> Self {
        Test::AnyOf(tests)
    }
}

impl<'t, T: Into<Test<'t>>> From<Option<T>> for Test<'t> {
    fn from(test: Option<T>) -> Self {
        test.map_or(Test::Any, Into::into)
    }
}

/// Resolves a test into a single matcher closure.
pub fn convert(test: Test<'_>) -> Matcher<'_> {
    match test {
        Test::Any => Box::new(|_: &Node, _: usize, _: &Node| true),
        Test::Type(kind) => {
            Box::new(move |node: &Node, _: usize, _: &Node| node.kind() == kind.as_str())
        }
        Test::Attributes(attributes) => Box::new(move |node: &Node, _: usize, _: &Node| {
            matches_attributes(node, &attributes)
        }),
        Test::Predicate(f) => f,
        Test::Node(expected) => {
            Box::new(move |node: &Node, _: usize, _: &Node| matches_node(node, expected))
        }
        Test::AnyOf(tests) => {
            let matchers: Vec<Matcher<'_>> = tests.into_iter().map(convert).collect();
            Box::new(move |node: &Node, index: usize, parent: &Node| {
                matchers.iter().any(|matcher| matcher(node, index, parent))
            })
        }
    }
}

fn matches_attributes(node: &Node, attributes: &IndexMap<String, Value>) -> bool {
    attributes
        .iter()
        .all(|(key, expected)| node.field(key).is_some_and(|actual| *actual == *expected))
}

fn matches_node(node: &Node, expected: &Node) -> bool {
    if std::ptr::eq(node, expected) {
        return true;
    }
    if expected.children().is_some() || expected.position().is_some() {
        return false;
    }
    node.kind() == expected.kind()
        && expected.fields().iter().all(|(key, value)| {
            !matches!(value, Value::Object(_) | Value::Array(_)) && node.get(key) == Some(value)
        })
}
