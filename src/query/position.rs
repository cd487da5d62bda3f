//! Starting positions for sibling queries.
//!
//! A query starts either at an index into the parent's children or at one of
//! the children themselves. Typed callers build a `Position` with `From`;
//! positions coming from text or JSON go through the fallible constructors,
//! which apply the index rules (non-negative, finite, whole).

use super::error::FindError;
use crate::document::node::Node;
use serde_json::Value;

/// Where a forward scan starts. The starting child itself is never part of
/// the result.
#[derive(Debug, Clone, Copy)]
pub enum Position<'a> {
    /// 0-based index into the parent's children. May be past the end.
    Index(usize),
    /// A child of the parent, located by address.
    Child(&'a Node),
}

impl From<usize> for Position<'_> {
    fn from(index: usize) -> Self {
        Position::Index(index)
    }
}

impl<'a> From<&'a Node> for Position<'a> {
    fn from(node: &'a Node) -> Self {
        Position::Child(node)
    }
}

impl TryFrom<i64> for Position<'static> {
    type Error = FindError;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        usize::try_from(index)
            .map(Position::Index)
            .map_err(|_| FindError::InvalidIndex)
    }
}

impl TryFrom<f64> for Position<'static> {
    type Error = FindError;

    fn try_from(index: f64) -> Result<Self, Self::Error> {
        if !index.is_finite() || index < 0.0 || index.fract() != 0.0 {
            return Err(FindError::InvalidIndex);
        }
        // Saturates above usize::MAX, which scans nothing either way.
        Ok(Position::Index(index as usize))
    }
}

impl Position<'static> {
    /// Parses a textual position such as `3`.
    ///
    /// # Errors
    ///
    /// - `InvalidIndex` for numbers that are not valid indices (`-1`, `1.5`,
    ///   `inf`, `NaN`)
    /// - `InvalidPosition` for anything that is not a number
    pub fn parse(text: &str) -> Result<Self, FindError> {
        let text = text.trim();
        if let Ok(index) = text.parse::<usize>() {
            return Ok(Position::Index(index));
        }
        if let Ok(index) = text.parse::<i64>() {
            return Position::try_from(index);
        }
        if let Ok(index) = text.parse::<f64>() {
            return Position::try_from(index);
        }
        Err(FindError::InvalidPosition)
    }

    /// Resolves a position given as a JSON value.
    ///
    /// Numbers follow the index rules. An object with a string `type` is
    /// node-shaped, but a freshly deserialized node can never be one of the
    /// parent's children, so it fails with `NodeNotFound`. Every other shape
    /// fails with `InvalidPosition`.
    pub fn from_value(value: &Value) -> Result<Self, FindError> {
        match value {
            Value::Number(number) => {
                if let Some(index) = number.as_u64() {
                    Ok(Position::Index(usize::try_from(index).unwrap_or(usize::MAX)))
                } else if let Some(index) = number.as_i64() {
                    Position::try_from(index)
                } else {
                    number
                        .as_f64()
                        .ok_or(FindError::InvalidIndex)
                        .and_then(Position::try_from)
                }
            }
            Value::Object(map) if map.get("type").is_some_and(Value::is_string) => {
                Err(FindError::NodeNotFound)
            }
            _ => Err(FindError::InvalidPosition),
        }
    }
}

impl Position<'_> {
    /// Resolves this position to an index into `parent`'s children.
    ///
    /// Indices are returned unchecked; a child is looked up by address and
    /// fails with `NodeNotFound` when `parent` does not own it.
    pub fn resolve(&self, parent: &Node) -> Result<usize, FindError> {
        match *self {
            Position::Index(index) => Ok(index),
            Position::Child(node) => parent.index_of(node).ok_or(FindError::NodeNotFound),
        }
    }
}
