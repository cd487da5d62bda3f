//! unist parsing from JSON and YAML text.
//!
//! This module turns serialized unist trees (as written by mdast, hast or
//! any other unist producer) into `UnistTree` structures.
//!
//! # Example
//!
//! ```
//! use unist_find_all_after::document::parser::parse_json;
//!
//! let json = r#"{"type": "root", "children": [{"type": "text", "value": "hi"}]}"#;
//! let tree = parse_json(json).unwrap();
//!
//! let text = tree.get_node(&[0]).unwrap();
//! assert_eq!(text.kind(), "text");
//! ```

use super::node::Node;
use super::tree::UnistTree;
use anyhow::{Context, Result};
use std::fmt;
use std::str::FromStr;

/// Serialization formats a unist tree can be read from or written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl FromStr for DocumentFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(DocumentFormat::Json),
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            other => anyhow::bail!("Unknown format '{}', expected 'json' or 'yaml'", other),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Json => write!(f, "json"),
            DocumentFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Parses a JSON string into a `UnistTree`.
///
/// # Errors
///
/// This function will return an error if:
/// - The input string is not valid JSON
/// - The root value is not an object
/// - A field has the wrong shape (`type` not a string, `children` not an
///   array of objects, `position` missing `start`/`end`)
///
/// # Examples
///
/// ```
/// use unist_find_all_after::document::parser::parse_json;
///
/// let invalid_json = r#"{"type": "#;
/// assert!(parse_json(invalid_json).is_err());
/// ```
pub fn parse_json(json_str: &str) -> Result<UnistTree> {
    let root: Node = serde_json::from_str(json_str).context("Failed to parse JSON")?;
    Ok(UnistTree::new(root))
}

/// Parses a YAML string into a `UnistTree`.
///
/// # Errors
///
/// Same conditions as [`parse_json`], for YAML input.
pub fn parse_yaml(yaml_str: &str) -> Result<UnistTree> {
    let root: Node = serde_yaml::from_str(yaml_str).context("Failed to parse YAML")?;
    Ok(UnistTree::new(root))
}

/// Parses `content` in the given format.
pub fn parse_document(content: &str, format: DocumentFormat) -> Result<UnistTree> {
    match format {
        DocumentFormat::Json => parse_json(content),
        DocumentFormat::Yaml => parse_yaml(content),
    }
}
