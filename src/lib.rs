//! unist-find-all-after - find the siblings that follow a node in a unist tree.
//!
//! Given a parent node, a starting child (or its index) and an optional test,
//! [`query::find_all_after`] returns every later child that passes the test,
//! in document order. Trees can be built in code or loaded from the JSON and
//! YAML that unist tools (mdast, hast, ...) produce.
//!
//! # Example
//!
//! ```
//! use unist_find_all_after::document::parser::parse_json;
//! use unist_find_all_after::query::find_all_after;
//!
//! let tree = parse_json(r#"{
//!     "type": "paragraph",
//!     "children": [
//!         {"type": "text", "value": "Some "},
//!         {"type": "strong", "children": [{"type": "text", "value": "bold"}]},
//!         {"type": "text", "value": " words"}
//!     ]
//! }"#).unwrap();
//!
//! let texts = find_all_after(tree.root(), 0usize, "text").unwrap();
//! assert_eq!(texts.len(), 1);
//! assert_eq!(texts[0].value_str(), Some(" words"));
//! ```

pub mod config;
pub mod document;
pub mod file;
pub mod query;
