//! Sibling queries over unist trees.
//!
//! This module answers "which children of this parent come after that one
//! and pass this test?". The pieces are:
//!
//! - [`Position`] - where the scan starts (an index or a child)
//! - [`Test`] - which nodes to keep, resolved by [`convert`] into a [`Matcher`]
//! - [`find_all_after`] - the scan itself
//! - [`FindError`] - everything that can go wrong
//!
//! # Examples
//!
//! ```
//! use unist_find_all_after::document::node::Node;
//! use unist_find_all_after::query::{find_all_after, FindError, Test};
//!
//! let root = Node::parent("root", vec![Node::new("thematicBreak"), Node::new("html")]);
//! let first = &root.children().unwrap()[0];
//!
//! let rest = find_all_after(&root, first, Test::Any).unwrap();
//! assert_eq!(rest.len(), 1);
//!
//! let stray = Node::new("thematicBreak");
//! assert_eq!(find_all_after(&root, &stray, Test::Any), Err(FindError::NodeNotFound));
//! ```

pub mod error;
pub mod finder;
pub mod matcher;
pub mod position;

pub use error::FindError;
pub use finder::{find_all_after, find_all_after_value};
pub use matcher::{convert, Matcher, Test};
pub use position::Position;
