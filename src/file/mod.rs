//! File operations for unist trees and query results.
//!
//! This module handles loading trees from disk or stdin and writing query
//! results back out.

pub mod loader;
pub mod writer;
