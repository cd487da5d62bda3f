//! unist document model: nodes, trees and parsing.

pub mod node;
pub mod parser;
pub mod tree;
