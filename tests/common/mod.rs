//! Shared fixtures for integration tests.

#![allow(dead_code)]

use unist_find_all_after::document::node::{Node, Point, Span};

/// Position on line 1 covering byte offsets `start..end`.
pub fn span(start: usize, end: usize) -> Span {
    Span::new(
        Point::new(1, start + 1, Some(start)),
        Point::new(1, end + 1, Some(end)),
    )
}

/// The mdast paragraph for ``Some *emphasis*, **importance**, and `code`.``
///
/// Children: text, emphasis, text, strong, text, inlineCode, text.
pub fn sentence() -> Node {
    Node::parent(
        "paragraph",
        vec![
            Node::literal("text", "Some ").with_position(span(0, 5)),
            Node::parent(
                "emphasis",
                vec![Node::literal("text", "emphasis").with_position(span(6, 14))],
            )
            .with_position(span(5, 15)),
            Node::literal("text", ", ").with_position(span(15, 17)),
            Node::parent(
                "strong",
                vec![Node::literal("text", "importance").with_position(span(19, 29))],
            )
            .with_position(span(17, 31)),
            Node::literal("text", ", and ").with_position(span(31, 37)),
            Node::literal("inlineCode", "code").with_position(span(37, 43)),
            Node::literal("text", ".").with_position(span(43, 44)),
        ],
    )
    .with_position(span(0, 44))
}

/// A root wrapping the sentence paragraph, as a parser would produce it.
pub fn document() -> Node {
    Node::parent("root", vec![sentence()]).with_position(span(0, 44))
}

/// Asserts that `found` holds exactly the nodes in `expected`, by address.
pub fn assert_same(found: &[&Node], expected: &[Node]) {
    assert_eq!(
        found.len(),
        expected.len(),
        "expected {} nodes, found {:?}",
        expected.len(),
        found.iter().map(|node| node.kind()).collect::<Vec<_>>()
    );
    for (index, (actual, wanted)) in found.iter().zip(expected).enumerate() {
        assert!(
            std::ptr::eq(*actual, wanted),
            "node {} is not the expected child",
            index
        );
    }
}
