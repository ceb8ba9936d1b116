use crate::node::Node;

/// Finds every list whose first element is a bare or quoted atom with text
/// equal to `key`.
///
/// Results follow pre-order traversal: parents before children, children
/// left to right. Matched lists are themselves searched, so a `(pad ..)`
/// nested inside another `(pad ..)` is also returned. No result limit.
pub fn search<'a>(node: &'a Node, key: &str) -> Vec<&'a Node> {
    let mut matches = Vec::new();
    visit(node, key, &mut matches);
    matches
}

fn visit<'a>(node: &'a Node, key: &str, matches: &mut Vec<&'a Node>) {
    let Node::List(children) = node else {
        return;
    };

    if children.first().and_then(Node::text) == Some(key) {
        matches.push(node);
    }

    for child in children {
        visit(child, key, matches);
    }
}
