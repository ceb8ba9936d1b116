use crate::node::Node;

/// Error produced when a node does not have the shape an accessor needs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("expected a list, found a {0}")]
    NotAList(&'static str),
    #[error("expected a list with exactly 2 elements, found {0}")]
    WrongArity(usize),
}

/// Extracts the value from a two-element `(key value)` list, returning a
/// reference to the second element.
///
/// Operates on the given node only; it does not recurse. Anything other
/// than a list of exactly two elements is a [`ShapeError`].
pub fn extract_value(node: &Node) -> Result<&Node, ShapeError> {
    let Node::List(children) = node else {
        return Err(ShapeError::NotAList(node.kind()));
    };

    match children.as_slice() {
        [_, value] => Ok(value),
        _ => Err(ShapeError::WrongArity(children.len())),
    }
}
