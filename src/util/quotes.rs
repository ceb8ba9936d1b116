use crate::node::Node;

/// Recursively converts every quoted atom into a bare atom with the same
/// text. Bare atoms and list structure are left untouched, and applying
/// this twice equals applying it once.
///
/// The rewritten atoms go through the usual numeric classification, so a
/// stripped `"10"` is indistinguishable from a parsed `10`.
pub fn remove_quotes(node: Node) -> Node {
    match node {
        Node::List(children) => Node::list(children.into_iter().map(remove_quotes).collect()),
        Node::QuotedAtom(text) => Node::atom(text),
        node @ Node::Atom(_) => node,
    }
}

#[cfg(test)]
mod test {
    use super::remove_quotes;
    use crate::node::{Node, Number};
    use crate::{from_str, to_string};
    use proptest::prelude::*;

    #[test]
    fn strips_quotes_recursively() {
        let node = from_str(r#"(display "Hello world" (inner "text"))"#).unwrap();
        assert_eq!(
            "(display Hello world (inner text))",
            to_string(&remove_quotes(node))
        );
    }

    #[test]
    fn stripped_numbers_become_numeric() {
        let node = remove_quotes(from_str(r#"("10")"#).unwrap());
        assert_eq!(Some(Number::Int(10)), node.as_list().unwrap()[0].number());
    }

    #[test]
    fn unquoted_trees_are_untouched() {
        let node = from_str("(a (b 1) 2.5)").unwrap();
        assert_eq!(node.clone(), remove_quotes(node));
    }

    proptest! {
        #[test]
        fn idempotent(node: Node) {
            let once = remove_quotes(node);
            prop_assert_eq!(once.clone(), remove_quotes(once));
        }
    }
}
