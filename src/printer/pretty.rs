use std::convert::Infallible;

use crate::escape::escape_string;

use super::{Print, Printer};
use pretty::DocAllocator as _;

/// A printer that uses the `pretty` crate to lay out the output.
struct PrettyPrinter<'a> {
    arena: &'a pretty::Arena<'a>,
    items: Vec<pretty::DocBuilder<'a, pretty::Arena<'a>>>,
    indent: isize,
}

impl<'a> Printer for PrettyPrinter<'a> {
    type Error = Infallible;

    fn atom(&mut self, text: &str) -> Result<(), Self::Error> {
        let doc = self.arena.text(text.to_string());
        self.items.push(doc);
        Ok(())
    }

    fn quoted(&mut self, text: &str) -> Result<(), Self::Error> {
        let doc = self.arena.text(escape_string(text));
        self.items.push(doc);
        Ok(())
    }

    fn list<F>(&mut self, f: F) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>,
    {
        let position = self.items.len();
        f(self)?;
        let items = self.items.drain(position..);

        let docs = self
            .arena
            .intersperse(items, self.arena.line())
            .nest(self.indent)
            .group();

        self.items.push(
            self.arena
                .text("(")
                .append(docs)
                .append(self.arena.text(")")),
        );

        Ok(())
    }
}

/// Pretty print a value into an s-expression string.
///
/// Each list is a layout group: it stays on a single line when it fits
/// within `width` columns and otherwise breaks, placing every child on its
/// own line indented by `indent` spaces per nesting level. The output
/// parses back into an equal tree.
pub fn to_string_pretty(value: impl Print, width: usize, indent: isize) -> String {
    let arena = pretty::Arena::new();
    let mut printer = PrettyPrinter {
        items: vec![],
        arena: &arena,
        indent,
    };

    let _ = value.print(&mut printer);

    let doc = arena.intersperse(printer.items, arena.line());

    let mut string = String::new();
    let _ = doc.render_fmt(width, &mut string);
    string
}

#[cfg(test)]
mod test {
    use super::to_string_pretty;
    use crate::{from_str, to_string};

    #[test]
    fn wide_output_matches_compact_form() {
        let node = from_str("(define (square x) (* x x))").unwrap();
        assert_eq!(to_string(&node), to_string_pretty(&node, 120, 2));
    }

    #[test]
    fn narrow_output_breaks_and_indents() {
        let node = from_str("(define (square x) (* x x))").unwrap();
        assert_eq!(
            "(define\n  (square x)\n  (* x x))",
            to_string_pretty(&node, 20, 2)
        );
    }

    #[test]
    fn indent_unit_is_configurable() {
        let node = from_str("(define (square x) (* x x))").unwrap();
        assert_eq!(
            "(define\n    (square x)\n    (* x x))",
            to_string_pretty(&node, 20, 4)
        );
    }

    #[test]
    fn leaf_lists_stay_on_one_line() {
        let node = from_str("(module (pad 1) (pad 2) (pad 3) (pad 4))").unwrap();
        assert_eq!(
            "(module\n  (pad 1)\n  (pad 2)\n  (pad 3)\n  (pad 4))",
            to_string_pretty(&node, 16, 2)
        );
    }

    #[test]
    fn empty_list_prints_as_unit() {
        let node = from_str("()").unwrap();
        assert_eq!("()", to_string_pretty(&node, 0, 2));
    }

    #[test]
    fn quoted_atoms_reescape() {
        let node = from_str(r#""a\"b""#).unwrap();
        assert_eq!(r#""a\"b""#, to_string_pretty(&node, 80, 2));
    }
}
