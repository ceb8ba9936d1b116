//! Print s-expression trees back into text.
//!
//! Two backends share one traversal: [`to_string`] produces the compact
//! single-line form and [`to_string_pretty`] a width-aware layout. Both
//! produce text that parses back into an equal tree.
mod pretty;
mod simple;

pub use pretty::to_string_pretty;
pub use simple::to_string;

use crate::node::Node;

/// Trait for printer backends.
pub trait Printer: Sized {
    type Error;

    /// Print a bare atom, verbatim.
    fn atom(&mut self, text: &str) -> Result<(), Self::Error>;

    /// Print a quoted atom, re-escaping its content.
    fn quoted(&mut self, text: &str) -> Result<(), Self::Error>;

    /// Print a list given a function that prints the contents.
    fn list<F>(&mut self, f: F) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>;

    /// Print a printable value.
    fn print(&mut self, value: impl Print) -> Result<(), Self::Error> {
        value.print(self)
    }
}

/// Trait for values that can be printed as an s-expression.
pub trait Print {
    fn print<P: Printer>(&self, printer: &mut P) -> Result<(), P::Error>;
}

impl<T: Print + Sized> Print for &T {
    #[inline]
    fn print<P: Printer>(&self, printer: &mut P) -> Result<(), P::Error> {
        (*self).print(printer)
    }
}

impl<T: Print> Print for Vec<T> {
    #[inline]
    fn print<P: Printer>(&self, printer: &mut P) -> Result<(), P::Error> {
        for item in self {
            printer.print(item)?;
        }
        Ok(())
    }
}

impl Print for Node {
    fn print<P: Printer>(&self, printer: &mut P) -> Result<(), P::Error> {
        match self {
            Node::List(children) => printer.list(|printer| {
                for child in children {
                    printer.print(child)?;
                }
                Ok(())
            }),
            // Numeric atoms print their original text, so literals like
            // 1.0 never reformat to 1.
            Node::Atom(atom) => printer.atom(atom.text()),
            Node::QuotedAtom(text) => printer.quoted(text),
        }
    }
}
