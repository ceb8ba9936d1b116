use crate::escape::escape_string;
use std::convert::Infallible;

use super::{Print, Printer};

/// A printer that formats the output as a compact single-line string.
struct SimplePrinter {
    needs_whitespace: bool,
    string: String,
}

impl SimplePrinter {
    fn new() -> Self {
        Self {
            needs_whitespace: false,
            string: String::new(),
        }
    }

    fn push_separated(&mut self, text: &str) {
        if self.needs_whitespace {
            self.string.push(' ');
        }
        self.needs_whitespace = true;
        self.string.push_str(text);
    }
}

impl Printer for SimplePrinter {
    type Error = Infallible;

    fn atom(&mut self, text: &str) -> Result<(), Self::Error> {
        self.push_separated(text);
        Ok(())
    }

    fn quoted(&mut self, text: &str) -> Result<(), Self::Error> {
        let escaped = escape_string(text);
        self.push_separated(&escaped);
        Ok(())
    }

    fn list<F>(&mut self, f: F) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>,
    {
        if self.needs_whitespace {
            self.string.push(' ');
        }

        self.string.push('(');
        self.needs_whitespace = false;
        f(self)?;
        self.string.push(')');
        self.needs_whitespace = true;

        Ok(())
    }
}

/// Print a value into its compact s-expression form.
///
/// This function does not produce any line breaks, indentation, or
/// unnecessary whitespace. Where human readability is a concern, consider
/// using the [`to_string_pretty`] function instead.
///
/// [`to_string_pretty`]: `crate::printer::to_string_pretty`
pub fn to_string(value: impl Print) -> String {
    let mut printer = SimplePrinter::new();
    let _ = value.print(&mut printer);
    printer.string
}
