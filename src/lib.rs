//! S-expressions as a data format.
//!
//! # Syntax
//!
//! This crate implements the minimalist dialect of s-expressions used by
//! KiCad-style data files. The syntax is as follows:
//!
//! - **Lists** are sequences of values, delimited on the outside by `(` and `)`
//!   and separated by whitespace.
//!
//! - **Atoms** are runs of characters without whitespace, parentheses, `"`
//!   or `;`. An atom whose text reads in full as an integer or a
//!   decimal/exponential float carries that numeric value alongside its
//!   verbatim text.
//!
//! - **Quoted atoms** are enclosed within double quotes and may contain any
//!   character, including whitespace and newlines. Within quotes, `\"` and
//!   `\\` escape `"` and `\`; any other backslash sequence is kept verbatim.
//!
//! - **Comments** begin with a `;` and extend to the end of the line.
//!
//! Parsing produces a [`Node`] tree which can be printed back out (compact
//! or width-aware pretty layout) and inspected with the tree utilities in
//! [`util`]: quote stripping, `(key value)` extraction and keyed search.

pub(crate) mod escape;
pub mod lexer;
pub mod node;
pub mod parser;
pub mod printer;
pub mod util;

pub use node::{Atom, Node, Number};
pub use parser::{from_str, from_str_prefix};
pub use printer::{to_string, to_string_pretty};
pub use util::{extract_value, remove_quotes, search, ShapeError};
