//! Build s-expression trees from text.
use std::ops::Range;

use crate::lexer::{LexError, Lexer, Token};
use crate::node::Node;

/// Byte span within a source string.
pub type Span = Range<usize>;

/// A parse error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error("unexpected ) at offset {}", .0.start)]
    UnexpectedClose(Span),
    #[error("unclosed ( at offset {}", .0.start)]
    UnclosedList(Span),
    #[error("empty input")]
    Empty,
    #[error("trailing content at offset {}", .0.start)]
    Trailing(Span),
}

impl ParseError {
    /// Span of the offending region, where one exists.
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::Lex(err) => Some(err.span()),
            ParseError::UnexpectedClose(span)
            | ParseError::UnclosedList(span)
            | ParseError::Trailing(span) => Some(span.clone()),
            ParseError::Empty => None,
        }
    }
}

/// Shorthand for a result specialised to parse errors.
pub type Result<T, E = ParseError> = std::result::Result<T, E>;

/// Parse a complete s-expression from `source`.
///
/// The whole input must be consumed: anything after the first top-level
/// form is a [`ParseError::Trailing`]. Use [`from_str_prefix`] to parse a
/// single form out of a longer string instead.
pub fn from_str(source: &str) -> Result<Node> {
    let mut lexer = Lexer::new(source);
    let (node, _) = parse_one(&mut lexer)?;

    match lexer.next() {
        None => Ok(node),
        Some(Ok((_, span))) => Err(ParseError::Trailing(span)),
        Some(Err(err)) => Err(err.into()),
    }
}

/// Parse one s-expression from the front of `source`, returning the node
/// together with the unconsumed remainder of the input.
///
/// The remainder starts immediately after the form's final token, so any
/// whitespace separating it from what follows is still present.
pub fn from_str_prefix(source: &str) -> Result<(Node, &str)> {
    let mut lexer = Lexer::new(source);
    let (node, end) = parse_one(&mut lexer)?;
    Ok((node, &source[end..]))
}

/// Consumes tokens until exactly one node is complete. Returns the node
/// and the byte offset just past its final token.
///
/// List nesting is tracked on an explicit stack rather than by recursion,
/// so depth is bounded by heap and not by the call stack.
fn parse_one(lexer: &mut Lexer<'_>) -> Result<(Node, usize)> {
    // Open lists, each with the span of its ( for error reporting.
    let mut open: Vec<(Span, Vec<Node>)> = Vec::new();

    while let Some(item) = lexer.next() {
        let (token, span) = item?;
        let node = match token {
            Token::OpenParen => {
                open.push((span, Vec::new()));
                continue;
            }
            Token::CloseParen => {
                let Some((_, children)) = open.pop() else {
                    return Err(ParseError::UnexpectedClose(span));
                };
                Node::list(children)
            }
            Token::Atom(text) => Node::atom(text),
            Token::Quoted(text) => Node::quoted(text),
        };

        match open.last_mut() {
            Some((_, children)) => children.push(node),
            None => return Ok((node, span.end)),
        }
    }

    match open.pop() {
        // The innermost ( is the one the missing ) belongs to.
        Some((span, _)) => Err(ParseError::UnclosedList(span)),
        None => Err(ParseError::Empty),
    }
}
