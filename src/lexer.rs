//! Lex s-expression text into a lazy token stream.
use logos::Logos;

use crate::escape::unescape;
use crate::parser::Span;

#[derive(Debug, Clone, PartialEq, Logos)]
#[logos(skip r"([ \t\r\n\f]+|;[^\n]*)+")]
enum LexerToken {
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[regex(r#"[^ \t\r\n\f\(\)";]+"#)]
    BareAtom,
    #[regex(r#""([^"\\]|\\[\s\S])*""#)]
    QuotedAtom,
}

/// A single lexical token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    OpenParen,
    CloseParen,
    /// A bare atom, verbatim from the source.
    Atom(&'a str),
    /// A double-quoted atom with its escape sequences resolved.
    Quoted(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("unterminated string starting at offset {}", .0.start)]
    UnterminatedString(Span),
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnterminatedString(span) => span.clone(),
        }
    }
}

/// A lazy, single-pass token stream over s-expression source text.
///
/// Yields each token together with its byte span. Restarting means
/// constructing a new `Lexer`; no state survives between instances.
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LexerToken>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            inner: LexerToken::lexer(source),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<(Token<'a>, Span), LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.inner.next()?;
        let span = self.inner.span();

        let item = match token {
            Ok(LexerToken::OpenParen) => Ok((Token::OpenParen, span)),
            Ok(LexerToken::CloseParen) => Ok((Token::CloseParen, span)),
            Ok(LexerToken::BareAtom) => Ok((Token::Atom(self.inner.slice()), span)),
            Ok(LexerToken::QuotedAtom) => {
                let slice = self.inner.slice();
                let inner = &slice[1..slice.len() - 1];
                Ok((Token::Quoted(unescape(inner)), span))
            }
            // The only text no pattern covers is a `"` whose string never
            // closes; everything else lexes as a bare atom.
            Err(()) => Err(LexError::UnterminatedString(
                span.start..self.inner.source().len(),
            )),
        };

        Some(item)
    }
}

#[cfg(test)]
mod test {
    use super::{LexError, Lexer, Token};
    use rstest::rstest;

    fn lex(source: &str) -> Vec<Token<'_>> {
        Lexer::new(source)
            .map(|item| item.unwrap().0)
            .collect()
    }

    #[test]
    fn lexes_parens_and_atoms() {
        assert_eq!(
            vec![
                Token::OpenParen,
                Token::Atom("width"),
                Token::Atom("10"),
                Token::CloseParen,
            ],
            lex("(width 10)")
        );
    }

    #[test]
    fn lexes_quoted_atoms() {
        assert_eq!(
            vec![
                Token::OpenParen,
                Token::Atom("display"),
                Token::Quoted("Hello world".to_string()),
                Token::CloseParen,
            ],
            lex(r#"(display "Hello world")"#)
        );
    }

    #[test]
    fn resolves_escapes_in_quoted_atoms() {
        assert_eq!(
            vec![Token::Quoted(r#"a"b\c"#.to_string())],
            lex(r#""a\"b\\c""#)
        );
    }

    #[test]
    fn quoted_atoms_may_span_lines() {
        assert_eq!(
            vec![Token::Quoted("two\nlines".to_string())],
            lex("\"two\nlines\"")
        );
    }

    #[rstest]
    #[case("; a comment")]
    #[case("  \t\n")]
    #[case("")]
    fn skips_whitespace_and_comments(#[case] source: &str) {
        assert_eq!(Vec::<Token>::new(), lex(source));
    }

    #[test]
    fn comment_runs_to_end_of_line() {
        assert_eq!(
            vec![Token::Atom("a"), Token::Atom("b")],
            lex("a ; ignore (this \"too\"\nb")
        );
    }

    #[rstest]
    #[case(r#""unterminated"#, 0)]
    #[case(r#"ab"cd"#, 2)]
    #[case(r#""ends with escape\""#, 0)]
    fn reports_unterminated_strings(#[case] source: &str, #[case] offset: usize) {
        let err = Lexer::new(source)
            .find_map(Result::err)
            .expect("lexing should fail");
        assert_eq!(
            LexError::UnterminatedString(offset..source.len()),
            err
        );
    }
}
