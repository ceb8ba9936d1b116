use logos::Logos;

/// Lexer token for the content of a quoted atom.
#[derive(Debug, Clone, Logos)]
enum EscapedToken {
    #[token(r#"\""#, |_| '"')]
    #[token(r"\\", |_| '\\')]
    Escaped(char),

    /// Any other backslash sequence is not an escape and stays verbatim.
    /// Lower priority than `Escaped`, which covers the same two-byte shape.
    #[regex(r"\\[\s\S]", priority = 3)]
    Verbatim,

    #[regex(r"[^\\]")]
    Literal,
}

/// Replaces `\"` and `\\` with the characters they escape. Every other
/// backslash sequence passes through unchanged, so this never fails.
pub fn unescape(str: &str) -> String {
    let mut lexer = EscapedToken::lexer(str);
    let mut output = String::with_capacity(str.len());

    while let Some(token) = lexer.next() {
        match token {
            Ok(EscapedToken::Escaped(c)) => output.push(c),
            // A trailing lone backslash is the only lex error; keep it.
            Ok(EscapedToken::Verbatim) | Ok(EscapedToken::Literal) | Err(()) => {
                output.push_str(lexer.slice())
            }
        }
    }

    output
}

/// Wraps a string in double quotes, escaping `"` and `\`.
pub fn escape_string(str: &str) -> String {
    let mut output = String::with_capacity(str.len() + 2);
    output.push('"');

    for c in str.chars() {
        match c {
            '"' => output.push_str(r#"\""#),
            '\\' => output.push_str(r"\\"),
            c => output.push(c),
        }
    }

    output.push('"');
    output
}

#[cfg(test)]
mod test {
    use super::{escape_string, unescape};
    use rstest::rstest;

    #[rstest]
    #[case("string", "string")]
    #[case(r#"a\"b"#, r#"a"b"#)]
    #[case(r"a\\b", r"a\b")]
    #[case(r"a\nb", r"a\nb")]
    #[case(r"\\n", r"\n")]
    #[case(r"tail\", r"tail\")]
    #[case("", "")]
    fn test_unescape(#[case] escaped: &str, #[case] expected: &str) {
        assert_eq!(expected, unescape(escaped));
    }

    #[rstest]
    #[case("string", r#""string""#)]
    #[case(r#"a"b"#, r#""a\"b""#)]
    #[case(r"a\b", r#""a\\b""#)]
    #[case("hello world", r#""hello world""#)]
    #[case("two\nlines", "\"two\nlines\"")]
    #[case("", r#""""#)]
    fn test_escape_string(#[case] string: &str, #[case] expected: &str) {
        assert_eq!(expected, escape_string(string));
    }

    #[rstest]
    #[case(r#"a "quoted" word"#)]
    #[case(r"back\slash")]
    #[case("line\nbreak\tand tab")]
    fn test_round_trip(#[case] string: &str) {
        let escaped = escape_string(string);
        let inner = &escaped[1..escaped.len() - 1];
        assert_eq!(string, unescape(inner));
    }
}
