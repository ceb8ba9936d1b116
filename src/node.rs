//! The parsed s-expression tree.
use logos::Logos;
use ordered_float::OrderedFloat;
use proptest::arbitrary::Arbitrary;
use smol_str::SmolStr;

/// An s-expression represented as a recursive enum.
///
/// Every variant corresponds to exactly one balanced region of the source:
/// a parenthesized list, a bare atom or a double-quoted atom.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    /// A list of nodes, in source order. May be empty.
    List(Vec<Node>),
    /// A bare atom, possibly carrying a numeric interpretation.
    Atom(Atom),
    /// An atom that was double-quoted in the source. Never numeric.
    QuotedAtom(SmolStr),
}

impl Node {
    /// Constructs a bare atom, classifying its text as a number when the
    /// whole text reads as an integer or float literal.
    pub fn atom(text: impl Into<SmolStr>) -> Self {
        Node::Atom(Atom::new(text))
    }

    /// Constructs a quoted atom.
    pub fn quoted(text: impl Into<SmolStr>) -> Self {
        Node::QuotedAtom(text.into())
    }

    /// Constructs a list node.
    pub fn list(children: Vec<Node>) -> Self {
        Node::List(children)
    }

    /// Children of a list node.
    pub fn as_list(&self) -> Option<&[Node]> {
        match self {
            Node::List(children) => Some(children),
            _ => None,
        }
    }

    /// Text of a bare or quoted atom.
    pub fn text(&self) -> Option<&str> {
        match self {
            Node::List(_) => None,
            Node::Atom(atom) => Some(atom.text()),
            Node::QuotedAtom(text) => Some(text),
        }
    }

    /// Numeric value of a bare atom, if its text has one.
    pub fn number(&self) -> Option<Number> {
        match self {
            Node::Atom(atom) => atom.number(),
            _ => None,
        }
    }

    /// Human-readable name of the variant, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::List(_) => "list",
            Node::Atom(_) => "atom",
            Node::QuotedAtom(_) => "quoted atom",
        }
    }
}

impl From<SmolStr> for Node {
    fn from(text: SmolStr) -> Self {
        Node::atom(text)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::atom(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::atom(text)
    }
}

/// A bare atom: verbatim text plus the numeric value the text lexes as,
/// if any.
///
/// The number is derived from the text on construction, never stored
/// independently, so the two cannot drift apart. Printing always uses the
/// text, which keeps literals such as `1.0` from reformatting to `1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Atom {
    text: SmolStr,
    number: Option<Number>,
}

impl Atom {
    pub fn new(text: impl Into<SmolStr>) -> Self {
        let text = text.into();
        let number = classify(&text);
        Atom { text, number }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn number(&self) -> Option<Number> {
        self.number
    }
}

/// Numeric interpretation of an atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Number {
    Int(i64),
    Float(OrderedFloat<f64>),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(int) => int as f64,
            Number::Float(float) => float.into_inner(),
        }
    }
}

/// Lexer token for numeric literals.
#[derive(Debug, Clone, Copy, Logos)]
enum NumericToken {
    #[regex(r"[+-]?[0-9]+")]
    Int,
    #[regex(r"[+-]?([0-9]+\.[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?")]
    #[regex(r"[+-]?[0-9]+[eE][+-]?[0-9]+")]
    Float,
}

/// Classifies atom text as a number when the entire text is a single
/// integer or float literal. Spellings `f64` would accept but the lexical
/// grammar does not, such as `inf` or `nan`, stay plain atoms.
fn classify(text: &str) -> Option<Number> {
    let mut lexer = NumericToken::lexer(text);
    match [lexer.next(), lexer.next()] {
        [Some(Ok(NumericToken::Int)), None] => match text.parse::<i64>() {
            Ok(int) => Some(Number::Int(int)),
            // Integer literal out of i64 range; fall back to a float.
            Err(_) => text
                .parse::<f64>()
                .ok()
                .map(|float| Number::Float(OrderedFloat(float))),
        },
        [Some(Ok(NumericToken::Float)), None] => text
            .parse::<f64>()
            .ok()
            .map(|float| Number::Float(OrderedFloat(float))),
        _ => None,
    }
}

impl Arbitrary for Node {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        use proptest::prelude::*;

        // Bare atoms are restricted to text that re-lexes as one atom;
        // quoted atoms may hold anything.
        let leaf = prop_oneof![
            "[a-zA-Z_+*/=.<>-]{1,12}".prop_map(Node::atom),
            any::<i64>().prop_map(|int| Node::atom(int.to_string())),
            any::<f64>().prop_map(|float| Node::atom(float.to_string())),
            any::<String>().prop_map(Node::quoted),
        ];
        leaf.prop_recursive(8, 256, 10, |inner| {
            proptest::collection::vec(inner, 0..10)
                .prop_map(Node::list)
                .boxed()
        })
        .boxed()
    }
}
