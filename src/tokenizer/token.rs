use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What a token stands for in the markup. Tag names are lower-cased.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", tag = "kind", content = "name"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `<p class="x">`, closed later by a matching `CloseTag`.
    OpenTag(String),

    CloseTag(String),

    /// A tag without content: void elements such as `<br>`, self-closing
    /// tags, comments and doctypes.
    VoidTag(String),

    /// A whole element, including its descendants, compared as one unit.
    Atomic(String),

    Word,

    Whitespace,
}

impl TokenKind {
    /// Leaves can be wrapped in a marker element on their own. Opening and
    /// closing tags only make sense together.
    #[must_use]
    pub fn is_leaf(&self) -> bool { !matches!(self, TokenKind::OpenTag(_) | TokenKind::CloseTag(_)) }

    /// The tag name for tag and atomic tokens.
    #[must_use]
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            TokenKind::OpenTag(name)
            | TokenKind::CloseTag(name)
            | TokenKind::VoidTag(name)
            | TokenKind::Atomic(name) => Some(name),
            TokenKind::Word | TokenKind::Whitespace => None,
        }
    }
}

/// A token is a piece of markup that has been normalised in some way.
///
/// A token consists of the normalised form used for comparison, and the
/// original form used when rendering the merged document. Whitespace runs
/// all share the normalised form `" "`, so `"\n\t "` and `&nbsp;` compare
/// equal; every other token is compared by its full original text.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct Token {
    kind: TokenKind,

    /// The normalised form of the token used for deriving the diff.
    normalised: String,

    /// The original markup, emitted verbatim in the output.
    original: String,
}

/// Trivial implementation of Token for plain text, mostly useful in tests.
impl From<&str> for Token {
    fn from(text: &str) -> Self {
        if !text.is_empty() && text.chars().all(char::is_whitespace) {
            Token::whitespace(text)
        } else {
            Token::new(TokenKind::Word, text.to_owned(), text.to_owned())
        }
    }
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, normalised: String, original: String) -> Self {
        Token {
            kind,
            normalised,
            original,
        }
    }

    /// A token compared by its exact text.
    #[must_use]
    pub fn verbatim(kind: TokenKind, original: &str) -> Self {
        Token::new(kind, original.to_owned(), original.to_owned())
    }

    #[must_use]
    pub fn whitespace(original: &str) -> Self {
        Token::new(TokenKind::Whitespace, " ".to_owned(), original.to_owned())
    }

    #[must_use]
    pub fn kind(&self) -> &TokenKind { &self.kind }

    #[must_use]
    pub fn original(&self) -> &str { &self.original }

    #[must_use]
    pub fn normalised(&self) -> &str { &self.normalised }

    #[must_use]
    pub fn is_whitespace(&self) -> bool { self.kind == TokenKind::Whitespace }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool { self.normalised == other.normalised }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.original)
    }
}
