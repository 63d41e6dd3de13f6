use std::fmt::Display;

use serde::{Serialize, Serializer};

/// Broad styling category a [`TokenKind`] belongs to.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub enum Category {
    Text,
    Comment,
    Operator,
    Keyword,
    Name,
    String,
    Number,
    Punctuation,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    Text,
    Whitespace,

    Comment,
    CommentSingle,
    CommentMultiline,

    Operator,
    OperatorWord,

    Keyword,
    KeywordType,
    KeywordConstant,
    KeywordPseudo,

    Name,
    NameBuiltin,
    NameDecorator,

    String,
    StringDoc,

    NumberInteger,
    NumberFloat,
    NumberHex,

    Punctuation,
}

impl TokenKind {
    pub const ALL: [TokenKind; 20] = [
        TokenKind::Text,
        TokenKind::Whitespace,
        TokenKind::Comment,
        TokenKind::CommentSingle,
        TokenKind::CommentMultiline,
        TokenKind::Operator,
        TokenKind::OperatorWord,
        TokenKind::Keyword,
        TokenKind::KeywordType,
        TokenKind::KeywordConstant,
        TokenKind::KeywordPseudo,
        TokenKind::Name,
        TokenKind::NameBuiltin,
        TokenKind::NameDecorator,
        TokenKind::String,
        TokenKind::StringDoc,
        TokenKind::NumberInteger,
        TokenKind::NumberFloat,
        TokenKind::NumberHex,
        TokenKind::Punctuation,
    ];

    pub fn category(&self) -> Category {
        match self {
            TokenKind::Text | TokenKind::Whitespace => Category::Text,
            TokenKind::Comment | TokenKind::CommentSingle | TokenKind::CommentMultiline => {
                Category::Comment
            }
            TokenKind::Operator | TokenKind::OperatorWord => Category::Operator,
            TokenKind::Keyword
            | TokenKind::KeywordType
            | TokenKind::KeywordConstant
            | TokenKind::KeywordPseudo => Category::Keyword,
            TokenKind::Name | TokenKind::NameBuiltin | TokenKind::NameDecorator => Category::Name,
            TokenKind::String | TokenKind::StringDoc => Category::String,
            TokenKind::NumberInteger | TokenKind::NumberFloat | TokenKind::NumberHex => {
                Category::Number
            }
            TokenKind::Punctuation => Category::Punctuation,
        }
    }

    /// Dotted style name, the key highlighters map to a visual style.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Text => "Text",
            TokenKind::Whitespace => "Text.Whitespace",
            TokenKind::Comment => "Comment",
            TokenKind::CommentSingle => "Comment.Single",
            TokenKind::CommentMultiline => "Comment.Multiline",
            TokenKind::Operator => "Operator",
            TokenKind::OperatorWord => "Operator.Word",
            TokenKind::Keyword => "Keyword",
            TokenKind::KeywordType => "Keyword.Type",
            TokenKind::KeywordConstant => "Keyword.Constant",
            TokenKind::KeywordPseudo => "Keyword.Pseudo",
            TokenKind::Name => "Name",
            TokenKind::NameBuiltin => "Name.Builtin",
            TokenKind::NameDecorator => "Name.Decorator",
            TokenKind::String => "String",
            TokenKind::StringDoc => "String.Doc",
            TokenKind::NumberInteger => "Number.Integer",
            TokenKind::NumberFloat => "Number.Float",
            TokenKind::NumberHex => "Number.Hex",
            TokenKind::Punctuation => "Punctuation",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A classified slice of the input. Tokens borrow from the source buffer and
/// never own a copy of the text.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// Byte offset of `text` within the source.
    pub start: usize,
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{ kind: {}, text: {:?}, start: {} }}", self.kind, self.text, self.start)
    }
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str, start: usize) -> Self {
        Token { kind, text, start }
    }

    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}
