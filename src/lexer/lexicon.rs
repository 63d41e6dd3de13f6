//! Fixed word tables of the OCL lexicon.
//!
//! Every table is matched as a whole word: the scanner first matches a full
//! identifier and only then looks it up here, so `contextual` never splits
//! into `context` + `ual`.

use lazy_static::lazy_static;
use std::collections::HashMap;

use super::tokens::TokenKind;

/// Logical connectives and type tests spelled as words.
pub const OPERATOR_WORDS: &[&str] = &["and", "or", "xor", "not", "implies", "in", "is"];

pub const KEYWORDS: &[&str] = &[
    "context",
    "package",
    "endpackage",
    "inv",
    "pre",
    "post",
    "body",
    "def",
    "init",
    "derive",
    "let",
    "if",
    "then",
    "else",
    "endif",
    "static",
    "attr",
    "oper",
    "library",
    "metamodel",
    "require",
    "public",
    "definitions",
    "enddefinitions",
    "endlibrary",
    "import",
];

/// Primitive and collection type names.
pub const TYPE_NAMES: &[&str] = &[
    "Sequence",
    "Set",
    "Bag",
    "OrderedSet",
    "Collection",
    "Tuple",
    "Integer",
    "Boolean",
    "Real",
    "String",
    "UnlimitedNatural",
    "OclAny",
    "OclVoid",
    "OclInvalid",
    "OclMessage",
    "OclType",
];

pub const CONSTANTS: &[&str] = &["true", "false", "null", "invalid"];

pub const BUILTIN_NAMES: &[&str] = &["self", "result", "none"];

/// Operation names of the OCL standard library.
pub const OPERATIONS: &[&str] = &[
    // OclAny
    "oclIsTypeOf",
    "oclIsKindOf",
    "oclAsType",
    "oclIsNew",
    "oclIsUndefined",
    "oclIsInvalid",
    "oclType",
    "allInstances",
    // collections
    "isUnique",
    "isEmpty",
    "notEmpty",
    "includes",
    "excludes",
    "includesAll",
    "excludesAll",
    "including",
    "excluding",
    "count",
    "size",
    "sum",
    "product",
    "max",
    "min",
    "first",
    "last",
    "at",
    "indexOf",
    "append",
    "prepend",
    "insertAt",
    "subSequence",
    "union",
    "intersection",
    "symmetricDifference",
    "flatten",
    "asSet",
    "asOrderedSet",
    "asBag",
    "asSequence",
    // iterators
    "select",
    "reject",
    "collect",
    "collectNested",
    "exists",
    "forAll",
    "one",
    "any",
    "iterate",
    "closure",
    "sortedBy",
    // strings and numbers
    "concat",
    "substring",
    "toUpper",
    "toLower",
    "toInteger",
    "toReal",
    "toString",
    "abs",
    "floor",
    "round",
    "div",
    "mod",
];

lazy_static! {
    /// Reverse index from a word to the kind its table assigns. Tables are
    /// consulted in scanning precedence, so a word listed twice keeps the
    /// kind of the earlier table.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        let tables: [(&[&'static str], TokenKind); 6] = [
            (OPERATOR_WORDS, TokenKind::OperatorWord),
            (KEYWORDS, TokenKind::Keyword),
            (TYPE_NAMES, TokenKind::KeywordType),
            (CONSTANTS, TokenKind::KeywordConstant),
            (BUILTIN_NAMES, TokenKind::NameBuiltin),
            (OPERATIONS, TokenKind::KeywordPseudo),
        ];
        for (words, kind) in tables {
            for word in words {
                map.entry(*word).or_insert(kind);
            }
        }
        map
    };
}

/// Kind a bare word would receive from the lexicon, or `None` for a plain
/// identifier.
pub fn classify_word(word: &str) -> Option<TokenKind> {
    RESERVED_LOOKUP.get(word).copied()
}
