//! Utility macros for the lexer.
//!
//! This module defines helper macros used to build tokens and the static
//! rule table:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_RULE!` - Creates a pattern rule with one kind or one kind per group
//! - `MK_WORDS!` - Creates a whole-word rule over a lexicon table
//! - `MK_INCLUDE!` - Inlines another named rule-set
//!
//! The rule macros expand to constant expressions, so rule-sets can live in
//! `static` tables.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$text` - The slice of the source the token covers
/// * `$start` - Byte offset of the slice within the source
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::NumberInteger, "42", 0);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr, $start:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            text: $text,
            start: $start,
        }
    };
}

/// Creates a pattern rule.
///
/// `MK_RULE!(pattern => kind)` emits one token spanning the whole match.
/// `MK_RULE!(pattern => [kind, ...])` emits one token per capture group, in
/// group order; the groups must together cover the whole match.
///
/// # Example
///
/// ```ignore
/// MK_RULE!(r"[0-9]+" => TokenKind::NumberInteger)
/// MK_RULE!(r"^([^\S\n]*)(@doc)" => [TokenKind::Text, TokenKind::StringDoc])
/// ```
#[macro_export]
macro_rules! MK_RULE {
    ($pattern:expr => [$($kind:expr),+ $(,)?]) => {
        $crate::lexer::rules::RuleDef::Pattern {
            pattern: $pattern,
            action: $crate::lexer::rules::Action::ByGroups(&[$($kind),+]),
        }
    };
    ($pattern:expr => $kind:expr) => {
        $crate::lexer::rules::RuleDef::Pattern {
            pattern: $pattern,
            action: $crate::lexer::rules::Action::Token($kind),
        }
    };
}

/// Creates a whole-word rule: an identifier that is listed in `$words`.
#[macro_export]
macro_rules! MK_WORDS {
    ($words:expr => $kind:expr) => {
        $crate::lexer::rules::RuleDef::Words {
            words: $words,
            kind: $kind,
        }
    };
}

/// Inlines the rules of another named rule-set at this position.
#[macro_export]
macro_rules! MK_INCLUDE {
    ($name:literal) => {
        $crate::lexer::rules::RuleDef::Include($name)
    };
}
