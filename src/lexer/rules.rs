//! Static rule table of the OCL lexer and its resolution into a flat,
//! ordered rule list.

use std::collections::HashSet;

use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::errors::errors::{Error, ErrorImpl, RuleLocation};
use crate::{MK_INCLUDE, MK_RULE, MK_WORDS};

use super::lexicon::{BUILTIN_NAMES, CONSTANTS, KEYWORDS, OPERATIONS, OPERATOR_WORDS, TYPE_NAMES};
use super::tokens::TokenKind;

/// Identifier pattern, also used as the match step of every word rule.
pub const IDENTIFIER: &str = r"[\p{L}$_][\p{L}\p{N}$_]*";

/// Name of the rule-set scanning starts from.
pub const ROOT: &str = "root";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Token(TokenKind),
    ByGroups(&'static [TokenKind]),
}

#[derive(Debug, Clone, Copy)]
pub enum RuleDef {
    Pattern {
        pattern: &'static str,
        action: Action,
    },
    Words {
        words: &'static [&'static str],
        kind: TokenKind,
    },
    Include(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct RuleSet {
    pub name: &'static str,
    pub rules: &'static [RuleDef],
}

/// The built-in OCL rule table, entry point [`ROOT`].
///
/// Token boundaries follow the Pygments OCL lexer with two differences:
/// `<=`, `>=` and `?` are single `Operator` tokens (Pygments splits `<=` into
/// two operators and leaves `?` as `Text`), and a `//` comment at the very end
/// of the input needs no trailing newline to be a `CommentSingle`.
pub static OCL_RULES: &[RuleSet] = &[
    RuleSet {
        name: ROOT,
        rules: &[
            MK_RULE!(r"\n" => TokenKind::Whitespace),
            MK_RULE!(r#"^([^\S\n]*)("""(?s:.*?)""")"# => [TokenKind::Text, TokenKind::StringDoc]),
            MK_RULE!(r"^([^\S\n]*)('''(?s:.*?)''')" => [TokenKind::Text, TokenKind::StringDoc]),
            MK_RULE!(r"[^\S\n]+" => TokenKind::Text),
            MK_RULE!(r"#[^\n]*" => TokenKind::Comment),
            MK_RULE!(r"//[^\n]*\n?" => TokenKind::CommentSingle),
            MK_RULE!(r"/\*(?s:.*?)\*/" => TokenKind::CommentMultiline),
            MK_RULE!(r"[\[\]{}:(),;]" => TokenKind::Punctuation),
            MK_RULE!(r"\\\n" => TokenKind::Text),
            MK_RULE!(r"\\" => TokenKind::Text),
            MK_WORDS!(OPERATOR_WORDS => TokenKind::OperatorWord),
            MK_RULE!(r"<>|!=|==|->|<<|>>|<=|>=|[\-\~+/*%=<>\&^|.!?]" => TokenKind::Operator),
            MK_INCLUDE!("keywords"),
            MK_INCLUDE!("builtins"),
            MK_INCLUDE!("name"),
            MK_RULE!(r#""(?:\\\\|\\"|[^"])*""# => TokenKind::String),
            MK_RULE!(r"'(?:\\\\|\\'|[^'])*'" => TokenKind::String),
            MK_INCLUDE!("numbers"),
        ],
    },
    RuleSet {
        name: "keywords",
        rules: &[
            MK_WORDS!(KEYWORDS => TokenKind::Keyword),
            MK_WORDS!(TYPE_NAMES => TokenKind::KeywordType),
            MK_WORDS!(CONSTANTS => TokenKind::KeywordConstant),
        ],
    },
    RuleSet {
        name: "builtins",
        rules: &[
            MK_WORDS!(BUILTIN_NAMES => TokenKind::NameBuiltin),
            MK_WORDS!(OPERATIONS => TokenKind::KeywordPseudo),
        ],
    },
    RuleSet {
        name: "name",
        rules: &[
            MK_RULE!(r"@[\p{L}\p{N}_$.]+" => TokenKind::NameDecorator),
            MK_RULE!(IDENTIFIER => TokenKind::Name),
        ],
    },
    RuleSet {
        name: "numbers",
        rules: &[
            MK_RULE!(r"[0-9]+\.[0-9]+(?:[eE][+-]?[0-9]+)?[fFdD]?" => TokenKind::NumberFloat),
            MK_RULE!(r"0[xX][0-9a-fA-F]+" => TokenKind::NumberHex),
            MK_RULE!(r"[0-9]+[lL]?" => TokenKind::NumberInteger),
        ],
    },
];

/// A compiled rule of the flattened table.
#[derive(Debug, Clone)]
pub struct Rule {
    pub regex: Regex,
    pub action: Action,
    /// Whole-word table the matched text must belong to.
    pub words: Option<HashSet<&'static str>>,
    /// Rule-set the rule was defined in.
    pub origin: &'static str,
}

impl Rule {
    pub fn accepts(&self, text: &str) -> bool {
        match &self.words {
            Some(words) => words.contains(text),
            None => true,
        }
    }
}

/// Flattens `entry` and everything it includes into one ordered rule list.
///
/// Includes are substituted in place. An include naming a missing rule-set,
/// an include chain that loops back on itself, a pattern that fails to
/// compile, or a by-groups rule whose kind list does not match its capture
/// groups is reported as a configuration error.
pub fn resolve(table: &[RuleSet], entry: &'static str) -> Result<Vec<Rule>, Error> {
    let mut rules = vec![];
    let mut stack = vec![];
    flatten(table, entry, RuleLocation::null(), &mut stack, &mut rules)?;

    debug!(entry, rule_sets = table.len(), rules = rules.len(), "resolved rule table");
    Ok(rules)
}

fn flatten(
    table: &[RuleSet],
    name: &'static str,
    included_at: RuleLocation,
    stack: &mut Vec<&'static str>,
    out: &mut Vec<Rule>,
) -> Result<(), Error> {
    if stack.contains(&name) {
        let mut chain: Vec<String> = stack.iter().map(|s| s.to_string()).collect();
        chain.push(name.to_string());
        return Err(Error::new(ErrorImpl::CyclicInclude { chain }, included_at));
    }

    let Some(set) = table.iter().find(|set| set.name == name) else {
        return Err(Error::new(
            ErrorImpl::UndefinedRuleSet {
                name: name.to_string(),
            },
            included_at,
        ));
    };

    stack.push(name);

    for (index, def) in set.rules.iter().enumerate() {
        let location = RuleLocation::new(name, index);

        match def {
            RuleDef::Include(included) => flatten(table, *included, location, stack, out)?,
            RuleDef::Pattern { pattern, action } => {
                let regex = compile(pattern, &location)?;
                if let Action::ByGroups(kinds) = action {
                    let groups = regex.captures_len() - 1;
                    if groups != kinds.len() {
                        return Err(Error::new(
                            ErrorImpl::InvalidPattern {
                                pattern: pattern.to_string(),
                                message: format!(
                                    "{} capture groups but {} token kinds",
                                    groups,
                                    kinds.len()
                                ),
                            },
                            location,
                        ));
                    }
                }
                out.push(Rule {
                    regex,
                    action: *action,
                    words: None,
                    origin: name,
                });
            }
            RuleDef::Words { words, kind } => {
                out.push(Rule {
                    regex: compile(IDENTIFIER, &location)?,
                    action: Action::Token(*kind),
                    words: Some(words.iter().copied().collect()),
                    origin: name,
                });
            }
        }
    }

    stack.pop();
    Ok(())
}

fn compile(pattern: &str, location: &RuleLocation) -> Result<Regex, Error> {
    RegexBuilder::new(pattern)
        .multi_line(true)
        .build()
        .map_err(|err| {
            Error::new(
                ErrorImpl::InvalidPattern {
                    pattern: pattern.to_string(),
                    message: err.to_string(),
                },
                location.clone(),
            )
        })
}
