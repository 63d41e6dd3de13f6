use std::collections::VecDeque;

use lazy_static::lazy_static;
use tracing::trace;

use crate::{errors::errors::Error, MK_TOKEN};

use super::rules::{resolve, Action, Rule, RuleSet, OCL_RULES, ROOT};
use super::tokens::{Token, TokenKind};

lazy_static! {
    static ref DEFAULT_LEXER: Result<Lexer, Error> = Lexer::new();
}

/// Rule-ordered scanner. Immutable once built, so one lexer can serve any
/// number of inputs, on any number of threads.
#[derive(Debug, Clone)]
pub struct Lexer {
    rules: Vec<Rule>,
}

impl Lexer {
    /// Builds the OCL lexer from the built-in rule table.
    pub fn new() -> Result<Lexer, Error> {
        Lexer::from_table(OCL_RULES, ROOT)
    }

    /// Builds a lexer from any rule table, starting at the `entry` rule-set.
    pub fn from_table(table: &[RuleSet], entry: &'static str) -> Result<Lexer, Error> {
        Ok(Lexer {
            rules: resolve(table, entry)?,
        })
    }

    /// The flattened rules, in the order they are tried.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Lazily tokenizes `source`. Calling this again restarts from the top.
    pub fn tokenize<'a>(&'a self, source: &'a str) -> Tokens<'a> {
        Tokens {
            rules: &self.rules,
            source,
            pos: 0,
            pending: VecDeque::new(),
            lookahead: vec![Lookahead::Unsearched; self.rules.len()],
        }
    }
}

/// Tokenizes `source` with the shared built-in OCL lexer.
pub fn tokenize(source: &str) -> Result<Tokens<'_>, Error> {
    match &*DEFAULT_LEXER {
        Ok(lexer) => Ok(lexer.tokenize(source)),
        Err(err) => Err(err.clone()),
    }
}

/// The shared built-in OCL lexer.
pub fn default_lexer() -> Result<&'static Lexer, Error> {
    DEFAULT_LEXER.as_ref().map_err(Clone::clone)
}

/// Result of the last forward search of one rule.
#[derive(Debug, Clone, Copy)]
enum Lookahead {
    Unsearched,
    /// No match anywhere after the position the search started from.
    Exhausted,
    /// Leftmost match at or after the position the search started from.
    At { start: usize, end: usize },
}

/// Pull-based token stream over one input.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rules: &'a [Rule],
    source: &'a str,
    pos: usize,
    pending: VecDeque<Token<'a>>,
    lookahead: Vec<Lookahead>,
}

impl<'a> Tokens<'a> {
    /// End of the match of rule `index` anchored at the cursor, if any.
    ///
    /// A forward search from an earlier cursor stays valid while the match it
    /// found starts at or after the current cursor, since no match starts
    /// between the two positions.
    fn match_rule(&mut self, index: usize) -> Option<usize> {
        let rules = self.rules;
        let rule = &rules[index];

        let (start, end) = match self.lookahead[index] {
            Lookahead::Exhausted => return None,
            Lookahead::At { start, end } if start >= self.pos => (start, end),
            _ => match rule.regex.find_at(self.source, self.pos) {
                Some(found) => {
                    self.lookahead[index] = Lookahead::At {
                        start: found.start(),
                        end: found.end(),
                    };
                    (found.start(), found.end())
                }
                None => {
                    self.lookahead[index] = Lookahead::Exhausted;
                    return None;
                }
            },
        };

        // zero-width matches never advance the cursor
        if start != self.pos || end == start {
            return None;
        }

        if !rule.accepts(&self.source[start..end]) {
            return None;
        }

        Some(end)
    }

    fn emit(&mut self, index: usize, end: usize) {
        let (rules, source) = (self.rules, self.source);
        let rule = &rules[index];

        match rule.action {
            Action::Token(kind) => {
                self.pending
                    .push_back(MK_TOKEN!(kind, &source[self.pos..end], self.pos));
            }
            Action::ByGroups(kinds) => {
                if let Some(captures) = rule.regex.captures_at(source, self.pos) {
                    for (group, kind) in kinds.iter().enumerate() {
                        if let Some(capture) = captures.get(group + 1) {
                            if !capture.is_empty() {
                                self.pending
                                    .push_back(MK_TOKEN!(*kind, capture.as_str(), capture.start()));
                            }
                        }
                    }
                }
            }
        }

        self.pos = end;
    }

    fn fallback(&mut self) {
        let source = self.source;
        let width = source[self.pos..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        let end = self.pos + width;

        trace!(offset = self.pos, text = &source[self.pos..end], "no rule matched");
        self.pending
            .push_back(MK_TOKEN!(TokenKind::Text, &source[self.pos..end], self.pos));
        self.pos = end;
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        while self.pending.is_empty() && self.pos < self.source.len() {
            let matched = (0..self.rules.len())
                .find_map(|index| self.match_rule(index).map(|end| (index, end)));

            match matched {
                Some((index, end)) => self.emit(index, end),
                None => self.fallback(),
            }
        }

        self.pending.pop_front()
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}
