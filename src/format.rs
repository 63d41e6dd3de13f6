//! Plain renderings of a token stream, for debugging and for hosts that
//! consume tokens out of process.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::errors::errors::Error;
use crate::lexer::tokens::{Token, TokenKind};

/// One line per token: the dotted kind name, a tab, then the quoted text.
pub fn format_raw<'a>(tokens: impl IntoIterator<Item = Token<'a>>) -> String {
    let mut out = String::new();
    for token in tokens {
        // writing to a String cannot fail
        let _ = writeln!(out, "{}\t{:?}", token.kind, token.text);
    }
    out
}

/// Like [`format_raw`], with each line prefixed by the 1-based
/// `line:column` of the token. Columns count bytes.
///
/// `tokens` must be a whole, contiguous stream from the start of the source,
/// as produced by the lexer; line starts are tracked from the token text.
pub fn format_located<'a>(tokens: impl IntoIterator<Item = Token<'a>>) -> String {
    let mut out = String::new();
    let mut line = 1;
    let mut line_start = 0;

    for token in tokens {
        let _ = writeln!(
            out,
            "{}:{}\t{}\t{:?}",
            line,
            token.start - line_start + 1,
            token.kind,
            token.text
        );

        for (offset, _) in token.text.match_indices('\n') {
            line += 1;
            line_start = token.start + offset + 1;
        }
    }
    out
}

/// JSON array of `{"kind", "text", "start"}` objects.
pub fn format_json<'a>(tokens: impl IntoIterator<Item = Token<'a>>) -> Result<String, Error> {
    let tokens: Vec<Token<'a>> = tokens.into_iter().collect();
    Ok(serde_json::to_string_pretty(&tokens)?)
}

/// Number of tokens of each kind, in kind order.
pub fn count_kinds<'a>(tokens: impl IntoIterator<Item = Token<'a>>) -> BTreeMap<TokenKind, usize> {
    let mut counts = BTreeMap::new();
    for token in tokens {
        *counts.entry(token.kind).or_insert(0) += 1;
    }
    counts
}

pub fn format_summary<'a>(tokens: impl IntoIterator<Item = Token<'a>>) -> String {
    let counts = count_kinds(tokens);
    let width = counts
        .keys()
        .map(|kind| kind.name().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (kind, count) in &counts {
        let _ = writeln!(out, "{:<width$}  {}", kind.name(), count);
    }
    let _ = writeln!(out, "{:<width$}  {}", "total", counts.values().sum::<usize>());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lexer::tokenize;

    #[test]
    fn test_format_raw() {
        let tokens = tokenize("inv: x\n").unwrap();
        assert_eq!(
            format_raw(tokens),
            "Keyword\t\"inv\"\nPunctuation\t\":\"\nText\t\" \"\nName\t\"x\"\nText.Whitespace\t\"\\n\"\n"
        );
    }

    #[test]
    fn test_format_located() {
        let tokens = tokenize("inv:\n  /* a\nb */ x").unwrap();
        assert_eq!(
            format_located(tokens),
            "1:1\tKeyword\t\"inv\"\n\
             1:4\tPunctuation\t\":\"\n\
             1:5\tText.Whitespace\t\"\\n\"\n\
             2:1\tText\t\"  \"\n\
             2:3\tComment.Multiline\t\"/* a\\nb */\"\n\
             3:5\tText\t\" \"\n\
             3:6\tName\t\"x\"\n"
        );
    }

    #[test]
    fn test_format_located_agrees_with_line_lookup() {
        let source = "context A\n\tinv: 1 <> 2 // c\n\n\"\"\"d\n\"\"\" x";
        let tokens: Vec<_> = tokenize(source).unwrap().collect();
        let located = format_located(tokens.iter().copied());

        for (token, rendered) in tokens.iter().zip(located.lines()) {
            let (line, _, column) = crate::get_line_at_position(source, token.start).unwrap();
            assert!(
                rendered.starts_with(&format!("{}:{}\t", line, column + 1)),
                "{} at {}",
                rendered,
                token.start
            );
        }
    }

    #[test]
    fn test_format_json() {
        let tokens = tokenize("0x1F").unwrap();
        let json = format_json(tokens).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "kind": "Number.Hex", "text": "0x1F", "start": 0 }])
        );
    }

    #[test]
    fn test_count_kinds() {
        let counts = count_kinds(tokenize("a b 1").unwrap());
        assert_eq!(counts[&TokenKind::Name], 2);
        assert_eq!(counts[&TokenKind::Text], 2);
        assert_eq!(counts[&TokenKind::NumberInteger], 1);
    }

    #[test]
    fn test_format_summary_ends_with_total() {
        let summary = format_summary(tokenize("a b").unwrap());
        assert!(summary.lines().last().unwrap().starts_with("total"));
        assert!(summary.lines().last().unwrap().ends_with(" 3"));
    }
}
