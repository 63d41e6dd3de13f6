#![allow(clippy::module_inception)]

pub mod errors;
pub mod format;
pub mod language;
pub mod lexer;
pub mod macros;

extern crate regex;

pub use errors::errors::{Error, ErrorImpl};
pub use language::{HostLexer, LexerInfo, LexerOptions, OCL_INFO};
pub use lexer::lexer::{tokenize, Lexer, Tokens};
pub use lexer::tokens::{Category, Token, TokenKind};

/// Returns the 1-based line number, the text of that line (with its line
/// terminator) and the 0-based byte column of `position` in `source`.
///
/// `None` when `position` lies past the end of the source.
pub fn get_line_at_position(source: &str, position: usize) -> Option<(usize, &str, usize)> {
    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&position) {
            return Some((line_number, line, position - start));
        }

        start = end;
        line_number += 1;
    }

    None
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nfoo\n\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 27).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);

        let (line_number, line, _) = super::get_line_at_position(source, 18).unwrap();
        assert_eq!(line_number, 3);
        assert_eq!(line, "\n");

        assert!(super::get_line_at_position(source, source.len()).is_none());
    }
}
