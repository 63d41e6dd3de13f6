//! Static metadata and the entry point a host highlighter calls.
//!
//! The host owns rendering, file-type association and MIME registration. The
//! lexer only supplies the data those decisions are based on.

use std::collections::BTreeMap;
use std::path::Path;

use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::errors::errors::Error;
use crate::lexer::lexer::{default_lexer, Lexer, Tokens};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LexerInfo {
    /// Human-readable language name.
    pub name: &'static str,
    /// Short identifiers the host may look the lexer up by.
    pub aliases: &'static [&'static str],
    /// File name globs associated with the language.
    pub filenames: &'static [&'static str],
    pub mimetypes: &'static [&'static str],
}

pub static OCL_INFO: LexerInfo = LexerInfo {
    name: "OCL",
    aliases: &["ocl"],
    filenames: &["*.ocl"],
    mimetypes: &["text/x-ocl", "application/x-ocl"],
};

impl LexerInfo {
    /// Whether the final component of `path` matches one of the filename
    /// globs. Matching is case-sensitive; a malformed glob matches nothing.
    pub fn matches_filename(&self, path: impl AsRef<Path>) -> bool {
        let Some(file_name) = path.as_ref().file_name().and_then(|name| name.to_str()) else {
            return false;
        };

        self.filenames.iter().any(|pattern| {
            Pattern::new(pattern)
                .map(|glob| glob.matches(file_name))
                .unwrap_or(false)
        })
    }
}

/// Options passed by the host. The OCL lexer accepts and ignores them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LexerOptions {
    #[serde(flatten)]
    pub raw: BTreeMap<String, serde_json::Value>,
}

/// Stable entry point for host formatting frameworks.
pub trait HostLexer {
    fn info(&self) -> &'static LexerInfo;

    fn get_tokens<'a>(&'a self, text: &'a str, options: &LexerOptions) -> Tokens<'a>;
}

impl HostLexer for Lexer {
    fn info(&self) -> &'static LexerInfo {
        &OCL_INFO
    }

    fn get_tokens<'a>(&'a self, text: &'a str, _options: &LexerOptions) -> Tokens<'a> {
        self.tokenize(text)
    }
}

pub fn find_lexer_by_alias(alias: &str) -> Result<Option<&'static Lexer>, Error> {
    if OCL_INFO.aliases.iter().any(|known| known.eq_ignore_ascii_case(alias)) {
        return default_lexer().map(Some);
    }
    Ok(None)
}

pub fn find_lexer_for_filename(path: impl AsRef<Path>) -> Result<Option<&'static Lexer>, Error> {
    if OCL_INFO.matches_filename(path) {
        return default_lexer().map(Some);
    }
    Ok(None)
}

pub fn find_lexer_by_mimetype(mimetype: &str) -> Result<Option<&'static Lexer>, Error> {
    if OCL_INFO.mimetypes.iter().any(|known| *known == mimetype) {
        return default_lexer().map(Some);
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info_with(filenames: &'static [&'static str]) -> LexerInfo {
        LexerInfo {
            filenames,
            ..OCL_INFO.clone()
        }
    }

    #[test]
    fn test_glob_matches() {
        assert!(OCL_INFO.matches_filename("model.ocl"));
        assert!(OCL_INFO.matches_filename(".ocl"));
        assert!(!OCL_INFO.matches_filename("model.ocl.bak"));
        assert!(!OCL_INFO.matches_filename("model.OCL"));

        let single = info_with(&["a?c"]);
        assert!(single.matches_filename("abc"));
        assert!(!single.matches_filename("ac"));
    }

    #[test]
    fn test_malformed_glob_matches_nothing() {
        let broken = info_with(&["[.ocl", "*.constraints"]);
        assert!(!broken.matches_filename("[.ocl"));
        assert!(broken.matches_filename("model.constraints"));
    }

    #[test]
    fn test_matches_filename_uses_last_component() {
        assert!(OCL_INFO.matches_filename("models/royal_and_loyal.ocl"));
        assert!(!OCL_INFO.matches_filename("models.ocl/readme.md"));
        assert!(!OCL_INFO.matches_filename("/"));
    }

    #[test]
    fn test_find_lexer_lookups() {
        assert!(find_lexer_by_alias("ocl").unwrap().is_some());
        assert!(find_lexer_by_alias("OCL").unwrap().is_some());
        assert!(find_lexer_by_alias("python").unwrap().is_none());
        assert!(find_lexer_for_filename("constraints.ocl").unwrap().is_some());
        assert!(find_lexer_for_filename("constraints.txt").unwrap().is_none());
        assert!(find_lexer_by_mimetype("application/x-ocl").unwrap().is_some());
        assert!(find_lexer_by_mimetype("text/plain").unwrap().is_none());
    }

    #[test]
    fn test_options_are_ignored() {
        let options: LexerOptions =
            serde_json::from_str(r#"{"stripnl": false, "tabsize": 4}"#).unwrap();
        assert_eq!(options.raw.len(), 2);

        let lexer = Lexer::new().unwrap();
        let with_options: Vec<_> = lexer.get_tokens("inv: true", &options).collect();
        let without: Vec<_> = lexer.tokenize("inv: true").collect();
        assert_eq!(with_options, without);
        assert_eq!(lexer.info().name, "OCL");
    }
}
