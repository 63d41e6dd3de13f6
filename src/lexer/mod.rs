//! Lexical analysis of OCL source text.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of classified tokens for highlighting or parsing. It handles:
//!
//! - A static table of named rule-sets, flattened at construction
//! - Whole-word recognition of keywords, types, constants and library operations
//! - Comments, strings, documentation strings and numeric literals
//! - A one-character `Text` fallback, so scanning never fails

pub mod lexer;
pub mod lexicon;
pub mod rules;
pub mod tokens;
