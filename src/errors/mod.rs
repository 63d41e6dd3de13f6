//! Error types and error handling for the lexer.
//!
//! Scanning never fails: unrecognised characters become `Text` tokens. The
//! errors defined here are raised while building a lexer from its rule table
//! (undefined or cyclic includes, bad patterns) and while rendering tokens.

pub mod errors;

#[cfg(test)]
mod tests;
