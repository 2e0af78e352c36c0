//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Recognition of keywords, identifiers and integer literals
//! - One- and two-character operators (`=` vs `==`, `!` vs `!=`)
//! - Whitespace skipping
//! - `Illegal` tokens for anything it does not recognise
//! - Byte spans on every token for error reporting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
