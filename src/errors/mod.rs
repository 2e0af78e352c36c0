//! Error types for the front end.
//!
//! The lexer never fails: unknown characters come out as `Illegal` tokens.
//! The parser records every syntax error it finds and keeps going, so these
//! types are plain data that the caller inspects after parsing. This module
//! includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each kind of syntax error
//! - Human-readable suggestions for the REPL

pub mod errors;
