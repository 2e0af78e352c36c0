use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A syntax error recorded by the parser, with the position of the
/// offending token.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::ExpectedIdentifierAfterLet { .. } => "ExpectedIdentifierAfterLet",
            ErrorImpl::ExpectedAssign { .. } => "ExpectedAssign",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NoPrefixParseFunction { .. } => "NoPrefixParseFunction",
            ErrorImpl::IntegerParseError { .. } => "IntegerParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::ExpectedIdentifierAfterLet { .. } => ErrorTip::Suggestion(String::from(
                "a let binding needs a name, e.g. `let x = 5;`",
            )),
            ErrorImpl::ExpectedAssign { .. } => ErrorTip::Suggestion(String::from(
                "did you forget the `=` between the name and its value?",
            )),
            ErrorImpl::UnexpectedToken { .. } => ErrorTip::None,
            ErrorImpl::NoPrefixParseFunction { kind } => match kind {
                TokenKind::Illegal => {
                    ErrorTip::Suggestion(String::from("this character is not part of the language"))
                }
                TokenKind::Semicolon | TokenKind::RParen | TokenKind::RBrace | TokenKind::EOF => {
                    ErrorTip::Suggestion(String::from("an expression is missing here"))
                }
                _ => ErrorTip::None,
            },
            ErrorImpl::IntegerParseError { literal } => ErrorTip::Suggestion(format!(
                "`{}` does not fit in a 64-bit signed integer",
                literal
            )),
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::Suggestion(String::from(
                "split the expression up with `let` bindings",
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("expected next token to be {}, got {found} instead", TokenKind::Ident)]
    ExpectedIdentifierAfterLet { found: TokenKind },
    #[error("expected next token to be {}, got {found} instead", TokenKind::Assign)]
    ExpectedAssign { found: TokenKind },
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFunction { kind: TokenKind },
    #[error("could not parse {literal:?} as integer")]
    IntegerParseError { literal: String },
    #[error("expression is nested more than {limit} levels deep")]
    NestingTooDeep { limit: usize },
}
