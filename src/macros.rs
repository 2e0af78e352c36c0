//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SINGLE_TOKEN!` - Creates a one-character token at the lexer cursor
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$literal` - The token's source text
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr, $span:expr) => {
        Token {
            kind: $kind,
            literal: $literal,
            span: $span,
        }
    };
}

/// Creates a token for the single character under the lexer cursor.
///
/// Does not advance the lexer; `next_token` reads past the character once
/// the token has been classified.
///
/// # Example
///
/// ```ignore
/// b'+' => MK_SINGLE_TOKEN!(self, TokenKind::Plus),
/// ```
#[macro_export]
macro_rules! MK_SINGLE_TOKEN {
    ($lexer:expr, $kind:expr) => {
        MK_TOKEN!(
            $kind,
            String::from($lexer.ch as char),
            Span::new($lexer.position, $lexer.position + 1)
        )
    };
}
