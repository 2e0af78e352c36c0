use crate::{Span, MK_SINGLE_TOKEN, MK_TOKEN};

use super::tokens::{lookup_ident, Token, TokenKind};

/// Single-pass tokenizer with one character of lookahead.
///
/// `ch` holds the byte at `position`, or 0 once the cursor has run off the
/// end of the source. End of input is decided by `position`, so a NUL byte
/// inside the source still lexes as `Illegal`.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    position: usize,
    read_position: usize,
    ch: u8,
    finished: bool,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        let mut lexer = Lexer {
            source: source.into(),
            position: 0,
            read_position: 0,
            ch: 0,
            finished: false,
        };
        lexer.read_char();
        lexer
    }

    fn read_char(&mut self) {
        if self.read_position >= self.source.len() {
            self.ch = 0;
        } else {
            self.ch = self.source.as_bytes()[self.read_position];
        }
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek_char(&self) -> u8 {
        self.source
            .as_bytes()
            .get(self.read_position)
            .copied()
            .unwrap_or(0)
    }

    pub fn at_eof(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the next token and advances past it.
    ///
    /// Once the source is exhausted every call returns `EOF` with an empty
    /// literal and leaves the cursor where it is.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        if self.at_eof() {
            let end = self.source.len();
            return MK_TOKEN!(TokenKind::EOF, String::new(), Span::new(end, end));
        }

        let token = match self.ch {
            b'=' => self.two_char_or(b'=', TokenKind::Eq, TokenKind::Assign),
            b'!' => self.two_char_or(b'=', TokenKind::NotEq, TokenKind::Bang),
            b'+' => MK_SINGLE_TOKEN!(self, TokenKind::Plus),
            b'-' => MK_SINGLE_TOKEN!(self, TokenKind::Minus),
            b'*' => MK_SINGLE_TOKEN!(self, TokenKind::Asterisk),
            b'/' => MK_SINGLE_TOKEN!(self, TokenKind::Slash),
            b'<' => MK_SINGLE_TOKEN!(self, TokenKind::Lt),
            b'>' => MK_SINGLE_TOKEN!(self, TokenKind::Gt),
            b',' => MK_SINGLE_TOKEN!(self, TokenKind::Comma),
            b';' => MK_SINGLE_TOKEN!(self, TokenKind::Semicolon),
            b'(' => MK_SINGLE_TOKEN!(self, TokenKind::LParen),
            b')' => MK_SINGLE_TOKEN!(self, TokenKind::RParen),
            b'{' => MK_SINGLE_TOKEN!(self, TokenKind::LBrace),
            b'}' => MK_SINGLE_TOKEN!(self, TokenKind::RBrace),
            ch if is_letter(ch) => {
                let start = self.position;
                let literal = self.read_while(is_letter);
                return MK_TOKEN!(lookup_ident(&literal), literal, Span::new(start, self.position));
            }
            ch if ch.is_ascii_digit() => {
                let start = self.position;
                let literal = self.read_while(|c| c.is_ascii_digit());
                return MK_TOKEN!(TokenKind::Int, literal, Span::new(start, self.position));
            }
            _ => return self.illegal_char(),
        };

        self.read_char();
        token
    }

    /// Builds `double` if the next character is `second`, otherwise `single`.
    ///
    /// On a match the first character is consumed here and the second by
    /// the caller, same as for any single-character token.
    fn two_char_or(&mut self, second: u8, double: TokenKind, single: TokenKind) -> Token {
        if self.peek_char() != second {
            return MK_SINGLE_TOKEN!(self, single);
        }

        let start = self.position;
        let first = self.ch;
        self.read_char();

        let mut literal = String::with_capacity(2);
        literal.push(first as char);
        literal.push(self.ch as char);
        MK_TOKEN!(double, literal, Span::new(start, self.position + 1))
    }

    fn read_while(&mut self, accept: fn(u8) -> bool) -> String {
        let start = self.position;
        while !self.at_eof() && accept(self.ch) {
            self.read_char();
        }
        self.source[start..self.position].to_string()
    }

    /// Emits the whole character under the cursor as one `Illegal` token,
    /// which may span several bytes for non-ASCII input.
    fn illegal_char(&mut self) -> Token {
        let start = self.position;
        let width = self.source[start..]
            .chars()
            .next()
            .map(char::len_utf8)
            .unwrap_or(1);

        for _ in 0..width {
            self.read_char();
        }

        MK_TOKEN!(
            TokenKind::Illegal,
            self.source[start..start + width].to_string(),
            Span::new(start, start + width)
        )
    }

    fn skip_whitespace(&mut self) {
        while !self.at_eof() && matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }
}

/// Yields every token up to and including `EOF`, then stops.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if token.kind == TokenKind::EOF {
            self.finished = true;
        }
        Some(token)
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

/// Lexes the whole source into a token vector ending in `EOF`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize(source: &str) -> Vec<Token> {
    let tokens: Vec<Token> = Lexer::new(source).collect();
    tracing::debug!(token_count = tokens.len(), "tokenized source");
    tokens
}
