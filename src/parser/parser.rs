//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser pulls tokens from the lexer one at a time and keeps exactly
//! two of them: the token being acted on and one token of lookahead.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//!
//! Syntax errors never abort parsing. Each one is recorded, the parser skips
//! to the end of the broken statement and carries on.

use std::{collections::HashMap, mem};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// Deepest expression nesting the parser descends into before giving up on
/// the statement with [`ErrorImpl::NestingTooDeep`].
pub const MAX_NESTING_DEPTH: usize = 128;

/// The main parser structure that maintains parsing state.
///
/// This struct owns the lexer and maintains lookup tables for parsing
/// statements and expressions. Errors accumulate in `errors` and are read
/// back with [`Parser::errors`] once [`Parser::parse_program`] returns.
pub struct Parser {
    /// Source of tokens, read on demand
    lexer: Lexer,
    /// The token being acted on
    current_token: Token,
    /// One token of lookahead
    peek_token: Token,
    /// Syntax errors in the order they were found
    errors: Vec<Error>,
    /// Expressions currently open, innermost included
    depth: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for infix binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a new Parser and primes `current_token` and `peek_token`.
    pub fn new(lexer: Lexer) -> Self {
        let mut parser = Parser {
            lexer,
            current_token: Token::new(TokenKind::EOF, ""),
            peek_token: Token::new(TokenKind::EOF, ""),
            errors: vec![],
            depth: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser.advance();
        parser.advance();
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    /// Returns the lookahead token.
    pub fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    /// Returns the kind of the lookahead token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek_token.kind
    }

    /// Shifts the lookahead into `current_token` and reads a new lookahead.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current_token = mem::replace(&mut self.peek_token, next);
    }

    /// Advances if the lookahead has the expected kind, with optional custom error.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind of the lookahead
    /// * `error` - Optional custom error to return if expectation fails
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) with the new current token if the lookahead matched,
    /// otherwise returns an Error and leaves the cursor untouched.
    pub fn expect_peek_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<ErrorImpl>,
    ) -> Result<Token, Error> {
        let kind = self.peek_token_kind();
        if kind != expected_kind {
            let position = self.peek_token.span.start;
            match error {
                Some(error) => Err(Error::new(error, position)),
                None => Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        expected: expected_kind,
                        found: kind,
                    },
                    position,
                )),
            }
        } else {
            self.advance();
            Ok(self.current_token.clone())
        }
    }

    /// Advances if the lookahead has the expected kind, with the default error.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_peek_error(expected_kind, None)
    }

    /// Binding power of the lookahead, `Lowest` for non-operators.
    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power_lookup
            .get(&self.peek_token.kind)
            .copied()
            .unwrap_or(BindingPower::Lowest)
    }

    /// Binding power of the current token, `Lowest` for non-operators.
    pub fn current_binding_power(&self) -> BindingPower {
        self.binding_power_lookup
            .get(&self.current_token.kind)
            .copied()
            .unwrap_or(BindingPower::Lowest)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// Prefix handlers carry no binding power of their own; a token such as
    /// `-` keeps the infix precedence registered through [`Parser::led`].
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    ///
    /// Tokens without a statement handler start an expression statement.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Opens one more level of expression nesting.
    ///
    /// Fails once [`MAX_NESTING_DEPTH`] levels are open, so input like
    /// `((((...` or `----...` cannot exhaust the stack.
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }
        self.depth += 1;
        Ok(())
    }

    /// Closes the level opened by the matching [`Parser::enter_nesting`].
    pub fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Records a syntax error; parsing continues.
    pub fn record_error(&mut self, error: Error) {
        tracing::debug!(
            error = %error,
            position = error.get_position().0,
            "syntax error"
        );
        self.errors.push(error);
    }

    /// Syntax errors found so far, in source order.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Skips the rest of a broken statement.
    ///
    /// Stops on the statement's `;`, on EOF, or just before a closing `}` so
    /// one more `advance` lands on the next statement or on the end of the
    /// enclosing block.
    pub fn synchronize(&mut self) {
        while !self.current_token.is(TokenKind::Semicolon)
            && !self.current_token.is(TokenKind::EOF)
            && !self.peek_token.is(TokenKind::RBrace)
        {
            self.advance();
        }
    }

    /// Returns the start of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token.span.start
    }

    /// Parses statements until EOF.
    ///
    /// Never fails: broken statements are left out of the program and the
    /// reason is available from [`Parser::errors`].
    #[tracing::instrument(skip_all)]
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_token.is(TokenKind::EOF) {
            match parse_stmt(self) {
                Some(stmt) => program.statements.push(stmt),
                // No block is open at the top level, so a stray `}` is dropped
                None if self.current_token.is(TokenKind::RBrace) => self.advance(),
                None => {}
            }
        }

        tracing::debug!(
            statements = program.statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );
        program
    }
}

/// Parses source text into a Program.
///
/// This is the main entry point for parsing. It creates a lexer and a parser
/// and parses all statements until EOF.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance, whose `errors()` lists every syntax error found
/// - The Program, holding every statement that parsed cleanly
pub fn parse(source: &str) -> (Parser, Program) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    (parser, program)
}
