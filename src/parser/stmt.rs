use crate::{
    ast::{
        ast::Stmt,
        expressions::Identifier,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

/// Parses one statement starting at the current token and moves past it.
///
/// A broken statement yields `None`; its error is recorded and the rest of
/// it skipped.
pub fn parse_stmt(parser: &mut Parser) -> Option<Stmt> {
    let handler = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied()
        .unwrap_or(parse_expression_stmt);

    match handler(parser) {
        Ok(stmt) => {
            parser.advance();
            Some(stmt)
        }
        Err(error) => {
            recover(parser, error);
            None
        }
    }
}

/// Records `error` and moves past the broken part of the statement.
///
/// A token with no prefix handler was never consumed, so only that token is
/// skipped. A `}` in that position is left in place for the enclosing block.
/// Any other error skips to the end of the statement.
fn recover(parser: &mut Parser, error: Error) {
    let stray_token = matches!(error.get_kind(), ErrorImpl::NoPrefixParseFunction { .. });
    parser.record_error(error);

    if !stray_token {
        parser.synchronize();
        parser.advance();
        return;
    }

    if parser.current_token().is(TokenKind::RBrace) {
        return;
    }

    parser.advance();
    if parser.current_token().is(TokenKind::Semicolon) {
        parser.advance();
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    let found = parser.peek_token_kind();
    let name_token = parser.expect_peek_error(
        TokenKind::Ident,
        Some(ErrorImpl::ExpectedIdentifierAfterLet { found }),
    )?;
    let name = Identifier {
        value: name_token.literal.clone(),
        token: name_token,
    };

    let found = parser.peek_token_kind();
    parser.expect_peek_error(TokenKind::Assign, Some(ErrorImpl::ExpectedAssign { found }))?;

    parser.advance();
    let value = parse_expr(parser, BindingPower::Lowest)?;

    skip_optional_semicolon(parser);

    Ok(Stmt::Let(LetStmt { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    parser.advance();
    let value = parse_expr(parser, BindingPower::Lowest)?;

    skip_optional_semicolon(parser);

    Ok(Stmt::Return(ReturnStmt { token, value }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Lowest)?;

    skip_optional_semicolon(parser);

    Ok(Stmt::Expression(ExpressionStmt { token, expression }))
}

/// Parses `{ ... }` starting at the `{` and ending on the matching `}`.
///
/// Statements inside the block recover on their own; only a block left open
/// at EOF is an error for the enclosing expression.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let token = parser.current_token().clone();
    parser.advance();

    let mut statements = Vec::new();
    while !parser.current_token().is(TokenKind::RBrace) {
        if parser.current_token().is(TokenKind::EOF) {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: TokenKind::RBrace,
                    found: TokenKind::EOF,
                },
                parser.get_position(),
            ));
        }

        if let Some(stmt) = parse_stmt(parser) {
            statements.push(stmt);
        }
    }

    Ok(BlockStmt { token, statements })
}

// Semicolons terminate statements but may be left off at the end of input
// or of a block.
fn skip_optional_semicolon(parser: &mut Parser) {
    if parser.peek_token().is(TokenKind::Semicolon) {
        parser.advance();
    }
}
