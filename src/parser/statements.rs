//! Statement parsing implementation
//!
//! # Grammar
//!
//! ```text
//! statement  ::= let_stmt | return_stmt | expr_stmt
//! let_stmt   ::= "let" IDENT "=" expression [";"]
//! return_stmt::= "return" [expression] [";"]
//! expr_stmt  ::= expression [";"]
//! ```
//!
//! Each rule starts with the statement's first token as `cur_token` and
//! leaves `cur_token` on the statement's last token.

use crate::parser::ast::*;
use crate::parser::expressions::Precedence;
use crate::parser::parse::{ParseError, Parser};
use crate::parser::token::TokenKind;

impl Parser {
    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        match self.cur_token.kind {
            TokenKind::Let => self.parse_let_statement().map(Statement::Let),
            TokenKind::Return => self.parse_return_statement().map(Statement::Return),
            _ => self
                .parse_expression_statement()
                .map(Statement::Expression),
        }
    }

    fn parse_let_statement(&mut self) -> Result<LetStatement, ParseError> {
        let token = self.cur_token.clone();

        self.expect_peek(TokenKind::Ident)?;
        let name = Identifier {
            token: self.cur_token.clone(),
            value: self.cur_token.literal.clone(),
        };

        self.expect_peek(TokenKind::Assign)?;
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Ok(LetStatement { token, name, value })
    }

    /// `return;` and a bare `return` at end of input carry no value.
    fn parse_return_statement(&mut self) -> Result<ReturnStatement, ParseError> {
        let token = self.cur_token.clone();

        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
            return Ok(ReturnStatement { token, value: None });
        }
        if self.peek_token_is(TokenKind::Eof) {
            return Ok(ReturnStatement { token, value: None });
        }

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Ok(ReturnStatement {
            token,
            value: Some(value),
        })
    }

    fn parse_expression_statement(&mut self) -> Result<ExpressionStatement, ParseError> {
        let token = self.cur_token.clone();
        let expression = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Ok(ExpressionStatement { token, expression })
    }
}
