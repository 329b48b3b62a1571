//! Expression parsing implementation
//!
//! Expressions are parsed with a Pratt (precedence climbing) parser. Each
//! token kind that can start an expression has a *prefix* rule, and each
//! token kind that can continue one has an *infix* rule. Both registries
//! live on the [`Parser`] instance and are filled once in its constructor.
//!
//! # Supported Expressions
//!
//! - Identifiers and integer literals
//! - Prefix operators: `!`, `-`
//! - Infix operators: `==`, `!=`, `<`, `>`, `+`, `-`, `*`, `/`
//!
//! # Precedence
//!
//! | Level         | Operators   |
//! |---------------|-------------|
//! | `Equals`      | `==` `!=`   |
//! | `LessGreater` | `<` `>`     |
//! | `Sum`         | `+` `-`     |
//! | `Product`     | `*` `/`     |
//! | `Prefix`      | unary `-` `!` |
//!
//! Binary operators of equal precedence group to the left.

use crate::parser::ast::*;
use crate::parser::parse::{ParseError, Parser};
use crate::parser::token::TokenKind;

/// Rule for a token that starts an expression (`cur_token` is that token)
pub(crate) type PrefixParseFn = fn(&mut Parser) -> Result<Expression, ParseError>;

/// Rule for a token that continues `left` (`cur_token` is the operator)
pub(crate) type InfixParseFn = fn(&mut Parser, Expression) -> Result<Expression, ParseError>;

/// Binding strength, weakest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    Equals,      // ==
    LessGreater, // > or <
    Sum,         // +
    Product,     // *
    Prefix,      // -x or !x
    #[allow(dead_code)] // reserved for call expressions
    Call,
}

impl Precedence {
    /// Infix binding strength of a token kind; `Lowest` for anything that
    /// cannot continue an expression.
    pub fn of(kind: TokenKind) -> Precedence {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
            TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Precedence::Product,
            _ => Precedence::Lowest,
        }
    }
}

impl Parser {
    pub(crate) fn register_expression_rules(&mut self) {
        self.register_prefix(TokenKind::Ident, Parser::parse_identifier);
        self.register_prefix(TokenKind::Int, Parser::parse_integer_literal);
        self.register_prefix(TokenKind::Bang, Parser::parse_prefix_expression);
        self.register_prefix(TokenKind::Minus, Parser::parse_prefix_expression);

        for kind in [
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::Eq,
            TokenKind::NotEq,
            TokenKind::Lt,
            TokenKind::Gt,
        ] {
            self.register_infix(kind, Parser::parse_infix_expression);
        }
    }

    pub(crate) fn register_prefix(&mut self, kind: TokenKind, rule: PrefixParseFn) {
        self.prefix_parse_fns.insert(kind, rule);
    }

    pub(crate) fn register_infix(&mut self, kind: TokenKind, rule: InfixParseFn) {
        self.infix_parse_fns.insert(kind, rule);
    }

    /// Parse an expression whose operators all bind tighter than `precedence`.
    pub(crate) fn parse_expression(
        &mut self,
        precedence: Precedence,
    ) -> Result<Expression, ParseError> {
        let prefix = self
            .prefix_parse_fns
            .get(&self.cur_token.kind)
            .copied()
            .ok_or(ParseError::NoPrefixParseFn {
                kind: self.cur_token.kind,
            })?;

        let mut left = prefix(self)?;

        while !self.peek_token_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            let infix = match self.infix_parse_fns.get(&self.peek_token.kind).copied() {
                Some(infix) => infix,
                None => return Ok(left),
            };

            self.next_token();
            left = infix(self, left)?;
        }

        Ok(left)
    }

    fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek_token.kind)
    }

    fn cur_precedence(&self) -> Precedence {
        Precedence::of(self.cur_token.kind)
    }

    fn parse_identifier(&mut self) -> Result<Expression, ParseError> {
        Ok(Expression::Identifier(Identifier {
            token: self.cur_token.clone(),
            value: self.cur_token.literal.clone(),
        }))
    }

    fn parse_integer_literal(&mut self) -> Result<Expression, ParseError> {
        let value = self
            .cur_token
            .literal
            .parse::<i64>()
            .map_err(|_| ParseError::InvalidInteger {
                literal: self.cur_token.literal.clone(),
            })?;

        Ok(Expression::IntegerLiteral(IntegerLiteral {
            token: self.cur_token.clone(),
            value,
        }))
    }

    fn parse_prefix_expression(&mut self) -> Result<Expression, ParseError> {
        let token = self.cur_token.clone();
        let operator = token.literal.clone();

        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        Ok(Expression::Prefix(PrefixExpression {
            token,
            operator,
            right: Box::new(right),
        }))
    }

    fn parse_infix_expression(&mut self, left: Expression) -> Result<Expression, ParseError> {
        let token = self.cur_token.clone();
        let operator = token.literal.clone();
        let precedence = self.cur_precedence();

        self.next_token();
        let right = self.parse_expression(precedence)?;

        Ok(Expression::Infix(InfixExpression {
            token,
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse::parse;

    #[test]
    fn test_precedence_ordering() {
        assert!(Precedence::Lowest < Precedence::Equals);
        assert!(Precedence::Equals < Precedence::LessGreater);
        assert!(Precedence::LessGreater < Precedence::Sum);
        assert!(Precedence::Sum < Precedence::Product);
        assert!(Precedence::Product < Precedence::Prefix);
        assert!(Precedence::Prefix < Precedence::Call);
    }

    #[test]
    fn test_non_operators_have_lowest_precedence() {
        for kind in [
            TokenKind::Assign,
            TokenKind::Bang,
            TokenKind::Semicolon,
            TokenKind::Illegal,
            TokenKind::Eof,
        ] {
            assert_eq!(Precedence::of(kind), Precedence::Lowest);
        }
    }

    #[test]
    fn test_integer_overflow_is_reported() {
        let (program, errors) = parse("9223372036854775808;");
        assert!(program.statements.is_empty());
        assert_eq!(
            errors,
            vec![ParseError::InvalidInteger {
                literal: "9223372036854775808".to_string()
            }]
        );
    }

    #[test]
    fn test_largest_integer_parses() {
        let (program, errors) = parse("9223372036854775807");
        assert!(errors.is_empty());
        match &program.statements[0] {
            Statement::Expression(ExpressionStatement {
                expression: Expression::IntegerLiteral(lit),
                ..
            }) => assert_eq!(lit.value, i64::MAX),
            other => panic!("Expected integer literal, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_prefix_rule() {
        let (_, errors) = parse("* 5;");
        assert_eq!(
            errors,
            vec![ParseError::NoPrefixParseFn {
                kind: TokenKind::Asterisk
            }]
        );
    }

    #[test]
    fn test_illegal_token_ends_expression() {
        // `@` has no infix rule, so `5` stands alone and `@` fails as a prefix
        let (program, errors) = parse("5 @ 6;");
        assert_eq!(program.render(), "5");
        assert_eq!(
            errors,
            vec![ParseError::NoPrefixParseFn {
                kind: TokenKind::Illegal
            }]
        );
    }

    #[test]
    fn test_parsers_are_independent() {
        let mut first = Parser::from_source("1 +");
        let mut second = Parser::from_source("2 * 3");
        first.parse_program();
        let program = second.parse_program();

        assert_eq!(first.errors().len(), 1);
        assert!(second.errors().is_empty());
        assert_eq!(program.render(), "(2 * 3)");
    }

    #[test]
    fn test_registered_rules() {
        let parser = Parser::from_source("");
        assert_eq!(parser.prefix_parse_fns.len(), 4);
        assert_eq!(parser.infix_parse_fns.len(), 8);
        assert!(!parser.infix_parse_fns.contains_key(&TokenKind::Bang));
    }
}
