//! Lexer (tokenizer) for simian source text
//!
//! Produces [`Token`]s on demand, one call to [`Lexer::next_token`] at a
//! time. The source is held as a `char` buffer with a forward-only cursor;
//! the lexer never looks more than one character past it, and scanning the
//! same text again needs a fresh [`Lexer`].
//!
//! Characters that start no known token shape come back as
//! [`TokenKind::Illegal`] tokens rather than errors, leaving the parser to
//! decide what they mean.

use super::token::{Token, TokenKind};

/// Single-pass lexer over a source string
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Drain the lexer, returning every token including the final EOF.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let done = token.is(TokenKind::Eof);
            tokens.push(token);
            if done {
                break;
            }
        }

        tokens
    }

    /// Get next token. Returns EOF on every call once the input is exhausted.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let ch = match self.advance() {
            Some(ch) => ch,
            None => return Token::eof(),
        };

        match ch {
            '=' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Token::new(TokenKind::Eq, "==")
                } else {
                    Token::new(TokenKind::Assign, "=")
                }
            }
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Token::new(TokenKind::NotEq, "!=")
                } else {
                    Token::new(TokenKind::Bang, "!")
                }
            }
            '+' => single(TokenKind::Plus, ch),
            '-' => single(TokenKind::Minus, ch),
            '*' => single(TokenKind::Asterisk, ch),
            '/' => single(TokenKind::Slash, ch),
            '<' => single(TokenKind::Lt, ch),
            '>' => single(TokenKind::Gt, ch),
            ',' => single(TokenKind::Comma, ch),
            ';' => single(TokenKind::Semicolon, ch),
            '(' => single(TokenKind::LParen, ch),
            ')' => single(TokenKind::RParen, ch),
            '{' => single(TokenKind::LBrace, ch),
            '}' => single(TokenKind::RBrace, ch),

            c if is_letter(c) => self.identifier_or_keyword(c),
            c if c.is_ascii_digit() => self.number_literal(c),

            _ => single(TokenKind::Illegal, ch),
        }
    }

    /// Read the rest of a run of letters and classify it.
    fn identifier_or_keyword(&mut self, first_char: char) -> Token {
        let mut ident = String::new();
        ident.push(first_char);

        while let Some(ch) = self.peek() {
            if is_letter(ch) {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        Token::new(TokenKind::lookup_ident(&ident), ident)
    }

    /// Read the rest of a run of digits. Conversion happens in the parser.
    fn number_literal(&mut self, first_digit: char) -> Token {
        let mut digits = String::new();
        digits.push(first_digit);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                digits.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        Token::new(TokenKind::Int, digits)
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\n' | '\r') = self.peek() {
            self.advance();
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }
}

/// Yields tokens up to, but not including, the end of input.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is(TokenKind::Eof) {
            None
        } else {
            Some(token)
        }
    }
}

fn single(kind: TokenKind, ch: char) -> Token {
    Token::new(kind, ch.to_string())
}

fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source).tokenize().iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_simple_tokens() {
        let tokens = Lexer::new("=+(){},;").tokenize();
        let expected = [
            (TokenKind::Assign, "="),
            (TokenKind::Plus, "+"),
            (TokenKind::LParen, "("),
            (TokenKind::RParen, ")"),
            (TokenKind::LBrace, "{"),
            (TokenKind::RBrace, "}"),
            (TokenKind::Comma, ","),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Eof, ""),
        ];

        assert_eq!(tokens.len(), expected.len());
        for (token, (kind, literal)) in tokens.iter().zip(expected) {
            assert_eq!(token.kind, kind);
            assert_eq!(token.literal, literal);
        }
    }

    #[test]
    fn test_let_statement() {
        let tokens = Lexer::new("let five = 5;").tokenize();

        assert_eq!(tokens[0], Token::new(TokenKind::Let, "let"));
        assert_eq!(tokens[1], Token::new(TokenKind::Ident, "five"));
        assert_eq!(tokens[2], Token::new(TokenKind::Assign, "="));
        assert_eq!(tokens[3], Token::new(TokenKind::Int, "5"));
        assert_eq!(tokens[4], Token::new(TokenKind::Semicolon, ";"));
        assert_eq!(tokens[5], Token::eof());
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            kinds("! - / * < > == != ="),
            vec![
                TokenKind::Bang,
                TokenKind::Minus,
                TokenKind::Slash,
                TokenKind::Asterisk,
                TokenKind::Lt,
                TokenKind::Gt,
                TokenKind::Eq,
                TokenKind::NotEq,
                TokenKind::Assign,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_two_char_operators_without_spaces() {
        let tokens = Lexer::new("a==b!=!c").tokenize();
        let literals: Vec<&str> = tokens.iter().map(|t| t.literal.as_str()).collect();
        assert_eq!(literals, vec!["a", "==", "b", "!=", "!", "c", ""]);
    }

    #[test]
    fn test_keywords_need_exact_match() {
        assert_eq!(
            kinds("let return lets returned _let"),
            vec![
                TokenKind::Let,
                TokenKind::Return,
                TokenKind::Ident,
                TokenKind::Ident,
                TokenKind::Ident,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_digits_end_identifiers() {
        let tokens = Lexer::new("abc123").tokenize();
        assert_eq!(tokens[0], Token::new(TokenKind::Ident, "abc"));
        assert_eq!(tokens[1], Token::new(TokenKind::Int, "123"));
    }

    #[test]
    fn test_illegal_characters() {
        let tokens = Lexer::new("@ 5 é").tokenize();
        assert_eq!(tokens[0], Token::new(TokenKind::Illegal, "@"));
        assert_eq!(tokens[1], Token::new(TokenKind::Int, "5"));
        assert_eq!(tokens[2], Token::new(TokenKind::Illegal, "é"));
        assert!(tokens[3].is(TokenKind::Eof));
    }

    #[test]
    fn test_whitespace_is_skipped() {
        assert_eq!(
            kinds(" \t\r\n x \n\n"),
            vec![TokenKind::Ident, TokenKind::Eof]
        );
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_eof_is_idempotent() {
        let mut lexer = Lexer::new("x");
        assert!(lexer.next_token().is(TokenKind::Ident));
        for _ in 0..5 {
            assert_eq!(lexer.next_token(), Token::eof());
        }
    }

    #[test]
    fn test_iterator_stops_before_eof() {
        let literals: Vec<String> = Lexer::new("let x = 1;").map(|t| t.literal).collect();
        assert_eq!(literals, vec!["let", "x", "=", "1", ";"]);
    }
}
