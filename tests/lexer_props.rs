// Property tests for the lexer and parser

use proptest::prelude::*;
use simian::parser::{parse, Lexer, Node, Token, TokenKind};

fn strip_whitespace(source: &str) -> String {
    source
        .chars()
        .filter(|c| !matches!(c, ' ' | '\t' | '\n' | '\r'))
        .collect()
}

fn leaf() -> impl Strategy<Value = String> {
    let ident = "[a-z_]{1,6}".prop_filter("keywords are not operands", |s| {
        s != "let" && s != "return"
    });
    prop_oneof![ident, (0i64..100_000).prop_map(|n| n.to_string())]
}

proptest! {
    #[test]
    fn literals_reassemble_non_whitespace_input(source in "\\PC*") {
        let tokens = Lexer::new(&source).tokenize();
        let joined: String = tokens.iter().map(|t| t.literal.as_str()).collect();

        prop_assert_eq!(joined, strip_whitespace(&source));
        prop_assert_eq!(tokens.last(), Some(&Token::eof()));
        prop_assert_eq!(
            tokens.iter().filter(|t| t.is(TokenKind::Eof)).count(),
            1
        );
    }

    #[test]
    fn eof_repeats_forever(source in "[a-z0-9 =+;!]{0,20}", extra in 1usize..10) {
        let mut lexer = Lexer::new(&source);
        while !lexer.next_token().is(TokenKind::Eof) {}
        for _ in 0..extra {
            prop_assert_eq!(lexer.next_token(), Token::eof());
        }
    }

    #[test]
    fn parser_terminates_on_any_input(source in "[a-z0-9 =+\\-*/<>!;(){},@]{0,40}") {
        let (program, errors) = parse(&source);
        // Every statement that made it into the program renders without panicking
        let _ = program.render();
        prop_assert!(program.statements.len() + errors.len() <= source.len() + 1);
    }

    #[test]
    fn prefix_chains_nest_to_the_right(
        ops in proptest::collection::vec(prop_oneof![Just('-'), Just('!')], 1..8),
        operand in leaf(),
    ) {
        let source: String = ops.iter().collect::<String>() + &operand;
        let expected = ops
            .iter()
            .rev()
            .fold(operand.clone(), |inner, op| format!("({}{})", op, inner));

        let (program, errors) = parse(&source);
        prop_assert!(errors.is_empty());
        prop_assert_eq!(program.render(), expected);
    }

    #[test]
    fn additive_chains_group_to_the_left(
        first in leaf(),
        rest in proptest::collection::vec((prop_oneof![Just("+"), Just("-")], leaf()), 0..8),
    ) {
        let mut source = first.clone();
        let mut expected = first;
        for (op, operand) in &rest {
            source = format!("{} {} {}", source, op, operand);
            expected = format!("({} {} {})", expected, op, operand);
        }

        let (program, errors) = parse(&source);
        prop_assert!(errors.is_empty());
        prop_assert_eq!(program.render(), expected);
    }
}
