use super::lexer::{TokenKind, lex, token_text};

fn kinds(src: &str) -> Vec<(TokenKind, &str)> {
    lex(src)
        .iter()
        .map(|t| (t.kind, token_text(src, t)))
        .collect()
}

#[test]
fn operators_and_letters() {
    insta::assert_debug_snapshot!(kinds("(aB)*|c"), @r#"
    [
        (
            ParenOpen,
            "(",
        ),
        (
            Letter,
            "a",
        ),
        (
            Letter,
            "B",
        ),
        (
            ParenClose,
            ")",
        ),
        (
            Star,
            "*",
        ),
        (
            Pipe,
            "|",
        ),
        (
            Letter,
            "c",
        ),
    ]
    "#);
}

#[test]
fn every_letter_is_its_own_token() {
    let tokens = lex("abc");
    assert_eq!(tokens.len(), 3);
    assert!(tokens.iter().all(|t| t.kind == TokenKind::Letter && t.span.len() == 1));
}

#[test]
fn garbage_is_coalesced() {
    assert_eq!(
        kinds("a 12b"),
        vec![
            (TokenKind::Letter, "a"),
            (TokenKind::Garbage, " 12"),
            (TokenKind::Letter, "b"),
        ]
    );
}

#[test]
fn trailing_garbage_reaches_end_of_input() {
    let tokens = lex("ab\r\n");
    let last = tokens.last().copied();
    assert_eq!(last.map(|t| t.kind), Some(TokenKind::Garbage));
    assert_eq!(last.map(|t| t.span.range()), Some(2..4));
}

#[test]
fn non_ascii_letters_are_garbage() {
    assert_eq!(kinds("é"), vec![(TokenKind::Garbage, "é")]);
}

#[test]
fn empty_input() {
    assert!(lex("").is_empty());
}
