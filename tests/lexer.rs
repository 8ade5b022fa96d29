use eroc_regex::{
    Error, Result,
    lexer::{Lexer, Token},
};

fn lex_all(input: &[u8]) -> Result<Vec<Token>> {
    Lexer::new(input)
        .map(|token| token.map(|t| t.token))
        .collect()
}

#[test]
fn test_basic_tokens_lexer() -> Result<()> {
    assert_eq!(
        lex_all(b"abc")?,
        vec![
            Token::Literal(b'a'),
            Token::Literal(b'b'),
            Token::Literal(b'c')
        ]
    );
    assert_eq!(
        lex_all(b".|()[]^-*+?")?,
        vec![
            Token::Any,
            Token::Pipe,
            Token::LParen,
            Token::RParen,
            Token::LBracket,
            Token::RBracket,
            Token::Caret,
            Token::Minus,
            Token::Star,
            Token::Plus,
            Token::Question
        ]
    );
    assert_eq!(
        lex_all(b"${}")?,
        vec![
            Token::Literal(b'$'),
            Token::Literal(b'{'),
            Token::Literal(b'}')
        ]
    );
    Ok(())
}

#[test]
fn test_escape_tokens_lexer() -> Result<()> {
    assert_eq!(
        lex_all(b"\\n\\t\\f\\v")?,
        vec![
            Token::Escaped(b'\n'),
            Token::Escaped(b'\t'),
            Token::Escaped(0x0c),
            Token::Escaped(0x0b)
        ]
    );
    for &c in b"[](){}.*+?|\\-^$" {
        assert_eq!(lex_all(&[b'\\', c])?, vec![Token::Escaped(c)]);
    }
    assert_eq!(
        lex_all(b"\\d\\D\\w\\W\\s\\S\\a\\A")?,
        b"dDwWsSaA".iter().map(|&c| Token::Class(c)).collect::<Vec<_>>()
    );
    Ok(())
}

#[test]
fn test_positions_lexer() -> Result<()> {
    let positions: Vec<usize> = Lexer::new(b"a\\.b")
        .map(|token| token.map(|t| t.pos))
        .collect::<Result<_>>()?;
    assert_eq!(positions, vec![0, 1, 3]);
    Ok(())
}

#[test]
fn test_high_bytes_lexer() -> Result<()> {
    assert_eq!(
        lex_all("é".as_bytes())?,
        vec![Token::Literal(0xc3), Token::Literal(0xa9)]
    );
    Ok(())
}

#[test]
fn test_errors_lexer() {
    assert_eq!(
        lex_all(b"a\\q"),
        Err(Error::InvalidEscape {
            pos: 1,
            lit: Some(b'q')
        })
    );
    assert_eq!(
        lex_all(b"ab\\"),
        Err(Error::InvalidEscape { pos: 2, lit: None })
    );
    assert_eq!(
        lex_all(b"a\0"),
        Err(Error::InvalidCharacter { pos: 1, lit: 0 })
    );
}
