use super::{Error, Result};

pub mod token;

pub use token::{PosToken, Token};

fn is_escapable_magic_byte(c: u8) -> bool {
    matches!(
        c,
        b'[' | b']'
            | b'('
            | b')'
            | b'{'
            | b'}'
            | b'.'
            | b'*'
            | b'+'
            | b'?'
            | b'|'
            | b'\\'
            | b'-'
            | b'^'
            | b'$'
    )
}

fn is_class_byte(c: u8) -> bool {
    matches!(
        c,
        b'd' | b'D' | b'w' | b'W' | b's' | b'S' | b'a' | b'A'
    )
}

fn control_byte(c: u8) -> Option<u8> {
    match c {
        b'n' => Some(b'\n'),
        b't' => Some(b'\t'),
        b'f' => Some(0x0c),
        b'v' => Some(0x0b),
        _ => None,
    }
}

/// Splits a pattern into tokens, resolving `\` escapes.
///
/// The lexer is context free: whether `^` or `-` act as operators is decided
/// by the compiler from its scan state.
pub struct Lexer<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub fn new(input: &'a [u8]) -> Self {
        Lexer { input, pos: 0 }
    }

    /// Returns the current byte offset into the pattern.
    #[must_use]
    pub fn tell(&self) -> usize {
        self.pos
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let byte = self.peek();
        if byte.is_some() {
            self.pos += 1;
        }
        byte
    }

    /// Reads the next token, or `None` once the pattern is exhausted.
    ///
    /// # Errors
    ///
    /// A NUL byte yields [`Error::InvalidCharacter`]; an unknown or truncated
    /// escape yields [`Error::InvalidEscape`].
    pub fn next_token(&mut self) -> Result<Option<PosToken>> {
        let pos = self.pos;
        let Some(byte) = self.advance() else {
            return Ok(None);
        };

        let token = match byte {
            0 => return Err(Error::InvalidCharacter { pos, lit: byte }),
            b'.' => Token::Any,
            b'|' => Token::Pipe,
            b'(' => Token::LParen,
            b')' => Token::RParen,
            b'[' => Token::LBracket,
            b']' => Token::RBracket,
            b'^' => Token::Caret,
            b'-' => Token::Minus,
            b'*' => Token::Star,
            b'+' => Token::Plus,
            b'?' => Token::Question,
            b'\\' => {
                let Some(next_byte) = self.advance() else {
                    return Err(Error::InvalidEscape { pos, lit: None });
                };
                match next_byte {
                    c if is_escapable_magic_byte(c) => Token::Escaped(c),
                    c if is_class_byte(c) => Token::Class(c),
                    c => match control_byte(c) {
                        Some(control) => Token::Escaped(control),
                        None => {
                            return Err(Error::InvalidEscape { pos, lit: Some(c) });
                        }
                    },
                }
            }
            _ => Token::Literal(byte),
        };

        Ok(Some(PosToken { pos, token }))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<PosToken>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}
