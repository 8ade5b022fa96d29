/// A pattern string token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A byte with no special meaning.
    Literal(u8),
    /// A byte produced by a `\` escape (`\n`, `\.`, `\\` etc.). Never acts as
    /// an operator, not even inside a character class.
    Escaped(u8),
    /// A shorthand class like `\d` or `\W` (just the identifying byte).
    Class(u8),
    /// `.`
    Any,
    /// `|`
    Pipe,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `^`. Inverts a character class when it directly follows `[`.
    Caret,
    /// `-`. Range operator inside a character class.
    Minus,
    /// `*`
    Star,
    /// `+`
    Plus,
    /// `?`
    Question,
}

impl Token {
    /// Returns a byte representation of the token.
    ///
    /// For shorthand classes this is the identifying byte, not a member.
    #[must_use]
    pub const fn to_byte(self) -> u8 {
        match self {
            Token::Literal(b) | Token::Escaped(b) | Token::Class(b) => b,
            Token::Any => b'.',
            Token::Pipe => b'|',
            Token::LParen => b'(',
            Token::RParen => b')',
            Token::LBracket => b'[',
            Token::RBracket => b']',
            Token::Caret => b'^',
            Token::Minus => b'-',
            Token::Star => b'*',
            Token::Plus => b'+',
            Token::Question => b'?',
        }
    }
}

/// A [`Token`] with associated position information.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PosToken {
    /// The start position of the token in the pattern string.
    pub pos: usize,
    /// The token.
    pub token: Token,
}
