//! A shift-reduce front end for regular expressions.
//!
//! [`parse`] turns a byte pattern into an owned [`AstNode`] tree. Supported
//! syntax: literals, `.`, implicit concatenation, `|`, capture groups `( )`,
//! the postfix quantifiers `*`, `+` and `?`, bracket classes with ranges and
//! `^` inversion, and the escapes `\n \t \f \v`, `\d \w \s \a` (upper case
//! spellings negate) and `\` before any metacharacter.

#![warn(clippy::pedantic, rust_2018_idioms)]
#![allow(clippy::missing_errors_doc)]

#[cfg(all(feature = "close-order", feature = "open-order"))]
compile_error!("features `close-order` and `open-order` are mutually exclusive");
#[cfg(not(any(feature = "close-order", feature = "open-order")))]
compile_error!("one of the features `close-order` or `open-order` must be enabled");

pub mod ast;
pub mod charset;
pub mod compiler;
pub mod lexer;

pub use self::{
    ast::{AstNode, Quantifier},
    charset::{CharClass, CharSet},
    compiler::{Compiler, parse},
    lexer::{Lexer, Token},
};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The pattern contains no tokens at all.
    #[error("empty pattern")]
    EmptyPattern,

    /// The pattern contains a byte that may not appear in a pattern.
    #[error("invalid character '{}' at {pos}", lit.escape_ascii())]
    InvalidCharacter { pos: usize, lit: u8 },

    /// A `\` is followed by an unknown byte, or ends the pattern.
    #[error("invalid escape sequence '\\{}' at {pos}", describe_escape(*lit))]
    InvalidEscape { pos: usize, lit: Option<u8> },

    /// A `|` has no left operand, or a `|` is never followed by a right one.
    #[error("missing operand for '|' at {pos}")]
    DanglingAlternation { pos: usize },

    /// A quantifier does not follow a complete expression.
    #[error("nothing to repeat for '{}' at {pos}", lit.escape_ascii())]
    DanglingQuantifier { pos: usize, lit: u8 },

    /// A `)` has no matching `(`.
    #[error("unmatched ')' at {pos}")]
    MalformedCapture { pos: usize },

    /// A capture group has nothing between its parentheses.
    #[error("empty capture group at {pos}")]
    EmptyCaptureGroup { pos: usize },

    /// The pattern ended inside a character class opened at `pos`.
    #[error("unterminated character class starting at {pos}")]
    UnterminatedCharacterClass { pos: usize },

    /// The character class opened at `pos` has no members.
    #[error("empty character class at {pos}")]
    EmptyCharacterClass { pos: usize },

    /// A class range ends before it starts.
    #[error("invalid range '{}-{}' at {pos}", start.escape_ascii(), end.escape_ascii())]
    ReversedRange { pos: usize, start: u8, end: u8 },

    /// The pattern does not reduce to a single expression (e.g. an unclosed
    /// group or a trailing `|`).
    #[error("unbalanced expression at {pos}")]
    UnbalancedExpression { pos: usize },

    /// The compiler stack could not grow.
    #[error("out of memory while growing the compiler stack")]
    AllocationFailure,
}

impl Error {
    /// Returns the name of the error class, independent of any position.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Error::EmptyPattern => "EmptyPattern",
            Error::InvalidCharacter { .. } => "InvalidCharacter",
            Error::InvalidEscape { .. } => "InvalidEscape",
            Error::DanglingAlternation { .. } => "DanglingAlternation",
            Error::DanglingQuantifier { .. } => "DanglingQuantifier",
            Error::MalformedCapture { .. } => "MalformedCapture",
            Error::EmptyCaptureGroup { .. } => "EmptyCaptureGroup",
            Error::UnterminatedCharacterClass { .. } => "UnterminatedCharacterClass",
            Error::EmptyCharacterClass { .. } => "EmptyCharacterClass",
            Error::ReversedRange { .. } => "ReversedRange",
            Error::UnbalancedExpression { .. } => "UnbalancedExpression",
            Error::AllocationFailure => "AllocationFailure",
        }
    }

    pub(crate) fn from_charset(pos: usize, err: charset::Error) -> Self {
        match err {
            charset::Error::Range(start, end) => Error::ReversedRange { pos, start, end },
            charset::Error::Shorthand(lit) => Error::InvalidEscape {
                pos,
                lit: Some(lit),
            },
        }
    }
}

fn describe_escape(lit: Option<u8>) -> String {
    lit.map_or_else(String::new, |b| b.escape_ascii().to_string())
}

pub type Result<T> = std::result::Result<T, Error>;
