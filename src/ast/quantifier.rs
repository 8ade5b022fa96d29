use super::AstNode;
use crate::lexer::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    Star,     // * (0 or more)
    Plus,     // + (1 or more)
    Optional, // ? (0 or 1)
}

impl Quantifier {
    /// Returns the quantifier spelled by `token`, if any.
    #[must_use]
    pub const fn from_token(token: Token) -> Option<Self> {
        match token {
            Token::Star => Some(Quantifier::Star),
            Token::Plus => Some(Quantifier::Plus),
            Token::Question => Some(Quantifier::Optional),
            _ => None,
        }
    }

    /// Wraps `child` in the node for this quantifier.
    #[must_use]
    pub fn apply(self, child: AstNode) -> AstNode {
        match self {
            Quantifier::Star => AstNode::star(child),
            Quantifier::Plus => AstNode::plus(child),
            Quantifier::Optional => AstNode::optional(child),
        }
    }
}
