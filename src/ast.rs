pub mod node;
pub mod quantifier;

pub use self::{node::AstNode, quantifier::Quantifier};
