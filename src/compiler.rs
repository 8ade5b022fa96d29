use super::{Error, Result, ast::AstNode, lexer::Lexer};

mod reduce;
mod shift;
mod stack;

use self::{
    reduce::Lookahead,
    stack::{Marker, StackItem},
};


/// Parses a pattern into an [`AstNode`] tree.
///
/// # Errors
///
/// If the pattern is malformed, an [`Error`] describing the first problem is
/// returned and everything built so far is released.
pub fn parse(pattern: &[u8]) -> Result<AstNode> {
    let result = Compiler::new(pattern).compile();
    match &result {
        Ok(ast) => log::debug!(
            "parsed {:?} into {} levels, {} captures",
            pattern.escape_ascii().to_string(),
            ast.depth(),
            ast.capture_count()
        ),
        Err(err) => log::debug!(
            "rejected {:?}: {err}",
            pattern.escape_ascii().to_string()
        ),
    }
    result
}

/// Scanner position relative to character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanState {
    Scanning,
    /// Directly after `[`, where `^` inverts the class.
    CharClassExpectInvert,
    CharClassBody,
}

/// A single-use shift-reduce compiler for one pattern.
///
/// Every input token is shifted onto a stack of nodes and markers; the stack
/// is reduced as far as operator precedence allows before each shift. The
/// compiler is consumed by [`Compiler::compile`]; anything left on the stack
/// when it is dropped is released.
pub struct Compiler<'a> {
    lexer: Lexer<'a>,
    stack: Vec<StackItem>,
    state: ScanState,
    /// Number of `(` shifted so far.
    opened: usize,
    /// Number of capture groups reduced so far.
    closed: usize,
    /// Position of the `[` of the class being built.
    class_start: usize,
}

impl<'a> Compiler<'a> {
    #[must_use]
    pub fn new(pattern: &'a [u8]) -> Self {
        Compiler {
            lexer: Lexer::new(pattern),
            stack: Vec::new(),
            state: ScanState::Scanning,
            opened: 0,
            closed: 0,
            class_start: 0,
        }
    }

    /// Converts the pattern into an [`AstNode`], consuming the compiler.
    ///
    /// # Errors
    ///
    /// If the pattern is malformed, an [`Error`] is returned.
    pub fn compile(mut self) -> Result<AstNode> {
        while let Some(token) = self.lexer.next_token()? {
            self.shift(token)?;
        }

        self.finish()
    }

    fn finish(mut self) -> Result<AstNode> {
        let pos = self.lexer.tell();

        if self.state != ScanState::Scanning {
            return Err(Error::UnterminatedCharacterClass {
                pos: self.class_start,
            });
        }

        if self.stack.is_empty() {
            return Err(Error::EmptyPattern);
        }

        self.reduce(pos, Lookahead::End)?;

        if self.stack.len() > 1 {
            return Err(Error::UnbalancedExpression { pos });
        }

        match self.stack.pop() {
            Some(StackItem::Node(ast)) => Ok(ast),
            _ => Err(Error::UnbalancedExpression { pos }),
        }
    }

    fn push(&mut self, item: StackItem) -> Result<()> {
        self.stack
            .try_reserve(1)
            .map_err(|_| Error::AllocationFailure)?;
        log::trace!("shift {item:?} (depth {})", self.stack.len());
        self.stack.push(item);
        Ok(())
    }

    fn push_node(&mut self, node: AstNode) -> Result<()> {
        self.push(StackItem::Node(node))
    }

    fn push_marker(&mut self, marker: Marker) -> Result<()> {
        self.push(StackItem::Marker(marker))
    }

    /// Pops the top of the stack if it is a node.
    fn pop_node(&mut self) -> Option<AstNode> {
        match self.stack.pop()? {
            StackItem::Node(node) => Some(node),
            marker @ StackItem::Marker(_) => {
                self.stack.push(marker);
                None
            }
        }
    }

    fn top_marker(&self) -> Option<Marker> {
        self.stack.last().and_then(StackItem::marker)
    }
}

impl Drop for Compiler<'_> {
    fn drop(&mut self) {
        if self.stack.is_empty() {
            return;
        }

        let released: usize = self
            .stack
            .drain(..)
            .filter_map(|item| match item {
                StackItem::Node(node) => Some(node.release()),
                StackItem::Marker(_) => None,
            })
            .sum();
        log::debug!("released {released} abandoned nodes");
    }
}
