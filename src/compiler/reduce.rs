use super::{
    Compiler, Error, Result,
    stack::{Marker, StackItem},
};
use crate::ast::AstNode;

/// The kind of token about to be shifted, which bounds how far the stack may
/// be reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Lookahead {
    /// An operand follows. Only the two nodes under it may be concatenated:
    /// the newest operand must stay exposed to a following quantifier and a
    /// pending `|` must not claim it.
    Atom,
    /// `|` follows.
    Alternate,
    /// `)` follows, or has just been pushed.
    Close,
    /// The pattern is exhausted.
    End,
}

impl Compiler<'_> {
    /// Collapses the top of the stack until a barrier is reached.
    ///
    /// Rules, with `right` the top and `left` the item beneath it:
    /// 1. `right` is `|` or `(`: stop.
    /// 2. `right` is `)`: collapse `( node )` into a capture and stop.
    /// 3. `left` is `(` (or absent): stop.
    /// 4. `left` is `|`: collapse `node | node` into an alternation, unless
    ///    an operand follows.
    /// 5. otherwise collapse `node node` into a concatenation.
    pub(super) fn reduce(&mut self, pos: usize, lookahead: Lookahead) -> Result<()> {
        loop {
            match self.stack.last() {
                None
                | Some(StackItem::Marker(
                    Marker::Alternate
                    | Marker::StartCapture(_)
                    | Marker::PendingLiteral(_)
                    | Marker::PendingRangeStart(_),
                )) => return Ok(()),
                Some(StackItem::Marker(Marker::EndCapture)) => return self.reduce_capture(pos),
                Some(StackItem::Node(_)) => {}
            }

            let Some(left) = self.stack.len().checked_sub(2).map(|i| &self.stack[i]) else {
                return Ok(());
            };

            match left {
                StackItem::Marker(Marker::StartCapture(_)) => return Ok(()),
                StackItem::Marker(Marker::Alternate) => {
                    if lookahead == Lookahead::Atom {
                        return Ok(());
                    }
                    self.reduce_alternate(pos)?;
                }
                StackItem::Node(_) => self.reduce_concat(pos)?,
                StackItem::Marker(_) => return Err(Error::UnbalancedExpression { pos }),
            }
        }
    }

    fn reduce_concat(&mut self, pos: usize) -> Result<()> {
        let right = self.pop_node();
        let left = self.pop_node();
        let (Some(left), Some(right)) = (left, right) else {
            return Err(Error::UnbalancedExpression { pos });
        };

        log::trace!("reduce concat");
        self.push_node(AstNode::concat(left, right))
    }

    fn reduce_alternate(&mut self, pos: usize) -> Result<()> {
        let Some(right) = self.pop_node() else {
            return Err(Error::DanglingAlternation { pos });
        };
        self.stack.pop();
        let Some(left) = self.pop_node() else {
            return Err(Error::DanglingAlternation { pos });
        };

        log::trace!("reduce alternate");
        self.push_node(AstNode::alternate(left, right))
    }

    /// Collapses `( node )` on top of the stack into a capture node.
    fn reduce_capture(&mut self, pos: usize) -> Result<()> {
        self.stack.pop();

        let child = match self.stack.pop() {
            Some(StackItem::Node(node)) => node,
            Some(StackItem::Marker(Marker::StartCapture(_))) => {
                return Err(Error::EmptyCaptureGroup { pos });
            }
            Some(StackItem::Marker(_)) | None => return Err(Error::MalformedCapture { pos }),
        };

        let Some(StackItem::Marker(Marker::StartCapture(opened))) = self.stack.pop() else {
            return Err(Error::MalformedCapture { pos });
        };

        let index = if cfg!(feature = "close-order") {
            self.closed
        } else {
            opened
        };
        self.closed += 1;

        log::trace!("reduce capture {index}");
        self.push_node(AstNode::capture(child, index))
    }
}
