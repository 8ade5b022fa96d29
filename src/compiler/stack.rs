use crate::ast::AstNode;

/// Stack-only sentinels. None of these can appear in a finished tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Marker {
    /// `(`, carrying its 0-based opening ordinal.
    StartCapture(usize),
    /// `)`, collapsed with its group as soon as it is pushed.
    EndCapture,
    /// `|`, waiting for its right operand.
    Alternate,
    /// A class member not yet folded into the class, in case a `-` follows.
    PendingLiteral(u8),
    /// The start of a class range, waiting for its end.
    PendingRangeStart(u8),
}

#[derive(Debug, PartialEq)]
pub(crate) enum StackItem {
    Node(AstNode),
    Marker(Marker),
}

impl StackItem {
    pub(crate) const fn is_node(&self) -> bool {
        matches!(self, StackItem::Node(_))
    }

    pub(crate) const fn marker(&self) -> Option<Marker> {
        match self {
            StackItem::Marker(marker) => Some(*marker),
            StackItem::Node(_) => None,
        }
    }
}
