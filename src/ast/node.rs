use super::super::charset::{CharClass, CharSet};

/// A node of a parsed pattern. Every non-leaf node owns its children.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AstNode {
    /// Placeholder used while a node is being rebuilt in place.
    Empty,
    Any,         // .
    Literal(u8), // a, \., \n, ...

    // Binary nodes
    Concat {
        left: Box<AstNode>,
        right: Box<AstNode>,
    },
    Alternate {
        left: Box<AstNode>,
        right: Box<AstNode>,
    },

    CharClass(CharClass), // [...], [^...], \d, \W, ...

    // Quantified nodes
    Star(Box<AstNode>),
    Plus(Box<AstNode>),
    Optional(Box<AstNode>),

    Capture {
        index: usize, // 0-based
        child: Box<AstNode>,
    },
}

impl AstNode {
    #[must_use]
    pub const fn empty() -> Self {
        AstNode::Empty
    }

    #[must_use]
    pub const fn any() -> Self {
        AstNode::Any
    }

    #[must_use]
    pub const fn literal(c: u8) -> Self {
        AstNode::Literal(c)
    }

    #[must_use]
    pub fn concat(left: AstNode, right: AstNode) -> Self {
        AstNode::Concat {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    #[must_use]
    pub fn alternate(left: AstNode, right: AstNode) -> Self {
        AstNode::Alternate {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Creates a non-inverted class with the given members.
    #[must_use]
    pub const fn char_class(members: CharSet) -> Self {
        AstNode::CharClass(CharClass::new(members))
    }

    #[must_use]
    pub fn star(child: AstNode) -> Self {
        AstNode::Star(Box::new(child))
    }

    #[must_use]
    pub fn plus(child: AstNode) -> Self {
        AstNode::Plus(Box::new(child))
    }

    #[must_use]
    pub fn optional(child: AstNode) -> Self {
        AstNode::Optional(Box::new(child))
    }

    #[must_use]
    pub fn capture(child: AstNode, index: usize) -> Self {
        AstNode::Capture {
            index,
            child: Box::new(child),
        }
    }

    /// Tears the tree down, returning the number of nodes released.
    pub fn release(mut self) -> usize {
        let mut pending = vec![std::mem::replace(&mut self, AstNode::Empty)];
        let mut released = 0;

        while let Some(mut node) = pending.pop() {
            released += 1;
            node.take_children(&mut pending);
        }

        released
    }

    /// Moves the children of the node onto `into`, leaving `Empty` behind.
    fn take_children(&mut self, into: &mut Vec<AstNode>) {
        match self {
            AstNode::Concat { left, right } | AstNode::Alternate { left, right } => {
                into.push(std::mem::replace(&mut **left, AstNode::Empty));
                into.push(std::mem::replace(&mut **right, AstNode::Empty));
            }
            AstNode::Star(child)
            | AstNode::Plus(child)
            | AstNode::Optional(child)
            | AstNode::Capture { child, .. } => {
                into.push(std::mem::replace(&mut **child, AstNode::Empty));
            }
            AstNode::Empty | AstNode::Any | AstNode::Literal(_) | AstNode::CharClass(_) => {}
        }
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            AstNode::Empty | AstNode::Any | AstNode::Literal(_) | AstNode::CharClass(_)
        )
    }

    /// Iterates over the direct children of the node, left to right.
    pub fn children(&self) -> impl Iterator<Item = &AstNode> {
        let (first, second) = match self {
            AstNode::Concat { left, right } | AstNode::Alternate { left, right } => {
                (Some(&**left), Some(&**right))
            }
            AstNode::Star(child)
            | AstNode::Plus(child)
            | AstNode::Optional(child)
            | AstNode::Capture { child, .. } => (Some(&**child), None),
            AstNode::Empty | AstNode::Any | AstNode::Literal(_) | AstNode::CharClass(_) => {
                (None, None)
            }
        };
        first.into_iter().chain(second)
    }

    /// Returns the number of capture groups in the tree.
    #[must_use]
    pub fn capture_count(&self) -> usize {
        self.walk()
            .filter(|node| matches!(node, AstNode::Capture { .. }))
            .count()
    }

    /// Returns the number of levels in the tree; a leaf has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut pending = vec![(self, 1)];
        let mut deepest = 0;
        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(node.children().map(|child| (child, depth + 1)));
        }
        deepest
    }

    /// Visits every node in pre-order.
    pub fn walk(&self) -> impl Iterator<Item = &AstNode> {
        let mut pending = vec![self];
        std::iter::from_fn(move || {
            let node = pending.pop()?;
            let mark = pending.len();
            pending.extend(node.children());
            pending[mark..].reverse();
            Some(node)
        })
    }

    #[must_use]
    pub const fn as_char_class(&self) -> Option<&CharClass> {
        match self {
            AstNode::CharClass(class) => Some(class),
            _ => None,
        }
    }

    /// Adds `b` to a character class node. Returns `false` for any other
    /// kind of node.
    pub fn add_member(&mut self, b: u8) -> bool {
        match self {
            AstNode::CharClass(class) => {
                class.add_member(b);
                true
            }
            _ => false,
        }
    }

    /// Reports raw membership of `b` in a character class node, ignoring the
    /// `inverse` flag. Always `false` for any other kind of node.
    #[must_use]
    pub const fn is_member(&self, b: u8) -> bool {
        match self {
            AstNode::CharClass(class) => class.is_member(b),
            _ => false,
        }
    }

    /// Marks a character class node as inverted. Returns `false` for any
    /// other kind of node.
    pub fn invert(&mut self) -> bool {
        match self {
            AstNode::CharClass(class) => {
                class.invert();
                true
            }
            _ => false,
        }
    }
}

// The derived drop glue recurses once per level, which a long enough pattern
// turns into a stack overflow. Children are moved onto a heap stack instead.
impl Drop for AstNode {
    fn drop(&mut self) {
        if self.children().all(AstNode::is_leaf) {
            return;
        }

        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.take_children(&mut pending);
        }
    }
}
