use super::{
    Compiler, Error, Result, ScanState,
    reduce::Lookahead,
    stack::{Marker, StackItem},
};
use crate::{
    ast::{AstNode, Quantifier},
    charset::{CharClass, CharSet},
    lexer::{PosToken, Token},
};

impl Compiler<'_> {
    /// Shifts one token according to the current scan state.
    pub(super) fn shift(&mut self, token: PosToken) -> Result<()> {
        match self.state {
            ScanState::Scanning => self.shift_scanning(token),
            ScanState::CharClassExpectInvert | ScanState::CharClassBody => {
                self.shift_class(token)
            }
        }
    }

    fn shift_scanning(&mut self, PosToken { pos, token }: PosToken) -> Result<()> {
        match token {
            Token::Any => self.shift_atom(pos, AstNode::any()),
            Token::Pipe => {
                if !self.stack.last().is_some_and(StackItem::is_node) {
                    return Err(Error::DanglingAlternation { pos });
                }
                self.reduce(pos, Lookahead::Alternate)?;
                self.push_marker(Marker::Alternate)
            }
            Token::LParen => {
                self.reduce(pos, Lookahead::Atom)?;
                let ordinal = self.opened;
                self.opened += 1;
                self.push_marker(Marker::StartCapture(ordinal))
            }
            Token::RParen => {
                if self.stack.is_empty() {
                    return Err(Error::MalformedCapture { pos });
                }
                match self.top_marker() {
                    Some(Marker::StartCapture(_)) => {
                        return Err(Error::EmptyCaptureGroup { pos });
                    }
                    Some(Marker::Alternate) => return Err(Error::DanglingAlternation { pos }),
                    _ => {}
                }
                self.reduce(pos, Lookahead::Close)?;
                self.push_marker(Marker::EndCapture)?;
                self.reduce(pos, Lookahead::Close)
            }
            Token::LBracket => {
                self.reduce(pos, Lookahead::Atom)?;
                self.class_start = pos;
                self.state = ScanState::CharClassExpectInvert;
                self.push_node(AstNode::char_class(CharSet::new()))
            }
            Token::Star | Token::Plus | Token::Question => self.shift_quantifier(pos, token),
            Token::Class(c) => {
                let class = CharClass::shorthand(c).map_err(|err| Error::from_charset(pos, err))?;
                self.shift_atom(pos, AstNode::CharClass(class))
            }
            Token::Literal(_)
            | Token::Escaped(_)
            | Token::RBracket
            | Token::Caret
            | Token::Minus => self.shift_atom(pos, AstNode::literal(token.to_byte())),
        }
    }

    fn shift_atom(&mut self, pos: usize, node: AstNode) -> Result<()> {
        self.reduce(pos, Lookahead::Atom)?;
        self.push_node(node)
    }

    /// Wraps the node on top of the stack in place.
    fn shift_quantifier(&mut self, pos: usize, token: Token) -> Result<()> {
        let (Some(quantifier), Some(StackItem::Node(node))) =
            (Quantifier::from_token(token), self.stack.last_mut())
        else {
            return Err(Error::DanglingQuantifier {
                pos,
                lit: token.to_byte(),
            });
        };

        log::trace!("shift {quantifier:?}");
        let child = std::mem::replace(node, AstNode::empty());
        *node = quantifier.apply(child);
        Ok(())
    }

    fn shift_class(&mut self, PosToken { pos, token }: PosToken) -> Result<()> {
        if self.state == ScanState::CharClassExpectInvert {
            self.state = ScanState::CharClassBody;
            if token == Token::Caret {
                log::trace!("invert class");
                self.open_class()?.invert();
                return Ok(());
            }
        }

        match token {
            Token::RBracket => self.close_class(),
            Token::Minus => match self.take_pending() {
                Some(Marker::PendingLiteral(start)) => {
                    self.push_marker(Marker::PendingRangeStart(start))
                }
                Some(Marker::PendingRangeStart(start)) => self.add_range(pos, start, b'-'),
                _ => self.push_marker(Marker::PendingLiteral(b'-')),
            },
            Token::Class(c) => {
                self.fold_pending(true)?;
                self.open_class()?
                    .members_mut()
                    .add_shorthand(c)
                    .map_err(|err| Error::from_charset(pos, err))
            }
            _ => {
                let b = token.to_byte();
                match self.take_pending() {
                    Some(Marker::PendingRangeStart(start)) => self.add_range(pos, start, b),
                    pending => {
                        if let Some(Marker::PendingLiteral(member)) = pending {
                            self.open_class()?.add_member(member);
                        }
                        self.push_marker(Marker::PendingLiteral(b))
                    }
                }
            }
        }
    }

    /// Finishes the class on top of the stack and resumes scanning.
    fn close_class(&mut self) -> Result<()> {
        self.fold_pending(false)?;

        let pos = self.class_start;
        if self.open_class()?.members().is_empty() {
            return Err(Error::EmptyCharacterClass { pos });
        }

        log::trace!("close class opened at {pos}");
        self.state = ScanState::Scanning;
        Ok(())
    }

    /// Folds a pending member into the class. A pending range start folds as
    /// its start byte, plus the `-` when `keep_dash` is set.
    fn fold_pending(&mut self, keep_dash: bool) -> Result<()> {
        match self.take_pending() {
            Some(Marker::PendingLiteral(member)) => self.open_class()?.add_member(member),
            Some(Marker::PendingRangeStart(start)) => {
                let class = self.open_class()?;
                class.add_member(start);
                if keep_dash {
                    class.add_member(b'-');
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn add_range(&mut self, pos: usize, start: u8, end: u8) -> Result<()> {
        log::trace!("class range {}-{}", start.escape_ascii(), end.escape_ascii());
        self.open_class()?
            .members_mut()
            .add_range(start, end)
            .map_err(|err| Error::from_charset(pos, err))
    }

    /// Pops a pending class member marker off the top of the stack.
    fn take_pending(&mut self) -> Option<Marker> {
        match self.top_marker()? {
            pending @ (Marker::PendingLiteral(_) | Marker::PendingRangeStart(_)) => {
                self.stack.pop();
                Some(pending)
            }
            _ => None,
        }
    }

    /// The class node under construction, which is the topmost node while a
    /// class is open.
    fn open_class(&mut self) -> Result<&mut CharClass> {
        let pos = self.class_start;
        match self.stack.last_mut() {
            Some(StackItem::Node(AstNode::CharClass(class))) => Ok(class),
            _ => Err(Error::UnterminatedCharacterClass { pos }),
        }
    }
}
