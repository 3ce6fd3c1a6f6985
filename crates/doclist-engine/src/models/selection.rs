/// A point inside the text of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    /// Index of the block in the document
    pub block: usize,
    /// Character offset within the block's text
    pub offset: usize,
}

impl Position {
    pub fn new(block: usize, offset: usize) -> Self {
        Self { block, offset }
    }
}

/// Document selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Caret(Position),
    /// Anchor is where the selection started, focus where it ends (may precede the anchor)
    Range { anchor: Position, focus: Position },
    /// A whole block selected as an object, by index
    Object(usize),
}

impl Selection {
    pub fn caret(block: usize, offset: usize) -> Self {
        Selection::Caret(Position::new(block, offset))
    }

    pub fn range(anchor: Position, focus: Position) -> Self {
        Selection::Range { anchor, focus }
    }

    pub fn is_collapsed(&self) -> bool {
        match self {
            Selection::Caret(_) => true,
            Selection::Range { anchor, focus } => anchor == focus,
            Selection::Object(_) => false,
        }
    }

    pub fn is_backward(&self) -> bool {
        matches!(self, Selection::Range { anchor, focus } if focus < anchor)
    }

    /// Start and end positions in document order, `None` for object selections
    pub fn ordered(&self) -> Option<(Position, Position)> {
        match *self {
            Selection::Caret(position) => Some((position, position)),
            Selection::Range { anchor, focus } => Some((anchor.min(focus), anchor.max(focus))),
            Selection::Object(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caret_is_collapsed() {
        assert!(Selection::caret(0, 3).is_collapsed());
    }

    #[test]
    fn test_empty_range_is_collapsed() {
        let p = Position::new(1, 2);
        assert!(Selection::range(p, p).is_collapsed());
    }

    #[test]
    fn test_object_selection_is_not_collapsed() {
        assert!(!Selection::Object(2).is_collapsed());
        assert_eq!(Selection::Object(2).ordered(), None);
    }

    #[test]
    fn test_backward_range_orders_positions() {
        let anchor = Position::new(3, 1);
        let focus = Position::new(1, 4);
        let selection = Selection::range(anchor, focus);

        assert!(selection.is_backward());
        assert_eq!(selection.ordered(), Some((focus, anchor)));
    }

    #[test]
    fn test_positions_order_by_block_then_offset() {
        assert!(Position::new(0, 10) < Position::new(1, 0));
        assert!(Position::new(1, 0) < Position::new(1, 1));
    }
}
