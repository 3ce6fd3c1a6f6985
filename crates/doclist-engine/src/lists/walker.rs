use crate::lists::model::is_list_item_block;
use crate::models::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Forward,
    #[default]
    Backward,
}

impl Direction {
    fn step(self, index: usize, len: usize) -> Option<usize> {
        match self {
            Direction::Forward => (index + 1 < len).then_some(index + 1),
            Direction::Backward => index.checked_sub(1),
        }
    }
}

/// Indices of consecutive list item blocks starting at `start` (inclusive)
pub fn iterate_sibling_list_blocks(
    doc: &Document,
    start: Option<usize>,
    direction: Direction,
) -> impl Iterator<Item = usize> + '_ {
    let len = doc.len();
    std::iter::successors(start.filter(|&index| index < len), move |&index| {
        direction.step(index, len)
    })
    .take_while(move |&index| doc.block_at(index).is_some_and(is_list_item_block))
}

#[derive(Debug, Clone, Default)]
pub struct ListWalkerOptions {
    pub direction: Direction,
    /// Visit the start block itself
    pub include_self: bool,
    /// Same-indent blocks stop the walk when any of these attributes differ from the start block
    pub same_attributes: Vec<&'static str>,
    /// Visit blocks at the start block's indent
    pub same_indent: bool,
    /// Continue into shallower blocks instead of stopping
    pub lower_indent: bool,
    /// Visit deeper (nested) blocks instead of skipping them
    pub higher_indent: bool,
}

/// Walks the sibling list blocks around a start block, filtering by indent and attributes
pub struct ListWalker<'a> {
    doc: &'a Document,
    start: usize,
    options: ListWalkerOptions,
}

impl<'a> ListWalker<'a> {
    pub fn new(doc: &'a Document, start: usize, options: ListWalkerOptions) -> Self {
        Self {
            doc,
            start,
            options,
        }
    }

    /// Matching block indices in walk order (reverse document order when walking backward)
    pub fn walk(&self) -> Vec<usize> {
        let Some(start_block) = self.doc.block_at(self.start) else {
            return Vec::new();
        };
        let options = &self.options;
        let mut reference_indent = start_block.list_indent().unwrap_or(0);
        let mut nested = Vec::new();
        let mut visited = Vec::new();

        let first = if options.include_self {
            Some(self.start)
        } else {
            options.direction.step(self.start, self.doc.len())
        };

        for index in iterate_sibling_list_blocks(self.doc, first, options.direction) {
            let block = &self.doc.blocks()[index];
            let indent = block.list_indent().unwrap_or(0);

            if indent < reference_indent {
                // Leaving the list the walk started in
                if !options.lower_indent {
                    break;
                }
                reference_indent = indent;
            } else if indent > reference_indent {
                if !options.higher_indent {
                    continue;
                }
                // Walking backward we cannot tell yet whether these belong to the same item
                if options.direction == Direction::Backward {
                    nested.push(index);
                    continue;
                }
            } else {
                if !options.same_indent {
                    if options.higher_indent {
                        visited.append(&mut nested);
                        break;
                    }
                    continue;
                }
                if options
                    .same_attributes
                    .iter()
                    .any(|key| block.attribute(key) != start_block.attribute(key))
                {
                    break;
                }
            }

            // Another block of the same item follows, so the buffered blocks were nested in it
            visited.append(&mut nested);
            visited.push(index);
        }

        visited
    }
}
