use thiserror::Error;

use crate::models::block::{Block, BlockId};
use crate::models::selection::{Position, Selection};
use crate::models::writer::{Batch, Writer};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("Block not found: {0}")]
    BlockNotFound(BlockId),
    #[error("Selection position out of bounds: block {block}, offset {offset}")]
    InvalidPosition { block: usize, offset: usize },
    #[error("Selected object index out of bounds: {0}")]
    InvalidObject(usize),
}

/// Flat block document with a selection and attribute-level undo history
///
/// All mutation goes through [`Document::change`], which gives the caller a
/// [`Writer`] and turns everything written through it into one undo step.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    blocks: Vec<Block>,
    selection: Selection,
    /// Incremented on every committed change, undo and redo
    version: u64,
    undo_stack: Vec<Batch>,
    redo_stack: Vec<Batch>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Document {
    /// Create a document with the caret at the start of the first block
    pub fn new(blocks: Vec<Block>) -> Self {
        Self {
            blocks,
            selection: Selection::caret(0, 0),
            version: 0,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|block| block.id() == id)
    }

    pub fn block_at(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn index_of(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|block| block.id() == id)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Replace the selection after checking it points at existing blocks
    pub fn set_selection(&mut self, selection: Selection) -> Result<(), ModelError> {
        match selection {
            Selection::Caret(position) => self.check_position(position)?,
            Selection::Range { anchor, focus } => {
                self.check_position(anchor)?;
                self.check_position(focus)?;
            }
            Selection::Object(index) => {
                if index >= self.blocks.len() {
                    return Err(ModelError::InvalidObject(index));
                }
            }
        }
        self.selection = selection;
        Ok(())
    }

    fn check_position(&self, position: Position) -> Result<(), ModelError> {
        match self.blocks.get(position.block) {
            Some(block) if position.offset <= block.text_len() => Ok(()),
            _ => Err(ModelError::InvalidPosition {
                block: position.block,
                offset: position.offset,
            }),
        }
    }

    /// Indices of the blocks touched by the selection, in document order
    ///
    /// A non-collapsed range that ends at offset 0 of a later block does not
    /// select that block.
    pub fn selected_block_indices(&self) -> Vec<usize> {
        if self.blocks.is_empty() {
            return Vec::new();
        }

        let Some((start, end)) = self.selection.ordered() else {
            return match self.selection {
                Selection::Object(index) if index < self.blocks.len() => vec![index],
                _ => Vec::new(),
            };
        };

        let last = self.blocks.len() - 1;
        let mut end_block = end.block.min(last);
        if end.offset == 0 && end.block > start.block {
            end_block -= 1;
        }

        (start.block.min(last)..=end_block).collect()
    }

    pub fn selected_blocks(&self) -> Vec<&Block> {
        self.selected_block_indices()
            .into_iter()
            .map(|index| &self.blocks[index])
            .collect()
    }

    /// The block selected as a whole, if the selection is an object selection
    pub fn selected_element(&self) -> Option<&Block> {
        match self.selection {
            Selection::Object(index) => self.blocks.get(index),
            _ => None,
        }
    }

    /// Run a scoped mutation transaction
    ///
    /// Writes made through the writer are committed as one undo step when the
    /// closure returns `Ok`. On `Err` every write is rolled back before the error
    /// is returned. Transactions that change nothing leave history and version
    /// untouched.
    pub fn change<R>(
        &mut self,
        f: impl FnOnce(&mut Writer<'_>) -> Result<R, ModelError>,
    ) -> Result<R, ModelError> {
        let mut writer = Writer::new(&mut self.blocks);
        let result = f(&mut writer);
        let batch = writer.finish();

        match result {
            Ok(value) => {
                if !batch.is_empty() {
                    log::debug!(
                        "Committed batch with {} operation(s)",
                        batch.operations().len()
                    );
                    self.undo_stack.push(batch);
                    self.redo_stack.clear();
                    self.version += 1;
                }
                Ok(value)
            }
            Err(err) => {
                log::warn!(
                    "Rolling back {} operation(s): {err}",
                    batch.operations().len()
                );
                batch.revert(&mut self.blocks);
                Err(err)
            }
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Revert the most recent batch. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(batch) = self.undo_stack.pop() else {
            return false;
        };
        batch.revert(&mut self.blocks);
        self.redo_stack.push(batch);
        self.version += 1;
        true
    }

    /// Re-apply the most recently undone batch
    pub fn redo(&mut self) -> bool {
        let Some(batch) = self.redo_stack.pop() else {
            return false;
        };
        batch.apply(&mut self.blocks);
        self.undo_stack.push(batch);
        self.version += 1;
        true
    }
}
