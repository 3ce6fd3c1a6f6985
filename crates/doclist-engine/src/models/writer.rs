use crate::models::attributes::AttributeValue;
use crate::models::block::{Block, BlockId};
use crate::models::document::ModelError;

/// A single recorded attribute change, invertible by swapping `old` and `new`
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeOperation {
    pub block: BlockId,
    pub key: String,
    pub old: Option<AttributeValue>,
    pub new: Option<AttributeValue>,
}

/// Operations recorded by one `Document::change` call; one undo step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Batch {
    operations: Vec<AttributeOperation>,
}

impl Batch {
    pub fn operations(&self) -> &[AttributeOperation] {
        &self.operations
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub(crate) fn apply(&self, blocks: &mut [Block]) {
        for op in &self.operations {
            if let Some(block) = blocks.iter_mut().find(|b| b.id() == op.block) {
                block.replace_attribute(&op.key, op.new.clone());
            }
        }
    }

    pub(crate) fn revert(&self, blocks: &mut [Block]) {
        for op in self.operations.iter().rev() {
            if let Some(block) = blocks.iter_mut().find(|b| b.id() == op.block) {
                block.replace_attribute(&op.key, op.old.clone());
            }
        }
    }
}

/// Mutation handle passed to the closure of `Document::change`
///
/// Writes land on the blocks immediately and are recorded so the document can
/// either commit them as a single batch or roll them back.
pub struct Writer<'a> {
    blocks: &'a mut [Block],
    batch: Batch,
}

impl<'a> Writer<'a> {
    pub(crate) fn new(blocks: &'a mut [Block]) -> Self {
        Self {
            blocks,
            batch: Batch::default(),
        }
    }

    pub fn set_attribute(
        &mut self,
        key: &str,
        value: impl Into<AttributeValue>,
        block: BlockId,
    ) -> Result<(), ModelError> {
        self.write(key, Some(value.into()), block)
    }

    pub fn remove_attribute(&mut self, key: &str, block: BlockId) -> Result<(), ModelError> {
        self.write(key, None, block)
    }

    /// Read access to the blocks as they are inside the transaction
    pub fn blocks(&self) -> &[Block] {
        self.blocks
    }

    fn write(
        &mut self,
        key: &str,
        value: Option<AttributeValue>,
        block: BlockId,
    ) -> Result<(), ModelError> {
        let target = self
            .blocks
            .iter_mut()
            .find(|b| b.id() == block)
            .ok_or(ModelError::BlockNotFound(block))?;

        // No-op writes are not recorded
        if target.attribute(key) == value.as_ref() {
            return Ok(());
        }

        let old = target.replace_attribute(key, value.clone());
        self.batch.operations.push(AttributeOperation {
            block,
            key: key.to_string(),
            old,
            new: value,
        });
        Ok(())
    }

    pub(crate) fn finish(self) -> Batch {
        self.batch
    }
}
