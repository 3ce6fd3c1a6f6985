//! List property commands
//!
//! A command exposes observable state (`value`, `is_enabled`) recomputed by
//! `refresh` and an `execute` that performs its edit inside one
//! `Document::change` transaction.

pub mod reversed;
pub mod start;

pub use reversed::{ListReversedCommand, ReversedOptions};
pub use start::{ListStartCommand, StartOptions};

use crate::lists::{
    SameListDefiningAttributes, expand_list_blocks_to_complete_items, get_list_items,
    get_selected_block_object, is_numbered_list_item,
};
use crate::models::{AttributeValue, Block, BlockId, Document, ModelError};

pub trait Command {
    type Value: Clone + Into<AttributeValue>;
    type Options: Default;

    /// Recompute `value` and `is_enabled` from the document
    fn refresh(&mut self, doc: &Document);

    fn value(&self) -> Option<Self::Value>;

    fn is_enabled(&self) -> bool;

    /// Perform the edit. Does not check `is_enabled`; that is up to the caller.
    fn execute(&self, doc: &mut Document, options: Self::Options) -> Result<(), ModelError>;

    fn state(&self) -> CommandState {
        CommandState {
            value: self.value().map(Into::into),
            is_enabled: self.is_enabled(),
        }
    }
}

/// Type-erased command state for UI bindings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandState {
    pub value: Option<AttributeValue>,
    pub is_enabled: bool,
}

/// The first selected block, when it is a numbered list item
pub(crate) fn first_numbered_list_block(doc: &Document) -> Option<&Block> {
    doc.selected_blocks()
        .first()
        .copied()
        .filter(|block| is_numbered_list_item(block))
}

/// Blocks a numbered-list property command writes to
///
/// A collapsed selection or a selected block object targets the whole list
/// around it. Any other selection targets the complete items of the selected
/// numbered blocks, without their sub-lists.
pub(crate) fn resolve_list_targets(
    doc: &Document,
    list_editing: &dyn SameListDefiningAttributes,
) -> Vec<BlockId> {
    let selected_object = get_selected_block_object(doc);
    let candidates: Vec<usize> = doc
        .selected_block_indices()
        .into_iter()
        .filter(|&index| is_numbered_list_item(&doc.blocks()[index]))
        .collect();

    let indices = if doc.selection().is_collapsed() || selected_object.is_some() {
        match selected_object.or_else(|| candidates.first().copied()) {
            Some(context) => get_list_items(
                doc,
                context,
                &list_editing.same_list_defining_attributes(),
            ),
            None => Vec::new(),
        }
    } else {
        expand_list_blocks_to_complete_items(doc, &candidates, false)
    };

    indices
        .into_iter()
        .map(|index| doc.blocks()[index].id())
        .collect()
}
