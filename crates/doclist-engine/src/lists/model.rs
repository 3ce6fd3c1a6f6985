use std::collections::BTreeSet;

use crate::lists::walker::{Direction, ListWalker, ListWalkerOptions};
use crate::models::attributes::{LIST_ITEM_ID, ListType};
use crate::models::{Block, Document};

pub fn is_list_item_block(block: &Block) -> bool {
    block.has_attribute(LIST_ITEM_ID)
}

pub fn is_numbered_list_item(block: &Block) -> bool {
    is_list_item_block(block) && block.list_type() == Some(ListType::Numbered)
}

/// All blocks of the list `index` belongs to, in document order
///
/// The list is the run of blocks at the same indent whose `same_attributes`
/// match the given block. Nested lists are skipped but do not end the run.
pub fn get_list_items(
    doc: &Document,
    index: usize,
    same_attributes: &[&'static str],
) -> Vec<usize> {
    let backward = ListWalker::new(
        doc,
        index,
        ListWalkerOptions {
            direction: Direction::Backward,
            same_indent: true,
            same_attributes: same_attributes.to_vec(),
            ..Default::default()
        },
    )
    .walk();
    let forward = ListWalker::new(
        doc,
        index,
        ListWalkerOptions {
            direction: Direction::Forward,
            include_self: true,
            same_indent: true,
            same_attributes: same_attributes.to_vec(),
            ..Default::default()
        },
    )
    .walk();

    backward.into_iter().rev().chain(forward).collect()
}

/// Blocks of the list item `index` belongs to, on one side of it, in document order
///
/// Walking forward includes `index` itself. With `with_nested` the blocks of
/// sub-lists inside the item are included too.
pub fn get_list_item_blocks(
    doc: &Document,
    index: usize,
    direction: Direction,
    with_nested: bool,
) -> Vec<usize> {
    let is_forward = direction == Direction::Forward;
    let items = ListWalker::new(
        doc,
        index,
        ListWalkerOptions {
            direction,
            include_self: is_forward,
            same_indent: true,
            same_attributes: vec![LIST_ITEM_ID],
            higher_indent: with_nested,
            ..Default::default()
        },
    )
    .walk();

    if is_forward {
        items
    } else {
        items.into_iter().rev().collect()
    }
}

/// Every block of the list item `index` belongs to, in document order
pub fn get_all_list_item_blocks(doc: &Document, index: usize, with_nested: bool) -> Vec<usize> {
    let mut blocks = get_list_item_blocks(doc, index, Direction::Backward, with_nested);
    blocks.extend(get_list_item_blocks(
        doc,
        index,
        Direction::Forward,
        with_nested,
    ));
    blocks
}

/// Expand blocks to the complete list items they belong to
///
/// The result is deduplicated and sorted in document order.
pub fn expand_list_blocks_to_complete_items(
    doc: &Document,
    indices: &[usize],
    with_nested: bool,
) -> Vec<usize> {
    let all: BTreeSet<usize> = indices
        .iter()
        .flat_map(|&index| get_all_list_item_blocks(doc, index, with_nested))
        .collect();
    all.into_iter().collect()
}

/// Index of the selected element when it is an object block
pub fn get_selected_block_object(doc: &Document) -> Option<usize> {
    let element = doc.selected_element()?;
    if element.is_object() {
        doc.index_of(element.id())
    } else {
        None
    }
}
