//! List utilities over the flat block model
//!
//! Lists are not nested nodes. Every list block is a top-level block carrying
//! `listItemId`, `listIndent` and `listType`; items, lists and sub-lists are
//! recovered by walking neighbouring blocks and comparing those attributes.

pub mod editing;
pub mod model;
pub mod walker;

pub use editing::{ListEditing, ListPropertiesOptions, SameListDefiningAttributes};
pub use model::{
    expand_list_blocks_to_complete_items, get_all_list_item_blocks, get_list_item_blocks,
    get_list_items, get_selected_block_object, is_list_item_block, is_numbered_list_item,
};
pub use walker::{Direction, ListWalker, ListWalkerOptions, iterate_sibling_list_blocks};
