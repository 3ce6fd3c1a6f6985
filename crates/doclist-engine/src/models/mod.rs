pub mod attributes;
pub mod block;
pub mod document;
pub mod selection;
pub mod writer;

pub use attributes::{AttributeValue, ListType};
pub use block::{Block, BlockId, BlockKind};
pub use document::{Document, ModelError};
pub use selection::{Position, Selection};
pub use writer::{AttributeOperation, Batch, Writer};
