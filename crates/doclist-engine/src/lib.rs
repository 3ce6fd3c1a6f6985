pub mod commands;
pub mod editing;
pub mod io;
pub mod lists;
pub mod models;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use commands::{Command, CommandState, ListReversedCommand, ListStartCommand};
pub use editing::{Editor, EditorCmd, EditorError};
pub use io::IoError;
pub use lists::{ListEditing, ListPropertiesOptions, SameListDefiningAttributes};
pub use models::*;
