use std::rc::Rc;

use thiserror::Error;

use crate::commands::{
    Command, CommandState, ListReversedCommand, ListStartCommand, ReversedOptions, StartOptions,
};
use crate::lists::{ListEditing, ListPropertiesOptions};
use crate::models::{Document, ModelError, Selection};

/// Edits a UI can request from the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCmd {
    SetListReversed { reversed: bool },
    SetListStart { start_index: i64 },
}

impl EditorCmd {
    pub fn command_name(&self) -> &'static str {
        match self {
            EditorCmd::SetListReversed { .. } => ListReversedCommand::NAME,
            EditorCmd::SetListStart { .. } => ListStartCommand::NAME,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum EditorError {
    #[error("Command '{0}' is disabled")]
    CommandDisabled(&'static str),
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Hosts a document together with its list property commands
///
/// Every state change that goes through the editor (selection, command,
/// undo, redo) refreshes the commands afterwards, so `command_state` always
/// describes the current selection.
pub struct Editor {
    document: Document,
    list_editing: Rc<ListEditing>,
    reversed: Option<ListReversedCommand>,
    start: Option<ListStartCommand>,
}

impl Editor {
    pub fn new(document: Document, options: ListPropertiesOptions) -> Self {
        let list_editing = Rc::new(ListEditing::new(options));
        let reversed = options
            .reversed
            .then(|| ListReversedCommand::new(list_editing.clone()));
        let start = options
            .start_index
            .then(|| ListStartCommand::new(list_editing.clone()));

        let mut editor = Self {
            document,
            list_editing,
            reversed,
            start,
        };
        editor.refresh_commands();
        editor
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn list_editing(&self) -> &ListEditing {
        &self.list_editing
    }

    pub fn set_selection(&mut self, selection: Selection) -> Result<(), EditorError> {
        self.document.set_selection(selection)?;
        self.refresh_commands();
        Ok(())
    }

    /// Execute a command if it is registered and enabled
    pub fn execute(&mut self, cmd: EditorCmd) -> Result<(), EditorError> {
        let name = cmd.command_name();
        let enabled = self.command_state(name).is_some_and(|state| state.is_enabled);
        if !enabled {
            log::debug!("Refusing to execute disabled command '{name}'");
            return Err(EditorError::CommandDisabled(name));
        }

        log::debug!("Executing {cmd:?}");
        let result = match cmd {
            EditorCmd::SetListReversed { reversed } => match &self.reversed {
                Some(command) => command.execute(&mut self.document, ReversedOptions { reversed }),
                None => Ok(()),
            },
            EditorCmd::SetListStart { start_index } => match &self.start {
                Some(command) => command.execute(&mut self.document, StartOptions { start_index }),
                None => Ok(()),
            },
        };

        self.refresh_commands();
        result.map_err(EditorError::from)
    }

    pub fn undo(&mut self) -> bool {
        let undone = self.document.undo();
        self.refresh_commands();
        undone
    }

    pub fn redo(&mut self) -> bool {
        let redone = self.document.redo();
        self.refresh_commands();
        redone
    }

    /// Observable state of a registered command, `None` if no such command exists
    pub fn command_state(&self, name: &str) -> Option<CommandState> {
        match name {
            ListReversedCommand::NAME => self.reversed.as_ref().map(Command::state),
            ListStartCommand::NAME => self.start.as_ref().map(Command::state),
            _ => None,
        }
    }

    fn refresh_commands(&mut self) {
        if let Some(command) = self.reversed.as_mut() {
            command.refresh(&self.document);
        }
        if let Some(command) = self.start.as_mut() {
            command.refresh(&self.document);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attributes::{LIST_REVERSED, LIST_START};
    use crate::models::{AttributeValue, Block, ListType};
    use pretty_assertions::assert_eq;

    fn document() -> Document {
        Document::new(vec![
            Block::paragraph("Intro"),
            Block::list_item("one", "a", 0, ListType::Numbered),
            Block::list_item("two", "b", 0, ListType::Numbered),
        ])
    }

    #[test]
    fn test_commands_refresh_on_selection_change() {
        let mut editor = Editor::new(document(), ListPropertiesOptions::default());
        assert_eq!(
            editor.command_state(ListReversedCommand::NAME),
            Some(CommandState {
                value: None,
                is_enabled: false
            })
        );

        editor.set_selection(Selection::caret(1, 0)).unwrap();
        assert_eq!(
            editor.command_state(ListReversedCommand::NAME),
            Some(CommandState {
                value: Some(AttributeValue::Bool(false)),
                is_enabled: true
            })
        );
        assert_eq!(
            editor.command_state(ListStartCommand::NAME),
            Some(CommandState {
                value: Some(AttributeValue::Int(1)),
                is_enabled: true
            })
        );
    }

    #[test]
    fn test_disabled_command_is_refused() {
        let mut editor = Editor::new(document(), ListPropertiesOptions::default());

        let result = editor.execute(EditorCmd::SetListReversed { reversed: true });

        assert_eq!(
            result,
            Err(EditorError::CommandDisabled(ListReversedCommand::NAME))
        );
        assert!(!editor.document().can_undo());
    }

    #[test]
    fn test_unregistered_command_is_refused() {
        let mut editor = Editor::new(
            document(),
            ListPropertiesOptions {
                reversed: false,
                start_index: true,
            },
        );
        editor.set_selection(Selection::caret(1, 0)).unwrap();

        assert_eq!(editor.command_state(ListReversedCommand::NAME), None);
        assert_eq!(
            editor.execute(EditorCmd::SetListReversed { reversed: true }),
            Err(EditorError::CommandDisabled(ListReversedCommand::NAME))
        );
        assert!(editor.execute(EditorCmd::SetListStart { start_index: 3 }).is_ok());
    }

    #[test]
    fn test_execute_then_undo_redo_refreshes_value() {
        let mut editor = Editor::new(document(), ListPropertiesOptions::default());
        editor.set_selection(Selection::caret(2, 1)).unwrap();

        editor
            .execute(EditorCmd::SetListReversed { reversed: true })
            .unwrap();
        let reversed = |editor: &Editor| {
            editor
                .command_state(ListReversedCommand::NAME)
                .and_then(|state| state.value)
        };
        assert_eq!(reversed(&editor), Some(AttributeValue::Bool(true)));
        assert_eq!(
            editor.document().blocks()[1].attribute(LIST_REVERSED),
            Some(&AttributeValue::Bool(true))
        );

        assert!(editor.undo());
        assert_eq!(reversed(&editor), Some(AttributeValue::Bool(false)));

        assert!(editor.redo());
        assert_eq!(reversed(&editor), Some(AttributeValue::Bool(true)));
    }

    #[test]
    fn test_start_command_through_editor() {
        let mut editor = Editor::new(document(), ListPropertiesOptions::default());
        editor.set_selection(Selection::caret(1, 0)).unwrap();

        editor
            .execute(EditorCmd::SetListStart { start_index: 4 })
            .unwrap();

        let doc = editor.into_document();
        assert_eq!(
            doc.blocks()[2].attribute(LIST_START),
            Some(&AttributeValue::Int(4))
        );
    }

    #[test]
    fn test_invalid_selection_is_model_error() {
        let mut editor = Editor::new(document(), ListPropertiesOptions::default());

        assert_eq!(
            editor.set_selection(Selection::Object(9)),
            Err(EditorError::Model(ModelError::InvalidObject(9)))
        );
    }
}
