use std::rc::Rc;

use crate::commands::{Command, first_numbered_list_block, resolve_list_targets};
use crate::lists::SameListDefiningAttributes;
use crate::models::attributes::LIST_START;
use crate::models::{AttributeValue, Document, ModelError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartOptions {
    pub start_index: i64,
}

impl Default for StartOptions {
    fn default() -> Self {
        Self { start_index: 1 }
    }
}

/// Changes the `listStart` attribute of the selected numbered list items
pub struct ListStartCommand {
    list_editing: Rc<dyn SameListDefiningAttributes>,
    value: Option<i64>,
    is_enabled: bool,
}

impl ListStartCommand {
    pub const NAME: &'static str = "listStart";

    pub fn new(list_editing: Rc<dyn SameListDefiningAttributes>) -> Self {
        Self {
            list_editing,
            value: None,
            is_enabled: false,
        }
    }

    fn get_value(doc: &Document) -> Option<i64> {
        let block = first_numbered_list_block(doc)?;
        Some(
            block
                .attribute(LIST_START)
                .and_then(AttributeValue::as_int)
                .unwrap_or(1),
        )
    }
}

impl Command for ListStartCommand {
    type Value = i64;
    type Options = StartOptions;

    fn refresh(&mut self, doc: &Document) {
        self.value = Self::get_value(doc);
        self.is_enabled = self.value.is_some();
    }

    fn value(&self) -> Option<i64> {
        self.value
    }

    fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    fn execute(&self, doc: &mut Document, options: StartOptions) -> Result<(), ModelError> {
        let start_index = options.start_index.max(0);
        let targets = resolve_list_targets(doc, self.list_editing.as_ref());
        log::debug!(
            "Setting {LIST_START}={start_index} on {} block(s)",
            targets.len()
        );

        doc.change(|writer| {
            for block in &targets {
                writer.set_attribute(LIST_START, start_index, *block)?;
            }
            Ok(())
        })
    }
}
