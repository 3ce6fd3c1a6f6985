use std::rc::Rc;

use crate::commands::{Command, first_numbered_list_block, resolve_list_targets};
use crate::lists::SameListDefiningAttributes;
use crate::models::attributes::LIST_REVERSED;
use crate::models::{AttributeValue, Document, ModelError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReversedOptions {
    /// Whether the list should count down
    pub reversed: bool,
}

/// Changes the `listReversed` attribute of the selected numbered list items
pub struct ListReversedCommand {
    list_editing: Rc<dyn SameListDefiningAttributes>,
    value: Option<bool>,
    is_enabled: bool,
}

impl ListReversedCommand {
    pub const NAME: &'static str = "listReversed";

    pub fn new(list_editing: Rc<dyn SameListDefiningAttributes>) -> Self {
        Self {
            list_editing,
            value: None,
            is_enabled: false,
        }
    }

    fn get_value(doc: &Document) -> Option<bool> {
        let block = first_numbered_list_block(doc)?;
        // Numbered items without the attribute count up
        Some(
            block
                .attribute(LIST_REVERSED)
                .and_then(AttributeValue::as_bool)
                .unwrap_or(false),
        )
    }
}

impl Command for ListReversedCommand {
    type Value = bool;
    type Options = ReversedOptions;

    fn refresh(&mut self, doc: &Document) {
        self.value = Self::get_value(doc);
        self.is_enabled = self.value.is_some();
    }

    fn value(&self) -> Option<bool> {
        self.value
    }

    fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    fn execute(&self, doc: &mut Document, options: ReversedOptions) -> Result<(), ModelError> {
        let targets = resolve_list_targets(doc, self.list_editing.as_ref());
        log::debug!(
            "Setting {LIST_REVERSED}={} on {} block(s)",
            options.reversed,
            targets.len()
        );

        doc.change(|writer| {
            for block in &targets {
                writer.set_attribute(LIST_REVERSED, options.reversed, *block)?;
            }
            Ok(())
        })
    }
}
