use crate::models::attributes::{LIST_REVERSED, LIST_START, LIST_TYPE};

/// Which list property features are turned on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListPropertiesOptions {
    pub reversed: bool,
    pub start_index: bool,
}

impl Default for ListPropertiesOptions {
    fn default() -> Self {
        Self {
            reversed: true,
            start_index: true,
        }
    }
}

/// Reports the attributes that must match for adjacent items to form one list
///
/// Commands receive this capability at construction instead of looking up the
/// list editing feature at run time.
pub trait SameListDefiningAttributes {
    fn same_list_defining_attributes(&self) -> Vec<&'static str>;
}

/// List editing feature: owns the set of list-scoped attributes
#[derive(Debug, Clone, Default)]
pub struct ListEditing {
    options: ListPropertiesOptions,
}

impl ListEditing {
    pub fn new(options: ListPropertiesOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ListPropertiesOptions {
        self.options
    }
}

impl SameListDefiningAttributes for ListEditing {
    fn same_list_defining_attributes(&self) -> Vec<&'static str> {
        let mut attributes = vec![LIST_TYPE];
        if self.options.reversed {
            attributes.push(LIST_REVERSED);
        }
        if self.options.start_index {
            attributes.push(LIST_START);
        }
        attributes
    }
}
