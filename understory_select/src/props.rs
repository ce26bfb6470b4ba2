// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration for a select.

use alloc::string::String;
use alloc::vec::Vec;

use crate::types::{OptionRecord, SelectSize, SelectVariant};
use crate::value::SelectValue;

/// Placeholder shown in the trigger when nothing is selected.
pub const DEFAULT_PLACEHOLDER: &str = "Select an option";

/// Row text shown when the list opens with no options.
pub const DEFAULT_EMPTY_TEXT: &str = "No options available";

/// Immutable configuration shared with every part through the context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectConfig {
    /// Trigger text when nothing is selected.
    pub placeholder: String,
    /// Text of the placeholder row for an empty option list.
    pub empty_text: String,
    /// Disables every interaction.
    pub disabled: bool,
    /// Visual variant.
    pub variant: SelectVariant,
    /// Size.
    pub size: SelectSize,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.into(),
            empty_text: DEFAULT_EMPTY_TEXT.into(),
            disabled: false,
            variant: SelectVariant::default(),
            size: SelectSize::default(),
        }
    }
}

/// Props for [`SelectRoot`](crate::root::SelectRoot).
///
/// ```
/// use understory_select::props::SelectProps;
/// use understory_select::types::{OptionRecord, SelectSize};
/// use understory_select::value::SelectValue;
///
/// let props = SelectProps::new()
///     .options([OptionRecord::new("apple", "Apple"), OptionRecord::new("pear", "Pear")])
///     .value(SelectValue::uncontrolled(Some("pear")))
///     .placeholder("Pick a fruit")
///     .size(SelectSize::Large);
/// assert_eq!(props.options.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct SelectProps {
    /// Options for the declarative authoring mode. Ignored when composing parts.
    pub options: Vec<OptionRecord>,
    /// Ownership of the selected value.
    pub value: SelectValue,
    /// Shared configuration.
    pub config: SelectConfig,
}

impl SelectProps {
    /// Default props: no options, uncontrolled with no value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the option list.
    #[must_use]
    pub fn options(mut self, options: impl IntoIterator<Item = OptionRecord>) -> Self {
        self.options = options.into_iter().collect();
        self
    }

    /// Set the value source.
    #[must_use]
    pub fn value(mut self, value: SelectValue) -> Self {
        self.value = value;
        self
    }

    /// Set the placeholder.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.config.placeholder = text.into();
        self
    }

    /// Set the empty-list row text.
    #[must_use]
    pub fn empty_text(mut self, text: impl Into<String>) -> Self {
        self.config.empty_text = text.into();
        self
    }

    /// Disable the whole control.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    /// Set the variant.
    #[must_use]
    pub fn variant(mut self, variant: SelectVariant) -> Self {
        self.config.variant = variant;
        self
    }

    /// Set the size.
    #[must_use]
    pub fn size(mut self, size: SelectSize) -> Self {
        self.config.size = size;
        self
    }
}
