// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composition parts and the [`Select`] namespace.
//!
//! In the composition authoring mode a caller assembles a select from parts instead of handing
//! over an option list:
//!
//! ```
//! use understory_markup::Element;
//! use understory_select::Select;
//! use understory_select::props::SelectProps;
//!
//! let select = Select::compose(
//!     SelectProps::new().placeholder("Pick a color"),
//!     [
//!         Select::trigger().into(),
//!         Select::content([
//!             Select::option("red", Element::new("span").attr("data-swatch", "red").text("Red")),
//!             Select::option("blue", "Blue").disabled(),
//!         ])
//!         .into(),
//!     ],
//! )
//! .unwrap();
//! assert_eq!(select.options().len(), 2);
//! assert!(select.render().unwrap().find_by_role("listbox").is_none());
//! ```

use alloc::string::String;

use crate::content::SelectContent;
use crate::error::SelectError;
use crate::option::SelectOption;
use crate::props::SelectProps;
use crate::root::SelectRoot;
use crate::trigger::SelectTrigger;
use crate::types::OptionLabel;

/// A top-level part of a composed select, rendered in the order given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectPart {
    /// The trigger.
    Trigger(SelectTrigger),
    /// The option list.
    Content(SelectContent),
}

impl From<SelectTrigger> for SelectPart {
    fn from(t: SelectTrigger) -> Self {
        Self::Trigger(t)
    }
}

impl From<SelectContent> for SelectPart {
    fn from(c: SelectContent) -> Self {
        Self::Content(c)
    }
}

/// The first trigger among `parts`.
pub(crate) fn trigger_of(parts: &[SelectPart]) -> Option<&SelectTrigger> {
    parts.iter().find_map(|p| match p {
        SelectPart::Trigger(t) => Some(t),
        SelectPart::Content(_) => None,
    })
}

/// The first content among `parts`.
pub(crate) fn content_of(parts: &[SelectPart]) -> Option<&SelectContent> {
    parts.iter().find_map(|p| match p {
        SelectPart::Content(c) => Some(c),
        SelectPart::Trigger(_) => None,
    })
}

/// Namespace for building selects and their parts.
#[derive(Copy, Clone, Debug)]
pub struct Select;

impl Select {
    /// A select driven by a declarative option list.
    pub fn root(props: SelectProps) -> Result<SelectRoot, SelectError> {
        SelectRoot::new(props)
    }

    /// A select assembled from parts.
    pub fn compose(
        props: SelectProps,
        parts: impl IntoIterator<Item = SelectPart>,
    ) -> Result<SelectRoot, SelectError> {
        SelectRoot::compose(props, parts)
    }

    /// A trigger part.
    pub fn trigger() -> SelectTrigger {
        SelectTrigger::new()
    }

    /// A content part holding composed rows.
    pub fn content(rows: impl IntoIterator<Item = SelectOption>) -> SelectContent {
        SelectContent::new(rows)
    }

    /// A composed row with custom content.
    pub fn option(value: impl Into<String>, content: impl Into<OptionLabel>) -> SelectOption {
        SelectOption::new(value, content)
    }
}
