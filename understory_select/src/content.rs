// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The option list container.
//!
//! While the list is closed, [`SelectContent::render`] produces nothing at all (`Ok(None)`),
//! not a hidden container: no stale rows or ARIA state exist while closed.
//! While open it produces a `role="listbox"` element holding the rows, or a single
//! placeholder row (without `role="option"`) when there are no options.

use alloc::vec::Vec;

use understory_markup::Element;

use crate::context::{SelectView, use_select};
use crate::error::SelectError;
use crate::option::SelectOption;
use crate::types::OptionRecord;

const NAME: &str = "SelectContent";

/// Visibility-gated container for option rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectContent {
    rows: Vec<SelectOption>,
}

impl SelectContent {
    /// Content holding composed rows, indexed in the given order.
    pub fn new(rows: impl IntoIterator<Item = SelectOption>) -> Self {
        Self {
            rows: rows
                .into_iter()
                .enumerate()
                .map(|(i, row)| row.placed_at(i))
                .collect(),
        }
    }

    /// Content generated from a declarative option list.
    pub(crate) fn from_options(options: &[OptionRecord]) -> Self {
        Self {
            rows: options
                .iter()
                .cloned()
                .enumerate()
                .map(|(i, record)| SelectOption::list_row(i, record))
                .collect(),
        }
    }

    /// Rows in order.
    pub fn rows(&self) -> &[SelectOption] {
        &self.rows
    }

    /// Row at `index`.
    pub fn row(&self, index: usize) -> Option<&SelectOption> {
        self.rows.get(index)
    }

    /// The option data of every row, in order.
    pub fn records(&self) -> Vec<OptionRecord> {
        self.rows.iter().map(|r| r.record().clone()).collect()
    }

    /// Render the list, or nothing while closed.
    pub fn render(&self, cx: Option<&SelectView<'_>>) -> Result<Option<Element>, SelectError> {
        let cx = use_select(cx, NAME)?;
        if !cx.is_open() {
            return Ok(None);
        }
        let mut list = Element::new("ul")
            .attr("role", "listbox")
            .attr("data-state", "open")
            .attr("data-size", cx.config().size.as_str());
        if self.rows.is_empty() {
            list.push(
                Element::new("li")
                    .attr("data-empty", "")
                    .text(cx.config().empty_text.as_str()),
            );
            return Ok(Some(list));
        }
        for row in &self.rows {
            list.push(row.render(Some(cx))?);
        }
        Ok(Some(list))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::SelectCore;
    use crate::props::SelectConfig;
    use crate::value::SelectValue;
    use alloc::vec;

    fn core(options: Vec<OptionRecord>) -> SelectCore {
        SelectCore::new(SelectValue::default(), options, SelectConfig::default())
    }

    #[test]
    fn closed_renders_nothing() {
        let core = core(vec![OptionRecord::new("a", "A")]);
        let cx = SelectView::new(&core);
        let content = SelectContent::from_options(cx.options());
        assert_eq!(content.render(Some(&cx)), Ok(None));
    }

    #[test]
    fn open_renders_listbox_with_rows() {
        let mut core = core(vec![OptionRecord::new("a", "A"), OptionRecord::new("b", "B")]);
        core.open = true;
        let cx = SelectView::new(&core);
        let content = SelectContent::from_options(cx.options());
        let list = content.render(Some(&cx)).unwrap().unwrap();
        assert_eq!(list.get_attr("role"), Some("listbox"));
        let rows = list.find_all_by_role("option");
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.get_attr("tabindex") == Some("-1")));
    }

    #[test]
    fn empty_list_shows_one_placeholder_row() {
        let mut core = core(vec![]);
        core.open = true;
        let cx = SelectView::new(&core);
        let list = SelectContent::default().render(Some(&cx)).unwrap().unwrap();
        assert!(list.find_all_by_role("option").is_empty());
        assert_eq!(list.child_elements().count(), 1);
        assert_eq!(list.text_content(), "No options available");
    }

    #[test]
    fn composed_rows_are_indexed_in_order() {
        let content = SelectContent::new([
            SelectOption::new("x", "X"),
            SelectOption::new("y", "Y").disabled(),
        ]);
        assert_eq!(content.row(1).map(SelectOption::index), Some(1));
        let records = content.records();
        assert_eq!(records[1].value, "y");
        assert!(records[1].disabled);
    }

    #[test]
    fn content_outside_a_root_fails_fast() {
        assert!(matches!(
            SelectContent::default().render(None),
            Err(SelectError::MissingContext {
                component: "SelectContent",
                ..
            })
        ));
    }
}
