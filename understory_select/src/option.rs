// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Option rows.
//!
//! ## Variants
//!
//! A [`SelectOption`] renders one `role="option"` row. It comes in two variants that differ only
//! in focusability:
//!
//! - [`RowVariant::List`]: rows generated from a declarative option list. They are never
//!   tab-focusable (`tabindex="-1"`); keyboard use goes through the trigger and the visual
//!   highlight.
//! - [`RowVariant::Composed`]: rows supplied as composed parts with custom content. They are
//!   focusable (`tabindex="0"`) unless disabled.
//!
//! ## Behavior
//!
//! - Click, Enter or Space commits the row's value unless the row (or the control) is disabled.
//! - Pointer-enter highlights the row unless it is disabled.

use understory_markup::Element;

use crate::context::{SelectContext, SelectView, use_select, use_select_mut};
use crate::error::SelectError;
use crate::types::{EventResult, FocusTarget, Key, KeyEvent, OptionLabel, OptionRecord};

const NAME: &str = "SelectOption";

/// Authoring mode a row came from.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum RowVariant {
    /// Generated from a declarative option list.
    #[default]
    List,
    /// Supplied as a composed part.
    Composed,
}

/// A single selectable row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    record: OptionRecord,
    index: usize,
    variant: RowVariant,
}

impl SelectOption {
    /// A composed row with custom content.
    ///
    /// Its index is assigned when it is placed in a [`SelectContent`](crate::content::SelectContent).
    pub fn new(value: impl Into<alloc::string::String>, content: impl Into<OptionLabel>) -> Self {
        Self {
            record: OptionRecord::new(value, content),
            index: 0,
            variant: RowVariant::Composed,
        }
    }

    /// Mark the row as disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.record.disabled = true;
        self
    }

    pub(crate) fn list_row(index: usize, record: OptionRecord) -> Self {
        Self {
            record,
            index,
            variant: RowVariant::List,
        }
    }

    pub(crate) fn placed_at(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    /// The row's data.
    pub fn record(&self) -> &OptionRecord {
        &self.record
    }

    /// Position in the option list.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Authoring variant.
    pub fn variant(&self) -> RowVariant {
        self.variant
    }

    /// `tabindex` for this row.
    pub fn tab_index(&self) -> i32 {
        match self.variant {
            RowVariant::List => -1,
            RowVariant::Composed if self.record.disabled => -1,
            RowVariant::Composed => 0,
        }
    }

    fn blocked(&self, cx: &SelectContext<'_>) -> bool {
        self.record.disabled || cx.is_disabled()
    }

    /// Render the row.
    pub fn render(&self, cx: Option<&SelectView<'_>>) -> Result<Element, SelectError> {
        let cx = use_select(cx, NAME)?;
        let selected = cx.is_selected(&self.record.value);
        let highlighted = cx.is_highlighted(self.index);
        let mut row = Element::new("li")
            .attr("role", "option")
            .attr("data-value", self.record.value.as_str())
            .bool_attr("aria-selected", selected)
            .bool_attr("aria-disabled", self.record.disabled)
            .attr("tabindex", alloc::format!("{}", self.tab_index()))
            .attr("data-state", if selected { "checked" } else { "unchecked" });
        if highlighted {
            row.set_attr("data-highlighted", "");
        }
        if self.record.disabled {
            row.set_attr("data-disabled", "");
        }
        Ok(row.child(self.record.label.to_node()))
    }

    /// Click on the row: commit unless disabled.
    pub fn on_click(&self, cx: Option<&mut SelectContext<'_>>) -> Result<EventResult, SelectError> {
        let cx = use_select_mut(cx, NAME)?;
        if self.blocked(cx) {
            tracing::trace!(value = %self.record.value, "click on disabled option ignored");
            return Ok(EventResult::Ignored);
        }
        Ok(if cx.handle_select(&self.record.value) {
            EventResult::Handled
        } else {
            EventResult::Ignored
        })
    }

    /// Key press while the row has focus.
    ///
    /// Enter/Space commit unless disabled; Escape closes the list and returns focus to the
    /// trigger. Other keys are ignored here and left to the trigger's navigation.
    pub fn on_key(
        &self,
        cx: Option<&mut SelectContext<'_>>,
        key: KeyEvent,
    ) -> Result<EventResult, SelectError> {
        let cx = use_select_mut(cx, NAME)?;
        if key.is_chord() {
            return Ok(EventResult::Ignored);
        }
        match key.key {
            Key::Enter | Key::Space => self.on_click(Some(cx)),
            Key::Escape => {
                cx.set_open(false);
                cx.set_focus(Some(FocusTarget::Trigger));
                Ok(EventResult::Handled)
            }
            _ => Ok(EventResult::Ignored),
        }
    }

    /// Pointer entered the row: highlight it unless disabled.
    pub fn on_pointer_enter(
        &self,
        cx: Option<&mut SelectContext<'_>>,
    ) -> Result<EventResult, SelectError> {
        let cx = use_select_mut(cx, NAME)?;
        if self.blocked(cx) {
            return Ok(EventResult::Ignored);
        }
        cx.set_highlighted_index(Some(self.index));
        Ok(EventResult::Handled)
    }

    /// The row received focus. Only focusable rows take it.
    pub fn on_focus(&self, cx: Option<&mut SelectContext<'_>>) -> Result<EventResult, SelectError> {
        let cx = use_select_mut(cx, NAME)?;
        if self.tab_index() < 0 {
            return Ok(EventResult::Ignored);
        }
        cx.set_focus(Some(FocusTarget::Option(self.index)));
        Ok(EventResult::Handled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::SelectCore;
    use crate::props::SelectConfig;
    use crate::value::SelectValue;
    use alloc::vec;

    fn core() -> SelectCore {
        let mut core = SelectCore::new(
            SelectValue::uncontrolled(Some("a")),
            vec![
                OptionRecord::new("a", "A"),
                OptionRecord::new("b", "B").disabled(),
                OptionRecord::new("c", "C"),
            ],
            SelectConfig::default(),
        );
        core.open = true;
        core
    }

    #[test]
    fn list_rows_are_never_tab_focusable() {
        let row = SelectOption::list_row(0, OptionRecord::new("a", "A"));
        assert_eq!(row.tab_index(), -1);
        let row = SelectOption::list_row(1, OptionRecord::new("b", "B").disabled());
        assert_eq!(row.tab_index(), -1);
    }

    #[test]
    fn composed_rows_focusable_unless_disabled() {
        assert_eq!(SelectOption::new("a", "A").tab_index(), 0);
        assert_eq!(SelectOption::new("b", "B").disabled().tab_index(), -1);
    }

    #[test]
    fn render_exposes_aria_state() {
        let mut core = core();
        core.highlighted = Some(1);
        let cx = SelectContext::new(&mut core);
        let a = SelectOption::list_row(0, cx.options()[0].clone())
            .render(Some(&cx.view()))
            .unwrap();
        assert_eq!(a.get_attr("role"), Some("option"));
        assert_eq!(a.get_attr("aria-selected"), Some("true"));
        assert_eq!(a.get_attr("aria-disabled"), Some("false"));
        assert!(!a.has_attr("data-highlighted"));
        let b = SelectOption::list_row(1, cx.options()[1].clone())
            .render(Some(&cx.view()))
            .unwrap();
        assert_eq!(b.get_attr("aria-selected"), Some("false"));
        assert_eq!(b.get_attr("aria-disabled"), Some("true"));
        assert!(b.has_attr("data-highlighted"));
        assert_eq!(b.text_content(), "B");
    }

    #[test]
    fn click_on_disabled_row_changes_nothing() {
        let mut core = core();
        let mut cx = SelectContext::new(&mut core);
        let row = SelectOption::list_row(1, cx.options()[1].clone());
        assert_eq!(row.on_click(Some(&mut cx)), Ok(EventResult::Ignored));
        assert!(cx.is_open());
        assert_eq!(cx.selected_value(), Some("a"));
    }

    #[test]
    fn enter_on_composed_row_commits() {
        let mut core = core();
        let mut cx = SelectContext::new(&mut core);
        let row = SelectOption::new("c", "C").placed_at(2);
        assert_eq!(
            row.on_key(Some(&mut cx), KeyEvent::new(Key::Enter)),
            Ok(EventResult::Handled)
        );
        assert_eq!(cx.selected_value(), Some("c"));
        assert!(!cx.is_open());
    }

    #[test]
    fn other_keys_on_row_are_ignored() {
        let mut core = core();
        let mut cx = SelectContext::new(&mut core);
        let row = SelectOption::new("c", "C").placed_at(2);
        assert_eq!(
            row.on_key(Some(&mut cx), KeyEvent::new(Key::ArrowDown)),
            Ok(EventResult::Ignored)
        );
        assert!(cx.is_open());
    }

    #[test]
    fn escape_on_row_closes_and_refocuses_trigger() {
        let mut core = core();
        core.focus = Some(FocusTarget::Option(2));
        let mut cx = SelectContext::new(&mut core);
        let row = SelectOption::new("c", "C").placed_at(2);
        assert_eq!(
            row.on_key(Some(&mut cx), KeyEvent::new(Key::Escape)),
            Ok(EventResult::Handled)
        );
        assert!(!cx.is_open());
        assert_eq!(cx.focus(), Some(FocusTarget::Trigger));
        assert_eq!(cx.selected_value(), Some("a"));
    }

    #[test]
    fn hover_highlights_enabled_rows_only() {
        let mut core = core();
        let mut cx = SelectContext::new(&mut core);
        let b = SelectOption::list_row(1, cx.options()[1].clone());
        assert_eq!(b.on_pointer_enter(Some(&mut cx)), Ok(EventResult::Ignored));
        assert_eq!(cx.highlighted_index(), None);
        let c = SelectOption::list_row(2, cx.options()[2].clone());
        assert_eq!(c.on_pointer_enter(Some(&mut cx)), Ok(EventResult::Handled));
        assert_eq!(cx.highlighted_index(), Some(2));
    }

    #[test]
    fn focus_only_lands_on_focusable_rows() {
        let mut core = core();
        let mut cx = SelectContext::new(&mut core);
        let list = SelectOption::list_row(0, cx.options()[0].clone());
        assert_eq!(list.on_focus(Some(&mut cx)), Ok(EventResult::Ignored));
        let composed = SelectOption::new("c", "C").placed_at(2);
        assert_eq!(composed.on_focus(Some(&mut cx)), Ok(EventResult::Handled));
        assert_eq!(cx.focus(), Some(FocusTarget::Option(2)));
    }

    #[test]
    fn rows_outside_a_root_fail_fast() {
        let row = SelectOption::new("a", "A");
        assert!(matches!(
            row.render(None),
            Err(SelectError::MissingContext {
                component: "SelectOption",
                ..
            })
        ));
        assert!(row.on_click(None).is_err());
    }
}
