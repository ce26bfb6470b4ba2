// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The select context: views over root-owned state, handed to every part.
//!
//! ## Overview
//!
//! [`SelectRoot`](crate::root::SelectRoot) exclusively owns the select state. Parts never touch
//! it directly; they receive a view by parameter:
//!
//! - [`SelectView`] for rendering: [`is_open`](SelectView::is_open),
//!   [`selected_option`](SelectView::selected_option),
//!   [`highlighted_index`](SelectView::highlighted_index), [`options`](SelectView::options),
//!   [`config`](SelectView::config).
//! - [`SelectContext`] for event handlers, adding [`set_open`](SelectContext::set_open),
//!   [`set_highlighted_index`](SelectContext::set_highlighted_index) and
//!   [`handle_select`](SelectContext::handle_select).
//!
//! The mutators keep the state invariants: closing clears the highlight, a highlight is always a
//! valid index into the current options, and disabled or unknown values are never committed.
//!
//! A view is created fresh for each render or event pass and borrows the root for its
//! duration. Parts accept `Option<&SelectView>` or `Option<&mut SelectContext>`; `None` means the
//! part was used outside a root, which fails with [`SelectError::MissingContext`].

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::SelectError;
use crate::keyboard::{Effect, NavState, Transition};
use crate::props::SelectConfig;
use crate::types::{FocusTarget, OptionRecord};
use crate::value::SelectValue;

const PROVIDER: &str = "SelectRoot";

/// State owned by the root. Only reachable through [`SelectContext`].
#[derive(Debug)]
pub(crate) struct SelectCore {
    pub(crate) open: bool,
    pub(crate) highlighted: Option<usize>,
    pub(crate) value: SelectValue,
    pub(crate) options: Vec<OptionRecord>,
    pub(crate) config: SelectConfig,
    pub(crate) focus: Option<FocusTarget>,
}

impl SelectCore {
    pub(crate) fn new(value: SelectValue, options: Vec<OptionRecord>, config: SelectConfig) -> Self {
        Self {
            open: false,
            highlighted: None,
            value,
            options,
            config,
            focus: None,
        }
    }

    /// Replace the options, dropping a highlight that no longer points at a row.
    pub(crate) fn replace_options(&mut self, options: Vec<OptionRecord>) {
        self.options = options;
        if self.highlighted.is_some_and(|i| i >= self.options.len()) {
            self.highlighted = None;
        }
        if let Some(FocusTarget::Option(i)) = self.focus
            && i >= self.options.len()
        {
            self.focus = None;
        }
    }
}

/// Reject duplicate option values.
pub(crate) fn check_unique(options: &[OptionRecord]) -> Result<(), SelectError> {
    for (i, o) in options.iter().enumerate() {
        if options[..i].iter().any(|p| p.value == o.value) {
            return Err(SelectError::DuplicateValue(o.value.clone()));
        }
    }
    Ok(())
}

/// Resolve an optional read view for a part's render, failing when it is absent.
pub fn use_select<'c, 'a>(
    cx: Option<&'c SelectView<'a>>,
    component: &'static str,
) -> Result<&'c SelectView<'a>, SelectError> {
    cx.ok_or(SelectError::MissingContext {
        component,
        provider: PROVIDER,
    })
}

/// Mutable flavor of [`use_select`], for event handlers.
pub fn use_select_mut<'c, 'a>(
    cx: Option<&'c mut SelectContext<'a>>,
    component: &'static str,
) -> Result<&'c mut SelectContext<'a>, SelectError> {
    cx.ok_or(SelectError::MissingContext {
        component,
        provider: PROVIDER,
    })
}

/// Read-only view over the root's state, used by render paths.
#[derive(Copy, Clone, Debug)]
pub struct SelectView<'a> {
    core: &'a SelectCore,
}

impl<'a> SelectView<'a> {
    pub(crate) fn new(core: &'a SelectCore) -> Self {
        Self { core }
    }

    /// Whether the list is open.
    pub fn is_open(&self) -> bool {
        self.core.open
    }

    /// Currently selected value, if any.
    pub fn selected_value(&self) -> Option<&'a str> {
        self.core.value.selected()
    }

    /// The option whose value is selected, if it is in the current list.
    pub fn selected_option(&self) -> Option<&'a OptionRecord> {
        let selected = self.selected_value()?;
        self.core.options.iter().find(|o| o.value == selected)
    }

    /// Whether `value` is the selected value.
    pub fn is_selected(&self, value: &str) -> bool {
        self.selected_value() == Some(value)
    }

    /// Keyboard-highlighted index, if any.
    pub fn highlighted_index(&self) -> Option<usize> {
        self.core.highlighted
    }

    /// Whether row `index` is highlighted.
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.core.highlighted == Some(index)
    }

    /// Current options.
    pub fn options(&self) -> &'a [OptionRecord] {
        &self.core.options
    }

    /// Shared configuration.
    pub fn config(&self) -> &'a SelectConfig {
        &self.core.config
    }

    /// Whether the whole control is disabled.
    pub fn is_disabled(&self) -> bool {
        self.core.config.disabled
    }

    /// Element holding keyboard focus, if any.
    pub fn focus(&self) -> Option<FocusTarget> {
        self.core.focus
    }

    /// Open/highlight state as seen by the keyboard controller.
    pub fn nav_state(&self) -> NavState {
        NavState::from_parts(self.core.open, self.core.highlighted)
    }
}

/// Read/write view over the root's state and configuration, used by event handlers.
///
/// Reads go through [`view`](Self::view); the shorthands below cover the common ones.
#[derive(Debug)]
pub struct SelectContext<'a> {
    core: &'a mut SelectCore,
}

impl<'a> SelectContext<'a> {
    pub(crate) fn new(core: &'a mut SelectCore) -> Self {
        Self { core }
    }

    /// Read-only view of the same state.
    pub fn view(&self) -> SelectView<'_> {
        SelectView::new(self.core)
    }

    /// Whether the list is open.
    pub fn is_open(&self) -> bool {
        self.core.open
    }

    /// Currently selected value, if any.
    pub fn selected_value(&self) -> Option<&str> {
        self.core.value.selected()
    }

    /// Keyboard-highlighted index, if any.
    pub fn highlighted_index(&self) -> Option<usize> {
        self.core.highlighted
    }

    /// Current options.
    pub fn options(&self) -> &[OptionRecord] {
        &self.core.options
    }

    /// Whether the whole control is disabled.
    pub fn is_disabled(&self) -> bool {
        self.core.config.disabled
    }

    /// Element holding keyboard focus, if any.
    pub fn focus(&self) -> Option<FocusTarget> {
        self.core.focus
    }

    /// Open or close the list. Closing clears the highlight.
    pub fn set_open(&mut self, open: bool) {
        if self.core.open != open {
            tracing::debug!(open, "select visibility");
            self.core.open = open;
        }
        if !open {
            self.core.highlighted = None;
        }
    }

    /// Move the highlight.
    ///
    /// Out-of-range indices and any highlight while closed are dropped to `None`.
    pub fn set_highlighted_index(&mut self, index: Option<usize>) {
        let valid = index.filter(|&i| self.core.open && i < self.core.options.len());
        if valid != index {
            tracing::trace!(?index, "highlight out of range, cleared");
        }
        self.core.highlighted = valid;
    }

    /// Commit `value` as the selection.
    ///
    /// Unknown and disabled values are ignored and return `false`. Otherwise the value is stored
    /// (when uncontrolled), the list closes, the highlight clears, focus returns to the trigger,
    /// and `on_change` runs once.
    pub fn handle_select(&mut self, value: &str) -> bool {
        let Some(option) = self.core.options.iter().find(|o| o.value == value) else {
            tracing::trace!(value, "select of unknown value ignored");
            return false;
        };
        if option.disabled {
            tracing::trace!(value, "select of disabled option ignored");
            return false;
        }
        tracing::debug!(value, controlled = self.core.value.is_controlled(), "select commit");
        self.set_open(false);
        self.core.focus = Some(FocusTarget::Trigger);
        self.core.value.commit(value);
        true
    }

    /// Move focus to `target`.
    pub fn set_focus(&mut self, target: Option<FocusTarget>) {
        self.core.focus = target;
    }

    /// Apply a keyboard [`Transition`].
    pub fn apply(&mut self, t: Transition) {
        if let Effect::Commit(i) = t.effect {
            let value: Option<String> = self.core.options.get(i).map(|o| o.value.clone());
            if let Some(value) = value {
                self.handle_select(&value);
            }
            return;
        }
        match t.next {
            NavState::Closed => self.set_open(false),
            NavState::Open { highlighted } => {
                self.set_open(true);
                self.set_highlighted_index(highlighted);
            }
        }
        if t.effect == Effect::RefocusTrigger {
            self.core.focus = Some(FocusTarget::Trigger);
        }
    }
}
