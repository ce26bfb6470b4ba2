// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The select root: owner of the state and orchestrator of the parts.
//!
//! ## Overview
//!
//! [`SelectRoot`] owns the open flag, the highlight, and the [value source](crate::value).
//! It holds its parts (a trigger and a content list), hands each of them a fresh
//! [`SelectContext`] when rendering or delivering an event, and runs the
//! [outside-interaction detector](crate::outside) and [row hover](crate::hover) state.
//!
//! ## Authoring modes
//!
//! - [`SelectRoot::new`]: declarative. The root generates a trigger and list rows from
//!   [`SelectProps::options`]. List rows are not tab-focusable.
//! - [`SelectRoot::compose`]: composed. The caller supplies [`SelectPart`]s; the option list
//!   used for keyboard navigation is derived from the composed rows. Composed rows are
//!   focusable unless disabled.
//!
//! ## Event pass
//!
//! [`SelectRoot::dispatch`] handles one [`SelectEvent`] and then commits: hover is cleared if
//! the list is closed, and the outside-interaction listener is attached or detached to follow
//! the open flag. Because attachment happens at commit, the gesture that opened the list never
//! reaches the listener.
//!
//! ## Pointer input
//!
//! Pointer events carry world-space points. The host reports part bounds with
//! [`SelectRoot::set_layout`]; clicks and moves are resolved against them, and the trigger and
//! content bounds become the detector's tracked regions. Without a layout the detector tracks
//! no regions, so any pointer-down while open closes the list.
//!
//! ## Example
//!
//! ```
//! use understory_select::props::SelectProps;
//! use understory_select::root::{SelectEvent, SelectRoot};
//! use understory_select::types::{Key, KeyEvent, OptionRecord};
//! use understory_select::value::SelectValue;
//!
//! let mut select = SelectRoot::new(
//!     SelectProps::new()
//!         .options([OptionRecord::new("a", "Apple"), OptionRecord::new("b", "Banana")])
//!         .value(SelectValue::uncontrolled(None::<&str>)),
//! )
//! .unwrap();
//!
//! select.dispatch(SelectEvent::TriggerKey(KeyEvent::new(Key::ArrowDown)));
//! select.dispatch(SelectEvent::TriggerKey(KeyEvent::new(Key::ArrowDown)));
//! select.dispatch(SelectEvent::TriggerKey(KeyEvent::new(Key::Enter)));
//! assert_eq!(select.selected_value(), Some("b"));
//! assert_eq!(select.render().unwrap().text_content(), "Banana");
//! ```

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use understory_markup::Element;

use crate::content::SelectContent;
use crate::context::{SelectContext, SelectCore, SelectView, check_unique};
use crate::error::SelectError;
use crate::hover::{HoverEvent, RowHover};
use crate::layout::{LayoutHit, SelectLayout};
use crate::option::SelectOption;
use crate::outside::OutsideInteractionDetector;
use crate::parts::{SelectPart, content_of, trigger_of};
use crate::props::{SelectConfig, SelectProps};
use crate::trigger::SelectTrigger;
use crate::types::{EventResult, FocusTarget, Key, KeyEvent, OptionRecord};

/// Input delivered to a [`SelectRoot`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SelectEvent {
    /// The trigger was clicked.
    TriggerClick,
    /// The trigger received focus (e.g. via Tab).
    TriggerFocus,
    /// A key was pressed on the trigger.
    TriggerKey(KeyEvent),
    /// Row `index` was clicked.
    OptionClick(usize),
    /// A key was pressed on row `index`.
    OptionKey(usize, KeyEvent),
    /// The pointer entered row `index`.
    OptionPointerEnter(usize),
    /// Row `index` received focus.
    OptionFocus(usize),
    /// A key was pressed; routed to whichever part has focus.
    Key(KeyEvent),
    /// Focus left the select.
    Blur,
    /// Document-level pointer-down at a world-space point.
    PointerDown(Point),
    /// Pointer moved to a world-space point.
    PointerMove(Point),
    /// Click at a world-space point, resolved against the layout.
    Click(Point),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Authoring {
    Options,
    Composed,
}

/// Owner of a select's state.
#[derive(Debug)]
pub struct SelectRoot {
    core: SelectCore,
    authoring: Authoring,
    parts: Vec<SelectPart>,
    layout: Option<SelectLayout>,
    detector: OutsideInteractionDetector<Option<Rect>>,
    hover: RowHover,
}

fn generated_parts(options: &[OptionRecord]) -> Vec<SelectPart> {
    vec![
        SelectPart::Trigger(SelectTrigger::new()),
        SelectPart::Content(SelectContent::from_options(options)),
    ]
}

fn composed_records(parts: &[SelectPart]) -> Vec<OptionRecord> {
    content_of(parts)
        .map(SelectContent::records)
        .unwrap_or_default()
}

fn settle(result: Result<EventResult, SelectError>) -> EventResult {
    result.unwrap_or_else(|err| {
        tracing::warn!(%err, "select part rejected event");
        EventResult::Ignored
    })
}

impl SelectRoot {
    /// A select driven by `props.options`.
    pub fn new(props: SelectProps) -> Result<Self, SelectError> {
        let SelectProps {
            options,
            value,
            config,
        } = props;
        check_unique(&options)?;
        tracing::debug!(options = options.len(), "select root (options)");
        let parts = generated_parts(&options);
        Ok(Self::with_parts(
            SelectCore::new(value, options, config),
            Authoring::Options,
            parts,
        ))
    }

    /// A select assembled from `parts`. `props.options` is ignored.
    pub fn compose(
        props: SelectProps,
        parts: impl IntoIterator<Item = SelectPart>,
    ) -> Result<Self, SelectError> {
        let SelectProps {
            options,
            value,
            config,
        } = props;
        if !options.is_empty() {
            tracing::warn!(
                ignored = options.len(),
                "options are ignored when composing parts"
            );
        }
        let parts: Vec<SelectPart> = parts.into_iter().collect();
        let records = composed_records(&parts);
        check_unique(&records)?;
        tracing::debug!(options = records.len(), "select root (composed)");
        Ok(Self::with_parts(
            SelectCore::new(value, records, config),
            Authoring::Composed,
            parts,
        ))
    }

    fn with_parts(core: SelectCore, authoring: Authoring, parts: Vec<SelectPart>) -> Self {
        Self {
            core,
            authoring,
            parts,
            layout: None,
            detector: OutsideInteractionDetector::new(),
            hover: RowHover::new(),
        }
    }

    /// A context over this root, for driving parts directly.
    ///
    /// Changes made through it are picked up by the next [`dispatch`](Self::dispatch), which
    /// brings the outside-interaction listener in line with the open flag before handling.
    pub fn context(&mut self) -> SelectContext<'_> {
        SelectContext::new(&mut self.core)
    }

    /// Whether the list is open.
    pub fn is_open(&self) -> bool {
        self.core.open
    }

    /// Selected value.
    pub fn selected_value(&self) -> Option<&str> {
        self.core.value.selected()
    }

    /// Plain-text label of the selected option, if it is in the list.
    pub fn selected_label(&self) -> Option<String> {
        let selected = self.selected_value()?;
        self.core
            .options
            .iter()
            .find(|o| o.value == selected)
            .map(|o| o.label.text())
    }

    /// Highlighted row.
    pub fn highlighted_index(&self) -> Option<usize> {
        self.core.highlighted
    }

    /// Part holding keyboard focus.
    pub fn focus(&self) -> Option<FocusTarget> {
        self.core.focus
    }

    /// Current options.
    pub fn options(&self) -> &[OptionRecord] {
        &self.core.options
    }

    /// Configuration.
    pub fn config(&self) -> &SelectConfig {
        &self.core.config
    }

    /// Parts in render order.
    pub fn parts(&self) -> &[SelectPart] {
        &self.parts
    }

    /// Whether the outside-interaction listener is attached.
    pub fn listener_attached(&self) -> bool {
        self.detector.is_attached()
    }

    /// Last reported layout.
    pub fn layout(&self) -> Option<&SelectLayout> {
        self.layout.as_ref()
    }

    /// Feed a new controlled value.
    ///
    /// Returns `false` and changes nothing when the root is uncontrolled.
    pub fn set_value(&mut self, value: Option<String>) -> bool {
        let accepted = self.core.value.set_controlled(value);
        if !accepted {
            tracing::warn!("set_value on an uncontrolled select is ignored");
        }
        accepted
    }

    /// Replace the option list (declarative mode).
    ///
    /// A highlight that no longer points at a row is cleared. In composed mode the options come
    /// from the parts; use [`set_parts`](Self::set_parts) instead.
    pub fn set_options(
        &mut self,
        options: impl IntoIterator<Item = OptionRecord>,
    ) -> Result<(), SelectError> {
        if self.authoring == Authoring::Composed {
            tracing::warn!("set_options on a composed select is ignored");
            return Ok(());
        }
        let options: Vec<OptionRecord> = options.into_iter().collect();
        check_unique(&options)?;
        self.parts = generated_parts(&options);
        self.core.replace_options(options);
        self.commit();
        Ok(())
    }

    /// Replace the composed parts, switching to composed mode.
    pub fn set_parts(
        &mut self,
        parts: impl IntoIterator<Item = SelectPart>,
    ) -> Result<(), SelectError> {
        let parts: Vec<SelectPart> = parts.into_iter().collect();
        let records = composed_records(&parts);
        check_unique(&records)?;
        self.parts = parts;
        self.authoring = Authoring::Composed;
        self.core.replace_options(records);
        self.commit();
        Ok(())
    }

    /// Enable or disable the whole control. Disabling closes an open list.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.core.config.disabled = disabled;
        if disabled {
            SelectContext::new(&mut self.core).set_open(false);
        }
        self.commit();
    }

    /// Report the world-space bounds of the parts.
    pub fn set_layout(&mut self, layout: SelectLayout) {
        self.detector.set_regions(layout.regions());
        self.layout = Some(layout);
    }

    /// Render the whole select.
    pub fn render(&self) -> Result<Element, SelectError> {
        let cx = SelectView::new(&self.core);
        let mut root = Element::new("div")
            .attr("data-select", "")
            .attr("data-state", if cx.is_open() { "open" } else { "closed" });
        if cx.is_disabled() {
            root.set_attr("data-disabled", "");
        }
        for part in &self.parts {
            match part {
                SelectPart::Trigger(t) => root.push(t.render(Some(&cx))?),
                SelectPart::Content(c) => {
                    if let Some(list) = c.render(Some(&cx))? {
                        root.push(list);
                    }
                }
            }
        }
        Ok(root)
    }

    /// Handle one event, then commit.
    pub fn dispatch(&mut self, event: SelectEvent) -> EventResult {
        // Catch up with changes made through `context()` or setters since the last pass.
        self.commit();
        let result = self.handle(event);
        self.commit();
        result
    }

    fn handle(&mut self, event: SelectEvent) -> EventResult {
        match event {
            SelectEvent::TriggerClick => self.on_trigger(|t, cx| t.on_click(Some(cx))),
            SelectEvent::TriggerFocus => {
                if trigger_of(&self.parts).is_none() {
                    return EventResult::Ignored;
                }
                self.core.focus = Some(FocusTarget::Trigger);
                EventResult::Handled
            }
            SelectEvent::TriggerKey(key) => self.on_trigger(|t, cx| t.on_key(Some(cx), key)),
            SelectEvent::OptionClick(i) => self.on_row(i, |r, cx| r.on_click(Some(cx))),
            SelectEvent::OptionKey(i, key) => self.on_row(i, |r, cx| r.on_key(Some(cx), key)),
            SelectEvent::OptionPointerEnter(i) => {
                self.on_row(i, |r, cx| r.on_pointer_enter(Some(cx)))
            }
            SelectEvent::OptionFocus(i) => self.on_row(i, |r, cx| r.on_focus(Some(cx))),
            SelectEvent::Key(key) => match self.core.focus {
                Some(FocusTarget::Trigger) => self.on_trigger(|t, cx| t.on_key(Some(cx), key)),
                Some(FocusTarget::Option(i)) => {
                    let result = self.on_row(i, |r, cx| r.on_key(Some(cx), key));
                    // Navigation keys on a focused row drive the same cursor as the trigger.
                    if result.is_handled() || matches!(key.key, Key::Enter | Key::Space) {
                        result
                    } else {
                        self.on_trigger(|t, cx| t.on_key(Some(cx), key))
                    }
                }
                None => EventResult::Ignored,
            },
            SelectEvent::Blur => {
                self.core.focus = None;
                EventResult::Handled
            }
            SelectEvent::PointerDown(pt) => {
                let core = &mut self.core;
                let closed = self
                    .detector
                    .pointer_down(pt, || SelectContext::new(core).set_open(false));
                if closed {
                    EventResult::Handled
                } else {
                    EventResult::Ignored
                }
            }
            SelectEvent::PointerMove(pt) => self.on_pointer_move(pt),
            SelectEvent::Click(pt) => match self.layout.as_ref().and_then(|l| l.hit(pt)) {
                Some(LayoutHit::Trigger) => self.handle(SelectEvent::TriggerClick),
                Some(LayoutHit::Row(i)) if self.core.open => self.handle(SelectEvent::OptionClick(i)),
                Some(LayoutHit::Row(_) | LayoutHit::Content) | None => EventResult::Ignored,
            },
        }
    }

    fn on_pointer_move(&mut self, pt: Point) -> EventResult {
        if !self.core.open {
            return EventResult::Ignored;
        }
        let row = self.layout.as_ref().and_then(|l| l.row_at(pt));
        let mut result = EventResult::Ignored;
        for ev in self.hover.update(row) {
            if let HoverEvent::Enter(i) = ev
                && self
                    .on_row(i, |r, cx| r.on_pointer_enter(Some(cx)))
                    .is_handled()
            {
                result = EventResult::Handled;
            }
        }
        result
    }

    fn on_trigger(
        &mut self,
        f: impl FnOnce(&SelectTrigger, &mut SelectContext<'_>) -> Result<EventResult, SelectError>,
    ) -> EventResult {
        let Some(trigger) = trigger_of(&self.parts) else {
            return EventResult::Ignored;
        };
        let mut cx = SelectContext::new(&mut self.core);
        settle(f(trigger, &mut cx))
    }

    fn on_row(
        &mut self,
        index: usize,
        f: impl FnOnce(&SelectOption, &mut SelectContext<'_>) -> Result<EventResult, SelectError>,
    ) -> EventResult {
        if !self.core.open {
            return EventResult::Ignored;
        }
        let Some(row) = content_of(&self.parts).and_then(|c| c.row(index)) else {
            return EventResult::Ignored;
        };
        let mut cx = SelectContext::new(&mut self.core);
        settle(f(row, &mut cx))
    }

    fn commit(&mut self) {
        if !self.core.open {
            self.hover.clear();
        }
        self.detector.sync(self.core.open);
    }
}
