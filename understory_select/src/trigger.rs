// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The always-visible trigger button.
//!
//! Shows the selected option's label (or the placeholder), toggles the list on click, and is the
//! entry point for keyboard navigation, which it delegates to [`keyboard::transition`].
//!
//! The accessibility contract: `aria-haspopup="listbox"` and `aria-expanded` mirroring the open
//! state are always present.

use alloc::string::String;

use understory_markup::Element;

use crate::context::{SelectContext, SelectView, use_select, use_select_mut};
use crate::error::SelectError;
use crate::keyboard;
use crate::types::{EventResult, FocusTarget, KeyEvent};

const NAME: &str = "SelectTrigger";

/// The trigger part.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectTrigger {
    placeholder: Option<String>,
}

impl SelectTrigger {
    /// A trigger using the root's placeholder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the root's placeholder for this trigger.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    /// Render the trigger.
    pub fn render(&self, cx: Option<&SelectView<'_>>) -> Result<Element, SelectError> {
        let cx = use_select(cx, NAME)?;
        let config = cx.config();
        let mut button = Element::new("button")
            .attr("type", "button")
            .attr("aria-haspopup", "listbox")
            .bool_attr("aria-expanded", cx.is_open())
            .attr("data-state", if cx.is_open() { "open" } else { "closed" })
            .attr("data-variant", config.variant.as_str())
            .attr("data-size", config.size.as_str());
        if cx.is_disabled() {
            button.set_attr("disabled", "");
        }
        if cx.focus() == Some(FocusTarget::Trigger) {
            button.set_attr("data-focused", "");
        }

        let value = match cx.selected_option() {
            Some(option) => Element::new("span")
                .attr("data-value", option.value.as_str())
                .child(option.label.to_node()),
            None => {
                let placeholder = self.placeholder.as_deref().unwrap_or(&config.placeholder);
                Element::new("span")
                    .attr("data-placeholder", "")
                    .text(placeholder)
            }
        };
        Ok(button.child(value))
    }

    /// Click: toggle the list. Ignored while disabled.
    pub fn on_click(&self, cx: Option<&mut SelectContext<'_>>) -> Result<EventResult, SelectError> {
        let cx = use_select_mut(cx, NAME)?;
        if cx.is_disabled() {
            tracing::trace!("click on disabled trigger ignored");
            return Ok(EventResult::Ignored);
        }
        cx.set_focus(Some(FocusTarget::Trigger));
        let open = !cx.is_open();
        cx.set_open(open);
        Ok(EventResult::Handled)
    }

    /// Key press while the trigger has focus.
    ///
    /// Chords with Control, Alt or Meta are left to the host.
    pub fn on_key(
        &self,
        cx: Option<&mut SelectContext<'_>>,
        key: KeyEvent,
    ) -> Result<EventResult, SelectError> {
        let cx = use_select_mut(cx, NAME)?;
        if key.is_chord() {
            return Ok(EventResult::Ignored);
        }
        let state = cx.view().nav_state();
        let Some(t) = keyboard::transition(state, key.key, cx.options(), cx.is_disabled()) else {
            return Ok(EventResult::Ignored);
        };
        tracing::trace!(key = ?key.key, next = ?t.next, effect = ?t.effect, "keyboard transition");
        cx.apply(t);
        Ok(EventResult::Handled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::SelectCore;
    use crate::props::SelectConfig;
    use crate::types::{Key, Modifiers, OptionRecord};
    use crate::value::SelectValue;
    use alloc::vec;

    fn core(value: Option<&str>, disabled: bool) -> SelectCore {
        SelectCore::new(
            SelectValue::uncontrolled(value),
            vec![OptionRecord::new("a", "Apple"), OptionRecord::new("b", "Banana")],
            SelectConfig {
                disabled,
                ..SelectConfig::default()
            },
        )
    }

    #[test]
    fn shows_placeholder_without_selection() {
        let mut core = core(None, false);
        let cx = SelectContext::new(&mut core);
        let el = SelectTrigger::new().render(Some(&cx.view())).unwrap();
        assert_eq!(el.text_content(), "Select an option");
        assert!(el.find(|e| e.has_attr("data-placeholder")).is_some());
        let el = SelectTrigger::new()
            .placeholder("Fruit…")
            .render(Some(&cx.view()))
            .unwrap();
        assert_eq!(el.text_content(), "Fruit…");
    }

    #[test]
    fn shows_selected_label() {
        let mut core = core(Some("b"), false);
        let cx = SelectContext::new(&mut core);
        let el = SelectTrigger::new().render(Some(&cx.view())).unwrap();
        assert_eq!(el.text_content(), "Banana");
    }

    #[test]
    fn unknown_value_falls_back_to_placeholder() {
        let mut core = core(Some("zzz"), false);
        let cx = SelectContext::new(&mut core);
        let el = SelectTrigger::new().render(Some(&cx.view())).unwrap();
        assert_eq!(el.text_content(), "Select an option");
    }

    #[test]
    fn aria_expanded_mirrors_open() {
        let mut core = core(None, false);
        let mut cx = SelectContext::new(&mut core);
        let trigger = SelectTrigger::new();
        let el = trigger.render(Some(&cx.view())).unwrap();
        assert_eq!(el.get_attr("aria-haspopup"), Some("listbox"));
        assert_eq!(el.get_attr("aria-expanded"), Some("false"));
        trigger.on_click(Some(&mut cx)).unwrap();
        let el = trigger.render(Some(&cx.view())).unwrap();
        assert_eq!(el.get_attr("aria-expanded"), Some("true"));
    }

    #[test]
    fn click_toggles() {
        let mut core = core(None, false);
        let mut cx = SelectContext::new(&mut core);
        let trigger = SelectTrigger::new();
        assert_eq!(trigger.on_click(Some(&mut cx)), Ok(EventResult::Handled));
        assert!(cx.is_open());
        assert_eq!(cx.highlighted_index(), None);
        assert_eq!(cx.focus(), Some(FocusTarget::Trigger));
        trigger.on_click(Some(&mut cx)).unwrap();
        assert!(!cx.is_open());
    }

    #[test]
    fn disabled_trigger_ignores_click_and_keys() {
        let mut core = core(None, true);
        let mut cx = SelectContext::new(&mut core);
        let trigger = SelectTrigger::new();
        assert_eq!(trigger.on_click(Some(&mut cx)), Ok(EventResult::Ignored));
        for key in [Key::Enter, Key::Space, Key::ArrowDown, Key::Escape] {
            assert_eq!(
                trigger.on_key(Some(&mut cx), KeyEvent::new(key)),
                Ok(EventResult::Ignored)
            );
        }
        assert!(!cx.is_open());
        let el = trigger.render(Some(&cx.view())).unwrap();
        assert!(el.has_attr("disabled"));
    }

    #[test]
    fn keys_drive_navigation_and_commit() {
        let mut core = core(None, false);
        let mut cx = SelectContext::new(&mut core);
        let trigger = SelectTrigger::new();
        trigger
            .on_key(Some(&mut cx), KeyEvent::new(Key::ArrowDown))
            .unwrap();
        assert_eq!(cx.highlighted_index(), Some(0));
        trigger.on_key(Some(&mut cx), KeyEvent::new(Key::End)).unwrap();
        assert_eq!(cx.highlighted_index(), Some(1));
        trigger
            .on_key(Some(&mut cx), KeyEvent::new(Key::Enter))
            .unwrap();
        assert!(!cx.is_open());
        assert_eq!(cx.selected_value(), Some("b"));
    }

    #[test]
    fn chords_are_left_to_the_host() {
        let mut core = core(None, false);
        let mut cx = SelectContext::new(&mut core);
        let key = KeyEvent::new(Key::ArrowDown).with_modifiers(Modifiers::CONTROL);
        assert_eq!(
            SelectTrigger::new().on_key(Some(&mut cx), key),
            Ok(EventResult::Ignored)
        );
        assert!(!cx.is_open());
    }

    #[test]
    fn escape_refocuses_trigger() {
        let mut core = core(None, false);
        core.open = true;
        core.focus = None;
        let mut cx = SelectContext::new(&mut core);
        SelectTrigger::new()
            .on_key(Some(&mut cx), KeyEvent::new(Key::Escape))
            .unwrap();
        assert!(!cx.is_open());
        assert_eq!(cx.focus(), Some(FocusTarget::Trigger));
    }
}
