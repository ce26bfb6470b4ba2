// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the select: option records, keys, focus targets, and configuration enums.
//!
//! ## Overview
//!
//! These types are shared by the [keyboard controller](crate::keyboard), the parts
//! ([trigger](crate::trigger), [content](crate::content), [option rows](crate::option)) and
//! the [root](crate::root). They carry no behavior of their own beyond small conversions.

use alloc::string::String;

use understory_markup::{Element, Node};

/// Label shown for an option, both in its row and (when selected) in the trigger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OptionLabel {
    /// Plain text.
    Text(String),
    /// Arbitrary rendered content, e.g. an icon next to a name.
    Custom(Element),
}

impl OptionLabel {
    /// The label as a markup node, cloned for placement in a rendered tree.
    pub fn to_node(&self) -> Node {
        match self {
            Self::Text(t) => Node::Text(t.clone()),
            Self::Custom(el) => Node::Element(el.clone()),
        }
    }

    /// The plain text of this label.
    ///
    /// For [`Custom`](Self::Custom) labels this is the element's text content.
    pub fn text(&self) -> String {
        match self {
            Self::Text(t) => t.clone(),
            Self::Custom(el) => el.text_content(),
        }
    }
}

impl From<&str> for OptionLabel {
    fn from(text: &str) -> Self {
        Self::Text(text.into())
    }
}

impl From<String> for OptionLabel {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Element> for OptionLabel {
    fn from(el: Element) -> Self {
        Self::Custom(el)
    }
}

/// One selectable option: value, label, and disabled flag.
///
/// Values must be unique within one option set; [`SelectRoot`](crate::root::SelectRoot)
/// rejects duplicates with [`SelectError::DuplicateValue`](crate::error::SelectError::DuplicateValue).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionRecord {
    /// Value committed on selection and reported through `on_change`.
    pub value: String,
    /// Display label.
    pub label: OptionLabel,
    /// Disabled options can be highlighted by the keyboard cursor but never selected.
    pub disabled: bool,
}

impl OptionRecord {
    /// Create an enabled option.
    pub fn new(value: impl Into<String>, label: impl Into<OptionLabel>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Mark this option as disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Set the disabled flag explicitly.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Keys the select reacts to.
///
/// Anything else arrives as [`Key::Character`] or [`Key::Other`] and is ignored.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Key {
    /// Enter / Return.
    Enter,
    /// Space bar.
    Space,
    /// Escape.
    Escape,
    /// Arrow up.
    ArrowUp,
    /// Arrow down.
    ArrowDown,
    /// Home.
    Home,
    /// End.
    End,
    /// Tab.
    Tab,
    /// A printable character other than space.
    Character(char),
    /// Any other key.
    Other,
}

impl Key {
    /// Map a printable character to a key, folding `' '` into [`Key::Space`].
    pub fn from_char(ch: char) -> Self {
        if ch == ' ' {
            Self::Space
        } else {
            Self::Character(ch)
        }
    }
}

bitflags::bitflags! {
    /// Keyboard modifiers held during a key event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT   = 0b0000_0001;
        /// Control.
        const CONTROL = 0b0000_0010;
        /// Alt / Option.
        const ALT     = 0b0000_0100;
        /// Meta / Command / Super.
        const META    = 0b0000_1000;
    }
}

/// A key press with its modifiers.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct KeyEvent {
    /// Pressed key.
    pub key: Key,
    /// Held modifiers.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// A key press without modifiers.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::empty(),
        }
    }

    /// Attach modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Whether a command-style modifier (Control, Alt or Meta) is held.
    ///
    /// Such chords belong to the host (shortcuts) and are never consumed by the select.
    pub fn is_chord(&self) -> bool {
        self.modifiers
            .intersects(Modifiers::CONTROL | Modifiers::ALT | Modifiers::META)
    }
}

impl From<Key> for KeyEvent {
    fn from(key: Key) -> Self {
        Self::new(key)
    }
}

/// Result of delivering an event to a part or to the root.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EventResult {
    /// The event was consumed; the host should not process it further.
    Handled,
    /// The event was not relevant (or was a blocked interaction).
    Ignored,
}

impl EventResult {
    /// Whether the event was consumed.
    pub fn is_handled(self) -> bool {
        matches!(self, Self::Handled)
    }
}

/// Element that holds keyboard focus within a select.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FocusTarget {
    /// The trigger button.
    Trigger,
    /// An option row, by index (composed rows only; list rows are not focusable).
    Option(usize),
}

/// Visual variant, forwarded to the host as `data-variant`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum SelectVariant {
    /// Bordered trigger.
    #[default]
    Outline,
    /// Filled background.
    Filled,
    /// No border or background until hovered.
    Ghost,
}

impl SelectVariant {
    /// Attribute value for this variant.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Outline => "outline",
            Self::Filled => "filled",
            Self::Ghost => "ghost",
        }
    }
}

/// Size, forwarded to the host as `data-size`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum SelectSize {
    /// Compact.
    Small,
    /// Default.
    #[default]
    Medium,
    /// Roomy.
    Large,
}

impl SelectSize {
    /// Attribute value for this size.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "sm",
            Self::Medium => "md",
            Self::Large => "lg",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_char_folds_into_space_key() {
        assert_eq!(Key::from_char(' '), Key::Space);
        assert_eq!(Key::from_char('a'), Key::Character('a'));
    }

    #[test]
    fn chords_are_detected() {
        assert!(!KeyEvent::new(Key::Enter).is_chord());
        assert!(
            !KeyEvent::new(Key::ArrowDown)
                .with_modifiers(Modifiers::SHIFT)
                .is_chord()
        );
        assert!(
            KeyEvent::new(Key::ArrowDown)
                .with_modifiers(Modifiers::SHIFT | Modifiers::ALT)
                .is_chord()
        );
        assert!(
            KeyEvent::new(Key::Enter)
                .with_modifiers(Modifiers::META)
                .is_chord()
        );
    }

    #[test]
    fn custom_label_text_is_content() {
        let label = OptionLabel::from(
            Element::new("span")
                .child(Element::new("i").attr("aria-hidden", "true"))
                .text("Cherry"),
        );
        assert_eq!(label.text(), "Cherry");
        assert!(matches!(label.to_node(), Node::Element(_)));
        assert_eq!(OptionLabel::from("Apple").text(), "Apple");
    }

    #[test]
    fn option_builders() {
        let o = OptionRecord::new("b", "B").disabled();
        assert!(o.disabled);
        assert!(!o.with_disabled(false).disabled);
    }
}
