// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Where the selected value lives: controlled by the caller or owned by the select.
//!
//! The choice is made once, at construction, by picking a [`SelectValue`] variant.
//!
//! - [`SelectValue::Controlled`]: the caller owns the value. A commit only reports the new value
//!   through `on_change`; the displayed selection changes when the caller feeds the value back
//!   with [`SelectRoot::set_value`](crate::root::SelectRoot::set_value).
//! - [`SelectValue::Uncontrolled`]: the select owns the value, seeded from a default. A commit
//!   stores the value and then reports it.
//!
//! There is no mirrored local copy in controlled mode, so the two can never disagree.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

/// Change callback, invoked once per committed selection.
pub type OnChange = Box<dyn FnMut(&str)>;

/// Ownership of the selected value.
pub enum SelectValue {
    /// Value supplied by the caller.
    Controlled {
        /// Current value as last supplied by the caller.
        value: Option<String>,
        /// Called with the value the user committed.
        on_change: Option<OnChange>,
    },
    /// Value owned by the select.
    Uncontrolled {
        /// Current value, initially the default.
        current: Option<String>,
        /// Called after the value is stored.
        on_change: Option<OnChange>,
    },
}

impl SelectValue {
    /// Controlled by the caller, starting from `value`.
    pub fn controlled<V: Into<String>>(value: Option<V>) -> Self {
        Self::Controlled {
            value: value.map(Into::into),
            on_change: None,
        }
    }

    /// Owned by the select, seeded from `default`.
    pub fn uncontrolled<V: Into<String>>(default: Option<V>) -> Self {
        Self::Uncontrolled {
            current: default.map(Into::into),
            on_change: None,
        }
    }

    /// Attach the change callback.
    #[must_use]
    pub fn on_change(mut self, f: impl FnMut(&str) + 'static) -> Self {
        let cb: OnChange = Box::new(f);
        match &mut self {
            Self::Controlled { on_change, .. } | Self::Uncontrolled { on_change, .. } => {
                *on_change = Some(cb);
            }
        }
        self
    }

    /// Whether the caller owns the value.
    pub fn is_controlled(&self) -> bool {
        matches!(self, Self::Controlled { .. })
    }

    /// The value to display as selected.
    pub fn selected(&self) -> Option<&str> {
        match self {
            Self::Controlled { value, .. } => value.as_deref(),
            Self::Uncontrolled { current, .. } => current.as_deref(),
        }
    }

    /// Record a user commit: store it when uncontrolled, then report it.
    pub(crate) fn commit(&mut self, committed: &str) {
        match self {
            Self::Controlled { on_change, .. } => {
                if let Some(cb) = on_change {
                    cb(committed);
                }
            }
            Self::Uncontrolled { current, on_change } => {
                *current = Some(committed.into());
                if let Some(cb) = on_change {
                    cb(committed);
                }
            }
        }
    }

    /// Replace the controlled value. Returns `false` (and changes nothing) when uncontrolled.
    pub(crate) fn set_controlled(&mut self, next: Option<String>) -> bool {
        match self {
            Self::Controlled { value, .. } => {
                *value = next;
                true
            }
            Self::Uncontrolled { .. } => false,
        }
    }
}

impl Default for SelectValue {
    fn default() -> Self {
        Self::Uncontrolled {
            current: None,
            on_change: None,
        }
    }
}

impl fmt::Debug for SelectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Controlled { value, on_change } => f
                .debug_struct("Controlled")
                .field("value", value)
                .field("on_change", &on_change.is_some())
                .finish(),
            Self::Uncontrolled { current, on_change } => f
                .debug_struct("Uncontrolled")
                .field("current", current)
                .field("on_change", &on_change.is_some())
                .finish(),
        }
    }
}
