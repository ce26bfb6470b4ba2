// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Field data and the context handed to parts.
//!
//! Element ids are derived from the field id: the control gets the id itself, the label
//! `{id}-label`, the description `{id}-description`, and the error message `{id}-message`.

use alloc::format;
use alloc::string::String;

use understory_markup::Element;

use crate::error::FieldError;
use crate::parts::{FieldControl, FieldDescription, FieldLabel, FieldMessage};

/// Data for one form field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldRoot {
    id: String,
    label: Option<String>,
    description: Option<String>,
    error: Option<String>,
    required: bool,
    disabled: bool,
}

impl FieldRoot {
    /// A field whose control has element id `id`.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Label text.
    #[must_use]
    pub fn label(mut self, text: impl Into<String>) -> Self {
        self.label = Some(text.into());
        self
    }

    /// Helper text shown below the control.
    #[must_use]
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Error message. A present error marks the control invalid and hides the description.
    #[must_use]
    pub fn error(mut self, text: impl Into<String>) -> Self {
        self.error = Some(text.into());
        self
    }

    /// Mark the field as required.
    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Disable the control.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Replace or clear the error message.
    pub fn set_error(&mut self, error: Option<String>) {
        if self.error != error {
            tracing::debug!(id = %self.id, invalid = error.is_some(), "field validity");
        }
        self.error = error;
    }

    /// The context parts read from.
    pub fn context(&self) -> FieldContext<'_> {
        FieldContext { root: self }
    }

    /// Render the whole field around `control`: label, control, then description or message.
    pub fn render(&self, control: Element) -> Result<Element, FieldError> {
        let cx = self.context();
        let mut field = Element::new("div").attr("data-field", "");
        if cx.is_invalid() {
            field.set_attr("data-invalid", "");
        }
        if cx.is_disabled() {
            field.set_attr("data-disabled", "");
        }
        Ok(field
            .opt_child(FieldLabel::new().render(Some(&cx))?)
            .child(FieldControl::render(Some(&cx), control)?)
            .opt_child(FieldDescription::render(Some(&cx))?)
            .opt_child(FieldMessage::render(Some(&cx))?))
    }
}

/// Read-only view of a [`FieldRoot`].
#[derive(Copy, Clone, Debug)]
pub struct FieldContext<'a> {
    root: &'a FieldRoot,
}

impl FieldContext<'_> {
    /// Control element id.
    pub fn id(&self) -> &str {
        &self.root.id
    }

    /// Label element id.
    pub fn label_id(&self) -> String {
        format!("{}-label", self.root.id)
    }

    /// Description element id.
    pub fn description_id(&self) -> String {
        format!("{}-description", self.root.id)
    }

    /// Error message element id.
    pub fn message_id(&self) -> String {
        format!("{}-message", self.root.id)
    }

    /// Label text.
    pub fn label(&self) -> Option<&str> {
        self.root.label.as_deref()
    }

    /// Helper text.
    pub fn description(&self) -> Option<&str> {
        self.root.description.as_deref()
    }

    /// Error message.
    pub fn error(&self) -> Option<&str> {
        self.root.error.as_deref()
    }

    /// Whether an error is present.
    pub fn is_invalid(&self) -> bool {
        self.root.error.is_some()
    }

    /// Whether the field is required.
    pub fn is_required(&self) -> bool {
        self.root.required
    }

    /// Whether the control is disabled.
    pub fn is_disabled(&self) -> bool {
        self.root.disabled
    }

    /// Id of the element currently describing the control.
    ///
    /// The error message while invalid, otherwise the description if there is one.
    pub fn described_by(&self) -> Option<String> {
        if self.is_invalid() {
            Some(self.message_id())
        } else if self.root.description.is_some() {
            Some(self.description_id())
        } else {
            None
        }
    }
}

/// Resolve an optional context for a part.
pub(crate) fn use_field<'c, 'a>(
    cx: Option<&'c FieldContext<'a>>,
    component: &'static str,
) -> Result<&'c FieldContext<'a>, FieldError> {
    cx.ok_or(FieldError::MissingContext { component })
}
