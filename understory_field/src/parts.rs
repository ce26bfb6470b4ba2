// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Field parts.
//!
//! Every part takes an `Option<&FieldContext>`. Parts whose content is absent (no label text,
//! no description, no error) render `None`.

use alloc::string::String;

use understory_markup::Element;

use crate::error::FieldError;
use crate::root::{FieldContext, use_field};

/// The `<label>` for the control.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldLabel {
    text: Option<String>,
}

impl FieldLabel {
    /// A label showing the root's label text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the label text.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Render the label, or nothing when there is no text.
    pub fn render(&self, cx: Option<&FieldContext<'_>>) -> Result<Option<Element>, FieldError> {
        let cx = use_field(cx, "FieldLabel")?;
        let Some(text) = self.text.as_deref().or(cx.label()) else {
            return Ok(None);
        };
        let mut label = Element::new("label")
            .attr("id", cx.label_id())
            .attr("for", cx.id())
            .text(text);
        if cx.is_required() {
            label.push(
                Element::new("span")
                    .attr("aria-hidden", "true")
                    .attr("data-required", "")
                    .text("*"),
            );
        }
        if cx.is_disabled() {
            label.set_attr("data-disabled", "");
        }
        Ok(Some(label))
    }
}

/// Wires a caller-rendered control into the field.
#[derive(Copy, Clone, Debug)]
pub struct FieldControl;

impl FieldControl {
    /// Decorate `control` with the field's id and ARIA state.
    ///
    /// Attributes already on `control` are overwritten, except that `aria-describedby` is
    /// removed when nothing describes the control.
    pub fn render(cx: Option<&FieldContext<'_>>, mut control: Element) -> Result<Element, FieldError> {
        let cx = use_field(cx, "FieldControl")?;
        control.set_attr("id", cx.id());
        match cx.described_by() {
            Some(id) => control.set_attr("aria-describedby", id),
            None => {
                control.remove_attr("aria-describedby");
            }
        }
        control.set_attr("aria-invalid", if cx.is_invalid() { "true" } else { "false" });
        if cx.is_required() {
            control.set_attr("aria-required", "true");
        }
        if cx.is_disabled() {
            control.set_attr("disabled", "");
        }
        Ok(control)
    }
}

/// Helper text below the control.
#[derive(Copy, Clone, Debug)]
pub struct FieldDescription;

impl FieldDescription {
    /// Render the description. Nothing while an error is shown or when there is no text.
    pub fn render(cx: Option<&FieldContext<'_>>) -> Result<Option<Element>, FieldError> {
        let cx = use_field(cx, "FieldDescription")?;
        if cx.is_invalid() {
            return Ok(None);
        }
        Ok(cx.description().map(|text| {
            Element::new("p")
                .attr("id", cx.description_id())
                .attr("data-description", "")
                .text(text)
        }))
    }
}

/// The error message.
#[derive(Copy, Clone, Debug)]
pub struct FieldMessage;

impl FieldMessage {
    /// Render the error message, or nothing while the field is valid.
    pub fn render(cx: Option<&FieldContext<'_>>) -> Result<Option<Element>, FieldError> {
        let cx = use_field(cx, "FieldMessage")?;
        Ok(cx.error().map(|text| {
            Element::new("p")
                .attr("id", cx.message_id())
                .attr("role", "alert")
                .text(text)
        }))
    }
}
