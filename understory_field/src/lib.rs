// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_field --heading-base-level=0

//! Understory Field: a headless form field wrapper.
//!
//! ## Overview
//!
//! A field ties a control (a select trigger, a text input, anything) to its label, its
//! helper text, and its error message. [`FieldRoot`](crate::root::FieldRoot) holds that data and
//! hands out a [`FieldContext`](crate::root::FieldContext); each part reads the context and
//! renders an [`Element`](understory_markup::Element) with the ARIA links filled in:
//!
//! - [`FieldLabel`](crate::parts::FieldLabel): `<label for=…>`, with a marker when required.
//! - [`FieldControl`](crate::parts::FieldControl): decorates a caller-rendered control with `id`,
//!   `aria-describedby`, `aria-invalid`, `aria-required` and `disabled`.
//! - [`FieldDescription`](crate::parts::FieldDescription): helper text, hidden while an error shows.
//! - [`FieldMessage`](crate::parts::FieldMessage): the error text, `role="alert"`.
//!
//! A part rendered without a context fails with
//! [`FieldError::MissingContext`](crate::error::FieldError::MissingContext).
//!
//! ## Example
//!
//! ```
//! use understory_field::parts::{FieldControl, FieldMessage};
//! use understory_field::root::FieldRoot;
//! use understory_markup::Element;
//!
//! let field = FieldRoot::new("email")
//!     .label("Email")
//!     .required(true)
//!     .error("Enter a valid address");
//! let cx = field.context();
//!
//! let input = FieldControl::render(Some(&cx), Element::new("input")).unwrap();
//! assert_eq!(input.get_attr("id"), Some("email"));
//! assert_eq!(input.get_attr("aria-invalid"), Some("true"));
//! assert_eq!(input.get_attr("aria-describedby"), Some("email-message"));
//!
//! let message = FieldMessage::render(Some(&cx)).unwrap().unwrap();
//! assert_eq!(message.get_attr("role"), Some("alert"));
//! ```

#![no_std]

extern crate alloc;

pub mod error;
pub mod parts;
pub mod root;

pub use error::FieldError;
pub use root::{FieldContext, FieldRoot};
