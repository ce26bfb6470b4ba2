// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Field errors.

use thiserror::Error;

/// Misuse of the field parts.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    /// A part was rendered without a [`FieldContext`](crate::root::FieldContext).
    #[error("`{component}` must be used within `FieldRoot`")]
    MissingContext {
        /// Part that required the context.
        component: &'static str,
    },
}
